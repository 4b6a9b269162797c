//! Body and query-string serialization utilities.

use bytes::Bytes;
use serde::Serializer;

use crate::Result;

/// MIME type sent with every request.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Serialize a value to JSON bytes.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Example
///
/// ```
/// use unsplash_core::to_json;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Title { title: String }
///
/// let bytes = to_json(&Title { title: "Dogs".to_string() }).expect("serialize");
/// assert_eq!(bytes.as_ref(), br#"{"title":"Dogs"}"#);
/// ```
pub fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<Bytes> {
    serde_json::to_vec(value)
        .map(Bytes::from)
        .map_err(Into::into)
}

/// Serialize a value to a query string.
///
/// Field names come from `#[serde(rename)]`, and fields guarded by
/// `skip_serializing_if` are left out entirely, so an unset option never
/// shows up as `key=` in the URL.
///
/// # Errors
///
/// Returns an error if query serialization fails.
///
/// # Example
///
/// ```
/// use unsplash_core::to_query_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Random {
///     #[serde(skip_serializing_if = "Option::is_none")]
///     username: Option<String>,
///     count: u32,
/// }
///
/// let query = to_query_string(&Random { username: None, count: 2 }).expect("serialize");
/// assert_eq!(query, "count=2");
/// ```
pub fn to_query_string<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_html_form::to_string(value).map_err(Into::into)
}

/// Deserialize JSON bytes to a value with path-aware error messages.
///
/// # Errors
///
/// Returns [`crate::Error::JsonDeserialization`] carrying the path of the
/// offending field (e.g. `"user.links.html"`).
///
/// # Example
///
/// ```
/// use unsplash_core::from_json;
/// use serde::Deserialize;
///
/// #[derive(Debug, PartialEq, Deserialize)]
/// struct Id { id: String }
///
/// let id: Id = from_json(br#"{"id":"abc"}"#).expect("deserialize");
/// assert_eq!(id, Id { id: "abc".to_string() });
/// ```
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        crate::Error::json_deserialization(e.path().to_string(), e.inner().to_string())
    })
}

/// Serialize a list as a single comma-separated query value (`1,2,3`).
///
/// Use with `#[serde(serialize_with = "unsplash_core::comma_separated")]`
/// together with `skip_serializing_if = "Vec::is_empty"`.
pub fn comma_separated<S, T>(values: &[T], serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
    T: std::fmt::Display,
{
    let joined = values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    serializer.serialize_str(&joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_json_serialize() {
        #[derive(serde::Serialize)]
        struct Collection {
            title: String,
            private: bool,
        }

        let bytes = to_json(&Collection {
            title: "Dogs".to_string(),
            private: true,
        })
        .expect("serialize");
        assert_eq!(bytes.as_ref(), br#"{"title":"Dogs","private":true}"#);
    }

    #[test]
    fn query_string_keeps_declared_keys_and_omits_empty() {
        #[derive(serde::Serialize)]
        struct Opt {
            page: i32,
            #[serde(rename = "per_page")]
            per: i32,
            #[serde(skip_serializing_if = "String::is_empty")]
            order_by: String,
        }

        let query = to_query_string(&Opt {
            page: 2,
            per: 10,
            order_by: String::new(),
        })
        .expect("serialize");
        assert_eq!(query, "page=2&per_page=10");
    }

    #[test]
    fn comma_separated_values() {
        #[derive(serde::Serialize)]
        struct Random {
            #[serde(
                serialize_with = "comma_separated",
                skip_serializing_if = "Vec::is_empty"
            )]
            collections: Vec<u64>,
        }

        let query = to_query_string(&Random {
            collections: vec![1, 22, 333],
        })
        .expect("serialize");
        assert_eq!(query, "collections=1%2C22%2C333");

        let query = to_query_string(&Random {
            collections: Vec::new(),
        })
        .expect("serialize");
        assert_eq!(query, "");
    }

    #[test]
    fn from_json_syntax_error() {
        #[derive(Debug, serde::Deserialize)]
        struct Photo {
            #[allow(dead_code)]
            id: String,
        }

        let result: Result<Photo> = from_json(b"not json");
        let err = result.expect_err("should fail");
        assert!(err.to_string().contains("JSON deserialization error"));
    }

    #[test]
    fn from_json_missing_field_error_with_path() {
        #[derive(Debug, serde::Deserialize)]
        struct Links {
            #[allow(dead_code)]
            html: String,
        }

        #[derive(Debug, serde::Deserialize)]
        struct User {
            #[allow(dead_code)]
            links: Links,
        }

        let result: Result<User> = from_json(br#"{"links":{}}"#);
        let msg = result.expect_err("should fail").to_string();
        assert!(msg.contains("links"), "Expected path 'links' in error: {msg}");
        assert!(msg.contains("html"), "Expected field 'html' in error: {msg}");
    }
}
