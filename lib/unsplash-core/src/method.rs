//! HTTP method types.

use derive_more::Display;

/// HTTP verbs used by the Unsplash API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Method {
    /// GET method - read a resource or a listing.
    #[display("GET")]
    Get,
    /// POST method - create a resource (collections, likes).
    #[display("POST")]
    Post,
    /// PUT method - update a resource.
    #[display("PUT")]
    Put,
    /// DELETE method - remove a resource or a relation.
    #[display("DELETE")]
    Delete,
}

impl Method {
    /// Returns `true` if the method does not modify resources.
    #[must_use]
    pub const fn is_safe(&self) -> bool {
        matches!(self, Self::Get)
    }
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Put => Self::PUT,
            Method::Delete => Self::DELETE,
        }
    }
}

impl TryFrom<http::Method> for Method {
    type Error = crate::Error;

    fn try_from(method: http::Method) -> Result<Self, Self::Error> {
        match method {
            http::Method::GET => Ok(Self::Get),
            http::Method::POST => Ok(Self::Post),
            http::Method::PUT => Ok(Self::Put),
            http::Method::DELETE => Ok(Self::Delete),
            other => Err(crate::Error::InvalidRequest(format!(
                "unsupported HTTP method: {other}"
            ))),
        }
    }
}
