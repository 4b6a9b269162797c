//! Resource services borrowed from an [`Unsplash`](crate::Unsplash) value.
//!
//! Every operation checks its arguments before building a request, so an
//! empty id or a bad option never reaches the network.

mod collections;
mod photos;
mod search;
mod users;

pub use collections::CollectionsService;
pub use photos::PhotosService;
pub use search::SearchService;
pub use users::UsersService;

use crate::{Error, ListOpt, Result};

fn non_empty<'s>(value: &'s str, what: &str) -> Result<&'s str> {
    if value.is_empty() {
        return Err(Error::illegal_argument(format!("{what} cannot be empty")));
    }
    Ok(value)
}

fn non_zero(value: u64, what: &str) -> Result<String> {
    if value == 0 {
        return Err(Error::illegal_argument(format!("{what} cannot be 0")));
    }
    Ok(value.to_string())
}

// No options means the first page of popular items.
fn list_opt(opt: Option<&ListOpt>) -> Result<ListOpt> {
    let mut opt = opt.cloned().unwrap_or_else(ListOpt::popular);
    opt.validate()?;
    Ok(opt)
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};

    use super::*;
    use crate::OrderBy;

    #[test]
    fn missing_list_options_mean_popular() {
        let opt = list_opt(None).expect("defaults");
        check!(opt == ListOpt::new(1, 10, OrderBy::Popular));
    }

    #[test]
    fn list_options_are_normalized() {
        let opt = list_opt(Some(&ListOpt::default())).expect("normalized");
        check!(opt == ListOpt::new(1, 10, OrderBy::Latest));

        let bad = ListOpt {
            order_by: "random".to_string(),
            ..ListOpt::default()
        };
        let_assert!(Err(Error::InvalidOptions(_)) = list_opt(Some(&bad)));
    }

    #[test]
    fn ids_are_checked() {
        let_assert!(Err(Error::IllegalArgument(msg)) = non_empty("", "photo id"));
        check!(msg == "photo id cannot be empty");
        check!(non_empty("abc", "photo id").ok() == Some("abc"));
        let_assert!(Err(Error::IllegalArgument(_)) = non_zero(0, "collection id"));
        check!(non_zero(42, "collection id").ok() == Some("42".to_string()));
    }
}
