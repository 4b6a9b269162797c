//! Prelude module for convenient imports.
//!
//! ```
//! use unsplash_core::prelude::*;
//! ```

pub use crate::{
    Endpoint, Error, HttpClient, HttpResponse, ListOpt, Method, OrderBy, Pagination, RateLimit,
    Request, Response, Result, SearchOpt,
};
