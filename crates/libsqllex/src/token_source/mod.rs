//! The seam between an external SQL scanner and this crate.

mod sql_token_source;

pub use sql_token_source::SqlTokenSource;
