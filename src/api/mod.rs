//! API response types and list-query utilities

pub mod query;
pub mod response;

pub use query::ListParams;
pub use response::{DataResponse, ListResponse, MessageResponse};
