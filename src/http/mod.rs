//! HTTP Protocol.
mod method;
mod status;

pub use method::{Method, InvalidMethod};
pub use status::StatusCode;
