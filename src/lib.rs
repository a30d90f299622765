//! HTTP Header Toolkit
//!
//! Reading and writing of HTTP/1.1 header values, and the mapping between a raw [`HeaderMap`]
//! and a structured [`Request`] or [`Response`].
//!
//! - [`grammar`], the header value reader and writer, with the typed values of [`data`]
//! - [`message`], the structured message model
//! - [`convert`], the aggregation between the two
//!
//! [`HeaderMap`]: headers::HeaderMap
//! [`Request`]: message::Request
//! [`Response`]: message::Response
#![warn(missing_debug_implementations)]

mod log;
pub mod matches;

pub mod http;
pub mod headers;
pub mod data;
pub mod grammar;
pub mod message;
pub mod convert;
