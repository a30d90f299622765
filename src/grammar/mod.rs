//! HTTP Header Value Grammar.
//!
//! [`HeaderReader`] is a cursor over a single header value with the `token`, `quoted-string`,
//! `comment` and `parameter` primitives, [`HeaderWriter`] is its formatting counterpart.
//!
//! Typed values implement [`ReadValue`] and [`WriteValue`], headers with a grammar that does not
//! fit a `,` separated list have dedicated functions.
//!
//! ```
//! use headwork::data::{MediaType, Preference};
//! use headwork::grammar;
//!
//! let accept: Vec<Preference<MediaType>> = grammar::read_all("text/html, */*;q=0.5").unwrap();
//! assert_eq!(accept[1].quality(), 0.5);
//! assert_eq!(grammar::write_all(&accept).unwrap(), "text/html, */*;q=0.5");
//! ```
mod error;
mod reader;
mod writer;

mod metadata;
mod disposition;
mod tag;
mod range;
mod challenge;
mod cookie;
mod warning;
mod method;
mod product;
mod cache;
mod expectation;
mod recipient;
mod dimension;
mod date;
mod digest;

pub use error::{ParseError, ParseErrorKind, FormatError};
pub use reader::{HeaderReader, ReadValue, read, read_all};
pub use writer::{HeaderWriter, WriteValue, write, write_all};

pub use range::{
    read_ranges, write_ranges, read_content_range, write_content_range, write_unsatisfied_content_range,
};
pub use challenge::{
    ChallengeWriter, read_challenge_requests, write_challenge_request, read_challenge_response,
    write_challenge_response,
};
pub use cookie::{read_cookies, write_cookies, read_cookie_setting, write_cookie_setting};
pub use product::{read_products, write_products};
pub use dimension::read_dimensions;
pub use date::{read_date, write_date, read_retry_after, write_retry_after};
pub use digest::{read_md5_digest, write_md5_digest};

#[cfg(test)]
mod test;
