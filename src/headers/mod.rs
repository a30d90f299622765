//! HTTP Header Multimap.
mod name;
mod value;
mod field;
mod map;
mod iter;
mod error;

pub use name::{HeaderName, AsHeaderName, IntoHeaderName, standard, MAX_HEADER_NAME_LEN};
pub use value::{HeaderValue, MAX_HEADER_VALUE_LEN};
pub use field::Header;
pub use map::HeaderMap;
pub use iter::{Iter, GetAll};
pub use error::HeaderError;

#[cfg(test)]
mod test;
