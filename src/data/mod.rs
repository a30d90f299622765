//! Typed header values.
//!
//! These are what the [`grammar`][crate::grammar] readers produce and the writers consume.
mod parameter;
mod metadata;
mod preference;
mod content_type;
mod disposition;
mod tag;
mod range;
mod digest;
mod dimension;
mod challenge;
mod cookie;
mod warning;
mod product;
mod cache;
mod expectation;
mod recipient;
mod retry;

pub use parameter::{Parameter, Parameters};
pub use metadata::{Metadata, MediaType, Language, CharacterSet, Encoding};
pub use preference::Preference;
pub use content_type::ContentType;
pub use disposition::Disposition;
pub use tag::Tag;
pub use range::Range;
pub use digest::Digest;
pub use dimension::{Dimension, Dimensions};
pub use challenge::{ChallengeScheme, ChallengeMessage, ChallengeRequest, ChallengeResponse};
pub use cookie::{Cookie, CookieSetting};
pub use warning::Warning;
pub use product::Product;
pub use cache::CacheDirective;
pub use expectation::Expectation;
pub use recipient::RecipientInfo;
pub use retry::RetryAfter;
