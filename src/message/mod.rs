//! Message Model.
//!
//! Structured requests and responses that the [`convert`][crate::convert] layer fills from and
//! writes into a [`HeaderMap`][crate::headers::HeaderMap].
mod message;
mod representation;
mod client;
mod server;
mod conditions;
mod request;
mod response;

pub use message::Message;
pub use representation::Representation;
pub use client::ClientInfo;
pub use server::ServerInfo;
pub use conditions::Conditions;
pub use request::Request;
pub use response::Response;

/// Agent name written in `User-Agent` and `Server` when none is set.
pub const DEFAULT_AGENT: &str = concat!("headwork/", env!("CARGO_PKG_VERSION"));

#[cfg(test)]
mod test;

// ===== Macros =====

/// Accessors of the [`Message`] fields shared by requests and responses.
macro_rules! delegate {
    (@CORE
        $(#[$rdoc:meta])*
        $mref:ident(),
        $(#[$mdoc:meta])*
        $mmut:ident() -> $ty:ty
    ) => {
        $(#[$rdoc])*
        #[inline]
        pub fn $mref(&self) -> &$ty {
            &self.message.$mref
        }

        $(#[$mdoc])*
        #[inline]
        pub fn $mmut(&mut self) -> &mut $ty {
            &mut self.message.$mref
        }
    };
    (
        $(
            $(#[$rdoc:meta])*
            $mref:ident(),
            $(#[$mdoc:meta])*
            $mmut:ident() -> $ty:ty;
        )*
    ) => {
        $(
            delegate! {
                @CORE
                $(#[$rdoc])*
                $mref(),
                $(#[$mdoc])*
                $mmut() -> $ty
            }
        )*
    };
}

/// Expands the [`delegate`] accessors for every [`Message`] field.
macro_rules! message_fields {
    () => {
        delegate! {
            /// Returns shared reference to the message date.
            date(),
            /// Returns mutable reference to the message date.
            date_mut() -> Option<std::time::SystemTime>;

            /// Returns shared reference to the cache directives.
            cache_directives(),
            /// Returns mutable reference to the cache directives.
            cache_directives_mut() -> Vec<crate::data::CacheDirective>;

            /// Returns shared reference to the intermediary recipients.
            recipients_info(),
            /// Returns mutable reference to the intermediary recipients.
            recipients_info_mut() -> Vec<crate::data::RecipientInfo>;

            /// Returns shared reference to the warnings.
            warnings(),
            /// Returns mutable reference to the warnings.
            warnings_mut() -> Vec<crate::data::Warning>;

            /// Returns shared reference to the entity.
            entity(),
            /// Returns mutable reference to the entity.
            entity_mut() -> Option<crate::message::Representation>;

            /// Returns shared reference to the extension headers.
            headers(),
            /// Returns mutable reference to the extension headers.
            headers_mut() -> crate::headers::HeaderMap;
        }
    };
}

pub(crate) use {delegate, message_fields};
