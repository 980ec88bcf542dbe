//! Identifier types for actors, content items, content types, and roles.
//!
//! All identifiers are opaque strings supplied by the host system. Two
//! identifiers are equal only when their strings are byte-for-byte equal;
//! no normalization is applied, so ownership comparisons stay exact.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier from a string.
            pub fn new<S: Into<String>>(id: S) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes the identifier, returning the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id! {
    /// Identity of an actor (a user account).
    ///
    /// # Examples
    ///
    /// ```
    /// use content_access_core::ActorId;
    ///
    /// let id = ActorId::new("u1");
    /// assert_eq!(id.as_str(), "u1");
    /// ```
    ActorId
}

string_id! {
    /// Identifier of a single content item.
    ItemId
}

string_id! {
    /// Machine name of a content type, e.g. `article`.
    ContentType
}

string_id! {
    /// Machine name of a role, e.g. `editor`.
    RoleId
}
