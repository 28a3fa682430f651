//! Newtype domain identifiers.
//!
//! Every external identity this workspace handles is represented as a distinct
//! newtype wrapping a `String`. This prevents accidentally interchanging — for
//! example — a [`GroupId`] with an [`AdminId`] even though both are opaque
//! strings under the hood.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Macro for String-wrapped newtypes.
// Generates: struct, new() returning Option<Self>, as_str(), Display.
// ---------------------------------------------------------------------------
macro_rules! string_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier, returning `None` if the value is empty.
            pub fn new(value: impl Into<String>) -> Option<Self> {
                let v = value.into();
                if v.is_empty() { None } else { Some(Self(v)) }
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Identifiers — indexing-service entities
// ---------------------------------------------------------------------------

string_id! {
    /// Opaque on-chain identifier of a membership group.
    ///
    /// Assigned when the group is created on chain; usually the hex encoding
    /// of the group's label bytes. [`crate::label::decode_group_label`] turns
    /// it back into a human-readable name where possible.
    GroupId
}

string_id! {
    /// Identity (account address) that administers one or more groups.
    AdminId
}

string_id! {
    /// Identity commitment of a single group member.
    MemberId
}

// ---------------------------------------------------------------------------
// Identifiers — hosting-API entities
// ---------------------------------------------------------------------------

string_id! {
    /// Name of a repository on the version-control hosting service, without
    /// an owner prefix (the owner is always the authenticated user).
    RepositoryName
}

string_id! {
    /// Login of an authenticated hosting-service user.
    Login
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_identifier_is_rejected() {
        assert!(GroupId::new("").is_none());
        assert!(Login::new("").is_none());
    }

    #[test]
    fn identifier_round_trips_through_as_str() {
        let admin = AdminId::new("0xA1B2").unwrap();
        assert_eq!(admin.as_str(), "0xA1B2");
        assert_eq!(admin.to_string(), "0xA1B2");
    }
}
