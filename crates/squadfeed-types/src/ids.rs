//! Type-safe identifier wrappers.
//!
//! Game-assigned identifiers (player slot, team, squad) are small integers
//! and get a `Copy` newtype each so they cannot be mixed up at compile time.
//! The platform identity ([`SteamId`]) is an opaque string: it is the only
//! identity that stays stable across reconnects.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Generates a newtype wrapper around a numeric game identifier.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident($inner:ty)
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub $inner);

        impl $name {
            /// Return the inner numeric value.
            pub const fn into_inner(self) -> $inner {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$inner> for $name {
            fn from(id: $inner) -> Self {
                Self(id)
            }
        }

        impl From<$name> for $inner {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// In-game player slot identifier. Reused by the server after a disconnect.
    PlayerId(u32)
}

define_id! {
    /// Team (faction side) identifier.
    TeamId(u32)
}

define_id! {
    /// Squad identifier, unique within a team.
    SquadId(u32)
}

/// Stable platform identity of a player.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SteamId(pub String);

impl SteamId {
    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier can attribute an event to a player.
    ///
    /// The connector sometimes reports an empty string for players it has
    /// not resolved yet; those are treated the same as a missing id.
    pub fn is_resolvable(&self) -> bool {
        !self.0.is_empty()
    }
}

impl core::fmt::Display for SteamId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SteamId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for SteamId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}
