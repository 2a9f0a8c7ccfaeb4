//! Typed ID wrappers for bots and bins.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Bots and bins live in separate namespaces: bot 0 and bin 0 are
/// different entities. Typed wrappers keep the two from being mixed up.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            /// Create a new typed ID.
            pub const fn new(id: u32) -> Self {
                Self(id)
            }

            /// The raw numeric id.
            pub const fn get(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }
    };
}

typed_id!(BotId, "Identifier of a bot, unique within the bot namespace.");
typed_id!(BinId, "Identifier of an output bin, unique within the bin namespace.");
