//! Strongly-typed identifier types for stored entities.
//!
//! Identifiers are the integer primary keys SQLite assigns on insert. The
//! newtype keeps them from being confused with night counts or timestamps,
//! which are integers too.

macro_rules! new_id {
    ($struct:ident) => {
        new_id!($struct, "A newtype wrapper around an integer primary key");
    };
    ($struct:ident, $doc:literal) => {
        #[doc = $doc]
        #[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
            sqlx::Type,
        )]
        #[serde(transparent)]
        #[sqlx(transparent)]
        pub struct $struct(pub i64);

        impl From<$struct> for i64 {
            fn from(value: $struct) -> Self {
                value.0
            }
        }

        impl From<i64> for $struct {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $struct {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl std::str::FromStr for $struct {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }
    };
}

new_id!(BookingId, "Unique identifier for a booking");
