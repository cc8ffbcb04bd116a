//! Common domain type definitions
//!
//! Identifier newtypes and the small enums shared by the record models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sex of an individual
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum Sex {
    /// Male
    Male,
    /// Female
    Female,
    /// Not recorded
    #[default]
    Unset,
}

impl From<&str> for Sex {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" => Self::Male,
            "f" | "female" => Self::Female,
            _ => Self::Unset,
        }
    }
}

impl From<Option<String>> for Sex {
    fn from(value: Option<String>) -> Self {
        value.as_deref().map_or(Self::Unset, Self::from)
    }
}

impl From<Sex> for Option<String> {
    fn from(sex: Sex) -> Self {
        match sex {
            Sex::Male => Some("male".to_string()),
            Sex::Female => Some("female".to_string()),
            Sex::Unset => None,
        }
    }
}

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an identifier from its textual key
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// The textual key
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

record_id!(
    /// Opaque key of an individual in the record store
    IndividualId
);

record_id!(
    /// Opaque key of a family in the record store
    FamilyId
);
