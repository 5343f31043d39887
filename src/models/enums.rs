use crate::db::DatabaseError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = DatabaseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(DatabaseError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(EntryKind {
    Appointment => "appointment",
    Medication => "medication",
    Status => "status",
    Document => "document",
});

str_enum!(Severity {
    Low => "low",
    Medium => "medium",
    High => "high",
    Critical => "critical",
});

impl EntryKind {
    /// Whether records of this kind can reference a doctor. The doctor
    /// filter passes every entry of a kind without this capability.
    pub fn has_doctor_relation(&self) -> bool {
        matches!(self, Self::Appointment | Self::Medication | Self::Document)
    }

    /// Whether records of this kind carry a pain level. The pain bounds
    /// pass every entry of a kind without this capability.
    pub fn has_pain_level(&self) -> bool {
        matches!(self, Self::Status)
    }
}
