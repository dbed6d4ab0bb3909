//! Enforcement mode for membership reconciliation

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Membership enforcement policy.
///
/// Determines what happens to current members that are not in the declared
/// desired list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnforcementMode {
    /// Desired members are guaranteed present; extra current members are
    /// left untouched.
    #[default]
    Partial,

    /// Final membership equals exactly the desired set; extra current
    /// members are removed.
    Comprehensive,
}

impl EnforcementMode {
    /// Check whether this mode purges members not in the desired list.
    pub fn purges_extras(&self) -> bool {
        matches!(self, EnforcementMode::Comprehensive)
    }
}

impl FromStr for EnforcementMode {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "partial" | "additive" | "false" => Ok(EnforcementMode::Partial),
            "comprehensive" | "exact" | "true" => Ok(EnforcementMode::Comprehensive),
            _ => Err(Error::InvalidMode {
                mode: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for EnforcementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnforcementMode::Partial => write!(f, "partial"),
            EnforcementMode::Comprehensive => write!(f, "comprehensive"),
        }
    }
}

// Hand-written so manifests can use the historical boolean form
// (false = partial, true = comprehensive) as well as the spelled-out names.
impl<'de> Deserialize<'de> for EnforcementMode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ModeVisitor;

        impl<'de> Visitor<'de> for ModeVisitor {
            type Value = EnforcementMode;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a boolean or one of \"partial\" / \"comprehensive\"")
            }

            fn visit_bool<E>(self, comprehensive: bool) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(if comprehensive {
                    EnforcementMode::Comprehensive
                } else {
                    EnforcementMode::Partial
                })
            }

            fn visit_str<E>(self, s: &str) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                s.parse().map_err(|_| {
                    de::Error::invalid_value(de::Unexpected::Str(s), &self)
                })
            }
        }

        deserializer.deserialize_any(ModeVisitor)
    }
}
