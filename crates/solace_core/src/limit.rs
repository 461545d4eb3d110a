//! Daily quota allowances.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A daily request allowance.
///
/// An explicit tagged case rather than a very-large-number sentinel, so an
/// unlimited tier cannot be confused with a merely large quota and never
/// participates in comparison arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Limit {
    /// No daily cap; the usage counter is bypassed entirely.
    Unlimited,
    /// At most this many requests per quota window.
    Limited(u32),
}

impl Limit {
    /// True when there is no cap.
    pub fn is_unlimited(&self) -> bool {
        matches!(self, Limit::Unlimited)
    }

    /// Whether another request fits after `count` have been used.
    pub fn allows(&self, count: u32) -> bool {
        match self {
            Limit::Unlimited => true,
            Limit::Limited(max) => count < *max,
        }
    }

    /// Requests left after `count` have been used.
    ///
    /// Returns `None` for an unlimited allowance; callers formatting
    /// remaining-quota messages branch on that case rather than on a
    /// sentinel value.
    pub fn remaining_after(&self, count: u32) -> Option<u32> {
        match self {
            Limit::Unlimited => None,
            Limit::Limited(max) => Some(max.saturating_sub(count)),
        }
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Limit::Unlimited => f.write_str("unlimited"),
            Limit::Limited(max) => write!(f, "{}", max),
        }
    }
}

// Serialized as the integer cap, or the string "unlimited". This matches the
// TOML convention where omitting `daily_limit` means unlimited.
impl Serialize for Limit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Limit::Unlimited => serializer.serialize_str("unlimited"),
            Limit::Limited(max) => serializer.serialize_u32(*max),
        }
    }
}

impl<'de> Deserialize<'de> for Limit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LimitVisitor;

        impl Visitor<'_> for LimitVisitor {
            type Value = Limit;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a non-negative integer or the string \"unlimited\"")
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Limit, E> {
                u32::try_from(value)
                    .map(Limit::Limited)
                    .map_err(|_| E::custom(format!("daily limit {} out of range", value)))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Limit, E> {
                u32::try_from(value)
                    .map(Limit::Limited)
                    .map_err(|_| E::custom(format!("daily limit {} out of range", value)))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Limit, E> {
                if value.eq_ignore_ascii_case("unlimited") {
                    Ok(Limit::Unlimited)
                } else {
                    Err(E::custom(format!("unknown limit '{}'", value)))
                }
            }
        }

        deserializer.deserialize_any(LimitVisitor)
    }
}
