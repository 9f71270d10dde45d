mod analytics;
mod item;

pub use analytics::ApiResponse;
pub use item::ItemInfo;

use serde::Deserializer;

/// Helper to deserialize a count given as an integer or an integral float
/// (`42` or `42.0`). Negative and fractional numbers are rejected.
pub(crate) fn deserialize_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct CountVisitor;

    impl<'de> Visitor<'de> for CountVisitor {
        type Value = u64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a non-negative whole number")
        }

        fn visit_u64<E>(self, value: u64) -> Result<u64, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<u64, E>
        where
            E: de::Error,
        {
            u64::try_from(value)
                .map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
        }

        fn visit_f64<E>(self, value: f64) -> Result<u64, E>
        where
            E: de::Error,
        {
            // u64::MAX as f64 rounds up to 2^64, which is already out of range
            let in_range = value >= 0.0 && value < u64::MAX as f64;
            if value.is_finite() && in_range && value.fract() == 0.0 {
                Ok(value as u64)
            } else {
                Err(E::invalid_value(de::Unexpected::Float(value), &self))
            }
        }
    }

    deserializer.deserialize_any(CountVisitor)
}
