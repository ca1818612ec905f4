//! Lenient serde helpers for the upstream wire format.
//!
//! The pricing API is not strict about types: prices can be `null`, ids can
//! be numbers or strings, lists can be missing. A single odd field must not
//! drop the whole response, so these helpers map anything unexpected to
//! "absent" instead of erroring.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Optional finite `f64`. Numbers and numeric strings are accepted; `null`,
/// NaN, infinities and anything else decode to `None`.
pub mod number {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().and_then(as_f64).filter(|v| v.is_finite()))
    }

    fn as_f64(value: &Value) -> Option<f64> {
        match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }
}

/// Optional integer timestamp. Fractional numbers are truncated.
pub mod timestamp {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.and_then(|v| match v {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64)),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        }))
    }
}

/// String field that may arrive as a number or `null`.
pub mod text {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::String(s)) => s,
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => String::new(),
        })
    }
}

/// List that may be `null`.
pub mod list {
    use super::*;

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
    }
}
