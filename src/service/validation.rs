//! Explicit parsing of path and body input into typed values.

use crate::error::AppError;
use serde_json::Value;

pub const INC_VOTES: &str = "inc_votes";

pub struct RequestValidator;

impl RequestValidator {
    /// Parse an `:article_id` path segment. Anything that is not a base-10 `i32`
    /// is an invalid request; well-formed ids that match nothing are the store's concern.
    pub fn article_id(raw: &str) -> Result<i32, AppError> {
        raw.parse::<i32>()
            .map_err(|_| AppError::InvalidRequest(format!("article_id '{}' is not an integer", raw)))
    }

    /// Extract the vote delta from a PATCH body.
    ///
    /// A body without `inc_votes` has the wrong shape (`InvalidData`); an `inc_votes`
    /// that is not an integral number, or an integer string, is the wrong type (`InvalidRequest`).
    pub fn inc_votes(body: &Value) -> Result<i32, AppError> {
        let obj = body
            .as_object()
            .ok_or_else(|| AppError::InvalidData("body must be a JSON object".into()))?;
        let value = obj.get(INC_VOTES).ok_or_else(|| {
            let keys: Vec<&str> = obj.keys().map(String::as_str).collect();
            AppError::InvalidData(format!("expected {}, got keys {:?}", INC_VOTES, keys))
        })?;
        let delta = match value {
            Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()).or_else(|| {
                // `1.0` is the integer 1 in JSON; `1.5` is not.
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= f64::from(i32::MIN) && *f <= f64::from(i32::MAX))
                    .map(|f| f as i32)
            }),
            Value::String(s) => s.trim().parse::<i32>().ok(),
            _ => None,
        };
        delta.ok_or_else(|| AppError::InvalidRequest(format!("{} must be an integer, got {}", INC_VOTES, value)))
    }
}
