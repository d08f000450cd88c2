//! JSON projections for the variant models.

use crate::error::Result;

/// Serialize a model into a loose JSON value.
pub trait ToJson {
    fn to_json(&self) -> Result<serde_json::Value>;
}
