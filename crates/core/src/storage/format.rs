use crate::errors::CoreError;
use crate::models::career_mode::CareerMode;

/// Key the collection has always been stored under.
pub const STORAGE_KEY: &str = "fifa_career_modes";

/// Parse a stored blob into the career mode collection.
///
/// There is no schema version. Missing or `null` collections and ledger keys
/// are backfilled with empty defaults during deserialization, and a `null`
/// top-level value reads as an empty collection.
pub fn decode(blob: &str) -> Result<Vec<CareerMode>, CoreError> {
    let modes: Option<Vec<CareerMode>> = serde_json::from_str(blob)
        .map_err(|e| CoreError::Deserialization(format!("Failed to parse career modes: {e}")))?;
    Ok(modes.unwrap_or_default())
}

/// Serialize the full collection for storage.
pub fn encode(modes: &[CareerMode], pretty: bool) -> Result<String, CoreError> {
    let result = if pretty {
        serde_json::to_string_pretty(modes)
    } else {
        serde_json::to_string(modes)
    };
    result.map_err(|e| CoreError::Serialization(format!("Failed to serialize career modes: {e}")))
}
