use serde::{Deserialize, Serialize};

use crate::storage::format::STORAGE_KEY;

/// Host-configurable settings for a `CareerTracker`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Key under which the whole collection is stored as one JSON blob.
    pub storage_key: String,

    /// Default season names are "{prefix} {n}" (e.g., "Temporada 2").
    pub season_name_prefix: String,

    /// Pretty-print the stored blob and JSON exports.
    pub pretty_json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            season_name_prefix: "Temporada".to_string(),
            pretty_json: false,
        }
    }
}
