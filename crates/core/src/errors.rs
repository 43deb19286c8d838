use thiserror::Error;

/// Unified error type for the entire career-tracker-core library.
///
/// Lookups that miss (unknown mode id, season index out of range) are reported
/// by the repository as `bool`/`Option` results, not through this type.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Storage ─────────────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("File I/O error: {0}")]
    FileIO(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    // ── Business Logic ──────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Career mode not found: {0}")]
    ModeNotFound(String),

    #[error("Season {index} not found in career mode {mode_id}")]
    SeasonNotFound { mode_id: String, index: usize },

    #[error("Player {index} not found in season '{season}'")]
    PlayerNotFound { season: String, index: usize },
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
