//! # Persisted Inputs
//!
//! The shell remembers the last submitted raw field values and re-hydrates
//! them on the next run, so a repeat quote only needs the flags that changed.
//! Values are stored exactly as submitted (raw strings, not parsed numbers);
//! the quote flow re-validates them on every use.
//!
//! The file lives in the platform config directory
//! (e.g. `~/.config/dopc/last_inputs.toml` on Linux). Load failures are
//! logged and treated as "nothing persisted" - a corrupt file must never
//! block a quote.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// The last submitted field values, as raw strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedInputs {
    pub cart_value: String,
    pub latitude: String,
    pub longitude: String,
    pub venue_id: String,

    /// When these values were submitted.
    pub saved_at: DateTime<Utc>,
}

/// Returns the default persistence path, if a config directory exists.
pub fn default_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "dopc", "dopc")
        .map(|dirs| dirs.config_dir().join("last_inputs.toml"))
}

/// Loads persisted inputs, or `None` if absent or unreadable.
pub fn load(path: &Path) -> Option<PersistedInputs> {
    if !path.exists() {
        debug!(?path, "No persisted inputs");
        return None;
    }

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            warn!(?path, error = %e, "Failed to read persisted inputs");
            return None;
        }
    };

    match toml::from_str(&contents) {
        Ok(inputs) => Some(inputs),
        Err(e) => {
            warn!(?path, error = %e, "Persisted inputs file is corrupt, ignoring");
            None
        }
    }
}

/// Saves the inputs, creating parent directories as needed.
///
/// Best-effort: the caller logs a failure and moves on - persistence must
/// never fail a successful quote.
pub fn save(path: &Path, inputs: &PersistedInputs) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let contents = toml::to_string_pretty(inputs)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    std::fs::write(path, contents)?;

    debug!(?path, "Persisted inputs saved");
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
