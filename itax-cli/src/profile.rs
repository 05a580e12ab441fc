//! Persistence of the last-used calculation input.
//!
//! The profile is a single JSON file holding one [`TaxInput`] plus the time
//! it was saved. It is written only on explicit request and loaded only on
//! explicit request; the engine itself never touches it.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use itax_core::models::TaxInput;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors from loading or saving the profile file.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("no saved input at '{0}'")]
    NotFound(PathBuf),

    #[error("cannot access profile: {0}")]
    Io(#[from] std::io::Error),

    #[error("profile is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The persisted envelope: the input itself plus when it was saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedProfile {
    pub input: TaxInput,
    pub saved_at: DateTime<Utc>,
}

/// Default profile location, next to the working directory.
pub fn default_path() -> PathBuf {
    PathBuf::from("itax-profile.json")
}

/// Loads the saved profile.
///
/// # Errors
///
/// [`ProfileError::NotFound`] when the file does not exist,
/// [`ProfileError::Malformed`] when it exists but is not a valid profile.
pub fn load(path: &Path) -> Result<SavedProfile, ProfileError> {
    let contents = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ProfileError::NotFound(path.to_path_buf())
        } else {
            ProfileError::Io(e)
        }
    })?;

    let profile = serde_json::from_str(&contents)?;
    debug!(path = %path.display(), "profile loaded");
    Ok(profile)
}

/// Saves `input` as the new profile, replacing any previous one.
pub fn save(
    path: &Path,
    input: &TaxInput,
) -> Result<(), ProfileError> {
    let profile = SavedProfile {
        input: input.clone(),
        saved_at: Utc::now(),
    };

    fs::write(path, serde_json::to_string_pretty(&profile)?)?;
    debug!(path = %path.display(), "profile saved");
    Ok(())
}

/// Deletes the profile file. Returns whether a file was actually removed.
pub fn clear(path: &Path) -> Result<bool, ProfileError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(ProfileError::Io(e)),
    }
}
