//! JSON file helpers and the ~/.crawler/ data directory.

use crate::core::constants::{DATA_DIR_NAME, LOG_FILENAME, SAVE_FILENAME};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Why a save or load did not go through.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("save file I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("save file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Get the ~/.crawler/ directory path, creating it if needed.
pub fn crawler_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(DATA_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Default location of the save file.
pub fn default_save_path() -> io::Result<PathBuf> {
    Ok(crawler_dir()?.join(SAVE_FILENAME))
}

/// Default location of the frontend's log file.
pub fn default_log_path() -> io::Result<PathBuf> {
    Ok(crawler_dir()?.join(LOG_FILENAME))
}

/// Write a value as pretty-printed (2-space) JSON.
pub fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<(), SaveError> {
    let mut json = serde_json::to_string_pretty(data)?;
    json.push('\n');
    fs::write(path, json)?;
    Ok(())
}

/// Read and parse a JSON file in one go. Nothing is returned on partial reads.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, SaveError> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}
