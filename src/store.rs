//! Profile persistence (load/save to disk).
//!
//! Thin boundary adapter: the engine itself never touches storage. The
//! caller loads a profile, runs engine entry points, and saves the returned
//! value whole; partial writes are never valid.

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::profile::Profile;

/// Get the default profile save file path (~/.studypath/profile.json).
pub fn profile_save_path() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(home_dir.join(".studypath").join("profile.json"))
}

/// Loads and saves one user's profile as pretty-printed JSON.
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    /// Store at the platform default location.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            path: profile_save_path()?,
        })
    }

    /// Store at an explicit path (used by tests).
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the profile, or a fresh one if the file is missing or unreadable.
    pub fn load(&self) -> Profile {
        match fs::read_to_string(&self.path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
            Err(_) => Profile::default(),
        }
    }

    /// Save the profile to disk, creating the parent directory if needed.
    pub fn save(&self, profile: &Profile) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(profile)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        fs::write(&self.path, json)?;
        Ok(())
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}
