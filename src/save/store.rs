//! Save file persistence

use super::{SaveError, SaveFile};
use crate::puzzle::Seed;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default save location: `<home>/.subset/savefile.txt`
#[must_use]
pub fn default_save_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".subset").join("savefile.txt"))
}

/// Reads, writes and removes the save file at one path
#[derive(Debug, Clone)]
pub struct SaveStore {
    path: PathBuf,
}

impl SaveStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location in the user's home directory
    ///
    /// # Errors
    ///
    /// Returns `SaveError::NoHomeDir` if the home directory cannot be determined.
    pub fn at_default_location() -> Result<Self, SaveError> {
        default_save_path().map(Self::new).ok_or(SaveError::NoHomeDir)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved game, if there is one
    ///
    /// A missing file means there is no game to resume and is not an error.
    ///
    /// # Errors
    ///
    /// Returns `SaveError::Io` if the file exists but cannot be read, or a parse
    /// error if its seed is malformed or missing.
    pub fn load(&self) -> Result<Option<SaveFile>, SaveError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("no save file at {}", self.path.display());
                return Ok(None);
            }
            Err(source) => return Err(self.io_error(source)),
        };

        let save = SaveFile::parse(&text)?;
        log::info!(
            "loaded save from {}: seed {:?}, {} found words",
            self.path.display(),
            save.seed.map(Seed::value),
            save.found.len()
        );
        Ok(Some(save))
    }

    /// Write the game, creating the save directory if needed
    ///
    /// # Errors
    ///
    /// Returns `SaveError::Io` if the directory or file cannot be written.
    pub fn save(&self, save: &SaveFile) -> Result<(), SaveError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }

        fs::write(&self.path, save.render()).map_err(|source| self.io_error(source))?;
        log::info!(
            "saved {} found words to {}",
            save.found.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Remove the save file; a file that is already gone counts as removed
    ///
    /// # Errors
    ///
    /// Returns `SaveError::Io` for failures other than the file being absent.
    pub fn delete(&self) -> Result<(), SaveError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                log::info!("deleted save file {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(self.io_error(source)),
        }
    }

    fn io_error(&self, source: io::Error) -> SaveError {
        SaveError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
