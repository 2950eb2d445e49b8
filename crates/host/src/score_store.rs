//! High-score record kept in a one-line text file.
//!
//! The file holds a single decimal number. A missing or unreadable file reads
//! as 0; failed writes are logged and dropped so a read-only home directory
//! never stops a game.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::ScoreStore;

const FILE_NAME: &str = ".tui-match3-score";

#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$HOME/.tui-match3-score`, or the working directory without a home.
    pub fn default_path() -> PathBuf {
        env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_default()
            .join(FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the record, distinguishing "no file" (`Ok(None)`) from failures.
    pub fn try_load(&self) -> Result<Option<u32>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err).with_context(|| format!("read {}", self.path.display()))
            }
        };
        let best = text
            .trim()
            .parse()
            .with_context(|| format!("parse score in {}", self.path.display()))?;
        Ok(Some(best))
    }

    pub fn try_save(&self, score: u32) -> Result<()> {
        fs::write(&self.path, score.to_string())
            .with_context(|| format!("write {}", self.path.display()))
    }
}

impl ScoreStore for FileScoreStore {
    fn load_best(&mut self) -> u32 {
        match self.try_load() {
            Ok(best) => best.unwrap_or(0),
            Err(err) => {
                log::warn!("ignoring high score: {:#}", err);
                0
            }
        }
    }

    fn save_best(&mut self, score: u32) {
        if let Err(err) = self.try_save(score) {
            log::warn!("high score not saved: {:#}", err);
        }
    }
}
