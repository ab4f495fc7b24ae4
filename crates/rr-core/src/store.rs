//! Loading and saving the configuration document.
//!
//! A [`ConfigStore`] is the single owner of the in-memory [`Configuration`]
//! for one file. Every save overwrites the whole document: two stores opened
//! on the same path do not see each other's changes, and the later save wins.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::catalog::ItemCatalog;
use crate::config::Configuration;
use crate::error::{RrError, RrResult};
use crate::item::Rarity;

/// Write `config` to `path`, replacing whatever was there.
pub fn write_config(path: &Path, config: &Configuration) -> RrResult<()> {
    let mut text = config.to_json().map_err(std::io::Error::from)?;
    text.push('\n');
    fs::write(path, text)?;
    log::debug!("saved {} items to {}", config.items.len(), path.display());
    Ok(())
}

/// Owner of the configuration document at one path.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    config: Configuration,
}

impl ConfigStore {
    /// Read the document at `path`.
    ///
    /// An absent file is created with the default configuration. A file that
    /// exists but does not parse fails with [`RrError::CorruptConfig`].
    pub fn load(path: &Path) -> RrResult<Configuration> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("no configuration at {}, creating defaults", path.display());
                let config = Configuration::default();
                write_config(path, &config)?;
                return Ok(config);
            }
            Err(e) => return Err(e.into()),
        };

        let config = Configuration::from_json(&text).map_err(|message| RrError::CorruptConfig {
            path: path.to_path_buf(),
            message,
        })?;
        log::debug!(
            "loaded {} items from {}",
            config.items.len(),
            path.display()
        );
        Ok(config)
    }

    /// Load the document at `path` and take ownership of it.
    pub fn open(path: impl Into<PathBuf>) -> RrResult<Self> {
        let path = path.into();
        let config = Self::load(&path)?;
        Ok(Self { path, config })
    }

    /// Like [`ConfigStore::open`], but fall back to defaults on failure.
    ///
    /// The fallback lives in memory only; the file on disk is left alone
    /// until the next explicit save.
    pub fn open_or_default(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let config = Self::load(&path).unwrap_or_else(|e| {
            log::warn!("{e}; continuing with the default configuration");
            Configuration::default()
        });
        Self { path, config }
    }

    /// Location of the document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The current in-memory configuration.
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Mutable access to the items. Changes persist on the next [`save`](Self::save).
    pub fn catalog_mut(&mut self) -> &mut ItemCatalog {
        &mut self.config.items
    }

    /// Write the full document to disk.
    pub fn save(&self) -> RrResult<()> {
        write_config(&self.path, &self.config)
    }

    /// Discard in-memory state and re-read the document.
    pub fn reload(&mut self) -> RrResult<()> {
        self.config = Self::load(&self.path)?;
        Ok(())
    }

    /// Turn sound keys on or off, then save.
    pub fn set_sound_enabled(&mut self, enabled: bool) -> RrResult<()> {
        self.config.sound_enabled = enabled;
        self.save()
    }

    /// Assign a sound resource to a rarity, then save.
    pub fn set_sound_file(&mut self, rarity: Rarity, path: impl Into<String>) -> RrResult<()> {
        self.config.sounds.insert(rarity, path.into());
        self.save()
    }

    /// Remove the sound assigned to a rarity, then save.
    pub fn clear_sound_file(&mut self, rarity: Rarity) -> RrResult<()> {
        self.config.sounds.remove(&rarity);
        self.save()
    }

    /// Set the multi-roll percent chance (0-100), then save.
    pub fn set_multi_roll_chance(&mut self, chance: u32) -> RrResult<()> {
        if chance > 100 {
            return Err(RrError::InvalidSetting(format!(
                "multi-roll chance {chance} is not a percentage (0-100)"
            )));
        }
        self.config.multi_roll_chance = chance;
        self.save()
    }

    /// Set the number of extra rolls (at least 1), then save.
    pub fn set_multi_roll_count(&mut self, count: u32) -> RrResult<()> {
        if count == 0 {
            return Err(RrError::InvalidSetting(
                "multi-roll count must be at least 1".into(),
            ));
        }
        self.config.multi_roll_count = count;
        self.save()
    }

    /// Set the sound played on every draw (empty clears it), then save.
    pub fn set_roll_sound(&mut self, path: impl Into<String>) -> RrResult<()> {
        self.config.roll_sound = path.into();
        self.save()
    }

    /// The sound played on every draw, if any.
    pub fn roll_sound(&self) -> Option<&str> {
        self.config.roll_sound()
    }
}
