// SPDX-License-Identifier: MPL-2.0
//! Durable storage for the user's locale preference.

use super::locale::Locale;
use crate::config::{self, Config};
use crate::error::Result;
use std::path::PathBuf;

/// Where the last selected locale survives between runs.
pub trait PreferenceStore {
    /// The stored locale tag, if any. The tag is not validated here.
    fn load_locale(&self) -> Option<String>;

    /// Records `locale` as the preferred locale.
    fn save_locale(&mut self, locale: &Locale) -> Result<()>;
}

/// Preference store backed by the `[general] language` entry of `settings.toml`.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    base_dir: Option<PathBuf>,
    config: Config,
}

impl SettingsStore {
    /// Opens the settings file in `base_dir`, or in the default config dir.
    ///
    /// Returns the store and an optional notice key when an existing file
    /// could not be read.
    pub fn open(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let (config, warning) = config::load_with_override(base_dir.clone());
        (Self { base_dir, config }, warning)
    }
}

impl PreferenceStore for SettingsStore {
    fn load_locale(&self) -> Option<String> {
        self.config.general.language.clone()
    }

    fn save_locale(&mut self, locale: &Locale) -> Result<()> {
        // Re-read so edits made since startup are not overwritten.
        let (mut cfg, _) = config::load_with_override(self.base_dir.clone());
        cfg.general.language = Some(locale.to_string());
        config::save_with_override(&cfg, self.base_dir.clone())?;
        self.config = cfg;
        Ok(())
    }
}

/// In-memory preference store, for embedding and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    locale: Option<String>,
}

impl MemoryStore {
    pub fn with_locale(tag: impl Into<String>) -> Self {
        Self {
            locale: Some(tag.into()),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn load_locale(&self) -> Option<String> {
        self.locale.clone()
    }

    fn save_locale(&mut self, locale: &Locale) -> Result<()> {
        self.locale = Some(locale.to_string());
        Ok(())
    }
}
