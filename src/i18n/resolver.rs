// SPDX-License-Identifier: MPL-2.0
//! Startup locale detection.
//!
//! Sources are consulted in priority order and the first usable one wins:
//!
//! 1. the locale requested at launch (`--lang`)
//! 2. the locale persisted in the preference store
//! 3. the runtime language reported by the OS, matched against the
//!    configured aliases
//! 4. the configured default locale
//!
//! Invalid sources are skipped silently; detection never fails.

use super::locale::{I18nConfig, Locale};
use super::store::PreferenceStore;

/// Ambient inputs the resolver reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    /// Locale explicitly requested for this run.
    pub requested: Option<String>,
    /// Locale persisted by a previous run.
    pub stored: Option<String>,
    /// Language preference reported by the runtime, e.g. `zh-TW`.
    pub system: Option<String>,
}

impl Environment {
    /// Reads the stored preference from `store` and the OS language from
    /// `sys-locale`.
    pub fn capture(requested: Option<String>, store: &dyn PreferenceStore) -> Self {
        Self {
            requested,
            stored: store.load_locale(),
            system: sys_locale::get_locale(),
        }
    }
}

/// Picks the active locale for this run.
#[must_use]
pub fn detect_locale(env: &Environment, config: &I18nConfig) -> Locale {
    if let Some(locale) = available(config, env.requested.as_deref(), "requested") {
        return locale.clone();
    }

    if let Some(locale) = available(config, env.stored.as_deref(), "stored") {
        return locale.clone();
    }

    if let Some(system) = env.system.as_deref() {
        if let Some(locale) = config.locale_for_system_language(system) {
            return locale.clone();
        }
        tracing::debug!(source = "system", tag = system, "ignoring unrecognized runtime language");
    }

    config.default_locale.clone()
}

fn available<'a>(config: &'a I18nConfig, tag: Option<&str>, source: &str) -> Option<&'a Locale> {
    let tag = tag?;
    let found = config.find(tag);
    if found.is_none() {
        tracing::debug!(source, tag, "ignoring unsupported locale");
    }
    found
}
