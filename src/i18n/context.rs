// SPDX-License-Identifier: MPL-2.0
//! The locale context: active locale, translation lookup, and switching.
//!
//! One context is created at application boot and lent to every consumer.
//! It is the single source of truth for the active locale.

use super::catalog::Catalog;
use super::format::{format_translation, Params};
use super::listeners::{Disposer, LocaleListeners};
use super::locale::{I18nConfig, Locale};
use super::resolver::{detect_locale, Environment};
use super::store::PreferenceStore;
use crate::error::Result;
use std::fmt;

pub struct LocaleContext {
    config: I18nConfig,
    catalog: Catalog,
    locale: Locale,
    store: Box<dyn PreferenceStore>,
    listeners: LocaleListeners,
}

impl fmt::Debug for LocaleContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleContext")
            .field("locale", &self.locale)
            .field("catalog_locales", &self.catalog.locales())
            .field("listeners", &self.listeners)
            .finish()
    }
}

impl LocaleContext {
    /// Creates a context with an explicit starting locale.
    ///
    /// A locale outside the available set is replaced by the default locale.
    pub fn new(
        config: I18nConfig,
        catalog: Catalog,
        locale: Locale,
        store: Box<dyn PreferenceStore>,
    ) -> Self {
        let locale = if config.is_available(locale.as_str()) {
            locale
        } else {
            tracing::warn!(%locale, "starting locale is not available, using default");
            config.default_locale.clone()
        };

        Self {
            config,
            catalog,
            locale,
            store,
            listeners: LocaleListeners::new(),
        }
    }

    /// Creates a context whose starting locale is detected from `env`.
    pub fn detect(
        config: I18nConfig,
        catalog: Catalog,
        env: &Environment,
        store: Box<dyn PreferenceStore>,
    ) -> Self {
        let locale = detect_locale(env, &config);
        tracing::info!(%locale, "active locale detected");
        Self::new(config, catalog, locale, store)
    }

    /// Translates `key`, returning the key itself when no translation exists.
    #[must_use]
    pub fn t(&self, key: &str) -> String {
        self.resolve(key).map_or_else(|| key.to_string(), str::to_string)
    }

    /// Translates `key` and fills its `{{name}}` tokens from `params`.
    #[must_use]
    pub fn t_with(&self, key: &str, params: &Params) -> String {
        self.resolve(key)
            .map_or_else(|| key.to_string(), |text| format_translation(text, params))
    }

    fn resolve(&self, key: &str) -> Option<&str> {
        let resolved = self
            .catalog
            .resolve(&self.locale, &self.config.fallback_locale, key);
        if resolved.is_none() {
            tracing::debug!(locale = %self.locale, key, "missing translation");
        }
        resolved
    }

    #[must_use]
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Switches the active locale, persists it, and notifies listeners.
    ///
    /// An unsupported tag is logged and ignored, returning `Ok(false)`. When
    /// persisting fails the switch and the notification still happen, and the
    /// storage error is returned.
    pub fn set_locale(&mut self, tag: &str) -> Result<bool> {
        let Some(locale) = self.config.find(tag).cloned() else {
            tracing::warn!(locale = tag, "locale is not supported");
            return Ok(false);
        };

        self.locale = locale;
        let persisted = self.store.save_locale(&self.locale);
        if let Err(error) = &persisted {
            tracing::warn!(locale = %self.locale, %error, "failed to persist locale");
        }

        self.listeners.notify(&self.locale);
        persisted.map(|()| true)
    }

    /// Registers a callback invoked with the new locale after each switch.
    pub fn on_locale_change(&self, callback: impl FnMut(&Locale) + 'static) -> Disposer {
        self.listeners.subscribe(callback)
    }

    #[must_use]
    pub fn config(&self) -> &I18nConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn available_locales(&self) -> &[Locale] {
        &self.config.available_locales
    }

    #[must_use]
    pub fn locale_name<'a>(&'a self, locale: &'a Locale) -> &'a str {
        self.config.locale_name(locale)
    }

    #[must_use]
    pub fn store(&self) -> &dyn PreferenceStore {
        self.store.as_ref()
    }
}
