// SPDX-License-Identifier: MPL-2.0
//! Locale identifiers and the static localization configuration.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;
use unic_langid::LanguageIdentifier;

/// An opaque locale tag such as `en` or `zh-TW`.
///
/// Equality is textual; the tag is only parsed as a BCP-47 identifier when the
/// configuration is validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the tag as a language identifier.
    pub fn language_identifier(&self) -> Result<LanguageIdentifier> {
        self.0
            .parse::<LanguageIdentifier>()
            .map_err(|err| Error::InvalidConfig(format!("locale tag '{}': {}", self.0, err)))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Locale {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Which locales exist, which one is the default and which one backs up
/// missing keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct I18nConfig {
    /// Selected when no other source yields an available locale.
    pub default_locale: Locale,
    /// Consulted when a key is missing from the active locale.
    pub fallback_locale: Locale,
    /// Locales the application ships, in display order.
    pub available_locales: Vec<Locale>,
    /// Human-readable name of each locale, written in that locale.
    pub locale_names: BTreeMap<Locale, String>,
    /// Runtime language strings that select a locale when matched exactly.
    pub system_aliases: Vec<(String, Locale)>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        let en = Locale::new("en");
        let zh_tw = Locale::new("zh-TW");

        let mut locale_names = BTreeMap::new();
        locale_names.insert(en.clone(), "English".to_string());
        locale_names.insert(zh_tw.clone(), "繁體中文".to_string());

        Self {
            default_locale: en.clone(),
            fallback_locale: en.clone(),
            available_locales: vec![en, zh_tw.clone()],
            locale_names,
            system_aliases: vec![
                ("zh-TW".to_string(), zh_tw.clone()),
                ("zh-Hant".to_string(), zh_tw),
            ],
        }
    }
}

impl I18nConfig {
    /// Returns the configured locale whose tag equals `tag`, if any.
    #[must_use]
    pub fn find(&self, tag: &str) -> Option<&Locale> {
        self.available_locales.iter().find(|l| l.as_str() == tag)
    }

    #[must_use]
    pub fn is_available(&self, tag: &str) -> bool {
        self.find(tag).is_some()
    }

    /// Display name for `locale`, or the raw tag when none is configured.
    #[must_use]
    pub fn locale_name<'a>(&'a self, locale: &'a Locale) -> &'a str {
        self.locale_names
            .get(locale)
            .map_or(locale.as_str(), String::as_str)
    }

    /// Locale selected by a runtime language string, by exact alias match.
    #[must_use]
    pub fn locale_for_system_language(&self, language: &str) -> Option<&Locale> {
        self.system_aliases
            .iter()
            .find(|(alias, _)| alias == language)
            .map(|(_, locale)| locale)
    }

    /// Checks that every locale the configuration refers to is available,
    /// named, and a well-formed language identifier.
    pub fn validate(&self) -> Result<()> {
        if self.available_locales.is_empty() {
            return Err(Error::InvalidConfig("no available locales".into()));
        }

        for locale in &self.available_locales {
            locale.language_identifier()?;
            if !self.locale_names.contains_key(locale) {
                return Err(Error::InvalidConfig(format!(
                    "locale '{locale}' has no display name"
                )));
            }
        }

        let mut referenced = vec![
            ("default", &self.default_locale),
            ("fallback", &self.fallback_locale),
        ];
        referenced.extend(self.system_aliases.iter().map(|(_, l)| ("alias target", l)));

        for (role, locale) in referenced {
            if !self.is_available(locale.as_str()) {
                return Err(Error::InvalidConfig(format!(
                    "{role} locale '{locale}' is not in the available locales"
                )));
            }
        }

        Ok(())
    }
}
