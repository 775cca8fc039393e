// SPDX-License-Identifier: MPL-2.0
//! Translation bundles and the catalog holding one bundle per locale.
//!
//! Bundles are nested tables of strings, authored as one TOML file per locale:
//!
//! ```toml
//! [language]
//! title = "Language"
//! ```
//!
//! The key `language.title` walks the tables segment by segment. Every
//! bundle is loaded in full at startup; nothing is fetched or parsed lazily.

use super::locale::{I18nConfig, Locale};
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const LOCALE_FILE_EXTENSION: &str = ".toml";

/// A node of a translation bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Text(String),
    Table(BTreeMap<String, Entry>),
}

/// Outcome of walking a dotted key through one bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// The key names a non-empty string.
    Text(&'a str),
    /// The key names a table of further keys, not a string.
    Namespace,
    /// Some segment is absent, or the string it names is empty.
    Missing,
}

/// Nested translations for a single locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bundle {
    root: BTreeMap<String, Entry>,
}

impl Bundle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a TOML locale file.
    pub fn from_toml_str(locale: &Locale, source: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(source).map_err(|err| Error::LocaleData {
            locale: locale.to_string(),
            reason: err.to_string(),
        })?;
        Ok(Self::from_table(locale, table))
    }

    /// Converts a parsed TOML table, skipping leaves that are not strings.
    pub fn from_table(locale: &Locale, table: toml::Table) -> Self {
        Self {
            root: convert_table(locale, "", table),
        }
    }

    /// Inserts `value` at the dotted path `key`, creating tables on the way.
    ///
    /// A string sitting where a table is needed is replaced by the table.
    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        let mut segments: Vec<&str> = key.split('.').collect();
        let Some(leaf) = segments.pop() else {
            return;
        };

        let mut table = &mut self.root;
        for segment in segments {
            let entry = table
                .entry(segment.to_string())
                .or_insert_with(|| Entry::Table(BTreeMap::new()));
            if !matches!(entry, Entry::Table(_)) {
                *entry = Entry::Table(BTreeMap::new());
            }
            let Entry::Table(inner) = entry else {
                return;
            };
            table = inner;
        }
        table.insert(leaf.to_string(), Entry::Text(value.into()));
    }

    /// Builds a bundle from `(dotted key, text)` pairs.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut bundle = Self::new();
        for (key, value) in pairs {
            bundle.insert(key, value);
        }
        bundle
    }

    /// Walks `key` segment by segment.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Lookup<'_> {
        let mut segments = key.split('.');
        let Some(first) = segments.next() else {
            return Lookup::Missing;
        };

        let mut node = match self.root.get(first) {
            Some(entry) => entry,
            None => return Lookup::Missing,
        };

        for segment in segments {
            node = match node {
                Entry::Table(table) => match table.get(segment) {
                    Some(entry) => entry,
                    None => return Lookup::Missing,
                },
                Entry::Text(_) => return Lookup::Missing,
            };
        }

        match node {
            Entry::Text(text) if text.is_empty() => Lookup::Missing,
            Entry::Text(text) => Lookup::Text(text),
            Entry::Table(_) => Lookup::Namespace,
        }
    }

    /// Dotted paths of every non-empty string, sorted.
    #[must_use]
    pub fn leaf_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        collect_leaf_keys(&self.root, "", &mut keys);
        keys.sort_unstable();
        keys
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

fn join_key(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{prefix}.{segment}")
    }
}

fn convert_table(locale: &Locale, prefix: &str, table: toml::Table) -> BTreeMap<String, Entry> {
    let mut converted = BTreeMap::new();
    for (segment, value) in table {
        let path = join_key(prefix, &segment);
        match value {
            toml::Value::String(text) => {
                converted.insert(segment, Entry::Text(text));
            }
            toml::Value::Table(inner) => {
                converted.insert(segment, Entry::Table(convert_table(locale, &path, inner)));
            }
            other => {
                tracing::warn!(
                    %locale,
                    key = %path,
                    kind = other.type_str(),
                    "skipping non-string translation value"
                );
            }
        }
    }
    converted
}

fn collect_leaf_keys(table: &BTreeMap<String, Entry>, prefix: &str, keys: &mut Vec<String>) {
    for (segment, entry) in table {
        let path = join_key(prefix, segment);
        match entry {
            Entry::Text(text) if !text.is_empty() => keys.push(path),
            Entry::Text(_) => {}
            Entry::Table(inner) => collect_leaf_keys(inner, &path, keys),
        }
    }
}

/// All loaded bundles, keyed by locale.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    bundles: HashMap<Locale, Bundle>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the locale files compiled into the binary.
    ///
    /// Files whose name is not an available locale are ignored. A malformed
    /// embedded file is an error: it ships with the binary and must parse.
    pub fn embedded(config: &I18nConfig) -> Result<Self> {
        let mut catalog = Self::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(tag) = filename.strip_suffix(LOCALE_FILE_EXTENSION) else {
                continue;
            };
            let Some(locale) = config.find(tag) else {
                tracing::debug!(file = filename, "ignoring locale file for unconfigured locale");
                continue;
            };
            if let Some(content) = Asset::get(filename) {
                let source = String::from_utf8_lossy(content.data.as_ref());
                let bundle = Bundle::from_toml_str(locale, &source)?;
                catalog.insert(locale.clone(), bundle);
            }
        }

        for locale in &config.available_locales {
            if catalog.bundle(locale).is_none() {
                tracing::warn!(%locale, "no translations shipped for locale");
            }
        }

        Ok(catalog)
    }

    /// Replaces bundles with `<tag>.toml` files found in `dir`.
    ///
    /// Only available locales are considered. A file that fails to parse is
    /// skipped with a warning and the previously loaded bundle is kept.
    /// Returns the number of bundles replaced.
    pub fn load_dir(&mut self, dir: &Path, config: &I18nConfig) -> Result<usize> {
        let mut loaded = 0;

        for locale in &config.available_locales {
            let path = dir.join(format!("{locale}{LOCALE_FILE_EXTENSION}"));
            if !path.is_file() {
                continue;
            }
            let source = fs::read_to_string(&path)?;
            match Bundle::from_toml_str(locale, &source) {
                Ok(bundle) => {
                    self.insert(locale.clone(), bundle);
                    loaded += 1;
                }
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "skipping malformed locale file");
                }
            }
        }

        tracing::info!(dir = %dir.display(), loaded, "loaded locale overrides");
        Ok(loaded)
    }

    pub fn insert(&mut self, locale: Locale, bundle: Bundle) {
        self.bundles.insert(locale, bundle);
    }

    #[must_use]
    pub fn bundle(&self, locale: &Locale) -> Option<&Bundle> {
        self.bundles.get(locale)
    }

    /// Loaded locales, sorted by tag.
    #[must_use]
    pub fn locales(&self) -> Vec<&Locale> {
        let mut locales: Vec<&Locale> = self.bundles.keys().collect();
        locales.sort_unstable();
        locales
    }

    /// Walks `key` in a single locale's bundle.
    #[must_use]
    pub fn lookup(&self, locale: &Locale, key: &str) -> Lookup<'_> {
        self.bundle(locale)
            .map_or(Lookup::Missing, |bundle| bundle.lookup(key))
    }

    /// Resolves `key` in `locale`, retrying in `fallback` if a segment is
    /// missing.
    ///
    /// A key that names a namespace in `locale` resolves to `None` without
    /// consulting `fallback`.
    #[must_use]
    pub fn resolve(&self, locale: &Locale, fallback: &Locale, key: &str) -> Option<&str> {
        match self.lookup(locale, key) {
            Lookup::Text(text) => Some(text),
            Lookup::Namespace => None,
            Lookup::Missing => match self.lookup(fallback, key) {
                Lookup::Text(text) => Some(text),
                Lookup::Namespace | Lookup::Missing => None,
            },
        }
    }

    /// Keys of `reference` that `locale` does not provide itself.
    #[must_use]
    pub fn missing_keys(&self, locale: &Locale, reference: &Locale) -> Vec<String> {
        let Some(reference_bundle) = self.bundle(reference) else {
            return Vec::new();
        };
        reference_bundle
            .leaf_keys()
            .into_iter()
            .filter(|key| !matches!(self.lookup(locale, key), Lookup::Text(_)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn en() -> Locale {
        Locale::new("en")
    }

    fn zh() -> Locale {
        Locale::new("zh-TW")
    }

    fn two_locale_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.insert(
            en(),
            Bundle::from_pairs([
                ("language.title", "Language"),
                ("a.b.c", "X {{n}}"),
                ("app.title", "Locale Lens"),
            ]),
        );
        catalog.insert(
            zh(),
            Bundle::from_pairs([("language.title", "語言"), ("app.title", "")]),
        );
        catalog
    }

    #[test]
    fn lookup_walks_nested_tables() {
        let bundle = Bundle::from_pairs([("language.title", "Language")]);
        assert_eq!(bundle.lookup("language.title"), Lookup::Text("Language"));
    }

    #[test]
    fn lookup_reports_namespace_for_tables() {
        let bundle = Bundle::from_pairs([("language.title", "Language")]);
        assert_eq!(bundle.lookup("language"), Lookup::Namespace);
    }

    #[test]
    fn lookup_missing_cases() {
        let bundle = Bundle::from_pairs([("language.title", "Language"), ("empty", "")]);
        assert_eq!(bundle.lookup("language.subtitle"), Lookup::Missing);
        assert_eq!(bundle.lookup("language.title.deeper"), Lookup::Missing);
        assert_eq!(bundle.lookup("empty"), Lookup::Missing);
        assert_eq!(bundle.lookup(""), Lookup::Missing);
    }

    #[test]
    fn from_toml_str_builds_nested_bundle() {
        let source = r#"
            [language]
            title = "Language"

            [a.b]
            c = "X {{n}}"
        "#;
        let bundle = Bundle::from_toml_str(&en(), source).expect("valid locale file");
        assert_eq!(bundle.lookup("a.b.c"), Lookup::Text("X {{n}}"));
        assert_eq!(bundle.leaf_keys(), vec!["a.b.c", "language.title"]);
    }

    #[test]
    fn from_toml_str_skips_non_string_leaves() {
        let bundle = Bundle::from_toml_str(&en(), "count = 3\nlabel = \"ok\"").expect("valid");
        assert_eq!(bundle.lookup("count"), Lookup::Missing);
        assert_eq!(bundle.lookup("label"), Lookup::Text("ok"));
    }

    #[test]
    fn from_toml_str_rejects_malformed_source() {
        let err = Bundle::from_toml_str(&zh(), "[language\ntitle =").unwrap_err();
        assert!(matches!(err, Error::LocaleData { locale, .. } if locale == "zh-TW"));
    }

    #[test]
    fn insert_replaces_text_with_table_when_needed() {
        let mut bundle = Bundle::new();
        bundle.insert("menu", "Menu");
        bundle.insert("menu.open", "Open");
        assert_eq!(bundle.lookup("menu"), Lookup::Namespace);
        assert_eq!(bundle.lookup("menu.open"), Lookup::Text("Open"));
    }

    #[test]
    fn insert_replaces_nested_text_and_keeps_siblings() {
        let mut bundle = Bundle::from_pairs([("menu.open", "Open"), ("menu.close", "Close")]);
        bundle.insert("menu.open.recent", "Recent");
        assert_eq!(bundle.lookup("menu.open"), Lookup::Namespace);
        assert_eq!(bundle.lookup("menu.open.recent"), Lookup::Text("Recent"));
        assert_eq!(bundle.lookup("menu.close"), Lookup::Text("Close"));
        assert_eq!(bundle.leaf_keys(), vec!["menu.close", "menu.open.recent"]);
    }

    #[test]
    fn resolve_prefers_active_locale() {
        let catalog = two_locale_catalog();
        assert_eq!(catalog.resolve(&zh(), &en(), "language.title"), Some("語言"));
    }

    #[test]
    fn resolve_falls_back_on_missing_or_empty() {
        let catalog = two_locale_catalog();
        assert_eq!(catalog.resolve(&zh(), &en(), "a.b.c"), Some("X {{n}}"));
        assert_eq!(catalog.resolve(&zh(), &en(), "app.title"), Some("Locale Lens"));
    }

    #[test]
    fn resolve_falls_back_for_unknown_locale() {
        let catalog = two_locale_catalog();
        assert_eq!(
            catalog.resolve(&Locale::new("fr"), &en(), "language.title"),
            Some("Language")
        );
    }

    #[test]
    fn resolve_returns_none_when_absent_everywhere() {
        let catalog = two_locale_catalog();
        assert_eq!(catalog.resolve(&zh(), &en(), "missing.key"), None);
    }

    #[test]
    fn resolve_namespace_in_active_locale_is_none() {
        let mut catalog = two_locale_catalog();
        catalog.insert(zh(), Bundle::from_pairs([("app.title.short", "透鏡")]));
        assert_eq!(catalog.resolve(&zh(), &en(), "app.title"), None);
    }

    #[test]
    fn missing_keys_lists_untranslated_reference_keys() {
        let catalog = two_locale_catalog();
        assert_eq!(catalog.missing_keys(&zh(), &en()), vec!["a.b.c", "app.title"]);
        assert!(catalog.missing_keys(&en(), &en()).is_empty());
    }

    #[test]
    fn embedded_catalog_loads_every_configured_locale() {
        let config = I18nConfig::default();
        let catalog = Catalog::embedded(&config).expect("embedded locale files parse");
        for locale in &config.available_locales {
            let bundle = catalog.bundle(locale).expect("bundle shipped");
            assert!(!bundle.is_empty(), "{locale} bundle is empty");
        }
    }

    #[test]
    fn embedded_alternate_locales_have_no_keys_beyond_fallback() {
        let config = I18nConfig::default();
        let catalog = Catalog::embedded(&config).expect("embedded locale files parse");
        let fallback_keys = catalog
            .bundle(&config.fallback_locale)
            .expect("fallback bundle")
            .leaf_keys();

        for locale in &config.available_locales {
            let keys = catalog.bundle(locale).expect("bundle").leaf_keys();
            let extra: Vec<&String> = keys.iter().filter(|k| !fallback_keys.contains(k)).collect();
            assert!(extra.is_empty(), "{locale} has keys missing from fallback: {extra:?}");
        }
    }

    #[test]
    fn load_dir_overrides_and_skips_malformed_files() {
        let config = I18nConfig::default();
        let mut catalog = two_locale_catalog();
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(dir.path().join("en.toml"), "[language]\ntitle = \"Tongue\"\n").expect("write");
        fs::write(dir.path().join("zh-TW.toml"), "[language\n").expect("write");

        let loaded = catalog.load_dir(dir.path(), &config).expect("dir readable");

        assert_eq!(loaded, 1);
        assert_eq!(catalog.lookup(&en(), "language.title"), Lookup::Text("Tongue"));
        assert_eq!(catalog.lookup(&zh(), "language.title"), Lookup::Text("語言"));
    }

    #[test]
    fn locales_are_sorted() {
        let catalog = two_locale_catalog();
        assert_eq!(catalog.locales(), vec![&en(), &zh()]);
    }
}
