// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides locale detection, translation lookup with a fallback
//! locale, `{{name}}` interpolation, and locale-change notifications.
//!
//! # Features
//!
//! - Locale detection from the `--lang` flag, the saved preference, or the OS
//! - Locale files embedded at build time, optionally overridden from a directory
//! - Dotted keys (`language.title`) walked through nested tables
//! - Fallback to the fallback locale, then to the raw key, when translations are missing
//! - Listeners notified synchronously after every locale switch
//!
//! # Examples
//!
//! ```
//! use locale_lens::i18n::{Catalog, I18nConfig, LocaleContext, Locale, MemoryStore, Params};
//!
//! let config = I18nConfig::default();
//! let catalog = Catalog::embedded(&config).expect("embedded locale files parse");
//! let mut ctx = LocaleContext::new(config, catalog, Locale::new("en"), Box::new(MemoryStore::default()));
//!
//! assert_eq!(ctx.t("language.title"), "Language");
//! assert_eq!(ctx.t("no.such.key"), "no.such.key");
//!
//! ctx.set_locale("zh-TW").expect("memory store never fails");
//! let params = Params::new().with("name", "Ada");
//! assert_eq!(ctx.t_with("app.welcome", &params), "歡迎，Ada！");
//! ```

pub mod catalog;
pub mod context;
pub mod format;
pub mod listeners;
pub mod locale;
pub mod resolver;
pub mod store;

pub use catalog::{Bundle, Catalog, Entry, Lookup};
pub use context::LocaleContext;
pub use format::{format_translation, Params};
pub use listeners::{Disposer, LocaleListeners};
pub use locale::{I18nConfig, Locale};
pub use resolver::{detect_locale, Environment};
pub use store::{MemoryStore, PreferenceStore, SettingsStore};
