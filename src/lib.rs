// SPDX-License-Identifier: MPL-2.0
//! `locale_lens` is a small Iced application shell with client-side
//! internationalization.
//!
//! It detects the active locale at startup, resolves dotted translation keys
//! with a fallback locale and `{{name}}` interpolation, notifies listeners on
//! locale changes, and offers a language switcher that persists the choice
//! and reboots the application in the new locale.

#![doc(html_root_url = "https://docs.rs/locale_lens/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
