// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::locale_switcher;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Switcher(locale_switcher::Message),
}

/// Runtime flags passed in from the CLI or launcher.
///
/// A locale change rewrites `lang` and reboots the application from these
/// flags, so they are the complete description of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    /// Optional locale requested on the command line.
    pub lang: Option<String>,
    /// Optional directory containing locale files overriding the embedded ones.
    pub i18n_dir: Option<String>,
    /// Optional directory holding `settings.toml`.
    pub config_dir: Option<String>,
}
