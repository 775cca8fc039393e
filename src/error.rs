// SPDX-License-Identifier: MPL-2.0
//! Error types shared by the configuration and localization layers.
//!
//! Translation lookups and locale switches never fail: a missing key or an
//! unsupported locale degrades to a visible placeholder or a logged warning.
//! The variants below only cover infrastructure problems such as an
//! unreadable settings file or a malformed locale file.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Reading or writing a file failed.
    #[error("I/O Error: {0}")]
    Io(String),

    /// `settings.toml` could not be parsed or serialized.
    #[error("Config Error: {0}")]
    Config(String),

    /// A locale data file is not a valid nested table of strings.
    #[error("Locale Data Error ({locale}): {reason}")]
    LocaleData { locale: String, reason: String },

    /// The localization configuration violates one of its invariants.
    #[error("Invalid I18n Config: {0}")]
    InvalidConfig(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn locale_data_error_names_the_locale() {
        let err = Error::LocaleData {
            locale: "zh-TW".into(),
            reason: "expected a table".into(),
        };
        assert_eq!(
            format!("{}", err),
            "Locale Data Error (zh-TW): expected a table"
        );
    }

    #[test]
    fn toml_parse_error_becomes_config_variant() {
        let parse_err = toml::from_str::<toml::Table>("not = valid = toml").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Config(_)));
    }
}
