// SPDX-License-Identifier: MPL-2.0
//! `{{name}}` interpolation for translated strings.
//!
//! A token is `{{`, one or more ASCII letters, digits or underscores, then
//! `}}`. Substitution is a single left-to-right pass: substituted values are
//! never rescanned, and a token without a matching parameter is kept verbatim
//! so the omission stays visible in the UI.

use regex::{Captures, Regex};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Named values substituted into `{{name}}` tokens.
///
/// Values are stored in their display form, so strings and numbers mix freely:
///
/// ```
/// use locale_lens::i18n::Params;
///
/// let params = Params::new().with("name", "Ada").with("count", 3);
/// assert_eq!(params.get("count"), Some("3"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(HashMap<String, String>);

impl Params {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a parameter, builder style.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl fmt::Display) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl fmt::Display) {
        self.0.insert(name.into(), value.to_string());
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: fmt::Display> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").expect("token pattern is valid")
});

/// Replaces every `{{name}}` token in `text` with the matching parameter.
pub fn format_translation(text: &str, params: &Params) -> String {
    TOKEN
        .replace_all(text, |caps: &Captures<'_>| {
            params
                .get(&caps[1])
                .map_or_else(|| caps[0].to_string(), str::to_string)
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn substitutes_single_parameter() {
        let params = Params::new().with("n", 5);
        assert_eq!(format_translation("X {{n}}", &params), "X 5");
    }

    #[test]
    fn substitutes_multiple_and_repeated_tokens() {
        let params = Params::new().with("a", "1").with("b", "two");
        assert_eq!(
            format_translation("{{a}}-{{b}}-{{a}}", &params),
            "1-two-1"
        );
    }

    #[test]
    fn missing_parameter_is_left_verbatim() {
        let params = Params::new().with("other", "x");
        assert_eq!(
            format_translation("Hello {{name}}!", &params),
            "Hello {{name}}!"
        );
    }

    #[test]
    fn non_identifier_tokens_are_not_touched() {
        let params = Params::new().with("a b", "x").with("", "y");
        assert_eq!(format_translation("{{a b}} {{}} {{-}}", &params), "{{a b}} {{}} {{-}}");
    }

    #[test]
    fn unclosed_token_is_emitted_as_is() {
        let params = Params::new().with("name", "Ada");
        assert_eq!(format_translation("Hi {{name", &params), "Hi {{name");
    }

    #[test]
    fn single_braces_are_plain_text() {
        let params = Params::new().with("name", "Ada");
        assert_eq!(format_translation("{name} {{name}}", &params), "{name} Ada");
    }

    #[test]
    fn extra_leading_brace_is_preserved() {
        let params = Params::new().with("name", "Ada");
        assert_eq!(format_translation("{{{name}}", &params), "{Ada");
    }

    #[test]
    fn surplus_braces_stay_around_the_token() {
        let params = Params::new().with("a", 1);
        assert_eq!(format_translation("{{{a}}}", &params), "{1}");
        assert_eq!(format_translation("{{a}}}", &params), "1}");
    }

    #[test]
    fn padded_and_non_ascii_names_are_not_tokens() {
        let params = Params::new().with("a", 1).with("é", 2);
        assert_eq!(format_translation("{{ a }} {{é}}", &params), "{{ a }} {{é}}");
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let params = Params::new().with("a", "{{b}}").with("b", "nope");
        assert_eq!(format_translation("{{a}}", &params), "{{b}}");
    }

    #[test]
    fn formatting_is_idempotent_for_plain_values() {
        let params = Params::new().with("name", "Ada").with("count", 2.5);
        let text = "{{name}} has {{count}} of {{missing}}";
        let once = format_translation(text, &params);
        assert_eq!(format_translation(&once, &params), once);
    }

    #[test]
    fn unicode_text_around_tokens_survives() {
        let params = Params::new().with("locale", "繁體中文");
        assert_eq!(
            format_translation("目前語言：{{locale}}。", &params),
            "目前語言：繁體中文。"
        );
    }

    #[test]
    fn params_collect_from_pairs() {
        let params: Params = [("x", 1), ("y", 2)].into_iter().collect();
        assert_eq!(params.get("x"), Some("1"));
        assert_eq!(params.get("y"), Some("2"));
        assert!(!params.is_empty());
    }
}
