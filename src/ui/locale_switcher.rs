// SPDX-License-Identifier: MPL-2.0
//! Language switcher: a label and a drop-down of the available locales.
//!
//! Picking a locale persists it and asks the application to reboot in that
//! locale ([`Effect::Reload`]). The switcher keeps no copy of the active
//! locale; it always reads it from the [`LocaleContext`].

use crate::i18n::{Locale, LocaleContext};
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{pick_list, text, Row};
use iced::{Alignment, Element};
use std::fmt;

/// Translation key of the label shown before the drop-down.
pub const LABEL_KEY: &str = "language.title";

/// One entry of the drop-down, displayed by its human-readable name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleOption {
    pub locale: Locale,
    pub name: String,
}

impl fmt::Display for LocaleOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Drop-down entries for every available locale, in configured order.
#[must_use]
pub fn options(i18n: &LocaleContext) -> Vec<LocaleOption> {
    i18n.available_locales()
        .iter()
        .map(|locale| LocaleOption {
            locale: locale.clone(),
            name: i18n.locale_name(locale).to_string(),
        })
        .collect()
}

/// The drop-down entry of the active locale.
#[must_use]
pub fn selected_option(i18n: &LocaleContext) -> Option<LocaleOption> {
    options(i18n)
        .into_iter()
        .find(|option| &option.locale == i18n.locale())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Shown and waiting for a selection.
    #[default]
    Idle,
    /// A new locale was chosen; the application is about to reboot.
    Reinitializing,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    phase: Phase,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Selected(Locale),
}

/// Effects the application must carry out after a switcher update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Reboot the application with this locale requested.
    Reload(Locale),
}

/// Context required to render the switcher.
pub struct ViewContext<'a> {
    pub i18n: &'a LocaleContext,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The active locale, as held by the context.
    #[must_use]
    pub fn current_locale<'a>(&self, i18n: &'a LocaleContext) -> &'a Locale {
        i18n.locale()
    }

    /// Switches to `tag` through the context and requests a reload.
    ///
    /// Any available tag is persisted and reloaded, including the active one.
    /// Returns [`Effect::None`] for an unsupported tag.
    pub fn set_locale(&mut self, i18n: &mut LocaleContext, tag: &str) -> Effect {
        match i18n.set_locale(tag) {
            Ok(false) => return Effect::None,
            Ok(true) => {}
            // The context already logged it; the reload still carries the
            // locale in the launch flags.
            Err(_) => {}
        }

        self.phase = Phase::Reinitializing;
        Effect::Reload(i18n.locale().clone())
    }

    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_message(&mut self, message: Message, i18n: &mut LocaleContext) -> Effect {
        match message {
            Message::Selected(locale) => {
                // `pick_list` also emits when the shown entry is picked again.
                if self.phase == Phase::Reinitializing || &locale == i18n.locale() {
                    return Effect::None;
                }
                self.set_locale(i18n, locale.as_str())
            }
        }
    }

    pub fn view<'a>(&self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let label = text(ctx.i18n.t(LABEL_KEY)).size(typography::BODY);

        let picker = pick_list(
            options(ctx.i18n),
            selected_option(ctx.i18n),
            |option: LocaleOption| Message::Selected(option.locale),
        )
        .text_size(typography::BODY);

        Row::new()
            .push(label)
            .push(picker)
            .spacing(spacing::XS)
            .align_y(Alignment::Center)
            .into()
    }
}
