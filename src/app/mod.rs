// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` owns the locale context and the language switcher. Switching
//! language persists the choice, rewrites the launch flags and reboots: the
//! whole state is rebuilt by [`App::boot`], exactly as on a fresh start.

mod message;
mod view;

pub use message::{Flags, Message};

use crate::config::paths::APP_NAME;
use crate::i18n::{Catalog, Environment, I18nConfig, LocaleContext, PreferenceStore, SettingsStore};
use crate::ui::locale_switcher::{self, Effect};
use iced::{window, Element, Task};
use std::fmt;
use std::path::{Path, PathBuf};

/// Root Iced application state.
pub struct App {
    flags: Flags,
    i18n: LocaleContext,
    switcher: locale_switcher::State,
    user_name: String,
    /// Translation key of a notice raised while booting.
    notice: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("flags", &self.flags)
            .field("locale", self.i18n.locale())
            .field("switcher", &self.switcher)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 420;
pub const WINDOW_DEFAULT_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 320;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        (Self::boot(flags), Task::none())
    }

    /// Builds the full application state from launch flags.
    ///
    /// Never fails: unreadable settings, a broken override directory or an
    /// invalid locale configuration are logged and replaced by defaults.
    pub fn boot(flags: Flags) -> Self {
        let config = I18nConfig::default();
        if let Err(error) = config.validate() {
            tracing::error!(%error, "locale configuration is inconsistent");
        }

        let catalog = load_catalog(&config, flags.i18n_dir.as_deref().map(Path::new));

        let (store, notice) = SettingsStore::open(flags.config_dir.as_ref().map(PathBuf::from));
        let env = Environment::capture(flags.lang.clone(), &store);
        let i18n = LocaleContext::detect(config, catalog, &env, Box::new(store));

        Self {
            flags,
            i18n,
            switcher: locale_switcher::State::new(),
            user_name: user_name(),
            notice,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Switcher(msg) => {
                match self.switcher.handle_message(msg, &mut self.i18n) {
                    Effect::None => {}
                    Effect::Reload(locale) => self.reboot(locale.to_string()),
                }
                Task::none()
            }
        }
    }

    fn reboot(&mut self, lang: String) {
        tracing::info!(lang = %lang, "reinitializing with new locale");
        let mut flags = self.flags.clone();
        flags.lang = Some(lang);
        *self = Self::boot(flags);
    }

    pub fn title(&self) -> String {
        self.i18n.t("app.title")
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            switcher: &self.switcher,
            user_name: &self.user_name,
            notice: self.notice.as_deref(),
        })
    }

    #[must_use]
    pub fn flags(&self) -> &Flags {
        &self.flags
    }

    #[must_use]
    pub fn locale_context(&self) -> &LocaleContext {
        &self.i18n
    }

    #[must_use]
    pub fn switcher(&self) -> &locale_switcher::State {
        &self.switcher
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    #[must_use]
    pub fn stored_locale(&self) -> Option<String> {
        self.i18n.store().load_locale()
    }
}

fn load_catalog(config: &I18nConfig, override_dir: Option<&Path>) -> Catalog {
    let mut catalog = Catalog::embedded(config).unwrap_or_else(|error| {
        tracing::error!(%error, "embedded locale files could not be loaded");
        Catalog::new()
    });

    if let Some(dir) = override_dir {
        if let Err(error) = catalog.load_dir(dir, config) {
            tracing::warn!(dir = %dir.display(), %error, "failed to read locale directory");
        }
    }

    catalog
}

fn user_name() -> String {
    ["USER", "USERNAME"]
        .iter()
        .find_map(|var| std::env::var(var).ok().filter(|name| !name.is_empty()))
        .unwrap_or_else(|| APP_NAME.to_string())
}
