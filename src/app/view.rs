// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::{LocaleContext, Params};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::locale_switcher::{self, ViewContext as SwitcherViewContext};
use iced::widget::{text, Column, Container};
use iced::{Alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a LocaleContext,
    pub switcher: &'a locale_switcher::State,
    pub user_name: &'a str,
    /// Translation key of a startup notice, if any.
    pub notice: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let welcome = i18n.t_with("app.welcome", &Params::new().with("name", ctx.user_name));
    let current = i18n.t_with(
        "app.current_locale",
        &Params::new().with("locale", i18n.locale_name(i18n.locale())),
    );

    let switcher = ctx
        .switcher
        .view(SwitcherViewContext { i18n })
        .map(Message::Switcher);

    let mut content = Column::new()
        .push(text(welcome).size(typography::TITLE_LG))
        .push(text(current).size(typography::TITLE_MD))
        .push(switcher)
        .push(
            text(i18n.t("app.hint"))
                .size(typography::BODY_SM)
                .color(palette::GRAY_400),
        )
        .spacing(spacing::MD)
        .align_x(Alignment::Center);

    if let Some(key) = ctx.notice {
        content = content.push(
            text(i18n.t(key))
                .size(typography::BODY)
                .color(palette::WARNING_500),
        );
    }

    Container::new(content)
        .padding(spacing::XL)
        .center(Length::Fill)
        .into()
}
