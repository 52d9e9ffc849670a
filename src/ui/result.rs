// SPDX-License-Identifier: MPL-2.0
//! Reading result screen: the revealed card, its guidance text, and the
//! follow-up actions.

use crate::app::Screen;
use crate::divination::card;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use fluent_bundle::FluentArgs;
use iced::{
    alignment::Horizontal,
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Messages emitted by the result screen.
#[derive(Debug, Clone)]
pub enum Message {
    Back,
    OpenChat,
    Redraw,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    Navigate(Screen),
}

/// Process a result screen message.
pub fn update(message: Message) -> Event {
    match message {
        Message::Back => Event::Navigate(Screen::Home),
        Message::OpenChat => Event::Navigate(Screen::Chat),
        Message::Redraw => Event::Navigate(Screen::Draw),
    }
}

/// Contextual data needed to render the result screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Render the result screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let revealed = card::READING_CARD.card();
    let card_name = ctx.i18n.tr(revealed.name_key);

    let header = Row::new()
        .width(Length::Fill)
        .push(
            button(Text::new(ctx.i18n.tr("back-button")).size(typography::BODY))
                .on_press(Message::Back)
                .style(styles::button::ghost),
        )
        .push(iced::widget::Space::new().width(Length::Fill))
        .push(
            Text::new(ctx.i18n.tr("result-title"))
                .size(typography::TITLE_MD)
                .color(palette::WHITE),
        )
        .push(iced::widget::Space::new().width(Length::Fill));

    // The card face: number, star, names.
    let face = Container::new(
        Column::new()
            .align_x(Horizontal::Center)
            .spacing(spacing::SM)
            .push(
                Text::new(revealed.number)
                    .size(typography::BODY)
                    .color(palette::GOLD),
            )
            .push(Text::new("🌟").size(sizing::ICON_LG))
            .push(
                Text::new(card_name.clone())
                    .size(typography::TITLE_MD)
                    .color(palette::WHITE),
            )
            .push(
                Text::new(revealed.english_name)
                    .size(typography::BODY)
                    .color(palette::MUTED),
            ),
    )
    .width(Length::Fixed(sizing::CARD_LG_WIDTH))
    .height(Length::Fixed(sizing::CARD_LG_HEIGHT))
    .align_x(Horizontal::Center)
    .center_y(Length::Fixed(sizing::CARD_LG_HEIGHT))
    .style(styles::container::mystical_card);

    let mut args = FluentArgs::new();
    args.set("card", card_name);
    let guidance = Container::new(
        Column::new()
            .align_x(Horizontal::Center)
            .spacing(spacing::SM)
            .push(
                Text::new(ctx.i18n.tr_with("result-guidance-title", &args))
                    .size(typography::TITLE_SM)
                    .color(palette::GOLD),
            )
            .push(
                Text::new(ctx.i18n.tr(card::READING_DESCRIPTION_KEY))
                    .size(typography::BODY)
                    .color(palette::MUTED),
            ),
    )
    .padding(spacing::LG)
    .width(Length::Fixed(360.0))
    .style(styles::container::mystical_card);

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(
            button(
                Text::new(ctx.i18n.tr("result-chat-button"))
                    .size(typography::BODY)
                    .align_x(Horizontal::Center),
            )
            .on_press(Message::OpenChat)
            .style(styles::button::gold)
            .width(Length::Fixed(220.0)),
        )
        .push(
            button(Text::new("↺").size(typography::TITLE_SM))
                .on_press(Message::Redraw)
                .style(styles::button::outline),
        );

    let content = Column::new()
        .align_x(Horizontal::Center)
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(header)
        .push(face)
        .push(guidance)
        .push(actions);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_navigate_to_their_targets() {
        assert!(matches!(
            update(Message::Back),
            Event::Navigate(Screen::Home)
        ));
        assert!(matches!(
            update(Message::OpenChat),
            Event::Navigate(Screen::Chat)
        ));
        assert!(matches!(
            update(Message::Redraw),
            Event::Navigate(Screen::Draw)
        ));
    }

    #[test]
    fn result_view_renders() {
        let i18n = I18n::default();
        let _element = view(ViewContext { i18n: &i18n });
    }
}
