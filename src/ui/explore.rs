// SPDX-License-Identifier: MPL-2.0
//! Explore screen: the grid of divination categories and the learning
//! teaser. Every category currently funnels into the same reading flow.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::FloatingOrb;
use iced::{
    alignment::Horizontal,
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// One divination category tile.
struct Category {
    glyph: &'static str,
    title_key: &'static str,
    desc_key: &'static str,
}

static CATEGORIES: [Category; 6] = [
    Category {
        glyph: "🧠",
        title_key: "explore-personality-title",
        desc_key: "explore-personality-desc",
    },
    Category {
        glyph: "💖",
        title_key: "explore-love-title",
        desc_key: "explore-love-desc",
    },
    Category {
        glyph: "💰",
        title_key: "explore-career-title",
        desc_key: "explore-career-desc",
    },
    Category {
        glyph: "🔮",
        title_key: "explore-future-title",
        desc_key: "explore-future-desc",
    },
    Category {
        glyph: "⚡",
        title_key: "explore-energy-title",
        desc_key: "explore-energy-desc",
    },
    Category {
        glyph: "✨",
        title_key: "explore-wisdom-title",
        desc_key: "explore-wisdom-desc",
    },
];

/// Messages emitted by the explore screen.
#[derive(Debug, Clone)]
pub enum Message {
    OpenCategory(usize),
    StartCourse,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Navigate(Screen),
}

/// Process an explore screen message.
pub fn update(message: Message) -> Event {
    match message {
        // Every category starts a reading; the category itself only
        // flavors the framing text the user saw.
        Message::OpenCategory(_) => Event::Navigate(Screen::Shuffle),
        // The course is a visual teaser only.
        Message::StartCourse => Event::None,
    }
}

/// Contextual data needed to render the explore screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub elapsed: f32,
}

/// Render the explore screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let heading = Column::new()
        .align_x(Horizontal::Center)
        .spacing(spacing::XS)
        .push(
            Text::new(ctx.i18n.tr("explore-title"))
                .size(typography::TITLE_LG)
                .color(palette::GOLD),
        )
        .push(
            Text::new(ctx.i18n.tr("explore-subtitle"))
                .size(typography::BODY)
                .color(palette::MUTED),
        );

    // Two tiles per row.
    let mut grid = Column::new().spacing(spacing::SM);
    for (row_index, pair) in CATEGORIES.chunks(2).enumerate() {
        let mut row = Row::new().spacing(spacing::SM);
        for (offset, category) in pair.iter().enumerate() {
            row = row.push(tile(ctx.i18n, category, row_index * 2 + offset));
        }
        grid = grid.push(row);
    }

    let course = Container::new(
        Row::new()
            .spacing(spacing::MD)
            .align_y(iced::alignment::Vertical::Center)
            .push(Text::new("👑").size(sizing::ICON_LG))
            .push(
                Column::new()
                    .spacing(spacing::XXS)
                    .width(Length::Fill)
                    .push(
                        Text::new(ctx.i18n.tr("explore-course-title"))
                            .size(typography::TITLE_SM)
                            .color(palette::WHITE),
                    )
                    .push(
                        Text::new(ctx.i18n.tr("explore-course-desc"))
                            .size(typography::CAPTION)
                            .color(palette::MUTED),
                    ),
            )
            .push(
                button(Text::new(ctx.i18n.tr("explore-course-button")).size(typography::BODY))
                    .on_press(Message::StartCourse)
                    .style(styles::button::gold),
            ),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::glass_card);

    let learning = Column::new()
        .spacing(spacing::SM)
        .push(
            Text::new(ctx.i18n.tr("explore-learning-title"))
                .size(typography::TITLE_MD)
                .color(palette::WHITE),
        )
        .push(course);

    let orb = FloatingOrb::new(sizing::ORB_SM, ctx.elapsed)
        .phase(4.0)
        .color(palette::NEON_BLUE)
        .into_element();

    let content = Column::new()
        .align_x(Horizontal::Center)
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(orb)
        .push(heading)
        .push(grid)
        .push(learning);

    Container::new(iced::widget::scrollable(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn tile<'a>(i18n: &'a I18n, category: &'static Category, index: usize) -> Element<'a, Message> {
    button(
        Column::new()
            .spacing(spacing::XS)
            .width(Length::Fill)
            .push(Text::new(category.glyph).size(sizing::ICON_LG))
            .push(
                Text::new(i18n.tr(category.title_key))
                    .size(typography::TITLE_SM)
                    .color(palette::WHITE),
            )
            .push(
                Text::new(i18n.tr(category.desc_key))
                    .size(typography::CAPTION)
                    .color(palette::MUTED),
            ),
    )
    .on_press(Message::OpenCategory(index))
    .padding(spacing::MD)
    .width(Length::FillPortion(1))
    .style(styles::button::glass)
    .into()
}
