// SPDX-License-Identifier: MPL-2.0
//! Draw-history calendar.
//!
//! A month grid over the mock records: days with a draw carry a mood dot
//! and can be selected to show the record's detail card; the footer sums
//! up the history.

use crate::app::Screen;
use crate::divination::history::{self, Mood};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use chrono::{Datelike, Local, NaiveDate};
use fluent_bundle::FluentArgs;
use iced::{
    alignment::Horizontal,
    widget::{button, Column, Container, Row, Text},
    Color, Element, Length,
};

/// Fluent keys of the weekday headers, Sunday first.
const WEEKDAY_KEYS: [&str; 7] = [
    "weekday-sun",
    "weekday-mon",
    "weekday-tue",
    "weekday-wed",
    "weekday-thu",
    "weekday-fri",
    "weekday-sat",
];

/// Number of leading blank cells before day 1, Sunday-first.
pub fn leading_blanks(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// Number of days in the month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next.and_then(|d| d.pred_opt()).map(|d| d.day()).unwrap_or(0)
}

/// Per-visit state.
#[derive(Debug, Clone)]
pub struct State {
    year: i32,
    month: u32,
    selected: Option<NaiveDate>,
    today: NaiveDate,
}

impl State {
    pub fn new() -> Self {
        let today = Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
            selected: None,
            today,
        }
    }

    /// Starts on a fixed month (tests).
    pub fn for_month(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            selected: None,
            today: Local::now().date_naive(),
        }
    }

    pub fn visible_month(&self) -> (i32, u32) {
        (self.year, self.month)
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    fn step_month(&mut self, forward: bool) {
        if forward {
            if self.month == 12 {
                self.year += 1;
                self.month = 1;
            } else {
                self.month += 1;
            }
        } else if self.month == 1 {
            self.year -= 1;
            self.month = 12;
        } else {
            self.month -= 1;
        }
        self.selected = None;
    }

    fn select_day(&mut self, day: u32) {
        let date = NaiveDate::from_ymd_opt(self.year, self.month, day);
        // Only days with a record stay selected; anything else clears the
        // detail card.
        self.selected = date.filter(|d| history::record_for(*d).is_some());
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// Messages emitted by the calendar screen.
#[derive(Debug, Clone)]
pub enum Message {
    Back,
    PreviousMonth,
    NextMonth,
    SelectDay(u32),
    Reread,
    ShowDetails,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Navigate(Screen),
}

/// Process a calendar screen message.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Back => Event::Navigate(Screen::Home),
        Message::PreviousMonth => {
            state.step_month(false);
            Event::None
        }
        Message::NextMonth => {
            state.step_month(true);
            Event::None
        }
        Message::SelectDay(day) => {
            state.select_day(day);
            Event::None
        }
        Message::Reread => Event::Navigate(Screen::Chat),
        // Details stay on this screen; the detail card is already visible.
        Message::ShowDetails => Event::None,
    }
}

fn mood_color(mood: Mood) -> Color {
    match mood {
        Mood::Positive => palette::MOOD_POSITIVE,
        Mood::Neutral => palette::MOOD_NEUTRAL,
        Mood::Negative => palette::MOOD_NEGATIVE,
    }
}

/// Contextual data needed to render the calendar screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Render the calendar screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let header = Row::new()
        .width(Length::Fill)
        .push(
            button(Text::new(ctx.i18n.tr("back-button")).size(typography::BODY))
                .on_press(Message::Back)
                .style(styles::button::ghost),
        )
        .push(iced::widget::Space::new().width(Length::Fill))
        .push(
            Text::new(ctx.i18n.tr("calendar-title"))
                .size(typography::TITLE_MD)
                .color(palette::WHITE),
        )
        .push(iced::widget::Space::new().width(Length::Fill));

    let content = Column::new()
        .align_x(Horizontal::Center)
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(header)
        .push(month_switcher(&ctx))
        .push(month_grid(&ctx))
        .extend(detail_card(&ctx))
        .push(statistics_row(&ctx));

    Container::new(iced::widget::scrollable(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn month_switcher<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let (year, month) = ctx.state.visible_month();

    let mut title_args = FluentArgs::new();
    title_args.set("year", year);
    title_args.set("month", month);

    let mut count_args = FluentArgs::new();
    count_args.set("count", history::draws_in_month(year, month));

    Row::new()
        .width(Length::Fill)
        .align_y(iced::alignment::Vertical::Center)
        .push(
            button(Text::new("‹").size(typography::TITLE_MD))
                .on_press(Message::PreviousMonth)
                .style(styles::button::ghost),
        )
        .push(iced::widget::Space::new().width(Length::Fill))
        .push(
            Column::new()
                .align_x(Horizontal::Center)
                .push(
                    Text::new(ctx.i18n.tr_with("calendar-month-title", &title_args))
                        .size(typography::TITLE_SM)
                        .color(palette::WHITE),
                )
                .push(
                    Text::new(ctx.i18n.tr_with("calendar-month-count", &count_args))
                        .size(typography::CAPTION)
                        .color(palette::MUTED),
                ),
        )
        .push(iced::widget::Space::new().width(Length::Fill))
        .push(
            button(Text::new("›").size(typography::TITLE_MD))
                .on_press(Message::NextMonth)
                .style(styles::button::ghost),
        )
        .into()
}

fn month_grid<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let (year, month) = ctx.state.visible_month();

    let mut headers = Row::new().spacing(spacing::XXS);
    for key in WEEKDAY_KEYS {
        headers = headers.push(
            Container::new(
                Text::new(ctx.i18n.tr(key))
                    .size(typography::CAPTION)
                    .color(palette::MUTED),
            )
            .width(Length::FillPortion(1))
            .align_x(Horizontal::Center),
        );
    }

    let blanks = leading_blanks(year, month);
    let days = days_in_month(year, month);

    let mut grid = Column::new().spacing(spacing::XXS).push(headers);
    let mut row = Row::new().spacing(spacing::XXS);
    let mut cells_in_row = 0u32;

    for _ in 0..blanks {
        row = row.push(Container::new(Text::new("")).width(Length::FillPortion(1)));
        cells_in_row += 1;
    }

    for day in 1..=days {
        row = row.push(day_cell(ctx, year, month, day));
        cells_in_row += 1;
        if cells_in_row == 7 {
            grid = grid.push(row);
            row = Row::new().spacing(spacing::XXS);
            cells_in_row = 0;
        }
    }
    if cells_in_row > 0 {
        while cells_in_row < 7 {
            row = row.push(Container::new(Text::new("")).width(Length::FillPortion(1)));
            cells_in_row += 1;
        }
        grid = grid.push(row);
    }

    Container::new(grid)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::mystical_card)
        .into()
}

fn day_cell<'a>(ctx: &ViewContext<'a>, year: i32, month: u32, day: u32) -> Element<'a, Message> {
    let date = NaiveDate::from_ymd_opt(year, month, day);
    let record = date.and_then(history::record_for);
    let is_selected = date.is_some() && ctx.state.selected() == date;
    let is_today = date == Some(ctx.state.today);

    let number_color = if is_selected {
        palette::GOLD
    } else if is_today {
        palette::NEON_BLUE
    } else if record.is_some() {
        palette::WHITE
    } else {
        palette::MUTED
    };

    let mut cell = Column::new()
        .align_x(Horizontal::Center)
        .push(Text::new(day.to_string()).size(typography::BODY).color(number_color));
    if let Some(record) = record {
        cell = cell.push(
            Text::new("•")
                .size(typography::CAPTION)
                .color(mood_color(record.mood)),
        );
    }

    button(cell)
        .on_press(Message::SelectDay(day))
        .padding(spacing::XXS)
        .style(styles::button::ghost)
        .width(Length::FillPortion(1))
        .into()
}

fn detail_card<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    let record = ctx.state.selected().and_then(history::record_for)?;

    let mut date_args = FluentArgs::new();
    date_args.set("month", record.date.month());
    date_args.set("day", record.date.day());

    let arcana_key = match record.arcana() {
        crate::divination::Arcana::Major => "calendar-arcana-major",
        crate::divination::Arcana::Minor => "calendar-arcana-minor",
    };

    let title_row = Row::new()
        .spacing(spacing::XS)
        .align_y(iced::alignment::Vertical::Center)
        .push(
            Text::new(ctx.i18n.tr_with("calendar-selected-date", &date_args))
                .size(typography::TITLE_SM)
                .color(palette::WHITE),
        )
        .push(
            Container::new(Text::new(ctx.i18n.tr(arcana_key)).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::container::badge(mood_color(record.mood))),
        );

    let mut keywords = Row::new().spacing(spacing::XS);
    for key in record.keyword_keys {
        keywords = keywords.push(
            Container::new(Text::new(ctx.i18n.tr(key)).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::container::badge(palette::GOLD)),
        );
    }

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(
            button(Text::new(ctx.i18n.tr("calendar-reread-button")).size(typography::BODY))
                .on_press(Message::Reread)
                .style(styles::button::gold),
        )
        .push(
            button(Text::new(ctx.i18n.tr("calendar-details-button")).size(typography::BODY))
                .on_press(Message::ShowDetails)
                .style(styles::button::outline),
        );

    Some(
        Container::new(
            Column::new()
                .spacing(spacing::SM)
                .push(title_row)
                .push(
                    Text::new(ctx.i18n.tr(record.card.name_key()))
                        .size(typography::TITLE_SM)
                        .color(palette::GOLD),
                )
                .push(keywords)
                .push(actions),
        )
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::mystical_card)
        .into(),
    )
}

fn statistics_row<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let stats = history::statistics();
    let entries = [
        ("🎯", "calendar-stat-total", stats.total),
        ("✨", "calendar-stat-positive", stats.positive),
        ("⭐", "calendar-stat-major", stats.major),
    ];

    let mut row = Row::new().spacing(spacing::SM);
    for (glyph, label_key, value) in entries {
        row = row.push(
            Container::new(
                Column::new()
                    .align_x(Horizontal::Center)
                    .spacing(spacing::XXS)
                    .push(Text::new(glyph).size(typography::TITLE_SM))
                    .push(
                        Text::new(value.to_string())
                            .size(typography::TITLE_SM)
                            .color(palette::GOLD),
                    )
                    .push(
                        Text::new(ctx.i18n.tr(label_key))
                            .size(typography::CAPTION)
                            .color(palette::MUTED),
                    ),
            )
            .padding(spacing::SM)
            .width(Length::FillPortion(1))
            .align_x(Horizontal::Center)
            .style(styles::container::glass_card),
        );
    }
    row.into()
}
