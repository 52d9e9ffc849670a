// SPDX-License-Identifier: MPL-2.0
//! Chat screen with the mock tarot consultant.
//!
//! The conversation is local and ephemeral: sending a message schedules a
//! canned reply after a fixed typing delay, picked by the oracle. The
//! pending reply dies with the page state when the user navigates away.

use crate::app::config::CHAT_REPLY_MS;
use crate::app::Screen;
use crate::divination::Oracle;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use chrono::{DateTime, Local};
use iced::{
    alignment::Horizontal,
    widget::{button, scrollable, text_input, Column, Container, Row, Text},
    Element, Length,
};
use std::time::{Duration, Instant};

/// Fluent keys of the quick-question chips.
pub const QUICK_QUESTION_KEYS: [&str; 4] = [
    "chat-quick-1",
    "chat-quick-2",
    "chat-quick-3",
    "chat-quick-4",
];

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Consultant,
}

/// One message in the conversation.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: String,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Local>,
}

/// Per-visit state. Dropped when the screen is left, which cancels any
/// pending reply.
#[derive(Debug)]
pub struct State {
    messages: Vec<ChatMessage>,
    input: String,
    pending_reply_at: Option<Instant>,
    next_id: u64,
}

impl State {
    /// Starts a fresh conversation with the consultant's greeting.
    pub fn new(i18n: &I18n) -> Self {
        let mut state = Self {
            messages: Vec::new(),
            input: String::new(),
            pending_reply_at: None,
            next_id: 1,
        };
        let greeting = i18n.tr("chat-greeting");
        state.push_message(greeting, Sender::Consultant);
        state
    }

    fn push_message(&mut self, content: String, sender: Sender) {
        self.messages.push(ChatMessage {
            id: self.next_id.to_string(),
            content,
            sender,
            timestamp: Local::now(),
        });
        self.next_id += 1;
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Whether the consultant is "typing".
    pub fn is_replying(&self) -> bool {
        self.pending_reply_at.is_some()
    }

    /// Whether the pending reply still needs timer-cadence ticks.
    pub fn timers_active(&self) -> bool {
        self.is_replying()
    }

    /// Quick questions are offered only while the greeting stands alone.
    pub fn shows_quick_questions(&self) -> bool {
        self.messages.len() == 1
    }

    fn can_send(&self) -> bool {
        !self.input.trim().is_empty() && !self.is_replying()
    }

    /// Sends the current input, scheduling the consultant's reply.
    fn send(&mut self, now: Instant) {
        if !self.can_send() {
            return;
        }
        let content = std::mem::take(&mut self.input);
        self.push_message(content.trim().to_string(), Sender::User);
        self.pending_reply_at = Some(now + Duration::from_millis(CHAT_REPLY_MS));
    }

    /// Advances the typing delay; appends the reply once it is due.
    pub fn tick(&mut self, now: Instant, oracle: &mut Oracle, i18n: &I18n) {
        if let Some(due) = self.pending_reply_at {
            if now >= due {
                self.pending_reply_at = None;
                let reply = i18n.tr(oracle.pick_reply());
                self.push_message(reply, Sender::Consultant);
            }
        }
    }
}

/// Messages emitted by the chat screen.
#[derive(Debug, Clone)]
pub enum Message {
    Back,
    InputChanged(String),
    Send,
    QuickQuestion(usize),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Navigate(Screen),
}

/// Process a chat screen message.
pub fn update(state: &mut State, message: Message, now: Instant, i18n: &I18n) -> Event {
    match message {
        Message::Back => Event::Navigate(Screen::Home),
        Message::InputChanged(value) => {
            state.input = value;
            Event::None
        }
        Message::Send => {
            state.send(now);
            Event::None
        }
        Message::QuickQuestion(index) => {
            if let Some(key) = QUICK_QUESTION_KEYS.get(index) {
                state.input = i18n.tr(key);
            }
            Event::None
        }
    }
}

/// Contextual data needed to render the chat screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub elapsed: f32,
}

/// Render the chat screen.
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
            Column::new()
                .align_x(Horizontal::Center)
                .push(
                    Text::new(ctx.i18n.tr("chat-title"))
                        .size(typography::TITLE_SM)
                        .color(palette::WHITE),
                )
                .push(
                    Text::new(ctx.i18n.tr("chat-online"))
                        .size(typography::CAPTION)
                        .color(palette::MOOD_POSITIVE),
                ),
        )
        .push(iced::widget::Space::new().width(Length::Fill));

    let mut feed = Column::new().spacing(spacing::SM).padding(spacing::MD);
    for message in ctx.state.messages() {
        feed = feed.push(bubble(ctx.i18n, message));
    }
    if ctx.state.is_replying() {
        feed = feed.push(typing_indicator(ctx.elapsed));
    }

    let transcript = scrollable(feed).height(Length::Fill).width(Length::Fill);

    let mut body = Column::new()
        .spacing(spacing::XS)
        .push(header)
        .push(transcript);

    if ctx.state.shows_quick_questions() {
        body = body.push(quick_questions(ctx.i18n));
    }

    let input_row = Row::new()
        .spacing(spacing::XS)
        .push(
            text_input(
                &ctx.i18n.tr("chat-input-placeholder"),
                ctx.state.input(),
            )
            .on_input(Message::InputChanged)
            .on_submit(Message::Send)
            .padding(spacing::SM)
            .width(Length::Fill),
        )
        .push({
            let send = button(Text::new("➤").size(typography::BODY));
            if ctx.state.can_send() {
                send.on_press(Message::Send).style(styles::button::gold)
            } else {
                send.style(styles::button::disabled())
            }
        });

    body = body.push(Container::new(input_row).padding(spacing::SM));

    Container::new(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn bubble<'a>(i18n: &'a I18n, message: &'a ChatMessage) -> Element<'a, Message> {
    let time = message.timestamp.format("%H:%M").to_string();
    let style = match message.sender {
        Sender::User => styles::container::bubble_user,
        Sender::Consultant => styles::container::bubble_consultant,
    };
    let time_color = match message.sender {
        Sender::User => palette::BLACK,
        Sender::Consultant => palette::MUTED,
    };

    let card = Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(message.content.as_str()).size(typography::BODY))
            .push(Text::new(time).size(typography::CAPTION).color(time_color)),
    )
    .padding(spacing::SM)
    .max_width(420.0)
    .style(style);

    let avatar = match message.sender {
        Sender::User => Text::new(i18n.tr("chat-user-avatar")).size(typography::CAPTION),
        Sender::Consultant => Text::new("★").color(palette::GOLD),
    };

    let row = match message.sender {
        Sender::User => Row::new()
            .spacing(spacing::XS)
            .push(iced::widget::Space::new().width(Length::Fill))
            .push(card)
            .push(avatar),
        Sender::Consultant => Row::new()
            .spacing(spacing::XS)
            .push(avatar)
            .push(card)
            .push(iced::widget::Space::new().width(Length::Fill)),
    };

    row.into()
}

fn typing_indicator<'a>(elapsed: f32) -> Element<'a, Message> {
    let mut dots = Row::new().spacing(spacing::XXS);
    for index in 0..3 {
        let alpha = 0.4 + 0.6 * ((elapsed * 3.0 + index as f32 * 0.5).sin() * 0.5 + 0.5);
        dots = dots.push(Text::new("●").size(typography::CAPTION).color(iced::Color {
            a: alpha,
            ..palette::GOLD
        }));
    }
    Row::new()
        .spacing(spacing::XS)
        .push(Text::new("★").color(palette::GOLD))
        .push(
            Container::new(dots)
                .padding(spacing::SM)
                .style(styles::container::bubble_consultant),
        )
        .into()
}

fn quick_questions<'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let mut chips = Column::new().spacing(spacing::XXS);
    for (index, key) in QUICK_QUESTION_KEYS.iter().enumerate() {
        chips = chips.push(
            button(Text::new(i18n.tr(key)).size(typography::CAPTION))
                .on_press(Message::QuickQuestion(index))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::glass),
        );
    }
    Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .push(
                Text::new(i18n.tr("chat-quick-label"))
                    .size(typography::CAPTION)
                    .color(palette::MUTED),
            )
            .push(chips),
    )
    .padding([0.0, spacing::MD])
    .into()
}
