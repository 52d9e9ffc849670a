// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct owns the single navigation discriminant plus the
//! active screen's local state. Screen transitions, timed flows, and the
//! decorative animation all run through the one update loop so the
//! user-facing behavior stays easy to audit in this module.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::divination::Oracle;
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeMode;
use crate::ui::{calendar, card_animation, chat, daily, draw, shuffle};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    screen: Screen,
    theme_mode: ThemeMode,
    /// Epoch for the decorative animation.
    started_at: Instant,
    /// Logical now: advanced by ticks, never by wall-clock reads elsewhere.
    now: Instant,
    shuffle: Option<shuffle::State>,
    draw: Option<draw::State>,
    daily: Option<daily::State>,
    card_animation: Option<card_animation::State>,
    chat: Option<chat::State>,
    calendar: Option<calendar::State>,
    oracle: Oracle,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 420;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 840;
pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 640;

/// Builds the window settings (portrait, phone-shaped).
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

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce).
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
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let now = Instant::now();
        Self {
            i18n: I18n::default(),
            screen: Screen::Home,
            theme_mode: ThemeMode::System,
            started_at: now,
            now,
            shuffle: None,
            draw: None,
            daily: None,
            card_animation: None,
            chat: None,
            calendar: None,
            oracle: Oracle::new(),
        }
    }
}

impl App {
    /// Initializes application state from config and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(key) = config_warning {
            tracing::warn!(key, "configuration problem, using defaults");
        }

        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            ..Self::default()
        };

        if let Some(name) = flags.screen.as_deref() {
            let target = Screen::resolve(name);
            let _ = update::handle_screen_switch(&mut app.context(), target);
        }

        (app, Task::none())
    }

    fn context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &self.i18n,
            screen: &mut self.screen,
            shuffle: &mut self.shuffle,
            draw: &mut self.draw,
            daily: &mut self.daily,
            card_animation: &mut self.card_animation,
            chat: &mut self.chat,
            calendar: &mut self.calendar,
            oracle: &mut self.oracle,
            now: self.now,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let screen_key = match self.screen {
            Screen::Home => None,
            Screen::Shuffle => Some("shuffle-title"),
            Screen::Draw => Some("draw-title"),
            Screen::Daily | Screen::CardAnimation => Some("daily-title"),
            Screen::Result => Some("result-title"),
            Screen::Chat => Some("chat-title"),
            Screen::Calendar => Some("calendar-title"),
            Screen::Explore => Some("explore-title"),
            Screen::Profile => Some("nav-profile"),
        };
        match screen_key {
            Some(key) => format!("{} - {}", self.i18n.tr(key), app_name),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Whether any active screen is waiting on a deadline.
    fn timers_active(&self) -> bool {
        match self.screen {
            Screen::Shuffle => self
                .shuffle
                .as_ref()
                .is_some_and(|state| state.timers_active(self.now)),
            Screen::Draw => self.draw.as_ref().is_some_and(draw::State::timers_active),
            Screen::CardAnimation => self
                .card_animation
                .as_ref()
                .is_some_and(card_animation::State::timers_active),
            Screen::Chat => self.chat.as_ref().is_some_and(chat::State::timers_active),
            _ => false,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.timers_active())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        if let Message::Tick(instant) = &message {
            if *instant > self.now {
                self.now = *instant;
            }
        }

        let mut ctx = self.context();
        match message {
            Message::SwitchScreen(target) => update::handle_screen_switch(&mut ctx, target),
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Home(home_message) => update::handle_home_message(&mut ctx, home_message),
            Message::Shuffle(shuffle_message) => {
                update::handle_shuffle_message(&mut ctx, shuffle_message)
            }
            Message::Draw(draw_message) => update::handle_draw_message(&mut ctx, draw_message),
            Message::Daily(daily_message) => update::handle_daily_message(&mut ctx, daily_message),
            Message::Result(result_message) => {
                update::handle_result_message(&mut ctx, result_message)
            }
            Message::Chat(chat_message) => update::handle_chat_message(&mut ctx, chat_message),
            Message::Calendar(calendar_message) => {
                update::handle_calendar_message(&mut ctx, calendar_message)
            }
            Message::Explore(explore_message) => {
                update::handle_explore_message(&mut ctx, explore_message)
            }
            Message::Profile(profile_message) => {
                update::handle_profile_message(&mut ctx, profile_message)
            }
            Message::Tick(_) => update::handle_tick(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            shuffle: self.shuffle.as_ref(),
            draw: self.draw.as_ref(),
            daily: self.daily.as_ref(),
            card_animation: self.card_animation.as_ref(),
            chat: self.chat.as_ref(),
            calendar: self.calendar.as_ref(),
            now: self.now,
            elapsed: self.now.duration_since(self.started_at).as_secs_f32(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::navbar;
    use std::sync::{Mutex, OnceLock};
    use std::time::Duration;
    use tempfile::tempdir;

    fn config_env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(&std::path::Path),
    {
        let _guard = config_env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous = std::env::var(paths::ENV_CONFIG_DIR).ok();
        std::env::set_var(paths::ENV_CONFIG_DIR, temp_dir.path());

        test(temp_dir.path());

        if let Some(value) = previous {
            std::env::set_var(paths::ENV_CONFIG_DIR, value);
        } else {
            std::env::remove_var(paths::ENV_CONFIG_DIR);
        }
    }

    fn millis(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    fn tick(app: &mut App, offset: Duration) {
        let instant = app.now + offset;
        let _ = app.update(Message::Tick(instant));
    }

    #[test]
    fn new_starts_on_home_without_page_state() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.screen, Screen::Home);
            assert!(app.shuffle.is_none());
            assert!(app.chat.is_none());
        });
    }

    #[test]
    fn screen_flag_opens_the_requested_screen() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags {
                screen: Some("calendar".to_string()),
                ..Flags::default()
            });
            assert_eq!(app.screen, Screen::Calendar);
            assert!(app.calendar.is_some());
        });
    }

    #[test]
    fn unknown_screen_flag_falls_back_to_home() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags {
                screen: Some("animation-page".to_string()),
                ..Flags::default()
            });
            assert_eq!(app.screen, Screen::Home);
        });
    }

    #[test]
    fn animation_flag_opens_the_daily_reveal() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags {
                screen: Some("animation".to_string()),
                ..Flags::default()
            });
            assert_eq!(app.screen, Screen::CardAnimation);
            assert!(app.card_animation.is_some());
        });
    }

    #[test]
    fn switching_screens_swaps_page_state() {
        let mut app = App::default();
        let _ = app.update(Message::SwitchScreen(Screen::Shuffle));
        assert_eq!(app.screen, Screen::Shuffle);
        assert!(app.shuffle.is_some());

        let _ = app.update(Message::SwitchScreen(Screen::Chat));
        assert_eq!(app.screen, Screen::Chat);
        assert!(app.shuffle.is_none(), "leaving a screen drops its state");
        assert!(app.chat.is_some());
    }

    #[test]
    fn switching_to_the_current_screen_is_idempotent() {
        let mut app = App::default();
        let _ = app.update(Message::SwitchScreen(Screen::Chat));
        let _ = app.update(Message::Chat(chat::Message::InputChanged("hi".into())));

        let _ = app.update(Message::SwitchScreen(Screen::Chat));
        assert_eq!(app.screen, Screen::Chat);
        let state = app.chat.as_ref().expect("chat state");
        assert_eq!(state.input(), "hi", "re-selecting the screen keeps state");
    }

    #[test]
    fn shuffle_round_trip_reaches_draw() {
        let mut app = App::default();
        let _ = app.update(Message::SwitchScreen(Screen::Shuffle));

        // Proceed is refused while the deck is still shuffling.
        let _ = app.update(Message::Shuffle(shuffle::Message::Proceed));
        assert_eq!(app.screen, Screen::Shuffle);

        tick(&mut app, millis(4_400));
        let _ = app.update(Message::Shuffle(shuffle::Message::Proceed));
        assert_eq!(app.screen, Screen::Draw);
        assert!(app.shuffle.is_none());
        assert!(app.draw.is_some());
    }

    #[test]
    fn draw_selection_reaches_result_after_the_delay() {
        let mut app = App::default();
        let _ = app.update(Message::SwitchScreen(Screen::Draw));
        let _ = app.update(Message::Draw(draw::Message::Select(2)));

        // A second tap is a no-op while locked.
        let _ = app.update(Message::Draw(draw::Message::Select(5)));
        assert_eq!(app.draw.as_ref().unwrap().selected(), Some(2));

        tick(&mut app, millis(400));
        assert_eq!(app.screen, Screen::Draw);

        tick(&mut app, millis(500));
        assert_eq!(app.screen, Screen::Result);
        assert!(app.draw.is_none());
    }

    #[test]
    fn daily_flow_runs_through_the_reveal_to_the_result() {
        let mut app = App::default();
        let _ = app.update(Message::SwitchScreen(Screen::Daily));
        let _ = app.update(Message::Daily(daily::Message::DrawCard));
        assert_eq!(app.screen, Screen::CardAnimation);

        tick(&mut app, millis(4_000));
        assert_eq!(app.screen, Screen::CardAnimation);

        tick(&mut app, millis(1_600));
        assert_eq!(app.screen, Screen::Result);
        assert!(app.card_animation.is_none());
    }

    #[test]
    fn navigating_away_cancels_a_pending_chat_reply() {
        let mut app = App::default();
        let _ = app.update(Message::SwitchScreen(Screen::Chat));
        let _ = app.update(Message::Chat(chat::Message::InputChanged("question".into())));
        let _ = app.update(Message::Chat(chat::Message::Send));
        assert!(app.chat.as_ref().unwrap().is_replying());

        let _ = app.update(Message::SwitchScreen(Screen::Home));
        tick(&mut app, millis(3_000));

        let _ = app.update(Message::SwitchScreen(Screen::Chat));
        let state = app.chat.as_ref().expect("chat state");
        assert_eq!(
            state.messages().len(),
            1,
            "the reply timer died with the old page state"
        );
    }

    #[test]
    fn navbar_switches_between_destinations() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::Select(Screen::Profile)));
        assert_eq!(app.screen, Screen::Profile);

        let _ = app.update(Message::Navbar(navbar::Message::Select(Screen::Explore)));
        assert_eq!(app.screen, Screen::Explore);

        let _ = app.update(Message::Navbar(navbar::Message::Select(Screen::Home)));
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn timers_follow_the_active_screen() {
        let mut app = App::default();
        assert!(!app.timers_active());

        let _ = app.update(Message::SwitchScreen(Screen::Shuffle));
        assert!(app.timers_active());

        tick(&mut app, millis(5_000));
        assert!(!app.timers_active(), "settled shuffle needs no fast ticks");

        let _ = app.update(Message::SwitchScreen(Screen::Chat));
        assert!(!app.timers_active());
        let _ = app.update(Message::Chat(chat::Message::InputChanged("q".into())));
        let _ = app.update(Message::Chat(chat::Message::Send));
        assert!(app.timers_active());
    }

    #[test]
    fn stale_ticks_do_not_rewind_time() {
        let mut app = App::default();
        let _ = app.update(Message::SwitchScreen(Screen::Shuffle));
        tick(&mut app, millis(5_000));
        let settled = app.now;

        // A tick from the past must not move `now` backwards.
        let _ = app.update(Message::Tick(settled - millis(4_000)));
        assert_eq!(app.now, settled);
    }

    #[test]
    fn title_reflects_the_active_screen() {
        let mut app = App::default();
        let app_name = app.i18n.tr("window-title");
        assert_eq!(app.title(), app_name);

        let _ = app.update(Message::SwitchScreen(Screen::Calendar));
        let expected = format!("{} - {}", app.i18n.tr("calendar-title"), app_name);
        assert_eq!(app.title(), expected);
    }

    #[test]
    fn view_renders_every_screen() {
        let mut app = App::default();
        let screens = [
            Screen::Home,
            Screen::Shuffle,
            Screen::Draw,
            Screen::Daily,
            Screen::CardAnimation,
            Screen::Result,
            Screen::Chat,
            Screen::Calendar,
            Screen::Explore,
            Screen::Profile,
        ];
        for screen in screens {
            let _ = app.update(Message::SwitchScreen(screen));
            let _element = app.view();
        }
    }
}
