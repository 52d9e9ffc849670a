// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{calendar, chat, daily, draw, explore, home, navbar, profile, result, shuffle};
use std::time::Instant;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level screen messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    SwitchScreen(Screen),
    Navbar(navbar::Message),
    Home(home::Message),
    Shuffle(shuffle::Message),
    Draw(draw::Message),
    Daily(daily::Message),
    Result(result::Message),
    Chat(chat::Message),
    Calendar(calendar::Message),
    Explore(explore::Message),
    Profile(profile::Message),
    /// Periodic tick driving the timed flows and the decorative layer.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `zh-CN`, `en-US`).
    pub lang: Option<String>,
    /// Optional screen name to open on startup (e.g. `calendar`).
    /// Unknown names fall back to the home screen.
    pub screen: Option<String>,
}
