// SPDX-License-Identifier: MPL-2.0
//! Tick subscriptions for the application.
//!
//! Everything time-driven runs off one periodic tick: the page timelines
//! (shuffle, draw reveal, daily animation, chat typing delay) and the
//! decorative canvas animation. The cadence tightens while a timed flow is
//! waiting on a deadline and relaxes to the ambient rate otherwise.

use super::Message;
use crate::app::config::{AMBIENT_TICK_MS, TIMER_TICK_MS};
use iced::{time, Subscription};
use std::time::Duration;

/// Creates the periodic tick subscription.
pub fn create_tick_subscription(timers_active: bool) -> Subscription<Message> {
    let period = if timers_active {
        Duration::from_millis(TIMER_TICK_MS)
    } else {
        Duration::from_millis(AMBIENT_TICK_MS)
    };
    time::every(period).map(Message::Tick)
}
