// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

use crate::ui::theming::ThemeMode;

/// Locale the application falls back to when neither the CLI, the config
/// file, nor the OS locale matches an embedded catalog.
pub const DEFAULT_LOCALE: &str = "zh-CN";

/// Default theme mode for new installations.
pub fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

// ==========================================================================
// Timed flow durations (milliseconds)
// ==========================================================================

/// Delay between entering the shuffle screen and the shuffle starting.
pub const SHUFFLE_WARMUP_MS: u64 = 800;

/// Duration of the shuffle animation before the deck settles.
pub const SHUFFLE_RUN_MS: u64 = 3_500;

/// Delay between locking a drawn card and showing the reading.
pub const DRAW_REVEAL_MS: u64 = 800;

/// Simulated consultant typing delay before a chat reply appears.
pub const CHAT_REPLY_MS: u64 = 1_500;

/// Daily-draw animation: end of the shuffling stage.
pub const DAILY_SHUFFLE_END_MS: u64 = 2_000;

/// Daily-draw animation: end of the revealing stage.
pub const DAILY_REVEAL_END_MS: u64 = 4_000;

/// Daily-draw animation: hand-off to the result screen.
pub const DAILY_COMPLETE_MS: u64 = 5_500;

// ==========================================================================
// Tick cadence
// ==========================================================================

/// Tick period while a timed flow is waiting on a deadline.
pub const TIMER_TICK_MS: u64 = 100;

/// Tick period for purely decorative animation.
pub const AMBIENT_TICK_MS: u64 = 250;

const _: () = {
    assert!(SHUFFLE_WARMUP_MS < SHUFFLE_RUN_MS);
    assert!(DAILY_SHUFFLE_END_MS < DAILY_REVEAL_END_MS);
    assert!(DAILY_REVEAL_END_MS < DAILY_COMPLETE_MS);
    assert!(TIMER_TICK_MS < AMBIENT_TICK_MS);
};
