// SPDX-License-Identifier: MPL-2.0
//! UI modules: one per screen, plus the bottom navigation, shared styles,
//! design tokens, and the canvas widgets of the decorative layer.

pub mod calendar;
pub mod card_animation;
pub mod chat;
pub mod daily;
pub mod design_tokens;
pub mod draw;
pub mod explore;
pub mod home;
pub mod navbar;
pub mod profile;
pub mod result;
pub mod shuffle;
pub mod styles;
pub mod theming;
pub mod widgets;
