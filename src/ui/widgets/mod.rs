// SPDX-License-Identifier: MPL-2.0
//! Custom canvas widgets for the decorative layer.

pub mod card_back;
pub mod floating_orb;

pub use card_back::CardBack;
pub use floating_orb::FloatingOrb;
