// SPDX-License-Identifier: MPL-2.0
//! Divination domain layer: the card table, mock draw history, and the
//! mock consultant reply selection.

pub mod card;
pub mod history;
pub mod oracle;

pub use card::{Arcana, CardId, TarotCard};
pub use history::{CardRecord, Mood, Statistics};
pub use oracle::{Oracle, RandomSource};
