// SPDX-License-Identifier: MPL-2.0
//! `arcana` is a mobile-styled tarot divination app built with the Iced
//! GUI framework.
//!
//! Nine navigable screens plus an autonomous card-reveal animation hang off
//! a single screen discriminant; all content is local mock data. The crate
//! also ships two developer utilities for dependency-string cleanup
//! (`remove-versions`, `scan-imports`).

pub mod app;
pub mod divination;
pub mod error;
pub mod i18n;
pub mod ui;
