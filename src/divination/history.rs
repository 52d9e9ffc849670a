// SPDX-License-Identifier: MPL-2.0
//! Mock draw-history records and the statistics derived from them.
//!
//! The records stand in for a real backend; nothing in the application
//! creates or mutates them.

use super::card::{Arcana, CardId};
use chrono::NaiveDate;
use std::sync::LazyLock;

/// Emotional tone of a drawn card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Positive,
    Neutral,
    Negative,
}

/// One historical daily draw.
#[derive(Debug, Clone)]
pub struct CardRecord {
    pub date: NaiveDate,
    pub card: CardId,
    pub mood: Mood,
    /// Fluent keys of the three keywords shown on the detail card.
    pub keyword_keys: [&'static str; 3],
}

impl CardRecord {
    pub fn arcana(&self) -> Arcana {
        self.card.arcana()
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("mock record dates are valid")
}

/// The fixed mock history.
pub static RECORDS: LazyLock<Vec<CardRecord>> = LazyLock::new(|| {
    vec![
        CardRecord {
            date: date(2024, 12, 20),
            card: CardId::Fool,
            mood: Mood::Positive,
            keyword_keys: [
                "keyword-new-beginnings",
                "keyword-adventure",
                "keyword-potential",
            ],
        },
        CardRecord {
            date: date(2024, 12, 19),
            card: CardId::Empress,
            mood: Mood::Positive,
            keyword_keys: [
                "keyword-creation",
                "keyword-prosperity",
                "keyword-motherhood",
            ],
        },
        CardRecord {
            date: date(2024, 12, 18),
            card: CardId::Hermit,
            mood: Mood::Neutral,
            keyword_keys: [
                "keyword-introspection",
                "keyword-wisdom",
                "keyword-guidance",
            ],
        },
        CardRecord {
            date: date(2024, 12, 17),
            card: CardId::ThreeOfCups,
            mood: Mood::Positive,
            keyword_keys: [
                "keyword-celebration",
                "keyword-friendship",
                "keyword-creativity",
            ],
        },
        CardRecord {
            date: date(2024, 12, 16),
            card: CardId::FiveOfSwords,
            mood: Mood::Negative,
            keyword_keys: ["keyword-conflict", "keyword-defeat", "keyword-loss"],
        },
    ]
});

/// Looks up the record for an exact date, if any.
pub fn record_for(day: NaiveDate) -> Option<&'static CardRecord> {
    RECORDS.iter().find(|record| record.date == day)
}

/// Number of records falling inside the given month.
pub fn draws_in_month(year: i32, month: u32) -> usize {
    RECORDS
        .iter()
        .filter(|record| {
            use chrono::Datelike;
            record.date.year() == year && record.date.month() == month
        })
        .count()
}

/// Summary numbers shown at the bottom of the calendar screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub total: usize,
    pub positive: usize,
    pub major: usize,
}

/// Statistics over the whole mock history.
pub fn statistics() -> Statistics {
    let records = RECORDS.iter();
    let mut stats = Statistics {
        total: 0,
        positive: 0,
        major: 0,
    };
    for record in records {
        stats.total += 1;
        if record.mood == Mood::Positive {
            stats.positive += 1;
        }
        if record.arcana() == Arcana::Major {
            stats.major += 1;
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_lookup_hits_and_misses() {
        assert!(record_for(date(2024, 12, 20)).is_some());
        assert!(record_for(date(2024, 12, 21)).is_none());
        assert!(record_for(date(2023, 12, 20)).is_none());
    }

    #[test]
    fn december_2024_has_all_five_draws() {
        assert_eq!(draws_in_month(2024, 12), 5);
        assert_eq!(draws_in_month(2024, 11), 0);
        assert_eq!(draws_in_month(2025, 12), 0);
    }

    #[test]
    fn statistics_match_mock_data() {
        let stats = statistics();
        assert_eq!(
            stats,
            Statistics {
                total: 5,
                positive: 3,
                major: 3,
            }
        );
    }

    #[test]
    fn records_are_ordered_newest_first() {
        let dates: Vec<NaiveDate> = RECORDS.iter().map(|r| r.date).collect();
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
    }
}
