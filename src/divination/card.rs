// SPDX-License-Identifier: MPL-2.0
//! Static tarot card data.
//!
//! The deck is intentionally tiny: it covers the cards the application
//! actually shows (the reading result and the mock draw history). Display
//! strings live in the Fluent catalogs; this table carries the keys plus
//! the data that is the same in every language (numbers, English names).

/// Identifies a card in the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardId {
    Fool,
    Empress,
    Hermit,
    ThreeOfCups,
    FiveOfSwords,
}

/// Whether a card belongs to the major or minor arcana.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arcana {
    Major,
    Minor,
}

/// Static data for a single card.
#[derive(Debug, Clone, Copy)]
pub struct TarotCard {
    pub id: CardId,
    pub arcana: Arcana,
    /// Card number as printed on the face ("0" for the Fool).
    pub number: &'static str,
    /// English name, shown verbatim under the localized name.
    pub english_name: &'static str,
    /// Fluent key for the localized name.
    pub name_key: &'static str,
}

/// The full card table.
pub static DECK: [TarotCard; 5] = [
    TarotCard {
        id: CardId::Fool,
        arcana: Arcana::Major,
        number: "0",
        english_name: "The Fool",
        name_key: "card-fool-name",
    },
    TarotCard {
        id: CardId::Empress,
        arcana: Arcana::Major,
        number: "III",
        english_name: "The Empress",
        name_key: "card-empress-name",
    },
    TarotCard {
        id: CardId::Hermit,
        arcana: Arcana::Major,
        number: "IX",
        english_name: "The Hermit",
        name_key: "card-hermit-name",
    },
    TarotCard {
        id: CardId::ThreeOfCups,
        arcana: Arcana::Minor,
        number: "3",
        english_name: "Three of Cups",
        name_key: "card-three-of-cups-name",
    },
    TarotCard {
        id: CardId::FiveOfSwords,
        arcana: Arcana::Minor,
        number: "5",
        english_name: "Five of Swords",
        name_key: "card-five-of-swords-name",
    },
];

impl CardId {
    /// Looks up the static data for this card.
    pub fn card(self) -> &'static TarotCard {
        DECK.iter()
            .find(|card| card.id == self)
            .expect("every CardId has a DECK entry")
    }

    pub fn arcana(self) -> Arcana {
        self.card().arcana
    }

    pub fn name_key(self) -> &'static str {
        self.card().name_key
    }
}

/// The card every reading currently reveals. The selection is fixed mock
/// content, not a shuffle over the deck.
pub const READING_CARD: CardId = CardId::Fool;

/// Fluent key for the reading card's long description.
pub const READING_DESCRIPTION_KEY: &str = "card-fool-description";

/// Fluent key for the one-line summary on the daily screen.
pub const READING_SUMMARY_KEY: &str = "card-fool-summary";
