use serde::{Deserialize, Serialize};

use crate::domain::{Card, CardSlot, Deck, Rank, Suit};
use crate::engine::hand_history::HandRecord;

/// Адрес слота карты внутри раздачи.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CardSlotRef {
    /// Карта героя.
    Hero(usize),
    /// Общая карта раунда.
    Board { round: usize, index: usize },
    /// Карта, пришедшая герою на обмене.
    Drawn { round: usize, index: usize },
    /// Карта в руке оппонента.
    Villain { hand: usize, index: usize },
}

/// Все полностью заданные карты раздачи с их адресами.
///
/// Пул не кэшируется: его строят заново из живой версии раздачи
/// на каждый запрос.
#[derive(Clone, Debug, Default)]
pub struct CardPool {
    used: Vec<(CardSlotRef, Card)>,
}

impl CardPool {
    pub fn collect(record: &HandRecord) -> Self {
        let mut used = Vec::new();
        let mut push = |slot: CardSlotRef, card: &CardSlot| {
            if let Some(card) = card.card() {
                used.push((slot, card));
            }
        };

        for (i, card) in record.hero_hand.iter().enumerate() {
            push(CardSlotRef::Hero(i), card);
        }
        for (r, round) in record.rounds.iter().enumerate() {
            for (i, card) in round.board.iter().enumerate() {
                push(CardSlotRef::Board { round: r, index: i }, card);
            }
            if let Some(draw) = &round.draw {
                for (i, card) in draw.drawn.iter().enumerate() {
                    push(CardSlotRef::Drawn { round: r, index: i }, card);
                }
            }
        }
        for (h, villain) in record.villains.iter().enumerate() {
            for (i, card) in villain.cards.iter().enumerate() {
                push(CardSlotRef::Villain { hand: h, index: i }, card);
            }
        }

        Self { used }
    }

    /// Свободна ли карта. Слот `excluding` (тот, что сейчас редактируется)
    /// сам себя не занимает.
    pub fn is_available(&self, suit: Suit, rank: Rank, excluding: Option<CardSlotRef>) -> bool {
        let card = Card::new(rank, suit);
        !self
            .used
            .iter()
            .any(|(slot, used)| *used == card && Some(*slot) != excluding)
    }

    pub fn used_cards(&self) -> Vec<Card> {
        self.used.iter().map(|(_, c)| *c).collect()
    }

    /// Колода без использованных карт.
    pub fn remaining(&self) -> Deck {
        let mut deck = Deck::standard_52();
        deck.remove_cards(&self.used_cards());
        deck
    }
}
