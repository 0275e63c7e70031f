use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Масть карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Suit {
    Spades,   // ♠
    Hearts,   // ♥
    Diamonds, // ♦
    Clubs,    // ♣
}

impl Suit {
    /// Все масти в порядке отображения в пикере.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub fn from_char(ch: char) -> Option<Suit> {
        match ch {
            's' | 'S' => Some(Suit::Spades),
            'h' | 'H' => Some(Suit::Hearts),
            'd' | 'D' => Some(Suit::Diamonds),
            'c' | 'C' => Some(Suit::Clubs),
            _ => None,
        }
    }
}

/// Ранг карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// Ранги от старшего к младшему (A, K, ..., 2).
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::King,
        Rank::Queen,
        Rank::Jack,
        Rank::Ten,
        Rank::Nine,
        Rank::Eight,
        Rank::Seven,
        Rank::Six,
        Rank::Five,
        Rank::Four,
        Rank::Three,
        Rank::Two,
    ];

    pub fn from_char(ch: char) -> Option<Rank> {
        let rank = match ch.to_ascii_uppercase() {
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };
        Some(rank)
    }

    fn as_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

/// Обычная покерная карта (52-карточная колода).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl fmt::Display for Card {
    /// Формат вида `Ah`, `Td`, `7c`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Ошибка разбора короткой записи карты ("As", "Kh").
/// Текст ошибки показывается пользователю рядом с полем ввода.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("Invalid card input. Please enter valid cards (e.g. As, Kh).")]
pub struct CardParseError {
    /// Исходная строка, которую не удалось разобрать.
    pub input: String,
}

/// Парсинг строки вида "Ah", "Td", "7c" (ранг без учёта регистра).
impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || CardParseError { input: s.to_string() };

        let mut chars = s.trim().chars();
        let (Some(r_ch), Some(s_ch), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(err());
        };

        let rank = Rank::from_char(r_ch).ok_or_else(err)?;
        let suit = Suit::from_char(s_ch).ok_or_else(err)?;

        Ok(Card { rank, suit })
    }
}

/// Слот под карту в форме: масть и ранг выбираются независимо,
/// поэтому любое из полей может быть ещё не задано.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CardSlot {
    pub rank: Option<Rank>,
    pub suit: Option<Suit>,
}

impl CardSlot {
    pub const UNSET: CardSlot = CardSlot { rank: None, suit: None };

    pub const fn of(card: Card) -> Self {
        Self {
            rank: Some(card.rank),
            suit: Some(card.suit),
        }
    }

    /// Полностью заданная карта или None, если хотя бы одно поле пустое.
    pub fn card(&self) -> Option<Card> {
        match (self.rank, self.suit) {
            (Some(rank), Some(suit)) => Some(Card::new(rank, suit)),
            _ => None,
        }
    }

    pub fn is_unset(&self) -> bool {
        self.card().is_none()
    }
}

impl From<Card> for CardSlot {
    fn from(card: Card) -> Self {
        CardSlot::of(card)
    }
}

/// Склеить заданные карты без разделителя: `AsKh`.
pub fn concat_cards<'a>(slots: impl IntoIterator<Item = &'a CardSlot>) -> String {
    slots
        .into_iter()
        .filter_map(CardSlot::card)
        .map(|c| c.to_string())
        .collect()
}
