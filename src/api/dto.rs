use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, CardSlot};
use crate::domain::chips::Chips;
use crate::domain::{AnteType, Position};
use crate::engine::ActionKind;

/// DTO строки раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ActionViewDto {
    pub position: Position,
    pub kind: Option<ActionKind>,
    pub amount: Chips,
    /// Что можно выбрать в этой строке (радио-кнопки).
    pub legal: Vec<ActionKind>,
    /// Сумму можно вводить руками (Bet/Raise не в фикс-лимите).
    pub amount_editable: bool,
}

/// DTO обмена карт.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DrawViewDto {
    pub discards: Vec<usize>,
    pub drawn: Vec<CardSlot>,
    pub exchanges: Vec<(Position, u8)>,
}

/// DTO раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundViewDto {
    pub name: String,
    pub board: Vec<CardSlot>,
    pub draw: Option<DrawViewDto>,
    pub actions: Vec<ActionViewDto>,
    pub pot: Chips,
    pub current_bet: Chips,
    pub bet_raise_count: u32,
}

/// DTO руки оппонента.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct VillainViewDto {
    pub position: Option<Position>,
    pub cards: Vec<CardSlot>,
    /// Места, на которые можно переназначить эту руку.
    pub offerable_positions: Vec<Position>,
}

/// DTO всей формы.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HandViewDto {
    pub game_name: String,
    pub small_blind: Chips,
    pub big_blind: Chips,
    pub ante: Chips,
    pub ante_type: AnteType,
    pub effective_stack: Chips,
    /// Small/big bet – только в фикс-лимите.
    pub fixed_limit_bets: Option<(Chips, Chips)>,
    pub table_size: u8,
    /// Места, из которых выбирается позиция героя.
    pub seats: Vec<Position>,
    pub hero_position: Option<Position>,
    pub hero_hand: Vec<CardSlot>,
    pub rounds: Vec<RoundViewDto>,
    pub villains: Vec<VillainViewDto>,
    pub current_bet: Chips,
    pub total_pot: Chips,
    /// Сколько карт ещё не использовано.
    pub cards_remaining: usize,
}

/// Ответ на запрос доступности карты.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardAvailabilityDto {
    pub card: Card,
    pub available: bool,
}
