use serde::{Deserialize, Serialize};

use crate::domain::{Card, Deck, Position, Rank, Suit};
use crate::engine::{Action, ActionKind, CardSlotRef, HandRecord, Round};

use super::dto::{
    ActionViewDto, CardAvailabilityDto, DrawViewDto, HandViewDto, RoundViewDto, VillainViewDto,
};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Полное состояние формы.
    View,

    /// Готовая текстовая история.
    Formatted,

    /// Можно ли выбрать карту в слоте `editing`.
    CardAvailability {
        suit: Suit,
        rank: Rank,
        editing: Option<CardSlotRef>,
    },

    /// Кого можно сделать владельцем новой руки оппонента.
    VillainPositions,

    /// Карты, которые ещё никуда не назначены.
    RemainingDeck,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum QueryResponse {
    View(Box<HandViewDto>),
    Formatted(String),
    CardAvailability(CardAvailabilityDto),
    VillainPositions(Vec<Position>),
    RemainingDeck(Deck),
}

/// Ответить на запрос по текущей версии записи.
pub fn answer_query(record: &HandRecord, query: Query) -> QueryResponse {
    match query {
        Query::View => QueryResponse::View(Box::new(build_hand_view(record))),
        Query::Formatted => QueryResponse::Formatted(record.to_string()),
        Query::CardAvailability { suit, rank, editing } => {
            QueryResponse::CardAvailability(CardAvailabilityDto {
                card: Card::new(rank, suit),
                available: record.card_pool().is_available(suit, rank, editing),
            })
        }
        Query::VillainPositions => {
            QueryResponse::VillainPositions(record.offerable_villain_positions(None))
        }
        Query::RemainingDeck => QueryResponse::RemainingDeck(record.card_pool().remaining()),
    }
}

/// Сформировать DTO формы на основе `HandRecord`.
pub fn build_hand_view(record: &HandRecord) -> HandViewDto {
    let stakes = &record.stakes;
    let fixed_limit = record.variant.structure.is_fixed_limit();

    let rounds = record
        .rounds
        .iter()
        .map(|round| build_round_view(round, fixed_limit))
        .collect();

    let villains = record
        .villains
        .iter()
        .enumerate()
        .map(|(i, v)| VillainViewDto {
            position: v.position,
            cards: v.cards.clone(),
            offerable_positions: record.offerable_villain_positions(Some(i)),
        })
        .collect();

    HandViewDto {
        game_name: record.variant.name.clone(),
        small_blind: stakes.small_blind,
        big_blind: stakes.big_blind,
        ante: stakes.ante,
        ante_type: stakes.ante_type,
        effective_stack: stakes.effective_stack,
        fixed_limit_bets: fixed_limit.then(|| (stakes.small_bet(), stakes.big_bet())),
        table_size: record.table_size,
        seats: record.seats(),
        hero_position: record.hero_position,
        hero_hand: record.hero_hand.clone(),
        rounds,
        villains,
        current_bet: record.current_bet(),
        total_pot: record.total_pot(),
        cards_remaining: record.card_pool().remaining().len(),
    }
}

fn build_round_view(round: &Round, fixed_limit: bool) -> RoundViewDto {
    RoundViewDto {
        name: round.name.clone(),
        board: round.board.clone(),
        draw: round.draw.as_ref().map(|d| DrawViewDto {
            discards: d.discards.clone(),
            drawn: d.drawn.clone(),
            exchanges: d.exchanges.iter().map(|(p, c)| (*p, *c)).collect(),
        }),
        actions: round
            .actions
            .iter()
            .map(|a| build_action_view(a, fixed_limit))
            .collect(),
        pot: round.pot,
        current_bet: round.current_bet,
        bet_raise_count: round.bet_raise_count,
    }
}

fn build_action_view(action: &Action, fixed_limit: bool) -> ActionViewDto {
    ActionViewDto {
        position: action.position,
        kind: action.kind,
        amount: action.amount,
        legal: action.legal.clone(),
        amount_editable: !fixed_limit && action.kind.is_some_and(ActionKind::is_aggressive),
    }
}
