use crate::domain::{Card, Position};
use crate::engine::card_pool::CardSlotRef;

use thiserror::Error;

/// Ошибки движка истории раздачи.
///
/// Любая ошибка означает, что операция отклонена целиком:
/// предыдущая версия раздачи остаётся в силе.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Размер стола {0} вне диапазона 2–9")]
    InvalidTableSize(u8),

    #[error("Позиция {0} не участвует при текущем размере стола")]
    PositionNotActive(Position),

    #[error("Раунд {0} не существует в этой игре")]
    RoundOutOfRange(usize),

    #[error("В раунде {round} нет действия с индексом {index}")]
    ActionOutOfRange { round: usize, index: usize },

    #[error("Сумма не вводится вручную для этого действия/структуры ставок")]
    AmountNotEditable,

    #[error("Карта {0} уже используется в раздаче")]
    DuplicateCard(Card),

    #[error("Слот карты {0:?} не существует")]
    CardSlotOutOfRange(CardSlotRef),

    #[error("Раунд {0} не является раундом обмена")]
    NotADrawRound(usize),

    #[error("No more active positions available for villains.")]
    NoVillainPositionAvailable,

    #[error("Позиция {0} уже занята рукой оппонента")]
    PositionHeldByVillain(Position),

    #[error("Нельзя поменять {count} карт при руке из {hand_size}")]
    ExchangeCountTooLarge { count: u8, hand_size: usize },

    #[error("Позиция {0} не может быть владельцем руки оппонента")]
    VillainPositionUnavailable(Position),

    #[error("Руки оппонента с индексом {0} нет")]
    VillainOutOfRange(usize),
}
