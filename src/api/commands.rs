use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::{CardSlot, Position, Rank, Stakes, Suit};
use crate::engine::{ActionKind, CardSlotRef, HandRecord};

use super::errors::ApiError;

/// Правка, пришедшая из формы.
///
/// Одна команда = одна новая версия `HandRecord`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum Command {
    /// Заменить ставки целиком.
    SetStakes(Stakes),

    /// Ввести малый блайнд (BB = 2 × SB).
    SetSmallBlind(Chips),

    /// Кнопка "анте = BB".
    SetAnteEqualToBigBlind,

    /// Сменить размер стола (2–9).
    SetTableSize(u8),

    /// Выбрать позицию героя.
    SetHeroPosition(Position),

    /// Записать карту в слот целиком (или очистить).
    SetCard { slot: CardSlotRef, card: CardSlot },

    /// Выбрать только масть в слоте.
    SetCardSuit { slot: CardSlotRef, suit: Option<Suit> },

    /// Выбрать только ранг в слоте.
    SetCardRank { slot: CardSlotRef, rank: Option<Rank> },

    /// Ввести карту текстом ("As").
    SetCardText { slot: CardSlotRef, text: String },

    /// Добавить в раунд круг действий живых мест.
    AppendOrbit { round: usize },

    /// Выбрать действие в строке раунда.
    SetAction {
        round: usize,
        index: usize,
        kind: ActionKind,
    },

    /// Ввести сумму Bet/Raise (не фикс-лимит).
    SetAmount {
        round: usize,
        index: usize,
        amount: Chips,
    },

    /// Удалить строку раунда.
    DeleteAction { round: usize, index: usize },

    /// Добавить руку оппонента.
    AddVillain,

    /// Переназначить место оппонента.
    SetVillainPosition { villain: usize, position: Position },

    /// Отметить сброс карты героя в раунде обмена.
    SetDiscard {
        round: usize,
        hero_card: usize,
        discarded: bool,
    },

    /// Добавить слот под пришедшую карту.
    AddDrawnCard { round: usize },

    /// Сколько карт поменяло место.
    SetExchangeCount {
        round: usize,
        position: Position,
        count: u8,
    },
}

/// Результат применения команды: новая версия и, возможно, подсказка для поля ввода.
#[derive(Clone, Debug, PartialEq)]
pub struct CommandOutcome {
    pub record: HandRecord,
    pub notice: Option<String>,
}

impl CommandOutcome {
    fn plain(record: HandRecord) -> Self {
        Self { record, notice: None }
    }
}

/// Применить команду к версии записи. Исходная версия не меняется.
pub fn apply_command(record: &HandRecord, command: Command) -> Result<CommandOutcome, ApiError> {
    let result = match command.clone() {
        Command::SetStakes(stakes) => Ok(record.with_stakes(stakes)),
        Command::SetSmallBlind(sb) => Ok(record.with_small_blind(sb)),
        Command::SetAnteEqualToBigBlind => Ok(record.with_ante_equal_to_big_blind()),
        Command::SetTableSize(size) => record.with_table_size(size),
        Command::SetHeroPosition(position) => record.with_hero_position(position),
        Command::SetCard { slot, card } => record.with_card(slot, card),
        Command::SetCardSuit { slot, suit } => record.with_card_suit(slot, suit),
        Command::SetCardRank { slot, rank } => record.with_card_rank(slot, rank),
        Command::SetCardText { slot, text } => {
            return record
                .with_card_text(slot, &text)
                .map(|(record, err)| CommandOutcome {
                    record,
                    notice: err.map(|e| e.to_string()),
                })
                .map_err(|err| reject(&command, err.into()));
        }
        Command::AppendOrbit { round } => record.with_next_orbit(round),
        Command::SetAction { round, index, kind } => record.with_action(round, index, kind),
        Command::SetAmount { round, index, amount } => record.with_amount(round, index, amount),
        Command::DeleteAction { round, index } => record.without_action(round, index),
        Command::AddVillain => record.with_villain(),
        Command::SetVillainPosition { villain, position } => record.with_villain_position(villain, position),
        Command::SetDiscard {
            round,
            hero_card,
            discarded,
        } => record.with_discard(round, hero_card, discarded),
        Command::AddDrawnCard { round } => record.with_drawn_slot(round),
        Command::SetExchangeCount { round, position, count } => {
            record.with_exchange_count(round, position, count)
        }
    };

    result
        .map(CommandOutcome::plain)
        .map_err(|err| reject(&command, err.into()))
}

fn reject(command: &Command, err: ApiError) -> ApiError {
    log::warn!("command {command:?} rejected: {err:?}");
    err
}
