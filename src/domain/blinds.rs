// src/domain/blinds.rs

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Политика учёта анте при посеве банка первого раунда:
/// с каждого места или одной суммой на стол.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum AnteType {
    /// Без анте: даже если сумма указана, в банк она не идёт.
    None,
    /// Классическое анте с каждого игрока: `ante × tableSize`.
    #[default]
    Classic,
    /// Big Blind Ante – одна сумма анте на весь стол.
    BigBlind,
}

/// Как вариант игры выводит анте из блайндов при каждом изменении ставок.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum AnteRule {
    /// Анте вводит оператор.
    #[default]
    Manual,
    /// Анте всегда равно BB (NL Hold'em с BB-анте).
    MatchBigBlind,
    /// Анте = round(1.5 × BB) (NL 2-7 Single Draw).
    BigBlindAndHalf,
}

impl AnteRule {
    /// Анте по правилу варианта; None – правило ручное, анте не трогаем.
    pub fn derive(self, big_blind: Chips) -> Option<Chips> {
        match self {
            AnteRule::Manual => None,
            AnteRule::MatchBigBlind => Some(big_blind),
            // Округление половины вверх: 3 × 1.5 = 4.5 -> 5.
            AnteRule::BigBlindAndHalf => Some(Chips(big_blind.0.saturating_mul(3).saturating_add(1) / 2)),
        }
    }
}

/// Ставки раздачи: блайнды, анте и эффективный стек.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stakes {
    pub small_blind: Chips,
    pub big_blind: Chips,
    pub ante: Chips,
    pub ante_type: AnteType,
    /// Эффективный стек – только для вывода, в расчётах не участвует.
    pub effective_stack: Chips,
}

impl Stakes {
    pub fn new(sb: Chips, bb: Chips, ante: Chips, ante_type: AnteType, effective_stack: Chips) -> Self {
        Self {
            small_blind: sb,
            big_blind: bb,
            ante,
            ante_type,
            effective_stack,
        }
    }

    /// Ввод только малого блайнда: BB = 2 × SB, остальное сохраняем.
    pub fn from_small_blind(self, sb: Chips) -> Self {
        Self {
            small_blind: sb,
            big_blind: sb * 2,
            ..self
        }
    }

    /// Суммарное анте, которое идёт в посев банка.
    pub fn ante_total(&self, table_size: u8) -> Chips {
        match self.ante_type {
            AnteType::None => Chips::ZERO,
            AnteType::Classic => self.ante * u64::from(table_size),
            AnteType::BigBlind => self.ante,
        }
    }

    /// Посев банка первого раунда: SB + BB + анте.
    pub fn seed(&self, table_size: u8) -> Chips {
        self.small_blind + self.big_blind + self.ante_total(table_size)
    }

    /// Small bet фикс-лимита (= BB).
    pub fn small_bet(&self) -> Chips {
        self.big_blind
    }

    /// Big bet фикс-лимита (= 2 × BB).
    pub fn big_bet(&self) -> Chips {
        self.big_blind * 2
    }
}
