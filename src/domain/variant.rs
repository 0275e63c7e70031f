//! Варианты игр: одна модель вместо трёх почти одинаковых форм
//! (флоп-игры, дро-игры, стад).

use serde::{Deserialize, Serialize};

use crate::domain::blinds::{AnteRule, AnteType};

/// Семейство игры – определяет раунды и их "содержимое".
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameFamily {
    /// Префлоп, флоп (3 общие карты), тёрн и ривер (по одной).
    Flop,
    /// Pre-Draw + `change_rounds` раундов обмена.
    Draw { change_rounds: u8 },
    /// 3rd..7th Street, общих карт нет.
    Stud,
}

impl GameFamily {
    /// Сколько всего раундов ставок в раздаче.
    pub fn round_count(self) -> usize {
        match self {
            GameFamily::Flop => 4,
            GameFamily::Draw { change_rounds } => 1 + change_rounds as usize,
            GameFamily::Stud => 5,
        }
    }

    /// Заголовок раунда в текстовой истории.
    pub fn round_name(self, index: usize) -> String {
        match self {
            GameFamily::Flop => match index {
                0 => "Preflop".to_string(),
                1 => "Flop".to_string(),
                2 => "Turn".to_string(),
                _ => "River".to_string(),
            },
            GameFamily::Draw { .. } => {
                if index == 0 {
                    "Pre-Draw".to_string()
                } else {
                    format!("Draw {index}")
                }
            }
            GameFamily::Stud => {
                let street = index + 3;
                let suffix = match street {
                    3 => "rd",
                    _ => "th",
                };
                format!("{street}{suffix} Street")
            }
        }
    }

    /// Сколько общих карт открывается в начале раунда.
    pub fn board_slots(self, index: usize) -> usize {
        match (self, index) {
            (GameFamily::Flop, 1) => 3,
            (GameFamily::Flop, 2) | (GameFamily::Flop, 3) => 1,
            _ => 0,
        }
    }

    /// Раунд с обменом карт (все раунды дро-игры, кроме первого).
    pub fn is_draw_round(self, index: usize) -> bool {
        matches!(self, GameFamily::Draw { .. }) && index > 0
    }
}

/// Структура ставок.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum BettingStructure {
    /// Размер bet/raise вычисляется, не вводится.
    FixedLimit,
    NoLimit,
    /// Для движка то же, что NoLimit: сумму вводит оператор.
    PotLimit,
}

impl BettingStructure {
    pub fn is_fixed_limit(self) -> bool {
        matches!(self, BettingStructure::FixedLimit)
    }
}

/// Конфиг конкретной игры.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameVariant {
    /// Короткий идентификатор (как в URL страницы).
    pub id: String,
    pub name: String,
    pub family: GameFamily,
    /// Сколько карт у героя.
    pub hand_size: usize,
    pub structure: BettingStructure,
    pub ante_type: AnteType,
    pub ante_rule: AnteRule,
}

impl GameVariant {
    fn make(
        id: &str,
        name: &str,
        family: GameFamily,
        hand_size: usize,
        structure: BettingStructure,
        ante_type: AnteType,
        ante_rule: AnteRule,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            family,
            hand_size,
            structure,
            ante_type,
            ante_rule,
        }
    }

    pub fn limit_holdem() -> Self {
        Self::make(
            "limit-holdem",
            "Limit Texas Hold'em",
            GameFamily::Flop,
            2,
            BettingStructure::FixedLimit,
            AnteType::Classic,
            AnteRule::Manual,
        )
    }

    pub fn no_limit_holdem() -> Self {
        Self::make(
            "no-limit-holdem",
            "No Limit Texas Hold'em",
            GameFamily::Flop,
            2,
            BettingStructure::NoLimit,
            AnteType::BigBlind,
            AnteRule::MatchBigBlind,
        )
    }

    pub fn pot_limit_omaha() -> Self {
        Self::make(
            "pot-limit-omaha",
            "Pot Limit Omaha",
            GameFamily::Flop,
            4,
            BettingStructure::PotLimit,
            AnteType::BigBlind,
            AnteRule::Manual,
        )
    }

    pub fn fl_omaha_hi_lo() -> Self {
        Self::make(
            "fl-omaha-hi-lo",
            "Fixed Limit Omaha High Low Eight or Better",
            GameFamily::Flop,
            4,
            BettingStructure::FixedLimit,
            AnteType::BigBlind,
            AnteRule::Manual,
        )
    }

    pub fn triple_draw_27() -> Self {
        Self::make(
            "2-7-triple-draw",
            "Limit 2-7 Triple Draw",
            GameFamily::Draw { change_rounds: 3 },
            5,
            BettingStructure::FixedLimit,
            AnteType::Classic,
            AnteRule::Manual,
        )
    }

    pub fn badugi() -> Self {
        Self::make(
            "badugi",
            "Limit Badugi",
            GameFamily::Draw { change_rounds: 3 },
            4,
            BettingStructure::FixedLimit,
            AnteType::Classic,
            AnteRule::Manual,
        )
    }

    pub fn nl_single_draw_27() -> Self {
        Self::make(
            "nl-2-7-single-draw",
            "No Limit 2-7 Single Draw",
            GameFamily::Draw { change_rounds: 1 },
            5,
            BettingStructure::NoLimit,
            AnteType::Classic,
            AnteRule::BigBlindAndHalf,
        )
    }

    pub fn razz() -> Self {
        Self::make(
            "razz",
            "Razz",
            GameFamily::Stud,
            7,
            BettingStructure::FixedLimit,
            AnteType::Classic,
            AnteRule::Manual,
        )
    }

    pub fn seven_card_stud() -> Self {
        Self::make(
            "seven-card-stud",
            "7 Card Stud High",
            GameFamily::Stud,
            7,
            BettingStructure::FixedLimit,
            AnteType::Classic,
            AnteRule::Manual,
        )
    }

    pub fn stud_hi_lo() -> Self {
        Self::make(
            "stud-hi-lo",
            "Stud High Low Eight or Better",
            GameFamily::Stud,
            7,
            BettingStructure::FixedLimit,
            AnteType::Classic,
            AnteRule::Manual,
        )
    }

    /// Встроенный каталог игр.
    pub fn all() -> Vec<GameVariant> {
        vec![
            Self::limit_holdem(),
            Self::no_limit_holdem(),
            Self::pot_limit_omaha(),
            Self::fl_omaha_hi_lo(),
            Self::triple_draw_27(),
            Self::badugi(),
            Self::nl_single_draw_27(),
            Self::razz(),
            Self::seven_card_stud(),
            Self::stud_hi_lo(),
        ]
    }

    pub fn by_id(id: &str) -> Option<GameVariant> {
        Self::all().into_iter().find(|v| v.id == id)
    }
}
