use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Chips, Position};

/// Тип действия игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    /// Bet на новой улице (когда ещё нет ставки).
    Bet,
    /// Raise существующей ставки.
    Raise,
    /// All-in – только отметка, сумма не моделируется.
    #[serde(rename = "All-In")]
    AllIn,
}

impl ActionKind {
    /// Сокращение в текстовой истории.
    pub fn abbrev(self) -> &'static str {
        match self {
            ActionKind::Fold => "f",
            ActionKind::Check | ActionKind::Call => "c",
            ActionKind::Bet => "b",
            ActionKind::Raise => "r",
            ActionKind::AllIn => "AI",
        }
    }

    /// Bet или Raise – действия, которые "ставят" новую сумму.
    pub fn is_aggressive(self) -> bool {
        matches!(self, ActionKind::Bet | ActionKind::Raise)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionKind::Fold => "Fold",
            ActionKind::Check => "Check",
            ActionKind::Call => "Call",
            ActionKind::Bet => "Bet",
            ActionKind::Raise => "Raise",
            ActionKind::AllIn => "All-In",
        };
        f.write_str(name)
    }
}

/// Одна строка в раунде: место и (возможно ещё не выбранное) действие.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Action {
    pub position: Position,
    /// None – строка добавлена, но действие ещё не выбрано.
    pub kind: Option<ActionKind>,
    /// Сколько всего фишек место внесло этим действием (не размер повышения).
    pub amount: Chips,
    /// Допустимые действия для этой строки; пересчитываются движком целиком.
    pub legal: Vec<ActionKind>,
}

impl Action {
    /// Пустая строка для места.
    pub fn blank(position: Position) -> Self {
        Self {
            position,
            kind: None,
            amount: Chips::ZERO,
            legal: Vec::new(),
        }
    }

    /// Выбранное действие входит в пересчитанный набор допустимых.
    /// Пустая строка считается согласованной.
    pub fn is_consistent(&self) -> bool {
        self.kind.map_or(true, |k| self.legal.contains(&k))
    }
}
