use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Роль места за столом. Порядок вариантов = порядок действий на префлопе
/// для полного 10-местного стола, поэтому `Ord` совпадает с этим порядком.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Position {
    #[serde(rename = "UTG")]
    Utg,
    #[serde(rename = "UTG+1")]
    Utg1,
    #[serde(rename = "UTG+2")]
    Utg2,
    #[serde(rename = "UTG+3")]
    Utg3,
    #[serde(rename = "MP")]
    Mp,
    #[serde(rename = "HJ")]
    Hj,
    #[serde(rename = "CO")]
    Co,
    #[serde(rename = "BTN")]
    Btn,
    #[serde(rename = "SB")]
    Sb,
    #[serde(rename = "BB")]
    Bb,
}

impl Position {
    /// Вся вселенная мест в порядке префлоп-действий.
    pub const UNIVERSE: [Position; 10] = [
        Position::Utg,
        Position::Utg1,
        Position::Utg2,
        Position::Utg3,
        Position::Mp,
        Position::Hj,
        Position::Co,
        Position::Btn,
        Position::Sb,
        Position::Bb,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Position::Utg => "UTG",
            Position::Utg1 => "UTG+1",
            Position::Utg2 => "UTG+2",
            Position::Utg3 => "UTG+3",
            Position::Mp => "MP",
            Position::Hj => "HJ",
            Position::Co => "CO",
            Position::Btn => "BTN",
            Position::Sb => "SB",
            Position::Bb => "BB",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::UNIVERSE
            .iter()
            .copied()
            .find(|p| p.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown position: {s}"))
    }
}
