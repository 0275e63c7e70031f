//! Доменная модель: карты, места, ставки, варианты игр.

pub mod blinds;
pub mod card;
pub mod chips;
pub mod deck;
pub mod position;
pub mod variant;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use blinds::*;
pub use card::*;
pub use chips::*;
pub use deck::*;
pub use position::*;
pub use variant::*;
