//! Движок восстановления истории покерной раздачи.
//!
//! Игрок задаёт ставки, свои карты и последовательность действий по улицам
//! (или раундам обмена), а движок пересчитывает порядок мест, допустимые
//! действия, суммы и банк, и выдаёт каноническую текстовую историю.
//!
//! Форма (UI) лежит снаружи: она шлёт `api::Command` и читает `api::HandViewDto`.

pub mod api;
pub mod domain;
pub mod engine;

pub use api::{apply_command, answer_query, Command, EditSession, Query, QueryResponse};
pub use domain::GameVariant;
pub use engine::{format_history, HandRecord};
