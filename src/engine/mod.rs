//! Движок истории раздачи: порядок мест, допустимые действия, раунды ставок,
//! цепочка банков и каноническая текстовая история.
//!
//! Высокоуровневый объект: `HandRecord`
//! Основные операции (каждая возвращает новую версию записи):
//!   - `with_table_size` / `with_stakes` – параметры стола
//!   - `with_next_orbit` – добавить круг действий в раунд
//!   - `with_action` / `with_amount` / `without_action` – правка строк раунда
//!   - `with_card*` – карты героя, борда, обмена и оппонентов

pub mod actions;
pub mod betting;
pub mod card_pool;
pub mod errors;
pub mod format;
pub mod hand_history;
pub mod positions;
pub mod pot;
pub mod validation;

pub use actions::{Action, ActionKind};
pub use betting::{DrawExchange, Round, RoundRules};
pub use card_pool::{CardPool, CardSlotRef};
pub use errors::EngineError;
pub use format::format_history;
pub use hand_history::{HandRecord, VillainHand};
pub use positions::{active_after, active_positions, post_flop_order};
pub use pot::round_pot;
pub use validation::legal_actions;
