//! Внешний API движка истории раздачи.
//!
//! Здесь описываются:
//! - команды (commands.rs) – всё, что меняет запись (ставки, карты, действия);
//! - запросы (queries.rs) – только чтение;
//! - DTO (dto.rs) – удобные структуры для формы;
//! - ошибки (errors.rs) – то, что видит клиент;
//! - сессия (session.rs) – цепочка версий с undo.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;
pub mod session;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;
pub use session::*;
