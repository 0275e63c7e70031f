use serde::{Deserialize, Serialize};

use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём форме / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON скрипта).
    BadRequest(String),

    /// Неизвестный идентификатор игры.
    UnknownVariant(String),

    /// Подсказка без изменений: например, не осталось мест для оппонента.
    Advisory(String),

    /// Операция отклонена движком, предыдущая версия сохранена.
    EngineError(String),

    /// Откатывать больше нечего.
    NothingToUndo,
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::NoVillainPositionAvailable => ApiError::Advisory(err.to_string()),
            other => ApiError::EngineError(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
