use crate::domain::GameVariant;
use crate::engine::HandRecord;

use super::commands::{apply_command, Command, CommandOutcome};
use super::errors::ApiError;

/// Сессия редактирования: все версии записи по порядку.
///
/// Версии не меняются после создания, поэтому undo – это просто
/// возврат к предыдущей.
#[derive(Clone, Debug)]
pub struct EditSession {
    versions: Vec<HandRecord>,
}

impl EditSession {
    pub fn new(variant: GameVariant) -> Self {
        Self {
            versions: vec![HandRecord::new(variant)],
        }
    }

    pub fn current(&self) -> &HandRecord {
        // Конструктор кладёт первую версию, undo последнюю не снимает.
        &self.versions[self.versions.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Применить команду. При ошибке текущая версия остаётся прежней.
    pub fn apply(&mut self, command: Command) -> Result<Option<String>, ApiError> {
        let CommandOutcome { record, notice } = apply_command(self.current(), command)?;
        self.versions.push(record);
        Ok(notice)
    }

    /// Вернуться к предыдущей версии.
    pub fn undo(&mut self) -> Result<&HandRecord, ApiError> {
        if self.versions.len() <= 1 {
            return Err(ApiError::NothingToUndo);
        }
        self.versions.pop();
        Ok(self.current())
    }
}
