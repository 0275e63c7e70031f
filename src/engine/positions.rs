use std::collections::{BTreeSet, HashMap};

use crate::domain::Position::{self, *};
use crate::engine::actions::{Action, ActionKind};
use crate::engine::errors::EngineError;

/// Активные места для размера стола в порядке действий на префлопе.
///
/// До 5 мест – просто хвост вселенной (2 места = SB, BB).
/// Для 6–9 мест выпадение мест неравномерное, поэтому таблица задана явно.
pub fn active_positions(table_size: u8) -> Result<Vec<Position>, EngineError> {
    let positions = match table_size {
        2..=5 => Position::UNIVERSE[Position::UNIVERSE.len() - table_size as usize..].to_vec(),
        6 => vec![Utg, Hj, Co, Btn, Sb, Bb],
        7 => vec![Utg, Utg1, Hj, Co, Btn, Sb, Bb],
        // SB и BB за столом всегда, поэтому при уменьшении стола места
        // выпадают по порядку UTG+3, UTG+2, MP: каждый меньший стол
        // является подмножеством большего (9 -> 8 -> 7 -> 6).
        8 => vec![Utg, Utg1, Mp, Hj, Co, Btn, Sb, Bb],
        9 => vec![Utg, Utg1, Utg2, Mp, Hj, Co, Btn, Sb, Bb],
        other => return Err(EngineError::InvalidTableSize(other)),
    };
    Ok(positions)
}

/// Порядок действий после первого раунда:
/// два последних места префлопа (обычно SB, BB) ходят первыми.
pub fn post_flop_order(table_size: u8) -> Result<Vec<Position>, EngineError> {
    let mut positions = active_positions(table_size)?;
    let split = positions.len() - 2;
    positions.rotate_left(split);
    Ok(positions)
}

/// Кто ещё в раздаче: у места есть хотя бы одна записанная строка,
/// и последняя из них – не Fold. Пустая строка считается записанной.
pub fn active_after<'a>(actions: impl IntoIterator<Item = &'a Action>) -> BTreeSet<Position> {
    let mut last: HashMap<Position, Option<ActionKind>> = HashMap::new();
    for action in actions {
        last.insert(action.position, action.kind);
    }

    last.into_iter()
        .filter(|(_, kind)| *kind != Some(ActionKind::Fold))
        .map(|(position, _)| position)
        .collect()
}
