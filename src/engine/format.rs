//! Каноническая текстовая история раздачи – единственный внешний контракт.

use core::fmt::{self, Write};

use crate::domain::{concat_cards, CardSlot, Chips, Position};
use crate::engine::actions::Action;
use crate::engine::betting::{DrawExchange, Round};
use crate::engine::hand_history::HandRecord;

impl fmt::Display for HandRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stakes = &self.stakes;
        writeln!(
            f,
            "SB: {}, BB: {}, Ante: {}, ES: {}",
            stakes.small_blind, stakes.big_blind, stakes.ante, stakes.effective_stack
        )?;
        writeln!(f, "Players: {}", self.table_size)?;
        writeln!(f, "Hero: {}, {}", label(self.hero_position), concat_cards(&self.hero_hand))?;

        for (i, round) in self.rounds.iter().enumerate() {
            // Банк, с которым начинается раунд: итог предыдущего.
            let pot_before = if i == 0 { round.pot } else { self.rounds[i - 1].pot };
            write_round(f, round, pot_before, &self.hero_hand)?;
        }

        for villain in &self.villains {
            writeln!(f, "Villain {}: {}", label(villain.position), concat_cards(&villain.cards))?;
        }
        Ok(())
    }
}

/// Готовый текст для копирования/шаринга.
pub fn format_history(record: &HandRecord) -> String {
    record.to_string()
}

fn write_round(
    f: &mut fmt::Formatter<'_>,
    round: &Round,
    pot_before: Chips,
    hero: &[CardSlot],
) -> fmt::Result {
    writeln!(f, "{}:", round.name)?;

    if round.board.iter().any(|c| !c.is_unset()) {
        writeln!(f, "{} ({})", concat_cards(&round.board), pot_before)?;
        f.write_char('\n')?;
    }

    if let Some(draw) = &round.draw {
        write_exchange(f, draw, hero)?;
    }

    for action in &round.actions {
        write_action(f, action)?;
    }
    f.write_char('\n')
}

fn write_exchange(f: &mut fmt::Formatter<'_>, draw: &DrawExchange, hero: &[CardSlot]) -> fmt::Result {
    for (position, count) in &draw.exchanges {
        writeln!(f, "{position}: {count}")?;
    }

    let discards = draw
        .discards
        .iter()
        .filter_map(|&i| hero.get(i).and_then(CardSlot::card))
        .map(|c| c.to_string())
        .collect::<Vec<_>>();
    writeln!(f, "Hero discards: {}", discards.join(", "))?;

    let drawn = draw
        .drawn
        .iter()
        .filter_map(CardSlot::card)
        .map(|c| c.to_string())
        .collect::<Vec<_>>();
    writeln!(f, "Hero draws: {}", drawn.join(", "))
}

/// `<position>: <abbrev> <amount>`; нулевая сумма печатается пустой.
fn write_action(f: &mut fmt::Formatter<'_>, action: &Action) -> fmt::Result {
    let abbrev = action.kind.map(|k| k.abbrev()).unwrap_or("");
    if action.amount.is_zero() {
        writeln!(f, "{}: {} ", action.position, abbrev)
    } else {
        writeln!(f, "{}: {} {}", action.position, abbrev, action.amount)
    }
}

fn label(position: Option<Position>) -> String {
    position.map(|p| p.to_string()).unwrap_or_default()
}
