use crate::domain::{Chips, Position, Stakes};
use crate::engine::actions::{Action, ActionKind};
use crate::engine::betting::Round;

/// Банк на конец раунда (накопительно, с учётом всех предыдущих раундов).
///
/// `previous_pot == 0` означает первый раунд: банк засеивается блайндами и анте.
/// Call блайнда в первом раунде учитывается за вычетом уже поставленного блайнда.
/// Fold/Check/All-In ничего не добавляют (сумма all-in не моделируется).
pub fn round_pot(actions: &[Action], stakes: &Stakes, table_size: u8, previous_pot: Chips) -> Chips {
    let first_round = previous_pot.is_zero();
    let seed = if first_round {
        stakes.seed(table_size)
    } else {
        previous_pot
    };

    seed + actions
        .iter()
        .map(|action| contribution(action, stakes, first_round))
        .sum::<Chips>()
}

fn contribution(action: &Action, stakes: &Stakes, first_round: bool) -> Chips {
    match action.kind {
        Some(ActionKind::Bet) | Some(ActionKind::Raise) => action.amount,
        Some(ActionKind::Call) if first_round => match action.position {
            Position::Sb => action.amount - stakes.small_blind,
            Position::Bb => action.amount - stakes.big_blind,
            _ => action.amount,
        },
        Some(ActionKind::Call) => action.amount,
        _ => Chips::ZERO,
    }
}

/// Пересчитать цепочку банков по всем раундам по порядку.
pub fn recompute_pots(rounds: &mut [Round], stakes: &Stakes, table_size: u8) {
    let mut previous = Chips::ZERO;
    for round in rounds.iter_mut() {
        round.pot = round_pot(&round.actions, stakes, table_size, previous);
        previous = round.pot;
    }
}
