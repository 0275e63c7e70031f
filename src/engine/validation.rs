use crate::domain::Position;
use crate::engine::actions::{Action, ActionKind};

/// Набор допустимых действий для места по префиксу раунда.
///
/// Место "видит ставку", если кто-то другой в префиксе сделал Bet/Raise,
/// либо это раунд с форсированными ставками (префлоп: блайнды считаются ставкой,
/// хотя как Bet/Raise они не записаны).
///
/// Порядок фиксированный: Fold, затем Check/Bet или Call/Raise, All-In последним.
pub fn legal_actions(prior: &[Action], position: Position, facing_forced_bet: bool) -> Vec<ActionKind> {
    let facing_bet = facing_forced_bet
        || prior.iter().any(|a| {
            a.position != position && a.kind.is_some_and(ActionKind::is_aggressive)
        });

    if facing_bet {
        vec![ActionKind::Fold, ActionKind::Call, ActionKind::Raise, ActionKind::AllIn]
    } else {
        vec![ActionKind::Fold, ActionKind::Check, ActionKind::Bet, ActionKind::AllIn]
    }
}
