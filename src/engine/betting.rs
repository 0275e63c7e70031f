use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{BettingStructure, CardSlot, Chips, Position, Stakes};
use crate::engine::actions::{Action, ActionKind};
use crate::engine::errors::EngineError;
use crate::engine::validation::legal_actions;

/// Данные обмена карт в раунде дро-игры.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DrawExchange {
    /// Индексы сброшенных карт героя (в порядке сброса).
    pub discards: Vec<usize>,
    /// Карты, пришедшие герою на обмене.
    pub drawn: Vec<CardSlot>,
    /// Сколько карт поменяло каждое место.
    pub exchanges: BTreeMap<Position, u8>,
}

/// Один раунд ставок (улица или раунд обмена).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Round {
    pub name: String,
    pub actions: Vec<Action>,
    /// Общие карты, открытые в начале раунда (флоп/тёрн/ривер).
    pub board: Vec<CardSlot>,
    /// Есть только у раундов обмена.
    pub draw: Option<DrawExchange>,
    /// Банк на конец раунда, включая все предыдущие раунды.
    pub pot: Chips,
    /// Последняя сумма Bet/Raise в раунде (0, если их не было).
    pub current_bet: Chips,
    /// Сколько Bet/Raise в раунде. Только для отображения: кап рейзов не применяется.
    pub bet_raise_count: u32,
}

impl Round {
    pub fn new(name: String, board_slots: usize, is_draw: bool) -> Self {
        Self {
            name,
            actions: Vec::new(),
            board: vec![CardSlot::UNSET; board_slots],
            draw: is_draw.then(DrawExchange::default),
            pot: Chips::ZERO,
            current_bet: Chips::ZERO,
            bet_raise_count: 0,
        }
    }

    fn action_mut(&mut self, round: usize, index: usize) -> Result<&mut Action, EngineError> {
        self.actions
            .get_mut(index)
            .ok_or(EngineError::ActionOutOfRange { round, index })
    }
}

/// Правила, от которых зависит пересчёт конкретного раунда.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundRules {
    pub structure: BettingStructure,
    /// Единица фикс-лимита: small bet на первых двух раундах, big bet дальше.
    pub unit: Chips,
    /// Ставка, которую нужно уравнять без Bet/Raise в раунде (блайнды на префлопе).
    pub opening_bet: Chips,
    /// Раунд с форсированными ставками: каждое место "видит ставку".
    /// Опцию BB (Check после лимпов) это не моделирует: BB предлагается
    /// Call, как и кап рейзов, это оставлено вызывающему слою.
    pub forced_bets: bool,
}

impl RoundRules {
    pub fn for_round(structure: BettingStructure, stakes: &Stakes, round_index: usize) -> Self {
        let first = round_index == 0;
        Self {
            structure,
            unit: if round_index <= 1 { stakes.small_bet() } else { stakes.big_bet() },
            opening_bet: if first { stakes.big_blind } else { Chips::ZERO },
            forced_bets: first,
        }
    }

    /// Размер Bet/Raise в фикс-лимите: max(currentBet + unit, unit).
    pub fn fixed_limit_amount(&self, current_bet: Chips) -> Chips {
        (current_bet + self.unit).max(self.unit)
    }
}

/// Полный проход по раунду: допустимые действия, суммы Call и фикс-лимитных
/// Bet/Raise, текущая ставка и счётчик Bet/Raise.
///
/// Всё выводится из префикса раунда, поэтому проход идемпотентен.
pub fn recompute_round(round: &mut Round, rules: &RoundRules) {
    let mut current_bet = Chips::ZERO;
    let mut bet_raise_count = 0;
    let mut last_aggressive: Option<Chips> = None;

    for i in 0..round.actions.len() {
        let legal = legal_actions(&round.actions[..i], round.actions[i].position, rules.forced_bets);
        let action = &mut round.actions[i];
        action.legal = legal;

        match action.kind {
            Some(ActionKind::Call) => {
                action.amount = last_aggressive.unwrap_or(rules.opening_bet);
            }
            Some(ActionKind::Bet) | Some(ActionKind::Raise) => {
                if rules.structure.is_fixed_limit() {
                    action.amount = rules.fixed_limit_amount(current_bet);
                }
                current_bet = action.amount;
                last_aggressive = Some(action.amount);
                bet_raise_count += 1;
            }
            Some(ActionKind::Fold) | Some(ActionKind::Check) | Some(ActionKind::AllIn) | None => {
                action.amount = Chips::ZERO;
            }
        }
    }

    round.current_bet = current_bet;
    round.bet_raise_count = bet_raise_count;
}

/// Добавить по пустой строке на каждое живое место в порядке `order`
/// поверх уже записанных (следующий круг ставок).
pub fn append_orbit(round: &mut Round, order: &[Position], live: impl Fn(Position) -> bool) -> usize {
    let before = round.actions.len();
    round
        .actions
        .extend(order.iter().copied().filter(|&p| live(p)).map(Action::blank));
    round.actions.len() - before
}

/// Выбрать действие в строке. Сумма сбрасывается в 0;
/// Call и фикс-лимитные Bet/Raise получат сумму на пересчёте.
pub fn set_action_kind(
    round: &mut Round,
    round_index: usize,
    index: usize,
    kind: ActionKind,
) -> Result<(), EngineError> {
    let action = round.action_mut(round_index, index)?;
    action.kind = Some(kind);
    action.amount = Chips::ZERO;
    Ok(())
}

/// Ввести сумму Bet/Raise вручную (только не фикс-лимит).
pub fn set_wager(
    round: &mut Round,
    round_index: usize,
    index: usize,
    amount: Chips,
    structure: BettingStructure,
) -> Result<(), EngineError> {
    let action = round.action_mut(round_index, index)?;
    if structure.is_fixed_limit() || !action.kind.is_some_and(ActionKind::is_aggressive) {
        return Err(EngineError::AmountNotEditable);
    }
    action.amount = amount;
    Ok(())
}

/// Удалить строку по индексу.
pub fn remove_action(round: &mut Round, round_index: usize, index: usize) -> Result<Action, EngineError> {
    if index >= round.actions.len() {
        return Err(EngineError::ActionOutOfRange {
            round: round_index,
            index,
        });
    }
    Ok(round.actions.remove(index))
}
