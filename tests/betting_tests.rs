//! Раунды ставок: суммы Call, фикс-лимит, ручные суммы, удаление строк,
//! добавление кругов.

use hand_history_engine::domain::Position::*;
use hand_history_engine::domain::{AnteType, BettingStructure, Chips, GameVariant, Stakes};
use hand_history_engine::engine::betting::{recompute_round, RoundRules};
use hand_history_engine::engine::ActionKind::*;
use hand_history_engine::engine::{EngineError, HandRecord};

/// Ставки без анте: посев банка = SB + BB.
fn stakes(sb: u64, bb: u64) -> Stakes {
    Stakes::new(Chips::new(sb), Chips::new(bb), Chips::ZERO, AnteType::None, Chips::new(1000))
}

/// Хедз-ап с пустыми строками на флопе.
fn heads_up(variant: GameVariant, sb: u64, bb: u64) -> HandRecord {
    HandRecord::new(variant)
        .with_table_size(2)
        .unwrap()
        .with_stakes(stakes(sb, bb))
        .with_next_orbit(1)
        .unwrap()
}

#[test]
fn fixed_limit_bet_then_raise_on_first_street() {
    let record = HandRecord::new(GameVariant::limit_holdem())
        .with_stakes(stakes(2, 4))
        .with_action(0, 0, Raise)
        .unwrap()
        .with_action(0, 1, Raise)
        .unwrap();

    let round = record.round(0).unwrap();
    assert_eq!(round.actions[0].amount, Chips::new(4));
    assert_eq!(round.actions[1].amount, Chips::new(8));
    assert_eq!(round.current_bet, Chips::new(8));
    assert_eq!(round.bet_raise_count, 2);
}

#[test]
fn fixed_limit_uses_big_bet_from_third_round() {
    let record = HandRecord::new(GameVariant::limit_holdem())
        .with_table_size(2)
        .unwrap()
        .with_stakes(stakes(2, 4))
        .with_next_orbit(1)
        .unwrap()
        .with_next_orbit(2)
        .unwrap()
        .with_action(1, 0, Bet)
        .unwrap()
        .with_action(2, 0, Bet)
        .unwrap()
        .with_action(2, 1, Raise)
        .unwrap();

    assert_eq!(record.round(1).unwrap().actions[0].amount, Chips::new(4));
    let turn = record.round(2).unwrap();
    assert_eq!(turn.actions[0].amount, Chips::new(8));
    assert_eq!(turn.actions[1].amount, Chips::new(16));
}

#[test]
fn no_raise_cap_is_enforced() {
    let mut record = heads_up(GameVariant::limit_holdem(), 1, 2)
        .with_next_orbit(1)
        .unwrap()
        .with_next_orbit(1)
        .unwrap();
    for i in 0..6 {
        record = record.with_action(1, i, Raise).unwrap();
    }
    let flop = record.round(1).unwrap();
    assert_eq!(flop.bet_raise_count, 6);
    assert_eq!(flop.current_bet, Chips::new(12));
}

#[test]
fn preflop_call_without_raise_takes_the_big_blind() {
    let record = HandRecord::new(GameVariant::no_limit_holdem())
        .with_stakes(stakes(1, 2))
        .with_action(0, 0, Call)
        .unwrap();
    assert_eq!(record.round(0).unwrap().actions[0].amount, Chips::new(2));
    assert_eq!(record.current_bet(), Chips::new(2));
}

#[test]
fn call_matches_nearest_preceding_bet_or_raise() {
    let record = heads_up(GameVariant::no_limit_holdem(), 1, 2)
        .with_action(1, 0, Bet)
        .unwrap()
        .with_amount(1, 0, Chips::new(10))
        .unwrap()
        .with_action(1, 1, Call)
        .unwrap();

    let flop = record.round(1).unwrap();
    assert_eq!(flop.actions[1].amount, Chips::new(10));
    assert_eq!(flop.current_bet, Chips::new(10));
    assert_eq!(record.current_bet(), Chips::new(10));
}

#[test]
fn no_limit_bet_defaults_to_zero_until_entered() {
    let record = heads_up(GameVariant::no_limit_holdem(), 1, 2).with_action(1, 0, Bet).unwrap();
    assert_eq!(record.round(1).unwrap().actions[0].amount, Chips::ZERO);
}

#[test]
fn amount_is_not_editable_for_fixed_limit_or_passive_rows() {
    let fl = heads_up(GameVariant::limit_holdem(), 1, 2).with_action(1, 0, Bet).unwrap();
    assert_eq!(fl.with_amount(1, 0, Chips::new(7)), Err(EngineError::AmountNotEditable));

    let nl = heads_up(GameVariant::pot_limit_omaha(), 1, 2).with_action(1, 0, Check).unwrap();
    assert_eq!(nl.with_amount(1, 0, Chips::new(7)), Err(EngineError::AmountNotEditable));
}

#[test]
fn changing_kind_resets_amount() {
    let record = heads_up(GameVariant::no_limit_holdem(), 1, 2)
        .with_action(1, 0, Bet)
        .unwrap()
        .with_amount(1, 0, Chips::new(10))
        .unwrap()
        .with_action(1, 0, AllIn)
        .unwrap();
    assert_eq!(record.round(1).unwrap().actions[0].amount, Chips::ZERO);
}

#[test]
fn deleting_the_only_bet_demotes_dependent_call() {
    let record = heads_up(GameVariant::no_limit_holdem(), 1, 2)
        .with_action(1, 0, Bet)
        .unwrap()
        .with_amount(1, 0, Chips::new(10))
        .unwrap()
        .with_action(1, 1, Call)
        .unwrap();
    assert_eq!(record.round(1).unwrap().pot, Chips::new(3 + 10 + 10));

    let record = record.without_action(1, 0).unwrap();
    let flop = record.round(1).unwrap();
    let call = &flop.actions[0];

    assert_eq!(call.position, Bb);
    assert_eq!(call.amount, Chips::ZERO);
    assert_eq!(call.legal, vec![Fold, Check, Bet, AllIn]);
    assert!(!call.is_consistent());
    assert_eq!(flop.current_bet, Chips::ZERO);
    assert_eq!(flop.bet_raise_count, 0);
    assert_eq!(flop.pot, Chips::new(3));
}

#[test]
fn out_of_range_edits_are_rejected() {
    let record = HandRecord::new(GameVariant::limit_holdem());
    assert_eq!(record.with_action(9, 0, Fold), Err(EngineError::RoundOutOfRange(9)));
    assert_eq!(
        record.with_action(0, 6, Fold),
        Err(EngineError::ActionOutOfRange { round: 0, index: 6 })
    );
    assert!(record.without_action(1, 0).is_err());
    assert!(record.with_next_orbit(4).is_err());
}

#[test]
fn next_orbit_skips_folded_positions() {
    let record = HandRecord::new(GameVariant::limit_holdem())
        .with_action(0, 0, Fold)
        .unwrap()
        .with_action(0, 1, Fold)
        .unwrap()
        .with_next_orbit(1)
        .unwrap();

    let order: Vec<_> = record.round(1).unwrap().actions.iter().map(|a| a.position).collect();
    assert_eq!(order, vec![Sb, Bb, Co, Btn]);
}

#[test]
fn next_orbit_appends_on_top_of_existing_rows() {
    let record = HandRecord::new(GameVariant::limit_holdem())
        .with_table_size(3)
        .unwrap()
        .with_action(0, 0, Raise)
        .unwrap()
        .with_action(0, 1, Fold)
        .unwrap()
        .with_action(0, 2, Raise)
        .unwrap()
        .with_next_orbit(0)
        .unwrap();

    let order: Vec<_> = record.round(0).unwrap().actions.iter().map(|a| a.position).collect();
    assert_eq!(order, vec![Btn, Sb, Bb, Btn, Bb]);
}

#[test]
fn recompute_round_is_idempotent() {
    let record = heads_up(GameVariant::limit_holdem(), 2, 4)
        .with_action(1, 0, Bet)
        .unwrap()
        .with_action(1, 1, Raise)
        .unwrap();

    let rules = RoundRules::for_round(BettingStructure::FixedLimit, &record.stakes, 1);
    let mut again = record.round(1).unwrap().clone();
    recompute_round(&mut again, &rules);
    assert_eq!(&again, record.round(1).unwrap());
}
