//! Цепочка банков: посев блайндами и анте, исключение Call блайндов,
//! накопление по раундам.

use hand_history_engine::domain::Position::{self, *};
use hand_history_engine::domain::{AnteType, Chips, GameVariant, Stakes};
use hand_history_engine::engine::ActionKind::{self, *};
use hand_history_engine::engine::{round_pot, Action, HandRecord};

fn stakes(sb: u64, bb: u64, ante: u64, ante_type: AnteType) -> Stakes {
    Stakes::new(Chips::new(sb), Chips::new(bb), Chips::new(ante), ante_type, Chips::ZERO)
}

fn paid(position: Position, kind: ActionKind, amount: u64) -> Action {
    Action {
        kind: Some(kind),
        amount: Chips::new(amount),
        ..Action::blank(position)
    }
}

#[test]
fn empty_first_round_is_just_the_blinds() {
    let pot = round_pot(&[], &stakes(1, 2, 0, AnteType::Classic), 6, Chips::ZERO);
    assert_eq!(pot, Chips::new(3));
}

#[test]
fn small_blind_call_only_adds_the_difference() {
    let actions = vec![paid(Sb, Call, 2)];
    let pot = round_pot(&actions, &stakes(1, 2, 0, AnteType::Classic), 2, Chips::ZERO);
    assert_eq!(pot, Chips::new(4));
}

#[test]
fn big_blind_call_after_raise_only_adds_the_difference() {
    let actions = vec![paid(Sb, Raise, 6), paid(Bb, Call, 6)];
    let pot = round_pot(&actions, &stakes(1, 2, 0, AnteType::Classic), 2, Chips::ZERO);
    assert_eq!(pot, Chips::new(3 + 6 + 4));
}

#[test]
fn blind_exemption_applies_only_to_the_first_round() {
    let actions = vec![paid(Sb, Bet, 4), paid(Bb, Call, 4)];
    let pot = round_pot(&actions, &stakes(1, 2, 0, AnteType::Classic), 2, Chips::new(10));
    assert_eq!(pot, Chips::new(18));
}

#[test]
fn fold_check_and_all_in_add_nothing() {
    let actions = vec![paid(Utg, Fold, 0), paid(Btn, AllIn, 0), paid(Bb, Check, 0)];
    let pot = round_pot(&actions, &stakes(1, 2, 0, AnteType::Classic), 6, Chips::new(20));
    assert_eq!(pot, Chips::new(20));
}

#[test]
fn ante_policy_is_a_switch() {
    let seed = |ante_type| round_pot(&[], &stakes(1, 2, 1, ante_type), 6, Chips::ZERO);
    assert_eq!(seed(AnteType::Classic), Chips::new(3 + 6));
    assert_eq!(seed(AnteType::BigBlind), Chips::new(3 + 1));
    assert_eq!(seed(AnteType::None), Chips::new(3));
}

#[test]
fn pots_chain_through_every_round() {
    let record = HandRecord::new(GameVariant::no_limit_holdem())
        .with_table_size(2)
        .unwrap()
        .with_stakes(stakes(1, 2, 0, AnteType::None))
        .with_action(0, 0, Call)
        .unwrap()
        .with_action(0, 1, Check)
        .unwrap()
        .with_next_orbit(1)
        .unwrap()
        .with_action(1, 0, Bet)
        .unwrap()
        .with_amount(1, 0, Chips::new(5))
        .unwrap()
        .with_action(1, 1, Call)
        .unwrap();

    let pots: Vec<_> = record.rounds.iter().map(|r| r.pot).collect();
    assert_eq!(pots, vec![Chips::new(4), Chips::new(14), Chips::new(14), Chips::new(14)]);
    assert_eq!(record.total_pot(), Chips::new(14));
}

#[test]
fn stake_change_recomputes_the_whole_chain() {
    let record = HandRecord::new(GameVariant::limit_holdem())
        .with_table_size(2)
        .unwrap()
        .with_stakes(stakes(1, 2, 0, AnteType::Classic))
        .with_action(0, 0, Raise)
        .unwrap();
    assert_eq!(record.total_pot(), Chips::new(3 + 2));

    let record = record.with_small_blind(Chips::new(2));
    assert_eq!(record.stakes.big_blind, Chips::new(4));
    assert_eq!(record.total_pot(), Chips::new(6 + 4));
}

#[test]
fn variant_ante_rules_follow_the_big_blind() {
    let nl = HandRecord::new(GameVariant::no_limit_holdem()).with_stakes(stakes(1, 2, 0, AnteType::BigBlind));
    assert_eq!(nl.stakes.ante, Chips::new(2));
    assert_eq!(nl.total_pot(), Chips::new(5));

    let single_draw =
        HandRecord::new(GameVariant::nl_single_draw_27()).with_stakes(stakes(1, 3, 0, AnteType::Classic));
    assert_eq!(single_draw.stakes.ante, Chips::new(5));

    let manual = HandRecord::new(GameVariant::limit_holdem())
        .with_stakes(stakes(1, 2, 0, AnteType::Classic))
        .with_ante_equal_to_big_blind();
    assert_eq!(manual.stakes.ante, Chips::new(2));
    assert_eq!(manual.total_pot(), Chips::new(3 + 12));
}
