//! Каноническая текстовая история.

use hand_history_engine::domain::{AnteType, Card, CardSlot, Chips, GameVariant, Position, Stakes};
use hand_history_engine::engine::ActionKind::*;
use hand_history_engine::engine::{format_history, CardSlotRef, HandRecord};

fn slot(text: &str) -> CardSlot {
    CardSlot::of(text.parse::<Card>().expect("valid card"))
}

fn set_cards(mut record: HandRecord, cards: &[(CardSlotRef, &str)]) -> HandRecord {
    for (at, text) in cards {
        record = record.with_card(*at, slot(text)).unwrap();
    }
    record
}

#[test]
fn heads_up_limit_holdem_history() {
    let record = HandRecord::new(GameVariant::limit_holdem())
        .with_table_size(2)
        .unwrap()
        .with_stakes(Stakes::new(
            Chips::new(1),
            Chips::new(2),
            Chips::ZERO,
            AnteType::Classic,
            Chips::new(100),
        ))
        .with_hero_position(Position::Bb)
        .unwrap()
        .with_action(0, 0, Call)
        .unwrap()
        .with_action(0, 1, Call)
        .unwrap()
        .with_next_orbit(1)
        .unwrap()
        .with_action(1, 0, Check)
        .unwrap()
        .with_action(1, 1, Bet)
        .unwrap()
        .with_villain()
        .unwrap();

    let record = set_cards(
        record,
        &[
            (CardSlotRef::Hero(0), "As"),
            (CardSlotRef::Hero(1), "Kh"),
            (CardSlotRef::Board { round: 1, index: 0 }, "Qd"),
            (CardSlotRef::Board { round: 1, index: 1 }, "7c"),
            (CardSlotRef::Board { round: 1, index: 2 }, "2s"),
            (CardSlotRef::Villain { hand: 0, index: 0 }, "Jh"),
            (CardSlotRef::Villain { hand: 0, index: 1 }, "Jd"),
        ],
    );

    // Пустая сумма оставляет пробел в конце строки.
    let expected = concat!(
        "SB: 1, BB: 2, Ante: 0, ES: 100\n",
        "Players: 2\n",
        "Hero: BB, AsKh\n",
        "Preflop:\n",
        "SB: c 2\n",
        "BB: c 2\n",
        "\n",
        "Flop:\n",
        "Qd7c2s (4)\n",
        "\n",
        "SB: c \n",
        "BB: b 2\n",
        "\n",
        "Turn:\n",
        "\n",
        "River:\n",
        "\n",
        "Villain SB: JhJd\n",
    );
    assert_eq!(format_history(&record), expected);
    assert_eq!(record.to_string(), expected);
    assert!(record.all_actions().all(|a| a.is_consistent()));
}

#[test]
fn fresh_record_prints_blank_rows() {
    let record = HandRecord::new(GameVariant::razz()).with_table_size(2).unwrap();
    let expected = concat!(
        "SB: 0, BB: 0, Ante: 0, ES: 0\n",
        "Players: 2\n",
        "Hero: , \n",
        "3rd Street:\n",
        "SB:  \n",
        "BB:  \n",
        "\n",
        "4th Street:\n",
        "\n",
        "5th Street:\n",
        "\n",
        "6th Street:\n",
        "\n",
        "7th Street:\n",
        "\n",
    );
    assert_eq!(format_history(&record), expected);
}

#[test]
fn draw_rounds_print_exchanges_and_hero_draws() {
    let record = HandRecord::new(GameVariant::badugi())
        .with_table_size(2)
        .unwrap()
        .with_exchange_count(1, Position::Sb, 2)
        .unwrap()
        .with_exchange_count(1, Position::Bb, 1)
        .unwrap()
        .with_discard(1, 3, true)
        .unwrap()
        .with_drawn_slot(1)
        .unwrap();
    let record = set_cards(
        record,
        &[
            (CardSlotRef::Hero(0), "Ac"),
            (CardSlotRef::Hero(1), "2d"),
            (CardSlotRef::Hero(2), "3h"),
            (CardSlotRef::Hero(3), "3s"),
            (CardSlotRef::Drawn { round: 1, index: 0 }, "4s"),
        ],
    );

    let text = format_history(&record);
    assert!(text.contains("Hero: , Ac2d3h3s\n"));
    assert!(text.contains("Draw 1:\nSB: 2\nBB: 1\nHero discards: 3s\nHero draws: 4s\n\nDraw 2:\nSB: 0\nBB: 0\nHero discards: \nHero draws: \n\n"));
}

#[test]
fn all_in_prints_without_amount() {
    let record = HandRecord::new(GameVariant::no_limit_holdem())
        .with_table_size(2)
        .unwrap()
        .with_action(0, 0, AllIn)
        .unwrap()
        .with_action(0, 1, Fold)
        .unwrap();
    let text = format_history(&record);
    assert!(text.contains("Preflop:\nSB: AI \nBB: f \n\n"));
}
