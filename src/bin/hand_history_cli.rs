// src/bin/hand_history_cli.rs

use std::{env, fs, process};

use serde::Deserialize;

use hand_history_engine::api::{ApiError, Command, EditSession};
use hand_history_engine::domain::card::{Card, CardSlot};
use hand_history_engine::domain::chips::Chips;
use hand_history_engine::domain::{AnteType, GameVariant, Position, Stakes};
use hand_history_engine::engine::{ActionKind, CardSlotRef};

/// Скрипт правок: вариант игры и команды по порядку.
#[derive(Debug, Deserialize)]
struct Script {
    variant: String,
    commands: Vec<Command>,
}

fn main() {
    env_logger::init();

    println!("hand_history_cli: собираем историю раздачи…");

    let result = match env::args().nth(1) {
        Some(path) => run_script(&path),
        None => run_demo(),
    };

    match result {
        Ok(text) => {
            println!();
            println!("================ HAND HISTORY =================");
            print!("{text}");
        }
        Err(err) => {
            eprintln!("Ошибка: {err:?}");
            process::exit(1);
        }
    }
}

fn run_script(path: &str) -> Result<String, ApiError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| ApiError::BadRequest(format!("не удалось прочитать {path}: {e}")))?;
    let script: Script = serde_json::from_str(&raw)?;

    let variant = GameVariant::by_id(&script.variant)
        .ok_or_else(|| ApiError::UnknownVariant(script.variant.clone()))?;

    println!("Игра: {}, команд: {}", variant.name, script.commands.len());
    replay(variant, script.commands)
}

/// Прогнать команды. Отклонённая команда не останавливает прогон:
/// как и в форме, предыдущая версия просто остаётся в силе.
fn replay(variant: GameVariant, commands: Vec<Command>) -> Result<String, ApiError> {
    let mut session = EditSession::new(variant);

    for (i, command) in commands.into_iter().enumerate() {
        match session.apply(command) {
            Ok(Some(notice)) => println!("  #{i}: {notice}"),
            Ok(None) => {}
            Err(err) => println!("  #{i}: отклонено: {err:?}"),
        }
    }

    println!("Версий в сессии: {}", session.len());
    Ok(session.current().to_string())
}

/// Демо без скрипта: 6-max лимитный холдем, рейз с баттона и колл с BB.
fn run_demo() -> Result<String, ApiError> {
    let variant = GameVariant::limit_holdem();
    println!("Скрипт не указан, демо: {}", variant.name);

    let hero = |i| CardSlotRef::Hero(i);
    let flop = |i| CardSlotRef::Board { round: 1, index: i };
    let card = |text: &str| -> Result<CardSlot, ApiError> {
        text.parse::<Card>()
            .map(CardSlot::of)
            .map_err(|e| ApiError::BadRequest(e.to_string()))
    };

    let commands = vec![
        Command::SetStakes(Stakes::new(
            Chips::new(2),
            Chips::new(4),
            Chips::ZERO,
            AnteType::Classic,
            Chips::new(400),
        )),
        Command::SetHeroPosition(Position::Btn),
        Command::SetCard { slot: hero(0), card: card("As")? },
        Command::SetCard { slot: hero(1), card: card("Kh")? },
        Command::SetAction { round: 0, index: 0, kind: ActionKind::Fold },
        Command::SetAction { round: 0, index: 1, kind: ActionKind::Fold },
        Command::SetAction { round: 0, index: 2, kind: ActionKind::Fold },
        Command::SetAction { round: 0, index: 3, kind: ActionKind::Raise },
        Command::SetAction { round: 0, index: 4, kind: ActionKind::Fold },
        Command::SetAction { round: 0, index: 5, kind: ActionKind::Call },
        Command::SetCard { slot: flop(0), card: card("Qd")? },
        Command::SetCard { slot: flop(1), card: card("7c")? },
        Command::SetCard { slot: flop(2), card: card("2s")? },
        Command::AppendOrbit { round: 1 },
        Command::SetAction { round: 1, index: 0, kind: ActionKind::Check },
        Command::SetAction { round: 1, index: 1, kind: ActionKind::Bet },
        Command::AddVillain,
    ];

    replay(variant, commands)
}
