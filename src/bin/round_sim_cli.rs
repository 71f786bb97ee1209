// src/bin/round_sim_cli.rs
//
// Dev-CLI: случайные агенты играют один раунд ставок.
//
// Запуск:
//   cargo run --bin round_sim_cli                  – 4 игрока, блайнды по умолчанию
//   cargo run --bin round_sim_cli -- config.json   – конфиг из файла
//   RUST_LOG=debug cargo run --bin round_sim_cli   – подробный лог движка

use std::env;
use std::process;

use nolimit_round::api::build_round_view;
use nolimit_round::domain::{Chips, RoundConfig};
use nolimit_round::engine::{RandomSource, RoundTable};
use nolimit_round::infra::{load_round_config, SystemRng};

/// Ограничение на число ходов, чтобы симуляция гарантированно закончилась.
const MAX_STEPS: usize = 1_000;

fn main() {
    env_logger::init();

    let config = match env::args().nth(1) {
        Some(path) => match load_round_config(&path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("round_sim_cli: {}", e);
                process::exit(1);
            }
        },
        None => RoundConfig {
            num_players: 4,
            ..RoundConfig::default()
        },
    };

    println!("round_sim_cli: стартуем раунд на {} мест…", config.num_players);

    let stacks = vec![Chips(100); config.num_players];
    let mut table = match RoundTable::with_stacks(config, &stacks) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("round_sim_cli: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = table.start_round(0, None) {
        eprintln!("round_sim_cli: start_round: {}", e);
        process::exit(1);
    }

    let mut rng = SystemRng;
    for step in 0..MAX_STEPS {
        if table.is_round_over() {
            break;
        }

        let legal = match table.legal_actions() {
            Ok(l) => l,
            Err(e) => {
                eprintln!("round_sim_cli: legal_actions: {}", e);
                process::exit(1);
            }
        };
        let Some(&action) = rng.choose(&legal) else {
            break;
        };

        let seat = table.round().game_pointer().unwrap_or_default();
        match table.apply_action(action) {
            Ok(next) => println!(
                "#{:<3} seat {} -> {:<24} pot={:<5} next={}",
                step,
                seat,
                action.to_string(),
                table.pot(),
                next
            ),
            Err(e) => {
                eprintln!("round_sim_cli: apply_action: {}", e);
                process::exit(1);
            }
        }
    }

    println!();
    println!("================ ROUND FINISHED =================");
    let view = build_round_view(&table);
    match serde_json::to_string_pretty(&view) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("round_sim_cli: {}", e),
    }
}
