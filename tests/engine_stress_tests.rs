// tests/engine_stress_tests.rs
//
// Стресс-тесты: случайные агенты играют много раундов, после каждого хода
// проверяем инварианты движка.
//
// 1) random_rounds_keep_invariants
//    - 500 раундов, 2–6 мест, случайные стеки (в т.ч. короткие).
//    - после каждого хода: указатель на несфолдившем месте, ставки не убывают,
//      прирост ставки не больше стека до хода, банк = сумма вложенного.
//    - раунд обязательно заканчивается.
//
// 2) check_call_agents_always_finish
//    - агенты, которые только чекают/коллируют, заканчивают раунд за один круг.
//
// 3) seeded_runs_are_reproducible
//    - один и тот же seed -> одна и та же последовательность действий.

use nolimit_round::domain::{Chips, PlayerStatus, RoundConfig};
use nolimit_round::engine::{Action, RandomSource, RoundTable};
use nolimit_round::infra::rng::DeterministicRng;

/// Больше ходов раунд занять не должен.
const MAX_STEPS: usize = 10_000;

// ---------------------------------------------------------
// ВСПОМОГАТЕЛЬНЫЕ ФУНКЦИИ
// ---------------------------------------------------------

fn pick(rng: &mut DeterministicRng, len: usize) -> usize {
    rng.pick_index(len).expect("non-empty range")
}

fn random_table(rng: &mut DeterministicRng) -> RoundTable {
    let num_players = 2 + pick(rng, 5);
    let stacks: Vec<Chips> = (0..num_players)
        .map(|_| Chips(pick(rng, 200) as u64))
        .collect();
    let config = RoundConfig {
        num_players,
        ..RoundConfig::default()
    };
    RoundTable::with_stacks(config, &stacks).expect("valid table")
}

/// Сыграть раунд случайными легальными действиями, проверяя инварианты.
/// Возвращает список сыгранных действий.
fn play_checked_round(table: &mut RoundTable, rng: &mut DeterministicRng) -> Vec<Action> {
    let mut played = Vec::new();

    for _ in 0..MAX_STEPS {
        if table.is_round_over() {
            return played;
        }

        let state = table.round_state().expect("round started").clone();
        let pointer = state.game_pointer as usize;
        let stack_before = table.seats[pointer].remained_chips;

        let legal = table.legal_actions().expect("legal_actions");
        assert_eq!(legal.first(), Some(&Action::Fold));
        let action = *rng.choose(&legal).expect("legal actions never empty");

        let next = table.apply_action(action).expect("legal action must apply");
        played.push(action);

        let after = table.round_state().expect("round started");

        // Ставки не убывают.
        for (before, now) in state.raised.iter().zip(after.raised.iter()) {
            assert!(now >= before, "raised went down: {:?} -> {:?}", state.raised, after.raised);
        }

        // Прирост ставки не больше стека до хода и равен списанным фишкам.
        let delta = after.raised[pointer] - state.raised[pointer];
        assert!(delta <= stack_before);
        assert_eq!(stack_before - table.seats[pointer].remained_chips, delta);

        // Указатель на несфолдившем месте.
        assert_ne!(table.seats[next as usize].status, PlayerStatus::Folded);
        assert_eq!(after.game_pointer, next);

        // Походивший с пустым стеком и без фолда – в all-in.
        let mover = &table.seats[pointer];
        if mover.remained_chips.is_zero() && mover.status != PlayerStatus::Folded {
            assert_eq!(mover.status, PlayerStatus::AllIn);
        }

        // Банк наблюдает за bet.
        let committed: Chips = table.seats.iter().map(|p| p.in_chips).sum();
        assert_eq!(table.pot(), committed);
    }

    panic!("round did not finish in {} steps: {:?}", MAX_STEPS, played);
}

// ---------------------------------------------------------
// ТЕСТЫ
// ---------------------------------------------------------

#[test]
fn random_rounds_keep_invariants() {
    let mut rng = DeterministicRng::from_u64(7);

    for _ in 0..500 {
        let mut table = random_table(&mut rng);
        table.start_round(0, None).expect("start_round failed");
        play_checked_round(&mut table, &mut rng);

        assert!(table.is_round_over());
        let state = table.round_state().unwrap();
        assert!(
            state.last_seat_standing
                || state.not_raise_num + state.not_playing_num >= state.num_players
        );
    }
}

#[test]
fn random_carried_rounds_keep_invariants() {
    let mut rng = DeterministicRng::from_u64(11);

    for _ in 0..200 {
        let mut table = random_table(&mut rng);
        let n = table.config.num_players;
        let carried = vec![Chips::ZERO; n];
        let pointer = pick(&mut rng, n) as u8;
        table.start_round(pointer, Some(carried)).expect("start_round failed");
        play_checked_round(&mut table, &mut rng);
    }
}

#[test]
fn check_call_agents_always_finish() {
    for n in 2..=9 {
        let config = RoundConfig {
            num_players: n,
            ..RoundConfig::default()
        };
        let mut table = RoundTable::with_stacks(config, &vec![Chips(100); n]).unwrap();
        table.start_round((2 % n) as u8, None).unwrap();

        let mut steps = 0;
        while !table.is_round_over() {
            let legal = table.legal_actions().unwrap();
            let action = if legal.contains(&Action::Check) {
                Action::Check
            } else {
                Action::Call
            };
            table.apply_action(action).unwrap();
            steps += 1;
        }
        assert_eq!(steps, n, "{} players", n);

        // Все уравняли BB.
        let state = table.round_state().unwrap();
        assert!(state.raised.iter().all(|r| *r == Chips(2)));
    }
}

#[test]
fn seeded_runs_are_reproducible() {
    let run = |seed: u64| {
        let mut rng = DeterministicRng::from_u64(seed);
        let mut table = random_table(&mut rng);
        table.start_round(0, None).unwrap();
        let actions = play_checked_round(&mut table, &mut rng);
        (actions, table.seats.clone())
    };

    assert_eq!(run(99), run(99));
}
