//! Движок раунда ставок no-limit покера.
//!
//! Высокоуровневый объект: `BettingRound`
//! Основные операции:
//!   - `start_round` – начать раунд (блайнды или перенесённые ставки)
//!   - `apply_action` – применить действие ходящего игрока
//!   - `legal_actions` – допустимые действия
//!   - `is_round_over` – закончен ли раунд

pub mod actions;
pub mod betting;
pub mod errors;
pub mod positions;
pub mod pot;
pub mod round;
pub mod sizing;
pub mod table_manager;

pub use actions::Action;
pub use betting::RoundState;
pub use errors::EngineError;
pub use pot::Pot;
pub use round::BettingRound;
pub use table_manager::RoundTable;

/// Внешний источник случайности.
///
/// Движок его не использует; он нужен агентам и симуляциям,
/// которые выбирают действие из `legal_actions`.
pub trait RandomSource {
    /// Случайный индекс в диапазоне `0..len`; `None` для пустого диапазона.
    fn pick_index(&mut self, len: usize) -> Option<usize>;

    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        self.pick_index(items.len()).and_then(|idx| items.get(idx))
    }
}
