//! Движок раунда ставок для no-limit покера.
//!
//! Ведёт один раунд ставок между N местами: применяет действие ходящего,
//! считает допустимые действия, передаёт ход и решает, когда раунд закончен.
//! Раздача карт, оценка рук и шоудаун – забота внешнего кода.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;

pub use domain::{BlindConfig, Chips, PlayerAtTable, PlayerStatus, RoundConfig, Seat, SeatIndex, TableContext};
pub use engine::{Action, BettingRound, EngineError, RoundState, RoundTable};
