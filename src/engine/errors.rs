use crate::domain::{Chips, SeatIndex};

use thiserror::Error;

/// Ошибки движка раунда ставок.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Неизвестный код действия {0} (допустимо 0..=8)")]
    InvalidAction(u8),

    #[error("Ожидалось {expected} мест за столом, передано {actual}")]
    SeatCountMismatch { expected: usize, actual: usize },

    #[error("Место {0} не существует за столом")]
    InvalidSeat(SeatIndex),

    #[error("Недостаточно активных игроков для раунда")]
    NotEnoughPlayers,

    #[error("Некорректная конфигурация: {0}")]
    InvalidConfig(String),

    #[error("Недостаточно фишек: нужно {needed}, в стеке {available}")]
    NotEnoughChips { needed: Chips, available: Chips },

    #[error("Раунд ставок ещё не начат")]
    RoundNotStarted,

    #[error("Раунд ставок уже завершён")]
    RoundAlreadyOver,

    #[error("Игрок на месте {0} уже сфолдил и не может ходить")]
    MoverFolded(SeatIndex),

    #[error("За столом не осталось несфолдивших игроков")]
    NoActiveSeats,
}
