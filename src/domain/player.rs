use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::PlayerId;
use crate::engine::errors::EngineError;

/// Статус игрока в текущей раздаче.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerStatus {
    /// Игрок активен в текущей раздаче.
    Active,
    /// Игрок сфолдил и больше не участвует в банке.
    Folded,
    /// Игрок в оллыне – не может больше делать ставки.
    AllIn,
}

/// То, что движок раунда умеет делать с местом за столом.
///
/// Сама запись игрока принадлежит внешнему коду; движок только
/// читает стек, меняет статус (Folded / AllIn) и списывает фишки через `bet`.
pub trait Seat {
    /// Сколько фишек осталось в стеке.
    fn remained_chips(&self) -> Chips;

    fn status(&self) -> PlayerStatus;

    fn set_status(&mut self, status: PlayerStatus);

    /// Списать `chips` из стека в банк.
    /// Сумма больше стека – ошибка `NotEnoughChips`.
    fn bet(&mut self, chips: Chips) -> Result<(), EngineError>;

    fn is_folded(&self) -> bool {
        self.status() == PlayerStatus::Folded
    }
}

/// Состояние игрока за конкретным столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerAtTable {
    pub player_id: PlayerId,
    /// Текущий стек за столом.
    pub remained_chips: Chips,
    /// Сколько всего фишек игрок вложил в банк за раздачу.
    pub in_chips: Chips,
    pub status: PlayerStatus,
}

impl PlayerAtTable {
    pub fn new(player_id: PlayerId, stack: Chips) -> Self {
        Self {
            player_id,
            remained_chips: stack,
            in_chips: Chips::ZERO,
            status: PlayerStatus::Active,
        }
    }
}

impl Seat for PlayerAtTable {
    fn remained_chips(&self) -> Chips {
        self.remained_chips
    }

    fn status(&self) -> PlayerStatus {
        self.status
    }

    fn set_status(&mut self, status: PlayerStatus) {
        self.status = status;
    }

    fn bet(&mut self, chips: Chips) -> Result<(), EngineError> {
        if chips > self.remained_chips {
            return Err(EngineError::NotEnoughChips {
                needed: chips,
                available: self.remained_chips,
            });
        }
        self.remained_chips -= chips;
        self.in_chips += chips;
        Ok(())
    }
}
