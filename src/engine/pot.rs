use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::player::PlayerAtTable;

/// Общий банк раздачи. Side pots здесь не считаем.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pot {
    pub total: Chips,
}

impl Pot {
    pub fn new() -> Self {
        Self {
            total: Chips::ZERO,
        }
    }

    /// Пересчитать банк по тому, сколько каждый игрок уже вложил за раздачу.
    pub fn collect(&mut self, seats: &[PlayerAtTable]) {
        self.total = seats.iter().map(|p| p.in_chips).sum();
    }
}
