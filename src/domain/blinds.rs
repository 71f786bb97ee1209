// src/domain/blinds.rs

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::SeatIndex;

/// Позиции и размеры блайндов для одной раздачи.
///
/// Значения по умолчанию: SB сидит на месте 0 и платит 1,
/// BB сидит на месте 1 и платит 2.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BlindConfig {
    pub small_blind_pos: SeatIndex,
    pub big_blind_pos: SeatIndex,
    pub small_blind: Chips,
    pub big_blind: Chips,
}

impl Default for BlindConfig {
    fn default() -> Self {
        Self {
            small_blind_pos: 0,
            big_blind_pos: 1,
            small_blind: Chips(1),
            big_blind: Chips(2),
        }
    }
}

impl BlindConfig {
    pub fn new(
        small_blind_pos: SeatIndex,
        big_blind_pos: SeatIndex,
        small_blind: Chips,
        big_blind: Chips,
    ) -> Self {
        Self {
            small_blind_pos,
            big_blind_pos,
            small_blind,
            big_blind,
        }
    }

    /// Проверка конфигурации для стола на `num_players` мест.
    pub fn validate(&self, num_players: usize) -> Result<(), String> {
        if self.small_blind_pos as usize >= num_players {
            return Err(format!(
                "BlindConfig: small_blind_pos {} вне стола на {} мест",
                self.small_blind_pos, num_players
            ));
        }
        if self.big_blind_pos as usize >= num_players {
            return Err(format!(
                "BlindConfig: big_blind_pos {} вне стола на {} мест",
                self.big_blind_pos, num_players
            ));
        }
        if self.small_blind_pos == self.big_blind_pos {
            return Err(format!(
                "BlindConfig: SB и BB на одном месте ({})",
                self.small_blind_pos
            ));
        }
        if self.small_blind.is_zero() {
            return Err("BlindConfig: small_blind = 0".into());
        }
        if self.big_blind < self.small_blind {
            return Err(format!(
                "BlindConfig: big_blind ({}) < small_blind ({})",
                self.big_blind, self.small_blind
            ));
        }
        Ok(())
    }
}
