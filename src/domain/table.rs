use serde::{Deserialize, Serialize};

use crate::domain::blinds::BlindConfig;
use crate::domain::chips::Chips;
use crate::domain::MAX_SEATS;
use crate::engine::pot::Pot;

/// Конфиг раунда ставок: сколько мест, минимальный рейз, блайнды.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RoundConfig {
    /// Количество мест за столом (фиксировано на всю раздачу).
    pub num_players: usize,
    /// Базовый минимальный рейз (обычно равен BB).
    pub init_raise_amount: Chips,
    pub blinds: BlindConfig,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            num_players: 2,
            init_raise_amount: Chips(2),
            blinds: BlindConfig::default(),
        }
    }
}

impl RoundConfig {
    pub fn new(num_players: usize, init_raise_amount: Chips, blinds: BlindConfig) -> Self {
        Self {
            num_players,
            init_raise_amount,
            blinds,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.num_players < 2 {
            return Err(format!(
                "RoundConfig: нужно минимум 2 места, задано {}",
                self.num_players
            ));
        }
        if self.num_players > MAX_SEATS {
            return Err(format!(
                "RoundConfig: максимум {} мест, задано {}",
                MAX_SEATS, self.num_players
            ));
        }
        if self.init_raise_amount.is_zero() {
            return Err("RoundConfig: init_raise_amount = 0".into());
        }
        self.blinds.validate(self.num_players)
    }
}

/// Контекст дилера/стола, который читает движок раунда.
///
/// Банк движок только читает: фишки в него попадают через `Seat::bet`,
/// а подсчётом банка занимается внешний код.
pub trait TableContext {
    fn pot(&self) -> Chips;

    fn blinds(&self) -> BlindConfig;
}

/// Простой дилер: банк + конфигурация блайндов.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dealer {
    pub pot: Pot,
    pub blinds: BlindConfig,
}

impl Dealer {
    pub fn new(blinds: BlindConfig) -> Self {
        Self {
            pot: Pot::new(),
            blinds,
        }
    }
}

impl TableContext for Dealer {
    fn pot(&self) -> Chips {
        self.pot.total
    }

    fn blinds(&self) -> BlindConfig {
        self.blinds
    }
}
