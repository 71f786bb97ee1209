// src/engine/table_manager.rs

use log::debug;

use crate::domain::chips::Chips;
use crate::domain::player::PlayerAtTable;
use crate::domain::table::{Dealer, RoundConfig};
use crate::domain::SeatIndex;
use crate::engine::{Action, BettingRound, EngineError, RoundState};

/// Стол для одного раунда ставок:
/// - хранит игроков и дилера (банк + блайнды);
/// - держит активный `BettingRound`;
/// - после каждого изменения стеков пересчитывает банк.
///
/// Это тот самый "внешний код", которому движок делегирует учёт банка.
#[derive(Clone, Debug)]
pub struct RoundTable {
    pub config: RoundConfig,
    pub seats: Vec<PlayerAtTable>,
    pub dealer: Dealer,
    round: BettingRound,
}

impl RoundTable {
    /// Создать стол. Количество игроков должно совпадать с `config.num_players`.
    pub fn new(config: RoundConfig, seats: Vec<PlayerAtTable>) -> Result<Self, EngineError> {
        config.validate().map_err(EngineError::InvalidConfig)?;
        if seats.len() != config.num_players {
            return Err(EngineError::SeatCountMismatch {
                expected: config.num_players,
                actual: seats.len(),
            });
        }

        let mut dealer = Dealer::new(config.blinds);
        dealer.pot.collect(&seats);
        let round = BettingRound::from_config(&config);

        Ok(Self {
            config,
            seats,
            dealer,
            round,
        })
    }

    /// Стол с одинаковыми стеками, player_id = 1..=num_players.
    pub fn with_stacks(config: RoundConfig, stacks: &[Chips]) -> Result<Self, EngineError> {
        let seats = stacks
            .iter()
            .enumerate()
            .map(|(i, &stack)| PlayerAtTable::new(i as u64 + 1, stack))
            .collect();
        Self::new(config, seats)
    }

    pub fn round(&self) -> &BettingRound {
        &self.round
    }

    pub fn round_state(&self) -> Option<&RoundState> {
        self.round.state()
    }

    pub fn pot(&self) -> Chips {
        self.dealer.pot.total
    }

    pub fn start_round(
        &mut self,
        pointer: SeatIndex,
        carried_raises: Option<Vec<Chips>>,
    ) -> Result<(), EngineError> {
        self.round
            .start_round(pointer, &mut self.seats, &self.dealer, carried_raises)?;
        self.dealer.pot.collect(&self.seats);
        debug!("round started, pot={}", self.dealer.pot.total);
        Ok(())
    }

    pub fn apply_action(&mut self, action: Action) -> Result<SeatIndex, EngineError> {
        let pointer = self
            .round
            .apply_action(&mut self.seats, &self.dealer, action)?;
        self.dealer.pot.collect(&self.seats);
        Ok(pointer)
    }

    pub fn apply_action_code(&mut self, code: u8) -> Result<SeatIndex, EngineError> {
        let action = Action::from_code(code)?;
        self.apply_action(action)
    }

    pub fn legal_actions(&self) -> Result<Vec<Action>, EngineError> {
        self.round.legal_actions(&self.seats, &self.dealer)
    }

    pub fn legal_action_codes(&self) -> Result<Vec<u8>, EngineError> {
        self.round.legal_action_codes(&self.seats, &self.dealer)
    }

    pub fn is_round_over(&self) -> bool {
        self.round.is_round_over()
    }
}
