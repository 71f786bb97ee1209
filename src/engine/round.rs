use log::{debug, trace, warn};

use crate::domain::chips::Chips;
use crate::domain::player::{PlayerStatus, Seat};
use crate::domain::table::{RoundConfig, TableContext};
use crate::domain::{SeatIndex, MAX_SEATS};
use crate::engine::actions::Action;
use crate::engine::betting::RoundState;
use crate::engine::errors::EngineError;
use crate::engine::positions::{count_unfolded, next_unfolded_seat};
use crate::engine::sizing::{commit_amount, raise_threshold};

/// Рейзы в том порядке, в котором они попадают в список допустимых действий.
const RAISES: [Action; 5] = [
    Action::RaiseQuarterPot,
    Action::RaiseHalfPot,
    Action::RaiseThreeQuarterPot,
    Action::RaisePot,
    Action::RaiseMin,
];

/// Движок одного раунда ставок.
///
/// Основные операции:
///   - `start_round` – начать раунд (с блайндами или с перенесёнными ставками)
///   - `apply_action` – применить действие игрока, который сейчас ходит
///   - `legal_actions` – какие действия доступны ходящему
///   - `is_round_over` – закончен ли раунд
///
/// Записи игроков и банк принадлежат внешнему коду и передаются в каждый вызов.
#[derive(Clone, Debug)]
pub struct BettingRound {
    num_players: usize,
    init_raise_amount: Chips,
    state: Option<RoundState>,
}

impl BettingRound {
    pub fn new(num_players: usize, init_raise_amount: Chips) -> Self {
        Self {
            num_players,
            init_raise_amount,
            state: None,
        }
    }

    pub fn from_config(config: &RoundConfig) -> Self {
        Self::new(config.num_players, config.init_raise_amount)
    }

    /// Состояние текущего раунда (только чтение).
    pub fn state(&self) -> Option<&RoundState> {
        self.state.as_ref()
    }

    pub fn game_pointer(&self) -> Option<SeatIndex> {
        self.state.as_ref().map(|s| s.game_pointer)
    }

    /// Начать новый раунд ставок.
    ///
    /// - `carried_raises = Some(..)` – ставки переносятся как есть, блайнды не ставятся;
    /// - `None` – первый раунд раздачи: обнуляем ставки и постим SB/BB.
    pub fn start_round<S: Seat, T: TableContext>(
        &mut self,
        pointer: SeatIndex,
        seats: &mut [S],
        table: &T,
        carried_raises: Option<Vec<Chips>>,
    ) -> Result<(), EngineError> {
        // Неудачный старт не должен оставлять состояние прошлого раунда.
        self.state = None;

        if self.num_players > MAX_SEATS {
            return Err(EngineError::InvalidConfig(format!(
                "мест {}, а индекс места вмещает не больше {}",
                self.num_players, MAX_SEATS
            )));
        }
        self.check_seat_count(seats.len())?;
        if pointer as usize >= self.num_players {
            return Err(EngineError::InvalidSeat(pointer));
        }
        if count_unfolded(seats) < 2 {
            return Err(EngineError::NotEnoughPlayers);
        }
        let pointer = next_unfolded_seat(seats, pointer, true).ok_or(EngineError::NotEnoughPlayers)?;

        let raised = match carried_raises {
            Some(raised) => {
                self.check_seat_count(raised.len())?;
                debug!("start_round: pointer={} carried raises {:?}", pointer, raised);
                raised
            }
            None => self.post_blinds(seats, table)?,
        };

        self.state = Some(RoundState::new(
            self.num_players,
            pointer,
            raised,
            self.init_raise_amount,
        ));
        Ok(())
    }

    /// Постинг SB/BB. Короткий стек ставит всё, что есть, и уходит в all-in.
    /// Сфолдившее место блайнд не ставит.
    fn post_blinds<S: Seat, T: TableContext>(
        &self,
        seats: &mut [S],
        table: &T,
    ) -> Result<Vec<Chips>, EngineError> {
        let blinds = table.blinds();
        blinds
            .validate(self.num_players)
            .map_err(EngineError::InvalidConfig)?;

        let mut raised = vec![Chips::ZERO; self.num_players];
        for (pos, amount) in [
            (blinds.small_blind_pos, blinds.small_blind),
            (blinds.big_blind_pos, blinds.big_blind),
        ] {
            let seat = &mut seats[pos as usize];
            if seat.is_folded() {
                debug!("blind skipped: seat={} folded", pos);
                continue;
            }
            let paid = amount.min(seat.remained_chips());
            seat.bet(paid)?;
            if seat.remained_chips().is_zero() {
                seat.set_status(PlayerStatus::AllIn);
            }
            raised[pos as usize] = paid;
            debug!("blind posted: seat={} amount={}", pos, paid);
        }
        Ok(raised)
    }

    /// Применить действие игрока, который сейчас ходит.
    /// Возвращает новый `game_pointer`.
    ///
    /// Легальность действия не проверяется – для этого есть `legal_actions`.
    pub fn apply_action<S: Seat, T: TableContext>(
        &mut self,
        seats: &mut [S],
        table: &T,
        action: Action,
    ) -> Result<SeatIndex, EngineError> {
        self.check_seat_count(seats.len())?;
        let state = self.state.as_mut().ok_or(EngineError::RoundNotStarted)?;
        if state.is_round_complete() {
            warn!("apply_action: round already over, {} rejected", action);
            return Err(EngineError::RoundAlreadyOver);
        }

        let pointer = state.game_pointer;
        let idx = pointer as usize;
        let seat = &mut seats[idx];
        if seat.is_folded() {
            return Err(EngineError::MoverFolded(pointer));
        }

        let stack = seat.remained_chips();
        let amount = commit_amount(action, table.pot(), state, stack);

        match action {
            Action::Fold => {
                seat.set_status(PlayerStatus::Folded);
                state.not_playing_num += 1;
            }
            Action::Check => {
                state.not_raise_num += 1;
            }
            _ => {
                seat.bet(amount)?;
                state.raised[idx] += amount;
                if action.is_aggressive() {
                    state.not_raise_num = 1;
                } else {
                    state.not_raise_num += 1;
                }
            }
        }

        if seat.remained_chips().is_zero() && !seat.is_folded() {
            seat.set_status(PlayerStatus::AllIn);
        }

        debug!(
            "seat={} action={} commit={} stack={} raised={}",
            pointer,
            action,
            amount,
            seat.remained_chips(),
            state.raised[idx]
        );

        state.game_pointer = next_unfolded_seat(seats, pointer, false).ok_or(EngineError::NoActiveSeats)?;
        if count_unfolded(seats) == 1 {
            debug!("only seat {} left unfolded, round over", state.game_pointer);
            state.last_seat_standing = true;
        }

        Ok(state.game_pointer)
    }

    /// То же, что `apply_action`, но по внешнему коду действия.
    pub fn apply_action_code<S: Seat, T: TableContext>(
        &mut self,
        seats: &mut [S],
        table: &T,
        code: u8,
    ) -> Result<SeatIndex, EngineError> {
        let action = Action::from_code(code)?;
        self.apply_action(seats, table, action)
    }

    /// Допустимые действия для того, кто сейчас ходит.
    pub fn legal_actions<S: Seat, T: TableContext>(
        &self,
        seats: &[S],
        table: &T,
    ) -> Result<Vec<Action>, EngineError> {
        self.check_seat_count(seats.len())?;
        let state = self.state.as_ref().ok_or(EngineError::RoundNotStarted)?;

        let pointer = state.game_pointer;
        let stack = seats[pointer as usize].remained_chips();
        let diff = state.diff_for(pointer);
        let pot = table.pot();

        let mut actions = vec![Action::Fold];
        if diff.is_zero() {
            actions.push(Action::Check);
            if !stack.is_zero() {
                for raise in RAISES {
                    if raise_threshold(raise, pot, state).is_some_and(|t| stack >= t) {
                        actions.push(raise);
                    }
                }
                actions.push(Action::AllIn);
            }
        } else {
            actions.push(Action::Call);
            if stack > diff {
                for raise in RAISES {
                    if raise_threshold(raise, pot, state).is_some_and(|t| stack >= diff + t) {
                        actions.push(raise);
                    }
                }
                actions.push(Action::AllIn);
            }
        }

        let mut legal = Vec::with_capacity(actions.len());
        for a in actions {
            if !legal.contains(&a) {
                legal.push(a);
            }
        }

        trace!("legal_actions: seat={} diff={} pot={} -> {:?}", pointer, diff, pot, legal);
        Ok(legal)
    }

    /// Допустимые действия в виде стабильных кодов.
    pub fn legal_action_codes<S: Seat, T: TableContext>(
        &self,
        seats: &[S],
        table: &T,
    ) -> Result<Vec<u8>, EngineError> {
        Ok(self
            .legal_actions(seats, table)?
            .into_iter()
            .map(Action::code)
            .collect())
    }

    /// Раунд закончен, если все либо сфолдили, либо уравняли без нового рейза,
    /// либо остался один несфолдивший игрок.
    pub fn is_round_over(&self) -> bool {
        self.state
            .as_ref()
            .is_some_and(RoundState::is_round_complete)
    }

    fn check_seat_count(&self, actual: usize) -> Result<(), EngineError> {
        if actual != self.num_players {
            return Err(EngineError::SeatCountMismatch {
                expected: self.num_players,
                actual,
            });
        }
        Ok(())
    }
}
