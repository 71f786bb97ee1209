use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::player::PlayerStatus;
use crate::domain::{PlayerId, SeatIndex};

/// DTO одного места за столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatViewDto {
    pub seat_index: SeatIndex,
    pub player_id: PlayerId,
    pub remained_chips: Chips,
    pub in_chips: Chips,
    pub status: PlayerStatus,
    /// Ставка в текущем раунде.
    pub raised: Chips,
}

/// DTO раунда ставок – то, что видит агент перед выбором действия.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundViewDto {
    /// Чей ход (None, если раунд ещё не начат).
    pub game_pointer: Option<SeatIndex>,
    pub pot: Chips,
    pub seats: Vec<SeatViewDto>,
    /// Коды допустимых действий для ходящего.
    pub legal_actions: Vec<u8>,
    pub is_over: bool,
}
