use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::SeatIndex;

/// Состояние одного раунда ставок (на конкретной улице).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundState {
    pub num_players: usize,
    /// Чей сейчас ход. Всегда указывает на несфолдившее место.
    pub game_pointer: SeatIndex,
    /// Сколько каждый seat вложил именно в этом раунде.
    pub raised: Vec<Chips>,
    /// Базовый минимальный рейз.
    pub init_raise_amount: Chips,
    /// Сколько ходов подряд (Check/Call) прошло с последней агрессии.
    pub not_raise_num: usize,
    /// Сколько игроков сфолдило в этом раунде.
    pub not_playing_num: usize,
    /// Остался один несфолдивший игрок – раунд закончен досрочно.
    pub last_seat_standing: bool,
}

impl RoundState {
    pub fn new(
        num_players: usize,
        game_pointer: SeatIndex,
        raised: Vec<Chips>,
        init_raise_amount: Chips,
    ) -> Self {
        Self {
            num_players,
            game_pointer,
            raised,
            init_raise_amount,
            not_raise_num: 0,
            not_playing_num: 0,
            last_seat_standing: false,
        }
    }

    /// Наибольшая ставка в раунде.
    pub fn max_raised(&self) -> Chips {
        self.raised.iter().copied().max().unwrap_or(Chips::ZERO)
    }

    pub fn min_raised(&self) -> Chips {
        self.raised.iter().copied().min().unwrap_or(Chips::ZERO)
    }

    /// Сколько нужно доплатить seat'у, чтобы уравнять наибольшую ставку.
    pub fn diff_for(&self, seat: SeatIndex) -> Chips {
        let own = self.raised.get(seat as usize).copied().unwrap_or(Chips::ZERO);
        self.max_raised() - own
    }

    /// Текущий размер минимального рейза.
    pub fn min_raise_amount(&self) -> Chips {
        self.init_raise_amount.max(self.max_raised() - self.min_raised())
    }

    /// Все либо сфолдили, либо уравняли без нового рейза.
    pub fn is_round_complete(&self) -> bool {
        self.last_seat_standing || self.not_raise_num + self.not_playing_num >= self.num_players
    }
}
