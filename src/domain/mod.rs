//! Доменная модель: фишки, игроки, блайнды, контекст стола.

pub mod blinds;
pub mod chips;
pub mod player;
pub mod table;

// Базовые идентификаторы
pub type PlayerId = u64;

/// Индекс места за столом (0..num_players-1).
pub type SeatIndex = u8;

/// Сколько мест вообще можно адресовать через `SeatIndex`.
pub const MAX_SEATS: usize = SeatIndex::MAX as usize + 1;

pub use blinds::*;
pub use chips::*;
pub use player::*;
pub use table::*;
