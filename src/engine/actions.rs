use core::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::errors::EngineError;

/// Действие игрока в no-limit раунде.
///
/// Коды 0..=8 – внешний контракт (например, индекс действия у агента),
/// перенумеровывать нельзя.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Action {
    Fold = 0,
    Check = 1,
    Call = 2,
    RaiseQuarterPot = 3,
    RaiseHalfPot = 4,
    RaiseThreeQuarterPot = 5,
    RaisePot = 6,
    /// Минимальный рейз: max(init_raise_amount, max(raised) - min(raised)).
    RaiseMin = 7,
    /// Поставить весь оставшийся стек.
    AllIn = 8,
}

impl Action {
    /// Все действия в порядке их кодов.
    pub const ALL: [Action; 9] = [
        Action::Fold,
        Action::Check,
        Action::Call,
        Action::RaiseQuarterPot,
        Action::RaiseHalfPot,
        Action::RaiseThreeQuarterPot,
        Action::RaisePot,
        Action::RaiseMin,
        Action::AllIn,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Result<Action, EngineError> {
        Action::ALL
            .get(code as usize)
            .copied()
            .ok_or(EngineError::InvalidAction(code))
    }

    /// Доля банка `(num, den)` для рейзов от банка.
    pub fn pot_fraction(self) -> Option<(u64, u64)> {
        match self {
            Action::RaiseQuarterPot => Some((1, 4)),
            Action::RaiseHalfPot => Some((1, 2)),
            Action::RaiseThreeQuarterPot => Some((3, 4)),
            Action::RaisePot => Some((1, 1)),
            _ => None,
        }
    }

    /// Поднимает ли действие уровень ставки (сбрасывает "консенсус").
    pub fn is_aggressive(self) -> bool {
        matches!(
            self,
            Action::RaiseQuarterPot
                | Action::RaiseHalfPot
                | Action::RaiseThreeQuarterPot
                | Action::RaisePot
                | Action::RaiseMin
                | Action::AllIn
        )
    }
}

impl TryFrom<u8> for Action {
    type Error = EngineError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Action::from_code(code)
    }
}

impl From<Action> for u8 {
    fn from(action: Action) -> Self {
        action.code()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Fold => "FOLD",
            Action::Check => "CHECK",
            Action::Call => "CALL",
            Action::RaiseQuarterPot => "RAISE_QUARTER_POT",
            Action::RaiseHalfPot => "RAISE_HALF_POT",
            Action::RaiseThreeQuarterPot => "RAISE_THREE_QUARTER_POT",
            Action::RaisePot => "RAISE_POT",
            Action::RaiseMin => "RAISE_MIN",
            Action::AllIn => "ALL_IN",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(Action::Fold.code(), 0);
        assert_eq!(Action::Check.code(), 1);
        assert_eq!(Action::Call.code(), 2);
        assert_eq!(Action::RaiseQuarterPot.code(), 3);
        assert_eq!(Action::RaiseHalfPot.code(), 4);
        assert_eq!(Action::RaiseThreeQuarterPot.code(), 5);
        assert_eq!(Action::RaisePot.code(), 6);
        assert_eq!(Action::RaiseMin.code(), 7);
        assert_eq!(Action::AllIn.code(), 8);
    }

    #[test]
    fn from_code_matches_all_table() {
        for (i, a) in Action::ALL.iter().enumerate() {
            assert_eq!(Action::from_code(i as u8).ok(), Some(*a));
        }
    }

    #[test]
    fn unknown_code_fails_fast() {
        assert!(matches!(Action::try_from(9u8), Err(EngineError::InvalidAction(9))));
        assert!(matches!(Action::try_from(255u8), Err(EngineError::InvalidAction(255))));
    }

    #[test]
    fn only_raises_are_aggressive() {
        assert!(!Action::Fold.is_aggressive());
        assert!(!Action::Check.is_aggressive());
        assert!(!Action::Call.is_aggressive());
        assert!(Action::RaiseMin.is_aggressive());
        assert!(Action::AllIn.is_aggressive());
    }
}
