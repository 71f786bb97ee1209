//! Размеры рейзов. Одни и те же формулы используются и при применении
//! действия, и при построении списка допустимых действий.

use crate::domain::chips::Chips;
use crate::engine::actions::Action;
use crate::engine::betting::RoundState;

/// Порог рейза без учёта стека: доля банка или минимальный рейз.
/// Для не-рейзов – `None`.
pub fn raise_threshold(action: Action, pot: Chips, state: &RoundState) -> Option<Chips> {
    if let Some((num, den)) = action.pot_fraction() {
        return Some(pot.fraction(num, den));
    }
    match action {
        Action::RaiseMin => Some(state.min_raise_amount()),
        _ => None,
    }
}

/// Сколько фишек реально добавит действие seat'а со стеком `stack`.
///
/// Результат никогда не превышает `stack`.
pub fn commit_amount(action: Action, pot: Chips, state: &RoundState, stack: Chips) -> Chips {
    match action {
        Action::Fold | Action::Check => Chips::ZERO,
        Action::Call => state.diff_for(state.game_pointer).min(stack),
        Action::AllIn => stack,
        _ => raise_threshold(action, pot, state)
            .unwrap_or(Chips::ZERO)
            .min(stack),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(raised: &[u64], pointer: u8) -> RoundState {
        RoundState::new(
            raised.len(),
            pointer,
            raised.iter().copied().map(Chips).collect(),
            Chips(2),
        )
    }

    #[test]
    fn pot_fractions_floor() {
        let s = state(&[0, 0], 0);
        let pot = Chips(10);
        assert_eq!(raise_threshold(Action::RaiseQuarterPot, pot, &s), Some(Chips(2)));
        assert_eq!(raise_threshold(Action::RaiseHalfPot, pot, &s), Some(Chips(5)));
        assert_eq!(raise_threshold(Action::RaiseThreeQuarterPot, pot, &s), Some(Chips(7)));
        assert_eq!(raise_threshold(Action::RaisePot, pot, &s), Some(Chips(10)));
        assert_eq!(raise_threshold(Action::Call, pot, &s), None);
    }

    #[test]
    fn min_raise_uses_largest_gap() {
        // max - min = 10 - 0 > init 2
        let s = state(&[1, 10, 0], 2);
        assert_eq!(raise_threshold(Action::RaiseMin, Chips(0), &s), Some(Chips(10)));
        let s = state(&[1, 2], 0);
        assert_eq!(raise_threshold(Action::RaiseMin, Chips(0), &s), Some(Chips(2)));
    }

    #[test]
    fn commit_is_clamped_to_stack() {
        let s = state(&[1, 2, 0, 0], 2);
        assert_eq!(commit_amount(Action::Call, Chips(3), &s, Chips(100)), Chips(2));
        assert_eq!(commit_amount(Action::Call, Chips(3), &s, Chips(1)), Chips(1));
        assert_eq!(commit_amount(Action::RaisePot, Chips(300), &s, Chips(50)), Chips(50));
        assert_eq!(commit_amount(Action::AllIn, Chips(3), &s, Chips(42)), Chips(42));
        assert_eq!(commit_amount(Action::Fold, Chips(3), &s, Chips(42)), Chips::ZERO);
    }
}
