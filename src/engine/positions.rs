use crate::domain::player::Seat;
use crate::domain::SeatIndex;

/// Найти следующее несфолдившее место по кругу (включая/исключая start).
///
/// Делает не больше одного круга: если все сфолдили – `None`.
pub fn next_unfolded_seat<S: Seat>(seats: &[S], start: SeatIndex, include_start: bool) -> Option<SeatIndex> {
    let max = seats.len();
    if max == 0 {
        return None;
    }

    let mut idx = start as usize % max;
    if !include_start {
        idx = (idx + 1) % max;
    }

    for _ in 0..max {
        if !seats[idx].is_folded() {
            return Some(idx as SeatIndex);
        }
        idx = (idx + 1) % max;
    }

    None
}

/// Сколько мест ещё не сфолдило.
pub fn count_unfolded<S: Seat>(seats: &[S]) -> usize {
    seats.iter().filter(|s| !s.is_folded()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chips::Chips;
    use crate::domain::player::{PlayerAtTable, PlayerStatus};

    fn seats(statuses: &[PlayerStatus]) -> Vec<PlayerAtTable> {
        statuses
            .iter()
            .enumerate()
            .map(|(i, st)| {
                let mut p = PlayerAtTable::new(i as u64 + 1, Chips(100));
                p.status = *st;
                p
            })
            .collect()
    }

    #[test]
    fn skips_folded_and_wraps() {
        use PlayerStatus::*;
        let s = seats(&[Active, Folded, Folded, AllIn]);
        assert_eq!(next_unfolded_seat(&s, 0, false), Some(3));
        assert_eq!(next_unfolded_seat(&s, 3, false), Some(0));
        assert_eq!(next_unfolded_seat(&s, 1, true), Some(3));
        assert_eq!(count_unfolded(&s), 2);
    }

    #[test]
    fn single_survivor_returns_itself() {
        use PlayerStatus::*;
        let s = seats(&[Folded, Active, Folded]);
        assert_eq!(next_unfolded_seat(&s, 1, false), Some(1));
    }

    #[test]
    fn everyone_folded_is_none() {
        use PlayerStatus::*;
        let s = seats(&[Folded, Folded]);
        assert_eq!(next_unfolded_seat(&s, 0, false), None);
    }
}
