use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Количество фишек. Обёртка над u64, чтобы не путать с обычными числами.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Chips(pub u64);

impl Chips {
    pub const ZERO: Chips = Chips(0);

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Доля от суммы с округлением вниз: `floor(self * num / den)`.
    ///
    /// Считаем в u128, чтобы `0.75 * pot` не переполнялся на больших банках.
    pub fn fraction(self, num: u64, den: u64) -> Chips {
        if den == 0 {
            return Chips::ZERO;
        }
        Chips(((self.0 as u128 * num as u128) / den as u128) as u64)
    }
}

impl fmt::Display for Chips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Chips {
    type Output = Chips;

    fn add(self, rhs: Chips) -> Self::Output {
        Chips(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Chips {
    fn add_assign(&mut self, rhs: Chips) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sub for Chips {
    type Output = Chips;

    fn sub(self, rhs: Chips) -> Self::Output {
        Chips(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Chips {
    fn sub_assign(&mut self, rhs: Chips) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}

impl core::iter::Sum for Chips {
    fn sum<I: Iterator<Item = Chips>>(iter: I) -> Self {
        iter.fold(Chips::ZERO, |acc, c| acc + c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_rounds_down() {
        assert_eq!(Chips(10).fraction(1, 4), Chips(2));
        assert_eq!(Chips(10).fraction(1, 2), Chips(5));
        assert_eq!(Chips(10).fraction(3, 4), Chips(7));
        assert_eq!(Chips(3).fraction(1, 4), Chips::ZERO);
        assert_eq!(Chips(7).fraction(1, 1), Chips(7));
    }

    #[test]
    fn fraction_does_not_overflow() {
        let big = Chips(u64::MAX);
        assert_eq!(big.fraction(3, 4), Chips(u64::MAX / 4 * 3 + 2));
    }

    #[test]
    fn sub_saturates_at_zero() {
        assert_eq!(Chips(3) - Chips(5), Chips::ZERO);
        let mut c = Chips(1);
        c -= Chips(2);
        assert!(c.is_zero());
    }

    #[test]
    fn sum_of_chips() {
        let total: Chips = vec![Chips(1), Chips(2), Chips(3)].into_iter().sum();
        assert_eq!(total, Chips(6));
    }
}
