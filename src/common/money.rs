use bigdecimal::{BigDecimal, ParseBigDecimalError, Zero};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// An exact monetary amount.
///
/// # Why Use Money? It is a Value Object.
/// Wrapping `BigDecimal` gives type safety (no accidental mixing with other
/// numerics) and exact arithmetic: repeated small credits and debits must
/// reproduce their sum to the last digit, which floating point cannot
/// guarantee. Nothing in this type rounds; amounts keep whatever precision
/// they were created with, and equality is numeric (`1.50 == 1.5000`).
///
/// # Examples
/// ```
/// use asset_ledger::common::money::Money;
/// use std::str::FromStr;
///
/// let amount = Money::from_str("10.25").unwrap();
/// assert_eq!(amount.to_string(), "10.25");
/// assert_eq!(amount + Money::from_str("0.75").unwrap(), Money::from_str("11").unwrap());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(BigDecimal);

impl Money {
    pub fn new(value: BigDecimal) -> Self {
        Money(value)
    }

    pub fn zero() -> Self {
        Money(BigDecimal::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn as_decimal(&self) -> &BigDecimal {
        &self.0
    }
}

impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        let bd: BigDecimal = t.parse()?;
        Ok(Money(bd))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Add<&Money> for &Money {
    type Output = Money;
    fn add(self, rhs: &Money) -> Money {
        Money(&self.0 + &rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Neg for Money {
    type Output = Money;
    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl Neg for &Money {
    type Output = Money;
    fn neg(self) -> Money {
        Money(-&self.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl AddAssign<&Money> for Money {
    fn add_assign(&mut self, rhs: &Money) {
        self.0 += &rhs.0;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn money(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    #[test]
    fn test_zero() {
        assert_eq!(Money::zero(), money("0"));
        assert!(Money::zero().is_zero());
    }

    #[test]
    fn test_from_str_valid() {
        assert_eq!(money("1"), money("1.00"));
        assert_eq!(money("1.5"), money("1.50"));
        assert_eq!(money("-500.00").to_string(), "-500.00");
        assert_eq!(money("  2.0000 "), money("2"));
    }

    #[test]
    fn test_from_str_keeps_precision() {
        // No fixed scale: digits beyond typical cent precision survive.
        assert_eq!(money("0.0000001").to_string(), "0.0000001");
        assert_ne!(money("0.0000001"), Money::zero());
    }

    #[test]
    fn test_from_str_invalid() {
        assert!(Money::from_str("").is_err());
        assert!(Money::from_str("   ").is_err());
        assert!(Money::from_str("abc").is_err());
    }

    #[test]
    fn test_add_sub() {
        assert_eq!(money("1.25") + money("0.75"), money("2"));
        assert_eq!(money("1.00") - money("1.00"), Money::zero());
        assert_eq!(&money("10") + &money("-2.5"), money("7.5"));
    }

    #[test]
    fn test_neg_round_trip() {
        let m = money("123.45");
        assert_eq!(m.clone() + (-m.clone()), Money::zero());
        assert_eq!(-(-m.clone()), m);
    }

    #[test]
    fn test_assign_ops() {
        let mut m = money("1.00");
        m += money("0.50");
        assert_eq!(m, money("1.50"));
        m -= money("1.50");
        assert_eq!(m, Money::zero());
    }

    #[test]
    fn test_no_drift_over_many_small_amounts() {
        let mut m = Money::zero();
        for _ in 0..1000 {
            m += &money("0.1");
        }
        assert_eq!(m, money("100"));
    }

    #[test]
    fn test_ordering() {
        assert!(money("10") < money("15"));
        assert!(money("-1") < Money::zero());
        assert!(money("1.5") >= money("1.50"));
    }
}
