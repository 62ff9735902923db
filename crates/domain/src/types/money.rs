//! Currency amounts held as integer cents

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::CENTS_PER_UNIT;

const HALF_CENT_TOLERANCE: f64 = 1e-9;

/// Monetary amount with two decimal places.
///
/// Amounts are stored as whole cents so that totals add up exactly. On the
/// wire the value is a plain decimal number (`94.5`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money {
    cents: i64,
}

impl Money {
    pub const ZERO: Self = Self { cents: 0 };

    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Round a decimal amount half-up (away from zero) to cents.
    ///
    /// A fractional cent counts as a half when it is within a few ULPs of
    /// `0.5`, so binary noise such as `1.005 -> 1.00499999...` still rounds
    /// up while `0.0049995` stays at zero. Amounts beyond the `i64` cent
    /// range saturate; the ledger rejects entries long before that.
    pub fn from_amount(amount: f64) -> Self {
        let scaled = (amount * CENTS_PER_UNIT as f64).abs();
        let whole = scaled.floor();
        let tolerance = HALF_CENT_TOLERANCE.max(scaled * f64::EPSILON * 8.0);
        let magnitude = if scaled - whole >= 0.5 - tolerance { whole + 1.0 } else { whole };
        let cents = magnitude.copysign(amount);
        Self { cents: cents as i64 }
    }

    /// `quantity x unit_price`, rounded with [`Money::from_amount`].
    pub fn from_product(quantity: f64, unit_price: f64) -> Self {
        Self::from_amount(quantity * unit_price)
    }

    pub const fn cents(&self) -> i64 {
        self.cents
    }

    pub fn as_f64(&self) -> f64 {
        self.cents as f64 / CENTS_PER_UNIT as f64
    }

    pub const fn is_zero(&self) -> bool {
        self.cents == 0
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self { cents: self.cents.saturating_add(rhs.cents) }
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        let per_unit = CENTS_PER_UNIT.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / per_unit, abs % per_unit)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Self::from_amount)
    }
}
