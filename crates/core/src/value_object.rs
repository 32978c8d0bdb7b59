//! Value objects: equality by value, not identity.

use serde::{Deserialize, Serialize};

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one. A `Money` amount is a value object; a cart line is not
/// (it is identified by its product id).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// Non-negative currency amount in whole rupees.
///
/// Arithmetic saturates at `u64::MAX` instead of overflowing so that derived
/// totals stay total functions of their inputs.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    pub const fn amount(self) -> u64 {
        self.0
    }

    /// Unit price times quantity.
    pub fn times(self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(u64::from(quantity)))
    }

    pub fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    /// `percent`% of this amount, rounded to the nearest unit (halves round up).
    pub fn percent(self, percent: u32) -> Money {
        let scaled = u128::from(self.0) * u128::from(percent) + 50;
        Money(u64::try_from(scaled / 100).unwrap_or(u64::MAX))
    }
}

impl From<u64> for Money {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl core::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Money::saturating_add)
    }
}

/// Renders as `₹1,197` (Western three-digit grouping).
impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        write!(f, "₹{grouped}")
    }
}
