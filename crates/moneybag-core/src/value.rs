//! # Value Module
//!
//! Provides the `Value` type: the worth of a [`Moneybag`] as one count of
//! deniers.
//!
//! ## Reduction
//! ```text
//! Moneybag (livre, solidus, denier)
//!      │
//!      ▼
//! livre × 240  ──┐   each step checked
//! solidus × 12 ──┼──► sum ──► Value(deniers)
//! denier       ──┘
//! ```
//!
//! The reduction is one-way: `(1, 0, 0)` and `(0, 20, 0)` both reduce to
//! 240 deniers and there is no way back to the original coins.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use ts_rs::TS;

use crate::checked::{overflow_add, overflow_mul};
use crate::error::{MoneyError, MoneyResult};
use crate::moneybag::Moneybag;
use crate::types::{CoinNumber, Denomination};

// =============================================================================
// Value Type
// =============================================================================

/// Total worth of an amount, in deniers.
///
/// Totally ordered by the denier count. Can be compared directly against a
/// raw `u64` denier count.
///
/// ## Example
/// ```rust
/// use moneybag_core::{Moneybag, Value};
///
/// let livre = Value::from_moneybag(&Moneybag::new(1, 0, 0)).unwrap();
/// let soliduses = Value::from_moneybag(&Moneybag::new(0, 20, 0)).unwrap();
///
/// assert_eq!(livre, soliduses);
/// assert_eq!(livre, 240u64);
/// assert!(livre > 239u64);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Value(CoinNumber);

impl Value {
    /// Wraps a raw denier count as-is.
    #[inline]
    pub const fn new(deniers: CoinNumber) -> Self {
        Value(deniers)
    }

    /// A worth of zero deniers.
    #[inline]
    pub const fn zero() -> Self {
        Value(0)
    }

    /// Reduces a bag to deniers: `livre * 240 + solidus * 12 + denier`.
    ///
    /// ## Errors
    /// - [`MoneyError::MultiplicationOverflow`] if converting the livres or
    ///   soliduses to deniers overflows
    /// - [`MoneyError::AdditionOverflow`] if summing the parts overflows
    pub fn from_moneybag(bag: &Moneybag) -> MoneyResult<Self> {
        let livres = overflow_mul(bag.livre_number(), Denomination::Livre.deniers())?;
        let soliduses = overflow_mul(bag.solidus_number(), Denomination::Solidus.deniers())?;
        let total = overflow_add(livres, soliduses)?;
        let total = overflow_add(total, bag.denier_number())?;

        Ok(Value(total))
    }

    /// Returns the worth in deniers.
    #[inline]
    pub const fn deniers(&self) -> CoinNumber {
        self.0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<CoinNumber> for Value {
    fn from(deniers: CoinNumber) -> Self {
        Value::new(deniers)
    }
}

impl From<Value> for String {
    fn from(value: Value) -> Self {
        value.to_string()
    }
}

impl TryFrom<&Moneybag> for Value {
    type Error = MoneyError;

    fn try_from(bag: &Moneybag) -> MoneyResult<Self> {
        Value::from_moneybag(bag)
    }
}

impl TryFrom<Moneybag> for Value {
    type Error = MoneyError;

    fn try_from(bag: Moneybag) -> MoneyResult<Self> {
        Value::from_moneybag(&bag)
    }
}

impl PartialEq<CoinNumber> for Value {
    fn eq(&self, other: &CoinNumber) -> bool {
        self.0 == *other
    }
}

impl PartialOrd<CoinNumber> for Value {
    fn partial_cmp(&self, other: &CoinNumber) -> Option<Ordering> {
        Some(self.0.cmp(other))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moneybag::{DENIER, LIVRE, SOLIDUS};

    #[test]
    fn test_unit_values() {
        assert_eq!(Value::try_from(LIVRE).unwrap(), 240u64);
        assert_eq!(Value::try_from(SOLIDUS).unwrap(), 12u64);
        assert_eq!(Value::try_from(DENIER).unwrap(), 1u64);
    }

    #[test]
    fn test_reduction() {
        let value = Value::from_moneybag(&Moneybag::new(2, 3, 4)).unwrap();
        assert_eq!(value.deniers(), 2 * 240 + 3 * 12 + 4);
    }

    #[test]
    fn test_distinct_bags_equal_value() {
        let a = Moneybag::new(1, 0, 0);
        let b = Moneybag::new(0, 20, 0);
        let c = Moneybag::new(0, 0, 240);

        assert_eq!(a.value().unwrap(), b.value().unwrap());
        assert_eq!(b.value().unwrap(), c.value().unwrap());
        assert_ne!(a, b);
        assert!(a.partial_cmp(&b).is_none());
    }

    #[test]
    fn test_raw_construction() {
        assert_eq!(Value::new(17).deniers(), 17);
        assert_eq!(Value::from(17u64), Value::new(17));
        assert_eq!(Value::default(), Value::zero());
        assert_eq!(Value::zero(), 0u64);
    }

    #[test]
    fn test_total_order() {
        let small = Value::new(11);
        let large = Value::try_from(SOLIDUS).unwrap();
        assert!(small < large);
        assert_eq!(small.cmp(&large), Ordering::Less);
        assert_eq!(large.max(small), large);

        assert!(large > 11u64);
        assert!(large >= 12u64);
        assert!(large <= 12u64);
        assert!(large < 13u64);
    }

    #[test]
    fn test_multiplication_overflow() {
        let err = Value::from_moneybag(&Moneybag::new(u64::MAX, 0, 0)).unwrap_err();
        assert_eq!(
            err,
            MoneyError::MultiplicationOverflow {
                lhs: u64::MAX,
                rhs: 240
            }
        );

        let err = Value::from_moneybag(&Moneybag::new(0, u64::MAX / 12 + 1, 0)).unwrap_err();
        assert!(matches!(err, MoneyError::MultiplicationOverflow { rhs: 12, .. }));
    }

    #[test]
    fn test_addition_overflow() {
        // Each part fits on its own, the sum does not
        let err = Value::from_moneybag(&Moneybag::new(0, 1, u64::MAX)).unwrap_err();
        assert_eq!(
            err,
            MoneyError::AdditionOverflow {
                lhs: 12,
                rhs: u64::MAX
            }
        );

        let max = Value::from_moneybag(&Moneybag::new(0, 0, u64::MAX)).unwrap();
        assert_eq!(max, u64::MAX);
    }

    #[test]
    fn test_rejected_reduction_is_logged() {
        use crate::checked::tests::count_events;

        let too_many_livres = Moneybag::new(u64::MAX, 0, 0);
        assert_eq!(count_events(|| Value::from_moneybag(&too_many_livres)), 1);

        let too_many_deniers = Moneybag::new(0, 1, u64::MAX);
        assert_eq!(count_events(|| Value::from_moneybag(&too_many_deniers)), 1);
    }

    #[test]
    fn test_display() {
        let value = Value::try_from(Moneybag::new(3, 1, 0)).unwrap();
        assert_eq!(value.to_string(), "732");
        assert_eq!(String::from(value), "732");
    }

    #[test]
    fn test_serialization_shape() {
        assert_eq!(serde_json::to_string(&Value::new(240)).unwrap(), "240");
        let back: Value = serde_json::from_str("12").unwrap();
        assert_eq!(back, 12u64);
    }
}
