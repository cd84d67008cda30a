//! # Moneybag Module
//!
//! Provides the `Moneybag` type: an amount held as separate counts of
//! livres, soliduses and deniers.
//!
//! ## Why Keep Denominations Apart?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  A BAG IS NOT A NUMBER                                                  │
//! │                                                                         │
//! │  (1 livre, 0 soliduses, 0 deniers)   worth 240 deniers                  │
//! │  (0 livres, 20 soliduses, 0 deniers) worth 240 deniers                  │
//! │                                                                         │
//! │  Same worth, different coins. A Moneybag keeps the coins; a Value      │
//! │  keeps only the worth. Because coins are kept apart, two bags may be   │
//! │  incomparable: more livres in one, more deniers in the other.          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use moneybag_core::{Moneybag, LIVRE, SOLIDUS};
//!
//! # fn main() -> Result<(), moneybag_core::MoneyError> {
//! // Compose an amount from the unit bags
//! let purse = ((5 * LIVRE)? + (3 * SOLIDUS)?)?;
//! assert_eq!(purse, Moneybag::new(5, 3, 0));
//!
//! // Every operation is checked
//! let too_much = Moneybag::new(u64::MAX, 0, 0) + LIVRE;
//! assert!(too_much.is_err());
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Sub};
use ts_rs::TS;

use crate::checked::{illegal_subtraction, overflow_add, overflow_mul, overflow_sub};
use crate::error::{MoneyError, MoneyResult};
use crate::types::{BagOrdering, CoinNumber, Denomination};
use crate::value::Value;

// =============================================================================
// Unit Bags
// =============================================================================

/// One livre.
pub const LIVRE: Moneybag = Moneybag::new(1, 0, 0);

/// One solidus.
pub const SOLIDUS: Moneybag = Moneybag::new(0, 1, 0);

/// One denier.
pub const DENIER: Moneybag = Moneybag::new(0, 0, 1);

// =============================================================================
// Moneybag Type
// =============================================================================

/// An amount of money as independent counts of each denomination.
///
/// ## Design Decisions
/// - **u64 counts**: a bag can never hold a negative number of coins
/// - **No `Default`**: callers must state all three counts explicitly
/// - **Copy**: bags are plain values, never shared
/// - **Checked operators**: `+`, `-` and `*` yield `MoneyResult<Moneybag>`
///
/// ## Equality vs Ordering
/// `==` compares all three counts. `<`, `<=`, `>` and `>=` use the coin-wise
/// partial order from [`Moneybag::compare`], so for some pairs all four
/// return `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Moneybag {
    livre: CoinNumber,
    solidus: CoinNumber,
    denier: CoinNumber,
}

impl Moneybag {
    /// Creates a bag holding the given number of each coin.
    ///
    /// ## Example
    /// ```rust
    /// use moneybag_core::Moneybag;
    ///
    /// let bag = Moneybag::new(3, 1, 0);
    /// assert_eq!(bag.livre_number(), 3);
    /// assert_eq!(bag.solidus_number(), 1);
    /// assert_eq!(bag.denier_number(), 0);
    /// ```
    #[inline]
    pub const fn new(livre: CoinNumber, solidus: CoinNumber, denier: CoinNumber) -> Self {
        Moneybag {
            livre,
            solidus,
            denier,
        }
    }

    /// Number of livres in the bag.
    #[inline]
    pub const fn livre_number(&self) -> CoinNumber {
        self.livre
    }

    /// Number of soliduses in the bag.
    #[inline]
    pub const fn solidus_number(&self) -> CoinNumber {
        self.solidus
    }

    /// Number of deniers in the bag.
    #[inline]
    pub const fn denier_number(&self) -> CoinNumber {
        self.denier
    }

    /// Number of coins of one denomination.
    #[inline]
    pub const fn count(&self, denomination: Denomination) -> CoinNumber {
        match denomination {
            Denomination::Livre => self.livre,
            Denomination::Solidus => self.solidus,
            Denomination::Denier => self.denier,
        }
    }

    /// Checks if the bag holds at least one coin.
    ///
    /// ## Example
    /// ```rust
    /// use moneybag_core::Moneybag;
    ///
    /// assert!(Moneybag::new(0, 0, 1).is_nonzero());
    /// assert!(!Moneybag::new(0, 0, 0).is_nonzero());
    /// ```
    #[inline]
    pub const fn is_nonzero(&self) -> bool {
        self.livre != 0 || self.solidus != 0 || self.denier != 0
    }

    /// Checks if the bag holds no coins at all.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        !self.is_nonzero()
    }

    /// Adds two bags coin by coin.
    ///
    /// ## Example
    /// ```rust
    /// use moneybag_core::Moneybag;
    ///
    /// let sum = Moneybag::new(1, 2, 3).checked_add(&Moneybag::new(4, 5, 6)).unwrap();
    /// assert_eq!(sum, Moneybag::new(5, 7, 9));
    /// ```
    ///
    /// ## Errors
    /// [`MoneyError::AdditionOverflow`] if any count would exceed `u64::MAX`.
    pub fn checked_add(&self, other: &Moneybag) -> MoneyResult<Moneybag> {
        Ok(Moneybag::new(
            overflow_add(self.livre, other.livre)?,
            overflow_add(self.solidus, other.solidus)?,
            overflow_add(self.denier, other.denier)?,
        ))
    }

    /// Subtracts `other` coin by coin.
    ///
    /// Every count of `other` must be covered by `self`; the whole check runs
    /// before any count is subtracted.
    ///
    /// ## Example
    /// ```rust
    /// use moneybag_core::{Moneybag, MoneyError};
    ///
    /// let change = Moneybag::new(5, 7, 9).checked_sub(&Moneybag::new(1, 2, 3)).unwrap();
    /// assert_eq!(change, Moneybag::new(4, 5, 6));
    ///
    /// let err = Moneybag::new(0, 0, 5).checked_sub(&Moneybag::new(1, 0, 0)).unwrap_err();
    /// assert!(matches!(err, MoneyError::IllegalSubtraction { .. }));
    /// ```
    ///
    /// ## Errors
    /// [`MoneyError::IllegalSubtraction`] naming the first denomination
    /// (largest first) that `self` cannot cover.
    pub fn checked_sub(&self, other: &Moneybag) -> MoneyResult<Moneybag> {
        if let Some(denomination) = Denomination::ALL
            .into_iter()
            .find(|d| self.count(*d) < other.count(*d))
        {
            return Err(illegal_subtraction(
                denomination,
                self.count(denomination),
                other.count(denomination),
            ));
        }

        Ok(Moneybag::new(
            overflow_sub(Denomination::Livre, self.livre, other.livre)?,
            overflow_sub(Denomination::Solidus, self.solidus, other.solidus)?,
            overflow_sub(Denomination::Denier, self.denier, other.denier)?,
        ))
    }

    /// Multiplies every count by `multiplier`.
    ///
    /// ## Example
    /// ```rust
    /// use moneybag_core::{Moneybag, LIVRE};
    ///
    /// assert_eq!(LIVRE.checked_mul(5).unwrap(), Moneybag::new(5, 0, 0));
    /// ```
    ///
    /// ## Errors
    /// [`MoneyError::MultiplicationOverflow`] if any product would exceed
    /// `u64::MAX`.
    pub fn checked_mul(&self, multiplier: CoinNumber) -> MoneyResult<Moneybag> {
        Ok(Moneybag::new(
            overflow_mul(self.livre, multiplier)?,
            overflow_mul(self.solidus, multiplier)?,
            overflow_mul(self.denier, multiplier)?,
        ))
    }

    /// In-place addition. On error `self` is left unchanged.
    ///
    /// ## Example
    /// ```rust
    /// use moneybag_core::{Moneybag, DENIER, SOLIDUS};
    ///
    /// let mut purse = Moneybag::new(0, 0, 0);
    /// purse.try_add_assign(&SOLIDUS)?.try_add_assign(&DENIER)?;
    /// assert_eq!(purse, Moneybag::new(0, 1, 1));
    /// # Ok::<(), moneybag_core::MoneyError>(())
    /// ```
    pub fn try_add_assign(&mut self, other: &Moneybag) -> MoneyResult<&mut Self> {
        *self = self.checked_add(other)?;
        Ok(self)
    }

    /// In-place subtraction. On error `self` is left unchanged.
    pub fn try_sub_assign(&mut self, other: &Moneybag) -> MoneyResult<&mut Self> {
        *self = self.checked_sub(other)?;
        Ok(self)
    }

    /// In-place scaling. On error `self` is left unchanged.
    pub fn try_mul_assign(&mut self, multiplier: CoinNumber) -> MoneyResult<&mut Self> {
        *self = self.checked_mul(multiplier)?;
        Ok(self)
    }

    /// Compares two bags coin by coin.
    ///
    /// `Less` and `Greater` are non-strict per coin: `(1, 0, 0)` is `Less`
    /// than `(1, 0, 5)` because no count of the first exceeds the second.
    ///
    /// ## Example
    /// ```rust
    /// use moneybag_core::{BagOrdering, Moneybag};
    ///
    /// let a = Moneybag::new(2, 0, 0);
    /// let b = Moneybag::new(1, 0, 30);
    /// assert_eq!(a.compare(&b), BagOrdering::Unordered);
    /// assert_eq!(a.compare(&Moneybag::new(2, 1, 0)), BagOrdering::Less);
    /// ```
    pub const fn compare(&self, other: &Moneybag) -> BagOrdering {
        if self.livre == other.livre && self.solidus == other.solidus && self.denier == other.denier
        {
            BagOrdering::Equivalent
        } else if self.livre <= other.livre
            && self.solidus <= other.solidus
            && self.denier <= other.denier
        {
            BagOrdering::Less
        } else if self.livre >= other.livre
            && self.solidus >= other.solidus
            && self.denier >= other.denier
        {
            BagOrdering::Greater
        } else {
            BagOrdering::Unordered
        }
    }

    /// Reduces the bag to its worth in deniers.
    ///
    /// Same as [`Value::from_moneybag`].
    pub fn value(&self) -> MoneyResult<Value> {
        Value::from_moneybag(self)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders every count with its label, largest coin first.
///
/// ## Example
/// ```text
/// (3 livres, 1 solidus, 0 deniers)
/// ```
impl fmt::Display for Moneybag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, denomination) in Denomination::ALL.into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            let count = self.count(denomination);
            write!(f, "{} {}", count, denomination.label(count))?;
        }
        f.write_str(")")
    }
}

/// Partial order built on [`Moneybag::compare`]; `Unordered` maps to `None`.
impl PartialOrd for Moneybag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).into()
    }
}

/// A bag is truthy when it holds any coin.
impl From<Moneybag> for bool {
    fn from(bag: Moneybag) -> Self {
        bag.is_nonzero()
    }
}

/// Checked addition (`a + b`).
impl Add for Moneybag {
    type Output = MoneyResult<Moneybag>;

    #[inline]
    fn add(self, other: Self) -> Self::Output {
        self.checked_add(&other)
    }
}

/// Checked subtraction (`a - b`).
impl Sub for Moneybag {
    type Output = MoneyResult<Moneybag>;

    #[inline]
    fn sub(self, other: Self) -> Self::Output {
        self.checked_sub(&other)
    }
}

/// Checked scaling (`bag * n`).
impl Mul<CoinNumber> for Moneybag {
    type Output = MoneyResult<Moneybag>;

    #[inline]
    fn mul(self, multiplier: CoinNumber) -> Self::Output {
        self.checked_mul(multiplier)
    }
}

/// Checked scaling (`n * bag`), same result as `bag * n`.
impl Mul<Moneybag> for CoinNumber {
    type Output = MoneyResult<Moneybag>;

    #[inline]
    fn mul(self, bag: Moneybag) -> Self::Output {
        bag.checked_mul(self)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
