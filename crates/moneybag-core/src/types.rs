//! # Domain Types
//!
//! Small shared types used by [`Moneybag`](crate::Moneybag) and
//! [`Value`](crate::Value).
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   CoinNumber    │   │  Denomination   │   │   BagOrdering   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  u64            │   │  Livre   = 240d │   │  Equivalent     │       │
//! │  │  coin count or  │   │  Solidus =  12d │   │  Less           │       │
//! │  │  denier total   │   │  Denier  =   1d │   │  Greater        │       │
//! │  └─────────────────┘   └─────────────────┘   │  Unordered      │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use ts_rs::TS;

use crate::moneybag::{Moneybag, DENIER, LIVRE, SOLIDUS};
use crate::{DENIERS_PER_LIVRE, DENIERS_PER_SOLIDUS};

// =============================================================================
// Coin Number
// =============================================================================

/// Unsigned magnitude used for coin counts and denier totals.
///
/// Unsigned so a bag can never hold a negative count; subtraction that would
/// go below zero is rejected instead.
pub type CoinNumber = u64;

// =============================================================================
// Denomination
// =============================================================================

/// One of the three coin kinds held in a [`Moneybag`].
///
/// Ordered from the largest coin to the smallest, which is also the order
/// a bag renders its counts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Denomination {
    /// 1 livre = 20 soliduses = 240 deniers.
    Livre,
    /// 1 solidus = 12 deniers.
    Solidus,
    /// The smallest coin.
    Denier,
}

impl Denomination {
    /// All denominations, largest first.
    pub const ALL: [Denomination; 3] = [
        Denomination::Livre,
        Denomination::Solidus,
        Denomination::Denier,
    ];

    /// How many deniers one coin of this denomination is worth.
    ///
    /// ## Example
    /// ```rust
    /// use moneybag_core::Denomination;
    ///
    /// assert_eq!(Denomination::Livre.deniers(), 240);
    /// assert_eq!(Denomination::Solidus.deniers(), 12);
    /// ```
    #[inline]
    pub const fn deniers(&self) -> CoinNumber {
        match self {
            Denomination::Livre => DENIERS_PER_LIVRE,
            Denomination::Solidus => DENIERS_PER_SOLIDUS,
            Denomination::Denier => 1,
        }
    }

    /// Label used when rendering a count of exactly one coin.
    #[inline]
    pub const fn singular(&self) -> &'static str {
        match self {
            Denomination::Livre => "livre",
            Denomination::Solidus => "solidus",
            Denomination::Denier => "denier",
        }
    }

    /// Label used for every count other than one (including zero).
    #[inline]
    pub const fn plural(&self) -> &'static str {
        match self {
            Denomination::Livre => "livres",
            Denomination::Solidus => "soliduses",
            Denomination::Denier => "deniers",
        }
    }

    /// Picks the singular or plural label for `count`.
    #[inline]
    pub const fn label(&self, count: CoinNumber) -> &'static str {
        if count == 1 {
            self.singular()
        } else {
            self.plural()
        }
    }

    /// The canonical single-coin bag of this denomination.
    #[inline]
    pub const fn unit(&self) -> Moneybag {
        match self {
            Denomination::Livre => LIVRE,
            Denomination::Solidus => SOLIDUS,
            Denomination::Denier => DENIER,
        }
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.singular())
    }
}

// =============================================================================
// Bag Ordering
// =============================================================================

/// Result of comparing two bags coin by coin.
///
/// Bags are only partially ordered: one bag may hold more livres but fewer
/// deniers than another, in which case neither dominates.
///
/// ## Decision Table
/// ```text
/// all counts equal                 → Equivalent
/// every count of a <= that of b    → Less
/// every count of a >= that of b    → Greater
/// otherwise                        → Unordered
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum BagOrdering {
    Equivalent,
    Less,
    Greater,
    Unordered,
}

impl BagOrdering {
    /// Whether the two bags are comparable at all.
    #[inline]
    pub const fn is_comparable(&self) -> bool {
        !matches!(self, BagOrdering::Unordered)
    }

    /// Swaps `Less` and `Greater`, i.e. the result of comparing `b` to `a`.
    #[inline]
    pub const fn reverse(self) -> Self {
        match self {
            BagOrdering::Less => BagOrdering::Greater,
            BagOrdering::Greater => BagOrdering::Less,
            other => other,
        }
    }

    /// Maps onto the standard library's partial ordering.
    #[inline]
    pub const fn to_ordering(self) -> Option<Ordering> {
        match self {
            BagOrdering::Equivalent => Some(Ordering::Equal),
            BagOrdering::Less => Some(Ordering::Less),
            BagOrdering::Greater => Some(Ordering::Greater),
            BagOrdering::Unordered => None,
        }
    }
}

impl From<BagOrdering> for Option<Ordering> {
    fn from(ordering: BagOrdering) -> Self {
        ordering.to_ordering()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denomination_worth() {
        assert_eq!(Denomination::Livre.deniers(), 240);
        assert_eq!(Denomination::Solidus.deniers(), 12);
        assert_eq!(Denomination::Denier.deniers(), 1);
        assert_eq!(
            Denomination::Livre.deniers() / Denomination::Solidus.deniers(),
            crate::SOLIDI_PER_LIVRE
        );
        assert_eq!(crate::SOLIDI_PER_LIVRE, 20);
    }

    #[test]
    fn test_denomination_labels() {
        assert_eq!(Denomination::Livre.label(1), "livre");
        assert_eq!(Denomination::Livre.label(0), "livres");
        assert_eq!(Denomination::Solidus.label(1), "solidus");
        assert_eq!(Denomination::Solidus.label(2), "soliduses");
        assert_eq!(Denomination::Denier.label(12), "deniers");
        assert_eq!(Denomination::Denier.to_string(), "denier");
    }

    #[test]
    fn test_denomination_units() {
        for denomination in Denomination::ALL {
            let unit = denomination.unit();
            assert_eq!(unit.count(denomination), 1);
            assert_eq!(unit.value().unwrap().deniers(), denomination.deniers());
        }
    }

    #[test]
    fn test_bag_ordering_reverse() {
        assert_eq!(BagOrdering::Less.reverse(), BagOrdering::Greater);
        assert_eq!(BagOrdering::Greater.reverse(), BagOrdering::Less);
        assert_eq!(BagOrdering::Equivalent.reverse(), BagOrdering::Equivalent);
        assert_eq!(BagOrdering::Unordered.reverse(), BagOrdering::Unordered);
    }

    #[test]
    fn test_bag_ordering_to_std() {
        assert_eq!(BagOrdering::Equivalent.to_ordering(), Some(Ordering::Equal));
        assert_eq!(BagOrdering::Unordered.to_ordering(), None);
        assert!(!BagOrdering::Unordered.is_comparable());
        assert!(BagOrdering::Less.is_comparable());

        let converted: Option<Ordering> = BagOrdering::Greater.into();
        assert_eq!(converted, Some(Ordering::Greater));
    }

    #[test]
    fn test_serialized_names() {
        assert_eq!(
            serde_json::to_string(&Denomination::Solidus).unwrap(),
            "\"solidus\""
        );
        assert_eq!(
            serde_json::to_string(&BagOrdering::Unordered).unwrap(),
            "\"unordered\""
        );
    }
}
