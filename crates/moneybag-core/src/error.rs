//! # Error Types
//!
//! Domain-specific error types for moneybag-core.
//!
//! ## Error Kinds
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         MoneyError                                      │
//! │                                                                         │
//! │  AdditionOverflow        - a component (or reduction) sum > u64::MAX    │
//! │  MultiplicationOverflow  - a component (or reduction) product > MAX     │
//! │  IllegalSubtraction      - rhs holds more coins than lhs                │
//! │                                                                         │
//! │  Flow: checked primitive ──► Moneybag / Value op ──► caller decides    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending operands in the error
//! 3. Errors are enum variants, never String
//! 4. Nothing clamps, saturates or wraps: every failure surfaces here

use thiserror::Error;

use crate::types::{CoinNumber, Denomination};

// =============================================================================
// Money Error
// =============================================================================

/// Arithmetic failures of [`Moneybag`](crate::Moneybag) and
/// [`Value`](crate::Value) operations.
///
/// Every failing operation leaves its receiver untouched, so callers can
/// retry with smaller operands or reject the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// A sum does not fit in a [`CoinNumber`].
    ///
    /// ## When This Occurs
    /// - Adding two bags whose counts of one denomination sum past `u64::MAX`
    /// - Reducing a bag to a [`Value`](crate::Value) whose total deniers
    ///   exceed `u64::MAX`
    #[error("Addition integer overflow: {lhs} + {rhs}")]
    AdditionOverflow { lhs: CoinNumber, rhs: CoinNumber },

    /// A product does not fit in a [`CoinNumber`].
    ///
    /// ## When This Occurs
    /// - Scaling a bag by a multiplier too large for one of its counts
    /// - Converting a huge livre or solidus count to deniers
    #[error("Multiplication integer overflow: {lhs} * {rhs}")]
    MultiplicationOverflow { lhs: CoinNumber, rhs: CoinNumber },

    /// The subtrahend holds more coins of a denomination than the minuend.
    ///
    /// ## User Workflow
    /// ```text
    /// (0 livres, 0 soliduses, 5 deniers) - (1 livre, 0 soliduses, 0 deniers)
    ///      │
    ///      ▼
    /// Check livre: available=0, requested=1
    ///      │
    ///      ▼
    /// IllegalSubtraction { denomination: Livre, available: 0, requested: 1 }
    /// ```
    #[error("Illegal subtraction: {requested} {denomination} requested, only {available} available")]
    IllegalSubtraction {
        denomination: Denomination,
        available: CoinNumber,
        requested: CoinNumber,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with MoneyError.
pub type MoneyResult<T> = Result<T, MoneyError>;

// =============================================================================
// Unit Tests
// =============================================================================
