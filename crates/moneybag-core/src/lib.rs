//! # moneybag-core: Livre / Solidus / Denier Arithmetic
//!
//! This crate models the livre-solidus-denier currency as two pure value
//! types with zero I/O dependencies.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     ★ moneybag-core (THIS CRATE) ★                      │
//! │                                                                         │
//! │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐          │
//! │   │   types   │  │ moneybag  │  │   value   │  │   error   │          │
//! │   │  Denom.   │  │ Moneybag  │  │   Value   │  │MoneyError │          │
//! │   │BagOrdering│  │ LIVRE ... │  │ (deniers) │  │           │          │
//! │   └───────────┘  └─────┬─────┘  └─────▲─────┘  └───────────┘          │
//! │                        │   reduce     │                                 │
//! │                        └──────────────┘                                 │
//! │                                                                         │
//! │   checked: overflow-checked primitives shared by Moneybag and Value    │
//! │                                                                         │
//! │   NO I/O • NO PARSING • NO PANICS ON OVERFLOW • PURE FUNCTIONS         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`moneybag`] - `Moneybag` with checked arithmetic and a partial order
//! - [`value`] - `Value`, a bag's worth in deniers, totally ordered
//! - [`types`] - Shared types (`CoinNumber`, `Denomination`, `BagOrdering`)
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is deterministic, no I/O
//! 2. **Unsigned Coins**: Counts are `u64`; going below zero is an error
//! 3. **Checked Everything**: Overflow is reported, never wrapped or clamped
//! 4. **Atomic Updates**: A failed in-place operation leaves the bag untouched
//!
//! ## Example Usage
//!
//! ```rust
//! use moneybag_core::{BagOrdering, Value, DENIER, LIVRE, SOLIDUS};
//!
//! # fn main() -> Result<(), moneybag_core::MoneyError> {
//! let purse = ((2 * LIVRE)? + (3 * SOLIDUS)?)?;
//! let price = (7 * DENIER)?;
//!
//! // Coins of different kinds do not dominate each other
//! assert_eq!(purse.compare(&price), BagOrdering::Unordered);
//!
//! // Their worth does
//! assert!(Value::try_from(purse)? > Value::try_from(price)?);
//! assert_eq!(purse.to_string(), "(2 livres, 3 soliduses, 0 deniers)");
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

mod checked;
pub mod error;
pub mod moneybag;
pub mod types;
pub mod value;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use moneybag_core::Moneybag` instead of
// `use moneybag_core::moneybag::Moneybag`

pub use error::{MoneyError, MoneyResult};
pub use moneybag::{Moneybag, DENIER, LIVRE, SOLIDUS};
pub use types::*;
pub use value::Value;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Deniers in one livre.
pub const DENIERS_PER_LIVRE: types::CoinNumber = 240;

/// Deniers in one solidus.
pub const DENIERS_PER_SOLIDUS: types::CoinNumber = 12;

/// Soliduses in one livre.
pub const SOLIDI_PER_LIVRE: types::CoinNumber = DENIERS_PER_LIVRE / DENIERS_PER_SOLIDUS;
