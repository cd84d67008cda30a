//! # Checked Arithmetic
//!
//! Overflow-checked primitives shared by [`Moneybag`](crate::Moneybag) and
//! [`Value`](crate::Value).
//!
//! ## Check Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Fail Before Commit                                 │
//! │                                                                         │
//! │  Step 1: compute every component with a primitive below               │
//! │  ├── Ok  → keep the candidate value                                    │
//! │  └── Err → return immediately, receiver untouched                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Step 2: assign all components at once                                 │
//! │                                                                         │
//! │  No wrapping, no saturation: overflow is always an error               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::error::{MoneyError, MoneyResult};
use crate::types::{CoinNumber, Denomination};

/// Adds two magnitudes, failing with [`MoneyError::AdditionOverflow`].
#[inline]
pub(crate) fn overflow_add(lhs: CoinNumber, rhs: CoinNumber) -> MoneyResult<CoinNumber> {
    lhs.checked_add(rhs).ok_or_else(|| {
        debug!(lhs = %lhs, rhs = %rhs, "Rejected overflowing addition");
        MoneyError::AdditionOverflow { lhs, rhs }
    })
}

/// Builds (and logs) the error for taking `requested` coins of
/// `denomination` out of a bag holding only `available`.
pub(crate) fn illegal_subtraction(
    denomination: Denomination,
    available: CoinNumber,
    requested: CoinNumber,
) -> MoneyError {
    debug!(
        denomination = %denomination,
        available = %available,
        requested = %requested,
        "Rejected illegal subtraction"
    );
    MoneyError::IllegalSubtraction {
        denomination,
        available,
        requested,
    }
}

/// Subtracts `requested` coins of `denomination` from `available`.
///
/// Callers check dominance first, so this only fails if that check was
/// skipped; it still never wraps.
#[inline]
pub(crate) fn overflow_sub(
    denomination: Denomination,
    available: CoinNumber,
    requested: CoinNumber,
) -> MoneyResult<CoinNumber> {
    available
        .checked_sub(requested)
        .ok_or_else(|| illegal_subtraction(denomination, available, requested))
}

/// Multiplies two magnitudes, failing with
/// [`MoneyError::MultiplicationOverflow`].
#[inline]
pub(crate) fn overflow_mul(lhs: CoinNumber, rhs: CoinNumber) -> MoneyResult<CoinNumber> {
    lhs.checked_mul(rhs).ok_or_else(|| {
        debug!(lhs = %lhs, rhs = %rhs, "Rejected overflowing multiplication");
        MoneyError::MultiplicationOverflow { lhs, rhs }
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tracing::span;
    use tracing::{Event, Metadata, Subscriber};

    /// Subscriber that only counts events.
    struct EventCounter(Arc<AtomicUsize>);

    impl Subscriber for EventCounter {
        fn enabled(&self, _: &Metadata<'_>) -> bool {
            true
        }

        fn new_span(&self, _: &span::Attributes<'_>) -> span::Id {
            span::Id::from_u64(1)
        }

        fn record(&self, _: &span::Id, _: &span::Record<'_>) {}

        fn record_follows_from(&self, _: &span::Id, _: &span::Id) {}

        fn event(&self, _: &Event<'_>) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }

        fn enter(&self, _: &span::Id) {}

        fn exit(&self, _: &span::Id) {}
    }

    /// Runs `f` on this thread with a counting subscriber installed and
    /// returns how many events it emitted.
    pub(crate) fn count_events<T>(f: impl FnOnce() -> T) -> usize {
        let events = Arc::new(AtomicUsize::new(0));
        let counter = EventCounter(Arc::clone(&events));
        tracing::subscriber::with_default(counter, f);
        events.load(Ordering::SeqCst)
    }

    #[test]
    fn test_rejections_are_logged() {
        assert_eq!(count_events(|| overflow_add(u64::MAX, 1)), 1);
        assert_eq!(count_events(|| overflow_mul(u64::MAX, 2)), 1);
        assert_eq!(count_events(|| overflow_sub(Denomination::Denier, 0, 1)), 1);
        assert_eq!(
            count_events(|| illegal_subtraction(Denomination::Livre, 0, 1)),
            1
        );
    }

    #[test]
    fn test_successes_are_silent() {
        assert_eq!(count_events(|| overflow_add(1, 1)), 0);
        assert_eq!(count_events(|| overflow_mul(3, 4)), 0);
        assert_eq!(count_events(|| overflow_sub(Denomination::Solidus, 4, 3)), 0);
    }

    #[test]
    fn test_overflow_add() {
        assert_eq!(overflow_add(2, 3), Ok(5));
        assert_eq!(overflow_add(u64::MAX, 0), Ok(u64::MAX));
        assert_eq!(
            overflow_add(u64::MAX, 1),
            Err(MoneyError::AdditionOverflow {
                lhs: u64::MAX,
                rhs: 1
            })
        );
    }

    #[test]
    fn test_overflow_sub() {
        assert_eq!(overflow_sub(Denomination::Denier, 5, 5), Ok(0));
        assert_eq!(overflow_sub(Denomination::Denier, 5, 2), Ok(3));
        assert!(matches!(
            overflow_sub(Denomination::Solidus, 0, 1),
            Err(MoneyError::IllegalSubtraction {
                denomination: Denomination::Solidus,
                available: 0,
                requested: 1,
            })
        ));
    }

    #[test]
    fn test_overflow_mul() {
        assert_eq!(overflow_mul(240, 3), Ok(720));
        assert_eq!(overflow_mul(u64::MAX, 1), Ok(u64::MAX));
        assert_eq!(overflow_mul(u64::MAX, 0), Ok(0));
        assert!(matches!(
            overflow_mul(u64::MAX / 2 + 1, 2),
            Err(MoneyError::MultiplicationOverflow { .. })
        ));
    }
}
