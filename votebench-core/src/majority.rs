//! Boyer-Moore Majority Vote
//!
//! Single left-to-right pass maintaining a (candidate, count) pair:
//! matching elements reinforce the candidate, mismatching elements cancel
//! it, and a cancelled candidate is replaced by the current element. A true
//! majority survives all cancellation, which is the entire point of the
//! algorithm: O(n) time, O(1) auxiliary space, no sorting, no hash table.

use crate::tracker::PerfTracker;
use thiserror::Error;

/// Precondition violations for [`find_majority_element`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VoteError {
    /// The input sequence was empty. Rejected up front; the vote never
    /// silently returns a default candidate.
    #[error("input sequence must be non-empty")]
    EmptyInput,
}

/// Run the majority vote over `values`, optionally instrumented.
///
/// When a tracker is supplied its timer brackets exactly the voting pass
/// (no generation or I/O inside the window), and operation counts are
/// accumulated in locals and flushed with one additive update each after
/// `stop` rather than taking the tracker lock per element. Per element the
/// cost model is one access plus two comparisons: the count-is-zero check
/// and the candidate-equality check.
///
/// # Guarantee
///
/// If one value occupies more than half the positions it is returned
/// exactly. Without a strict majority the last surviving candidate is
/// returned, which is always *some* element of the input but carries no
/// further meaning; callers needing certainty must verify separately.
///
/// # Errors
///
/// [`VoteError::EmptyInput`] if `values` is empty.
pub fn find_majority_element(
    values: &[i32],
    tracker: Option<&PerfTracker>,
) -> Result<i32, VoteError> {
    if values.is_empty() {
        return Err(VoteError::EmptyInput);
    }

    let mut comparisons: i64 = 0;
    let mut accesses: i64 = 0;

    if let Some(tracker) = tracker {
        tracker.start();
    }

    let mut candidate = 0i32;
    let mut count = 0u64;

    for &value in values {
        accesses += 1;

        comparisons += 1;
        if count == 0 {
            candidate = value;
        }

        comparisons += 1;
        if value == candidate {
            count += 1;
        } else {
            count -= 1;
        }
    }

    if let Some(tracker) = tracker {
        tracker.stop();
        tracker.add_array_accesses(accesses);
        tracker.add_comparisons(comparisons);
    }

    Ok(candidate)
}
