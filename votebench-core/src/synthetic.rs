//! Synthetic Input Generation
//!
//! Produces integer sequences under the four named distributions the
//! measurements are taken against. `random` plants a guaranteed strict
//! majority; `sorted` and `reverse-sorted` deliberately have none for
//! n > 1, exercising the weak-guarantee code path.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Majority value planted by the `random` distribution.
const MAJORITY_VALUE: i32 = 1;

/// Exclusive upper bound for filler values in the `random` distribution.
const FILLER_BOUND: i32 = 10;

/// Shape of a generated input sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Distribution {
    /// Shuffled, with a planted strict majority element.
    Random,
    /// Ascending `0..n`, no repeats (no majority for n > 1).
    Sorted,
    /// Strictly descending `n - i` (no majority for n > 1).
    ReverseSorted,
    /// Ascending with `n / 10` random index-pair swaps applied.
    NearlySorted,
}

impl Distribution {
    /// All distributions, in presentation order.
    pub const ALL: [Distribution; 4] = [
        Distribution::Random,
        Distribution::Sorted,
        Distribution::ReverseSorted,
        Distribution::NearlySorted,
    ];

    /// Kebab-case name used in CLI flags and CSV algorithm labels.
    pub fn name(self) -> &'static str {
        match self {
            Distribution::Random => "random",
            Distribution::Sorted => "sorted",
            Distribution::ReverseSorted => "reverse-sorted",
            Distribution::NearlySorted => "nearly-sorted",
        }
    }
}

impl std::fmt::Display for Distribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Distribution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "random" => Ok(Distribution::Random),
            "sorted" => Ok(Distribution::Sorted),
            "reverse-sorted" => Ok(Distribution::ReverseSorted),
            "nearly-sorted" => Ok(Distribution::NearlySorted),
            other => Err(format!("Unknown distribution: {}", other)),
        }
    }
}

/// Generate `n` values with thread-local entropy.
pub fn generate(n: usize, distribution: Distribution) -> Vec<i32> {
    generate_with_rng(n, distribution, &mut rand::thread_rng())
}

/// Generate `n` values with a caller-supplied source. Seed a `StdRng`
/// (`StdRng::seed_from_u64`) for reproducible runs.
///
/// `n = 0` yields an empty sequence; feeding that to the vote trips its
/// non-empty precondition, which is the caller's problem.
pub fn generate_with_rng<R: Rng + ?Sized>(
    n: usize,
    distribution: Distribution,
    rng: &mut R,
) -> Vec<i32> {
    if n == 0 {
        return Vec::new();
    }

    match distribution {
        Distribution::Random => {
            let majority_count = n / 2 + 1;
            let mut values = Vec::with_capacity(n);
            values.resize(majority_count, MAJORITY_VALUE);
            for _ in majority_count..n {
                values.push(rng.gen_range(0..FILLER_BOUND));
            }
            // Fisher-Yates over the whole array; the majority count is
            // position-independent.
            values.shuffle(rng);
            values
        }
        Distribution::Sorted => (0..n).map(|i| i as i32).collect(),
        Distribution::ReverseSorted => (0..n).map(|i| (n - i) as i32).collect(),
        Distribution::NearlySorted => {
            let mut values: Vec<i32> = (0..n).map(|i| i as i32).collect();
            for _ in 0..n / 10 {
                let a = rng.gen_range(0..n);
                let b = rng.gen_range(0..n);
                values.swap(a, b);
            }
            values
        }
    }
}
