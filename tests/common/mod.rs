// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use cassa::domain::{Denomination, Till};

/// Opening float most tests start from: [20s, 10s, 5s, 2s, 1s].
pub const OPENING_COUNTS: [i64; 5] = [3, 3, 0, 5, 10];

/// Helper to create a drawer seeded with the opening float
pub fn test_till() -> Result<Till> {
    Ok(Till::with_counts(&OPENING_COUNTS)?)
}

/// Recompute the drawer value from its per-denomination counts
pub fn recomputed_total(till: &Till) -> u64 {
    Denomination::ALL
        .iter()
        .zip(till.amounts())
        .map(|(denomination, count)| denomination.value() * count)
        .sum()
}
