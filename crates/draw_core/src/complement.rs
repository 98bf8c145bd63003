//! Complement of the drawn sets over the configured range.

use std::collections::HashSet;

use rayon::prelude::*;

use crate::range::IntRange;

/// Union of all drawn sets: every integer taken at least once.
///
/// Parallel fold/reduce with thread-local partial sets. Set union is
/// commutative and associative, so the merge order does not matter.
pub fn taken_numbers(sets: &[HashSet<i64>]) -> HashSet<i64> {
    sets.par_iter()
        .fold(HashSet::new, |mut acc, set| {
            acc.extend(set.iter().copied());
            acc
        })
        .reduce(HashSet::new, |mut left, right| {
            left.extend(right);
            left
        })
}

/// Integers in `[min, max)` absent from every drawn set.
///
/// With no sets the whole range is available; values outside the range are
/// ignored regardless of whether they were drawn.
pub fn available_numbers(sets: &[HashSet<i64>], range: IntRange) -> HashSet<i64> {
    let taken = taken_numbers(sets);
    (range.min()..range.max())
        .into_par_iter()
        .filter(|n| !taken.contains(n))
        .collect()
}
