//! Weighted random selection.
//!
//! A draw sums the weights, rolls `r` uniformly in `1..=total` and walks the
//! entries keeping a running sum; the first entry whose running sum reaches
//! `r` wins. Each entry therefore owns exactly `weight` consecutive values
//! of `r` and is picked with probability `weight / total`, whatever the
//! entry order.

use rand::Rng;
use rand::rngs::StdRng;

use crate::error::{RrError, RrResult};

/// Resolve a roll `r` in `1..=total` to the index that owns it.
///
/// Returns `None` when `r` is 0 or exceeds the total weight.
pub fn pick_index(weights: &[u32], r: u64) -> Option<usize> {
    if r == 0 {
        return None;
    }
    let mut running = 0u64;
    for (index, weight) in weights.iter().enumerate() {
        running += u64::from(*weight);
        if running >= r {
            return Some(index);
        }
    }
    None
}

/// Draw one entry, weighted by the second tuple field.
pub fn draw<'a, T>(entries: &'a [(T, u32)], rng: &mut StdRng) -> RrResult<&'a T> {
    let weights: Vec<u32> = entries.iter().map(|(_, w)| *w).collect();
    let total: u64 = weights.iter().map(|w| u64::from(*w)).sum();
    if total == 0 {
        return Err(RrError::EmptyCatalog);
    }
    let r = rng.random_range(1..=total);
    let index = pick_index(&weights, r).ok_or(RrError::EmptyCatalog)?;
    Ok(&entries[index].0)
}

/// Chance-gated extra draws performed after the primary one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultiRoll {
    /// Percent chance (0-100) that extra draws happen.
    pub chance: u32,
    /// How many extra draws happen when triggered.
    pub count: u32,
}

impl MultiRoll {
    /// Create multi-roll settings (chance capped at 100, count at least 1).
    pub fn new(chance: u32, count: u32) -> Self {
        Self {
            chance: chance.min(100),
            count: count.max(1),
        }
    }

    /// Roll the 1-100 trigger.
    pub fn triggers(&self, rng: &mut StdRng) -> bool {
        rng.random_range(1..=100u32) <= self.chance
    }
}

/// Roll the multi-roll trigger and, if it fires, draw `count` more entries.
///
/// Extra draws are independent and with replacement, so they may repeat
/// each other or the primary result.
pub fn roll_extras<'a, T>(
    entries: &'a [(T, u32)],
    multi: MultiRoll,
    rng: &mut StdRng,
) -> RrResult<Vec<&'a T>> {
    if !multi.triggers(rng) {
        return Ok(Vec::new());
    }
    (0..multi.count).map(|_| draw(entries, rng)).collect()
}
