//! Motivational tip selection.
//!
//! The roadmap ends with one tip picked at random. The choice sits behind
//! `TipSelector` so tests can pin it with `FixedTipSelector`.

use rand::Rng;

/// Picks an index into a tip pool of `pool_len` entries.
/// Callers never pass `pool_len == 0`.
pub trait TipSelector {
    fn select(&mut self, pool_len: usize) -> usize;
}

/// Uniform choice from the thread-local RNG. Not security sensitive.
#[derive(Debug, Default)]
pub struct RandomTipSelector;

impl TipSelector for RandomTipSelector {
    fn select(&mut self, pool_len: usize) -> usize {
        rand::thread_rng().gen_range(0..pool_len)
    }
}

/// Always picks the same index, wrapped to the pool size.
#[cfg(test)]
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedTipSelector(pub usize);

#[cfg(test)]
impl TipSelector for FixedTipSelector {
    fn select(&mut self, pool_len: usize) -> usize {
        self.0 % pool_len
    }
}

/// Returns a tip from `pool`, or `""` if the pool is empty.
pub fn pick_tip<'a>(pool: &[&'a str], selector: &mut dyn TipSelector) -> &'a str {
    if pool.is_empty() {
        return "";
    }
    let idx = selector.select(pool.len()).min(pool.len() - 1);
    pool[idx]
}
