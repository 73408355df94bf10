//! Deterministic random number generation.
//!
//! RULE: Nothing in variant generation may call any platform RNG.
//! All randomness flows through a VariantRng seeded from the
//! student's derived seed.
//!
//! The draw helpers map raw `next_u64` output to values directly.
//! Changing any of them changes every student's parameters.

use crate::types::Seed;
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// A deterministic RNG for a single variant.
pub struct VariantRng {
    inner: Pcg64Mcg,
}

impl VariantRng {
    pub fn new(seed: Seed) -> Self {
        Self {
            inner: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Draw a raw u64 (full range).
    pub fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Roll an integer in [lo, hi], both ends inclusive.
    pub fn int_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        assert!(lo <= hi, "empty range {lo}..={hi}");
        let span = u64::from(hi - lo) + 1;
        lo + self.next_u64_below(span) as u32
    }

    /// Roll a float in [lo, hi).
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }

    /// Pick one element of a non-empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        let index = self.next_u64_below(items.len() as u64) as usize;
        &items[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = VariantRng::new(0xDEAD_BEEF);
        let mut b = VariantRng::new(0xDEAD_BEEF);
        for _ in 0..64 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn int_inclusive_hits_both_ends() {
        let mut rng = VariantRng::new(7);
        let mut seen_lo = false;
        let mut seen_hi = false;
        for _ in 0..2_000 {
            let v = rng.int_inclusive(1, 3);
            assert!((1..=3).contains(&v));
            seen_lo |= v == 1;
            seen_hi |= v == 3;
        }
        assert!(seen_lo && seen_hi);
    }

    #[test]
    fn uniform_stays_in_half_open_range() {
        let mut rng = VariantRng::new(99);
        for _ in 0..1_000 {
            let v = rng.uniform(3.0, 8.0);
            assert!((3.0..8.0).contains(&v), "{v} out of range");
        }
    }

    #[test]
    fn choose_single_element() {
        let mut rng = VariantRng::new(1);
        assert_eq!(*rng.choose(&["only"]), "only");
    }
}
