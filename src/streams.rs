// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Random number streams for the pi estimator.
//!
//! There are two kinds.  A [`SharedStream`] is one drand48-style
//! generator that every worker draws from at once.  Its state is
//! advanced with a plain load followed by a plain store, so two
//! workers can read the same state, produce the same numbers, and
//! clobber each other's updates.  That is memory-safe but
//! statistically unsound, and it is exactly the contention the naive
//! strategy exists to measure.
//!
//! An isolated stream, from [`worker_stream`], belongs to one worker
//! for the lifetime of a parallel region and is seeded from nothing
//! but the base seed and the worker's index.

use std::sync::atomic::{AtomicU64, Ordering};

use rand::rngs::StdRng;
use rand::{Error as RandError, RngCore, SeedableRng};

// The 48-bit linear congruential generator of the drand48 family.
const MULTIPLIER: u64 = 0x5_DEEC_E66D;
const INCREMENT: u64 = 0xB;
const MASK: u64 = (1 << 48) - 1;
const LOW_BITS: u64 = 0x330E;

/// A single drand48-style generator meant to be shared, unsynchronised,
/// between threads.
#[derive(Debug)]
pub struct SharedStream {
    state: AtomicU64,
}

impl SharedStream {
    /// Seeds the generator the way `srand48` does: the low 32 bits of
    /// the seed become the high bits of the state.
    pub fn new(seed: u64) -> Self {
        let state = ((seed & 0xFFFF_FFFF) << 16) | LOW_BITS;
        SharedStream {
            state: AtomicU64::new(state),
        }
    }

    /// Advances the generator and returns the new 48-bit state.  The
    /// load and store are separate, so concurrent callers race.
    fn step(&self) -> u64 {
        let x = self.state.load(Ordering::Relaxed);
        let next = x.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT) & MASK;
        self.state.store(next, Ordering::Relaxed);
        next
    }

    /// A borrowed handle usable anywhere a `rand::Rng` is expected.
    pub fn handle(&self) -> SharedHandle {
        SharedHandle(self)
    }
}

/// A `RngCore` view of a [`SharedStream`].  Any number of handles may
/// exist at once, on any number of threads.
///
/// Each `next_u32` is the top 32 bits of one 48-bit step.  A `f64`
/// drawn through `Rng::gen` consumes two steps and keeps 53 bits, so
/// the doubles share the drand48 state sequence but are not the values
/// `drand48` itself would return.
#[derive(Clone, Copy, Debug)]
pub struct SharedHandle<'a>(&'a SharedStream);

impl<'a> RngCore for SharedHandle<'a> {
    fn next_u32(&mut self) -> u32 {
        (self.0.step() >> 16) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let high = u64::from(self.next_u32());
        let low = u64::from(self.next_u32());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), RandError> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// The private stream for worker `worker`, seeded with
/// `base_seed + worker`.
pub fn worker_stream(base_seed: u64, worker: usize) -> StdRng {
    StdRng::seed_from_u64(base_seed.wrapping_add(worker as u64))
}
