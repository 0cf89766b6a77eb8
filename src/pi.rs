// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Monte Carlo estimation of pi.
//!
//! Points are drawn uniformly from the unit square; the fraction that
//! lands inside the quarter circle `x² + y² < 1` approaches `pi / 4`.
//! The same hit counter runs under three strategies that differ only
//! in how the samples are split among threads and where the random
//! numbers come from.

use std::fmt;
use std::str::FromStr;

use crossbeam;
use crossbeam::thread::ScopedJoinHandle;
use errors::{Error, Result};
use partition;
use rand::Rng;
use streams::{worker_stream, SharedStream};

/// How the samples are spread over threads.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// One loop on the calling thread, drawing from the shared stream.
    Serial,
    /// Workers split the samples but all draw from the shared stream
    /// at once.  The estimate suffers from the contention; that is the
    /// point of the strategy.
    NaiveParallel,
    /// Workers split the samples and each draws from its own stream.
    IsolatedStreams,
}

impl Strategy {
    /// Every strategy, in the order the driver runs them.
    pub const ALL: [Strategy; 3] = [
        Strategy::Serial,
        Strategy::NaiveParallel,
        Strategy::IsolatedStreams,
    ];

    /// The label reported next to the timing.
    pub fn label(self) -> &'static str {
        match self {
            Strategy::Serial => "Serial",
            Strategy::NaiveParallel => "Parallel (shared stream)",
            Strategy::IsolatedStreams => "Parallel (isolated streams)",
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    /// Parses the short names `serial`, `naive` and `isolated`, in any case.
    fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "serial" => Ok(Strategy::Serial),
            "naive" => Ok(Strategy::NaiveParallel),
            "isolated" => Ok(Strategy::IsolatedStreams),
            _ => Err(format!("unknown strategy '{}'", s)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Draws `samples` points from `rng` and counts those strictly inside
/// the unit circle.
pub fn count_hits<R: Rng + ?Sized>(rng: &mut R, samples: u64) -> u64 {
    let mut hits = 0;
    for _ in 0..samples {
        let x: f64 = rng.gen();
        let y: f64 = rng.gen();
        if x * x + y * y < 1.0 {
            hits += 1;
        }
    }
    hits
}

/// Scales a hit count to an estimate of pi.  `samples` must be at
/// least one.
pub fn estimate(hits: u64, samples: u64) -> f64 {
    debug_assert!(samples > 0, "cannot estimate pi from zero samples");
    4.0 * hits as f64 / samples as f64
}

/// Hits counted on the calling thread from the shared stream.
pub fn hits_serial(stream: &SharedStream, samples: u64) -> u64 {
    count_hits(&mut stream.handle(), samples)
}

/// Hits counted by `threads` workers all drawing from `stream`.
pub fn hits_naive(stream: &SharedStream, samples: u64, threads: usize) -> Result<u64> {
    let ranges = partition::split(samples, threads);
    debug!("shared stream: {} workers", ranges.len());

    crossbeam::scope(|spawner| {
        let handles: Vec<ScopedJoinHandle<u64>> = ranges
            .into_iter()
            .map(|range| {
                let mut rng = stream.handle();
                spawner.spawn(move |_| count_hits(&mut rng, range.end - range.start))
            })
            .collect();
        reduce(handles)
    })
    .map_err(|_| Error::WorkerPanicked)?
}

/// Hits counted by `threads` workers, worker `i` drawing from a private
/// stream seeded with `base_seed + i`.  For a fixed seed and worker
/// count the result is the same on every run.
pub fn hits_isolated(base_seed: u64, samples: u64, threads: usize) -> Result<u64> {
    let ranges = partition::split(samples, threads);
    debug!("isolated streams: {} workers, base seed {}", ranges.len(), base_seed);

    crossbeam::scope(|spawner| {
        let handles: Vec<ScopedJoinHandle<u64>> = ranges
            .into_iter()
            .enumerate()
            .map(|(worker, range)| {
                spawner.spawn(move |_| {
                    let mut rng = worker_stream(base_seed, worker);
                    trace!("worker {} takes samples {:?}", worker, range);
                    count_hits(&mut rng, range.end - range.start)
                })
            })
            .collect();
        reduce(handles)
    })
    .map_err(|_| Error::WorkerPanicked)?
}

/// Joins every worker and sums the partial counts.
fn reduce(handles: Vec<ScopedJoinHandle<u64>>) -> Result<u64> {
    handles
        .into_iter()
        .map(|handle| handle.join().map_err(|_| Error::WorkerPanicked))
        .sum()
}

/// Runs the strategies against one set of streams.
#[derive(Debug)]
pub struct Estimator {
    threads: usize,
    shared: SharedStream,
    base_seed: u64,
}

impl Estimator {
    /// `shared_seed` seeds the stream used by the serial and naive
    /// strategies; `base_seed` seeds the isolated streams.
    pub fn new(threads: usize, shared_seed: u64, base_seed: u64) -> Self {
        Estimator {
            threads,
            shared: SharedStream::new(shared_seed),
            base_seed,
        }
    }

    /// Counts hits among `samples` points with `strategy`.
    pub fn hits(&self, strategy: Strategy, samples: u64) -> Result<u64> {
        match strategy {
            Strategy::Serial => Ok(hits_serial(&self.shared, samples)),
            Strategy::NaiveParallel => hits_naive(&self.shared, samples, self.threads),
            Strategy::IsolatedStreams => hits_isolated(self.base_seed, samples, self.threads),
        }
    }

    /// Estimates pi from `samples` points with `strategy`.
    pub fn run(&self, strategy: Strategy, samples: u64) -> Result<f64> {
        Ok(estimate(self.hits(strategy, samples)?, samples))
    }
}
