//! Benchmark workloads for the shiftseq sequence container.
//!
//! Provides deterministic, seeded workloads shared by the criterion benches:
//!
//! - [`StressProfile`]: fill, random-index removal, then front pops
//! - [`StressProfile::reference`]: 100K fill down to 70K, then down to 100
//! - [`filled`]: a sequence of `count` seeded values in `0..100`

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use shiftseq::Sequence;

/// Shape of a removal-heavy workload.
#[derive(Clone, Copy, Debug)]
pub struct StressProfile {
    /// Elements appended up front.
    pub fill: usize,
    /// Remove at random indices until this many remain.
    pub random_removal_floor: usize,
    /// Then pop from the front until this many remain.
    pub pop_floor: usize,
}

impl StressProfile {
    /// 100K appends, random removal to 70K, front pops to 100.
    pub fn reference() -> Self {
        Self {
            fill: 100_000,
            random_removal_floor: 70_000,
            pop_floor: 100,
        }
    }

    /// A smaller profile for quick iterations.
    pub fn small() -> Self {
        Self {
            fill: 10_000,
            random_removal_floor: 7_000,
            pop_floor: 100,
        }
    }

    /// Run the workload and return the surviving sequence.
    pub fn run(&self, seed: u64) -> Sequence<u64> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut seq = filled(self.fill, seed);
        while seq.len() > self.random_removal_floor {
            let index = rng.random_range(0..seq.len());
            if seq.remove_at(index).is_err() {
                break;
            }
        }
        while seq.len() > self.pop_floor {
            if seq.pop().is_err() {
                break;
            }
        }
        seq
    }
}

/// `count` values in `0..100` from a ChaCha8 stream seeded by `seed`.
pub fn filled(count: usize, seed: u64) -> Sequence<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed ^ 0x5eed);
    (0..count).map(|_| rng.random_range(0..100)).collect()
}
