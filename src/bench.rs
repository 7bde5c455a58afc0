//! Random-insertion benchmark comparing allocated bytes against the
//! information-theoretic lower bound `ceil(log2(maxval)) * n / 8`, the same
//! measurement the reference `tool/PerformanceTest` makes.

use crate::traits::AllocSize;
use crate::tree::PrefixSumVec;
use rand::Rng;
use std::time::Instant;

/// Outcome of one [`run`], reported as a `println!` table (see
/// [`Report::print`]).
pub struct Report {
    pub num: u64,
    pub maxval: u64,
    pub avg: f64,
    pub elapsed_secs: f64,
    pub optimal_bytes: u64,
    pub allocated_bytes: u64,
}

impl Report {
    pub fn ratio(&self) -> f64 {
        self.allocated_bytes as f64 / self.optimal_bytes as f64
    }

    pub fn print(&self) {
        println!("             num {}", self.num);
        println!("             avg {:.2}", self.avg);
        println!("         elapsed {:.3}s", self.elapsed_secs);
        println!("   optimal_bytes {}", self.optimal_bytes);
        println!(" allocated_bytes {}", self.allocated_bytes);
        println!("           ratio {:.3}", self.ratio());
    }
}

/// Inserts `num` values drawn uniformly from `[0, maxval)` at random
/// positions into a fresh dictionary, timing the run and reporting its
/// allocation footprint against the lower bound.
pub fn run<const CAP: usize>(num: u64, maxval: u64) -> Report {
    let mut rng = rand::thread_rng();
    let mut vec = PrefixSumVec::<CAP>::new();
    let mut sum = 0u64;

    let start = Instant::now();
    for i in 0..num {
        let val = rng.gen_range(0..maxval);
        let pos = rng.gen_range(0..=i) as usize;
        sum += val;
        vec.insert(pos, val);
        if i > 0 && i % 100_000 == 0 {
            log::info!("inserted {i}/{num}");
        }
    }
    let elapsed_secs = start.elapsed().as_secs_f64();

    let allocated_bytes = vec.alloc_bytes() as u64;
    let optimal_bits = crate::bitops::binlen(maxval) as u64;
    let optimal_bytes = (optimal_bits * num).div_ceil(8);

    Report {
        num,
        maxval,
        avg: sum as f64 / num as f64,
        elapsed_secs,
        optimal_bytes,
        allocated_bytes,
    }
}
