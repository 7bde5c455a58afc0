//! Standalone performance/space benchmark, analogous to the reference
//! implementation's separate `tool/PerformanceTest` binary: `n` random
//! insertions at random positions, reported against the information
//! theoretic lower bound. `packedsum bench` runs the same routine as a
//! subcommand of the main binary; this target exists for running it
//! without going through the replay-oriented CLI surface.

use clap::Parser;
use packedsum::bench;

#[derive(Parser, Debug)]
#[command(name = "bench", about = "Insertion/space benchmark for packedsum")]
struct Args {
    /// Number of random insertions to perform
    #[arg(short, long, default_value_t = 1_000_000)]
    num: u64,

    /// Values are drawn uniformly from `[0, maxval)`
    #[arg(short, long, default_value_t = 100)]
    maxval: u64,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    let level = match args.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new().filter_level(level).init();

    let report = bench::run::<{ packedsum::DEFAULT_LEAF_CAP }>(args.num, args.maxval);
    report.print();
}
