//! Command-line argument surface, parsed with `clap`'s derive API.
//!
//! `packedsum replay -i commands.txt` drives a dictionary from a scripted
//! command file (see [`crate::commands`]); `packedsum bench` runs the
//! allocation/space benchmark described in [`crate::bench`]. `-v` raises
//! the `log` facade's max level, wired through `env_logger` in `main`.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "packedsum", version, about = "Dynamic succinct prefix-sum dictionary")]
pub struct Config {
    #[command(subcommand)]
    pub command: Action,

    /// Increase log verbosity; repeat for more (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Action {
    /// Replay a scripted command file against a fresh dictionary
    Replay {
        /// Path to the command file (one command per line)
        #[arg(short = 'i', long = "input")]
        file_in: String,

        /// Path to write query output to; defaults to stdout
        #[arg(short = 'o', long = "output")]
        file_out: Option<String>,
    },
    /// Benchmark random insertions against the information-theoretic lower bound
    Bench {
        /// Number of random insertions to perform
        #[arg(short, long, default_value_t = 1_000_000)]
        num: u64,

        /// Values are drawn uniformly from `[0, maxval)`
        #[arg(short, long, default_value_t = 100)]
        maxval: u64,
    },
}

impl Config {
    /// Parses `Config` from `std::env::args`, exiting the process with
    /// `clap`'s own usage message on invalid arguments.
    pub fn parse_args() -> Self {
        Config::parse()
    }

    /// Log level implied by the verbosity count: `warn` by default, one
    /// step more permissive per repeated `-v`.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
