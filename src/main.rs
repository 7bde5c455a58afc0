use packedsum::config::{Action, Config};
use packedsum::tree::PrefixSumVec;
use packedsum::{bench, commands};
use std::fs::File;
use std::io::{self, BufReader, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse_args();
    env_logger::Builder::new().filter_level(config.log_level()).init();

    match config.command {
        Action::Replay { file_in, file_out } => {
            let mut vec = PrefixSumVec::<{ packedsum::DEFAULT_LEAF_CAP }>::new();
            let reader = BufReader::new(File::open(&file_in)?);
            log::info!("replaying commands from {file_in}");
            let output = commands::replay(&mut vec, reader)?;

            match file_out {
                Some(path) => std::fs::write(&path, output.join("\n"))?,
                None => {
                    let stdout = io::stdout();
                    let mut lock = stdout.lock();
                    for line in &output {
                        writeln!(lock, "{line}")?;
                    }
                }
            }
            log::info!("num={} sum={}", vec.num(), vec.sum());
        }
        Action::Bench { num, maxval } => {
            let report = bench::run::<{ packedsum::DEFAULT_LEAF_CAP }>(num, maxval);
            report.print();
        }
    }

    Ok(())
}
