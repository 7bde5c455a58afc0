//! Parsing and replaying the textual command log the `replay` subcommand
//! drives a [`crate::tree::PrefixSumVec`] with. One command per line:
//!
//! ```text
//! insert <pos> <val>
//! set <pos> <val>
//! increment <pos> <val>
//! decrement <pos> <val>
//! get <pos>
//! prefixsum <pos>
//! find <target>
//! clear
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. The query commands
//! (`get`, `prefixsum`, `find`) each produce one line of output; the rest
//! are silent.

use crate::error::Error;
use crate::tree::PrefixSumVec;
use std::io::BufRead;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Insert(usize, u64),
    Set(usize, u64),
    Increment(usize, u64),
    Decrement(usize, u64),
    Get(usize),
    PrefixSum(usize),
    Find(u64),
    Clear,
}

fn parse_usize(arg: &str, line: usize) -> Result<usize, Error> {
    arg.parse().map_err(|_| Error::NotANumber {
        line,
        arg: arg.to_string(),
    })
}

fn parse_u64(arg: &str, line: usize) -> Result<u64, Error> {
    arg.parse().map_err(|_| Error::NotANumber {
        line,
        arg: arg.to_string(),
    })
}

fn expect_args(verb: &str, args: &[&str], expected: usize, line: usize) -> Result<(), Error> {
    if args.len() != expected {
        return Err(Error::WrongArgCount {
            line,
            verb: verb.to_string(),
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

/// Parses a single non-blank, non-comment command-file line.
pub fn parse_line(text: &str, line: usize) -> Result<Command, Error> {
    let mut parts = text.split_whitespace();
    let verb = parts.next().expect("caller filters blank lines");
    let args: Vec<&str> = parts.collect();
    match verb {
        "insert" => {
            expect_args(verb, &args, 2, line)?;
            Ok(Command::Insert(parse_usize(args[0], line)?, parse_u64(args[1], line)?))
        }
        "set" => {
            expect_args(verb, &args, 2, line)?;
            Ok(Command::Set(parse_usize(args[0], line)?, parse_u64(args[1], line)?))
        }
        "increment" => {
            expect_args(verb, &args, 2, line)?;
            Ok(Command::Increment(parse_usize(args[0], line)?, parse_u64(args[1], line)?))
        }
        "decrement" => {
            expect_args(verb, &args, 2, line)?;
            Ok(Command::Decrement(parse_usize(args[0], line)?, parse_u64(args[1], line)?))
        }
        "get" => {
            expect_args(verb, &args, 1, line)?;
            Ok(Command::Get(parse_usize(args[0], line)?))
        }
        "prefixsum" => {
            expect_args(verb, &args, 1, line)?;
            Ok(Command::PrefixSum(parse_usize(args[0], line)?))
        }
        "find" => {
            expect_args(verb, &args, 1, line)?;
            Ok(Command::Find(parse_u64(args[0], line)?))
        }
        "clear" => {
            expect_args(verb, &args, 0, line)?;
            Ok(Command::Clear)
        }
        other => Err(Error::UnknownCommand {
            line,
            verb: other.to_string(),
        }),
    }
}

/// Applies `cmd` to `vec`, returning the output line a query command
/// produces (`None` for mutating commands).
pub fn apply<const CAP: usize>(vec: &mut PrefixSumVec<CAP>, cmd: &Command) -> Option<String> {
    match cmd {
        Command::Insert(i, v) => {
            vec.insert(*i, *v);
            None
        }
        Command::Set(i, v) => {
            vec.set(*i, *v);
            None
        }
        Command::Increment(i, v) => {
            vec.increment(*i, *v);
            None
        }
        Command::Decrement(i, v) => {
            vec.decrement(*i, *v);
            None
        }
        Command::Get(i) => Some(vec.get(*i).to_string()),
        Command::PrefixSum(i) => Some(vec.prefix_sum(*i).to_string()),
        Command::Find(t) => Some(vec.find(*t).to_string()),
        Command::Clear => {
            vec.clear();
            None
        }
    }
}

/// Reads commands from `reader` line by line, applying each to `vec` and
/// collecting the output lines query commands produce.
pub fn replay<const CAP: usize>(
    vec: &mut PrefixSumVec<CAP>,
    reader: impl BufRead,
) -> Result<Vec<String>, Error> {
    let mut out = Vec::new();
    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let cmd = parse_line(trimmed, n + 1)?;
        log::debug!("line {}: {:?}", n + 1, cmd);
        if let Some(output) = apply(vec, &cmd) {
            out.push(output);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_every_verb() {
        assert_eq!(parse_line("insert 0 5", 1).unwrap(), Command::Insert(0, 5));
        assert_eq!(parse_line("set 1 9", 1).unwrap(), Command::Set(1, 9));
        assert_eq!(parse_line("increment 0 2", 1).unwrap(), Command::Increment(0, 2));
        assert_eq!(parse_line("decrement 0 2", 1).unwrap(), Command::Decrement(0, 2));
        assert_eq!(parse_line("get 3", 1).unwrap(), Command::Get(3));
        assert_eq!(parse_line("prefixsum 3", 1).unwrap(), Command::PrefixSum(3));
        assert_eq!(parse_line("find 7", 1).unwrap(), Command::Find(7));
        assert_eq!(parse_line("clear", 1).unwrap(), Command::Clear);
    }

    #[test]
    fn rejects_unknown_verb() {
        assert!(matches!(
            parse_line("frobnicate 1", 4),
            Err(Error::UnknownCommand { line: 4, .. })
        ));
    }

    #[test]
    fn rejects_wrong_arg_count() {
        assert!(matches!(
            parse_line("insert 0", 2),
            Err(Error::WrongArgCount { line: 2, expected: 2, got: 1, .. })
        ));
    }

    #[test]
    fn rejects_non_numeric_argument() {
        assert!(matches!(
            parse_line("insert abc 5", 3),
            Err(Error::NotANumber { line: 3, .. })
        ));
    }

    #[test]
    fn replay_runs_a_script_and_collects_output() {
        let script = "insert 0 2\ninsert 1 4\ninsert 2 1\nprefixsum 2\nfind 6\nget 1\n";
        let mut v = PrefixSumVec::<64>::new();
        let out = replay(&mut v, script.as_bytes()).unwrap();
        assert_eq!(out, vec!["6".to_string(), "2".to_string(), "4".to_string()]);
    }

    #[test]
    fn replay_skips_blank_and_comment_lines() {
        let script = "# a comment\n\ninsert 0 1\n\nget 0\n";
        let mut v = PrefixSumVec::<64>::new();
        let out = replay(&mut v, script.as_bytes()).unwrap();
        assert_eq!(out, vec!["1".to_string()]);
    }
}
