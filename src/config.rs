//! Command-line configuration for the terminal front-end
//!
//! Recognised flags:
//! - `--algorithm <id>` / `-a`: bubble, insertion, quick or merge
//! - `--size <n>` / `-n`: initial array size
//! - `--speed <1-100>` / `-s`: initial playback speed
//! - `--seed <u64>`: reproducible array values
//! - `--log <path>`: write `tracing` output to a file (filtered by `RUST_LOG`)
//! - `--help` / `-h`

use std::path::PathBuf;

use crate::errors::{Result, VisualizerError};
use crate::factory::{validate_size, DEFAULT_SIZE};
use crate::playback::Speed;
use crate::trace::Algorithm;

/// Parsed command-line options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub algorithm: Algorithm,
    pub size: usize,
    pub speed: Speed,
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
    pub show_help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            algorithm: Algorithm::default(),
            size: DEFAULT_SIZE,
            speed: Speed::default(),
            seed: None,
            log_file: None,
            show_help: false,
        }
    }
}

impl Config {
    /// Parse the process arguments
    pub fn from_env() -> Result<Self> {
        Self::parse(std::env::args().skip(1))
    }

    /// Parse an argument list (without the program name)
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Config::default();
        let mut iter = args.into_iter().map(Into::<String>::into);

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--help" | "-h" => config.show_help = true,
                "--algorithm" | "-a" => {
                    config.algorithm = next_value(&mut iter, &arg)?.parse()?;
                }
                "--size" | "-n" => {
                    let size = parse_number::<usize>(&next_value(&mut iter, &arg)?, &arg)?;
                    validate_size(size)?;
                    config.size = size;
                }
                "--speed" | "-s" => {
                    let speed = parse_number::<u32>(&next_value(&mut iter, &arg)?, &arg)?;
                    config.speed = Speed::new(speed)?;
                }
                "--seed" => {
                    config.seed = Some(parse_number(&next_value(&mut iter, &arg)?, &arg)?);
                }
                "--log" => {
                    config.log_file = Some(PathBuf::from(next_value(&mut iter, &arg)?));
                }
                other => {
                    return Err(VisualizerError::InvalidArgument(format!(
                        "unrecognised option '{}'",
                        other
                    )));
                }
            }
        }

        Ok(config)
    }

    pub fn help_text(program_name: &str) -> String {
        format!(
            "Usage: {} [OPTIONS]\n\
             \n\
             Options:\n\
             \x20 -a, --algorithm <id>   bubble | insertion | quick | merge (default: bubble)\n\
             \x20 -n, --size <n>         array size, 1-200 (default: {})\n\
             \x20 -s, --speed <1-100>    playback speed (default: {})\n\
             \x20     --seed <u64>       seed for reproducible arrays\n\
             \x20     --log <path>       write logs to a file (level from RUST_LOG)\n\
             \x20 -h, --help             show this help\n",
            program_name,
            DEFAULT_SIZE,
            Speed::DEFAULT.value()
        )
    }
}

fn next_value(iter: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    iter.next()
        .ok_or_else(|| VisualizerError::InvalidArgument(format!("{} requires a value", flag)))
}

fn parse_number<T: std::str::FromStr>(value: &str, flag: &str) -> Result<T> {
    value.parse().map_err(|_| {
        VisualizerError::InvalidArgument(format!(
            "{} expects a non-negative integer, got '{}'",
            flag, value
        ))
    })
}
