//! Headless simulator configuration.

use crate::constants::BATCH_ATTEMPT_CAP;
use crate::error::ConfigError;
use crate::strategy::Strategy;

/// Configuration for the headless simulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub strategy: Strategy,

    /// Runs per batch before giving up
    pub batch_cap: u32,

    /// Independent batches (or instant runs), each with its own seed
    pub runs: u32,

    /// Base RNG seed; run `i` uses `seed + i` (None = fresh entropy)
    pub seed: Option<u64>,

    /// Single run per line instead of a batch
    pub instant: bool,

    /// Print one JSON object per line
    pub json: bool,

    /// Raise crate log level to debug
    pub verbose: bool,

    /// Skip the banner and board rendering
    pub quiet: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::SevenSeven,
            batch_cap: BATCH_ATTEMPT_CAP,
            runs: 1,
            seed: None,
            instant: false,
            json: false,
            verbose: false,
            quiet: false,
        }
    }
}

/// Result of parsing the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedArgs {
    Run(SimConfig),
    Help,
}

pub const USAGE: &str = "\
Stone cutting batch simulator

Usage: simulator [OPTIONS]

Options:
  --strategy NAME  seven-seven (77) or sixteen (16) (default: seven-seven)
  --cap N          Runs per batch before giving up (default: 2000)
  --runs N         Independent batches with incrementing seeds (default: 1)
  --seed N         RNG seed (default: fresh entropy)
  --instant        Single run per line instead of a batch
  --json           One JSON object per line
  --verbose        Debug logging on stderr
  --quiet          Only the result lines
  --help, -h       Show this help";

impl SimConfig {
    /// Parse arguments, excluding the program name.
    pub fn from_args<I, S>(args: I) -> Result<ParsedArgs, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = SimConfig::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--strategy" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--strategy"))?;
                    config.strategy = value.parse()?;
                }
                "--cap" => {
                    config.batch_cap = parse_number("--cap", args.next())?;
                    if config.batch_cap == 0 {
                        return Err(ConfigError::ZeroCap);
                    }
                }
                "--runs" => config.runs = parse_number("--runs", args.next())?,
                "--seed" => config.seed = Some(parse_number("--seed", args.next())?),
                "--instant" => config.instant = true,
                "--json" => config.json = true,
                "--verbose" => config.verbose = true,
                "--quiet" => config.quiet = true,
                "--help" | "-h" => return Ok(ParsedArgs::Help),
                _ => return Err(ConfigError::UnknownArgument(arg)),
            }
        }

        Ok(ParsedArgs::Run(config))
    }

    /// Seed for run `index`, if seeded.
    pub fn seed_for_run(&self, index: u32) -> Option<u64> {
        self.seed.map(|seed| seed.wrapping_add(u64::from(index)))
    }
}

fn parse_number<T: std::str::FromStr>(
    flag: &'static str,
    value: Option<String>,
) -> Result<T, ConfigError> {
    let value = value.ok_or(ConfigError::MissingValue(flag))?;
    value
        .parse()
        .map_err(|_| ConfigError::InvalidNumber { flag, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<ParsedArgs, ConfigError> {
        SimConfig::from_args(args.iter().copied())
    }

    #[test]
    fn test_defaults() {
        let ParsedArgs::Run(config) = parse(&[]).unwrap() else {
            panic!("expected run config");
        };
        assert_eq!(config, SimConfig::default());
        assert_eq!(config.batch_cap, 2000);
        assert_eq!(config.strategy, Strategy::SevenSeven);
    }

    #[test]
    fn test_all_flags() {
        let parsed = parse(&[
            "--strategy", "16", "--cap", "50", "--runs", "4", "--seed", "9", "--instant",
            "--json", "--verbose", "--quiet",
        ])
        .unwrap();
        let expected = SimConfig {
            strategy: Strategy::Sixteen,
            batch_cap: 50,
            runs: 4,
            seed: Some(9),
            instant: true,
            json: true,
            verbose: true,
            quiet: true,
        };
        assert_eq!(parsed, ParsedArgs::Run(expected));
    }

    #[test]
    fn test_help_short_circuits() {
        assert_eq!(parse(&["--runs", "2", "-h", "--bogus"]), Ok(ParsedArgs::Help));
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse(&["--runs"]), Err(ConfigError::MissingValue("--runs")));
        assert_eq!(
            parse(&["--seed", "abc"]),
            Err(ConfigError::InvalidNumber {
                flag: "--seed",
                value: "abc".to_string()
            })
        );
        assert_eq!(parse(&["--cap", "0"]), Err(ConfigError::ZeroCap));
        assert_eq!(
            parse(&["--frobnicate"]),
            Err(ConfigError::UnknownArgument("--frobnicate".to_string()))
        );
        assert!(matches!(
            parse(&["--strategy", "nine"]),
            Err(ConfigError::InvalidStrategy(_))
        ));
    }

    #[test]
    fn test_seed_for_run() {
        let config = SimConfig {
            seed: Some(100),
            ..Default::default()
        };
        assert_eq!(config.seed_for_run(0), Some(100));
        assert_eq!(config.seed_for_run(3), Some(103));
        assert_eq!(SimConfig::default().seed_for_run(3), None);
    }
}
