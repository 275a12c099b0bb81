//! Command line arguments.
//!
//! Flags given here override the configuration file.

use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

/// A keypress-at-a-time desktop calculator for the terminal.
///
/// Buttons: digits, '.', + - * /, '=' (equals), '!' (negate), '%' (percent),
/// 'c' (clear). Several buttons can be typed on one line.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Legacy debug switch: "true" (any case) enables debug mode
    #[arg(value_name = "DEBUG")]
    pub legacy_debug: Option<String>,

    /// Print commands and memory snapshots after every line
    #[arg(short, long)]
    pub debug: bool,

    /// Configuration file (default: <config dir>/keycalc/config.toml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Do not print the greeting
    #[arg(long)]
    pub no_banner: bool,
}

impl Args {
    /// Whether debug mode was requested on the command line.
    pub fn debug_requested(&self) -> bool {
        self.debug
            || self
                .legacy_debug
                .as_deref()
                .is_some_and(|value| value.eq_ignore_ascii_case("true"))
    }

    /// Apply command line overrides on top of file configuration.
    pub fn apply_to(&self, config: &mut Config) {
        if self.debug_requested() {
            config.debug = true;
        }
        if self.no_banner {
            config.banner = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("keycalc").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert!(!args.debug_requested());
        assert!(args.config.is_none());
        assert!(!args.no_banner);
    }

    #[test]
    fn test_debug_flag() {
        assert!(parse(&["--debug"]).debug_requested());
        assert!(parse(&["-d"]).debug_requested());
    }

    #[test]
    fn test_legacy_debug_argument() {
        assert!(parse(&["true"]).debug_requested());
        assert!(parse(&["TRUE"]).debug_requested());
        assert!(!parse(&["false"]).debug_requested());
        assert!(!parse(&["yes"]).debug_requested());
    }

    #[test]
    fn test_overrides() {
        let mut config = Config::default();
        parse(&["--no-banner", "-d"]).apply_to(&mut config);
        assert!(config.debug);
        assert!(!config.banner);

        let mut config = Config {
            debug: true,
            ..Config::default()
        };
        parse(&[]).apply_to(&mut config);
        assert!(config.debug);
    }

    #[test]
    fn test_config_path() {
        let args = parse(&["--config", "/tmp/calc.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/calc.toml")));
    }
}
