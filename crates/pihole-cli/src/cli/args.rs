//! Command-line argument definitions using clap.

use clap::Parser;
use pihole_core::BlockingDuration;
use std::path::PathBuf;

/// Temporarily disable Pi-hole DNS blocking
///
/// Prompts for the web interface password, logs in and turns blocking off
/// for DURATION. Blocking turns itself back on when the timer runs out.
#[derive(Parser, Debug)]
#[command(name = "pihole-pause")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// How long to disable blocking, e.g. 30s, 5m, 1h30m [default: 1m]
    pub duration: Option<BlockingDuration>,

    /// Pi-hole base URL [default: http://pi.hole]
    #[arg(short, long, env = "PIHOLE_URL")]
    pub url: Option<String>,

    /// Per-request transport timeout in seconds [default: 30]
    #[arg(
        long,
        env = "PIHOLE_TIMEOUT",
        value_name = "SECONDS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: Option<u64>,

    /// Config file to use instead of the platform default
    #[arg(short, long, env = "PIHOLE_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Password for non-interactive use; prompts when absent
    #[arg(long, env = "PIHOLE_PASSWORD", hide = true, hide_env_values = true)]
    pub password: Option<String>,

    /// Increase verbosity
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["pihole-pause"]).unwrap();
        assert!(cli.duration.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_duration_argument() {
        let cli = Cli::try_parse_from(["pihole-pause", "2m"]).unwrap();
        assert_eq!(cli.duration.map(BlockingDuration::as_secs), Some(120));
    }

    #[test]
    fn test_rejects_two_durations() {
        let err = Cli::try_parse_from(["pihole-pause", "1m", "2m"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_timeout_must_be_positive() {
        let err = Cli::try_parse_from(["pihole-pause", "--timeout", "0"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);

        let cli = Cli::try_parse_from(["pihole-pause", "--timeout", "1"]).unwrap();
        assert_eq!(cli.timeout, Some(1));
    }

    #[test]
    fn test_rejects_bad_duration() {
        let err = Cli::try_parse_from(["pihole-pause", "soon"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}
