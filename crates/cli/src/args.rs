//! Command line arguments

use std::path::PathBuf;

use chrono::Weekday;
use clap::Parser;
use geofleet_domain::{Config, RemovalPolicy, ReportFormat};

/// Estimate weekly business hours without geofence coverage as vehicles
/// are sold
#[derive(Parser, Debug)]
#[command(name = "geofleet")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Presence export (CSV with header: vehicle id, enter time, exit time);
    /// `-` reads standard input
    pub input: PathBuf,

    /// Config file (TOML or JSON); searched for in standard locations when omitted
    #[arg(long, short = 'c', env = "GEOFLEET_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', default_value = "text")]
    pub format: ReportFormat,

    /// Sell order: first_appearance, ascending_id, descending_id or
    /// explicit:<id>,<id>,...
    #[arg(long)]
    pub removal_policy: Option<RemovalPolicy>,

    /// First weekday of a week (mon, sun, ...)
    #[arg(long)]
    pub week_start: Option<Weekday>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Whether the input should be read from standard input
    pub fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == "-"
    }

    /// Command line flags take precedence over file and environment values
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(policy) = &self.removal_policy {
            config.analysis.removal_policy = policy.clone();
        }
        if let Some(day) = self.week_start {
            config.analysis.week_start = day;
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use geofleet_domain::VehicleId;

    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_minimal_invocation() {
        let cli = Cli::try_parse_from(["geofleet", "presence.csv"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("presence.csv"));
        assert_eq!(cli.format, ReportFormat::Text);
        assert!(cli.removal_policy.is_none());
        assert_eq!(cli.verbose, 0);
        assert!(!cli.reads_stdin());
    }

    #[test]
    fn parses_overrides() {
        let cli = Cli::try_parse_from([
            "geofleet",
            "-",
            "--format",
            "json",
            "--removal-policy",
            "explicit:3,1",
            "--week-start",
            "sunday",
            "-vv",
        ])
        .unwrap();

        assert!(cli.reads_stdin());
        assert_eq!(cli.format, ReportFormat::Json);
        assert_eq!(cli.verbose, 2);

        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(
            config.analysis.removal_policy,
            RemovalPolicy::Explicit(vec![VehicleId(3), VehicleId(1)])
        );
        assert_eq!(config.analysis.week_start, Weekday::Sun);
    }

    #[test]
    fn rejects_unknown_policy() {
        let result = Cli::try_parse_from(["geofleet", "x.csv", "--removal-policy", "random"]);
        assert!(result.is_err());
    }
}
