//! `geofleet` - fleet divestment coverage analysis
//!
//! Reads a geofence presence export, evaluates every number of vehicles
//! sold from zero to the whole fleet, and prints the average weekly
//! business hours with no vehicle inside the geofence.

mod args;
mod exit_codes;
mod logging;

use std::io::{Read, Write};

use anyhow::Context;
use clap::Parser;
use geofleet_core::{PresenceSource, UnavailabilityAnalysis};
use geofleet_domain::{Config, GeofleetError, LoggingConfig};
use geofleet_infra::{config, render, CsvPresenceSource};

use crate::args::Cli;
use crate::exit_codes::ExitCode;

fn main() {
    let cli = Cli::parse();

    let exit_code = match run(&cli) {
        Ok(()) => ExitCode::Success,
        Err(err) => report_failure(&cli, &err),
    };

    std::process::exit(exit_code.as_i32());
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli)?;
    logging::init(&config.logging, cli.verbose);

    let source = open_source(cli)?;
    let analysis = UnavailabilityAnalysis::new(config.analysis)?;

    let span = tracing::info_span!("geofleet", input = %source.describe(), format = %cli.format);
    let _guard = span.enter();

    let report = analysis
        .run_from(&source)
        .with_context(|| format!("failed to analyse {}", source.describe()))?;
    let rendered = render(&report, cli.format)?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(rendered.as_bytes()).context("failed to write report")?;
    handle.flush().context("failed to write report")?;
    Ok(())
}

/// File, environment, then command line, validated once at the end
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = config::load_unvalidated(cli.config.clone())?;
    cli.apply_overrides(&mut config);
    geofleet_core::validate_config(&config)?;
    Ok(config)
}

fn open_source(cli: &Cli) -> anyhow::Result<CsvPresenceSource> {
    if cli.reads_stdin() {
        let mut contents = String::new();
        std::io::stdin()
            .read_to_string(&mut contents)
            .map_err(|e| GeofleetError::InvalidInput(format!("failed to read stdin: {e}")))?;
        Ok(CsvPresenceSource::from_text("stdin", contents))
    } else {
        Ok(CsvPresenceSource::from_path(&cli.input))
    }
}

fn report_failure(cli: &Cli, err: &anyhow::Error) -> ExitCode {
    // Config errors can happen before logging is configured
    logging::init(&LoggingConfig::default(), cli.verbose);

    match err.downcast_ref::<GeofleetError>() {
        Some(domain) => {
            logging::log_failure(domain, "geofleet");
            tracing::debug!(error_type = logging::error_label(domain), "exiting on error");
            eprintln!("error: {err:#}");
            ExitCode::for_error(domain)
        }
        None => {
            tracing::error!(error = %err, "unexpected failure");
            eprintln!("error: {err:#}");
            ExitCode::Failure
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;
    use geofleet_domain::RemovalPolicy;

    use super::*;

    fn write_config(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("geofleet-cli-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn load_config_applies_flags_over_file() {
        let path = write_config("valid.toml", "[analysis]\nremoval_policy = \"descending_id\"\n");
        let cli = Cli::try_parse_from([
            "geofleet",
            "presence.csv",
            "--config",
            path.to_str().unwrap(),
            "--removal-policy",
            "ascending_id",
            "--week-start",
            "sun",
        ])
        .unwrap();

        let result = load_config(&cli);
        std::fs::remove_file(path).ok();

        let config = result.unwrap();
        assert_eq!(config.analysis.removal_policy, RemovalPolicy::AscendingId);
        assert_eq!(config.analysis.week_start, Weekday::Sun);
    }

    #[test]
    fn load_config_rejects_invalid_file_as_config_error() {
        let path = write_config("invalid.toml", "[analysis]\nsample_minutes = 0\n");
        let cli =
            Cli::try_parse_from(["geofleet", "presence.csv", "--config", path.to_str().unwrap()])
                .unwrap();

        let result = load_config(&cli);
        std::fs::remove_file(path).ok();

        let err = result.unwrap_err();
        let domain = err.downcast_ref::<GeofleetError>().unwrap();
        assert!(matches!(domain, GeofleetError::Config(m) if m.contains("analysis.sample_minutes")));
        assert_eq!(ExitCode::for_error(domain), ExitCode::Config);
    }
}
