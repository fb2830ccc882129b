//! Info command: package metadata plus the settings this run resolved.

use std::fmt::Display;

use clap::Args;
use owo_colors::OwoColorize;
use prosaic_core::Tone;
use prosaic_core::config::{Config, ConfigSources};
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

const PACKAGE: PackageInfo = PackageInfo {
    name: env!("CARGO_PKG_NAME"),
    version: env!("CARGO_PKG_VERSION"),
    description: env!("CARGO_PKG_DESCRIPTION"),
    repository: env!("CARGO_PKG_REPOSITORY"),
    license: env!("CARGO_PKG_LICENSE"),
};

/// Effective settings, after every config source and env override.
#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    tone: Tone,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    flag_threshold: u8,
    pass_threshold: u8,
    max_passes: u32,
    /// Absent when the limit is disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
}

impl ConfigInfo {
    fn new(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(ToString::to_string),
            log_level: config.log_level.as_str(),
            log_dir: config.log_dir.as_ref().map(ToString::to_string),
            tone: config.tone,
            seed: config.seed,
            flag_threshold: config.flag_threshold,
            pass_threshold: config.pass_threshold,
            max_passes: config.max_passes,
            max_input_bytes: config.input_limit(),
        }
    }
}

#[derive(Serialize)]
struct InfoReport {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package metadata and resolved settings, as text or JSON.
#[instrument(name = "cmd_info", skip_all)]
pub fn cmd_info(
    _args: InfoArgs,
    json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json, "executing info command");
    let report = InfoReport {
        package: PACKAGE,
        config: ConfigInfo::new(config, sources),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text(&report);
    }
    Ok(())
}

fn print_text(report: &InfoReport) {
    let InfoReport { package, config } = report;

    println!("{} {}", package.name.bold(), package.version.green());
    if !package.description.is_empty() {
        println!("{}", package.description);
    }
    for (label, value) in [("License", package.license), ("Repository", package.repository)] {
        if !value.is_empty() {
            field(label, value.cyan());
        }
    }

    heading("Configuration");
    match &config.config_file {
        Some(path) => field("Config file", path.cyan()),
        None => field("Config file", "none loaded".yellow()),
    }
    field("Log level", config.log_level);
    if let Some(dir) = &config.log_dir {
        field("Log directory", dir);
    }

    heading("Rewriting");
    field("Tone", config.tone);
    match config.seed {
        Some(seed) => field("Seed", seed),
        None => field("Seed", "random".dimmed()),
    }
    field("Max passes", config.max_passes);

    heading("Thresholds");
    field("Flag", format_args!("above {}", config.flag_threshold));
    field("Pass", format_args!("below {}", config.pass_threshold));
    match config.max_input_bytes {
        Some(max) => field("Input limit", format_args!("{max} bytes")),
        None => field("Input limit", "disabled".yellow()),
    }
}

fn heading(title: &str) {
    println!();
    println!("{}", title.bold().underline());
}

fn field(label: &str, value: impl Display) {
    println!("{}: {value}", label.dimmed());
}
