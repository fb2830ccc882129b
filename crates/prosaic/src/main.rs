//! prosaic CLI
#![deny(unsafe_code)]

use anyhow::{Context, anyhow};
use camino::Utf8PathBuf;
use clap::Parser;
use prosaic::{Cli, Commands, commands};
use prosaic_core::config::{Config, ConfigLoader, ConfigSources};
use tracing::debug;

mod observability;

fn main() -> anyhow::Result<()> {
    let mut cli = Cli::parse();
    cli.color.apply();

    if cli.version_only {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    // arg_required_else_help leaves only --version-only without a command.
    let Some(command) = cli.command.take() else {
        return Ok(());
    };

    if let Some(dir) = &cli.chdir {
        std::env::set_current_dir(dir)
            .with_context(|| format!("failed to change directory to {}", dir.display()))?;
    }
    let (config, sources) = load_config(&cli).context("failed to load configuration")?;

    let log_dir = config.log_dir.clone().map(Utf8PathBuf::into_std_path_buf);
    let obs = observability::ObservabilityConfig::from_env_with_overrides(log_dir);
    let filter = observability::env_filter(cli.quiet, cli.verbose, config.log_level.as_str());
    let _guard = observability::init_observability(&obs, filter, cli.quiet, cli.verbose)
        .context("failed to initialize logging")?;
    debug!(verbose = cli.verbose, json = cli.json, color = ?cli.color, "CLI initialized");

    let result = run(command, cli.json, config, &sources);
    if let Err(err) = &result {
        tracing::error!(error = %err, "fatal error");
    }
    result
}

fn load_config(cli: &Cli) -> anyhow::Result<(Config, ConfigSources)> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let cwd = utf8(cwd, "current directory")?;
    let mut loader = ConfigLoader::new().with_project_search(&cwd);
    if let Some(path) = &cli.config {
        loader = loader.with_file(utf8(path.clone(), "config path")?);
    }
    Ok(loader.load()?)
}

fn utf8(path: std::path::PathBuf, what: &str) -> anyhow::Result<Utf8PathBuf> {
    Utf8PathBuf::try_from(path)
        .map_err(|e| anyhow!("{what} is not valid UTF-8: {}", e.into_path_buf().display()))
}

fn run(
    command: Commands,
    json: bool,
    config: Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    let max_input = config.input_limit();
    match command {
        Commands::Detect(args) => {
            commands::detect::cmd_detect(args, json, config.flag_threshold, max_input)
        }
        Commands::Paraphrase(args) => {
            commands::paraphrase::cmd_paraphrase(args, json, config.tone, config.seed, max_input)
        }
        Commands::Humanize(args) => commands::humanize::cmd_humanize(args, json, &config, max_input),
        Commands::Language(args) => commands::language::cmd_language(args, json, max_input),
        Commands::Info(args) => commands::info::cmd_info(args, json, &config, sources),
        #[cfg(feature = "mcp")]
        Commands::Serve(args) => tokio::runtime::Runtime::new()
            .context("failed to create async runtime for MCP server")?
            .block_on(commands::serve::cmd_serve(args, max_input, config)),
    }
}
