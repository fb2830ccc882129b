//! Humanize command: detect, rewrite, and re-detect.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use prosaic_core::humanize::{self, HumanizeOutcome};
use prosaic_core::{Config, Tone};

use super::{RewriteRng, read_prose};

/// Arguments for the `humanize` subcommand.
#[derive(Args, Debug)]
pub struct HumanizeArgs {
    /// File to humanize (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Target tone (default from config, else casual).
    #[arg(short, long, value_enum)]
    pub tone: Option<Tone>,

    /// Seed for a reproducible rewrite.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Maximum rewrite passes.
    #[arg(long, value_name = "N")]
    pub max_passes: Option<u32>,
}

/// Run the humanize workflow on a file and print before/after scores.
#[instrument(name = "cmd_humanize", skip_all, fields(file = %args.file))]
pub fn cmd_humanize(
    args: HumanizeArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let mut options = config.humanize_options(args.tone);
    if let Some(passes) = args.max_passes {
        options.max_passes = passes;
    }
    let seed = args.seed.or(config.seed);
    debug!(
        file = %args.file,
        tone = %options.tone,
        max_passes = options.max_passes,
        seed = ?seed,
        "executing humanize command"
    );

    let content = read_prose(&args.file, max_input_bytes)?;
    let mut rng = RewriteRng::from_seed(seed);
    let outcome = humanize::humanize(&content, &options, rng.as_dyn());

    if global_json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_outcome(&outcome);
    }

    Ok(())
}

fn print_outcome(outcome: &HumanizeOutcome) {
    if outcome.before.is_insufficient() {
        println!("{}", outcome.before.label.label().dimmed());
        return;
    }

    println!(
        "{}: {} ({})",
        "Before".dimmed(),
        outcome.before.score,
        outcome.before.label
    );
    println!(
        "{}: {} ({})",
        "After".dimmed(),
        outcome.after.score,
        outcome.after.label
    );
    println!(
        "{}: {}  {}: {}  {}: {}",
        "Language".dimmed(),
        outcome.language.name(),
        "Tone".dimmed(),
        outcome.tone,
        "Passes".dimmed(),
        outcome.passes,
    );
    if outcome.flagged {
        println!("{}", "AI detected, humanize recommended".yellow());
    }
    if outcome.passed {
        println!("{} rewrite scores below the pass threshold", "PASS:".green());
    } else {
        println!("{} rewrite still reads as generated", "WARN:".yellow());
    }

    println!();
    println!("{}", outcome.rewritten);
}
