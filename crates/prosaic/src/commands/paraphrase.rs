//! Paraphrase command: rewrite a text in a tone.

use camino::Utf8PathBuf;
use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use prosaic_core::{Language, Tone, detect_language, rewrite};

use super::{RewriteRng, read_prose};

/// Arguments for the `paraphrase` subcommand.
#[derive(Args, Debug)]
pub struct ParaphraseArgs {
    /// File to rewrite (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Target tone (default from config, else casual).
    #[arg(short, long, value_enum)]
    pub tone: Option<Tone>,

    /// Seed for a reproducible rewrite.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Serialize)]
struct ParaphraseOutput {
    language: Language,
    tone: Tone,
    text: String,
}

/// Rewrite a file in the requested tone and print the result.
#[instrument(name = "cmd_paraphrase", skip_all, fields(file = %args.file))]
pub fn cmd_paraphrase(
    args: ParaphraseArgs,
    global_json: bool,
    config_tone: Tone,
    config_seed: Option<u64>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let tone = args.tone.unwrap_or(config_tone);
    let seed = args.seed.or(config_seed);
    debug!(file = %args.file, tone = %tone, seed = ?seed, "executing paraphrase command");

    let content = read_prose(&args.file, max_input_bytes)?;
    let language = detect_language(&content);
    let mut rng = RewriteRng::from_seed(seed);
    let text = rewrite::paraphrase_as(&content, tone, language, rng.as_dyn());

    if global_json {
        let output = ParaphraseOutput {
            language,
            tone,
            text,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{text}");
    }

    Ok(())
}
