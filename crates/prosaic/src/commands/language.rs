//! Language command: Indonesian or English.

use camino::Utf8PathBuf;
use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use prosaic_core::language::{self, Language};

use super::read_prose;

/// Arguments for the `language` subcommand.
#[derive(Args, Debug)]
pub struct LanguageArgs {
    /// File to inspect (`-` for stdin).
    pub file: Utf8PathBuf,
}

#[derive(Serialize)]
struct LanguageOutput {
    language: Language,
    name: &'static str,
    indonesian_votes: usize,
    english_votes: usize,
}

/// Print the detected language of a file.
#[instrument(name = "cmd_language", skip_all, fields(file = %args.file))]
pub fn cmd_language(
    args: LanguageArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing language command");

    let content = read_prose(&args.file, max_input_bytes)?;
    let votes = language::count_votes(&content);
    let detected = votes.winner();

    if global_json {
        let output = LanguageOutput {
            language: detected,
            name: detected.name(),
            indonesian_votes: votes.indonesian,
            english_votes: votes.english,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", detected.code());
    }

    Ok(())
}
