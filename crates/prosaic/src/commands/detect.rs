//! Detect command: machine-generated style score (0-100).

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use prosaic_core::detection::{self, DetectionDetails, DetectionReport, Severity};

use super::read_prose;

/// Arguments for the `detect` subcommand.
#[derive(Args, Debug)]
pub struct DetectArgs {
    /// File to analyze (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Exit with an error when the score is above this value.
    #[arg(long, value_name = "SCORE")]
    pub fail_above: Option<u8>,
}

/// Score a file for machine-generated style.
#[instrument(name = "cmd_detect", skip_all, fields(file = %args.file))]
pub fn cmd_detect(
    args: DetectArgs,
    global_json: bool,
    flag_threshold: u8,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, fail_above = ?args.fail_above, "executing detect command");

    let content = read_prose(&args.file, max_input_bytes)?;
    let report = detection::detect(&content);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, flag_threshold);
    }

    if let Some(max) = args.fail_above
        && report.score > max
    {
        bail!(
            "{} scores {} (max: {max}). Rewrite with `prosaic humanize`.",
            args.file,
            report.score,
        );
    }

    Ok(())
}

fn print_report(report: &DetectionReport, flag_threshold: u8) {
    let Some(details) = report.details.as_ref() else {
        println!("{}", report.label.label().dimmed());
        return;
    };

    println!(
        "{}  {} ({} confidence)",
        colored_score(report.score, report.color_class),
        report.label.label().bold(),
        report.confidence.label(),
    );
    if report.score > flag_threshold {
        println!("{}", "AI detected, humanize recommended".yellow());
    }

    print_details(details);
}

fn colored_score(score: u8, severity: Severity) -> String {
    let text = format!("{score}/100");
    match severity {
        Severity::High => text.red().bold().to_string(),
        Severity::Medium => text.yellow().bold().to_string(),
        Severity::Low | Severity::VeryLow => text.green().bold().to_string(),
    }
}

fn print_details(details: &DetectionDetails) {
    println!();
    println!("{}", "Features".bold().underline());
    let rows = [
        ("Perplexity", details.perplexity),
        ("Burstiness", details.burstiness),
        ("Lexical diversity", details.lexical_diversity),
        ("Syntax complexity", details.syntax_complexity),
        ("Transitions /100w", details.transition_score),
        ("Punctuation regularity", details.punctuation_regularity),
        ("Semantic coherence", details.semantic_coherence),
        ("N-gram predictability", details.ngram_predictability),
    ];
    for (label, value) in rows {
        println!("  {:<24}{value}", format!("{label}:").dimmed());
    }

    println!();
    println!("{}", "Statistics".bold().underline());
    println!("  {:<24}{}", "Sentences:".dimmed(), details.sentence_count);
    println!("  {:<24}{}", "Words:".dimmed(), details.word_count);
    println!(
        "  {:<24}{}",
        "Avg sentence length:".dimmed(),
        details.avg_sentence_length
    );

    println!();
    println!("{}", "Score breakdown".bold().underline());
    for term in &details.contributions {
        println!(
            "  {:<24}{:>5.1} / {:.0}",
            format!("{}:", term.feature).dimmed(),
            term.points,
            term.max_points,
        );
    }
}
