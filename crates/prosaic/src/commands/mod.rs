//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;
use prosaic_core::markdown;
use rand::SeedableRng;
use rand::rngs::ThreadRng;
use rand_chacha::ChaCha8Rng;

pub mod detect;
pub mod humanize;
pub mod info;
pub mod language;
pub mod paraphrase;
#[cfg(feature = "mcp")]
pub mod serve;

/// Path argument that means "read standard input".
pub const STDIN_PATH: &str = "-";

/// Read a file and validate its size against the configured limit.
///
/// `-` reads standard input instead; its size is checked after reading.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    if path.as_str() == STDIN_PATH {
        let mut content = String::new();
        std::io::stdin()
            .lock()
            .read_to_string(&mut content)
            .context("failed to read standard input")?;
        if let Some(max) = max_bytes
            && content.len() > max
        {
            anyhow::bail!(
                "input too large: stdin is {} bytes (limit: {max} bytes)",
                content.len()
            );
        }
        return Ok(content);
    }

    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Read the prose to analyze: markdown files are stripped to their prose.
pub fn read_prose(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let content = read_input_file(path, max_bytes)?;
    if is_markdown(path) {
        Ok(markdown::strip_to_prose(&content))
    } else {
        Ok(content)
    }
}

fn is_markdown(path: &Utf8Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md") || ext.eq_ignore_ascii_case("markdown"))
}

/// Random source for the rewrite engine: seeded when a seed is given.
pub enum RewriteRng {
    /// Reproducible stream from a fixed seed.
    Seeded(ChaCha8Rng),
    /// The thread-local generator.
    Thread(ThreadRng),
}

impl RewriteRng {
    /// Seeded when `seed` is set, thread-local otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::Seeded(ChaCha8Rng::seed_from_u64(seed)),
            None => Self::Thread(rand::rng()),
        }
    }

    /// The generator as a trait object.
    pub fn as_dyn(&mut self) -> &mut dyn rand::RngCore {
        match self {
            Self::Seeded(rng) => rng,
            Self::Thread(rng) => rng,
        }
    }
}
