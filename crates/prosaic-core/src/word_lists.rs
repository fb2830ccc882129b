//! Curated bilingual word lists for detection.
//!
//! Function-word keywords for language identification, clause-joining
//! conjunctions, formal discourse connectors, and stock phrases that
//! generated prose leans on. Rewrite tables live in [`crate::rewrite::profiles`].

use std::collections::HashSet;
use std::sync::LazyLock;

/// Indonesian function words used to identify Indonesian text.
pub static INDONESIAN_KEYWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "yang", "dan", "ini", "untuk", "dengan", "pada", "adalah", "dari", "dalam", "tidak",
        "akan", "atau", "dapat", "di", "ke", "oleh", "sebagai", "tersebut", "juga",
    ]
    .into_iter()
    .collect()
});

/// English function words used to identify English text.
pub static ENGLISH_KEYWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "and", "is", "in", "to", "of", "for", "with", "that", "this", "it", "on", "are",
        "was", "be", "have", "has",
    ]
    .into_iter()
    .collect()
});

/// Conjunctions counted as clause joins by the syntax-complexity feature.
pub const CONJUNCTIONS: &[&str] = &[
    "and", "but", "or", "because", "although", "while", "if", "when", "dan", "atau", "tetapi",
    "karena", "meskipun",
];

/// Formal discourse connectors, single words and multi-word phrases.
pub const TRANSITIONS: &[&str] = &[
    "however",
    "moreover",
    "furthermore",
    "additionally",
    "consequently",
    "therefore",
    "thus",
    "hence",
    "nevertheless",
    "nonetheless",
    "in conclusion",
    "to summarize",
    "in summary",
    "on the other hand",
    "namun",
    "selain itu",
    "oleh karena itu",
    "dengan demikian",
    "kesimpulannya",
];

/// Stock phrases that generated prose reaches for.
pub const STOCK_PHRASES: &[&str] = &[
    "it is important to note",
    "in today's world",
    "plays a crucial role",
    "it is worth noting",
    "in recent years",
    "has become increasingly",
    "in this essay",
    "in this article",
    "delve into",
    "shed light on",
    "penting untuk dicatat",
    "di dunia saat ini",
    "memainkan peran penting",
    "perlu dicatat",
    "dalam beberapa tahun terakhir",
    "semakin meningkat",
];
