//! Static rewrite tables, keyed by language then tone.
//!
//! Each (language, tone) pair resolves to one [`ToneProfile`]. The tables are
//! plain data; the transform code in [`super::structure`] and
//! [`super::synonyms`] never names a word directly.

use super::Tone;
use crate::language::Language;

/// The rule bundle for one (language, tone) pair.
#[derive(Debug)]
pub struct ToneProfile {
    /// Sentence prefixes: formal connectors or business preambles.
    pub prefixes: &'static [&'static str],
    /// Filler words spliced into casual sentences.
    pub fillers: &'static [&'static str],
    /// Base word to candidate replacements, in application order.
    pub synonyms: &'static [(&'static str, &'static [&'static str])],
    /// Deterministic whole-word replacements.
    pub substitutions: &'static [(&'static str, &'static str)],
}

/// All tone profiles for one language.
///
/// Formal has no profile of its own: it borrows the academic connectors for
/// its structural transform and the casual synonyms for word replacement.
#[derive(Debug)]
pub struct LanguageTables {
    /// Academic profile; also formal's structural transform.
    pub academic: ToneProfile,
    /// Business profile.
    pub business: ToneProfile,
    /// Casual profile; also formal's synonyms.
    pub casual: ToneProfile,
}

impl LanguageTables {
    /// Prefixes, fillers and substitutions for the structural transform.
    pub const fn structure_for(&self, tone: Tone) -> &ToneProfile {
        match tone {
            Tone::Academic | Tone::Formal => &self.academic,
            Tone::Business => &self.business,
            Tone::Casual => &self.casual,
        }
    }

    /// Synonym table for `tone`. Only academic and business have dedicated
    /// tables; formal and casual use the casual one.
    pub const fn synonyms_for(&self, tone: Tone) -> &ToneProfile {
        match tone {
            Tone::Academic => &self.academic,
            Tone::Business => &self.business,
            Tone::Formal | Tone::Casual => &self.casual,
        }
    }
}

/// Tables for `language`.
pub fn tables(language: Language) -> &'static LanguageTables {
    match language {
        Language::English => &ENGLISH,
        Language::Indonesian => &INDONESIAN,
    }
}

/// Shorthand for `tables(language).structure_for(tone)`.
pub fn structure_profile(language: Language, tone: Tone) -> &'static ToneProfile {
    tables(language).structure_for(tone)
}

/// Shorthand for `tables(language).synonyms_for(tone)`.
pub fn synonym_profile(language: Language, tone: Tone) -> &'static ToneProfile {
    tables(language).synonyms_for(tone)
}

/// Every base word and substitution source across all tables.
pub fn all_base_words() -> impl Iterator<Item = &'static str> {
    [&ENGLISH, &INDONESIAN]
        .into_iter()
        .flat_map(|t| [&t.academic, &t.business, &t.casual])
        .flat_map(|p| {
            p.synonyms
                .iter()
                .map(|(word, _)| *word)
                .chain(p.substitutions.iter().map(|(from, _)| *from))
        })
}

static ENGLISH: LanguageTables = LanguageTables {
    academic: ToneProfile {
        prefixes: &["Furthermore,", "Additionally,", "Moreover,", "Consequently,"],
        fillers: &[],
        synonyms: &[
            ("important", &["significant", "crucial", "essential", "fundamental"]),
            ("show", &["demonstrate", "indicate", "illustrate", "exhibit"]),
            ("many", &["numerous", "various", "multiple", "several"]),
            ("because", &["due to", "owing to", "as a result of"]),
            ("but", &["however", "nevertheless", "nonetheless"]),
        ],
        substitutions: &[],
    },
    business: ToneProfile {
        prefixes: &[
            "Please note that",
            "We would like to inform you that",
            "It is important to highlight that",
        ],
        fillers: &[],
        synonyms: &[
            ("important", &["critical", "key", "strategic", "essential"]),
            ("good", &["optimal", "effective", "beneficial", "advantageous"]),
            ("need", &["require", "necessitate", "demand"]),
            ("help", &["assist", "facilitate", "support", "enable"]),
        ],
        substitutions: &[("maybe", "will"), ("probably", "is expected to")],
    },
    casual: ToneProfile {
        prefixes: &[],
        fillers: &["basically", "actually", "you know", "I mean", "like", "well"],
        synonyms: &[
            ("important", &["crucial", "key", "big", "major"]),
            ("very", &["really", "super", "pretty", "quite"]),
            ("good", &["great", "solid", "nice", "decent"]),
            ("many", &["lots of", "tons of", "plenty of"]),
        ],
        substitutions: &[],
    },
};

static INDONESIAN: LanguageTables = LanguageTables {
    academic: ToneProfile {
        prefixes: &[
            "Berdasarkan hal tersebut,",
            "Dengan demikian,",
            "Selanjutnya,",
            "Terkait dengan hal ini,",
        ],
        fillers: &[],
        synonyms: &[
            ("penting", &["krusial", "esensial", "fundamental", "signifikan"]),
            ("banyak", &["sejumlah besar", "beragam", "berbagai macam"]),
            (
                "menunjukkan",
                &["mengindikasikan", "memperlihatkan", "mendemonstrasikan"],
            ),
            ("karena", &["dikarenakan", "disebabkan oleh", "mengingat"]),
            ("tapi", &["namun demikian", "akan tetapi", "meskipun begitu"]),
            ("bagus", &["baik", "positif", "menguntungkan"]),
        ],
        substitutions: &[],
    },
    business: ToneProfile {
        prefixes: &[
            "Perlu diperhatikan bahwa",
            "Dengan ini kami sampaikan bahwa",
            "Kami informasikan bahwa",
        ],
        fillers: &[],
        synonyms: &[
            ("penting", &["krusial", "vital", "strategis"]),
            ("baik", &["optimal", "efektif", "menguntungkan"]),
            ("banyak", &["signifikan", "substantial", "considerable"]),
            ("butuh", &["memerlukan", "mengharuskan", "membutuhkan"]),
            ("dapat", &["mampu", "sanggup", "berkemampuan untuk"]),
        ],
        substitutions: &[("mungkin", "akan"), ("kira-kira", "diperkirakan")],
    },
    casual: ToneProfile {
        prefixes: &[],
        fillers: &["sebenarnya", "jujur aja", "ya", "sih", "kok", "kan"],
        synonyms: &[
            ("penting", &["penting banget", "krusial", "vital"]),
            ("sangat", &["amat", "banget", "benar-benar"]),
            ("baik", &["bagus", "oke", "mantap"]),
            ("banyak", &["banyak banget", "segudang", "berlimpah"]),
        ],
        substitutions: &[],
    },
};
