// Output formatting for the `illish` binary.
//
// Builds the text the CLI prints (or writes with `--output`) from converted
// words and lexeme batches. Kept apart from `main.rs` so the formats can be
// tested without touching stdin/stdout.

use std::fmt::Write as _;

use illish_lang::{BatchSummary, LexemeConversion, WordAnalysis};
use serde::Serialize;

/// One converted command-line input.
#[derive(Debug, Clone, Serialize)]
pub struct WordRecord {
    /// The input exactly as given.
    pub input: String,
    /// The IPA that was converted; `None` when `--from-text` found nothing.
    pub ipa: Option<String>,
    pub illish: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<WordAnalysis>,
}

/// JSON shape of a converted lexeme batch.
#[derive(Debug, Serialize)]
pub struct BatchReport<'a> {
    pub summary: BatchSummary,
    pub lexemes: &'a [LexemeConversion],
}

/// `input<TAB>illish` per line; an unconverted input has an empty column.
pub fn plain_lines(records: &[WordRecord]) -> String {
    let mut out = String::new();
    for record in records {
        let illish = record.illish.as_deref().unwrap_or("");
        let _ = writeln!(out, "{}\t{}", record.input, illish);
    }
    out
}

/// Human-readable stage breakdown of each word.
pub fn explain_lines(records: &[WordRecord]) -> String {
    let mut out = String::new();
    for record in records {
        let Some(analysis) = &record.analysis else {
            let _ = writeln!(out, "{}: no transcription found", record.input);
            continue;
        };
        let _ = writeln!(out, "{} -> {}", record.input, analysis.illish);
        let _ = writeln!(out, "  normalized: {}", analysis.normalized);
        for (i, syl) in analysis.syllables.iter().enumerate() {
            let coda = match syl.coda.symbol.as_str() {
                "" => "∅",
                s => s,
            };
            // Only the first vowel of a diphthong survives rendering.
            let nucleus_note = if syl.syllable.is_diphthong() {
                " (diphthong)"
            } else {
                ""
            };
            let _ = writeln!(
                out,
                "  [{}] {}|{}|{}{}  onset={} class={:?} tone={:?} long={} nasal={} coda={} -> {}",
                i + 1,
                syl.syllable.onset,
                syl.syllable.nucleus,
                syl.syllable.coda,
                nucleus_note,
                syl.onset,
                syl.coda_class,
                syl.tone,
                syl.vowel.long,
                syl.vowel.nasalized,
                coda,
                syl.rendered,
            );
        }
        if let Some(repair) = &analysis.repair {
            let _ = writeln!(out, "  repair: {repair}");
        }
    }
    out
}

pub fn summary_line(summary: &BatchSummary) -> String {
    format!(
        "{} lexemes: {} converted, {} without IPA",
        summary.total, summary.converted, summary.skipped
    )
}
