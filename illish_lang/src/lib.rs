// Illish phonology crate: English IPA in, Illish orthography out.
//
// Converts an English IPA transcription (e.g. `/ˈkɛpt/`) into Illish, a
// tonal constructed language with a restricted coda inventory. The engine is
// a fixed, linear pipeline run once per word:
//
//   normalize → syllabify → simplify onset → classify coda → assign tone
//   → resolve vowel length/nasalization → reduce coda → render
//
// Architecture:
// - `types.rs`: Core types — `Syllable`, `CodaClass`, `ToneCategory`,
//   `IllishCoda`, `VowelShape`, and the `WordAnalysis` record
// - `inventory.rs`: Fixed phoneme tables (vowels, consonant classes,
//   superclusters) and membership predicates
// - `syllable.rs`: Normalizer, syllabifier, onset simplifier
// - `coda.rs`: Coda classifier, tone assigner, vowel resolver, coda reducer
// - `render.rs`: Syllable assembly and the word-final rising-tone repair
// - `config.rs`: `ConverterConfig` rule switches (canonical vs. legacy rules)
// - `transcription.rs`: Pulls `/…/` IPA spans out of free text
// - `lexeme.rs`: JSON lexeme batches converted in one pass
// - `error.rs`: `IllishError` for config/batch loading
// - `lib.rs` (this file): `Converter`, which runs the pipeline
//
// The engine never fails. Unknown symbols are consonants, unclassifiable
// codas reduce to `s`, and input without a vowel converts to "". Nothing here
// holds mutable state, so a `Converter` can be shared freely across threads.

pub mod coda;
pub mod config;
pub mod error;
pub mod inventory;
pub mod lexeme;
pub mod render;
pub mod syllable;
pub mod transcription;
pub mod types;

// Re-export key types at crate root for convenience.
pub use config::ConverterConfig;
pub use error::{IllishError, IllishResult};
pub use lexeme::{BatchSummary, LexemeBatch, LexemeConversion, LexemeEntry};
pub use transcription::{extract_all_transcriptions, extract_transcription};
pub use types::{
    CodaClass, CodaSymbol, IllishCoda, Syllable, SyllableAnalysis, ToneCategory, VowelShape,
    WordAnalysis,
};

use inventory::LATERAL_AFFRICATE;
use tracing::{debug, trace};

/// Runs the conversion pipeline under a fixed rule configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Converter {
    config: ConverterConfig,
}

impl Converter {
    pub fn new(config: ConverterConfig) -> Self {
        Converter { config }
    }

    /// Convert one IPA word to its Illish rendering.
    pub fn convert(&self, ipa: &str) -> String {
        self.analyze(ipa).illish
    }

    /// Convert one IPA word, keeping every stage's output.
    pub fn analyze(&self, ipa: &str) -> WordAnalysis {
        let normalized = syllable::normalize(ipa);
        let syllables = syllable::syllabify(&normalized);
        trace!(input = ipa, %normalized, count = syllables.len(), "syllabified");

        let mut analyses: Vec<SyllableAnalysis> = Vec::with_capacity(syllables.len());
        let mut carried_affricate = false;

        for (index, syl) in syllables.into_iter().enumerate() {
            // syllabify never builds a syllable without a vowel.
            let Some(vowel) = syl.first_vowel() else {
                continue;
            };

            let mut onset = syllable::simplify_onset(&syl.onset);
            if carried_affricate {
                onset.insert_str(0, LATERAL_AFFRICATE);
            }

            let coda_class = coda::classify_coda(&syl.coda);
            let tone = coda::assign_tone(coda_class, &syl.coda, self.config.nasal_cluster_low_tone);
            let shape = coda::resolve_vowel(&syl, self.config.glide_lengthening);
            let reduced = coda::reduce_coda(&syl.coda);
            let releases_affricate = coda::contains_supercluster(&syl.coda);
            carried_affricate = releases_affricate && self.config.release_coda_affricate;

            let rendered = render::render_syllable(&onset, vowel, shape, tone, reduced);
            trace!(
                index,
                onset = %syl.onset,
                nucleus = %syl.nucleus,
                coda = %syl.coda,
                ?coda_class,
                ?tone,
                long = shape.long,
                nasalized = shape.nasalized,
                %rendered,
                "syllable"
            );

            analyses.push(SyllableAnalysis {
                syllable: syl,
                onset,
                coda_class,
                tone,
                vowel: shape,
                coda: reduced,
                releases_affricate,
                rendered,
            });
        }

        let repair = match analyses.last() {
            Some(last) if self.config.word_final_repair && render::needs_repair(last.tone) => last
                .syllable
                .first_vowel()
                .map(render::repair_fragment),
            _ => None,
        };

        let illish = render::render_word(&analyses, repair.as_deref());
        debug!(input = ipa, %illish, "converted");

        WordAnalysis {
            normalized,
            syllables: analyses,
            repair,
            illish,
        }
    }
}

/// Convert an English IPA word to Illish under the canonical rules.
///
/// ```
/// assert_eq!(illish_lang::convert("/kæt/"), "kæ˩");
/// assert_eq!(illish_lang::convert("kɛpt"), "kɛ˩˥ʔɛ˥");
/// ```
pub fn convert(ipa: &str) -> String {
    Converter::default().convert(ipa)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_scenarios() {
        assert_eq!(convert("kæt"), "kæ˩");
        assert_eq!(convert("sliːp"), "sli˩");
        assert_eq!(convert("kɪl"), "kɪ˥l");
        assert_eq!(convert("kɛpt"), "kɛ˩˥ʔɛ˥");
        assert_eq!(convert("bɑθ"), "bɑ˥s");
        assert_eq!(convert("kæf"), "kæ˥f");
    }

    #[test]
    fn test_convert_empty_and_vowelless() {
        assert_eq!(convert(""), "");
        assert_eq!(convert("//"), "");
        assert_eq!(convert("ˈpst"), "");
    }

    #[test]
    fn test_analyze_records_stages() {
        let analysis = Converter::default().analyze("/ˈkɛpt/");
        assert_eq!(analysis.normalized, "kɛpt");
        assert_eq!(analysis.syllables.len(), 1);
        let syl = &analysis.syllables[0];
        assert_eq!(syl.coda_class, CodaClass::PlosiveCluster);
        assert_eq!(syl.tone, ToneCategory::Rising);
        assert_eq!(syl.coda, IllishCoda::EMPTY);
        assert_eq!(syl.rendered, "kɛ˩˥");
        assert_eq!(analysis.repair.as_deref(), Some("ʔɛ˥"));
        assert_eq!(analysis.illish, "kɛ˩˥ʔɛ˥");
    }

    #[test]
    fn test_coda_supercluster_moves_to_next_onset() {
        let analysis = Converter::default().analyze("ɪkˈsploʊd");
        assert!(analysis.syllables[0].releases_affricate);
        assert_eq!(analysis.syllables[1].onset, "tɬ");
        assert_eq!(analysis.illish, "ɪ˥˩tɬoː˩");
    }

    #[test]
    fn test_coda_supercluster_dropped_without_release() {
        let converter = Converter::new(ConverterConfig {
            release_coda_affricate: false,
            ..ConverterConfig::canonical()
        });
        assert_eq!(converter.convert("ɪkˈsploʊd"), "ɪ˥˩oː˩");
    }

    #[test]
    fn test_word_final_supercluster_is_dropped() {
        // No following syllable to carry the affricate.
        assert_eq!(convert("ɛkstɹ"), "ɛ˥");
    }

    #[test]
    fn test_repair_can_be_disabled() {
        let converter = Converter::new(ConverterConfig {
            word_final_repair: false,
            ..ConverterConfig::canonical()
        });
        assert_eq!(converter.convert("kɛpt"), "kɛ˩˥");
    }

    #[test]
    fn test_legacy_rules() {
        let legacy = Converter::new(ConverterConfig::legacy());
        // No nasal-cluster override: `nt` is an ordinary cluster, high tone.
        assert_eq!(legacy.convert("ænt"), "æ\u{0303}˥n");
        assert_eq!(convert("ænt"), "æ\u{0303}˩n");
        // Glides do not lengthen.
        assert_eq!(legacy.convert("baj"), "ba˥s");
        assert_eq!(convert("baj"), "baː˥s");
    }

    #[test]
    fn test_analysis_serializes() {
        let analysis = Converter::default().analyze("bæn");
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["illish"], "bæ\u{0303}˥n");
        assert_eq!(json["syllables"][0]["tone"], "high");
        assert_eq!(json["syllables"][0]["coda"]["symbol"], "n");
        assert_eq!(json["syllables"][0]["vowel"]["nasalized"], true);
    }
}
