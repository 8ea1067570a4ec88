// Front of the pipeline: normalization, syllabification, onset simplification.
//
// `normalize` strips the `/…/` wrapper and stress marks. `syllabify` then
// walks the result once, left to right, cutting it into onset/nucleus/coda
// triples. Because the coda loop consumes every consonant up to the next
// vowel, only the first syllable of a word can have a non-empty onset;
// medial consonant runs always land in the preceding coda.
//
// `simplify_onset` collapses a leading s-supercluster (`str`, `spl`, ...)
// into the lateral affricate. Embedded superclusters in codas are handled
// by `coda::reduce_coda` and the renderer instead.

use crate::inventory::{LATERAL_AFFRICATE, LENGTH_MARK, STRESS_MARKS, SUPERCLUSTERS, is_vowel};
use crate::types::Syllable;

/// Strip surrounding whitespace, enclosing slashes and stress marks.
pub fn normalize(ipa: &str) -> String {
    ipa.trim()
        .trim_matches('/')
        .chars()
        .filter(|c| !STRESS_MARKS.contains(c))
        .collect()
}

/// Split a normalized IPA string into syllables.
///
/// Per syllable: consonants into the onset until a vowel; the vowel, an
/// optional second vowel (diphthong) and an optional length mark into the
/// nucleus; consonants into the coda until the next vowel. Trailing
/// consonants with no following vowel stay in the last coda. Input with no
/// vowel produces no syllables.
pub fn syllabify(normalized: &str) -> Vec<Syllable> {
    let chars: Vec<char> = normalized.chars().collect();
    let mut syllables = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let mut onset = String::new();
        let mut nucleus = String::new();
        let mut coda = String::new();

        while i < chars.len() && !is_vowel(chars[i]) {
            onset.push(chars[i]);
            i += 1;
        }

        if i < chars.len() {
            nucleus.push(chars[i]);
            i += 1;
            if i < chars.len() && is_vowel(chars[i]) {
                nucleus.push(chars[i]);
                i += 1;
            }
            if i < chars.len() && chars[i] == LENGTH_MARK {
                nucleus.push(chars[i]);
                i += 1;
            }
        }

        while i < chars.len() && !is_vowel(chars[i]) {
            coda.push(chars[i]);
            i += 1;
        }

        if !nucleus.is_empty() {
            syllables.push(Syllable {
                onset,
                nucleus,
                coda,
            });
        }
    }

    syllables
}

/// Replace a leading supercluster with the lateral affricate, keeping the
/// rest of the onset. Other onsets are returned unchanged.
pub fn simplify_onset(onset: &str) -> String {
    for pattern in SUPERCLUSTERS {
        if let Some(rest) = onset.strip_prefix(pattern) {
            return format!("{LATERAL_AFFRICATE}{rest}");
        }
    }
    onset.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(syl: &Syllable) -> (&str, &str, &str) {
        (&syl.onset, &syl.nucleus, &syl.coda)
    }

    #[test]
    fn test_normalize_strips_slashes_and_stress() {
        assert_eq!(normalize("/kæt/"), "kæt");
        assert_eq!(normalize("ɪkˈsploʊd"), "ɪksploʊd");
        assert_eq!(normalize(" /ˌæbˈsɛnt/ "), "æbsɛnt");
        assert_eq!(normalize("//kæt//"), "kæt");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_keeps_inner_slash() {
        assert_eq!(normalize("/kæt/ /dɒɡ/"), "kæt/ /dɒɡ");
    }

    #[test]
    fn test_syllabify_single_closed_syllable() {
        let syls = syllabify("kæt");
        assert_eq!(syls.len(), 1);
        assert_eq!(parts(&syls[0]), ("k", "æ", "t"));
    }

    #[test]
    fn test_syllabify_length_mark_joins_nucleus() {
        let syls = syllabify("sliːp");
        assert_eq!(syls.len(), 1);
        assert_eq!(parts(&syls[0]), ("sl", "iː", "p"));
    }

    #[test]
    fn test_syllabify_diphthong() {
        let syls = syllabify("ɪksploʊd");
        assert_eq!(syls.len(), 2);
        assert_eq!(parts(&syls[0]), ("", "ɪ", "kspl"));
        assert_eq!(parts(&syls[1]), ("", "oʊ", "d"));
    }

    #[test]
    fn test_syllabify_third_vowel_starts_new_syllable() {
        let syls = syllabify("faɪə");
        assert_eq!(syls.len(), 2);
        assert_eq!(parts(&syls[0]), ("f", "aɪ", ""));
        assert_eq!(parts(&syls[1]), ("", "ə", ""));
    }

    #[test]
    fn test_syllabify_no_vowel_yields_nothing() {
        assert!(syllabify("").is_empty());
        assert!(syllabify("pst").is_empty());
        assert!(syllabify("ː").is_empty());
    }

    #[test]
    fn test_syllabify_trailing_consonants_join_last_coda() {
        let syls = syllabify("tɛksts");
        assert_eq!(syls.len(), 1);
        assert_eq!(parts(&syls[0]), ("t", "ɛ", "ksts"));
    }

    #[test]
    fn test_syllabify_unknown_symbols_are_consonants() {
        let syls = syllabify("ʔaxa");
        assert_eq!(syls.len(), 2);
        assert_eq!(parts(&syls[0]), ("ʔ", "a", "x"));
        assert_eq!(parts(&syls[1]), ("", "a", ""));
    }

    #[test]
    fn test_simplify_onset_superclusters() {
        assert_eq!(simplify_onset("str"), "tɬ");
        assert_eq!(simplify_onset("stɹ"), "tɬ");
        assert_eq!(simplify_onset("spl"), "tɬ");
        assert_eq!(simplify_onset("spɹ"), "tɬ");
        assert_eq!(simplify_onset("skɹ"), "tɬ");
        assert_eq!(simplify_onset("skrw"), "tɬw");
    }

    #[test]
    fn test_simplify_onset_leaves_other_clusters() {
        assert_eq!(simplify_onset("sl"), "sl");
        assert_eq!(simplify_onset("bl"), "bl");
        assert_eq!(simplify_onset("kw"), "kw");
        assert_eq!(simplify_onset("st"), "st");
        assert_eq!(simplify_onset("ʃɹ"), "ʃɹ");
        assert_eq!(simplify_onset(""), "");
    }
}
