// Coda-driven stages: classification, tone, vowel shape, and reduction.
//
// Every function here reads the *raw* IPA coda. Classification is lossy, so
// the tone assigner, the vowel resolver, and the reducer each re-inspect the
// original consonants rather than chaining off one another's output.
//
// A nasal-led cluster (two or more consonants, the first a nasal) is the one
// pattern all four stages special-case: it forces low tone, lengthens only
// before a voiced obstruent, nasalizes the vowel, and reduces to either the
// trailing fricative or the nasal itself.

use crate::inventory::{
    AFFRICATES, SUPERCLUSTERS, VOICED_AFFRICATE, is_fricative, is_lengthening_voiced, is_liquid,
    is_nasal, is_plosive,
};
use crate::types::{CodaClass, CodaSymbol, IllishCoda, Syllable, ToneCategory, VowelShape};

/// Whether the coda is two or more consonants beginning with a nasal.
pub fn is_nasal_led_cluster(coda: &str) -> bool {
    let mut chars = coda.chars();
    matches!((chars.next(), chars.next()), (Some(first), Some(_)) if is_nasal(first))
}

/// Whether a supercluster (`spl`, `str`, ...) appears anywhere in the coda.
pub fn contains_supercluster(coda: &str) -> bool {
    SUPERCLUSTERS.iter().any(|pattern| coda.contains(pattern))
}

/// Classify a raw coda into one of the eight coda classes.
pub fn classify_coda(coda: &str) -> CodaClass {
    if coda.is_empty() {
        return CodaClass::Open;
    }
    if AFFRICATES.contains(&coda) {
        return CodaClass::Fricative;
    }

    let chars: Vec<char> = coda.chars().collect();
    if chars.len() == 1 {
        let c = chars[0];
        return if is_plosive(c) {
            CodaClass::Plosive
        } else if is_fricative(c) {
            CodaClass::Fricative
        } else if is_nasal(c) {
            CodaClass::Nasal
        } else if is_liquid(c) {
            CodaClass::Liquid
        } else {
            CodaClass::Open
        };
    }

    if chars.iter().any(|&c| is_liquid(c)) {
        CodaClass::LiquidCluster
    } else if chars.iter().all(|&c| is_plosive(c)) {
        CodaClass::PlosiveCluster
    } else {
        CodaClass::OtherCluster
    }
}

/// Pick the lexical tone for a syllable.
///
/// With `nasal_cluster_low` set, a nasal-led cluster is low regardless of
/// its class; otherwise the class table decides alone.
pub fn assign_tone(class: CodaClass, coda: &str, nasal_cluster_low: bool) -> ToneCategory {
    if nasal_cluster_low && is_nasal_led_cluster(coda) {
        return ToneCategory::Low;
    }
    class.tone()
}

/// Decide vowel length and nasalization from the nucleus and raw coda.
///
/// An open syllable keeps whatever length the IPA marked. Otherwise length
/// is never inherited: a voiceless coda shortens even `iː`.
pub fn resolve_vowel(syllable: &Syllable, glide_lengthening: bool) -> VowelShape {
    let coda = syllable.coda.as_str();
    let chars: Vec<char> = coda.chars().collect();
    let (Some(&first), Some(&last)) = (chars.first(), chars.last()) else {
        return VowelShape {
            long: syllable.has_length_mark(),
            nasalized: false,
        };
    };

    let nasalized = is_nasal(first) && !contains_supercluster(coda);

    let long = if coda.ends_with(VOICED_AFFRICATE) {
        true
    } else if chars.len() > 1 && is_nasal(first) {
        is_lengthening_voiced(chars[1], glide_lengthening)
    } else if is_nasal(last) {
        false
    } else {
        is_lengthening_voiced(last, glide_lengthening)
    };

    VowelShape { long, nasalized }
}

/// Reduce a single consonant to the Illish coda inventory.
fn reduce_consonant(c: char) -> IllishCoda {
    match c {
        'f' | 'v' => IllishCoda::plain(CodaSymbol::F),
        'm' => IllishCoda::nasal(CodaSymbol::M),
        'n' | 'ŋ' => IllishCoda::nasal(CodaSymbol::N),
        'l' | 'r' | 'ɹ' => IllishCoda::plain(CodaSymbol::L),
        c if is_plosive(c) => IllishCoda::EMPTY,
        // Sibilants, dentals, h, and anything unclassified.
        _ => IllishCoda::plain(CodaSymbol::S),
    }
}

/// Map a raw IPA coda onto `{s, f, m, n, l, ∅}`.
///
/// Priority: embedded supercluster (no coda; the affricate moves to the
/// next onset), then the bare affricates, then single consonants, then
/// nasal-led clusters, and finally any other cluster by its first consonant.
pub fn reduce_coda(coda: &str) -> IllishCoda {
    let chars: Vec<char> = coda.chars().collect();
    let Some(&first) = chars.first() else {
        return IllishCoda::EMPTY;
    };

    if contains_supercluster(coda) {
        return IllishCoda::EMPTY;
    }
    if AFFRICATES.contains(&coda) {
        return IllishCoda::plain(CodaSymbol::S);
    }
    if chars.len() == 1 {
        return reduce_consonant(first);
    }

    if is_nasal(first) {
        let last = chars[chars.len() - 1];
        let kept = if is_fricative(last) { last } else { first };
        return IllishCoda::nasal(reduce_consonant(kept).symbol);
    }

    reduce_consonant(first)
}
