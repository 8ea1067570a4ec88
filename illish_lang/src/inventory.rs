// Illish phoneme inventory: the fixed symbol tables every stage reads.
//
// Membership is decided by code point against immutable tables; there is no
// learned or configurable inventory. A symbol that is not a vowel is treated
// as a consonant by the syllabifier, whether or not it appears in any of the
// consonant tables below. Unknown consonants fall through to the generic
// reduction path in `coda.rs`.

/// IPA vowels recognized as syllable nuclei.
pub const VOWELS: &str = "ɪɛæɔʊɑɒəɜaeiouɨʉɯʌ";

/// Vowel length mark. Neither a vowel nor part of any consonant table.
pub const LENGTH_MARK: char = 'ː';

/// Primary and secondary stress marks, discarded during normalization.
pub const STRESS_MARKS: &[char] = &['ˈ', 'ˌ'];

/// Stops. Both the ASCII `g` and the IPA `ɡ` (U+0261) are accepted.
pub const PLOSIVES: &str = "ptkbdgɡ";
pub const FRICATIVES: &str = "sfvθðzʃʒhʂʐɕʑ";
pub const NASALS: &str = "mnŋ";
pub const LIQUIDS: &str = "lr";

/// Obstruents whose voicing lengthens the preceding vowel.
pub const VOICED_OBSTRUENTS: &str = "bvdðgɡzʒ";

/// Glides that lengthen the preceding vowel under the canonical rules.
pub const LENGTHENING_GLIDES: &str = "wj";

/// Two-symbol affricates, treated as a single fricative coda.
pub const AFFRICATES: &[&str] = &["tʃ", "dʒ"];

/// The voiced affricate, checked at the end of a coda for vowel length.
pub const VOICED_AFFRICATE: &str = "dʒ";

/// Three-consonant clusters collapsed to the lateral affricate.
pub const SUPERCLUSTERS: &[&str] = &["spl", "str", "stɹ", "spr", "spɹ", "skr", "skɹ"];

pub const LATERAL_AFFRICATE: &str = "tɬ";

pub const GLOTTAL_STOP: char = 'ʔ';

/// Combining tilde (U+0303), placed directly after a nasalized vowel.
pub const NASALIZATION_MARK: char = '\u{0303}';

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

pub fn is_plosive(c: char) -> bool {
    PLOSIVES.contains(c)
}

pub fn is_fricative(c: char) -> bool {
    FRICATIVES.contains(c)
}

pub fn is_nasal(c: char) -> bool {
    NASALS.contains(c)
}

pub fn is_liquid(c: char) -> bool {
    LIQUIDS.contains(c)
}

/// Voiced obstruent check for vowel lengthening. `glides` admits `w`/`j`.
pub fn is_lengthening_voiced(c: char, glides: bool) -> bool {
    VOICED_OBSTRUENTS.contains(c) || (glides && LENGTHENING_GLIDES.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vowel_inventory() {
        for c in "ɪɛæɔʊɑɒəɜaeiouɨʉɯʌ".chars() {
            assert!(is_vowel(c), "'{c}' should be a vowel");
        }
        assert!(!is_vowel(LENGTH_MARK));
        assert!(!is_vowel('k'));
        assert!(!is_vowel('ɹ'));
    }

    #[test]
    fn test_consonant_tables_are_disjoint() {
        for c in PLOSIVES.chars() {
            assert!(!is_fricative(c) && !is_nasal(c) && !is_liquid(c));
        }
        for c in FRICATIVES.chars() {
            assert!(!is_nasal(c) && !is_liquid(c));
        }
        for c in NASALS.chars() {
            assert!(!is_liquid(c));
        }
    }

    #[test]
    fn test_no_table_overlaps_vowels() {
        let consonants = [PLOSIVES, FRICATIVES, NASALS, LIQUIDS, LENGTHENING_GLIDES];
        for table in consonants {
            for c in table.chars() {
                assert!(!is_vowel(c), "'{c}' is listed as both vowel and consonant");
            }
        }
    }

    #[test]
    fn test_glide_lengthening_switch() {
        assert!(is_lengthening_voiced('d', false));
        assert!(!is_lengthening_voiced('w', false));
        assert!(is_lengthening_voiced('w', true));
        assert!(is_lengthening_voiced('j', true));
        assert!(!is_lengthening_voiced('t', true));
    }

    #[test]
    fn test_superclusters_are_three_symbols() {
        for pattern in SUPERCLUSTERS {
            assert_eq!(pattern.chars().count(), 3, "'{pattern}'");
            assert!(pattern.starts_with('s'));
        }
    }
}
