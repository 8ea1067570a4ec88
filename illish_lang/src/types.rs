// Core Illish types: syllables, coda classes, tones, and reduced codas.
//
// The type hierarchy is:
// - `Syllable` — one onset/nucleus/coda split of the IPA input
// - `CodaClass` — the eight-way classification of a raw IPA coda
// - `ToneCategory` — the six lexical tones and their tone-bar letters
// - `CodaSymbol` / `IllishCoda` — the restricted Illish coda inventory
// - `VowelShape` — resolved vowel length and nasalization
// - `SyllableAnalysis` / `WordAnalysis` — per-stage record of a conversion
//
// Everything here is plain data. The pipeline stages that produce these
// values live in `syllable.rs`, `coda.rs`, and `render.rs`.

use serde::{Deserialize, Serialize};

use crate::inventory::{LENGTH_MARK, is_vowel};

/// One syllable of the normalized IPA input.
///
/// Invariant: `nucleus` always holds at least one vowel. The syllabifier
/// only constructs a `Syllable` once it has found one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Syllable {
    /// Consonants before the nucleus.
    pub onset: String,
    /// One or two vowels, optionally followed by the length mark.
    pub nucleus: String,
    /// Consonants after the nucleus, up to the next vowel or end of word.
    pub coda: String,
}

impl Syllable {
    /// The first vowel of the nucleus. Diphthongs render as this vowel.
    pub fn first_vowel(&self) -> Option<char> {
        self.nucleus.chars().find(|&c| is_vowel(c))
    }

    /// Whether the IPA nucleus already carries a length mark.
    pub fn has_length_mark(&self) -> bool {
        self.nucleus.contains(LENGTH_MARK)
    }

    /// Whether the nucleus holds two vowels.
    pub fn is_diphthong(&self) -> bool {
        self.nucleus.chars().filter(|&c| is_vowel(c)).count() > 1
    }
}

/// Classification of a raw IPA coda, used for tone assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodaClass {
    /// No coda consonant.
    Open,
    /// A single stop.
    Plosive,
    /// A single fricative, or the affricates `tʃ`/`dʒ`.
    Fricative,
    /// A single nasal.
    Nasal,
    /// A single liquid.
    Liquid,
    /// Two or more stops.
    PlosiveCluster,
    /// A cluster containing a liquid.
    LiquidCluster,
    /// Any other multi-consonant coda.
    OtherCluster,
}

impl CodaClass {
    /// The lexical tone this class carries, before any override.
    pub fn tone(self) -> ToneCategory {
        match self {
            CodaClass::Open => ToneCategory::High,
            CodaClass::Plosive => ToneCategory::Low,
            CodaClass::Fricative => ToneCategory::High,
            CodaClass::Nasal => ToneCategory::High,
            CodaClass::Liquid => ToneCategory::High,
            CodaClass::PlosiveCluster => ToneCategory::Rising,
            CodaClass::LiquidCluster => ToneCategory::Sinking,
            CodaClass::OtherCluster => ToneCategory::High,
        }
    }
}

/// Lexical tone of an Illish syllable.
///
/// `Peaking` and `Dipping` are never produced by the coda classifier but are
/// part of the tone-letter inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToneCategory {
    /// Extra-low level tone.
    Low,
    /// Extra-high level tone.
    High,
    /// Low to high.
    Rising,
    /// High to low.
    Sinking,
    /// High, low, high.
    Peaking,
    /// Low, high, low.
    Dipping,
}

impl ToneCategory {
    /// IPA tone-bar letters for this tone.
    pub fn letters(self) -> &'static str {
        match self {
            ToneCategory::Low => "\u{02E9}",
            ToneCategory::High => "\u{02E5}",
            ToneCategory::Rising => "\u{02E9}\u{02E5}",
            ToneCategory::Sinking => "\u{02E5}\u{02E9}",
            ToneCategory::Peaking => "\u{02E5}\u{02E9}\u{02E5}",
            ToneCategory::Dipping => "\u{02E9}\u{02E5}\u{02E9}",
        }
    }
}

/// The Illish coda inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodaSymbol {
    /// No coda consonant.
    None,
    S,
    F,
    M,
    N,
    L,
}

impl CodaSymbol {
    /// Orthographic form; empty for `None`.
    pub fn as_str(self) -> &'static str {
        match self {
            CodaSymbol::None => "",
            CodaSymbol::S => "s",
            CodaSymbol::F => "f",
            CodaSymbol::M => "m",
            CodaSymbol::N => "n",
            CodaSymbol::L => "l",
        }
    }
}

/// A coda reduced to the Illish inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IllishCoda {
    pub symbol: CodaSymbol,
    /// Whether the reduction absorbed a nasal into the vowel.
    pub nasalized: bool,
}

impl IllishCoda {
    pub const EMPTY: IllishCoda = IllishCoda {
        symbol: CodaSymbol::None,
        nasalized: false,
    };

    pub fn plain(symbol: CodaSymbol) -> Self {
        IllishCoda {
            symbol,
            nasalized: false,
        }
    }

    pub fn nasal(symbol: CodaSymbol) -> Self {
        IllishCoda {
            symbol,
            nasalized: true,
        }
    }
}

/// Resolved vowel length and nasalization for one syllable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VowelShape {
    pub long: bool,
    pub nasalized: bool,
}

/// Every stage's output for one syllable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllableAnalysis {
    /// The syllable as split from the normalized input.
    pub syllable: Syllable,
    /// Onset after supercluster collapse.
    pub onset: String,
    pub coda_class: CodaClass,
    pub tone: ToneCategory,
    pub vowel: VowelShape,
    pub coda: IllishCoda,
    /// Whether the raw coda embedded a supercluster, realized as the
    /// lateral affricate on the next onset.
    pub releases_affricate: bool,
    /// The rendered Illish fragment for this syllable.
    pub rendered: String,
}

/// A complete conversion with its per-syllable breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordAnalysis {
    /// The input after slash and stress-mark removal.
    pub normalized: String,
    pub syllables: Vec<SyllableAnalysis>,
    /// The glottal-stop fragment appended after a final rising tone.
    pub repair: Option<String>,
    /// The full Illish rendering.
    pub illish: String,
}
