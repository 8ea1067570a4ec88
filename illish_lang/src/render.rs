// Renderer: assembles Illish syllable fragments and the word-final repair.
//
// A syllable renders as `onset + vowel + [U+0303] + [ː] + tone + coda`.
// The vowel is the first vowel of the IPA nucleus, so diphthongs flatten to
// their onset vowel. The nasalization tilde sits directly on the vowel,
// before the length mark and the tone letters.
//
// Illish orthography does not allow a bare rising contour at the end of a
// word. When the final syllable is rising, the word is closed with a glottal
// stop and a high-toned echo of the same vowel (`kɛ˩˥ʔɛ˥`).

use crate::inventory::{GLOTTAL_STOP, LENGTH_MARK, NASALIZATION_MARK};
use crate::types::{IllishCoda, SyllableAnalysis, ToneCategory, VowelShape};

/// Render one syllable fragment.
pub fn render_syllable(
    onset: &str,
    vowel: char,
    shape: VowelShape,
    tone: ToneCategory,
    coda: IllishCoda,
) -> String {
    let mut out = String::with_capacity(onset.len() + 16);
    out.push_str(onset);
    out.push(vowel);
    if shape.nasalized {
        out.push(NASALIZATION_MARK);
    }
    if shape.long {
        out.push(LENGTH_MARK);
    }
    out.push_str(tone.letters());
    out.push_str(coda.symbol.as_str());
    out
}

/// The fragment appended after a word-final rising tone: `ʔ` + vowel + `˥`.
pub fn repair_fragment(vowel: char) -> String {
    let mut out = String::new();
    out.push(GLOTTAL_STOP);
    out.push(vowel);
    out.push_str(ToneCategory::High.letters());
    out
}

/// Whether a word whose final syllable carries `tone` needs the repair.
pub fn needs_repair(tone: ToneCategory) -> bool {
    tone == ToneCategory::Rising
}

/// Concatenate rendered syllables and the optional repair fragment.
pub fn render_word(syllables: &[SyllableAnalysis], repair: Option<&str>) -> String {
    let mut out: String = syllables.iter().map(|s| s.rendered.as_str()).collect();
    if let Some(fragment) = repair {
        out.push_str(fragment);
    }
    out
}
