// Converter configuration: the rule switches that separate the two known
// variants of the Illish rules.
//
// The canonical rules (the `Default`) force low tone on nasal-led clusters,
// let `w`/`j` lengthen a vowel like voiced obstruents, repair a word-final
// rising tone with a glottal stop, and move a coda supercluster's lateral
// affricate onto the next onset. The earlier variant had none of these; the
// `legacy()` preset turns all four off.
//
// Loaded from JSON the same way the rest of the crate reads data (JSON
// string in, typed struct out). Missing fields take their canonical values
// and unknown fields are rejected so a typo cannot silently fall back.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{IllishResult, read_file};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConverterConfig {
    /// Force low tone when the coda is a nasal followed by any consonant.
    pub nasal_cluster_low_tone: bool,
    /// Count `w` and `j` as voiced when deciding vowel length.
    pub glide_lengthening: bool,
    /// Append `ʔ` + vowel + high tone after a word-final rising tone.
    pub word_final_repair: bool,
    /// Realize a supercluster embedded in a coda as `tɬ` on the next onset.
    /// When off, the supercluster is dropped with the rest of the coda.
    pub release_coda_affricate: bool,
}

impl ConverterConfig {
    pub fn canonical() -> Self {
        Self {
            nasal_cluster_low_tone: true,
            glide_lengthening: true,
            word_final_repair: true,
            release_coda_affricate: true,
        }
    }

    /// Tone and length rules of the earlier converter variant.
    pub fn legacy() -> Self {
        Self {
            nasal_cluster_low_tone: false,
            glide_lengthening: false,
            word_final_repair: false,
            release_coda_affricate: false,
        }
    }

    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load a config from a JSON file.
    pub fn load(path: &Path) -> IllishResult<Self> {
        let data = read_file(path)?;
        Ok(Self::from_json(&data)?)
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::canonical()
    }
}
