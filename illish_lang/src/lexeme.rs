// Lexeme batches: convert a JSON list of English lexemes in one pass.
//
// A batch is the hand-off format between the wiki import scripts and this
// crate. The scripts gather a lemma and (where one was found) its English
// IPA; the batch returns each entry with an Illish IPA form alongside, ready
// to be written back as a pronunciation claim. An entry with no IPA, or a
// blank one, is carried through with `illish_ipa: null` rather than dropped,
// so output order and length always match the input.
//
// File shape:
//   {"lexemes": [{"lemma": "cat", "ipa": "/kæt/", "category": "noun"}, ...]}

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Converter;
use crate::error::{IllishResult, read_file};

/// One input lexeme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexemeEntry {
    pub lemma: String,
    /// English IPA, with or without slashes and stress marks.
    #[serde(default)]
    pub ipa: Option<String>,
    /// Lexical category label, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// One converted lexeme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexemeConversion {
    pub lemma: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub ipa: Option<String>,
    pub illish_ipa: Option<String>,
}

/// Counts for a converted batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub converted: usize,
    /// Entries with no usable IPA.
    pub skipped: usize,
}

impl BatchSummary {
    pub fn of(conversions: &[LexemeConversion]) -> Self {
        let converted = conversions.iter().filter(|c| c.illish_ipa.is_some()).count();
        BatchSummary {
            total: conversions.len(),
            converted,
            skipped: conversions.len() - converted,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct BatchFile {
    lexemes: Vec<LexemeEntry>,
}

/// A loaded batch of lexemes, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexemeBatch {
    entries: Vec<LexemeEntry>,
}

impl LexemeBatch {
    pub fn new(entries: Vec<LexemeEntry>) -> Self {
        LexemeBatch { entries }
    }

    /// Parse a batch from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let file: BatchFile = serde_json::from_str(json)?;
        Ok(LexemeBatch {
            entries: file.lexemes,
        })
    }

    /// Load a batch from a JSON file.
    pub fn load(path: &Path) -> IllishResult<Self> {
        let data = read_file(path)?;
        Ok(Self::from_json(&data)?)
    }

    pub fn entries(&self) -> &[LexemeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Convert every entry, preserving order.
    pub fn convert_all(&self, converter: &Converter) -> Vec<LexemeConversion> {
        self.entries
            .iter()
            .map(|entry| {
                let illish_ipa = entry
                    .ipa
                    .as_deref()
                    .filter(|ipa| !ipa.trim().is_empty())
                    .map(|ipa| converter.convert(ipa));
                if illish_ipa.is_none() {
                    debug!(lemma = %entry.lemma, "no IPA, skipping");
                }
                LexemeConversion {
                    lemma: entry.lemma.clone(),
                    category: entry.category.clone(),
                    ipa: entry.ipa.clone(),
                    illish_ipa,
                }
            })
            .collect()
    }
}
