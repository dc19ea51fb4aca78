//! Open JTalk NJD feature records, the front end's per-word output.
//!
//! Only `string`, `pron`, `acc` and `chain_flag` drive the parse; the
//! morphological fields ride along untouched so a full front-end dump
//! deserializes and round-trips as-is.

use serde::{Deserialize, Serialize};

/// One NJD feature, as emitted per word by the text-analysis front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NjdFeature {
    /// Surface orthography.
    pub string: String,
    /// Part of speech.
    pub pos: String,
    pub pos_group1: String,
    pub pos_group2: String,
    pub pos_group3: String,
    /// Conjugation type.
    pub ctype: String,
    /// Conjugation form.
    pub cform: String,
    /// Dictionary (base) form.
    pub orig: String,
    /// Reading.
    pub read: String,
    /// Pronunciation: mora spellings with devoicing diacritics, plus embedded
    /// pause glyphs and prolonged sound marks.
    pub pron: String,
    /// Accent type: 0 = phrase-final accent, positive = explicit mora index.
    pub acc: i64,
    /// Mora count as reported by the front end (not consumed here).
    pub mora_size: i64,
    /// Accent sandhi rule.
    pub chain_rule: String,
    /// Accent-phrase chaining: 1 = continue the previous phrase, 0 = start a
    /// new one, -1 = undetermined.
    pub chain_flag: i64,
}

impl NjdFeature {
    /// Whether this word continues the previous accent phrase.
    pub fn chains(&self) -> bool {
        self.chain_flag == 1
    }
}

impl Default for NjdFeature {
    fn default() -> Self {
        Self {
            string: String::new(),
            pos: "*".into(),
            pos_group1: "*".into(),
            pos_group2: "*".into(),
            pos_group3: "*".into(),
            ctype: "*".into(),
            cform: "*".into(),
            orig: "*".into(),
            read: "*".into(),
            pron: String::new(),
            acc: 0,
            mora_size: 0,
            chain_rule: "*".into(),
            chain_flag: -1,
        }
    }
}

/// Type a raw front-end JSON dump (an array of feature objects).
pub fn features_from_json(json: &str) -> Result<Vec<NjdFeature>, serde_json::Error> {
    serde_json::from_str(json)
}
