//! VOICEVOX accent-phrase records.
//!
//! Field names and nesting match the engine's `AccentPhrase` JSON exactly,
//! so these serialize straight into `/accent_phrases` request and response
//! bodies. Absent consonants stay as explicit `null`s, the way the engine
//! emits them.

use serde::{Deserialize, Serialize};

/// One mora as the engine consumes it. `consonant` and `consonant_length`
/// are both set or both absent; lengths and pitch are zero until a
/// synthesis query fills them in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mora {
    pub text: String,
    pub consonant: Option<String>,
    pub consonant_length: Option<f64>,
    pub vowel: String,
    pub vowel_length: f64,
    pub pitch: f64,
}

/// One accent phrase as the engine consumes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccentPhrase {
    pub moras: Vec<Mora>,
    pub accent: usize,
    pub pause_mora: Option<Mora>,
    pub is_interrogative: bool,
}
