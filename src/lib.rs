//! Prosody structuring for Japanese speech synthesis.
//!
//! Takes the flat per-word feature records of an Open JTalk style text
//! analysis front end, builds the prosodic tree (moras, words, accent
//! phrases, breath clauses), and projects it into VOICEVOX accent-phrase
//! records ready for a synthesis query.

pub mod diagnostics;
pub mod njd;
pub mod parser;
pub mod phoneme;
pub(crate) mod table;
pub mod tree;
pub mod voicevox;

#[cfg(test)]
mod tests;

pub use diagnostics::Diagnostic;
pub use njd::NjdFeature;
pub use parser::{parse_features, ParseError, ParsedUtterance};
pub use tree::Utterance;
pub use voicevox::{project_utterance, Projection};

/// Parse feature records into the prosodic tree. First pipeline stage.
pub fn njd_to_utterance(features: &[NjdFeature]) -> Result<ParsedUtterance, ParseError> {
    parser::parse_features(features)
}

/// Full pipeline: parse feature records and project the tree into VOICEVOX
/// accent phrases. Diagnostics from both stages, parse repairs first.
pub fn njd_to_accent_phrases(features: &[NjdFeature]) -> Result<Projection, ParseError> {
    let parsed = parser::parse_features(features)?;
    let projection = voicevox::project_utterance(&parsed.utterance)?;
    let mut diagnostics = parsed.diagnostics;
    diagnostics.extend(projection.diagnostics);
    Ok(Projection {
        accent_phrases: projection.accent_phrases,
        diagnostics,
    })
}
