//! Feature-record parsing.
//!
//! Turns a flat sequence of morphological feature records into an
//! [`Utterance`]: pause records delimit breath clauses, chain flags group
//! words into accent phrases, and each word's pronunciation is segmented
//! into phoneme-resolved moras.
//!
//! Malformed input that has one sane reading is repaired and reported
//! through [`Diagnostic`]s; input with no sane reading is a [`ParseError`].

mod phrase;
mod segment;
mod word;

pub use segment::{segment_pronunciation, MoraToken};

use thiserror::Error;
use tracing::{debug, debug_span, warn};

use crate::diagnostics::Diagnostic;
use crate::njd::NjdFeature;
use crate::phoneme::{Vowel, VowelSymbol};
use crate::table::{PAUSE_COMMA, PAUSE_QUESTION};
use crate::tree::{BreathClause, Mora, Utterance, Word};

/// Structural failure while building or projecting an utterance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No mora spelling, pause glyph, or prolonged sound mark matches at
    /// some position of a pronunciation string.
    #[error("no mora spelling matches {remainder:?} in pronunciation {pronunciation:?}")]
    UnknownMoraSpelling {
        pronunciation: String,
        remainder: String,
    },
    /// A prolonged sound mark follows a mora that was itself dropped, so
    /// there is no vowel to copy.
    #[error("prolonged sound mark in {word:?} has no mora to prolong")]
    OrphanProlongedMark { word: String },
    /// A prolonged mora carries a vowel with no katakana respelling, so it
    /// cannot be rendered for synthesis.
    #[error("prolonged mora resolved to {vowel}, which has no katakana respelling")]
    ProlongedNonPlainVowel { vowel: VowelSymbol },
}

/// A parsed utterance together with the repairs made along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUtterance {
    pub utterance: Utterance,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parse feature records into an utterance tree.
pub fn parse_features(features: &[NjdFeature]) -> Result<ParsedUtterance, ParseError> {
    let _span = debug_span!("parse_features", features = features.len()).entered();
    let mut diagnostics = Vec::new();
    let utterance = parse_breath_clauses(features, &mut diagnostics)?;
    debug!(
        clauses = utterance.clauses.len(),
        diagnostics = diagnostics.len(),
        "parsed utterance"
    );
    Ok(ParsedUtterance {
        utterance,
        diagnostics,
    })
}

fn is_pause(feat: &NjdFeature) -> bool {
    feat.pron == PAUSE_COMMA || feat.pron == PAUSE_QUESTION
}

fn is_interrogative(feat: &NjdFeature) -> bool {
    feat.pron == PAUSE_QUESTION
}

fn parse_breath_clauses(
    features: &[NjdFeature],
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Utterance, ParseError> {
    if features.is_empty() {
        return Ok(Utterance::default());
    }

    // Alternating runs of voiced and pause records. chunk_by never yields an
    // empty slice, so after dropping a leading pause run the sequence starts
    // voiced and pairs up as (voiced, pause?), the final pause optional.
    let mut runs: Vec<&[NjdFeature]> = features
        .chunk_by(|a, b| is_pause(a) == is_pause(b))
        .collect();

    if is_pause(&runs[0][0]) {
        let text: String = runs[0].iter().map(|f| f.string.as_str()).collect();
        warn!(%text, "utterance-initial pause run dropped");
        diagnostics.push(Diagnostic::LeadingPauseRun { text });
        runs.remove(0);
        if runs.is_empty() {
            return Ok(Utterance::default());
        }
    }

    let mut clauses = Vec::with_capacity(runs.len().div_ceil(2));
    for pair in runs.chunks(2) {
        let voiced = pair[0];
        let pauses = pair.get(1).copied().unwrap_or(&[]);
        let interrogative = pauses.iter().any(is_interrogative);
        let accent_phrases = phrase::parse_accent_phrases(voiced, interrogative, diagnostics)?;
        clauses.push(BreathClause {
            accent_phrases,
            breath: breath_word(pauses),
        });
    }
    Ok(Utterance { clauses })
}

/// Collapse a pause run into one breath word: the surface texts concatenate,
/// and the pronunciation is a single pau mora spelled with the comma glyph.
fn breath_word(pauses: &[NjdFeature]) -> Option<Word> {
    if pauses.is_empty() {
        return None;
    }
    debug_assert!(pauses.iter().all(is_pause));
    let text: String = pauses.iter().map(|f| f.string.as_str()).collect();
    Some(Word {
        moras: vec![Mora {
            consonant: None,
            vowel: Vowel::voiced(VowelSymbol::Pau),
            spelling: PAUSE_COMMA.to_string(),
        }],
        text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feat(string: &str, pron: &str, acc: i64, chain_flag: i64) -> NjdFeature {
        NjdFeature {
            string: string.to_string(),
            pron: pron.to_string(),
            acc,
            chain_flag,
            ..NjdFeature::default()
        }
    }

    fn voiced(s: &str, pron: &str) -> NjdFeature {
        feat(s, pron, 1, -1)
    }

    fn pause(s: &str, pron: &str) -> NjdFeature {
        feat(s, pron, 0, -1)
    }

    #[test]
    fn test_pause_records_delimit_breath_clauses() {
        let features = vec![
            voiced("あ", "ア"),
            voiced("か", "カ"),
            pause("、", "、"),
            voiced("さ", "サ"),
            voiced("た", "タ"),
            voiced("な", "ナ"),
            pause("、", "、"),
            pause("。", "、"),
            voiced("は", "ハ"),
            pause("、", "、"),
            voiced("ま", "マ"),
            voiced("や", "ヤ"),
        ];
        let parsed = parse_features(&features).unwrap();
        assert!(parsed.diagnostics.is_empty());
        let clauses = &parsed.utterance.clauses;
        assert_eq!(clauses.len(), 4);

        let breaths: Vec<Option<&str>> = clauses
            .iter()
            .map(|c| c.breath.as_ref().map(|w| w.text.as_str()))
            .collect();
        assert_eq!(breaths, vec![Some("、"), Some("、。"), Some("、"), None]);

        // A pause run of any length collapses to one pau mora.
        let breath = clauses[1].breath.as_ref().unwrap();
        assert_eq!(breath.moras.len(), 1);
        assert_eq!(breath.moras[0].vowel.symbol, VowelSymbol::Pau);
        assert_eq!(breath.moras[0].spelling, "、");
    }

    #[test]
    fn test_question_pause_marks_final_phrase_interrogative() {
        let features = vec![
            voiced("はれ", "ハレ"),
            pause("、", "、"),
            voiced("ですか", "デスカ"),
            pause("？", "？"),
        ];
        let parsed = parse_features(&features).unwrap();
        let clauses = &parsed.utterance.clauses;
        assert!(!clauses[0].accent_phrases[0].interrogative);
        assert!(clauses[1].accent_phrases[0].interrogative);
    }

    #[test]
    fn test_pause_detection_uses_pronunciation_not_surface() {
        // A record whose surface is punctuation but whose pronunciation is
        // voiced must not delimit a clause.
        let features = vec![voiced("（", "カッコ"), voiced("あ", "ア")];
        let parsed = parse_features(&features).unwrap();
        assert_eq!(parsed.utterance.clauses.len(), 1);
        assert!(parsed.utterance.clauses[0].breath.is_none());
    }

    #[test]
    fn test_leading_pause_run_dropped_with_diagnostic() {
        let features = vec![pause("、", "、"), pause("。", "、"), voiced("あ", "ア")];
        let parsed = parse_features(&features).unwrap();
        assert_eq!(parsed.utterance.clauses.len(), 1);
        assert!(parsed.utterance.clauses[0].breath.is_none());
        assert_eq!(
            parsed.diagnostics,
            vec![Diagnostic::LeadingPauseRun {
                text: "、。".to_string()
            }]
        );
    }

    #[test]
    fn test_pause_only_input_yields_empty_utterance() {
        let features = vec![pause("、", "、"), pause("？", "？")];
        let parsed = parse_features(&features).unwrap();
        assert!(parsed.utterance.is_empty());
        assert_eq!(parsed.diagnostics.len(), 1);
    }

    #[test]
    fn test_empty_input_yields_empty_utterance() {
        let parsed = parse_features(&[]).unwrap();
        assert!(parsed.utterance.is_empty());
        assert!(parsed.diagnostics.is_empty());
    }

    #[test]
    fn test_segmentation_failure_propagates() {
        let features = vec![voiced("x", "x")];
        let err = parse_features(&features).unwrap_err();
        assert!(matches!(err, ParseError::UnknownMoraSpelling { .. }));
    }
}
