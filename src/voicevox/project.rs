//! Tree → engine projection.
//!
//! The engine flattens the clause level away: breath words survive only as
//! `pause_mora` attachments on clause-final phrases, and an utterance-final
//! pause is dropped entirely because the engine deletes trailing silence.

use tracing::{debug, debug_span, warn};

use crate::diagnostics::Diagnostic;
use crate::parser::ParseError;
use crate::phoneme::VowelSymbol;
use crate::table::{self, PAUSE_COMMA, PROLONGED_SOUND_MARK};
use crate::tree::{AccentPhrase, BreathClause, Mora, Utterance};

use super::schema;

/// Projected accent phrases together with the repairs made along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub accent_phrases: Vec<schema::AccentPhrase>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Project a parsed utterance into the engine's accent-phrase records.
pub fn project_utterance(utterance: &Utterance) -> Result<Projection, ParseError> {
    let _span = debug_span!("project_utterance", clauses = utterance.clauses.len()).entered();
    let mut diagnostics = Vec::new();

    // The parser never emits a clause without voiced content, but a
    // hand-assembled tree can still open with one. It carries no pitch
    // contour, so skip it.
    let mut clauses = utterance.clauses.as_slice();
    if let Some(first) = clauses.first() {
        if first.accent_phrases.is_empty() {
            let text = clause_text(first);
            warn!(%text, "leading clause without voiced content skipped");
            diagnostics.push(Diagnostic::EmptyLeadingClause { text });
            clauses = &clauses[1..];
        }
    }

    let mut accent_phrases = Vec::new();
    let last_clause = clauses.len().saturating_sub(1);
    for (ci, clause) in clauses.iter().enumerate() {
        let last_phrase = clause.accent_phrases.len().saturating_sub(1);
        for (pi, phrase) in clause.accent_phrases.iter().enumerate() {
            // The engine drops any pause at absolute utterance end.
            let boundary = pi == last_phrase && ci != last_clause;
            accent_phrases.push(schema::AccentPhrase {
                moras: project_moras(phrase)?,
                accent: phrase.accent,
                pause_mora: boundary.then(pause_mora),
                is_interrogative: phrase.interrogative,
            });
        }
    }
    debug!(
        accent_phrases = accent_phrases.len(),
        diagnostics = diagnostics.len(),
        "projected utterance"
    );
    Ok(Projection {
        accent_phrases,
        diagnostics,
    })
}

fn project_moras(phrase: &AccentPhrase) -> Result<Vec<schema::Mora>, ParseError> {
    phrase.moras().map(project_mora).collect()
}

fn project_mora(mora: &Mora) -> Result<schema::Mora, ParseError> {
    let text: &str = if mora.spelling == PROLONGED_SOUND_MARK {
        // The engine keeps only realized phonemes, so the prolonged sound
        // mark respells as the katakana of the vowel it copied.
        prolonged_respelling(mora.vowel.symbol)?
    } else {
        &mora.spelling
    };
    Ok(schema::Mora {
        text: table::canonical_spelling(text).to_string(),
        consonant: mora.consonant.map(|c| c.as_str().to_string()),
        consonant_length: mora.consonant.map(|_| 0.0),
        vowel: mora.vowel.symbol_str().to_string(),
        vowel_length: 0.0,
        pitch: 0.0,
    })
}

fn prolonged_respelling(vowel: VowelSymbol) -> Result<&'static str, ParseError> {
    match vowel {
        VowelSymbol::A => Ok("ア"),
        VowelSymbol::I => Ok("イ"),
        VowelSymbol::U => Ok("ウ"),
        VowelSymbol::E => Ok("エ"),
        VowelSymbol::O => Ok("オ"),
        VowelSymbol::N | VowelSymbol::Cl | VowelSymbol::Pau => {
            Err(ParseError::ProlongedNonPlainVowel { vowel })
        }
    }
}

/// The engine's clause-boundary pause record, zero-length until a synthesis
/// query fills durations in.
fn pause_mora() -> schema::Mora {
    schema::Mora {
        text: PAUSE_COMMA.to_string(),
        consonant: None,
        consonant_length: None,
        vowel: VowelSymbol::Pau.as_str().to_string(),
        vowel_length: 0.0,
        pitch: 0.0,
    }
}

fn clause_text(clause: &BreathClause) -> String {
    clause
        .accent_phrases
        .iter()
        .flat_map(|phrase| phrase.words.iter())
        .chain(clause.breath.iter())
        .map(|word| word.text.as_str())
        .collect()
}
