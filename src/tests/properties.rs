//! Property-based tests over random well-formed feature sequences.
//!
//! Pronunciations are assembled from real mora spellings, with devoicing
//! and prolongation only where both stages accept them, so the whole
//! pipeline must succeed; the properties then pin the structural
//! invariants of the result.

use proptest::prelude::*;

use crate::diagnostics::Diagnostic;
use crate::njd::NjdFeature;
use crate::table::MORA_SPELLINGS;
use crate::tree::Tone;
use crate::{parse_features, project_utterance};

use super::feat;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// A word pronunciation of 1..=4 moras drawn from the spelling table, each
/// optionally devoiced and optionally prolonged when its vowel allows it.
fn arb_word_pron() -> impl Strategy<Value = String> {
    let mora = (
        0..MORA_SPELLINGS.len(),
        prop::bool::weighted(0.15),
        prop::bool::weighted(0.15),
    );
    prop::collection::vec(mora, 1..=4).prop_map(|moras| {
        let mut pron = String::new();
        for (i, devoice, prolong) in moras {
            let (spelling, _, vowel) = MORA_SPELLINGS[i];
            pron.push_str(spelling);
            if devoice && vowel.is_plain() {
                pron.push('’');
            }
            if prolong && vowel.is_plain() {
                pron.push_str("ー");
            }
        }
        pron
    })
}

fn arb_voiced() -> impl Strategy<Value = NjdFeature> {
    (arb_word_pron(), 0..=6i64, prop::bool::weighted(0.3))
        .prop_map(|(pron, acc, chains)| feat("語", &pron, acc, if chains { 1 } else { -1 }))
}

fn arb_record() -> impl Strategy<Value = NjdFeature> {
    prop_oneof![
        6 => arb_voiced(),
        1 => Just(feat("、", "、", 0, -1)),
        1 => Just(feat("？", "？", 0, -1)),
    ]
}

fn arb_features() -> impl Strategy<Value = Vec<NjdFeature>> {
    prop::collection::vec(arb_record(), 0..12)
}

fn is_pause_pron(pron: &str) -> bool {
    pron == "、" || pron == "？"
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn test_parse_succeeds_and_preserves_text(features in arb_features()) {
        let parsed = parse_features(&features).unwrap();
        let leading_pause_diags = parsed
            .diagnostics
            .iter()
            .filter(|d| matches!(d, Diagnostic::LeadingPauseRun { .. }))
            .count();
        match features.first() {
            Some(first) if is_pause_pron(&first.pron) => {
                prop_assert_eq!(leading_pause_diags, 1);
            }
            _ => {
                prop_assert_eq!(leading_pause_diags, 0);
                let text: String = features.iter().map(|f| f.string.as_str()).collect();
                prop_assert_eq!(parsed.utterance.text(), text);
            }
        }
    }

    #[test]
    fn test_no_clause_is_pause_born(features in arb_features()) {
        let parsed = parse_features(&features).unwrap();
        for clause in &parsed.utterance.clauses {
            prop_assert!(!clause.accent_phrases.is_empty());
            for phrase in &clause.accent_phrases {
                prop_assert!(!phrase.words.is_empty());
                prop_assert!(phrase.mora_count() > 0);
            }
        }
    }

    #[test]
    fn test_pause_and_interrogative_placement(features in arb_features()) {
        let parsed = parse_features(&features).unwrap();
        let projection = project_utterance(&parsed.utterance).unwrap();

        let mut expected_pause = Vec::new();
        let mut expected_interrogative = Vec::new();
        let clause_count = parsed.utterance.clauses.len();
        for (ci, clause) in parsed.utterance.clauses.iter().enumerate() {
            let phrase_count = clause.accent_phrases.len();
            for (pi, phrase) in clause.accent_phrases.iter().enumerate() {
                expected_pause.push(pi == phrase_count - 1 && ci != clause_count - 1);
                expected_interrogative.push(phrase.interrogative);
            }
        }
        let actual_pause: Vec<bool> = projection
            .accent_phrases
            .iter()
            .map(|ap| ap.pause_mora.is_some())
            .collect();
        let actual_interrogative: Vec<bool> = projection
            .accent_phrases
            .iter()
            .map(|ap| ap.is_interrogative)
            .collect();
        prop_assert_eq!(expected_pause, actual_pause);
        prop_assert_eq!(expected_interrogative, actual_interrogative);
    }

    #[test]
    fn test_mora_counts_conserved_and_projection_deterministic(features in arb_features()) {
        let parsed = parse_features(&features).unwrap();
        let projection = project_utterance(&parsed.utterance).unwrap();

        let tree_moras: usize = parsed
            .utterance
            .clauses
            .iter()
            .flat_map(|c| &c.accent_phrases)
            .map(|p| p.mora_count())
            .sum();
        let projected_moras: usize = projection
            .accent_phrases
            .iter()
            .map(|ap| ap.moras.len())
            .sum();
        prop_assert_eq!(tree_moras, projected_moras);

        let again = project_utterance(&parsed.utterance).unwrap();
        prop_assert_eq!(projection, again);
    }

    #[test]
    fn test_heiban_accent_is_mora_count(prons in prop::collection::vec(arb_word_pron(), 1..6)) {
        let features: Vec<NjdFeature> =
            prons.iter().map(|p| feat("語", p, 0, -1)).collect();
        let parsed = parse_features(&features).unwrap();
        let projection = project_utterance(&parsed.utterance).unwrap();
        for ap in &projection.accent_phrases {
            prop_assert_eq!(ap.accent, ap.moras.len());
        }
    }

    #[test]
    fn test_explicit_accent_copied(pron in arb_word_pron(), acc in 1..=9i64) {
        let features = vec![feat("語", &pron, acc, -1)];
        let parsed = parse_features(&features).unwrap();
        let phrase = &parsed.utterance.clauses[0].accent_phrases[0];
        prop_assert_eq!(phrase.accent, acc as usize);
    }

    #[test]
    fn test_tone_shape(features in arb_features()) {
        let parsed = parse_features(&features).unwrap();
        for clause in &parsed.utterance.clauses {
            for phrase in &clause.accent_phrases {
                let tones = phrase.mora_tones();
                prop_assert_eq!(tones.len(), phrase.mora_count());
                if phrase.accent > 1 {
                    prop_assert_eq!(tones[0], Tone::Low);
                } else if phrase.accent == 1 {
                    prop_assert_eq!(tones[0], Tone::High);
                }
            }
        }
    }
}
