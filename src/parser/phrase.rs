//! Accent phrase structuring: chain grouping and accent resolution.

use tracing::warn;

use crate::diagnostics::Diagnostic;
use crate::njd::NjdFeature;
use crate::tree::AccentPhrase;

use super::word::parse_word;
use super::ParseError;

/// Split one voiced run into accent phrases. `last_interrogative` marks the
/// final phrase of a run whose trailing pause was a question mark.
pub(super) fn parse_accent_phrases(
    run: &[NjdFeature],
    last_interrogative: bool,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Vec<AccentPhrase>, ParseError> {
    let groups = chain_groups(run, diagnostics);
    let mut phrases = Vec::with_capacity(groups.len());
    let last = groups.len().saturating_sub(1);
    for (i, group) in groups.iter().enumerate() {
        let interrogative = last_interrogative && i == last;
        phrases.push(parse_accent_phrase(group, interrogative, diagnostics)?);
    }
    Ok(phrases)
}

/// Group consecutive records by their chain flags. A record that chains
/// joins the group of the record before it; one that does not opens a new
/// group. The first record of a run has nothing to chain to, so a set flag
/// there is ignored.
fn chain_groups<'a>(
    run: &'a [NjdFeature],
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<&'a [NjdFeature]> {
    let mut groups = Vec::new();
    let mut start = 0;
    for (i, feat) in run.iter().enumerate() {
        if i == 0 {
            if feat.chains() {
                warn!(word = %feat.string, "chain flag set on run head ignored");
                diagnostics.push(Diagnostic::ChainOnRunHead {
                    word: feat.string.clone(),
                });
            }
            continue;
        }
        if !feat.chains() {
            groups.push(&run[start..i]);
            start = i;
        }
    }
    if start < run.len() {
        groups.push(&run[start..]);
    }
    groups
}

fn parse_accent_phrase(
    feats: &[NjdFeature],
    interrogative: bool,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<AccentPhrase, ParseError> {
    let mut words = Vec::with_capacity(feats.len());
    for feat in feats {
        words.push(parse_word(feat, diagnostics)?);
    }
    let mora_count: usize = words.iter().map(|w| w.moras.len()).sum();
    // The front end records the accent type on the phrase-head feature; type
    // zero (heiban) puts the nucleus on the final mora.
    let accent_type = feats[0].acc;
    let accent = if accent_type > 0 {
        accent_type as usize
    } else {
        mora_count
    };
    Ok(AccentPhrase {
        words,
        accent,
        interrogative,
    })
}
