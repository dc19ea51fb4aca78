//! Word parsing: mora tokens to phoneme-resolved moras.

use tracing::warn;

use crate::diagnostics::Diagnostic;
use crate::njd::NjdFeature;
use crate::phoneme::{Vowel, VowelSymbol};
use crate::table::{self, PAUSE_COMMA, PAUSE_QUESTION, PROLONGED_SOUND_MARK};
use crate::tree::{Mora, Word};

use super::segment::segment_pronunciation;
use super::ParseError;

/// Parse one feature record into a [`Word`].
pub(super) fn parse_word(
    feat: &NjdFeature,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Word, ParseError> {
    let moras = parse_moras(&feat.pron, &feat.string, diagnostics)?;
    Ok(Word {
        moras,
        text: feat.string.clone(),
    })
}

fn parse_moras(
    pron: &str,
    word_text: &str,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Vec<Mora>, ParseError> {
    if pron.is_empty() {
        return Ok(Vec::new());
    }
    let tokens = segment_pronunciation(pron)?;

    // A prolonged mark with nothing before it in the same word cannot copy a
    // vowel. Drop it rather than fail the whole utterance.
    let tokens = match tokens.first() {
        Some(token) if token.spelling == PROLONGED_SOUND_MARK => {
            warn!(word = word_text, "leading prolonged sound mark dropped");
            diagnostics.push(Diagnostic::LeadingProlongedMark {
                word: word_text.to_string(),
            });
            &tokens[1..]
        }
        _ => &tokens[..],
    };

    let mut moras: Vec<Mora> = Vec::with_capacity(tokens.len());
    for token in tokens {
        let mora = match token.spelling {
            PAUSE_COMMA | PAUSE_QUESTION => Mora {
                consonant: None,
                vowel: Vowel::voiced(VowelSymbol::Pau),
                spelling: token.spelling.to_string(),
            },
            PROLONGED_SOUND_MARK => {
                let prev = moras.last().ok_or_else(|| ParseError::OrphanProlongedMark {
                    word: word_text.to_string(),
                })?;
                Mora {
                    consonant: None,
                    vowel: Vowel {
                        symbol: prev.vowel.symbol,
                        devoiced: prev.vowel.devoiced || token.devoiced,
                    },
                    spelling: PROLONGED_SOUND_MARK.to_string(),
                }
            }
            spelling => {
                let (consonant, symbol) = table::mora_phonemes(spelling)
                    .expect("segmenter emits only spellings present in the mora table");
                let devoiced = if token.devoiced && !symbol.is_plain() {
                    warn!(spelling, vowel = %symbol, "devoicing mark on non-plain vowel ignored");
                    diagnostics.push(Diagnostic::DevoicedNonPlainVowel {
                        spelling: spelling.to_string(),
                        vowel: symbol,
                    });
                    false
                } else {
                    token.devoiced
                };
                Mora {
                    consonant,
                    vowel: Vowel { symbol, devoiced },
                    spelling: spelling.to_string(),
                }
            }
        };
        moras.push(mora);
    }
    Ok(moras)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phoneme::ConsonantSymbol;

    fn moras(pron: &str) -> Vec<Mora> {
        let mut diags = Vec::new();
        parse_moras(pron, "語", &mut diags).unwrap()
    }

    #[test]
    fn test_phonemes_resolved_from_table() {
        let moras = moras("ギョウザ");
        assert_eq!(moras.len(), 3);
        assert_eq!(moras[0].consonant, Some(ConsonantSymbol::Gy));
        assert_eq!(moras[0].vowel.symbol, VowelSymbol::O);
        assert_eq!(moras[1].consonant, None);
        assert_eq!(moras[1].vowel.symbol, VowelSymbol::U);
        assert_eq!(moras[2].consonant, Some(ConsonantSymbol::Z));
        assert_eq!(moras[2].vowel.symbol, VowelSymbol::A);
    }

    #[test]
    fn test_prolonged_mark_copies_previous_vowel() {
        let moras = moras("アタタカーイ");
        assert_eq!(moras.len(), 6);
        let prolonged = &moras[4];
        assert_eq!(prolonged.consonant, None);
        assert_eq!(prolonged.vowel.symbol, VowelSymbol::A);
        assert!(!prolonged.vowel.devoiced);
        assert_eq!(prolonged.spelling, "ー");
    }

    #[test]
    fn test_prolonged_mark_inherits_devoicing() {
        let inherited = moras("ス’ー");
        assert!(inherited[0].vowel.devoiced);
        assert!(inherited[1].vowel.devoiced);

        let own_mark = moras("スー’");
        assert!(!own_mark[0].vowel.devoiced);
        assert!(own_mark[1].vowel.devoiced);
    }

    #[test]
    fn test_devoicing_mark_sets_vowel_flag() {
        let moras = moras("デス’");
        assert!(!moras[0].vowel.devoiced);
        assert!(moras[1].vowel.devoiced);
        assert_eq!(moras[1].vowel.symbol, VowelSymbol::U);
    }

    #[test]
    fn test_leading_prolonged_mark_dropped_with_diagnostic() {
        let mut diags = Vec::new();
        let moras = parse_moras("ーア", "ーあ", &mut diags).unwrap();
        assert_eq!(moras.len(), 1);
        assert_eq!(moras[0].spelling, "ア");
        assert_eq!(
            diags,
            vec![Diagnostic::LeadingProlongedMark {
                word: "ーあ".to_string()
            }]
        );

        let mut diags = Vec::new();
        let moras = parse_moras("ー", "ー", &mut diags).unwrap();
        assert!(moras.is_empty());
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn test_second_orphan_prolonged_mark_is_an_error() {
        let mut diags = Vec::new();
        let err = parse_moras("ーー", "ーー", &mut diags).unwrap_err();
        assert_eq!(
            err,
            ParseError::OrphanProlongedMark {
                word: "ーー".to_string()
            }
        );
    }

    #[test]
    fn test_devoiced_moraic_nasal_stays_voiced() {
        let mut diags = Vec::new();
        let moras = parse_moras("ン’", "ん", &mut diags).unwrap();
        assert!(!moras[0].vowel.devoiced);
        assert_eq!(
            diags,
            vec![Diagnostic::DevoicedNonPlainVowel {
                spelling: "ン".to_string(),
                vowel: VowelSymbol::N,
            }]
        );
    }

    #[test]
    fn test_pause_glyph_becomes_pau_mora() {
        let moras = moras("、");
        assert_eq!(moras.len(), 1);
        assert_eq!(moras[0].vowel.symbol, VowelSymbol::Pau);
        assert_eq!(moras[0].spelling, "、");
    }

    #[test]
    fn test_empty_pronunciation_yields_no_moras() {
        assert!(moras("").is_empty());
    }
}
