//! The prosodic value tree: moras, words, accent phrases, breath clauses.
//!
//! Built once per conversion call and never mutated afterwards. The mora
//! shape (at most one consonant, vowel last, consonant never devoiced) is
//! structural rather than checked.

use crate::phoneme::{ConsonantSymbol, Phoneme, Vowel};

/// Minimal rhythmic unit: optional consonant plus one vowel, and the literal
/// spelling it was segmented from (katakana run, prolonged sound mark, or a
/// pause glyph; any devoicing diacritic already stripped).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mora {
    pub consonant: Option<ConsonantSymbol>,
    pub vowel: Vowel,
    pub spelling: String,
}

impl Mora {
    /// The phonemes in order, vowel last.
    pub fn phonemes(&self) -> impl Iterator<Item = Phoneme> + '_ {
        self.consonant
            .map(Phoneme::Consonant)
            .into_iter()
            .chain(std::iter::once(Phoneme::Vowel(self.vowel)))
    }
}

/// One front-end word: its moras and its surface text. Punctuation-only words
/// carry no moras but may still surface as breath text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub moras: Vec<Mora>,
    pub text: String,
}

/// Pitch level of one mora within its accent phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Low,
    High,
}

/// A run of words sharing one pitch-accent contour.
///
/// `accent` is the mora position after which pitch drops, already resolved
/// from the front end's accent type (type 0 = phrase-final).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccentPhrase {
    pub words: Vec<Word>,
    pub accent: usize,
    pub interrogative: bool,
}

impl AccentPhrase {
    /// All moras of the phrase, in order across its words.
    pub fn moras(&self) -> impl Iterator<Item = &Mora> {
        self.words.iter().flat_map(|word| word.moras.iter())
    }

    pub fn mora_count(&self) -> usize {
        self.words.iter().map(|word| word.moras.len()).sum()
    }

    /// Tokyo-style pitch pattern: high on `[0, accent)`, then low; when the
    /// accent position is past the first mora, the phrase-initial mora is low
    /// regardless. Saturates if the front end reported an accent position
    /// beyond the mora count.
    pub fn mora_tones(&self) -> Vec<Tone> {
        let count = self.mora_count();
        let mut tones = vec![Tone::Low; count];
        for tone in tones.iter_mut().take(self.accent) {
            *tone = Tone::High;
        }
        if self.accent > 1 {
            if let Some(first) = tones.first_mut() {
                *first = Tone::Low;
            }
        }
        tones
    }
}

/// A run of accent phrases produced in one breath. `breath` is the trailing
/// pause word, absent for the utterance's final clause or when the front end
/// emitted no trailing pause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreathClause {
    pub accent_phrases: Vec<AccentPhrase>,
    pub breath: Option<Word>,
}

/// One fully parsed input: the ordered breath clauses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Utterance {
    pub clauses: Vec<BreathClause>,
}

impl Utterance {
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Reassembled surface text, breath words included.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for clause in &self.clauses {
            for phrase in &clause.accent_phrases {
                for word in &phrase.words {
                    text.push_str(&word.text);
                }
            }
            if let Some(breath) = &clause.breath {
                text.push_str(&breath.text);
            }
        }
        text
    }

    /// Concatenated mora spellings, breath moras included.
    pub fn pronunciation(&self) -> String {
        let mut pron = String::new();
        for clause in &self.clauses {
            for phrase in &clause.accent_phrases {
                for word in &phrase.words {
                    for mora in &word.moras {
                        pron.push_str(&mora.spelling);
                    }
                }
            }
            if let Some(breath) = &clause.breath {
                for mora in &breath.moras {
                    pron.push_str(&mora.spelling);
                }
            }
        }
        pron
    }

    /// The flat phoneme sequence, one `pau` per breath word.
    pub fn phonemes(&self) -> Vec<Phoneme> {
        let mut phonemes = Vec::new();
        for clause in &self.clauses {
            for phrase in &clause.accent_phrases {
                for word in &phrase.words {
                    for mora in &word.moras {
                        phonemes.extend(mora.phonemes());
                    }
                }
            }
            if let Some(breath) = &clause.breath {
                for mora in &breath.moras {
                    phonemes.extend(mora.phonemes());
                }
            }
        }
        phonemes
    }
}
