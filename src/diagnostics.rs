//! Recoverable anomalies, surfaced to the caller as values.
//!
//! Each variant has a fixed local repair (drop, ignore, or reset) applied at
//! the site that records it; a conversion that only hits anomalies still
//! completes. They are also mirrored to `tracing::warn!` where they occur,
//! but the returned list is the API.

use crate::phoneme::VowelSymbol;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Diagnostic {
    /// A word's pronunciation opened with the prolonged sound mark; the mark
    /// was dropped.
    #[error("prolonged sound mark cannot open a word; dropped in {word:?}")]
    LeadingProlongedMark { word: String },
    /// The first word of a voiced run carried the chain flag; treated as
    /// non-chaining.
    #[error("chain flag on {word:?} ignored: nothing precedes it in its clause")]
    ChainOnRunHead { word: String },
    /// Devoicing was requested on a vowel other than /a i u e o/; the vowel
    /// stays voiced.
    #[error("devoicing applies only to plain vowels; ignored on {vowel} in {spelling:?}")]
    DevoicedNonPlainVowel { spelling: String, vowel: VowelSymbol },
    /// The utterance opened with pause-only words; the run was dropped.
    #[error("pause-only words {text:?} cannot open an utterance; dropped")]
    LeadingPauseRun { text: String },
    /// Projection found a leading clause with no voiced content; skipped.
    #[error("leading clause {text:?} has no voiced content; skipped")]
    EmptyLeadingClause { text: String },
}
