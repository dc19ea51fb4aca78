//! Maximal-munch segmentation of a pronunciation string into mora tokens.
//!
//! The match set is every mora spelling plus the prolonged sound mark and
//! the two pause glyphs. Longest match is a structural property here: the
//! trie walk remembers the deepest terminal it passed, so no shorter
//! candidate can win while a longer one fits.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::table::{
    DEVOICING_MARK, MORA_SPELLINGS, PAUSE_COMMA, PAUSE_QUESTION, PROLONGED_SOUND_MARK,
};

use super::ParseError;

/// One segmented token: a spelling from the match set, plus whether a
/// devoicing diacritic trailed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoraToken<'a> {
    pub spelling: &'a str,
    pub devoiced: bool,
}

struct Node {
    children: HashMap<u8, Node>,
    terminal: bool,
}

impl Node {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            terminal: false,
        }
    }
}

struct SpellingTrie {
    root: Node,
}

impl SpellingTrie {
    /// Get or initialize the global singleton.
    fn global() -> &'static SpellingTrie {
        static INSTANCE: OnceLock<SpellingTrie> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let mut trie = SpellingTrie { root: Node::new() };
            for &(spelling, _, _) in MORA_SPELLINGS {
                trie.insert(spelling);
            }
            trie.insert(PROLONGED_SOUND_MARK);
            trie.insert(PAUSE_COMMA);
            trie.insert(PAUSE_QUESTION);
            trie
        })
    }

    fn insert(&mut self, token: &str) {
        let mut node = &mut self.root;
        for &b in token.as_bytes() {
            node = node.children.entry(b).or_insert_with(Node::new);
        }
        node.terminal = true;
    }

    /// Byte length of the longest token prefixing `rest`, if any. Tokens are
    /// whole UTF-8 strings, so a hit always lands on a char boundary.
    fn longest_match(&self, rest: &str) -> Option<usize> {
        let mut node = &self.root;
        let mut best = None;
        for (i, &b) in rest.as_bytes().iter().enumerate() {
            match node.children.get(&b) {
                Some(child) => node = child,
                None => break,
            }
            if node.terminal {
                best = Some(i + 1);
            }
        }
        best
    }
}

/// Split one word's pronunciation into mora tokens.
///
/// Fails if no candidate matches at some position; the error carries the
/// whole pronunciation and the unconsumed remainder.
pub fn segment_pronunciation(pron: &str) -> Result<Vec<MoraToken<'_>>, ParseError> {
    let trie = SpellingTrie::global();
    let mut tokens = Vec::new();
    let mut rest = pron;
    while !rest.is_empty() {
        let len =
            trie.longest_match(rest)
                .ok_or_else(|| ParseError::UnknownMoraSpelling {
                    pronunciation: pron.to_string(),
                    remainder: rest.to_string(),
                })?;
        let spelling = &rest[..len];
        rest = &rest[len..];
        let devoiced = rest.starts_with(DEVOICING_MARK);
        if devoiced {
            rest = &rest[DEVOICING_MARK.len_utf8()..];
        }
        tokens.push(MoraToken { spelling, devoiced });
    }
    Ok(tokens)
}
