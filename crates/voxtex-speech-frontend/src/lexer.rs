//! Utterance tokenizer with longest-phrase matching.

use fxhash::FxHashMap;
use lazy_static::lazy_static;

use crate::lexicon::{Lexeme, LEXICON};

lazy_static! {
    /// Phrases indexed by their first word, longest phrase first.
    static ref PHRASE_INDEX: FxHashMap<&'static str, Vec<(Vec<&'static str>, Lexeme)>> = {
        let mut index: FxHashMap<&'static str, Vec<(Vec<&'static str>, Lexeme)>> =
            FxHashMap::default();
        for &(phrase, lexeme) in LEXICON {
            let words: Vec<&'static str> = phrase.split_whitespace().collect();
            if let Some(first) = words.first() {
                index.entry(*first).or_default().push((words, lexeme));
            }
        }
        for candidates in index.values_mut() {
            // Stable: equal-length phrases keep table order.
            candidates.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        }
        index
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Word(String),
    Lexeme(Lexeme),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// The spoken words this token covers, space-joined.
    pub text: String,
}

impl Token {
    pub fn lexeme(&self) -> Option<Lexeme> {
        match self.kind {
            TokenKind::Lexeme(lexeme) => Some(lexeme),
            TokenKind::Word(_) => None,
        }
    }

    pub fn word(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Word(word) => Some(word),
            TokenKind::Lexeme(_) => None,
        }
    }
}

/// Split a lowercased utterance into tokens. At every position the longest
/// known phrase wins; anything else becomes a plain word.
pub fn tokenize(input: &str) -> Vec<Token> {
    let lowered = input.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    let mut tokens = Vec::with_capacity(words.len());
    let mut i = 0;

    while i < words.len() {
        match match_phrase(&words[i..]) {
            Some((len, lexeme)) => {
                tokens.push(Token {
                    kind: TokenKind::Lexeme(lexeme),
                    text: words[i..i + len].join(" "),
                });
                i += len;
            }
            None => {
                tokens.push(Token {
                    kind: TokenKind::Word(words[i].to_string()),
                    text: words[i].to_string(),
                });
                i += 1;
            }
        }
    }

    tokens
}

fn match_phrase(words: &[&str]) -> Option<(usize, Lexeme)> {
    let candidates = PHRASE_INDEX.get(*words.first()?)?;
    candidates
        .iter()
        .find(|(phrase, _)| words.len() >= phrase.len() && words[..phrase.len()] == phrase[..])
        .map(|(phrase, lexeme)| (phrase.len(), *lexeme))
}
