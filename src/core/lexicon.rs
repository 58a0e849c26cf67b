//! Rule-based polarity scorer.
//!
//! Averages the polarity of every lexicon word found in the text. An
//! intensifier scales the next sentiment word, and a negation flips it and
//! halves it (`not good` is mildly negative, not as negative as `bad`).

use crate::core::{PolarityScorer, Result};
use std::collections::{HashMap, HashSet};

/// Multiplier applied to a negated word's polarity.
pub const NEGATION_FACTOR: f64 = -0.5;

/// How many tokens a pending negation or intensifier survives without
/// reaching a sentiment word (`not a very good idea`).
const MODIFIER_WINDOW: usize = 3;

const POSITIVE_WORDS: &[(&str, f64)] = &[
    ("love", 0.5),
    ("loved", 0.7),
    ("loves", 0.5),
    ("lovely", 0.5),
    ("like", 0.2),
    ("liked", 0.3),
    ("good", 0.7),
    ("great", 0.8),
    ("excellent", 1.0),
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("wonderful", 1.0),
    ("fantastic", 0.4),
    ("best", 1.0),
    ("better", 0.5),
    ("nice", 0.6),
    ("happy", 0.8),
    ("glad", 0.5),
    ("perfect", 1.0),
    ("beautiful", 0.85),
    ("brilliant", 0.9),
    ("enjoy", 0.4),
    ("enjoyed", 0.4),
    ("fun", 0.3),
    ("pleasant", 0.73),
    ("delightful", 1.0),
    ("impressive", 1.0),
    ("superb", 1.0),
    ("outstanding", 0.5),
    ("favorite", 0.5),
    ("cool", 0.35),
    ("fine", 0.42),
    ("helpful", 0.5),
    ("useful", 0.3),
    ("easy", 0.43),
    ("fast", 0.2),
    ("clean", 0.37),
    ("friendly", 0.38),
    ("recommend", 0.3),
    ("satisfied", 0.5),
    ("positive", 0.23),
    ("thanks", 0.2),
    ("win", 0.8),
];

const NEGATIVE_WORDS: &[(&str, f64)] = &[
    ("hate", -0.8),
    ("hated", -0.9),
    ("hates", -0.8),
    ("bad", -0.7),
    ("terrible", -1.0),
    ("awful", -1.0),
    ("horrible", -1.0),
    ("worst", -1.0),
    ("worse", -0.4),
    ("poor", -0.4),
    ("sad", -0.5),
    ("angry", -0.5),
    ("disappointing", -0.6),
    ("disappointed", -0.75),
    ("boring", -1.0),
    ("ugly", -0.7),
    ("useless", -0.5),
    ("stupid", -0.8),
    ("annoying", -0.8),
    ("broken", -0.4),
    ("wrong", -0.5),
    ("disgusting", -1.0),
    ("painful", -0.7),
    ("dreadful", -1.0),
    ("mediocre", -0.5),
    ("slow", -0.3),
    ("difficult", -0.5),
    ("expensive", -0.5),
    ("fail", -0.5),
    ("failed", -0.5),
    ("problem", -0.3),
    ("buggy", -0.6),
    ("rude", -0.6),
    ("waste", -0.2),
    ("negative", -0.3),
    ("unhappy", -0.6),
    ("lose", -0.6),
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("absolutely", 1.5),
    ("totally", 1.3),
    ("super", 1.3),
    ("quite", 1.1),
    ("somewhat", 0.7),
    ("slightly", 0.5),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "nothing", "neither", "nor", "without", "hardly", "barely",
    "cannot", "cant", "dont", "doesnt", "didnt", "isnt", "wasnt", "arent", "werent", "wont",
    "wouldnt", "shouldnt", "couldnt", "aint",
];

#[derive(Debug, Clone, PartialEq)]
pub struct LexiconResult {
    /// Mean polarity of the matched words, in `[-1, 1]`.
    pub polarity: f64,
    /// Matched words with the polarity they contributed after modifiers.
    pub matched_words: Vec<(String, f64)>,
}

#[derive(Debug, Clone)]
pub struct LexiconScorer {
    words: HashMap<String, f64>,
    intensifiers: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    pub fn new() -> Self {
        let words = POSITIVE_WORDS
            .iter()
            .chain(NEGATIVE_WORDS)
            .map(|(word, score)| (word.to_string(), *score))
            .collect();
        let intensifiers = INTENSIFIERS
            .iter()
            .map(|(word, mult)| (word.to_string(), *mult))
            .collect();
        let negations = NEGATIONS.iter().map(|word| word.to_string()).collect();

        Self {
            words,
            intensifiers,
            negations,
        }
    }

    /// Merges extra entries, replacing built-in scores for the same word.
    pub fn with_words<I, K>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        for (word, score) in extra {
            self.add_word(word.as_ref(), score);
        }
        self
    }

    pub fn add_word(&mut self, word: &str, score: f64) {
        self.words.insert(word.to_lowercase(), score.clamp(-1.0, 1.0));
    }

    pub fn word_score(&self, word: &str) -> Option<f64> {
        self.words.get(&word.to_lowercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn is_negation(&self, token: &str) -> bool {
        token.ends_with("n't") || self.negations.contains(token)
    }

    pub fn analyze(&self, text: &str) -> LexiconResult {
        let mut matched_words = Vec::new();
        let mut negate = false;
        let mut intensity = 1.0;
        let mut pending_for = 0usize;

        for token in tokenize(text) {
            if self.is_negation(&token) {
                negate = true;
                pending_for = 0;
                continue;
            }

            if let Some(mult) = self.intensifiers.get(&token) {
                intensity *= mult;
                pending_for = 0;
                continue;
            }

            if let Some(&base) = self.words.get(&token) {
                let mut score = base * intensity;
                if negate {
                    score *= NEGATION_FACTOR;
                }
                matched_words.push((token, score.clamp(-1.0, 1.0)));

                negate = false;
                intensity = 1.0;
                pending_for = 0;
                continue;
            }

            pending_for += 1;
            if pending_for >= MODIFIER_WINDOW {
                negate = false;
                intensity = 1.0;
                pending_for = 0;
            }
        }

        let polarity = if matched_words.is_empty() {
            0.0
        } else {
            let total: f64 = matched_words.iter().map(|(_, score)| score).sum();
            (total / matched_words.len() as f64).clamp(-1.0, 1.0)
        };

        LexiconResult {
            polarity,
            matched_words,
        }
    }
}

impl PolarityScorer for LexiconScorer {
    fn score(&self, text: &str) -> Result<f64> {
        Ok(self.analyze(text).polarity)
    }
}

/// Whether `word` survives tokenisation unchanged as exactly one token, i.e.
/// whether a lexicon entry for it can ever be matched.
pub fn is_single_token(word: &str) -> bool {
    match tokenize(word).as_slice() {
        [token] => *token == word.to_lowercase(),
        _ => false,
    }
}

/// Lowercased word tokens. Apostrophes stay inside words so contractions
/// like `don't` survive; typographic apostrophes are normalised first.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .replace('\u{2019}', "'")
        .split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|token| token.trim_matches('\''))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
