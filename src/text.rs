//! A [`Text`] model turns a whole corpus into a [`Chain`] over its sentences, and generates new
//! sentences from it.
//!
//! Generated sentences are tested before they are returned: a sentence that copies too long a
//! run of words from the corpus is rejected, and generation is retried. How hard to try is set
//! with [`SentenceOptions`].

use std::sync::LazyLock;

use deunicode::deunicode;
use rand::Rng;
use regex::Regex;
use tracing::{debug, trace};

use crate::chain::Chain;
use crate::error::ModelError;
use crate::splitters::{join_words, split_into_sentences, split_words};

/// Sentences that contain quotes or brackets, which the chain cannot balance. Matched against
/// the ASCII transliteration, so curly quotes count too.
static REJECT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(^')|('$)|\s'|'\s|["()\[\]]"#).expect("reject pattern is valid")
});

/// The result of asking a model for a sentence. Not finding one is not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Generated {
    Found(String),
    NotFound,
}

impl Generated {
    pub fn is_found(&self) -> bool {
        matches!(self, Generated::Found(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Generated::Found(s) => Some(s),
            Generated::NotFound => None,
        }
    }
}

impl From<Option<String>> for Generated {
    fn from(value: Option<String>) -> Self {
        value.map_or(Generated::NotFound, Generated::Found)
    }
}

/// Knobs for [`Text::make_sentence()`].
#[derive(Clone, Debug, PartialEq)]
pub struct SentenceOptions {
    /// How many sentences to generate before giving up.
    pub tries: usize,
    /// Longest run of copied words allowed, as a share of the sentence length.
    pub max_overlap_ratio: f64,
    /// Longest run of copied words allowed, in words.
    pub max_overlap_total: usize,
    /// Whether to reject sentences that copy the corpus.
    pub test_output: bool,
    pub max_words: Option<usize>,
    pub min_words: Option<usize>,
}

impl SentenceOptions {
    pub const DEFAULT_TRIES: usize = 10;
    pub const DEFAULT_MAX_OVERLAP_RATIO: f64 = 0.7;
    pub const DEFAULT_MAX_OVERLAP_TOTAL: usize = 15;

    pub fn with_tries(mut self, tries: usize) -> Self {
        self.tries = tries;
        self
    }
}

impl Default for SentenceOptions {
    fn default() -> Self {
        Self {
            tries: Self::DEFAULT_TRIES,
            max_overlap_ratio: Self::DEFAULT_MAX_OVERLAP_RATIO,
            max_overlap_total: Self::DEFAULT_MAX_OVERLAP_TOTAL,
            test_output: true,
            max_words: None,
            min_words: None,
        }
    }
}

/// Sentence generating model built from a corpus.
///
/// ```
/// # use markovish_text::{Generated, Text, SentenceOptions};
/// # use rand::thread_rng;
/// let text = Text::builder().build("The cat sat. The dog ran.").unwrap();
/// assert_eq!(text.sentence_count(), 2);
///
/// // Every possible sentence is a copy of the corpus, so it is rejected
/// assert_eq!(
///     text.make_sentence(&mut thread_rng(), &SentenceOptions::default()),
///     Generated::NotFound
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Text {
    chain: Chain,
    /// Accepted sentences joined by a space. `None` if the original is not retained.
    rejoined: Option<String>,
    sentence_count: usize,
}

impl Text {
    pub fn builder() -> TextBuilder {
        TextBuilder::new()
    }

    /// Number of corpus sentences the chain was built from.
    pub fn sentence_count(&self) -> usize {
        self.sentence_count
    }

    /// Whether `words` are far enough from the corpus to count as a new sentence. Any run of
    /// `min(max_overlap_total, round(max_overlap_ratio * len)) + 1` words found verbatim in the
    /// corpus fails the test. Halves round to even.
    pub fn test_sentence_output(
        &self,
        words: &[&str],
        max_overlap_ratio: f64,
        max_overlap_total: usize,
    ) -> bool {
        let Some(rejoined) = &self.rejoined else {
            return true;
        };

        let overlap_ratio = (max_overlap_ratio * words.len() as f64).round_ties_even() as usize;
        let overlap_max = max_overlap_total.min(overlap_ratio);
        let overlap_over = overlap_max + 1;
        let gram_count = words.len().saturating_sub(overlap_max).max(1);

        (0..gram_count).all(|i| {
            let gram = &words[i..(i + overlap_over).min(words.len())];
            !rejoined.contains(&join_words(gram.iter().copied()))
        })
    }

    /// Tries to generate a new sentence, at most `options.tries` times.
    pub fn make_sentence(&self, rng: &mut impl Rng, options: &SentenceOptions) -> Generated {
        for attempt in 0..options.tries {
            let words = self.chain.walk(rng);

            if options.max_words.is_some_and(|max| words.len() > max)
                || options.min_words.is_some_and(|min| words.len() < min)
            {
                trace!(attempt, words = words.len(), "sentence length out of bounds");
                continue;
            }

            if options.test_output
                && !self.test_sentence_output(
                    &words,
                    options.max_overlap_ratio,
                    options.max_overlap_total,
                )
            {
                trace!(attempt, "sentence overlaps corpus");
                continue;
            }

            return Generated::Found(join_words(words));
        }

        Generated::NotFound
    }

    /// Tries to generate a sentence between `min_chars` and `max_chars` characters long
    /// (inclusive), calling [`Text::make_sentence()`] at most `options.tries` times.
    ///
    /// Characters are counted as `char`s, so combining marks count on their own.
    pub fn make_short_sentence(
        &self,
        rng: &mut impl Rng,
        max_chars: usize,
        min_chars: usize,
        options: &SentenceOptions,
    ) -> Generated {
        for _ in 0..options.tries {
            if let Generated::Found(sentence) = self.make_sentence(rng, options) {
                let len = sentence.chars().count();
                if (min_chars..=max_chars).contains(&len) {
                    return Generated::Found(sentence);
                }
            }
        }

        Generated::NotFound
    }
}

/// Builder for [`Text`].
#[derive(Clone, Debug)]
pub struct TextBuilder {
    state_size: usize,
    well_formed: bool,
    retain_original: bool,
}

impl TextBuilder {
    pub const DEFAULT_STATE_SIZE: usize = 2;

    pub fn new() -> Self {
        Self {
            state_size: Self::DEFAULT_STATE_SIZE,
            well_formed: true,
            retain_original: true,
        }
    }

    /// How many words the chain looks at to pick the next one.
    pub fn state_size(mut self, state_size: usize) -> Self {
        self.state_size = state_size;
        self
    }

    /// Skip corpus sentences with quotes or brackets.
    pub fn well_formed(mut self, well_formed: bool) -> Self {
        self.well_formed = well_formed;
        self
    }

    /// Keep the corpus around, so generated sentences can be tested against it.
    pub fn retain_original(mut self, retain_original: bool) -> Self {
        self.retain_original = retain_original;
        self
    }

    fn accepts(&self, sentence: &str) -> bool {
        !sentence.trim().is_empty()
            && !(self.well_formed && REJECT_PATTERN.is_match(&deunicode(sentence)))
    }

    /// Uses up the builder and creates a model over `corpus`.
    ///
    /// # Errors
    ///
    /// If the state size is zero, or if no sentence in `corpus` is accepted.
    pub fn build(self, corpus: &str) -> Result<Text, ModelError> {
        if self.state_size == 0 {
            return Err(ModelError::InvalidStateSize(self.state_size));
        }

        let sentences: Vec<&str> = split_into_sentences(corpus)
            .into_iter()
            .filter(|s| self.accepts(s))
            .collect();

        let mut cb = Chain::builder(self.state_size);
        for sentence in &sentences {
            cb.feed_sentence(split_words(sentence));
        }
        let chain = cb.build()?;

        let rejoined = self
            .retain_original
            .then(|| join_words(sentences.iter().flat_map(|s| split_words(s))));

        debug!(
            sentences = sentences.len(),
            states = chain.len(),
            state_size = self.state_size,
            "built text model"
        );

        Ok(Text {
            chain,
            rejoined,
            sentence_count: sentences.len(),
        })
    }
}

impl Default for TextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
