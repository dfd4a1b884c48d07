//! Turns a corpus into exactly one generated sentence, the way the command line tool does it.
//!
//! A model is built with a state size of [`STATE_SIZE`]. A sentence is then requested with a
//! generous retry budget, and if none passes, a short sentence of at most
//! [`SHORT_SENTENCE_MAX_CHARS`] characters is requested instead. Missing both is fine; the
//! caller simply has nothing to print.

use rand::Rng;
use tracing::debug;

use crate::error::GenerateError;
use crate::text::{Generated, SentenceOptions, Text};

/// Number of words the generator's chain looks at.
pub const STATE_SIZE: usize = 2;

/// Primary retry budget.
pub const DEFAULT_TRIES: usize = 100;

pub const SHORT_SENTENCE_MAX_CHARS: usize = 140;

/// Anything that can be asked for sentences.
pub trait SentenceModel {
    fn make_sentence(&self, rng: &mut impl Rng, options: &SentenceOptions) -> Generated;

    fn make_short_sentence(
        &self,
        rng: &mut impl Rng,
        max_chars: usize,
        options: &SentenceOptions,
    ) -> Generated;
}

impl SentenceModel for Text {
    fn make_sentence(&self, rng: &mut impl Rng, options: &SentenceOptions) -> Generated {
        Text::make_sentence(self, rng, options)
    }

    fn make_short_sentence(
        &self,
        rng: &mut impl Rng,
        max_chars: usize,
        options: &SentenceOptions,
    ) -> Generated {
        Text::make_short_sentence(self, rng, max_chars, 0, options)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub state_size: usize,
    /// How many sentences the first request may generate before giving up.
    pub tries: usize,
    pub short_max_chars: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            state_size: STATE_SIZE,
            tries: DEFAULT_TRIES,
            short_max_chars: SHORT_SENTENCE_MAX_CHARS,
        }
    }
}

/// Builds a model over `corpus` and generates a sentence from it.
///
/// # Errors
///
/// [`GenerateError::NoInput`] if `corpus` is only whitespace, in which case no model is built.
/// [`GenerateError::Model`] if the model could not be built.
pub fn generate(
    corpus: &str,
    config: &GeneratorConfig,
    rng: &mut impl Rng,
) -> Result<Generated, GenerateError> {
    if corpus.trim().is_empty() {
        return Err(GenerateError::NoInput);
    }

    let text = Text::builder()
        .state_size(config.state_size)
        .build(corpus)
        .map_err(GenerateError::Model)?;

    Ok(generate_from(&text, config, rng))
}

/// Asks `model` for a sentence, falling back to a short sentence on a miss.
pub fn generate_from(
    model: &impl SentenceModel,
    config: &GeneratorConfig,
    rng: &mut impl Rng,
) -> Generated {
    let options = SentenceOptions::default().with_tries(config.tries);
    match model.make_sentence(rng, &options) {
        found @ Generated::Found(_) => found,
        Generated::NotFound => {
            debug!(
                tries = config.tries,
                max_chars = config.short_max_chars,
                "no sentence found, trying a short one"
            );
            model.make_short_sentence(rng, config.short_max_chars, &SentenceOptions::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use rand::{rngs::StdRng, thread_rng, SeedableRng};

    use super::*;
    use crate::error::ModelError;

    /// Replies with scripted answers and records what it was asked.
    struct Scripted {
        sentence: Generated,
        short: Generated,
        calls: RefCell<Vec<String>>,
    }

    impl Scripted {
        fn new(sentence: Generated, short: Generated) -> Self {
            Self {
                sentence,
                short,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl SentenceModel for Scripted {
        fn make_sentence(&self, _rng: &mut impl Rng, options: &SentenceOptions) -> Generated {
            self.calls
                .borrow_mut()
                .push(format!("sentence tries={}", options.tries));
            self.sentence.clone()
        }

        fn make_short_sentence(
            &self,
            _rng: &mut impl Rng,
            max_chars: usize,
            _options: &SentenceOptions,
        ) -> Generated {
            self.calls
                .borrow_mut()
                .push(format!("short max_chars={max_chars}"));
            self.short.clone()
        }
    }

    #[test]
    fn empty_corpus_is_no_input() {
        for corpus in ["", " ", "\n\t  \r\n"] {
            assert!(matches!(
                generate(corpus, &GeneratorConfig::default(), &mut thread_rng()),
                Err(GenerateError::NoInput)
            ));
        }
    }

    #[test]
    fn no_input_message() {
        assert_eq!(
            GenerateError::NoInput.to_string(),
            "Error: No input text provided."
        );
    }

    #[test]
    fn unusable_corpus_is_model_error() {
        let err = generate("\"quoted\" (bracketed)", &GeneratorConfig::default(), &mut thread_rng())
            .unwrap_err();
        assert!(matches!(err, GenerateError::Model(ModelError::EmptyCorpus)));
        assert_eq!(
            err.to_string(),
            "Error generating text: corpus contains no usable sentences"
        );
    }

    #[test]
    fn found_sentence_skips_fallback() {
        let model = Scripted::new(
            Generated::Found("A new sentence.".to_string()),
            Generated::NotFound,
        );
        let res = generate_from(&model, &GeneratorConfig::default(), &mut thread_rng());
        assert_eq!(res, Generated::Found("A new sentence.".to_string()));
        assert_eq!(*model.calls.borrow(), vec!["sentence tries=100"]);
    }

    #[test]
    fn miss_falls_back_to_short_sentence() {
        let model = Scripted::new(
            Generated::NotFound,
            Generated::Found("Short.".to_string()),
        );
        let config = GeneratorConfig {
            tries: 200,
            ..GeneratorConfig::default()
        };
        let res = generate_from(&model, &config, &mut thread_rng());
        assert_eq!(res, Generated::Found("Short.".to_string()));
        assert_eq!(
            *model.calls.borrow(),
            vec!["sentence tries=200", "short max_chars=140"]
        );
    }

    #[test]
    fn double_miss_is_not_an_error() {
        let model = Scripted::new(Generated::NotFound, Generated::NotFound);
        let res = generate_from(&model, &GeneratorConfig::default(), &mut thread_rng());
        assert_eq!(res, Generated::NotFound);
        assert_eq!(model.calls.borrow().len(), 2);
    }

    #[test]
    fn small_corpus_succeeds() {
        // Every sentence this chain can make is a copy, so nothing is found, but that is fine
        let res = generate(
            "The cat sat. The cat ran. The dog sat.",
            &GeneratorConfig::default(),
            &mut thread_rng(),
        )
        .unwrap();
        assert_eq!(res, Generated::NotFound);
    }

    #[test]
    fn larger_corpus_finds_sentences() {
        let corpus = "The cat sat on the mat by the door. The dog sat on the rug by the fire. \
            A bird flew over the mat by the fire. The cat ran over the rug by the door. \
            The bird sat on the dog by the window. A cat flew over the dog by the door.";
        let mut rng = StdRng::seed_from_u64(5);
        let found = (0..20)
            .filter_map(|_| {
                generate(corpus, &GeneratorConfig::default(), &mut rng)
                    .unwrap()
                    .as_str()
                    .map(str::to_string)
            })
            .collect::<Vec<_>>();
        assert!(!found.is_empty());
        for s in found {
            assert!(!s.contains('\n'));
        }
    }
}
