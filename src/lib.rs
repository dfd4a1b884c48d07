//! Dead simple sentence generation using markov chains.
//!
//! A corpus is split into sentences, and each sentence into words. A [`Chain`] then learns which
//! word follows each run of `state_size` words (two by default), including how sentences begin
//! and end. Walking the chain from the beginning of a sentence to its end gives a new sentence.
//! The randomness is built using a weighted distribution (see
//! [`rand_distr::weighted_alias::WeightedAliasIndex`]), and every function that needs it takes
//! the random number generator as an argument.
//!
//! [`Text`] wraps this up: it rejects sentences that merely copy the corpus and retries a
//! configurable number of times. [`generator::generate()`] is what the `markovish-text` binary
//! runs: build a [`Text`], ask for a sentence, and fall back to a short one on a miss.
//!
//! ```
//! # use markovish_text::{generator::{generate, GeneratorConfig}, Generated};
//! # use rand::thread_rng;
//! let corpus = "The cat sat on the mat. The dog sat on the rug. The cat ran over the rug.";
//! match generate(corpus, &GeneratorConfig::default(), &mut thread_rng()).unwrap() {
//!     Generated::Found(sentence) => println!("{sentence}"),
//!     Generated::NotFound => println!(),
//! }
//! ```

pub mod chain;
pub mod cli;
pub mod distribution;
pub mod error;
pub mod generator;
pub mod splitters;
pub mod text;
pub mod token;

pub use chain::{Chain, ChainBuilder};
pub use error::{GenerateError, ModelError};
pub use text::{Generated, SentenceOptions, Text, TextBuilder};
pub use token::{Token, TokenRef};
