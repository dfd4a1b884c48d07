use rand_distr::WeightedError;
use thiserror::Error;

/// Errors raised while building a model from a corpus.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("state size must be at least 1, got {0}")]
    InvalidStateSize(usize),
    #[error("corpus contains no usable sentences")]
    EmptyCorpus,
    #[error("could not build token distribution: {0}")]
    Distribution(#[from] WeightedError),
}

/// Errors that end a generator run. The messages are what the user sees.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Error: No input text provided.")]
    NoInput,
    #[error("Error generating text: {0}")]
    Model(ModelError),
}
