//! See the top level crate documentation for information about the [`Chain`] type.

use hashbrown::HashMap;
use rand::Rng;

use crate::distribution::{TokenDistribution, TokenDistributionBuilder};
use crate::error::ModelError;
use crate::token::{State, StateRef, Token, TokenRef};

/// Markov chain over whole sentences. Every sentence fed to the builder is framed by
/// [`Token::Begin`] markers and a [`Token::End`] marker, so walking the chain from
/// [`Chain::begin_state()`] yields a complete sentence.
///
/// ```
/// # use markovish_text::{Chain, TokenRef};
/// # use rand::thread_rng;
/// let mut cb = Chain::builder(2);
/// cb.feed_sentence(["I", "am", "here."]);
/// let chain = cb.build().unwrap();
///
/// assert_eq!(
///     chain.generate_next_token(&mut thread_rng(), &[TokenRef::Begin, TokenRef::Word("I")]),
///     Some(&markovish_text::Token::Word("am".to_string()))
/// );
/// assert_eq!(chain.walk(&mut thread_rng()), vec!["I", "am", "here."]);
/// ```
#[derive(Clone, Debug)]
pub struct Chain {
    state_size: usize,
    map: HashMap<State, TokenDistribution>,
}

impl Chain {
    pub fn builder(state_size: usize) -> ChainBuilder {
        ChainBuilder::new(state_size)
    }

    /// How many previous tokens are used to pick the next one.
    pub fn state_size(&self) -> usize {
        self.state_size
    }

    /// Number of distinct states known by this chain.
    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    /// The state every sentence starts from.
    pub fn begin_state<'a>(&self) -> Vec<TokenRef<'a>> {
        vec![TokenRef::Begin; self.state_size]
    }

    /// Generates a random new token using the previous tokens.
    ///
    /// If the chain has never seen the `prev` tokens together, `None` is returned.
    pub fn generate_next_token(&self, rng: &mut impl Rng, prev: &[TokenRef<'_>]) -> Option<&Token> {
        let dist = self.map.get(&StateRef(prev))?;
        Some(dist.get_random_token(rng))
    }

    /// Walks the chain from [`Chain::begin_state()`] until the end of a sentence is generated,
    /// returning the words on the way.
    pub fn walk(&self, rng: &mut impl Rng) -> Vec<&str> {
        let mut state = self.begin_state();
        let mut res = Vec::new();

        while let Some(next) = self.generate_next_token(rng, &state) {
            let Some(word) = next.as_word() else {
                // End of sentence
                break;
            };
            res.push(word);
            state.remove(0);
            state.push(TokenRef::Word(word));
        }

        res
    }
}

/// Builds a Chain by being fed sentences and keeping track of the likelihood that one token
/// follows `state_size` others.
#[derive(Clone, Debug)]
pub struct ChainBuilder {
    state_size: usize,
    map: HashMap<State, TokenDistributionBuilder>,
}

impl ChainBuilder {
    pub fn new(state_size: usize) -> Self {
        Self {
            state_size,
            map: HashMap::new(),
        }
    }

    /// Uses up the builder and creates a new chain.
    ///
    /// # Errors
    ///
    /// If the state size is zero, or if the builder has not been fed any sentences.
    pub fn build(self) -> Result<Chain, ModelError> {
        if self.state_size == 0 {
            return Err(ModelError::InvalidStateSize(self.state_size));
        }
        if self.map.is_empty() {
            return Err(ModelError::EmptyCorpus);
        }

        let mut chain_map = HashMap::with_capacity(self.map.len());
        for (state, dist_builder) in self.map {
            chain_map.insert(state, dist_builder.build()?);
        }

        Ok(Chain {
            state_size: self.state_size,
            map: chain_map,
        })
    }

    /// Add the occurance of `next` following `prev`.
    pub fn add_occurance(&mut self, prev: &[TokenRef<'_>], next: TokenRef<'_>) {
        match self.map.get_mut(&StateRef(prev)) {
            Some(b) => {
                b.add_token(next);
            }
            None => {
                let mut b = TokenDistributionBuilder::new();
                b.add_token(next);
                self.map.insert(State::from(StateRef(prev)), b);
            }
        }
    }

    /// Feeds the builder a sentence that has already been split into words. Empty sentences
    /// are ignored, as is everything if the state size is zero.
    pub fn feed_sentence<'a>(&mut self, words: impl IntoIterator<Item = &'a str>) {
        if self.state_size == 0 {
            return;
        }

        let mut items = vec![TokenRef::Begin; self.state_size];
        items.extend(words.into_iter().map(TokenRef::Word));
        if items.len() == self.state_size {
            return;
        }
        items.push(TokenRef::End);

        for window in items.windows(self.state_size + 1) {
            let (prev, next) = window.split_at(self.state_size);
            self.add_occurance(prev, next[0]);
        }
    }
}
