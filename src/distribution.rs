//! [`TokenDistribution`] are representations of how common [`Token`]s are, and are paired up with
//! a [`State`](crate::token::State) in a [`Chain`](crate::Chain).

use hashbrown::HashMap;
use itertools::Itertools;
use rand::Rng;
use rand_distr::{weighted_alias::WeightedAliasIndex, Distribution};

use crate::error::ModelError;
use crate::token::{Token, TokenRef};

/// A distribution of choices and their likelyhood.
#[derive(Clone, Debug)]
pub struct TokenDistribution {
    /// Mappings of index in choices to their likelyhood.
    dist: WeightedAliasIndex<u64>,
    /// The actual choices
    choices: Vec<Token>,
}

impl TokenDistribution {
    pub fn builder() -> TokenDistributionBuilder {
        TokenDistributionBuilder::new()
    }

    pub fn get_random_token(&self, rng: &mut impl Rng) -> &Token {
        &self.choices[self.dist.sample(rng)]
    }

    /// All tokens that can be chosen, in sorted order.
    pub fn choices(&self) -> &[Token] {
        &self.choices
    }
}

/// Builder for [`TokenDistribution`]. Used when parsing a text to add a lot of words, and then to
/// build a list of [`TokenDistribution`] using how many times they appeared.
#[derive(Clone, Debug)]
pub struct TokenDistributionBuilder {
    /// Counts how many times a token is likely to appear.
    map: HashMap<Token, u64>,
}

impl TokenDistributionBuilder {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Creates a weighted distribution for the likelyhood of tokens to appear.
    ///
    /// Choices are sorted, so the same seed always picks the same token regardless of the order
    /// tokens were added in.
    ///
    /// # Errors
    ///
    /// Fails if there are no inserted tokens.
    pub fn build(self) -> Result<TokenDistribution, ModelError> {
        let (choices, occurances): (Vec<Token>, Vec<u64>) = self
            .map
            .into_iter()
            .sorted_unstable_by(|a, b| a.0.cmp(&b.0))
            .unzip();

        Ok(TokenDistribution {
            dist: WeightedAliasIndex::new(occurances)?,
            choices,
        })
    }

    /// Add an occurance of this token.
    pub fn add_token(&mut self, token: TokenRef<'_>) {
        match self.map.get_mut(&token) {
            Some(n) => {
                *n += 1;
            }
            None => {
                self.map.insert(Token::from(token), 1);
            }
        }
    }
}

impl Default for TokenDistributionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
