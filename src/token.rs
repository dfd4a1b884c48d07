//! At the heart of a [`Chain`](crate::Chain) is a [`Token`]. Most tokens are words, i.e. pieces of a
//! sentence separated by whitespace, but every sentence is also framed by a [`Token::Begin`]
//! and a [`Token::End`] marker so the chain knows how sentences start and stop.
//!
//! A [`State`] is the `state_size` tokens the chain looks at to guess the next one.
//!
//! Both have borrowed counterparts ([`TokenRef`] and [`StateRef`]) which hash and compare equal
//! to their owned versions, so a chain can be queried without allocating new keys.

use std::hash::{Hash, Hasher};

use hashbrown::Equivalent;

/// An owned piece of a sentence, or one of the sentence markers.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Token {
    /// Marks the start of a sentence. Only ever appears in a [`State`].
    Begin,
    Word(String),
    /// Marks the end of a sentence. Only ever appears as a generated token.
    End,
}

impl Token {
    pub fn as_token_ref(&self) -> TokenRef<'_> {
        match self {
            Token::Begin => TokenRef::Begin,
            Token::Word(w) => TokenRef::Word(w),
            Token::End => TokenRef::End,
        }
    }

    /// The word of this token, if it is not a marker.
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Token::Word(w) => Some(w),
            _ => None,
        }
    }
}

// Must hash exactly like `TokenRef`, see `Equivalent` below.
impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_token_ref().hash(state);
    }
}

/// A borrowed version of [`Token`]; like `&str` is to [`String`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenRef<'a> {
    Begin,
    Word(&'a str),
    End,
}

impl<'a> From<TokenRef<'a>> for Token {
    fn from(value: TokenRef<'a>) -> Self {
        match value {
            TokenRef::Begin => Token::Begin,
            TokenRef::Word(w) => Token::Word(w.to_string()),
            TokenRef::End => Token::End,
        }
    }
}

impl PartialEq<TokenRef<'_>> for Token {
    fn eq(&self, other: &TokenRef<'_>) -> bool {
        self.as_token_ref() == *other
    }
}

impl Equivalent<Token> for TokenRef<'_> {
    fn equivalent(&self, key: &Token) -> bool {
        key.eq(self)
    }
}

/// An owned sequence of [`Token`]s that precede a generated token.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State(pub Vec<Token>);

/// A borrowed version of [`State`]. Hashes like the [`State`] holding the same tokens, since both
/// hash as a slice of equally hashing tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StateRef<'a, 'b>(pub &'a [TokenRef<'b>]);

impl<'a, 'b> From<StateRef<'a, 'b>> for State {
    fn from(value: StateRef<'a, 'b>) -> Self {
        Self(value.0.iter().map(|t| Token::from(*t)).collect())
    }
}

impl PartialEq<StateRef<'_, '_>> for State {
    fn eq(&self, other: &StateRef<'_, '_>) -> bool {
        self.0.len() == other.0.len() && self.0.iter().zip(other.0).all(|(a, b)| a == b)
    }
}

impl Equivalent<State> for StateRef<'_, '_> {
    fn equivalent(&self, key: &State) -> bool {
        key.eq(self)
    }
}
