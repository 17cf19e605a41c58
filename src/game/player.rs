use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two symbols a player drops into the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    O,
    X,
}

impl Token {
    /// Get the other token
    pub fn other(self) -> Token {
        match self {
            Token::O => Token::X,
            Token::X => Token::O,
        }
    }

    /// Single-character symbol used in the grid text form
    pub fn symbol(self) -> char {
        match self {
            Token::O => 'O',
            Token::X => 'X',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Token> {
        match symbol {
            'O' | 'o' => Some(Token::O),
            'X' | 'x' => Some(Token::X),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A named participant and the token they play.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    name: String,
    token: Token,
}

impl Player {
    pub fn new(name: impl Into<String>, token: Token) -> Self {
        Player {
            name: name.into(),
            token,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn token(&self) -> Token {
        self.token
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.token)
    }
}
