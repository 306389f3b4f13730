use derive_more::Display;

use crate::token::{Token, TokenKind};

/// Every failure the engine can surface. All of them reflect malformed
/// caller input, so none are retryable.
#[derive(Debug, Clone, PartialEq, Eq, Display, derive_more::Error)]
pub enum Error {
    /// The tokenizer found a character that starts no token.
    #[display("Unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },

    /// The parser required a specific token and found something else.
    #[display(
        "Expected {expected} but got {} ('{}') at position {}",
        found.kind,
        found.text,
        found.position
    )]
    ExpectedToken { expected: TokenKind, found: Token },

    /// The parser found a token no grammar rule accepts here.
    #[display(
        "Unexpected token {} ('{}') at position {}",
        found.kind,
        found.text,
        found.position
    )]
    UnexpectedToken { found: Token },

    /// A formula referenced a variable the interpretation does not bind.
    #[display("Undefined variable: {name}")]
    UndefinedVariable { name: String },

    /// The requested truth table would exceed the 5-variable / 32-row cap.
    #[display("Maximum 5 variables supported (32 rows), got {count}")]
    TooManyVariables { count: usize },
}
