use std::fmt::Display;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Variable,
    True,
    False,
    Not,
    And,
    Or,
    Xor,
    Implies,
    Biconditional,
    LParen,
    RParen,
    End,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TokenKind::Variable => "VARIABLE",
                TokenKind::True => "TRUE",
                TokenKind::False => "FALSE",
                TokenKind::Not => "NOT",
                TokenKind::And => "AND",
                TokenKind::Or => "OR",
                TokenKind::Xor => "XOR",
                TokenKind::Implies => "IMPLIES",
                TokenKind::Biconditional => "BICONDITIONAL",
                TokenKind::LParen => "LPAREN",
                TokenKind::RParen => "RPAREN",
                TokenKind::End => "END",
            }
        )
    }
}

/// A single lexeme. `position` is the 0-based offset of its first character,
/// counted in Unicode scalar values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: usize,
}

// Surface spellings for each connective, longest first so greedy matching
// tries `<->` before `<=>` could leave a stray `<`, and `&&` before `&`.
const OPERATOR_ALIASES: [(&str, TokenKind); 19] = [
    ("<->", TokenKind::Biconditional),
    ("<=>", TokenKind::Biconditional),
    ("not", TokenKind::Not),
    ("and", TokenKind::And),
    ("xor", TokenKind::Xor),
    ("&&", TokenKind::And),
    ("||", TokenKind::Or),
    ("->", TokenKind::Implies),
    ("=>", TokenKind::Implies),
    ("or", TokenKind::Or),
    ("!", TokenKind::Not),
    ("¬", TokenKind::Not),
    ("~", TokenKind::Not),
    ("&", TokenKind::And),
    ("∧", TokenKind::And),
    ("∨", TokenKind::Or),
    ("⊕", TokenKind::Xor),
    ("→", TokenKind::Implies),
    ("↔", TokenKind::Biconditional),
];

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Case-insensitive comparison of `alias` against the characters at `pos`.
fn matches_at(chars: &[char], pos: usize, alias: &str) -> bool {
    let mut i = pos;

    for a in alias.chars() {
        match chars.get(i) {
            Some(c) if c.to_lowercase().eq(a.to_lowercase()) => i += 1,
            _ => return false,
        }
    }

    true
}

/// Splits a formula string into tokens, resolving operator aliases by
/// greedy longest match. The returned sequence always ends with a single
/// [`TokenKind::End`] sentinel, even for empty input.
pub fn tokenize(input: &str) -> Result<Vec<Token>, Error> {
    let chars = input.chars().collect::<Vec<_>>();
    let mut tokens = Vec::new();
    let mut pos = 0;

    'scan: while pos < chars.len() {
        let c = chars[pos];

        if c.is_whitespace() {
            pos += 1;
            continue;
        }

        if c == '(' || c == ')' {
            let kind = if c == '(' {
                TokenKind::LParen
            } else {
                TokenKind::RParen
            };

            tokens.push(Token {
                kind,
                text: c.to_string(),
                position: pos,
            });
            pos += 1;
            continue;
        }

        for (alias, kind) in OPERATOR_ALIASES {
            if !matches_at(&chars, pos, alias) {
                continue;
            }

            let len = alias.chars().count();

            // An alphabetic alias only matches on a word boundary, so that
            // `android` stays a single variable instead of AND + `roid`.
            if alias.chars().all(|c| c.is_ascii_alphabetic())
                && chars.get(pos + len).copied().is_some_and(is_word_char)
            {
                continue;
            }

            tokens.push(Token {
                kind,
                text: chars[pos..pos + len].iter().collect(),
                position: pos,
            });
            pos += len;
            continue 'scan;
        }

        for (word, kind) in [("true", TokenKind::True), ("false", TokenKind::False)] {
            let len = word.len();

            if matches_at(&chars, pos, word)
                && !chars.get(pos + len).copied().is_some_and(is_word_char)
            {
                tokens.push(Token {
                    kind,
                    text: word.to_owned(),
                    position: pos,
                });
                pos += len;
                continue 'scan;
            }
        }

        // Bare digits double as boolean literals, with the same boundary
        // guard (`1x` is neither a literal nor a valid identifier).
        if (c == '1' || c == '0') && !chars.get(pos + 1).copied().is_some_and(is_word_char) {
            let kind = if c == '1' {
                TokenKind::True
            } else {
                TokenKind::False
            };

            tokens.push(Token {
                kind,
                text: c.to_string(),
                position: pos,
            });
            pos += 1;
            continue;
        }

        if c == '⊤' || c == '⊥' {
            let kind = if c == '⊤' {
                TokenKind::True
            } else {
                TokenKind::False
            };

            tokens.push(Token {
                kind,
                text: c.to_string(),
                position: pos,
            });
            pos += 1;
            continue;
        }

        if c.is_ascii_alphabetic() {
            let start = pos;
            while pos < chars.len() && is_word_char(chars[pos]) {
                pos += 1;
            }

            tokens.push(Token {
                kind: TokenKind::Variable,
                text: chars[start..pos].iter().collect(),
                position: start,
            });
            continue;
        }

        return Err(Error::UnexpectedCharacter {
            character: c,
            position: pos,
        });
    }

    tokens.push(Token {
        kind: TokenKind::End,
        text: String::new(),
        position: pos,
    });

    Ok(tokens)
}
