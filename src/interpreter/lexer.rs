use std::ops::Range;

use logos::Logos;

/// Represents a lexical token of the input line.
///
/// Operator characters are single-character tokens; everything between them
/// is collapsed into a single [`Token::Text`] run. Every character of the line
/// belongs to exactly one token, so lexing never fails.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// Any run of characters that are not operators.
    #[regex(r"[^+\-*/]+")]
    Text,
}

impl Token {
    /// Returns the operator character of an operator token, or `None` for
    /// text.
    #[must_use]
    pub const fn operator(self) -> Option<char> {
        match self {
            Self::Plus => Some('+'),
            Self::Minus => Some('-'),
            Self::Star => Some('*'),
            Self::Slash => Some('/'),
            Self::Text => None,
        }
    }
}

/// Tokenizes a line into `(token, byte span)` pairs.
///
/// # Example
/// ```
/// use columna::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("12 + 7");
/// assert_eq!(tokens,
///            vec![(Token::Text, 0..3), (Token::Plus, 3..4), (Token::Text, 4..6)]);
/// ```
#[must_use]
pub fn tokenize(line: &str) -> Vec<(Token, Range<usize>)> {
    let mut lexer = Token::lexer(line);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        // The two patterns cover every character, so errors cannot occur.
        if let Ok(tok) = token {
            tokens.push((tok, lexer.span()));
        }
    }

    tokens
}
