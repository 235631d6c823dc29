//! The token model shared by every stage of the reduction pipeline.

use crate::fmt::number;
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An operator token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operator {
    /// Exponentiation, `^`.
    Exp,

    /// Multiplication, `*`.
    Mul,

    /// Division, `/`.
    Div,

    /// Addition, `+`.
    Add,

    /// Binary subtraction, `-`. Before sign establishment, every `-` in the input is a [`Sub`].
    ///
    /// [`Sub`]: Operator::Sub
    Sub,

    /// The unary negation marker, `neg`. It is never produced by the lexer, only by
    /// [`classify`](crate::sign::classify).
    Neg,
}

impl Operator {
    /// Returns true if this is one of the five binary operators.
    pub fn is_binary(self) -> bool {
        !matches!(self, Operator::Neg)
    }

    /// Returns the text of the operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Exp => "^",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Neg => "neg",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parenthesis token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Paren {
    /// `(`
    Open,

    /// `)`
    Close,
}

impl fmt::Display for Paren {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Paren::Open => f.write_str("("),
            Paren::Close => f.write_str(")"),
        }
    }
}

/// The kind of a [`Token`], along with its value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TokenKind {
    /// A real number.
    Number(f64),

    /// An operator, including the unary negation marker.
    Operator(Operator),

    /// A parenthesis.
    Paren(Paren),
}

impl TokenKind {
    /// Returns the value of the token if it is a number.
    pub fn as_number(self) -> Option<f64> {
        match self {
            TokenKind::Number(value) => Some(value),
            _ => None,
        }
    }

    /// Returns true if the token is a number.
    pub fn is_number(self) -> bool {
        matches!(self, TokenKind::Number(_))
    }

    /// Returns true if the token is an operator, including the negation marker.
    pub fn is_operator(self) -> bool {
        matches!(self, TokenKind::Operator(_))
    }

    /// Returns true if the token is a parenthesis.
    pub fn is_paren(self) -> bool {
        matches!(self, TokenKind::Paren(_))
    }

    /// Returns true if the token is exactly the given operator.
    pub fn is(self, op: Operator) -> bool {
        self == TokenKind::Operator(op)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenKind::Number(value) => f.write_str(&number(*value)),
            TokenKind::Operator(op) => op.fmt(f),
            TokenKind::Paren(paren) => paren.fmt(f),
        }
    }
}

/// A token in an expression snapshot.
///
/// Tokens are never mutated; every reduction builds a new sequence. Two tokens are equal only if
/// both their kinds and spans are equal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token {
    /// The kind of token, along with its value.
    pub kind: TokenKind,

    /// The region of the source code that this token covers. Tokens produced by a reduction cover
    /// every token they replaced.
    pub span: Range<usize>,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, span: Range<usize>) -> Self {
        Self { kind, span }
    }

    /// Creates a number token.
    pub fn number(value: f64, span: Range<usize>) -> Self {
        Self::new(TokenKind::Number(value), span)
    }

    /// Returns the value of the token if it is a number.
    pub fn as_number(&self) -> Option<f64> {
        self.kind.as_number()
    }

    /// Returns true if the token is exactly the given operator.
    pub fn is(&self, op: Operator) -> bool {
        self.kind.is(op)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.kind.fmt(f)
    }
}

/// Returns the span covering every token in the given slice, or an empty span if the slice is
/// empty.
pub fn span_of(tokens: &[Token]) -> Range<usize> {
    match (tokens.first(), tokens.last()) {
        (Some(first), Some(last)) => first.span.start..last.span.end,
        _ => 0..0,
    }
}

/// Returns the kinds of the given tokens, dropping their spans.
pub fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|token| token.kind).collect()
}
