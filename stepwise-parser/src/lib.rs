//! Front half of the stepwise reduction pipeline: turns expression text into a sign-resolved
//! sequence of [`Token`]s.
//!
//! The pipeline runs in three stages:
//!
//! 1. [`lex`] splits the text into numbers, operators and parentheses.
//! 2. [`classify`] decides which `-` tokens are negations.
//! 3. [`resolve`] folds negations into the numbers they apply to, where it can.
//!
//! [`parse`] runs all three.

pub mod error;
pub mod fmt;
pub mod lexer;
pub mod sign;
pub mod token;
pub mod tokenizer;

pub use error::Error;
pub use lexer::lex;
pub use sign::{classify, resolve};
pub use token::{Operator, Paren, Token, TokenKind};

/// Lexes the input text and establishes the sign of every `-`, producing the sequence the
/// reducer starts from.
pub fn parse(input: &str) -> Result<Vec<Token>, Error> {
    let tokens = lex(input)?;
    resolve(&classify(&tokens))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use token::kinds;

    fn n(value: f64) -> TokenKind {
        TokenKind::Number(value)
    }

    #[test]
    fn signed_literals() {
        let tokens = parse("-5+-8--11*2").unwrap();
        assert_eq!(kinds(&tokens), vec![
            n(-5.0),
            TokenKind::Operator(Operator::Add),
            n(-8.0),
            TokenKind::Operator(Operator::Sub),
            n(-11.0),
            TokenKind::Operator(Operator::Mul),
            n(2.0),
        ]);
        assert_eq!(tokens[0].span, 0..2);
        assert_eq!(tokens[4].span, 6..9);
    }

    #[test]
    fn fractional_literals() {
        assert_eq!(kinds(&parse("-.32       /.5").unwrap()), vec![
            n(-0.32),
            TokenKind::Operator(Operator::Div),
            n(0.5),
        ]);
    }

    #[test]
    fn negated_groups_keep_marker() {
        assert_eq!(kinds(&parse("-(1)").unwrap()), vec![
            TokenKind::Operator(Operator::Neg),
            TokenKind::Paren(Paren::Open),
            n(1.0),
            TokenKind::Paren(Paren::Close),
        ]);
    }
}
