//! Converts expression text into a sequence of [`Token`]s.

use crate::{
    error::{kind, Error},
    token::{Operator, Paren, Token, TokenKind},
    tokenizer::{tokenize, Lexeme},
};
use std::ops::Range;

/// Parses a run of digits and decimal points into a number.
///
/// Literals with a decimal point (`1.`, `.5`, `2.25`) and without one (`42`) both produce an
/// [`f64`].
pub fn parse_literal(literal: &str, span: Range<usize>) -> Result<f64, Error> {
    let decimal_points = literal.matches('.').count();
    let has_digits = literal.chars().any(|c| c.is_ascii_digit());

    let invalid = || Error::new(vec![span.clone()], kind::InvalidLiteral {
        literal: literal.to_string(),
        decimal_points,
    });

    if decimal_points > 1 || !has_digits {
        return Err(invalid());
    }

    literal.parse().map_err(|_| invalid())
}

/// Lexes the input text, left to right, into a sequence of tokens. Spaces are skipped.
///
/// Every `-` is lexed as [`Operator::Sub`]; deciding which ones are negations is the job of
/// [`classify`](crate::sign::classify). Empty input produces an empty sequence.
pub fn lex(input: &str) -> Result<Vec<Token>, Error> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(lexeme) = lexer.next() {
        let span = lexer.span();
        let kind = match lexeme {
            Ok(Lexeme::Whitespace) => continue,
            Ok(Lexeme::Add) => TokenKind::Operator(Operator::Add),
            Ok(Lexeme::Sub) => TokenKind::Operator(Operator::Sub),
            Ok(Lexeme::Mul) => TokenKind::Operator(Operator::Mul),
            Ok(Lexeme::Div) => TokenKind::Operator(Operator::Div),
            Ok(Lexeme::Exp) => TokenKind::Operator(Operator::Exp),
            Ok(Lexeme::OpenParen) => TokenKind::Paren(Paren::Open),
            Ok(Lexeme::CloseParen) => TokenKind::Paren(Paren::Close),
            Ok(Lexeme::Literal) => TokenKind::Number(parse_literal(lexer.slice(), span.clone())?),
            Ok(Lexeme::Symbol) | Err(_) => {
                let character = lexer.slice().chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(Error::new(vec![span], kind::InvalidCharacter { character }));
            },
        };
        tokens.push(Token::new(kind, span));
    }

    Ok(tokens)
}
