//! Sign establishment: deciding which `-` tokens are negations, and folding negations into the
//! numbers they apply to.

use crate::{
    error::{kind, Error},
    token::{Operator, Paren, Token, TokenKind},
};
use log::trace;

/// Rewrites each ambiguous `-` token into either a binary [`Operator::Sub`] or a unary
/// [`Operator::Neg`] marker, looking only at the neighbouring tokens.
///
/// A `-` is binary if it is the last token, if it is followed by an operator or `)`, or if it
/// directly follows a number or `)`. Every other `-` is a negation. No other token is changed,
/// and nothing is evaluated; malformed uses of `-` are reported by later stages.
pub fn classify(tokens: &[Token]) -> Vec<Token> {
    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            if !token.is(Operator::Sub) {
                return token.clone();
            }

            let binary = match tokens.get(i + 1).map(|next| next.kind) {
                None => true,
                Some(TokenKind::Operator(_)) | Some(TokenKind::Paren(Paren::Close)) => true,
                Some(_) => i.checked_sub(1)
                    .map(|prev| matches!(
                        tokens[prev].kind,
                        TokenKind::Number(_) | TokenKind::Paren(Paren::Close)
                    ))
                    .unwrap_or(false),
            };

            if binary {
                token.clone()
            } else {
                trace!("`-` at {:?} is a negation", token.span);
                Token::new(TokenKind::Operator(Operator::Neg), token.span.clone())
            }
        })
        .collect()
}

/// Folds each [`Operator::Neg`] marker into the number directly after it, producing a signed
/// literal that covers both tokens.
///
/// A marker is left in place if it is followed by `(`, or by a number that is the base of an
/// exponentiation (`-2^2` is `-(2^2)`); the reducer revisits those once the parenthesized value or
/// the power is known. Negating zero produces `0`, not `-0`.
///
/// A marker at the end of the sequence, or followed by anything else, can only be produced by a
/// defect in [`classify`] and is reported as an internal error.
pub fn resolve(tokens: &[Token]) -> Result<Vec<Token>, Error> {
    resolve_folds(tokens).map(|(tokens, _)| tokens)
}

/// Same as [`resolve`], but also returns the indices (into the given sequence) of every marker
/// that was folded, in increasing order.
pub fn resolve_folds(tokens: &[Token]) -> Result<(Vec<Token>, Vec<usize>), Error> {
    let mut resolved = Vec::with_capacity(tokens.len());
    let mut folds = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let token = &tokens[i];
        if !token.is(Operator::Neg) {
            resolved.push(token.clone());
            i += 1;
            continue;
        }

        let Some(next) = tokens.get(i + 1) else {
            return Err(Error::new(vec![token.span.clone()], kind::TrailingNegation));
        };

        match next.kind {
            TokenKind::Paren(Paren::Open) => resolved.push(token.clone()),
            TokenKind::Number(_) if tokens.get(i + 2).is_some_and(|t| t.is(Operator::Exp)) => {
                resolved.push(token.clone());
            },
            TokenKind::Number(value) => {
                let negated = if value == 0.0 { 0.0 } else { -value };
                trace!("folding negation at {} into {}", i, negated);
                resolved.push(Token::number(negated, token.span.start..next.span.end));
                folds.push(i);

                // skip the literal that was just consumed
                i += 1;
            },
            _ => return Err(Error::new(
                vec![token.span.clone(), next.span.clone()],
                kind::MisplacedNegation { found: next.kind.to_string() },
            )),
        }

        i += 1;
    }

    Ok((resolved, folds))
}
