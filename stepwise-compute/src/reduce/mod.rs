//! Single-step reduction of a token sequence.
//!
//! Each call to [`reduce`] applies exactly one operation: either one binary operator, or the
//! unwrapping of a pair of parentheses around a single number. The innermost parentheses are
//! always reduced first.

pub mod op;

use crate::{
    error::{kind, Error},
    fmt::DescribeOptions,
    step::Interval,
};
use log::trace;
use op::operate;
use stepwise_parser::{sign::resolve_folds, token::span_of, Paren, Token, TokenKind};

/// The result of reducing a token sequence by one step.
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction {
    /// The new token sequence.
    pub tokens: Vec<Token>,

    /// The index of the computed token in the new sequence.
    pub computed: usize,

    /// The tokens of the *original* sequence that were replaced by the computed token.
    pub replaced: Interval,

    /// A human-readable description of the operation.
    pub description: String,
}

/// Finds the first innermost pair of parentheses, returning the indices of the `(` and `)`.
///
/// The innermost pair is found by remembering the most recent `(` until the first `)` is reached.
fn find_parens(tokens: &[Token]) -> Result<Option<(usize, usize)>, Error> {
    let mut open = None;
    for (i, token) in tokens.iter().enumerate() {
        match (token.kind, open) {
            (TokenKind::Paren(Paren::Open), _) => open = Some(i),
            (TokenKind::Paren(Paren::Close), Some(open)) => return Ok(Some((open, i))),
            (TokenKind::Paren(Paren::Close), None) => return Err(Error::new(
                vec![token.span.clone()],
                kind::MismatchedParentheses { opening: false },
            )),
            _ => (),
        }
    }

    match open {
        Some(open) => Err(Error::new(
            vec![tokens[open].span.clone()],
            kind::MismatchedParentheses { opening: true },
        )),
        None => Ok(None),
    }
}

/// Reduces the contents of the parentheses at `open` and `close` by one step.
///
/// Returns the interval of tokens to replace, the value to replace them with, and the
/// description of the operation.
fn reduce_group(
    tokens: &[Token],
    open: usize,
    close: usize,
    options: &DescribeOptions,
) -> Result<(Interval, f64, String), Error> {
    let contents = &tokens[open + 1..close];
    match contents {
        [] => Err(Error::new(
            vec![tokens[open].span.start..tokens[close].span.end],
            kind::EmptyParentheses,
        )),
        [token] => match token.kind {
            TokenKind::Number(value) => Ok((
                Interval::new(open, close + 1),
                value,
                "resolve parentheses".to_string(),
            )),
            _ => Err(Error::new(vec![token.span.clone()], kind::SingleOperator)),
        },
        _ => {
            let op = operate(contents)?;

            // the parentheses are dropped if nothing else is left inside them
            let interval = if contents.len() == 3 {
                Interval::new(open, close + 1)
            } else {
                let start = open + 1 + op.start;
                Interval::new(start, start + 3)
            };
            Ok((interval, op.value, op.describe(options)))
        },
    }
}

/// Reduces the given sign-resolved sequence by one step.
///
/// The sequence must contain at least two tokens. After the computed token is spliced in, signs
/// are resolved again; a negation directly in front of the computed token is folded into it, and
/// the computed index and replaced interval are moved to include the negation.
pub fn reduce(tokens: &[Token], options: &DescribeOptions) -> Result<Reduction, Error> {
    if tokens.len() < 2 {
        return Err(Error::new(vec![span_of(tokens)], kind::MissingReplacement));
    }

    let (replaced, value, description) = match find_parens(tokens)? {
        Some((open, close)) => reduce_group(tokens, open, close, options)?,
        None => {
            let op = operate(tokens)?;
            (Interval::new(op.start, op.start + 3), op.value, op.describe(options))
        },
    };

    let replacement = Token::number(value, span_of(&tokens[replaced.range()]));
    let spliced = replaced.splice(tokens, replacement);
    let (resolved, folds) = resolve_folds(&spliced)?;

    let (computed, replaced) = match folds[..] {
        [] => (replaced.start, replaced),
        [fold] if fold + 1 == replaced.start => (fold, Interval::new(fold, replaced.end)),
        [fold, ..] => return Err(Error::new(
            vec![spliced[fold].span.clone()],
            kind::FoldOutsideInterval,
        )),
    };
    trace!("replaced {:?} with token at {}: {}", replaced, computed, description);

    Ok(Reduction {
        tokens: resolved,
        computed,
        replaced,
        description,
    })
}
