use stepwise_parser::Token;
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A half-open range of token indices, `start..end`.
///
/// An interval only has meaning for the one token sequence it was computed against. Sequences
/// change length at nearly every step, so an interval must never be applied to another snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interval {
    /// The index of the first token in the interval.
    pub start: usize,

    /// The index one past the last token in the interval.
    pub end: usize,
}

impl Interval {
    /// Creates a new interval.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the number of tokens in the interval.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the interval contains no tokens.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Returns true if the given index is inside the interval.
    pub fn contains(&self, index: usize) -> bool {
        self.range().contains(&index)
    }

    /// Returns the interval as a [`Range`], suitable for slicing.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Builds a new sequence where the tokens in this interval are replaced with `replacement`.
    ///
    /// The given sequence is not modified.
    pub fn splice(&self, tokens: &[Token], replacement: Token) -> Vec<Token> {
        let mut spliced = Vec::with_capacity(tokens.len() + 1 - self.len());
        spliced.extend_from_slice(&tokens[..self.start]);
        spliced.push(replacement);
        spliced.extend_from_slice(&tokens[self.end..]);
        spliced
    }
}

/// One snapshot of an expression as it is reduced to a single number.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Step {
    /// The tokens of the expression at this step.
    pub tokens: Vec<Token>,

    /// Describes the operation that produced this step from the previous one, such as `add 2 to
    /// 1`. This is [`None`] for the first step.
    pub description: Option<String>,

    /// The index of the token that was computed by the operation that produced this step. This is
    /// [`None`] for the first step.
    pub computed: Option<usize>,

    /// The tokens that will be consumed by the operation that produces the next step. This is
    /// [`None`] for the last step.
    pub compute_next: Option<Interval>,
}

impl Step {
    /// Creates the first step of a reduction.
    pub fn initial(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            description: None,
            computed: None,
            compute_next: None,
        }
    }

    /// Returns true if this step is fully reduced, i.e. it contains a single number.
    pub fn is_final(&self) -> bool {
        matches!(self.tokens.as_slice(), [token] if token.kind.is_number())
    }

    /// Returns the value of the expression if this step is fully reduced.
    pub fn value(&self) -> Option<f64> {
        match self.tokens.as_slice() {
            [token] => token.as_number(),
            _ => None,
        }
    }

    /// Returns the token that was computed by the operation that produced this step.
    pub fn computed_token(&self) -> Option<&Token> {
        self.tokens.get(self.computed?)
    }

    /// Returns the tokens that will be consumed to produce the next step.
    pub fn next_tokens(&self) -> Option<&[Token]> {
        self.tokens.get(self.compute_next?.range())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use stepwise_parser::{token::kinds, Operator, TokenKind};
    use super::*;

    fn seq() -> Vec<Token> {
        vec![
            Token::number(1.0, 0..1),
            Token::new(TokenKind::Operator(Operator::Add), 1..2),
            Token::number(2.0, 2..3),
            Token::new(TokenKind::Operator(Operator::Mul), 3..4),
            Token::number(3.0, 4..5),
        ]
    }

    #[test]
    fn splice_replaces_interval() {
        let tokens = seq();
        let spliced = Interval::new(2, 5).splice(&tokens, Token::number(6.0, 2..5));
        assert_eq!(kinds(&spliced), vec![
            TokenKind::Number(1.0),
            TokenKind::Operator(Operator::Add),
            TokenKind::Number(6.0),
        ]);

        // the original sequence is untouched
        assert_eq!(tokens, seq());
    }

    #[test]
    fn interval_queries() {
        let interval = Interval::new(2, 5);
        assert_eq!(interval.len(), 3);
        assert!(!interval.is_empty());
        assert!(interval.contains(2));
        assert!(!interval.contains(5));
        assert!(Interval::new(3, 3).is_empty());
    }

    #[test]
    fn step_accessors() {
        let mut step = Step::initial(seq());
        assert!(!step.is_final());
        assert_eq!(step.value(), None);
        assert_eq!(step.computed_token(), None);

        step.compute_next = Some(Interval::new(2, 5));
        assert_eq!(step.next_tokens().map(|t| t.len()), Some(3));

        let last = Step {
            tokens: vec![Token::number(7.0, 0..5)],
            description: Some("add 6 to 1".to_string()),
            computed: Some(0),
            compute_next: None,
        };
        assert!(last.is_final());
        assert_eq!(last.value(), Some(7.0));
        assert_eq!(last.computed_token(), Some(&Token::number(7.0, 0..5)));
    }
}
