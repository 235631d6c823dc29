//! The operator-reduction step: applying a single binary operator to its two operands.

use crate::{
    error::{kind, Error},
    fmt::{ordinal, truncated, DescribeOptions},
};
use stepwise_parser::{token::span_of, Operator, Token, TokenKind};

/// The associativity of a binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a op b op c` is evaluated as `(a op b) op c`, so the leftmost operator goes first.
    Left,

    /// `a op b op c` is evaluated as `a op (b op c)`, so the rightmost operator goes first.
    Right,
}

/// The binary operators grouped by precedence, from highest to lowest, along with the
/// associativity shared by each group.
pub const PRECEDENCE: [(&[Operator], Associativity); 3] = [
    (&[Operator::Exp], Associativity::Right),
    (&[Operator::Mul, Operator::Div], Associativity::Left),
    (&[Operator::Add, Operator::Sub], Associativity::Left),
];

/// Finds the operator that should be applied first: the operator of the highest precedence
/// group present, choosing the rightmost or leftmost one according to the group's associativity.
pub fn find_operator(tokens: &[Token]) -> Option<(usize, Operator)> {
    PRECEDENCE.iter().find_map(|(group, associativity)| {
        let matches = |token: &Token| group.iter().any(|op| token.is(*op));
        let index = match associativity {
            Associativity::Left => tokens.iter().position(matches),
            Associativity::Right => tokens.iter().rposition(matches),
        }?;
        let TokenKind::Operator(op) = tokens[index].kind else {
            return None;
        };
        Some((index, op))
    })
}

/// A single binary operation, ready to replace the three tokens it was computed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operation {
    /// The index of the left operand. The operation consumes the tokens `start..start + 3`.
    pub start: usize,

    /// The operator that was applied.
    pub operator: Operator,

    /// The left operand.
    pub lhs: f64,

    /// The right operand.
    pub rhs: f64,

    /// The result of the operation.
    pub value: f64,
}

impl Operation {
    /// Returns a human-readable description of the operation, such as `add 2 to 1`.
    pub fn describe(&self, options: &DescribeOptions) -> String {
        let precision = options.precision;
        let (lhs, rhs) = (truncated(self.lhs, precision), truncated(self.rhs, precision));
        match self.operator {
            Operator::Exp => format!("raise {} to the {} power", lhs, ordinal(self.rhs, precision)),
            Operator::Mul => format!("multiply {} by {}", lhs, rhs),
            Operator::Div => format!("divide {} by {}", lhs, rhs),
            Operator::Add => format!("add {} to {}", rhs, lhs),
            Operator::Sub => format!("subtract {} from {}", rhs, lhs),
            Operator::Neg => format!("negate {}", rhs),
        }
    }
}

/// Applies one binary operator in the given sequence, which must contain at least two tokens and
/// no parentheses.
///
/// The operator is chosen by [`find_operator`]. Both of its neighbours must be numbers.
pub fn operate(tokens: &[Token]) -> Result<Operation, Error> {
    let Some((index, operator)) = find_operator(tokens) else {
        return Err(Error::new(vec![span_of(tokens)], kind::MissingOperator));
    };

    let operator_span = tokens[index].span.clone();
    if index == 0 {
        return Err(Error::new(vec![operator_span], kind::LeadingOperator { operator }));
    } else if index == tokens.len() - 1 {
        return Err(Error::new(vec![operator_span], kind::TrailingOperator { operator }));
    }

    let (Some(lhs), Some(rhs)) = (tokens[index - 1].as_number(), tokens[index + 1].as_number()) else {
        return Err(Error::new(vec![operator_span], kind::NonNumericOperands { operator }));
    };

    let value = match operator {
        Operator::Exp => {
            if lhs < 0.0 && rhs.fract() != 0.0 {
                return Err(Error::new(
                    vec![span_of(&tokens[index - 1..=index + 1])],
                    kind::ImaginaryResult { base: lhs, exponent: rhs },
                ));
            }
            lhs.powf(rhs)
        },
        Operator::Mul => lhs * rhs,
        Operator::Div => lhs / rhs,
        Operator::Add => lhs + rhs,
        Operator::Sub => lhs - rhs,
        Operator::Neg => return Err(Error::new(vec![operator_span], kind::MissingReplacement)),
    };

    Ok(Operation {
        start: index - 1,
        operator,
        lhs,
        rhs,
        value,
    })
}
