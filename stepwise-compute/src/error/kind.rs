use ariadne::Fmt;
use stepwise_attrs::ErrorKind;
use stepwise_error::EXPR;
use stepwise_parser::{fmt::number, Operator};

/// A parenthesis was not matched by its counterpart.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "mismatched parentheses",
    labels = ["this parenthesis has no partner"],
    help = if *opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
)]
pub struct MismatchedParentheses {
    /// Whether the unmatched parenthesis was an opening parenthesis `(`. Otherwise, it was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

/// There was nothing inside a pair of parentheses.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "parentheses cannot be empty",
    labels = [format!("add an {} here", "expression".fg(EXPR))],
)]
pub struct EmptyParentheses;

/// An operator was found at the start of an expression, with nothing to its left.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expression cannot start with an operator",
    labels = [format!("`{}` needs a number on its left", operator)],
)]
pub struct LeadingOperator {
    /// The operator at the start of the expression.
    pub operator: Operator,
}

/// An operator was found at the end of an expression, with nothing to its right.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expression cannot end with an operator",
    labels = [format!("`{}` needs a number on its right", operator)],
)]
pub struct TrailingOperator {
    /// The operator at the end of the expression.
    pub operator: Operator,
}

/// Multiple tokens were found with no operator between them.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "multiple values with no operator",
    labels = ["I could not find an operator to apply here"],
    help = format!("separate values with one of the operators {}", "^ * / + -".fg(EXPR)),
)]
pub struct MissingOperator;

/// An operator was applied to something other than two numbers.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the `{}` operator requires numeric operands", operator),
    labels = ["this operator"],
    help = "each operator must have a number, or a parenthesized expression, on both sides",
)]
pub struct NonNumericOperands {
    /// The operator that was applied.
    pub operator: Operator,
}

/// A negative number was raised to a non-integer power.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!(
        "{}^{} results in an imaginary number, which is not supported",
        number(*base),
        number(*exponent),
    ),
    labels = ["this power"],
)]
pub struct ImaginaryResult {
    /// The negative base.
    pub base: f64,

    /// The non-integer exponent.
    pub exponent: f64,
}

/// The expression (or the contents of a pair of parentheses) is nothing but one operator.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expression cannot consist of a single operator",
    labels = ["this operator"],
)]
pub struct SingleOperator;

/// A reduction step did not produce a replacement token.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "reduction step failed to produce a replacement token",
    labels = ["while reducing this"],
    help = "you should never see this error; please report this as a bug",
    internal,
)]
pub struct MissingReplacement;

/// Re-resolving signs after a reduction folded a negation that was not directly in front of the
/// computed value, so the replaced interval no longer describes the change.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "a negation was resolved outside of the computed interval",
    labels = ["this negation"],
    help = "you should never see this error; please report this as a bug",
    internal,
)]
pub struct FoldOutsideInterval;
