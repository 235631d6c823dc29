use ariadne::Fmt;
use stepwise_attrs::ErrorKind;
use stepwise_error::EXPR;

/// A character that cannot appear in an expression.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not a valid character", character),
    labels = ["this character"],
    help = format!(
        "expressions may only contain {}, the operators {}, parentheses, and spaces",
        "numbers".fg(EXPR),
        "^ * / + -".fg(EXPR),
    ),
)]
pub struct InvalidCharacter {
    /// The offending character.
    pub character: char,
}

/// A run of digits and decimal points that is not a number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not a valid number", literal),
    labels = ["this literal"],
    help = if *decimal_points > 1 {
        "a number can contain at most one decimal point"
    } else {
        "a number must contain at least one digit"
    },
)]
pub struct InvalidLiteral {
    /// The text of the literal.
    pub literal: String,

    /// The number of decimal points in the literal.
    pub decimal_points: usize,
}

/// A negation marker was left at the very end of the expression.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expression cannot end with a negation",
    labels = ["this negation"],
    help = "you should never see this error; please report this as a bug",
    internal,
)]
pub struct TrailingNegation;

/// A negation marker was followed by something other than `(` or a number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "a negation must be followed by `(` or a number",
    labels = ["this negation".to_string(), format!("is followed by `{}`", found)],
    help = "you should never see this error; please report this as a bug",
    internal,
)]
pub struct MisplacedNegation {
    /// The text of the token that followed the negation marker.
    pub found: String,
}
