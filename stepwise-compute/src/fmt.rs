//! Formatting helpers for token sequences and operation descriptions.

use stepwise_parser::Token;

pub use stepwise_parser::fmt::number;

/// Options that control how operations are described.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DescribeOptions {
    /// The maximum number of fractional digits to show for each operand. Operands with more
    /// digits are rounded and marked with a trailing `...`.
    ///
    /// This option **does not** affect the values of the tokens, only their descriptions.
    pub precision: usize,
}

impl Default for DescribeOptions {
    fn default() -> Self {
        Self { precision: 3 }
    }
}

impl DescribeOptions {
    /// Wraps the given [`DescribeOptions`] into a builder for further customization.
    pub fn into_builder(self) -> DescribeOptionsBuilder {
        DescribeOptionsBuilder(self)
    }
}

/// Helper struct to build a [`DescribeOptions`] struct.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DescribeOptionsBuilder(DescribeOptions);

impl DescribeOptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of fractional digits shown for each operand.
    pub fn precision(mut self, precision: usize) -> Self {
        self.0.precision = precision;
        self
    }

    /// Builds the [`DescribeOptions`].
    pub fn build(self) -> DescribeOptions {
        self.0
    }
}

/// Renders a token sequence on a single line, joining the tokens with spaces. An unresolved
/// negation in front of a parenthesis is written as `-(`.
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| token.to_string())
        .collect::<Vec<_>>()
        .join(" ")
        .replace("neg (", "-(")
}

/// Formats a number with at most `digits` fractional digits. If the number had to be rounded to
/// fit, `...` is appended to show that digits were cut off.
pub fn truncated(n: f64, digits: usize) -> String {
    let formatted = number(n);
    match formatted.split_once('.') {
        Some((_, fraction)) if fraction.len() > digits => {
            let rounded = format!("{:.*}", digits, n).parse().unwrap_or(n);
            format!("{}...", number(rounded))
        },
        _ => formatted,
    }
}

/// Formats a number as an ordinal (`1st`, `2nd`, `3rd`, `4th`, ...).
///
/// Numbers that are not integers are formatted with [`truncated`] and always use `th`.
pub fn ordinal(n: f64, digits: usize) -> String {
    if !n.is_finite() || n.fract() != 0.0 {
        return format!("{}th", truncated(n, digits));
    }

    let last_two = (n.abs() % 100.0) as u8;
    let suffix = match (last_two % 10, last_two) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", number(n), suffix)
}
