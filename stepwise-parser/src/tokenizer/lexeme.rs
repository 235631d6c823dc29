use logos::Logos;

/// The different kinds of lexemes that can be produced by the tokenizer.
///
/// The tokenizer knows nothing about precedence or sign; `-` is always [`Lexeme::Sub`] here.
#[derive(Logos, Clone, Copy, Debug, PartialEq)]
pub enum Lexeme {
    #[regex(r" +")]
    Whitespace,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("^")]
    Exp,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    /// A maximal run of digits and decimal points. Whether it is a valid number is decided later,
    /// so that `1.2.3` can be reported as a single bad literal instead of two numbers.
    #[regex(r"[0-9.]+")]
    Literal,

    #[regex(r".", priority = 0)]
    Symbol,
}
