pub mod lexeme;

use logos::{Lexer, Logos};
pub use lexeme::Lexeme;

/// Returns an iterator over the lexemes produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<Lexeme> {
    Lexeme::lexer(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compares the lexemes produced by the tokenizer to the raw expected lexemes.
    fn compare_lexemes<'source, const N: usize>(input: &'source str, expected: [(Lexeme, &'source str); N]) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_slice) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_slice);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn basic_expr() {
        compare_lexemes(
            "1 + 2",
            [
                (Lexeme::Literal, "1"),
                (Lexeme::Whitespace, " "),
                (Lexeme::Add, "+"),
                (Lexeme::Whitespace, " "),
                (Lexeme::Literal, "2"),
            ],
        );
    }

    #[test]
    fn complex_expr() {
        compare_lexemes(
            "-(4.5)^.2   / 1.2.3 $",
            [
                (Lexeme::Sub, "-"),
                (Lexeme::OpenParen, "("),
                (Lexeme::Literal, "4.5"),
                (Lexeme::CloseParen, ")"),
                (Lexeme::Exp, "^"),
                (Lexeme::Literal, ".2"),
                (Lexeme::Whitespace, "   "),
                (Lexeme::Div, "/"),
                (Lexeme::Whitespace, " "),
                (Lexeme::Literal, "1.2.3"),
                (Lexeme::Whitespace, " "),
                (Lexeme::Symbol, "$"),
            ],
        );
    }

    #[test]
    fn letters_are_symbols() {
        compare_lexemes(
            "1a",
            [
                (Lexeme::Literal, "1"),
                (Lexeme::Symbol, "a"),
            ],
        );
    }
}
