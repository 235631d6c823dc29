use crate::{
    error::{kind, Error},
    fmt::{format_tokens, DescribeOptions},
    reduce::reduce,
    step::Step,
};
use log::debug;
use std::mem;
use stepwise_parser::{parse, Paren, TokenKind};

/// Evaluates the given expression, returning every step of its reduction to a single number.
///
/// The first step holds the sign-resolved input and the last holds the result. An empty
/// expression produces no steps at all. Operations are described with the default
/// [`DescribeOptions`].
pub fn evaluate(input: &str) -> Result<Vec<Step>, Error> {
    evaluate_with(input, &DescribeOptions::default())
}

/// Evaluates the given expression with the given description options.
///
/// See [`evaluate`] for details.
pub fn evaluate_with(input: &str, options: &DescribeOptions) -> Result<Vec<Step>, Error> {
    let tokens = parse(input)?;
    match tokens.as_slice() {
        [] => return Ok(Vec::new()),
        [token] => match token.kind {
            TokenKind::Operator(_) => {
                return Err(Error::new(vec![token.span.clone()], kind::SingleOperator));
            },
            TokenKind::Paren(paren) => {
                return Err(Error::new(
                    vec![token.span.clone()],
                    kind::MismatchedParentheses { opening: paren == Paren::Open },
                ));
            },
            TokenKind::Number(_) => (),
        },
        _ => (),
    }

    let mut steps = Vec::new();
    let mut current = Step::initial(tokens);
    debug!("evaluating `{}`", format_tokens(&current.tokens));

    while current.tokens.len() > 1 {
        let reduction = reduce(&current.tokens, options)?;
        debug!("{} => `{}`", reduction.description, format_tokens(&reduction.tokens));

        current.compute_next = Some(reduction.replaced);
        let next = Step {
            tokens: reduction.tokens,
            description: Some(reduction.description),
            computed: Some(reduction.computed),
            compute_next: None,
        };
        steps.push(mem::replace(&mut current, next));
    }

    steps.push(current);
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_abs,
        afe_relative_error_msg,
        afe_is_relative_eq,
        assert_float_relative_eq,
    };
    use crate::step::Interval;
    use pretty_assertions::assert_eq;
    use stepwise_parser::{token::kinds, Operator, Token};
    use super::*;

    /// Evaluates the input, returning the value of the last step.
    fn value(input: &str) -> f64 {
        let steps = evaluate(input).unwrap();
        steps.last().and_then(Step::value).unwrap()
    }

    /// Evaluates the input, returning the token text of every step.
    fn lines(input: &str) -> Vec<String> {
        evaluate(input)
            .unwrap()
            .iter()
            .map(|step| format_tokens(&step.tokens))
            .collect()
    }

    #[test]
    fn simple_sum() {
        let steps = evaluate("1+2").unwrap();
        assert_eq!(steps.len(), 2);

        assert_eq!(kinds(&steps[0].tokens), vec![
            TokenKind::Number(1.0),
            TokenKind::Operator(Operator::Add),
            TokenKind::Number(2.0),
        ]);
        assert_eq!(steps[0].description, None);
        assert_eq!(steps[0].computed, None);
        assert_eq!(steps[0].compute_next, Some(Interval::new(0, 3)));

        assert_eq!(steps[1].tokens, vec![Token::number(3.0, 0..3)]);
        assert_eq!(steps[1].description.as_deref(), Some("add 2 to 1"));
        assert_eq!(steps[1].computed, Some(0));
        assert_eq!(steps[1].compute_next, None);
    }

    #[test]
    fn parenthesized_product() {
        assert_eq!(lines("(1+1)*2"), vec!["( 1 + 1 ) * 2", "2 * 2", "4"]);
        let steps = evaluate("(1+1)*2").unwrap();
        assert_eq!(steps[0].compute_next, Some(Interval::new(0, 5)));
        assert_eq!(steps[1].compute_next, Some(Interval::new(0, 3)));
        assert_eq!(steps[2].description.as_deref(), Some("multiply 2 by 2"));
    }

    #[test]
    fn left_to_right_factors() {
        assert_eq!(lines("4*5/2"), vec!["4 * 5 / 2", "20 / 2", "10"]);
        let steps = evaluate("4*5/2").unwrap();
        assert_eq!(steps[1].description.as_deref(), Some("multiply 4 by 5"));
        assert_eq!(steps[2].description.as_deref(), Some("divide 20 by 2"));
    }

    #[test]
    fn signed_literals() {
        assert_eq!(lines("-5+-8--11*2"), vec![
            "-5 + -8 - -11 * 2",
            "-5 + -8 - -22",
            "-13 - -22",
            "9",
        ]);
        let steps = evaluate("-5+-8--11*2").unwrap();
        assert_eq!(steps[1].computed, Some(4));
        assert_eq!(steps[2].description.as_deref(), Some("add -8 to -5"));
        assert_eq!(steps[3].description.as_deref(), Some("subtract -22 from -13"));
    }

    #[test]
    fn fractional_literals() {
        let steps = evaluate("-.32       /.5").unwrap();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[1].description.as_deref(), Some("divide -0.32 by 0.5"));
        assert_float_relative_eq!(steps[1].value().unwrap(), -0.64);
    }

    #[test]
    fn decimal_product() {
        assert_eq!(lines("(4-2)*3.5"), vec!["( 4 - 2 ) * 3.5", "2 * 3.5", "7"]);
    }

    #[test]
    fn unary_minus_binds_after_power() {
        assert_eq!(value("-2^2"), -4.0);
        assert_eq!(value("(-2)^2"), 4.0);
        assert_eq!(value("2^-1"), 0.5);
        assert_eq!(value("-(2)^2"), -4.0);
    }

    #[test]
    fn power_is_right_associative() {
        assert_eq!(value("2^3^2"), 512.0);
    }

    #[test]
    fn closed_group_before_minus() {
        assert_eq!(lines("(1)-2"), vec!["( 1 ) - 2", "1 - 2", "-1"]);
    }

    #[test]
    fn negated_groups() {
        assert_eq!(lines("-(1+1)"), vec!["-( 1 + 1 )", "-2"]);
        assert_eq!(value("-(-(3))"), 3.0);
        assert_eq!(value("2*-(3-5)"), 4.0);
        assert_eq!(value("-((1))"), -1.0);
    }

    #[test]
    fn nested_groups() {
        assert_eq!(value("((2+3)*(4-1))^2"), 225.0);
        assert_eq!(lines("(((7)))"), vec!["( ( ( 7 ) ) )", "( ( 7 ) )", "( 7 )", "7"]);
    }

    #[test]
    fn decimal_results() {
        assert_float_relative_eq!(value("0.1+0.2"), 0.3);
        assert_float_relative_eq!(value("1/3*3"), 1.0);
        assert_float_relative_eq!(value("2^0.5*2^0.5"), 2.0);
    }

    #[test]
    fn division_by_zero_is_not_a_fault() {
        assert_eq!(value("1/0"), f64::INFINITY);
        assert_eq!(value("-1/0"), f64::NEG_INFINITY);
        assert!(value("0/0").is_nan());
    }

    #[test]
    fn negative_zero_is_zero() {
        let result = value("-0*1");
        assert_eq!(result, 0.0);
        assert_eq!(lines("-(0)"), vec!["-( 0 )", "0"]);
    }

    #[test]
    fn single_number() {
        let steps = evaluate("42").unwrap();
        assert_eq!(steps, vec![Step::initial(vec![Token::number(42.0, 0..2)])]);
        assert_eq!(value("-3"), -3.0);
    }

    #[test]
    fn empty_input() {
        assert_eq!(evaluate("").unwrap(), vec![]);
        assert_eq!(evaluate("   ").unwrap(), vec![]);
    }

    #[test]
    fn every_step_shrinks() {
        let steps = evaluate("1+2*3-(4/2)^2").unwrap();
        assert!(steps.windows(2).all(|w| w[1].tokens.len() < w[0].tokens.len()));
        assert!(steps.last().unwrap().is_final());
        assert_eq!(steps.last().unwrap().value(), Some(3.0));
    }

    #[test]
    fn evaluation_is_repeatable() {
        let input = "-(2.5*4)^2/5";
        assert_eq!(evaluate(input).unwrap(), evaluate(input).unwrap());
    }

    #[test]
    fn custom_precision() {
        let options = DescribeOptions::default().into_builder().precision(1).build();
        let steps = evaluate_with("1/3+1", &options).unwrap();
        assert_eq!(steps[2].description.as_deref(), Some("add 1 to 0.3..."));
    }

    #[test]
    fn consecutive_operators() {
        let err = evaluate("2+-+-4").unwrap_err();
        assert!(!err.is_internal());
        assert_eq!(err.message(), "the `+` operator requires numeric operands");
    }

    #[test]
    fn unknown_character() {
        let err = evaluate("19 + cinnamon").unwrap_err();
        assert_eq!(err.message(), "`c` is not a valid character");
        assert_eq!(err.spans, vec![5..6]);
    }

    #[test]
    fn lone_operator() {
        let err = evaluate("+").unwrap_err();
        assert_eq!(err.message(), "expression cannot consist of a single operator");
        assert_eq!(err.spans, vec![0..1]);
        assert!(evaluate("-").is_err());
    }

    #[test]
    fn lone_parenthesis() {
        let err = evaluate("(").unwrap_err();
        assert_eq!(err.message(), "mismatched parentheses");
        assert!(!err.is_internal());
        assert!(evaluate(")").is_err());
    }

    #[test]
    fn malformed_structure() {
        assert!(evaluate("1+").is_err());
        assert!(evaluate("*1").is_err());
        assert!(evaluate("1 2").is_err());
        assert!(evaluate("()").is_err());
        assert!(evaluate("(1+2").is_err());
        assert!(evaluate("1..2").is_err());
        assert!(evaluate("(-8)^(1/3)").is_err());
    }

    #[test]
    fn fault_after_steps() {
        // the fault is only found once the parentheses have been reduced
        let err = evaluate("(1+1) 2").unwrap_err();
        assert_eq!(err.message(), "multiple values with no operator");
        assert_eq!(err.spans, vec![0..7]);
    }

    #[test]
    fn computed_token_is_a_number() {
        for step in evaluate("(3-1)^-(1+1)*8").unwrap().iter().skip(1) {
            assert!(step.computed_token().unwrap().kind.is_number());
        }
        assert_eq!(value("(3-1)^-(1+1)*8"), 2.0);
    }

    #[test]
    fn spans_follow_replacements() {
        let steps = evaluate("(1+1) * 2").unwrap();
        assert_eq!(steps[1].tokens[0].span, 0..5);
        assert_eq!(steps[1].tokens[2].span, 8..9);
        assert_eq!(steps[2].tokens[0].span, 0..9);
    }
}
