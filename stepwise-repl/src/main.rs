mod error;

use ariadne::{Color, Fmt};
use error::Error;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{fs, io::{self, IsTerminal, Read}};
use stepwise_compute::{evaluate, fmt::format_tokens, Step};
use stepwise_parser::{Operator, Paren, TokenKind};

/// The color of the token computed by the previous operation.
const COMPUTED: Color = Color::RGB(52, 235, 152);

/// The color of the tokens the next operation will consume.
const NEXT: Color = Color::RGB(235, 186, 52);

/// Renders the tokens of a step on one line, highlighting the computed token and the tokens the
/// next operation will consume.
fn highlight(step: &Step) -> String {
    let mut line = String::new();
    let mut tokens = step.tokens.iter().enumerate().peekable();

    while let Some((i, token)) = tokens.next() {
        // a negation in front of a parenthesis is written as `-(`
        let glued = token.is(Operator::Neg)
            && matches!(tokens.peek(), Some((_, next)) if next.kind == TokenKind::Paren(Paren::Open));
        let text = if glued { "-".to_string() } else { token.to_string() };

        if step.computed == Some(i) {
            line.push_str(&text.fg(COMPUTED).to_string());
        } else if step.compute_next.is_some_and(|next| next.contains(i)) {
            line.push_str(&text.fg(NEXT).to_string());
        } else {
            line.push_str(&text);
        }

        if !glued && tokens.peek().is_some() {
            line.push(' ');
        }
    }

    line
}

/// Prints every step, one per line, with the description of each operation aligned to the right
/// of the expression it produced.
fn print_steps(steps: &[Step]) {
    let widths = steps
        .iter()
        .map(|step| format_tokens(&step.tokens).chars().count())
        .collect::<Vec<_>>();
    let width = widths.iter().copied().max().unwrap_or(0);

    for (i, step) in steps.iter().enumerate() {
        let prefix = if i == 0 { ' ' } else { '=' };
        match &step.description {
            Some(description) => println!(
                "{} {}{}   {}",
                prefix,
                highlight(step),
                " ".repeat(width - widths[i]),
                description,
            ),
            None => println!("{} {}", prefix, highlight(step)),
        }
    }
}

/// Evaluates the given expression, printing its steps, or reporting the error to stderr.
fn eval_line(src_id: &str, input: &str) -> io::Result<()> {
    match evaluate(input) {
        Ok(steps) => print_steps(&steps),
        Err(err) => err.report_to_stderr(src_id, input)?,
    }
    Ok(())
}

/// Evaluates each non-empty line of the given source as its own expression.
fn eval_lines(src_id: &str, source: &str) -> io::Result<()> {
    for line in source.lines().map(str::trim).filter(|line| !line.is_empty()) {
        eval_line(src_id, line)?;
    }
    Ok(())
}

/// Reads one line from the editor and evaluates it.
fn process_line(rl: &mut DefaultEditor) -> Result<(), Error> {
    let input = rl.readline("> ")?;
    let input = input.trim();
    if input.is_empty() {
        return Ok(());
    }

    rl.add_history_entry(input)?;

    eval_line("input", input)?;
    Ok(())
}

fn main() -> Result<(), Error> {
    let mut args = std::env::args();
    args.next();

    if let Some(filename) = args.next() {
        // evaluate each line of the source file
        let source = fs::read_to_string(&filename)?;
        eval_lines(&filename, &source)?;
    } else if !io::stdin().is_terminal() {
        // read expressions from stdin
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        eval_lines("stdin", &source)?;
    } else {
        // run the repl / interactive mode
        let mut rl = DefaultEditor::new()?;
        loop {
            match process_line(&mut rl) {
                Ok(()) => (),
                Err(Error::Readline(ReadlineError::Eof | ReadlineError::Interrupted)) => break,
                Err(err) => return Err(err),
            }
        }
    }

    Ok(())
}
