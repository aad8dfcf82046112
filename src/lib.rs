#![allow(clippy::module_inception)]

use crate::{
    ast::ast::Ast,
    errors::errors::Error,
    interpreter::{interpreter::Interpreter, output::Output},
    lexer::lexer::tokenize,
    parser::parser::parse,
};

pub mod ast;
pub mod errors;
pub mod interpreter;
pub mod lexer;
pub mod parser;

extern crate regex;

/// Index of a token in the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position(pub u32);

/// Canonical text of a number: the shortest decimal that reads back as the
/// same `f32`, with no fractional part for whole values.
pub fn format_number(value: f32) -> String {
    value.to_string()
}

/// Tokenizes and parses a source text.
pub fn parse_source(source: &str) -> Result<Ast, Error> {
    parse(tokenize(source))
}

/// Tokenizes, parses and runs a source text against an existing interpreter.
pub fn run_source(
    source: &str,
    interpreter: &mut Interpreter,
    output: &mut impl Output,
) -> Result<(), Error> {
    let ast = parse_source(source)?;
    interpreter.run(&ast, output)
}

#[cfg(test)]
mod tests {
    use super::format_number;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(-0.5999999), "-0.5999999");
        assert_eq!(format_number(75025.0), "75025");
        assert_eq!(format_number(0.0), "0");
    }
}
