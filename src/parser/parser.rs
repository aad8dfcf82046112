//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parsing entry point.
//! It maintains lookup tables for:
//! - Statement handlers
//! - Binding powers for operator precedence

use std::collections::HashMap;

use tracing::trace;

use crate::{
    ast::ast::{Ast, Program},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::{
    expr::parse_expr,
    lookups::{create_token_lookups, BPLookup, BindingPower, StmtHandler, StmtLookup},
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for binary operator binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a new Parser instance over a token stream.
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens,
            pos: 0,
            stmt_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing.
    ///
    /// Every token read goes through here. The grammar never checks whether
    /// it has reached EOF before consuming, so malformed input can walk the
    /// position past the sentinel; the next read then fails with
    /// `UnexpectedEndOfInput`.
    pub fn current_token(&self) -> Result<&Token, Error> {
        self.tokens
            .get(self.pos)
            .ok_or_else(|| Error::new(ErrorImpl::UnexpectedEndOfInput, self.get_position()))
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> Result<TokenKind, Error> {
        Ok(self.current_token()?.kind)
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let token = self.current_token()?.clone();
        trace!("progress {}", token.value);
        self.pos += 1;
        Ok(token)
    }

    /// Consumes the current token whatever its kind.
    ///
    /// `expected_kind` names the token the grammar wants at this point; a
    /// mismatch is only traced.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let token = self.advance()?;
        if token.kind != expected_kind {
            trace!(expected = %expected_kind, found = %token.kind, "consumed unexpected token");
        }
        Ok(token)
    }

    /// Checks if the current token is anything but EOF.
    pub fn has_tokens(&self) -> Result<bool, Error> {
        Ok(self.current_token_kind()? != TokenKind::EOF)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns the binding power of a token, `Default` when it is not an operator.
    pub fn get_binding_power(&self, kind: TokenKind) -> BindingPower {
        *self
            .binding_power_lookup
            .get(&kind)
            .unwrap_or(&BindingPower::Default)
    }

    /// Registers a binary operator token with its precedence.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower) {
        self.binding_power_lookup.insert(kind, binding_power);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the current position in the token stream.
    pub fn get_position(&self) -> Position {
        Position(self.pos as u32)
    }

    pub fn unexpected_token(&self) -> Error {
        let token = self
            .tokens
            .get(self.pos)
            .map(|token| token.value.clone())
            .unwrap_or_default();
        Error::new(ErrorImpl::UnexpectedToken { token }, self.get_position())
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// When the first token is a number the source is a single expression and
/// any tokens after it are ignored. Otherwise statements are parsed until
/// EOF into a `Program`.
pub fn parse(tokens: Vec<Token>) -> Result<Ast, Error> {
    let mut parser = Parser::new(tokens);
    create_token_lookups(&mut parser);

    if parser.current_token_kind()? == TokenKind::Number {
        let expr = parse_expr(&mut parser, BindingPower::Default)?;
        return Ok(Ast::Exp(expr));
    }

    let mut statements = vec![];

    while parser.has_tokens()? {
        match parse_stmt(&mut parser)? {
            Some(stmt) => statements.push(stmt),
            None => return Err(parser.unexpected_token()),
        }
    }

    Ok(Ast::Program(Program { statements }))
}
