use std::collections::HashMap;

use crate::{ast::statements::Stmt, errors::errors::Error, lexer::tokens::TokenKind};

use super::{parser::Parser, stmt::*};

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Relational,
    Additive,
    Multiplicative,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Relational
    parser.led(TokenKind::Less, BindingPower::Relational);
    parser.led(TokenKind::LessEquals, BindingPower::Relational);
    parser.led(TokenKind::Greater, BindingPower::Relational);
    parser.led(TokenKind::GreaterEquals, BindingPower::Relational);
    parser.led(TokenKind::Equals, BindingPower::Relational);
    parser.led(TokenKind::NotEquals, BindingPower::Relational);

    // Additive and multiplicative
    parser.led(TokenKind::Plus, BindingPower::Additive);
    parser.led(TokenKind::Dash, BindingPower::Additive);
    parser.led(TokenKind::Star, BindingPower::Multiplicative);
    parser.led(TokenKind::Slash, BindingPower::Multiplicative);

    // Statements
    parser.stmt(TokenKind::Let, parse_assign_stmt);
    parser.stmt(TokenKind::Print, parse_print_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
    parser.stmt(TokenKind::Function, parse_function_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::While, parse_while_stmt);
    parser.stmt(TokenKind::Do, parse_do_while_stmt);
    parser.stmt(TokenKind::For, parse_for_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
