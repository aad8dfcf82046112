use crate::{
    ast::{
        expressions::SymbolExpr,
        statements::{
            AssignStmt, DoWhileStmt, ExpressionStmt, ForStmt, FunctionStmt, IfStmt, PrintStmt,
            ReturnStmt, Stmt, WhileStmt,
        },
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

/// Parses one statement, or returns `None` without consuming anything when
/// the current token can start neither a statement nor an expression.
pub fn parse_stmt(parser: &mut Parser) -> Result<Option<Stmt>, Error> {
    let kind = parser.current_token_kind()?;

    if let Some(handler) = parser.get_stmt_lookup().get(&kind).copied() {
        return handler(parser).map(Some);
    }

    if kind.starts_expression() {
        return parse_expression_stmt(parser).map(Some);
    }

    Ok(None)
}

/// A block body holds at most one statement.
pub fn parse_block(parser: &mut Parser) -> Result<Vec<Stmt>, Error> {
    Ok(parse_stmt(parser)?.into_iter().collect())
}

/// Takes the current token's text as a name, whatever its kind.
fn parse_symbol(parser: &mut Parser) -> Result<SymbolExpr, Error> {
    let token = parser.expect(TokenKind::Identifier)?;
    Ok(SymbolExpr { value: token.value })
}

/// An expression statement has no terminator of its own.
pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let expression = parse_expr(parser, BindingPower::Default)?;
    Ok(Stmt::Expression(ExpressionStmt { expression }))
}

pub fn parse_assign_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Let)?;
    let target = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Assignment)?;
    let value = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Assign(AssignStmt { target, value }))
}

pub fn parse_print_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Print)?;
    let expression = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Print(PrintStmt { expression }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Return)?;
    let value = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Return(ReturnStmt { value }))
}

pub fn parse_function_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Function)?;
    let identifier = parse_symbol(parser)?;

    let mut parameters = Vec::new();
    if parser.current_token_kind()? == TokenKind::OpenParen {
        parser.expect(TokenKind::OpenParen)?;

        if parser.current_token_kind()? != TokenKind::CloseParen {
            loop {
                parameters.push(parse_symbol(parser)?);

                if parser.current_token_kind()? != TokenKind::Comma {
                    break;
                }
                parser.expect(TokenKind::Comma)?;
            }
        }

        parser.expect(TokenKind::CloseParen)?;
    }

    parser.expect(TokenKind::OpenCurly)?;
    let body = parse_block(parser)?;
    parser.expect(TokenKind::CloseCurly)?;

    Ok(Stmt::Function(FunctionStmt {
        identifier,
        parameters,
        body,
    }))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::If)?;
    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    parser.expect(TokenKind::OpenCurly)?;
    let then_body = parse_block(parser)?;
    parser.expect(TokenKind::CloseCurly)?;

    let else_body;
    if parser.current_token_kind()? == TokenKind::Else {
        parser.expect(TokenKind::Else)?;

        if parser.current_token_kind()? == TokenKind::If {
            // `else if` chains hold the nested `if` as the whole else block.
            else_body = Some(parse_block(parser)?);
        } else {
            parser.expect(TokenKind::OpenCurly)?;
            else_body = Some(parse_block(parser)?);
            parser.expect(TokenKind::CloseCurly)?;
        }
    } else {
        else_body = None;
    }

    Ok(Stmt::If(IfStmt {
        condition,
        then_body,
        else_body,
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::While)?;
    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    parser.expect(TokenKind::OpenCurly)?;
    let body = parse_block(parser)?;
    parser.expect(TokenKind::CloseCurly)?;

    Ok(Stmt::While(WhileStmt { condition, body }))
}

pub fn parse_do_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Do)?;
    parser.expect(TokenKind::OpenCurly)?;
    let body = parse_block(parser)?;
    parser.expect(TokenKind::CloseCurly)?;

    parser.expect(TokenKind::While)?;
    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::DoWhile(DoWhileStmt { condition, body }))
}

/// `for ( init condition ; update ) { body }`
///
/// The init statement brings its own terminator; the separator after the
/// condition is consumed whatever it is.
pub fn parse_for_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::For)?;
    parser.expect(TokenKind::OpenParen)?;
    let init = parse_block(parser)?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;
    let update = parse_block(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    parser.expect(TokenKind::OpenCurly)?;
    let body = parse_block(parser)?;
    parser.expect(TokenKind::CloseCurly)?;

    Ok(Stmt::For(ForStmt {
        init,
        condition,
        update,
        body,
    }))
}
