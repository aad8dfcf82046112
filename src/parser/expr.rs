use crate::{
    ast::expressions::{BinOpType, Expr},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

/// Parses an expression whose operators all bind tighter than `bp`.
///
/// Every operator level is left-associative.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    let mut left = parse_primary_expr(parser)?;

    while parser.get_binding_power(parser.current_token_kind()?) > bp {
        left = parse_binary_expr(parser, left)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind()? {
        TokenKind::Number => {
            let position = parser.get_position();
            let token = parser.advance()?;

            // Literals past the `f32` range parse to infinity
            match token.value.parse::<f32>() {
                Ok(value) if value.is_finite() => Ok(Expr::number(value)),
                _ => Err(Error::new(
                    ErrorImpl::NumberParseError { token: token.value },
                    position,
                )),
            }
        }
        TokenKind::Identifier => {
            let name = parser.advance()?.value;

            if parser.current_token_kind()? == TokenKind::OpenParen {
                parse_call_expr(parser, name)
            } else {
                Ok(Expr::symbol(name))
            }
        }
        _ => Err(parser.unexpected_token()),
    }
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr) -> Result<Expr, Error> {
    let position = parser.get_position();
    let operator_token = parser.advance()?;
    let bp = parser.get_binding_power(operator_token.kind);

    let operator = BinOpType::from_token_kind(operator_token.kind).ok_or_else(|| {
        Error::new(
            ErrorImpl::UnexpectedToken {
                token: operator_token.value.clone(),
            },
            position,
        )
    })?;

    let right = parse_expr(parser, bp)?;

    Ok(Expr::binary(operator, left, right))
}

/// `name ( expr ( , expr )* )`; at least one argument is required.
pub fn parse_call_expr(parser: &mut Parser, callee: String) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenParen)?;

    let mut args = vec![];

    loop {
        args.push(parse_expr(parser, BindingPower::Default)?);

        if parser.current_token_kind()? != TokenKind::Comma {
            break;
        }
        parser.expect(TokenKind::Comma)?;
    }

    parser.expect(TokenKind::CloseParen)?;

    Ok(Expr::call(callee, args))
}
