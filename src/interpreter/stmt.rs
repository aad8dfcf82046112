use crate::{
    ast::{expressions::Expr, statements::Stmt},
    errors::errors::{Error, ErrorImpl},
    format_number,
};

use super::{
    expr::eval_expression,
    interpreter::Interpreter,
    output::{emit_value, Output},
};

pub fn exec_block(
    interpreter: &mut Interpreter,
    statements: &[Stmt],
    output: &mut impl Output,
) -> Result<(), Error> {
    for statement in statements {
        exec_statement(interpreter, statement, output)?;
    }
    Ok(())
}

/// Executes one statement.
///
/// Loop guards are inverted: `while`, `do`/`while` and `for` keep going
/// while their condition is exactly zero.
pub fn exec_statement(
    interpreter: &mut Interpreter,
    statement: &Stmt,
    output: &mut impl Output,
) -> Result<(), Error> {
    match statement {
        Stmt::Expression(expression_stmt) => {
            let value = eval_expression(interpreter, &expression_stmt.expression, output)?;
            emit_value(output, value)?;
        }
        Stmt::Print(print_stmt) => {
            let value = eval_expression(interpreter, &print_stmt.expression, output)?;
            emit_value(output, value)?;
        }
        Stmt::Assign(assign_stmt) => {
            let value = eval_expression(interpreter, &assign_stmt.value, output)?;

            match &assign_stmt.target {
                Expr::Symbol(symbol) => interpreter.set_variable(&symbol.value, value),
                target => {
                    return Err(Error::runtime(ErrorImpl::InvalidAssignmentTarget {
                        target: describe_target(target),
                    }))
                }
            }
        }
        Stmt::If(if_stmt) => {
            if eval_expression(interpreter, &if_stmt.condition, output)? != 0.0 {
                exec_block(interpreter, &if_stmt.then_body, output)?;
            } else if let Some(else_body) = &if_stmt.else_body {
                exec_block(interpreter, else_body, output)?;
            }
        }
        Stmt::While(while_stmt) => {
            while eval_expression(interpreter, &while_stmt.condition, output)? == 0.0 {
                exec_block(interpreter, &while_stmt.body, output)?;
            }
        }
        Stmt::DoWhile(do_while_stmt) => loop {
            exec_block(interpreter, &do_while_stmt.body, output)?;

            if eval_expression(interpreter, &do_while_stmt.condition, output)? != 0.0 {
                break;
            }
        },
        Stmt::For(for_stmt) => {
            exec_block(interpreter, &for_stmt.init, output)?;

            while eval_expression(interpreter, &for_stmt.condition, output)? == 0.0 {
                exec_block(interpreter, &for_stmt.body, output)?;
                exec_block(interpreter, &for_stmt.update, output)?;
            }
        }
        Stmt::Function(function_stmt) => interpreter.declare_function(function_stmt),
        Stmt::Return(return_stmt) => {
            let value = eval_expression(interpreter, &return_stmt.value, output)?;
            interpreter.return_value = value;

            // Unwind the binding of the call that is returning
            if interpreter.stack.len() > 1 {
                interpreter.stack.pop();
            }
        }
    }

    Ok(())
}

fn describe_target(target: &Expr) -> String {
    match target {
        Expr::Number(number) => format_number(number.value),
        Expr::Symbol(symbol) => symbol.value.clone(),
        Expr::Call(call) => format!("{}(...)", call.callee),
        Expr::Binary(binary) => format!("{} expression", binary.operator),
    }
}
