use tracing::debug;

use crate::{
    ast::expressions::{BinOpType, BinaryExpr, CallExpr, Expr},
    errors::errors::{Error, ErrorImpl},
};

use super::{interpreter::Interpreter, output::Output, stmt::exec_block};

/// Evaluates an expression to a number.
///
/// Output is threaded through because a call runs a function body, and the
/// body may print.
pub fn eval_expression(
    interpreter: &mut Interpreter,
    expression: &Expr,
    output: &mut impl Output,
) -> Result<f32, Error> {
    match expression {
        Expr::Number(number) => Ok(number.value),
        Expr::Symbol(symbol) => interpreter.get_variable(&symbol.value),
        Expr::Binary(binary) => eval_binary(interpreter, binary, output),
        Expr::Call(call) => eval_call(interpreter, call, output),
    }
}

fn eval_binary(
    interpreter: &mut Interpreter,
    binary: &BinaryExpr,
    output: &mut impl Output,
) -> Result<f32, Error> {
    let left = eval_expression(interpreter, &binary.left, output)?;
    let right = eval_expression(interpreter, &binary.right, output)?;

    let value = match binary.operator {
        BinOpType::Add => left + right,
        BinOpType::Sub => left - right,
        BinOpType::Multiply => left * right,
        BinOpType::Divide => {
            if right == 0.0 {
                return Err(Error::runtime(ErrorImpl::DivisionByZero));
            }
            left / right
        }
        BinOpType::Equals => truth(left == right),
        BinOpType::NotEqual => truth(left != right),
        BinOpType::Greater => truth(left > right),
        BinOpType::Less => truth(left < right),
        BinOpType::GreaterEqual => truth(left >= right),
        BinOpType::LessEqual => truth(left <= right),
        // Never built by the grammar
        BinOpType::Equal => 0.0,
    };

    Ok(value)
}

fn truth(condition: bool) -> f32 {
    if condition {
        1.0
    } else {
        0.0
    }
}

/// Calls a registered function.
///
/// Arguments are evaluated before anything is bound. Each parameter is both
/// pushed on the value stack and written to the global variables, so
/// functions with several parameters share one set of bindings.
fn eval_call(
    interpreter: &mut Interpreter,
    call: &CallExpr,
    output: &mut impl Output,
) -> Result<f32, Error> {
    let function = interpreter.get_function(&call.callee)?;

    let mut arguments = Vec::with_capacity(call.arguments.len());
    for argument in &call.arguments {
        arguments.push(eval_expression(interpreter, argument, output)?);
    }

    if function.parameters.len() > arguments.len() {
        return Err(Error::runtime(ErrorImpl::MissingArguments {
            expected: function.parameters.len(),
            received: arguments.len(),
        }));
    }

    debug!(name = %call.callee, arguments = ?arguments, "calling function");

    if function.parameters.len() == 1 {
        interpreter.recursion_mode = true;
    }

    for (parameter, value) in function.parameters.iter().zip(arguments) {
        interpreter.stack.push(value);
        interpreter.set_variable(&parameter.value, value);
    }

    exec_block(interpreter, &function.body, output)?;

    Ok(interpreter.return_value)
}
