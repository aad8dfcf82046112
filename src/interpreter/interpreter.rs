//! Interpreter state and the evaluation entry point.

use std::{collections::HashMap, rc::Rc};

use tracing::debug;

use crate::{
    ast::{ast::Ast, statements::FunctionStmt},
    errors::errors::{Error, ErrorImpl},
};

use super::{
    expr::eval_expression,
    output::{emit_value, Output},
    stmt::exec_block,
};

/// All mutable state of one running program.
///
/// The state outlives a single `run`, so repeated runs against the same
/// instance (a REPL session) see earlier assignments and functions.
#[derive(Debug, Default)]
pub struct Interpreter {
    /// Value of the most recently executed `return`
    pub return_value: f32,
    /// Switched on by the first call of a one-parameter function, never off again
    pub recursion_mode: bool,
    /// Argument values pushed by calls
    pub stack: Vec<f32>,
    /// Global variables, last write wins
    pub variables: HashMap<String, f32>,
    /// Registered functions by name
    pub functions: HashMap<String, Rc<FunctionStmt>>,
}

impl Interpreter {
    pub fn new() -> Self {
        Interpreter::default()
    }

    /// Runs a parsed tree, emitting one line per printed value.
    ///
    /// A bare expression root emits its own value.
    pub fn run(&mut self, ast: &Ast, output: &mut impl Output) -> Result<(), Error> {
        match ast {
            Ast::Program(program) => exec_block(self, &program.statements, output),
            Ast::Exp(expression) => {
                let value = eval_expression(self, expression, output)?;
                emit_value(output, value)
            }
        }
    }

    pub fn declare_function(&mut self, function: &FunctionStmt) {
        debug!(
            name = %function.identifier.value,
            parameters = function.parameters.len(),
            "registering function"
        );
        self.functions
            .insert(function.identifier.value.clone(), Rc::new(function.clone()));
    }

    pub fn get_function(&self, name: &str) -> Result<Rc<FunctionStmt>, Error> {
        self.functions.get(name).cloned().ok_or_else(|| {
            Error::runtime(ErrorImpl::FunctionNotDeclared {
                function: name.to_string(),
            })
        })
    }

    pub fn set_variable(&mut self, name: &str, value: f32) {
        self.variables.insert(name.to_string(), value);
    }

    /// Reads a name. In recursion mode every read yields the top of the
    /// value stack, whatever the name.
    pub fn get_variable(&self, name: &str) -> Result<f32, Error> {
        if self.recursion_mode {
            return self
                .stack
                .last()
                .copied()
                .ok_or_else(|| Error::runtime(ErrorImpl::EmptyValueStack));
        }

        self.variables.get(name).copied().ok_or_else(|| {
            Error::runtime(ErrorImpl::VariableNotDeclared {
                variable: name.to_string(),
            })
        })
    }
}
