//! Tree-walking evaluation module.
//!
//! This module runs a parsed AST directly. It handles:
//!
//! - Execution of statements, including the inverted-guard loops
//! - Evaluation of expressions over reduced-precision numbers
//! - Function registration and the single-parameter value stack
//! - The output sink every printed value is written to

pub mod expr;
pub mod interpreter;
pub mod output;
pub mod stmt;

#[cfg(test)]
mod tests;
