//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into an Abstract Syntax Tree. It handles:
//!
//! - Statement parsing (assignments, functions, control flow, printing)
//! - Expression parsing (comparison, additive and multiplicative operators,
//!   numbers, symbols and function calls)
//!
//! Binary operators are parsed by precedence climbing over a binding power
//! table. Tokens are consumed without checking them against the grammar;
//! running past the end of the stream is the only parse fault besides a
//! token that cannot start an expression.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
