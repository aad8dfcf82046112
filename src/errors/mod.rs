//! Error types and error handling for the language.
//!
//! This module defines the fatal faults raised while parsing and running a
//! program. It includes:
//!
//! - An error structure with an optional token position
//! - Specific error variants for the parser and the interpreter
//! - Error names and suggestions for reporting

pub mod errors;

#[cfg(test)]
mod tests;
