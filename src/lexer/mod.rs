//! Lexical analysis for the language.
//!
//! This module contains the tokenizer that converts source text into an
//! ordered stream of tokens for parsing. It handles:
//!
//! - Whitespace and comment removal
//! - Recognition of keywords, operators and punctuation via regex tables
//! - Negative number literals (sign attachment)
//! - Classification of the remaining fragments into numbers and identifiers

pub mod lexer;
pub mod tokens;
