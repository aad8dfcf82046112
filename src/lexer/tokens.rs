use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

/// Every fixed token text, in the order the tokenizer must try them.
///
/// Two-character operators come before the one-character operators they
/// start with so that `>=` is never split into `>` and `=`.
pub const SYMBOL_TABLE: [(&str, TokenKind); 26] = [
    // Equality and comparison
    ("==", TokenKind::Equals),
    ("!=", TokenKind::NotEquals),
    (">=", TokenKind::GreaterEquals),
    ("<=", TokenKind::LessEquals),
    // Arithmetic
    ("+", TokenKind::Plus),
    ("-", TokenKind::Dash),
    ("*", TokenKind::Star),
    ("/", TokenKind::Slash),
    // Other
    ("=", TokenKind::Assignment),
    (">", TokenKind::Greater),
    ("<", TokenKind::Less),
    // Brackets
    ("(", TokenKind::OpenParen),
    (")", TokenKind::CloseParen),
    ("{", TokenKind::OpenCurly),
    ("}", TokenKind::CloseCurly),
    (",", TokenKind::Comma),
    (";", TokenKind::Semicolon),
    // Reserved
    ("let", TokenKind::Let),
    ("print", TokenKind::Print),
    ("return", TokenKind::Return),
    ("function", TokenKind::Function),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("while", TokenKind::While),
    ("for", TokenKind::For),
    ("do", TokenKind::Do),
];

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> =
        SYMBOL_TABLE.iter().copied().collect();
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    Identifier,

    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Semicolon,
    Comma,

    Plus,
    Dash,
    Slash,
    Star,

    // Reserved
    Let,
    Print,
    Function,
    Return,
    If,
    Else,
    While,
    Do,
    For,
}

impl TokenKind {
    /// Tokens that may begin an expression statement.
    pub fn starts_expression(&self) -> bool {
        matches!(
            self,
            TokenKind::Number
                | TokenKind::Identifier
                | TokenKind::Plus
                | TokenKind::Dash
                | TokenKind::Star
                | TokenKind::Slash
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Token {
            kind,
            value: value.into(),
        }
    }

    pub fn eof() -> Self {
        Token::new(TokenKind::EOF, "[EOF]")
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EOF
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Joins the text of every token with single spaces, sentinel included.
pub fn display_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| token.value.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
