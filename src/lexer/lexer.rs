use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP, SYMBOL_TABLE};

/// Separator placed around every recognised symbol before splitting.
const DELIMITER: char = ' ';

fn symbol_alternation() -> String {
    SYMBOL_TABLE
        .iter()
        .map(|(text, _)| regex::escape(text))
        .collect::<Vec<_>>()
        .join("|")
}

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new("\\s+").unwrap();
    static ref LINE_COMMENT: Regex = Regex::new("//.*").unwrap();
    static ref BLOCK_COMMENT: Regex = Regex::new("/\\*.*\\*/").unwrap();
    static ref SYMBOL: Regex = Regex::new(&symbol_alternation()).unwrap();
    static ref LEADING_SIGN: Regex = Regex::new("^\\s*-\\s+").unwrap();
    static ref ATTACHED_SIGN: Regex =
        Regex::new(&format!("({})\\s*-\\s+", symbol_alternation())).unwrap();
    static ref NUMBER: Regex = Regex::new("^-?[0-9]+$").unwrap();
    static ref IDENTIFIER: Regex = Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap();
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            tokens: vec![],
            source: source.to_string(),
        }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Drops whitespace first, so a `//` comment runs to the end of the source.
    fn strip(&mut self) {
        let source = WHITESPACE.replace_all(&self.source, "").into_owned();
        let source = LINE_COMMENT.replace_all(&source, "").into_owned();
        self.source = BLOCK_COMMENT.replace_all(&source, "").into_owned();
    }

    /// One pass over the text: at each position the first table entry that
    /// matches wins, so `whilet` is `while t` and `<==` is `<= =`.
    fn delimit_symbols(&mut self) {
        let replacement = format!("{DELIMITER}${{0}}{DELIMITER}");
        self.source = SYMBOL.replace_all(&self.source, replacement.as_str()).into_owned();
    }

    /// Glues a `-` onto the fragment after it when it opens the source or
    /// directly follows another symbol or keyword.
    fn attach_signs(&mut self) {
        let source = LEADING_SIGN.replace(&self.source, "-").into_owned();
        let replacement = format!("${{1}}{DELIMITER}-");
        self.source = ATTACHED_SIGN
            .replace_all(&source, replacement.as_str())
            .into_owned();
    }

    fn classify(&mut self) {
        let source = std::mem::take(&mut self.source);

        for fragment in source.split(DELIMITER).filter(|f| !f.is_empty()) {
            if let Some(kind) = RESERVED_LOOKUP.get(fragment) {
                self.push(Token::new(*kind, fragment));
            } else if NUMBER.is_match(fragment) {
                self.push(Token::new(TokenKind::Number, fragment));
            } else if IDENTIFIER.is_match(fragment) {
                self.push(Token::new(TokenKind::Identifier, fragment));
            } else {
                trace!("dropping unrecognised fragment {}", fragment);
            }
        }

        self.push(Token::eof());
    }
}

/// Splits source text into tokens, always terminated by a single EOF token.
///
/// Never fails: fragments that are neither a symbol, an integer literal nor
/// an identifier are discarded.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lex = Lexer::new(source);

    lex.strip();
    lex.delimit_symbols();
    lex.attach_signs();
    lex.classify();

    trace!("tokenized into {} tokens", lex.tokens.len());
    lex.tokens
}
