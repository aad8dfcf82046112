use std::fmt::Display;

use crate::lexer::tokens::TokenKind;

/// Binary operator kinds.
///
/// `Equal` is produced for the `=` token in the operator table but no
/// grammar position ever builds it, and it has no arithmetic meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOpType {
    Add,
    Sub,
    Multiply,
    Divide,
    Equal,
    Equals,
    NotEqual,
    Greater,
    Less,
    GreaterEqual,
    LessEqual,
}

impl BinOpType {
    pub fn from_token_kind(kind: TokenKind) -> Option<BinOpType> {
        match kind {
            TokenKind::Plus => Some(BinOpType::Add),
            TokenKind::Dash => Some(BinOpType::Sub),
            TokenKind::Star => Some(BinOpType::Multiply),
            TokenKind::Slash => Some(BinOpType::Divide),
            TokenKind::Assignment => Some(BinOpType::Equal),
            TokenKind::Equals => Some(BinOpType::Equals),
            TokenKind::NotEquals => Some(BinOpType::NotEqual),
            TokenKind::Greater => Some(BinOpType::Greater),
            TokenKind::Less => Some(BinOpType::Less),
            TokenKind::GreaterEquals => Some(BinOpType::GreaterEqual),
            TokenKind::LessEquals => Some(BinOpType::LessEqual),
            _ => None,
        }
    }

    /// Name used when the operator is displayed as an AST label.
    pub fn label(&self) -> &'static str {
        match self {
            BinOpType::Add => "Add",
            BinOpType::Sub => "Sub",
            BinOpType::Multiply => "Multiply",
            BinOpType::Divide => "Divide",
            BinOpType::Equal => "Equal",
            BinOpType::Equals => "Equals",
            BinOpType::NotEqual => "unEqual",
            BinOpType::Greater => "Greater",
            BinOpType::Less => "Less",
            BinOpType::GreaterEqual => "GreaterEqual",
            BinOpType::LessEqual => "LessEqual",
        }
    }
}

impl Display for BinOpType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Expression
///
/// Closed set of expression kinds; consumers match on it exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Binary(BinaryExpr),
    Number(NumberExpr),
    Symbol(SymbolExpr),
    Call(CallExpr),
}

// LITERALS

/// Number Expression
/// Represents a numeric literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub value: f32,
}

/// Symbol Expression
/// Represents an identifier in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolExpr {
    pub value: String,
}

// COMPLEX

/// Binary Expression
/// Represents an arithmetic or comparison operation between two expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub operator: BinOpType,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

/// Call Expression
/// Represents applying a named function to a list of arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: String,
    pub arguments: Vec<Expr>,
}

impl Expr {
    pub fn number(value: f32) -> Expr {
        Expr::Number(NumberExpr { value })
    }

    pub fn symbol(value: impl Into<String>) -> Expr {
        Expr::Symbol(SymbolExpr {
            value: value.into(),
        })
    }

    pub fn binary(operator: BinOpType, left: Expr, right: Expr) -> Expr {
        Expr::Binary(BinaryExpr {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn call(callee: impl Into<String>, arguments: Vec<Expr>) -> Expr {
        Expr::Call(CallExpr {
            callee: callee.into(),
            arguments,
        })
    }
}
