use super::expressions::{Expr, SymbolExpr};

/// Statement
///
/// Closed set of statement kinds; consumers match on it exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Assign(AssignStmt),
    Print(PrintStmt),
    Return(ReturnStmt),
    Function(FunctionStmt),
    If(IfStmt),
    While(WhileStmt),
    DoWhile(DoWhileStmt),
    For(ForStmt),
    Expression(ExpressionStmt),
}

/// `let <target> = <value>;`
///
/// The target is any expression; only a symbol can be assigned at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt {
    pub target: Expr,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrintStmt {
    pub expression: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionStmt {
    pub identifier: SymbolExpr,
    pub parameters: Vec<SymbolExpr>,
    pub body: Vec<Stmt>,
}

/// `else_body` is `None` when the statement has no `else` at all, which is
/// distinct from an empty else block.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_body: Vec<Stmt>,
    pub else_body: Option<Vec<Stmt>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoWhileStmt {
    pub condition: Expr,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub init: Vec<Stmt>,
    pub condition: Expr,
    pub update: Vec<Stmt>,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
}
