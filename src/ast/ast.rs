use crate::format_number;

use super::{
    expressions::{Expr, SymbolExpr},
    statements::Stmt,
};

/// Root of a parsed source.
///
/// A source whose first token is a number parses to a bare expression;
/// everything else parses to a program.
#[derive(Debug, Clone, PartialEq)]
pub enum Ast {
    Program(Program),
    Exp(Expr),
}

impl Ast {
    pub fn as_node(&self) -> Node<'_> {
        match self {
            Ast::Program(program) => Node::Program(program),
            Ast::Exp(expr) => Node::Expr(expr),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

/// Label-less grouping node.
///
/// `items` is `None` for a group that does not exist at all (an `if`
/// without `else`); such a group is shown as an empty leaf.
#[derive(Debug, Clone)]
pub struct AstList<'a> {
    pub items: Option<Vec<Node<'a>>>,
}

impl<'a> AstList<'a> {
    pub fn of_statements(statements: &'a [Stmt]) -> Self {
        AstList {
            items: Some(statements.iter().map(Node::Stmt).collect()),
        }
    }

    pub fn of_symbols(symbols: &'a [SymbolExpr]) -> Self {
        AstList {
            items: Some(symbols.iter().map(Node::Symbol).collect()),
        }
    }

    pub fn absent() -> Self {
        AstList { items: None }
    }
}

/// Borrowed view of any displayable AST element.
#[derive(Debug, Clone)]
pub enum Node<'a> {
    Program(&'a Program),
    Stmt(&'a Stmt),
    Expr(&'a Expr),
    Symbol(&'a SymbolExpr),
    List(AstList<'a>),
}

impl<'a> Node<'a> {
    /// Returns the node's label and its children, or `None` for a leaf.
    pub fn get_display_info(&self) -> (String, Option<Vec<Node<'a>>>) {
        match *self {
            Node::Program(program) => (
                String::from("Program"),
                Some(program.statements.iter().map(Node::Stmt).collect()),
            ),
            Node::Stmt(stmt) => stmt_display_info(stmt),
            Node::Expr(expr) => expr_display_info(expr),
            Node::Symbol(symbol) => (symbol.value.clone(), None),
            Node::List(ref list) => (String::new(), list.items.clone()),
        }
    }
}

fn stmt_display_info(stmt: &Stmt) -> (String, Option<Vec<Node<'_>>>) {
    let (label, children) = match stmt {
        Stmt::Assign(assign) => (
            "Let",
            vec![Node::Expr(&assign.target), Node::Expr(&assign.value)],
        ),
        Stmt::Print(print) => ("Print", vec![Node::Expr(&print.expression)]),
        Stmt::Return(ret) => ("Return", vec![Node::Expr(&ret.value)]),
        Stmt::Function(function) => (
            "Function",
            vec![
                Node::Symbol(&function.identifier),
                Node::List(AstList::of_symbols(&function.parameters)),
                Node::List(AstList::of_statements(&function.body)),
            ],
        ),
        Stmt::If(if_stmt) => (
            "If",
            vec![
                Node::Expr(&if_stmt.condition),
                Node::List(AstList::of_statements(&if_stmt.then_body)),
                Node::List(match &if_stmt.else_body {
                    Some(else_body) => AstList::of_statements(else_body),
                    None => AstList::absent(),
                }),
            ],
        ),
        Stmt::While(while_stmt) => (
            "While",
            vec![
                Node::Expr(&while_stmt.condition),
                Node::List(AstList::of_statements(&while_stmt.body)),
            ],
        ),
        Stmt::DoWhile(do_while) => (
            "DoWhile",
            vec![
                Node::Expr(&do_while.condition),
                Node::List(AstList::of_statements(&do_while.body)),
            ],
        ),
        Stmt::For(for_stmt) => (
            "For",
            vec![
                Node::List(AstList::of_statements(&for_stmt.init)),
                Node::Expr(&for_stmt.condition),
                Node::List(AstList::of_statements(&for_stmt.update)),
                Node::List(AstList::of_statements(&for_stmt.body)),
            ],
        ),
        Stmt::Expression(expression) => ("Expression", vec![Node::Expr(&expression.expression)]),
    };

    (String::from(label), Some(children))
}

fn expr_display_info(expr: &Expr) -> (String, Option<Vec<Node<'_>>>) {
    match expr {
        Expr::Binary(binary) => (
            binary.operator.label().to_string(),
            Some(vec![Node::Expr(&*binary.left), Node::Expr(&*binary.right)]),
        ),
        Expr::Number(number) => (format_number(number.value), None),
        Expr::Symbol(symbol) => (symbol.value.clone(), None),
        // Trailing space keeps the name apart from the opening bracket.
        Expr::Call(call) => (
            format!("{} ", call.callee),
            Some(call.arguments.iter().map(Node::Expr).collect()),
        ),
    }
}
