//! Unit tests for the interpreter module.
//!
//! Programs are tokenized and parsed with the real front end, then run
//! against a collecting output.

use std::io;

use super::{interpreter::Interpreter, output::Output};
use crate::{
    ast::{
        ast::{Ast, Program},
        expressions::{BinOpType, Expr},
        statements::{AssignStmt, PrintStmt, Stmt},
    },
    errors::errors::ErrorImpl,
    lexer::lexer::tokenize,
    parser::parser::parse,
};

fn run_with(interpreter: &mut Interpreter, source: &str) -> Vec<String> {
    let ast = parse(tokenize(source)).unwrap();
    let mut output = Vec::new();
    interpreter.run(&ast, &mut output).unwrap();
    output
}

fn run(source: &str) -> Vec<String> {
    run_with(&mut Interpreter::new(), source)
}

fn run_err(source: &str) -> ErrorImpl {
    let ast = parse(tokenize(source)).unwrap();
    let mut output = Vec::new();
    Interpreter::new()
        .run(&ast, &mut output)
        .unwrap_err()
        .get_internal_error()
        .clone()
}

#[test]
fn test_bare_expression_emits_value() {
    assert_eq!(run("1+2-3*4/5"), vec!["0.5999999"]);
    assert_eq!(run("-1+-2--3*-4/-5"), vec!["-0.5999999"]);
    assert_eq!(run("1   + /*6*5/4-8*/  2-3//5+3"), vec!["0"]);
}

#[test]
fn test_print_and_expression_statements_emit() {
    assert_eq!(run("let a=4; print a*2; a+1"), vec!["8", "5"]);
}

#[test]
fn test_comparisons_yield_one_or_zero() {
    assert_eq!(
        run("print 2>1; print 2<1; print 2>=2; print 3<=2; print 4==4; print 4!=4;"),
        vec!["1", "0", "1", "0", "1", "0"]
    );
}

#[test]
fn test_assignment_last_write_wins() {
    assert_eq!(run("let a=1; let a=a+10; print a;"), vec!["11"]);
}

#[test]
fn test_if_else() {
    assert_eq!(run("let a=2; if(a==2){print 1;}else{print 0;}"), vec!["1"]);
    assert_eq!(run("let a=3; if(a==2){print 1;}else{print 0;}"), vec!["0"]);
    assert!(run("let a=3; if(a==2){print 1;}").is_empty());
}

#[test]
fn test_else_if_chain() {
    let source = "let a=2; if(a==1){print 1;}else if(a==2){print 2;}else{print 3;}";

    assert_eq!(run(source), vec!["2"]);
}

#[test]
fn test_while_guard_is_inverted() {
    assert_eq!(run("let a=0; while(a>=5){let a=a+1;} print a;"), vec!["5"]);
    // A guard that starts nonzero never runs the body
    assert_eq!(run("let a=0; while(a<5){let a=a+1;} print a;"), vec!["0"]);
}

#[test]
fn test_do_while_runs_body_once() {
    assert_eq!(run("let a=0; do{let a=a+1;}while(a<=5);print a;"), vec!["1"]);
    assert_eq!(run("let a=0; do{let a=a+1;}while(a>=3);print a;"), vec!["3"]);
}

#[test]
fn test_for_guard_is_inverted() {
    assert_eq!(
        run("let b=0; for(let a=0;a>=5;let a=a+1;){let b=b+1;}print b;"),
        vec!["5"]
    );
}

#[test]
fn test_function_with_two_parameters() {
    assert_eq!(run("function A(b,c){return b+c;}print A(1,2);"), vec!["3"]);
}

#[test]
fn test_function_parameters_alias_globals() {
    assert_eq!(
        run("let b=100; function A(b,c){return b+c;}print A(1,2); print b;"),
        vec!["3", "1"]
    );
}

#[test]
fn test_recursive_fibonacci() {
    let source =
        "function fib(n) { if (n<=2) {return 1;}else{return fib(n-1)+fib(n-2);} } print fib(7);";

    assert_eq!(run(source), vec!["13"]);
}

#[test]
fn test_recursion_mode_is_sticky() {
    let mut interpreter = Interpreter::new();

    assert_eq!(
        run_with(&mut interpreter, "let x=10; function f(n){return n;} print f(3); print x;"),
        vec!["3", "3"]
    );
    assert!(interpreter.recursion_mode);
    assert_eq!(interpreter.stack, vec![3.0]);
}

#[test]
fn test_return_pops_only_nested_bindings() {
    let mut interpreter = Interpreter::new();

    run_with(&mut interpreter, "function f(n){return n;} print f(1); print f(2);");

    assert_eq!(interpreter.stack, vec![1.0]);
    assert_eq!(interpreter.return_value, 2.0);
}

#[test]
fn test_state_persists_across_runs() {
    let mut interpreter = Interpreter::new();

    run_with(&mut interpreter, "let a=5;");
    run_with(&mut interpreter, "function A(b,c){return b*c;}");

    assert_eq!(run_with(&mut interpreter, "print A(a,3);"), vec!["15"]);
}

#[test]
fn test_undefined_variable() {
    assert_eq!(
        run_err("print a;"),
        ErrorImpl::VariableNotDeclared {
            variable: "a".to_string()
        }
    );
}

#[test]
fn test_undefined_function() {
    assert_eq!(
        run_err("print g(1);"),
        ErrorImpl::FunctionNotDeclared {
            function: "g".to_string()
        }
    );
}

#[test]
fn test_missing_arguments() {
    assert_eq!(
        run_err("function A(b,c){return b+c;}print A(1);"),
        ErrorImpl::MissingArguments {
            expected: 2,
            received: 1
        }
    );
}

#[test]
fn test_division_by_zero() {
    assert_eq!(run_err("let a=0; print 1/a;"), ErrorImpl::DivisionByZero);
}

#[test]
fn test_invalid_assignment_target() {
    let ast = Ast::Program(Program {
        statements: vec![Stmt::Assign(AssignStmt {
            target: Expr::binary(BinOpType::Add, Expr::symbol("a"), Expr::number(1.0)),
            value: Expr::number(2.0),
        })],
    });
    let mut output = Vec::new();

    let error = Interpreter::new().run(&ast, &mut output).unwrap_err();

    assert_eq!(error.get_error_name(), "InvalidAssignmentTarget");
    assert!(error.get_position().is_none());
}

#[test]
fn test_output_before_fault_is_kept() {
    let ast = parse(tokenize("print 1; print b;")).unwrap();
    let mut output = Vec::new();

    assert!(Interpreter::new().run(&ast, &mut output).is_err());
    assert_eq!(output, vec!["1"]);
}

#[test]
fn test_equal_operator_evaluates_to_zero() {
    let ast = Ast::Program(Program {
        statements: vec![Stmt::Print(PrintStmt {
            expression: Expr::binary(BinOpType::Equal, Expr::number(3.0), Expr::number(3.0)),
        })],
    });
    let mut output = Vec::new();

    Interpreter::new().run(&ast, &mut output).unwrap();

    assert_eq!(output, vec!["0"]);
}

struct ClosedOutput;

impl Output for ClosedOutput {
    fn emit(&mut self, _line: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }
}

#[test]
fn test_failed_write_stops_the_run() {
    let mut interpreter = Interpreter::new();
    let ast = parse(tokenize("print 1; let a=2;")).unwrap();

    let error = interpreter.run(&ast, &mut ClosedOutput).unwrap_err();

    assert_eq!(error.get_error_name(), "OutputFailed");
    assert!(interpreter.variables.is_empty());
}
