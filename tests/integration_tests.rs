//! Integration tests for the whole pipeline.
//!
//! These tests verify that source text goes through tokenization, parsing,
//! display and evaluation with the expected results, and that one
//! interpreter keeps its state across several programs.

use mylang::{
    ast::display::display,
    interpreter::interpreter::Interpreter,
    lexer::{lexer::tokenize, tokens::display_tokens},
    parse_source, run_source,
};

const FUNCTION_PROGRAM: &str = "function A(b,c){return b+c;}print A(1,2);";
const IF_PROGRAM: &str =
    "let a=1;function A(b,c){return b+c;}if(a!=1){print A(2,3);}else{print A(4,5);}";
const FOR_PROGRAM: &str = "let b=0; for(let a=0;a>=5;let a=a+1;){let b=b+1;}print b;";
const DO_WHILE_PROGRAM: &str = "let a=0; do{let a=a+1;}while(a<=5);print a;";
const WHILE_PROGRAM: &str = "let a=0; while(a>=5){let a=a+1;} print a;";

fn fib_program(n: u32) -> String {
    format!(
        "function fib(n) {{ if (n<=2) {{return 1;}}else{{return fib(n-1)+fib(n-2);}} }} print fib({});",
        n
    )
}

fn run(source: &str) -> Vec<String> {
    let mut interpreter = Interpreter::new();
    let mut output = Vec::new();
    run_source(source, &mut interpreter, &mut output).unwrap();
    output
}

#[test]
fn test_tokenize_table() {
    let cases = [
        ("1+2-3*4/5", "1 + 2 - 3 * 4 / 5 [EOF]"),
        ("a+b-c*d/e", "a + b - c * d / e [EOF]"),
        ("-1+-2--3*-4/-5", "-1 + -2 - -3 * -4 / -5 [EOF]"),
        ("1   + /*6*5/4-8*/  2-3//5+3", "1 + 2 - 3 [EOF]"),
        (
            "1=1>-1<1==1>=1<=1!=-1",
            "1 = 1 > -1 < 1 == 1 >= 1 <= 1 != -1 [EOF]",
        ),
        (
            IF_PROGRAM,
            "let a = 1 ; function A ( b , c ) { return b + c ; } if ( a != 1 ) { print A ( 2 , 3 ) ; } else { print A ( 4 , 5 ) ; } [EOF]",
        ),
    ];

    for (source, expected) in cases {
        assert_eq!(display_tokens(&tokenize(source)), expected, "source: {}", source);
    }
}

#[test]
fn test_parse_table() {
    let cases = [
        ("1+2-3*4/5", "Sub( Add( 1 2 ) Divide( Multiply( 3 4 ) 5 ) )"),
        (
            "a+b-c*d/e",
            "Program( Expression( Sub( Add( a b ) Divide( Multiply( c d ) e ) ) ) )",
        ),
        (
            "-1+-2--3*-4/-5",
            "Sub( Add( -1 -2 ) Divide( Multiply( -3 -4 ) -5 ) )",
        ),
        ("1   + /*6*5/4-8*/  2-3//5+3", "Sub( Add( 1 2 ) 3 )"),
        (
            FUNCTION_PROGRAM,
            "Program( Function( A ( b c ) ( Return( Add( b c ) ) ) ) Print( A ( 1 2 ) ) )",
        ),
        (
            IF_PROGRAM,
            "Program( Let( a 1 ) Function( A ( b c ) ( Return( Add( b c ) ) ) ) If( unEqual( a 1 ) ( Print( A ( 2 3 ) ) ) ( Print( A ( 4 5 ) ) ) ) )",
        ),
    ];

    for (source, expected) in cases {
        let ast = parse_source(source).unwrap();
        assert_eq!(display(&ast, false), expected, "source: {}", source);
    }
}

#[test]
fn test_run_table() {
    let cases = [
        ("1+2-3*4/5", "0.5999999"),
        ("-1+-2--3*-4/-5", "-0.5999999"),
        ("1   + /*6*5/4-8*/  2-3//5+3", "0"),
        (FUNCTION_PROGRAM, "3"),
        (IF_PROGRAM, "9"),
        (FOR_PROGRAM, "5"),
        (DO_WHILE_PROGRAM, "1"),
        (WHILE_PROGRAM, "5"),
    ];

    for (source, expected) in cases {
        assert_eq!(run(source), vec![expected], "source: {}", source);
    }
}

#[test]
fn test_run_fibonacci() {
    assert_eq!(run(&fib_program(7)), vec!["13"]);
    assert_eq!(run(&fib_program(25)), vec!["75025"]);
}

#[test]
fn test_run_nested_recursion() {
    let source = "function s(n){if(n<=0){return 0;}else{return s(n-1)+1;}} print s(100);";

    assert_eq!(run(source), vec!["100"]);
}

#[test]
fn test_display_is_pure() {
    let ast = parse_source(IF_PROGRAM).unwrap();

    assert_eq!(display(&ast, false), display(&ast, false));
    assert_eq!(display(&ast, true), display(&ast, true));
}

#[test]
fn test_one_parameter_call_redirects_later_reads() {
    let mut interpreter = Interpreter::new();
    let mut output = Vec::new();

    run_source("let x=10; print x;", &mut interpreter, &mut output).unwrap();
    run_source("function id(n){return n;} print id(42);", &mut interpreter, &mut output).unwrap();
    run_source("print x;", &mut interpreter, &mut output).unwrap();

    assert_eq!(output, vec!["10", "42", "42"]);
}

#[test]
fn test_state_survives_a_failed_run() {
    let mut interpreter = Interpreter::new();
    let mut output = Vec::new();

    run_source("let a=7;", &mut interpreter, &mut output).unwrap();
    let error = run_source("print a+b;", &mut interpreter, &mut output).unwrap_err();
    run_source("print a;", &mut interpreter, &mut output).unwrap();

    assert_eq!(error.get_error_name(), "VariableNotDeclared");
    assert_eq!(output, vec!["7"]);
}

#[test]
fn test_parse_fault_stops_before_running() {
    let mut interpreter = Interpreter::new();
    let mut output = Vec::new();

    let error = run_source("print 1; print 2", &mut interpreter, &mut output).unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedEndOfInput");
    assert!(output.is_empty());
}
