use std::{
    io::{self, BufRead, Write},
    process,
};

use clap::{CommandFactory, Parser as ClapParser};
use tracing::Level;

use mylang::{
    ast::display::display,
    errors::errors::{Error, ErrorTip},
    interpreter::{interpreter::Interpreter, output::StdoutOutput},
    lexer::{lexer::tokenize, tokens::display_tokens},
    parse_source, run_source,
};

#[derive(ClapParser)]
#[command(version)]
#[command(about = "Tokenizer, parser and interpreter for a small scripting language")]
struct Cli {
    /// Program text; several words are joined with spaces
    program: Vec<String>,

    /// Print the tokens and exit
    #[arg(short, long)]
    tokenize: bool,

    /// Print the syntax tree and exit
    #[arg(short, long)]
    parse: bool,

    /// Indent the syntax tree printed by --parse
    #[arg(short = 'P', long)]
    pretty: bool,

    /// Read further programs from stdin after the first one
    #[arg(short = 'e', long)]
    repl: bool,

    /// Trace tokenizer, parser and interpreter progress
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(io::stderr)
        .with_max_level(if cli.debug { Level::TRACE } else { Level::WARN })
        .init();

    let source = cli.program.join(" ");

    if source.is_empty() && !cli.repl {
        if let Err(error) = Cli::command().print_help() {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
        return;
    }

    if cli.tokenize {
        println!("{}", display_tokens(&tokenize(&source)));
        return;
    }

    if cli.parse {
        match parse_source(&source) {
            Ok(ast) => println!("{}", display(&ast, cli.pretty)),
            Err(error) => fail(error),
        }
        return;
    }

    let mut interpreter = Interpreter::new();
    let mut output = StdoutOutput;

    if !source.is_empty() {
        if let Err(error) = run_source(&source, &mut interpreter, &mut output) {
            if cli.repl {
                display_error(&error);
            } else {
                fail(error);
            }
        }
    }

    if cli.repl {
        if let Err(error) = run_repl(&mut interpreter, &mut output) {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}

fn run_repl(interpreter: &mut Interpreter, output: &mut StdoutOutput) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let mut input = String::new();

    loop {
        input.clear();
        print!("> ");
        stdout.flush()?;

        if stdin.lock().read_line(&mut input)? == 0 {
            return Ok(());
        }

        let trimmed_input = input.trim();

        if trimmed_input == "exit" || trimmed_input == "exit;" {
            return Ok(());
        }

        if trimmed_input.is_empty() {
            continue;
        }

        if let Err(error) = run_source(trimmed_input, interpreter, output) {
            display_error(&error);
        }
    }
}

fn display_error(error: &Error) {
    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
}

fn fail(error: Error) -> ! {
    display_error(&error);
    process::exit(1);
}
