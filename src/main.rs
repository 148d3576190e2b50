use std::{fs, process};

use clap::Parser;
use lispwalk::{
    error::Error,
    interpreter::{
        evaluator::core::Context, lexer::lex, parser::program::parse_program, value::core::Value,
    },
};
use log::info;

/// lispwalk evaluates a program written in a small parenthesized expression
/// language and prints the value of its last form.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat CONTENTS as program text instead of a file path.
    #[arg(short, long)]
    eval: bool,

    /// Print every token before evaluating.
    #[arg(short, long)]
    tokens: bool,

    /// Print the parsed program before evaluating.
    #[arg(short, long)]
    ast: bool,

    /// Path of the source file, or the program itself with `--eval`.
    contents: String,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let (source, file_name) = if args.eval {
        (args.contents.clone(), "<eval>".to_string())
    } else {
        let source = fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            process::exit(1);
        });
        (source, args.contents.clone())
    };

    match execute(&source, &args) {
        Ok(Some(value)) => println!("{value}"),
        Ok(None) => println!("nil"),
        Err(e) => {
            eprint!("{}", e.report(&source, &file_name));
            process::exit(1);
        },
    }
}

/// Runs the pipeline stage by stage so the intermediate results can be
/// printed on request.
fn execute(source: &str, args: &Args) -> Result<Option<Value>, Error> {
    let tokens = lex(source)?;
    info!("lexed {} tokens", tokens.len());
    if args.tokens {
        for token in &tokens {
            println!("{token}");
        }
    }

    let program = parse_program(&tokens)?;
    if args.ast {
        println!("{program}");
    }

    Ok(Context::new().eval_program(&program)?)
}
