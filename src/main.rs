use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use langur::{
    interpreter::value::{
        core::Value,
        environment::{Env, Environment},
    },
    run_program,
};

/// langur is a small, dynamically typed scripting language with
/// first-class closures.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells langur to treat CONTENTS as a path to a script file instead
    /// of inline source.
    #[arg(short, long)]
    file: bool,

    /// Inline source text, or a script path when --file is given.
    /// Omitted entirely, langur starts an interactive session.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        repl();
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    run(&script, &Environment::new());
}

/// Runs one source text and reports the outcome.
///
/// Parse errors go to stderr, one per line. A `null` result stays
/// silent, so scripts that end in `puts(...)` do not print a stray
/// `null`.
fn run(source: &str, env: &Env) {
    match run_program(source, env) {
        Ok(Value::Null) => {},
        Ok(value) => println!("{value}"),
        Err(errors) => {
            for error in errors {
                eprintln!("{error}");
            }
        },
    }
}

/// A line-oriented interactive session sharing one environment, so
/// bindings survive from line to line.
fn repl() {
    println!("This is the langur programming language.");
    println!("Feel free to type in commands.");

    let env = Environment::new();
    let stdin = io::stdin();

    loop {
        print!(">> ");
        if io::stdout().flush().is_err() {
            return;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => return,
            Ok(_) => run(&line, &env),
        }
    }
}
