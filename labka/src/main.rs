use std::io::BufRead;

use clap::Parser;
use labka::Interpreter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Evaluates a single-line arithmetic expression.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Keep reading and evaluating lines from stdin until EOF.
    #[arg(short, long)]
    interactive: bool,

    /// Print the parsed tree instead of evaluating it.
    #[arg(long)]
    ast: bool,

    /// Expression to evaluate. Read from stdin when omitted.
    #[arg(allow_hyphen_values = true, conflicts_with = "interactive")]
    expression: Option<String>,
}

fn main() {
    // logs go to stderr so stdout only carries results
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    let labka = Labka {
        interpreter: Interpreter::new(),
        print_ast: args.ast,
    };

    match args.expression {
        Some(expression) => labka.run(&expression),
        None if args.interactive => labka.run_prompt(),
        None => labka.run_line(),
    }
}

struct Labka {
    interpreter: Interpreter,
    print_ast: bool,
}

impl Labka {
    fn run_line(&self) {
        let mut line = String::new();
        match std::io::stdin().lock().read_line(&mut line) {
            Ok(_) => self.run(&line),
            Err(err) => eprintln!("Error: {err}"),
        }
    }

    fn run_prompt(&self) {
        let mut reader = std::io::stdin().lock();
        loop {
            let mut line = String::new();
            match reader.read_line(&mut line) {
                Ok(0) => break,
                Ok(_) => self.run(&line),
                Err(err) => {
                    eprintln!("Error: {err}");
                    break;
                }
            }
        }
    }

    fn run(&self, source: &str) {
        if self.print_ast {
            match self.interpreter.parse(source) {
                Ok(expr) => println!("{expr}"),
                Err(err) => eprintln!("Error: {err}"),
            }
            return;
        }

        match self.interpreter.evaluate(source) {
            Ok(value) => println!("{value}"),
            Err(err) => eprintln!("Error: {err}"),
        }
    }
}
