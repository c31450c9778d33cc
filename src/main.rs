use std::fs;

use clap::Parser;
use numeval::evaluate;
use rustyline::{error::ReadlineError, history::FileHistory};

/// numeval is an easy to use arithmetic expression evaluator with the usual
/// operator precedence, parentheses, and exponentiation.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells numeval to look at a file instead of an expression.
    #[arg(short, long)]
    file: bool,

    /// The expression to evaluate. When omitted, an interactive session
    /// starts.
    expression: Option<String>,
}

#[derive(Debug, PartialEq)]
enum IterStatus {
    Continue,
    Break,
}

struct Repl {
    prompt: String,
    editor: rustyline::Editor<(), FileHistory>,
}

impl Repl {
    fn new() -> rustyline::Result<Self> {
        Ok(Self { prompt: "> ".into(),
                  editor: rustyline::DefaultEditor::new()?, })
    }

    fn iter(&mut self) -> rustyline::Result<IterStatus> {
        match self.editor.readline(&self.prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    return Ok(IterStatus::Continue);
                }
                if line == "exit" {
                    return Ok(IterStatus::Break);
                }

                let _ = self.editor.add_history_entry(line);
                match evaluate(line) {
                    Ok(value) => println!("{value}"),
                    // A bad line never ends the session.
                    Err(e) => println!("Error: {e}"),
                }
                Ok(IterStatus::Continue)
            },
            // EOF and Ctrl-C both end the session cleanly.
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(IterStatus::Break),
            Err(err) => Err(err),
        }
    }

    fn run(&mut self) -> rustyline::Result<()> {
        println!("Enter an expression, or 'exit' to quit.");
        while self.iter()? == IterStatus::Continue {}
        Ok(())
    }
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.expression else {
        if let Err(e) = Repl::new().and_then(|mut repl| repl.run()) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
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

    match evaluate(&script) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        },
    }
}
