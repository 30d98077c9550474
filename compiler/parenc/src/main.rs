//! Paren interpreter CLI.

use paren_diagnostic::ErrorSink;
use paren_eval::stdout_handler;
use paren_ir::SourceFile;
use parenc::cli::{parse_args, Command, Input, USAGE};

fn main() {
    parenc::init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();

    let (options, input) = match parse_args(&args) {
        Ok(Command::Run { options, input }) => (options, input),
        Ok(Command::Help) => {
            println!("{USAGE}");
            return;
        }
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    };

    let file = match input {
        Input::File(path) => match std::fs::read_to_string(&path) {
            Ok(text) => SourceFile::new(path, text),
            Err(err) => {
                eprintln!("error: could not read `{path}`: {err}");
                std::process::exit(1);
            }
        },
        Input::Inline(source) => SourceFile::anonymous(source),
    };

    let sink = ErrorSink::Exit(options.color);
    match parenc::execute(file, &options, &sink, stdout_handler()) {
        Ok(value) => println!("Result: {value}"),
        // Already reported by the sink.
        Err(_) => std::process::exit(1),
    }
}
