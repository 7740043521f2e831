//! Ballerina lexer CLI.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use balc::commands::{check_files, document_files, lex_files};
use balc::options::Options;
use balc::{init_tracing, CommandError};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return ExitCode::FAILURE;
    }

    let command = args[1].as_str();
    if matches!(command, "help" | "--help" | "-h") {
        print_usage();
        return ExitCode::SUCCESS;
    }

    match run(command, &args[2..]) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            if matches!(e, CommandError::NoInput | CommandError::UnknownOption(_)) {
                eprintln!("Usage: balc {command} <file.bal>... [options]");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(command: &str, args: &[String]) -> Result<ExitCode, CommandError> {
    match command {
        "lex" => {
            let options = Options::parse(args)?;
            lex_files(&options, io::stdout().lock())?;
            Ok(ExitCode::SUCCESS)
        }
        "check" => {
            let options = Options::parse(args)?;
            let color = io::stderr().is_terminal();
            let errors = check_files(&options, color, io::stderr().lock())?;
            Ok(if errors == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        "doc" => {
            let options = Options::parse(args)?;
            document_files(&options, io::stdout().lock())?;
            Ok(ExitCode::SUCCESS)
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            print_usage();
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_usage() {
    eprintln!("Usage: balc <command> <file.bal>... [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  lex      Print the token stream of each file");
    eprintln!("  check    Report lexical errors");
    eprintln!("  doc      Print documented functions as JSON");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --halt-on-error     Stop lexing a file at its first error");
    eprintln!("  --max-nesting=<n>   Limit template and literal nesting (default: 256)");
    eprintln!("  --skip-trivia       lex: omit whitespace, newlines and comments");
    eprintln!("  --json              lex: print tokens as JSON");
    eprintln!();
    eprintln!("Set RUST_LOG=bal_lexer=trace to follow mode transitions.");
}
