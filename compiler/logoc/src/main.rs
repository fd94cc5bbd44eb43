//! Logo interpreter CLI.
//!
//! `logo [options] [FILE...]` runs each script with a fresh interpreter;
//! without files it starts the REPL.

use std::io;
use std::path::Path;
use std::process::ExitCode;

use logoc::config::{Config, KEYWORDS_VAR, MAX_STEP_VAR};
use logoc::print_handler::stdout_handler;
use logoc::repl::run_repl;
use logoc::{init_tracing, new_session, run_file};

fn main() -> ExitCode {
    init_tracing();

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut files = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "-h" || arg == "--help" {
            print_usage();
            return ExitCode::SUCCESS;
        }
        match config.apply_arg(&arg) {
            Ok(true) => {}
            Ok(false) if arg.starts_with('-') => {
                eprintln!("error: unknown option `{arg}`");
                print_usage();
                return ExitCode::FAILURE;
            }
            Ok(false) => files.push(arg),
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    if files.is_empty() {
        let mut session = new_session(stdout_handler(), &config);
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        if let Err(err) = run_repl(stdin.lock(), &mut stdout, &mut session) {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    }

    let mut failed = false;
    for file in &files {
        match run_file(Path::new(file), stdout_handler(), &config) {
            Ok(run) => {
                if !run.value.is_unit() {
                    println!(" => {}", run.value);
                }
                if run.quit {
                    break;
                }
            }
            Err(err) => {
                eprintln!("error: {file}: {err}");
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn print_usage() {
    eprintln!("Usage: logo [options] [FILE...]");
    eprintln!();
    eprintln!("Runs each FILE, or starts an interactive session when none is given.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --keywords=<set>   Keyword language: fr (default) or en");
    eprintln!("  --max-step=<n>     Largest turtle step or angle (default 1000)");
    eprintln!("  -h, --help         Show this message");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {KEYWORDS_VAR}, {MAX_STEP_VAR}   Defaults for the options above");
    eprintln!("  RUST_LOG                        Enable tracing output on stderr");
}
