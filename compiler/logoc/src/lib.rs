//! Logo interpreter host.
//!
//! Wires the evaluator to the outside world: configuration, the host
//! primitives (printing, square root, a dry-run turtle), script execution
//! and the interactive REPL.

pub mod config;
pub mod host;
pub mod print_handler;
pub mod repl;
pub mod turtle;

use std::path::{Path, PathBuf};
use std::sync::Once;

use logo_eval::{Keywords, LogoError, Value};
use thiserror::Error;
use tracing::info;

use crate::config::Config;
use crate::host::Host;
use crate::print_handler::SharedPrintHandler;
use crate::repl::Session;

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber when `RUST_LOG` is set.
///
/// Spans are printed as an indented tree on stderr, so procedure calls
/// nest visually. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(filter)
                .init();
        }
    });
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Logo(#[from] LogoError),
}

/// Outcome of running one script.
#[derive(Debug)]
pub struct ScriptRun {
    pub value: Value,
    /// The script called `q`/`quit`.
    pub quit: bool,
}

/// Evaluate a script file with a fresh interpreter.
#[tracing::instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn run_file(
    path: &Path,
    printer: SharedPrintHandler,
    config: &Config,
) -> Result<ScriptRun, RunError> {
    let source = std::fs::read_to_string(path).map_err(|source| RunError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    run_source(&source, printer, config)
}

/// Evaluate source text with a fresh interpreter.
pub fn run_source(
    source: &str,
    printer: SharedPrintHandler,
    config: &Config,
) -> Result<ScriptRun, RunError> {
    let host = Host::new(printer, config.max_step);
    let interpreter = host.interpreter(Keywords::from(config.keywords));
    let value = interpreter.eval(source)?;
    Ok(ScriptRun {
        value,
        quit: host.quit_requested(),
    })
}

/// A REPL session with the host primitives installed.
pub fn new_session(printer: SharedPrintHandler, config: &Config) -> Session {
    info!(keywords = %config.keywords, max_step = config.max_step, "starting session");
    let host = Host::new(printer, config.max_step);
    let interpreter = host.interpreter(Keywords::from(config.keywords));
    Session::new(host, interpreter)
}
