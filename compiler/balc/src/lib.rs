//! Command-line driver for the Ballerina lexer.
//!
//! # Tracing
//!
//! Set `RUST_LOG` to see the lexer's mode transitions and errors:
//! - `RUST_LOG=bal_lexer=debug` - one event per lexical error
//! - `RUST_LOG=bal_lexer=trace` - mode pushes and pops, soft keywords

pub mod commands;
pub mod diagnostic;
mod error;
pub mod options;

pub use error::CommandError;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber. Does nothing unless `RUST_LOG` is set;
/// safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_indent_lines(true),
                )
                .init();
        }
    });
}
