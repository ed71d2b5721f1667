//! Log output for the `quill` binary.
//!
//! Nothing is installed unless `RUST_LOG` is set, so normal runs stay quiet.
//! `RUST_LOG=quill_lexer=trace` shows every token, `RUST_LOG=debug` shows
//! each phase. With `QUILL_LOG_TREE=1` spans are drawn as an indented tree.

use std::sync::Once;

/// Switches to hierarchical log output when set to `1` or `true`.
pub const LOG_TREE_ENV: &str = "QUILL_LOG_TREE";

static TRACING_INIT: Once = Once::new();

/// Initialize tracing. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        let registry = tracing_subscriber::registry().with(filter);

        if tree_requested(std::env::var(LOG_TREE_ENV).ok().as_deref()) {
            let tree = tracing_tree::HierarchicalLayer::new(2)
                .with_targets(true)
                .with_bracketed_fields(true);
            let _ = registry.with(tree).try_init();
        } else {
            let _ = registry
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .try_init();
        }
    });
}

fn tree_requested(value: Option<&str>) -> bool {
    matches!(value.map(str::trim), Some("1" | "true" | "yes"))
}
