//! Optional human-readable logging initializer for binaries and tests.
//!
//! Synthesis results never depend on this: `RUST_LOG` governs only what
//! gets printed, not what gets computed.

use tracing_subscriber::EnvFilter;

/// Install a `tracing-subscriber` fmt layer filtered by `RUST_LOG`
/// (defaulting to `info` when unset). Safe to call more than once; later
/// calls are no-ops.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(
            "agent_synth=info"
                .parse()
                .expect("static directive must parse"),
        ))
        .with_ansi(false)
        .try_init();
}
