//! Structured logging setup for front-ends embedding this engine. Mirrors
//! the teacher's `main.rs`: `LOG_FORMAT=json` for machine consumption
//! (Kubernetes, log aggregators), human-readable `stderr` output otherwise.
//! [`crate::engine::is_prime`]'s `verbose` flag emits `tracing::info!` spans
//! per round rather than raw `printf`-style output; this function is what
//! wires those spans to an actual subscriber.

/// Initializes a global `tracing` subscriber from the `LOG_FORMAT` env var.
/// Intended to be called once, near the start of a binary that embeds this
/// crate — the core itself never initializes a subscriber on its own.
#[cfg(feature = "logging-init")]
pub fn init_tracing() {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt().json().with_target(false).init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }
}
