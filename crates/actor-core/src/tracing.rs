//! # Observability
//!
//! [`setup_tracing`] installs the process-wide `tracing` subscriber.
//!
//! Output is compact and omits module targets: actors tag their events with an
//! `entity_type` field and the restaurant components with `customer`, `ticket` and
//! `batch`, which is enough to follow a request. Levels come from `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run     # lifecycle and fulfillment progress
//! RUST_LOG=debug cargo run    # plus every request payload
//! RUST_LOG=restaurant::fulfillment=debug,info cargo run
//! ```
//!
//! Passwords never show up in payloads; the account types redact them in `Debug`.

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Call once, at the top of `main`.
///
/// Falls back to `info` when `RUST_LOG` is unset or unparsable.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
