//! Tracing subscriber setup for binaries and demos.
//!
//! The library itself only emits `tracing` events; installing a subscriber
//! is the host application's job. [`init`] wires up a sensible default fmt
//! subscriber honoring `RUST_LOG`, for demos and quick integrations.

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a global fmt subscriber with env-filter support.
///
/// Filter directives come from `RUST_LOG` when set, otherwise default to
/// `info,flowdoc=debug`. Calling this more than once is harmless; later
/// calls are ignored.
///
/// # Examples
///
/// ```
/// flowdoc::telemetry::init();
/// tracing::info!("subscriber installed");
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,flowdoc=debug"));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_span_events(FmtSpan::NONE))
        .with(filter)
        .try_init();
}
