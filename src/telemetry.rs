//! Opt-in `tracing` subscriber setup.
//!
//! Events emitted by `PolygonChartLayout`:
//! - `debug` "resolved polygon frame" with arity, ring count, radius and center;
//! - `warn` when attribute values outside `[0, 1]` are clamped (`clamped` count);
//! - `trace` "built chart layers" with the primitive total.
//!
//! The default filter is `warn`, so only clamping is reported unless
//! `RUST_LOG` asks for more.

/// Installs a compact subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Returns `false` without the `telemetry` feature or when the host already
/// set a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
