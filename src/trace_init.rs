//! JSON trace log for diagnosing key handling in the field.
//!
//! Compiled to a no-op unless the `trace` feature is enabled. `RUST_LOG`
//! overrides the default filter.

#[cfg(feature = "trace")]
mod enabled {
    use std::path::Path;
    use std::sync::Once;

    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    const LOG_FILE: &str = "hangul-trace.jsonl";
    const DEFAULT_FILTER: &str = "hangul_engine=debug,hangul_core=debug,hangul_session=debug";

    static INIT: Once = Once::new();

    pub fn init_tracing(log_dir: &Path) {
        INIT.call_once(|| {
            let appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            // The input method never exits cleanly; keep the worker alive.
            std::mem::forget(guard);

            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
            tracing_subscriber::fmt()
                .json()
                .with_writer(writer)
                .with_target(true)
                .with_span_events(FmtSpan::CLOSE)
                .with_env_filter(filter)
                .init();
        });
    }
}

#[cfg(feature = "trace")]
pub use enabled::init_tracing;

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) {}
