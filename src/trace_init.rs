#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

/// Keeps the background log writer alive; drop it last to flush.
#[must_use]
pub struct TraceGuard {
    #[cfg(feature = "trace")]
    _guard: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Install the global subscriber. With `log_dir`, events go to
/// `beyging-trace.jsonl` there as JSON lines; otherwise to stderr.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: Option<&Path>) -> TraceGuard {
    let mut guard = None;
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::new("beyging=info,beyging_core=info")
        });
        match log_dir {
            Some(dir) => {
                let file_appender = tracing_appender::rolling::never(dir, "beyging-trace.jsonl");
                let (non_blocking, worker) = tracing_appender::non_blocking(file_appender);
                guard = Some(worker);
                tracing_subscriber::fmt()
                    .json()
                    .with_writer(non_blocking)
                    .with_target(true)
                    .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
                    .with_env_filter(filter)
                    .init();
            }
            None => {
                tracing_subscriber::fmt()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_env_filter(filter)
                    .init();
            }
        }
    });
    TraceGuard { _guard: guard }
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: Option<&std::path::Path>) -> TraceGuard {
    TraceGuard {}
}
