use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize tracing for a startup component.
///
/// Logs roll daily under `$NEEDLE_LOG_DIR` (default `~/.needle/logs`), one
/// file prefix per component. The returned guard flushes the non-blocking
/// writer; keep it alive for the process lifetime.
pub fn init_logging(component: &str, to_stderr: bool) -> WorkerGuard {
    let log_dir = std::env::var_os("NEEDLE_LOG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".needle/logs")
        });
    let _ = std::fs::create_dir_all(&log_dir);

    let file_appender = tracing_appender::rolling::daily(&log_dir, component);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = fmt::layer().with_writer(writer).with_ansi(false);

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);
    if to_stderr {
        registry
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .init();
    } else {
        registry.init();
    }

    guard
}
