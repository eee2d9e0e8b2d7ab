use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Single-line human readable output for terminals.
    Compact,
    /// One JSON object per line for log collectors.
    Json,
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "receipt_points=debug,info"
    } else {
        "receipt_points=info"
    }
}

/// `RUST_LOG` wins over the verbosity flag when it is set.
fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

pub fn init_logger(format: LogFormat, verbose: bool) {
    let layer = tracing_subscriber::fmt::layer()
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let registry = tracing_subscriber::registry().with(env_filter(verbose));
    match format {
        LogFormat::Compact => registry.with(layer.with_target(false).compact()).init(),
        LogFormat::Json => registry.with(layer.with_target(true).json()).init(),
    }
}
