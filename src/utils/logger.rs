use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output shape of the log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable single lines for local CLI runs.
    Compact,
    /// One JSON object per line for CloudWatch. Lambda stamps the time itself.
    Json,
}

/// Directive used when `RUST_LOG` is unset. reqwest and hyper stay at `warn`
/// so request internals (and the `Authorization` header with them) are not
/// traced even under `--verbose`.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "payment_intent_fn=debug,reqwest=warn,hyper=warn,info"
    } else {
        "payment_intent_fn=info,warn"
    }
}

pub fn init_logger(format: LogFormat, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Compact => registry.with(layer.compact()).init(),
        LogFormat::Json => registry.with(layer.without_time().json()).init(),
    }
}

pub fn init_cli_logger(verbose: bool) {
    init_logger(LogFormat::Compact, verbose);
}

pub fn init_lambda_logger() {
    init_logger(LogFormat::Json, false);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_parse() {
        for verbose in [false, true] {
            assert!(EnvFilter::try_new(default_directive(verbose)).is_ok());
        }
    }

    #[test]
    fn test_http_internals_stay_quiet_when_verbose() {
        let directive = default_directive(true);
        assert!(directive.contains("payment_intent_fn=debug"));
        assert!(directive.contains("reqwest=warn"));
        assert!(directive.contains("hyper=warn"));
    }
}
