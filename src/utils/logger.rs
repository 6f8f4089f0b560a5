use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "activity_roster=info";
const VERBOSE_DIRECTIVE: &str = "activity_roster=debug,info";

/// `RUST_LOG` 優先，未設定時使用預設指令
fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

fn directive_for(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_DIRECTIVE
    } else {
        DEFAULT_DIRECTIVE
    }
}

/// Human-readable logs for interactive runs.
pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(directive_for(verbose)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// One JSON object per event, including the event's structured fields
/// (`activity`, `participant`, `enrolled`, ...).
pub fn init_json_logger() {
    tracing_subscriber::registry()
        .with(env_filter(DEFAULT_DIRECTIVE))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .json()
                .with_current_span(false),
        )
        .init();
}
