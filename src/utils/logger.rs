use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Fallback directive for the `--verbose` flag.
pub fn default_directive(verbose: bool) -> String {
    if verbose {
        "ising_model=debug,info".to_string()
    } else {
        "ising_model=info".to_string()
    }
}

/// Fallback directive for an explicit level such as `warn`.
pub fn level_directive(level: &str) -> String {
    format!("ising_model={}", level.trim().to_ascii_lowercase())
}

// RUST_LOG wins over the fallback.
fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

pub fn init_cli_logger(fallback: &str) {
    tracing_subscriber::registry()
        .with(env_filter(fallback))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// JSON lines on stderr, for runs whose output is collected by other tools.
pub fn init_json_logger(fallback: &str) {
    tracing_subscriber::registry()
        .with(env_filter(fallback))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_directive_is_a_valid_filter() {
        assert_eq!(level_directive(" WARN "), "ising_model=warn");
        for level in LOG_LEVELS {
            assert!(EnvFilter::try_new(level_directive(level)).is_ok());
        }
    }

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "ising_model=info");
        assert!(default_directive(true).starts_with("ising_model=debug"));
    }
}
