pub mod build_info;

use std::{env, path::PathBuf, sync::Once};

use tracing_subscriber::EnvFilter;

const DEFAULT_DIR_NAME: &str = ".expense_tracker";
const DEFAULT_LOG_DIRECTIVE: &str = "expense_tracker=info";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
///
/// `RUST_LOG` replaces the default `expense_tracker=info` filter when set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let rust_log = env::var("RUST_LOG").ok();
        let _ = tracing_subscriber::fmt()
            .with_env_filter(log_filter(rust_log.as_deref()))
            .with_writer(std::io::stderr)
            .try_init();
    });
}

fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    match rust_log {
        Some(directives) if !directives.trim().is_empty() => EnvFilter::new(directives),
        _ => EnvFilter::new(DEFAULT_LOG_DIRECTIVE),
    }
}

/// Returns the application directory, defaulting to `~/.expense_tracker`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("EXPENSE_TRACKER_HOME") {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(filter: EnvFilter) -> String {
        filter.to_string().to_lowercase()
    }

    #[test]
    fn rust_log_replaces_default_filter() {
        let filter = rendered(log_filter(Some("expense_tracker=debug")));
        assert!(filter.contains("expense_tracker=debug"), "{filter}");
        assert!(!filter.contains("expense_tracker=info"), "{filter}");
    }

    #[test]
    fn unset_rust_log_uses_default_filter() {
        assert_eq!(rendered(log_filter(None)), DEFAULT_LOG_DIRECTIVE);
        assert_eq!(rendered(log_filter(Some("  "))), DEFAULT_LOG_DIRECTIVE);
    }
}
