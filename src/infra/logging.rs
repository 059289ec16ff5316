//! tracing setup. Records go to a file; the terminal belongs to the TUI.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::Subscriber;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Layer};

pub const LOG_ENV: &str = "LETTERCYCLE_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("could not open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not install global subscriber: {0}")]
    Install(String),
}

pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("lettercycle").join("lettercycle.log"))
}

/// Installs the global subscriber writing to `path`.
///
/// `level` comes from the `-v`/`-q` flags and is added on top of the
/// `LETTERCYCLE_LOG` filter.
pub fn setup(path: &Path, level: Option<LevelFilter>) -> Result<(), LoggingError> {
    let filter = build_filter(std::env::var(LOG_ENV).ok().as_deref(), level);
    let subscriber = build_subscriber(path, filter)?;

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| LoggingError::Install(e.to_string()))
}

fn build_filter(env: Option<&str>, level: Option<LevelFilter>) -> EnvFilter {
    let mut filter = env
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE));

    if let Some(level) = level {
        filter = filter.add_directive(level.into());
    }

    filter
}

fn build_subscriber(
    path: &Path,
    filter: EnvFilter,
) -> Result<impl Subscriber + Send + Sync + 'static, LoggingError> {
    let open_error = |source| LoggingError::Open {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(open_error)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(open_error)?;

    Ok(tracing_subscriber::registry::Registry::default().with(
        tracing_subscriber::fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_filter(filter),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    #[rstest]
    #[case(None, None, "warn")]
    #[case(Some("lettercycle=notalevel"), None, "warn")]
    #[case(Some("lettercycle_app=trace"), None, "lettercycle_app=trace")]
    fn filter_from_env(
        #[case] env: Option<&str>,
        #[case] level: Option<LevelFilter>,
        #[case] expected: &str,
    ) {
        let filter = build_filter(env, level);

        assert_eq!(filter.to_string(), expected);
    }

    #[test]
    fn verbosity_level_is_added() {
        let filter = build_filter(None, Some(LevelFilter::DEBUG));

        assert!(filter.to_string().contains("debug"));
    }

    #[test]
    fn records_are_written_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logs").join("lettercycle.log");
        let subscriber = build_subscriber(&path, build_filter(None, None)).unwrap();

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!("surface missing");
            tracing::info!("filtered out");
        });

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("surface missing"));
        assert!(!content.contains("filtered out"));
    }

    #[test]
    fn default_path_ends_with_log_file() {
        if let Some(path) = default_log_path() {
            assert!(path.ends_with("lettercycle/lettercycle.log"));
        }
    }
}
