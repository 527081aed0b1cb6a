//! Logging for integration test binaries.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static SUBSCRIBER: OnceCell<()> = OnceCell::new();

/// Install a test-writer subscriber once per binary.
///
/// The filter is taken from `TEST_LOG`, then `RUST_LOG`, and is `warn` when
/// neither parses. Engine transitions log at `debug`, so
/// `TEST_LOG=highfive=debug` traces a whole match.
pub fn init() {
    SUBSCRIBER.get_or_init(|| {
        let filter = ["TEST_LOG", EnvFilter::DEFAULT_ENV]
            .into_iter()
            .find_map(|var| EnvFilter::try_from_env(var).ok())
            .unwrap_or_else(|| EnvFilter::new("warn"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init();
    });
}
