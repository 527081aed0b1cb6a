#![cfg(test)]

//! Unit-test logging, installed once per test binary by the `ctor` hook in
//! `lib.rs`.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static SUBSCRIBER: OnceCell<()> = OnceCell::new();

fn test_filter() -> EnvFilter {
    EnvFilter::try_from_env("TEST_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// `TEST_LOG` wins over `RUST_LOG`; with neither set only warnings show.
pub fn init() {
    SUBSCRIBER.get_or_init(|| {
        // Another subscriber may already be installed; keep it.
        let _ = fmt()
            .with_env_filter(test_filter())
            .with_test_writer()
            .with_target(false)
            .without_time()
            .try_init();
    });
}
