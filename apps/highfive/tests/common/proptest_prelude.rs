// Shared proptest configuration for integration tests, pulled in with
// `include!`.
//
// PROPTEST_CASES sets the case count per property (default 8, since every
// case plays whole matches). PROPTEST_MAX_SHRINK_MS caps shrinking time.

fn env_u32(name: &str) -> Option<u32> {
    std::env::var(name).ok()?.parse().ok()
}

pub fn proptest_prelude_config() -> proptest::prelude::ProptestConfig {
    let base = proptest::prelude::ProptestConfig::default();
    proptest::prelude::ProptestConfig {
        cases: env_u32("PROPTEST_CASES").unwrap_or(8).max(1),
        max_shrink_time: env_u32("PROPTEST_MAX_SHRINK_MS").unwrap_or(base.max_shrink_time),
        // No regression files next to integration tests
        failure_persistence: None,
        ..base
    }
}
