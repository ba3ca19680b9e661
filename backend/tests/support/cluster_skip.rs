//! `SKIP_TEST_CLUSTER` policy for suites needing embedded PostgreSQL.

const SKIP_VAR: &str = "SKIP_TEST_CLUSTER";

/// Whether `SKIP_TEST_CLUSTER` is `1`, `true` or `yes` (any case).
pub fn should_skip_test_cluster() -> bool {
    std::env::var(SKIP_VAR)
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Turn a cluster setup failure into a skip or a panic.
///
/// Returns `None` and prints a skip marker when skipping is enabled;
/// otherwise panics so CI does not silently lose coverage.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if should_skip_test_cluster() {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        return None;
    }
    panic!("Test cluster setup failed: {reason}. Set {SKIP_VAR}=1 to skip.");
}
