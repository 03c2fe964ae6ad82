//! Shared helper utilities for factory methods.

/// Counter for generating unique snowflake-like IDs in tests.
///
/// Starts well above zero so generated IDs look like Discord snowflakes and never
/// collide with the small literal IDs tests use directly.
static COUNTER: std::sync::atomic::AtomicU64 =
    std::sync::atomic::AtomicU64::new(100_000_000_000_000_000);

/// Gets the next unique ID for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}
