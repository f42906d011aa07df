//! Replica count arithmetic

/// Compute the new replica count for a percentage delta.
///
/// `current + (current * pct) / 100`, where `/` is Rust's integer division
/// and truncates toward zero. The truncation is observable for odd
/// combinations: `new_replicas(7, 10)` is 7, not 8, and `new_replicas(15, -10)`
/// is 14. The result is never negative as long as `pct >= -100`, which the
/// CLI validation guarantees before this is called.
pub fn new_replicas(current: i32, pct: i32) -> i32 {
    current + (current * pct) / 100
}
