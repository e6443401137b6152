use std::sync::atomic::{AtomicI64, Ordering};

static NEXT_ID: AtomicI64 = AtomicI64::new(1);

/// Returns a process-wide unique id for factory defaults.
///
/// Keeps generated unique columns (emails, station codes, badge numbers)
/// from colliding when one test creates several entities.
pub fn next_id() -> i64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}
