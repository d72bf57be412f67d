//! Shared thread pool for parallel Monte Carlo sampling.

#[cfg(feature = "parallel")]
use rayon::ThreadPool;

#[cfg(feature = "parallel")]
use std::sync::OnceLock;

#[cfg(feature = "parallel")]
static THREAD_POOL: OnceLock<Option<ThreadPool>> = OnceLock::new();

/// Get or initialize the shared sampling pool.
///
/// Threads are named `bayes-rope-<i>`, one per logical CPU. Returns `None`
/// if the pool could not be built, in which case work runs on rayon's
/// global pool.
#[cfg(feature = "parallel")]
fn thread_pool() -> Option<&'static ThreadPool> {
    THREAD_POOL
        .get_or_init(|| {
            rayon::ThreadPoolBuilder::new()
                .thread_name(|i| format!("bayes-rope-{i}"))
                .build()
                .map_err(|err| {
                    tracing::warn!(%err, "failed to build sampling thread pool, using global pool");
                })
                .ok()
        })
        .as_ref()
}

/// Execute a parallel operation on the sampling pool.
#[cfg(feature = "parallel")]
pub fn install<OP, R>(op: OP) -> R
where
    OP: FnOnce() -> R + Send,
    R: Send,
{
    match thread_pool() {
        Some(pool) => pool.install(op),
        None => op(),
    }
}

#[cfg(not(feature = "parallel"))]
pub fn install<OP, R>(op: OP) -> R
where
    OP: FnOnce() -> R,
{
    op()
}
