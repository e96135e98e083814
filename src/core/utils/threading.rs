//! Worker pool utilities built on Rayon.

use crate::core::error::{Result, RoughSetError};

/// Resolve a requested thread count; 0 means all available cores.
pub fn effective_num_threads(requested: usize) -> usize {
    if requested == 0 {
        num_cpus::get()
    } else {
        requested
    }
}

/// Build a dedicated pool so ensemble runs never contend with the global one.
pub fn build_thread_pool(num_threads: usize) -> Result<rayon::ThreadPool> {
    let num_threads = effective_num_threads(num_threads);
    if num_threads > num_cpus::get() * 2 {
        log::warn!(
            "num_threads ({}) is much larger than available cores ({})",
            num_threads,
            num_cpus::get()
        );
    }
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .thread_name(|i| format!("skrough-worker-{}", i))
        .build()
        .map_err(|e| RoughSetError::threading(format!("Failed to create thread pool: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_num_threads() {
        assert_eq!(effective_num_threads(0), num_cpus::get());
        assert_eq!(effective_num_threads(3), 3);
    }

    #[test]
    fn test_build_thread_pool() {
        let pool = build_thread_pool(2).unwrap();
        assert_eq!(pool.current_num_threads(), 2);
        let sum: usize = pool.install(|| (0..10usize).sum());
        assert_eq!(sum, 45);
    }
}
