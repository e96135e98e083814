/// Seeded random number generation
pub mod random;
/// Worker pool utilities
pub mod threading;

pub use random::Random;
pub use threading::{build_thread_pool, effective_num_threads};
