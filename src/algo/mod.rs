mod restart;

pub use restart::{run_attempt, RandomizedRestart};
