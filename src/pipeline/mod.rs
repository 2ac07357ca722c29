pub mod classifier;
pub mod error;
pub mod executor;


// Re-exports for convenience
pub use classifier::classify;
pub use error::LookupError;
pub use executor::LookupExecutor;
