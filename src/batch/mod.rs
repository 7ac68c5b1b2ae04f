//! Batch input loading for the `run_batch` binary

mod loader;

pub use loader::{load_growth_inputs, LoadError};
