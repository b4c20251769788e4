pub mod entry_builders;

// Re-export main utilities for use by test files
pub use entry_builders::{named_profiles, EntryBuilder};
