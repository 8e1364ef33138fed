// Sales Quest Schema - Shared type definitions
// This crate contains the core enums and static tables that are shared between
// the main sales-quest crate and its data files.

// Re-export the main types
pub use classes::*;
pub use enemies::*;
pub use ranks::*;

// Re-export the iteration trait so downstream crates can enumerate the
// schema enums without a direct strum dependency.
pub use strum::IntoEnumIterator;

pub mod classes;
pub mod enemies;
pub mod ranks;
