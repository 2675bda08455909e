//! Meal Kiosk Shared Library
//!
//! Pure domain logic shared by the backend: the food/profile data model,
//! energy and macro target derivation, the greedy meal assembler, and input
//! validation. Nothing here does I/O; randomness comes from an injected RNG
//! handle so callers can pin a seed.

pub mod assembler;
pub mod energy;
pub mod macro_targets;
pub mod models;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use assembler::*;
pub use energy::*;
pub use macro_targets::*;
pub use models::*;
pub use types::*;
