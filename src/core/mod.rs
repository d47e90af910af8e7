/*!
 * Core Module
 * Fundamental simulator types, tolerances and error handling
 */

pub mod errors;
pub mod limits;
pub mod name;
pub mod tolerance;
pub mod types;

// Re-export for convenience
pub use errors::*;
pub use name::ProcName;
pub use types::*;
