//! UI widgets module
//!
//! Contains the control base type and its display attribute types.

pub mod core;
pub mod control;

// Re-export core types
pub use self::core::{ContentAlignment, Font, FontStyle, ImageLayout};

// Re-export widget types
pub use control::{Control, ControlError};
