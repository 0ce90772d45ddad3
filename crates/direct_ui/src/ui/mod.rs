//! UI System Module
//!
//! Controls keep geometry and display state; painters turn that state into
//! pixels.
//!
//! Architecture:
//! - widgets/: control base type and display attribute types
//! - painter: the rendering collaborator controls notify after geometry changes

pub mod widgets;
pub mod painter;

pub use painter::Painter;

// Re-export widgets
pub use widgets::{
    Control, ControlError,
    ContentAlignment, Font, FontStyle, ImageLayout,
};
