//! Painter collaborator
//!
//! Controls hold no drawing code. A painter supplied by the host renders a
//! control from its current state whenever the control asks for it.

use super::widgets::Control;

/// Renders a control
///
/// Painters are shared between controls and called synchronously on the UI
/// thread. Implementations that keep state use interior mutability.
pub trait Painter {
    /// Draw `control` using its current geometry and display attributes
    fn paint(&self, control: &Control);
}

impl<F> Painter for F
where
    F: Fn(&Control),
{
    fn paint(&self, control: &Control) {
        self(control);
    }
}
