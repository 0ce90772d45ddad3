//! Control base widget
//!
//! A control owns one [`Rect`] and a set of display attributes. Geometry
//! setters repaint through the attached [`Painter`]; display attribute setters
//! only store the value.

use std::fmt;
use std::rc::Rc;

use super::core::{ContentAlignment, Font, ImageLayout};
use crate::assets::Image;
use crate::config::ControlDefaults;
use crate::foundation::math::Color;
use crate::geometry::{Point, Rect, Size};
use crate::ui::painter::Painter;

/// Control errors
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlError {
    /// An operation needed a painter and none was supplied or attached
    #[error("no painter available for {operation}")]
    MissingPainter {
        /// Name of the failing operation
        operation: &'static str,
    },
}

/// Base UI control
#[derive(Clone)]
pub struct Control {
    name: String,
    enabled: bool,
    visible: bool,

    text: String,
    text_align: ContentAlignment,
    font: Font,
    fore_color: Color,
    image: Option<Image>,
    image_align: ContentAlignment,
    background_image: Option<Image>,
    background_image_layout: ImageLayout,

    bounds: Rect,

    painter: Option<Rc<dyn Painter>>,
}

impl Control {
    /// Create a control with an empty rectangle and default attributes
    pub fn new() -> Self {
        Self::with_defaults(&ControlDefaults::default())
    }

    /// Create a control with an empty rectangle and configured attributes
    pub fn with_defaults(defaults: &ControlDefaults) -> Self {
        Self {
            name: String::new(),
            enabled: defaults.enabled,
            visible: defaults.visible,
            text: String::new(),
            text_align: defaults.text_align,
            font: defaults.font.clone(),
            fore_color: defaults.fore_color,
            image: None,
            image_align: defaults.image_align,
            background_image: None,
            background_image_layout: defaults.background_image_layout,
            bounds: Rect::EMPTY,
            painter: None,
        }
    }

    // Identity

    /// Control name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the control name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Whether the control accepts interaction
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the control
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether the control is shown
    pub const fn visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the control
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    // Display attributes. None of these repaint.

    /// Displayed text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the displayed text
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Text placement
    pub const fn text_align(&self) -> ContentAlignment {
        self.text_align
    }

    /// Set the text placement
    pub fn set_text_align(&mut self, align: ContentAlignment) {
        self.text_align = align;
    }

    /// Text font
    pub const fn font(&self) -> &Font {
        &self.font
    }

    /// Set the text font
    pub fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    /// Text color
    pub const fn fore_color(&self) -> Color {
        self.fore_color
    }

    /// Set the text color
    pub fn set_fore_color(&mut self, color: Color) {
        self.fore_color = color;
    }

    /// Foreground image
    pub const fn image(&self) -> Option<&Image> {
        self.image.as_ref()
    }

    /// Set or clear the foreground image
    pub fn set_image(&mut self, image: Option<Image>) {
        self.image = image;
    }

    /// Foreground image placement
    pub const fn image_align(&self) -> ContentAlignment {
        self.image_align
    }

    /// Set the foreground image placement
    pub fn set_image_align(&mut self, align: ContentAlignment) {
        self.image_align = align;
    }

    /// Background image
    pub const fn background_image(&self) -> Option<&Image> {
        self.background_image.as_ref()
    }

    /// Set or clear the background image
    pub fn set_background_image(&mut self, image: Option<Image>) {
        self.background_image = image;
    }

    /// Background image fill mode
    pub const fn background_image_layout(&self) -> ImageLayout {
        self.background_image_layout
    }

    /// Set the background image fill mode
    pub fn set_background_image_layout(&mut self, layout: ImageLayout) {
        self.background_image_layout = layout;
    }

    // Geometry. Every setter repaints once.

    /// Left edge
    pub const fn left(&self) -> i32 {
        self.bounds.x
    }

    /// Move the left edge
    pub fn set_left(&mut self, left: i32) {
        self.bounds.x = left;
        self.repaint();
    }

    /// Top edge
    pub const fn top(&self) -> i32 {
        self.bounds.y
    }

    /// Move the top edge
    pub fn set_top(&mut self, top: i32) {
        self.bounds.y = top;
        self.repaint();
    }

    /// Width
    pub const fn width(&self) -> i32 {
        self.bounds.width
    }

    /// Set the width
    pub fn set_width(&mut self, width: i32) {
        self.bounds.width = width;
        self.repaint();
    }

    /// Height
    pub const fn height(&self) -> i32 {
        self.bounds.height
    }

    /// Set the height
    pub fn set_height(&mut self, height: i32) {
        self.bounds.height = height;
        self.repaint();
    }

    /// Right edge (`left + width`)
    pub const fn right(&self) -> i32 {
        self.bounds.right()
    }

    /// Bottom edge (`top + height`)
    pub const fn bottom(&self) -> i32 {
        self.bounds.bottom()
    }

    /// Bounding rectangle
    pub const fn rectangle(&self) -> Rect {
        self.bounds
    }

    /// Replace the bounding rectangle
    pub fn set_rectangle(&mut self, rect: Rect) {
        self.bounds = rect;
        self.repaint();
    }

    /// Width and height
    pub const fn size(&self) -> Size {
        self.bounds.size()
    }

    /// Set width and height together, accepting a [`Size`] or `(width, height)`
    pub fn set_size(&mut self, size: impl Into<Size>) {
        self.bounds.set_size(size.into());
        self.repaint();
    }

    /// Top-left corner
    pub const fn location(&self) -> Point {
        self.bounds.location()
    }

    /// Move the top-left corner, accepting a [`Point`] or `(left, top)`
    pub fn set_location(&mut self, location: impl Into<Point>) {
        self.bounds.set_location(location.into());
        self.repaint();
    }

    /// Set all four bounds with a single repaint
    pub fn set_bounds(&mut self, left: i32, top: i32, width: i32, height: i32) {
        self.bounds = Rect::new(left, top, width, height);
        self.repaint();
    }

    // Geometry relations

    /// Half-open point containment
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        self.bounds.contains(x, y)
    }

    /// Grow each edge outward by `dw` horizontally and `dh` vertically
    pub fn inflate(&mut self, dw: i32, dh: i32) {
        self.bounds.inflate(dw, dh);
        self.repaint();
    }

    /// Clip the bounds to `rect`; disjoint rectangles leave an empty control
    pub fn intersect(&mut self, rect: Rect) {
        self.bounds.intersect(&rect);
        self.repaint();
    }

    /// True if the bounds overlap `rect`
    pub const fn intersects_with(&self, rect: Rect) -> bool {
        self.bounds.intersects_with(&rect)
    }

    /// True if `width <= 0` or `height <= 0`
    pub const fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Translate the bounds, accepting a [`Point`] or `(dx, dy)`
    pub fn offset(&mut self, delta: impl Into<Point>) {
        let delta = delta.into();
        self.bounds.offset(delta.x, delta.y);
        self.repaint();
    }

    // Painting

    /// Attach a painter, replacing the current one
    ///
    /// `None` is rejected and leaves the current painter attached.
    pub fn set_painter(&mut self, painter: Option<Rc<dyn Painter>>) -> Result<(), ControlError> {
        let painter = painter.ok_or(ControlError::MissingPainter { operation: "set_painter" })?;
        log::debug!("Attaching painter to control '{}'", self.name);
        self.painter = Some(painter);
        Ok(())
    }

    /// Currently attached painter
    pub fn painter(&self) -> Option<&Rc<dyn Painter>> {
        self.painter.as_ref()
    }

    /// Detach and return the current painter
    pub fn take_painter(&mut self) -> Option<Rc<dyn Painter>> {
        let painter = self.painter.take();
        if painter.is_some() {
            log::debug!("Detached painter from control '{}'", self.name);
        }
        painter
    }

    /// Paint once with the attached painter
    pub fn paint(&self) -> Result<(), ControlError> {
        let painter = self
            .painter
            .as_ref()
            .ok_or(ControlError::MissingPainter { operation: "paint" })?;
        painter.paint(self);
        Ok(())
    }

    /// Paint once with an explicit painter, for debugging only
    ///
    /// The attached painter is neither used nor replaced.
    #[deprecated(note = "Debug-only. Attach a painter with `set_painter` and call `paint` instead.")]
    pub fn paint_with(&self, painter: Option<&dyn Painter>) -> Result<(), ControlError> {
        let painter = painter.ok_or(ControlError::MissingPainter { operation: "paint_with" })?;
        painter.paint(self);
        Ok(())
    }

    fn repaint(&self) {
        if let Some(painter) = &self.painter {
            log::trace!("Repainting control '{}' at {:?}", self.name, self.bounds);
            painter.paint(self);
        }
    }
}

impl Default for Control {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Control")
            .field("name", &self.name)
            .field("enabled", &self.enabled)
            .field("visible", &self.visible)
            .field("text", &self.text)
            .field("text_align", &self.text_align)
            .field("font", &self.font)
            .field("fore_color", &self.fore_color)
            .field("image", &self.image)
            .field("image_align", &self.image_align)
            .field("background_image", &self.background_image)
            .field("background_image_layout", &self.background_image_layout)
            .field("bounds", &self.bounds)
            .field("has_painter", &self.painter.is_some())
            .finish()
    }
}
