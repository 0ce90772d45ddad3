//! Core UI widget primitives
//!
//! Display attribute types shared by all controls.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::geometry::{Rect, Size};

/// Placement of text or an image inside a control's bounds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentAlignment {
    /// Top-left corner
    #[default]
    TopLeft,
    /// Top-center
    TopCenter,
    /// Top-right corner
    TopRight,
    /// Middle-left
    MiddleLeft,
    /// Center of the bounds
    MiddleCenter,
    /// Middle-right
    MiddleRight,
    /// Bottom-left corner
    BottomLeft,
    /// Bottom-center
    BottomCenter,
    /// Bottom-right corner
    BottomRight,
}

impl ContentAlignment {
    /// Get the normalized anchor position (0.0 to 1.0)
    pub const fn to_normalized(self) -> (f32, f32) {
        match self {
            Self::TopLeft => (0.0, 0.0),
            Self::TopCenter => (0.5, 0.0),
            Self::TopRight => (1.0, 0.0),
            Self::MiddleLeft => (0.0, 0.5),
            Self::MiddleCenter => (0.5, 0.5),
            Self::MiddleRight => (1.0, 0.5),
            Self::BottomLeft => (0.0, 1.0),
            Self::BottomCenter => (0.5, 1.0),
            Self::BottomRight => (1.0, 1.0),
        }
    }

    /// Place an item of `item` size inside `bounds`
    ///
    /// Centered placements round toward the top-left when the free space is
    /// odd, including the negative free space of an item larger than
    /// `bounds`. Oversized items overhang on the side away from the anchor.
    pub const fn align(self, bounds: Rect, item: Size) -> Rect {
        let free_w = bounds.width.wrapping_sub(item.width);
        let free_h = bounds.height.wrapping_sub(item.height);

        let dx = match self {
            Self::TopLeft | Self::MiddleLeft | Self::BottomLeft => 0,
            Self::TopCenter | Self::MiddleCenter | Self::BottomCenter => free_w.div_euclid(2),
            Self::TopRight | Self::MiddleRight | Self::BottomRight => free_w,
        };
        let dy = match self {
            Self::TopLeft | Self::TopCenter | Self::TopRight => 0,
            Self::MiddleLeft | Self::MiddleCenter | Self::MiddleRight => free_h.div_euclid(2),
            Self::BottomLeft | Self::BottomCenter | Self::BottomRight => free_h,
        };

        Rect::new(bounds.x.wrapping_add(dx), bounds.y.wrapping_add(dy), item.width, item.height)
    }
}

/// How a background image fills a control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageLayout {
    /// Drawn once at the top-left, unscaled
    None,
    /// Repeated across the bounds
    #[default]
    Tile,
    /// Drawn once, centered, unscaled
    Center,
    /// Scaled to fill the bounds exactly
    Stretch,
    /// Scaled to fit the bounds, keeping its aspect ratio
    Zoom,
}

bitflags! {
    /// Font style flags; empty means regular
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct FontStyle: u8 {
        /// Bold weight
        const BOLD = 1 << 0;
        /// Italic slant
        const ITALIC = 1 << 1;
        /// Underlined
        const UNDERLINE = 1 << 2;
        /// Struck through
        const STRIKEOUT = 1 << 3;
    }
}

/// Font descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Font {
    /// Font family name
    pub family: String,
    /// Size in points
    pub size: f32,
    /// Style flags
    pub style: FontStyle,
}

impl Font {
    /// Create a regular font
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            style: FontStyle::empty(),
        }
    }

    /// Same font with different style flags
    #[must_use]
    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    /// True if the bold flag is set
    pub const fn is_bold(&self) -> bool {
        self.style.contains(FontStyle::BOLD)
    }

    /// True if the italic flag is set
    pub const fn is_italic(&self) -> bool {
        self.style.contains(FontStyle::ITALIC)
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new("Sans", 9.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_normalized() {
        assert_eq!(ContentAlignment::TopLeft.to_normalized(), (0.0, 0.0));
        assert_eq!(ContentAlignment::MiddleCenter.to_normalized(), (0.5, 0.5));
        assert_eq!(ContentAlignment::BottomRight.to_normalized(), (1.0, 1.0));
    }

    #[test]
    fn test_align_within_bounds() {
        let bounds = Rect::new(10, 20, 100, 50);
        let item = Size::new(20, 10);

        assert_eq!(ContentAlignment::TopLeft.align(bounds, item), Rect::new(10, 20, 20, 10));
        assert_eq!(ContentAlignment::MiddleCenter.align(bounds, item), Rect::new(50, 40, 20, 10));
        assert_eq!(ContentAlignment::BottomRight.align(bounds, item), Rect::new(90, 60, 20, 10));
        assert_eq!(ContentAlignment::MiddleLeft.align(bounds, item), Rect::new(10, 40, 20, 10));
    }

    #[test]
    fn test_align_oversized_item_rounds_up_left() {
        let bounds = Rect::new(0, 0, 10, 10);
        let item = Size::new(15, 13);

        // Free space is -5 and -3: centering floors to -3 and -2
        assert_eq!(ContentAlignment::MiddleCenter.align(bounds, item), Rect::new(-3, -2, 15, 13));
        assert_eq!(ContentAlignment::BottomRight.align(bounds, item), Rect::new(-5, -3, 15, 13));
        assert_eq!(ContentAlignment::TopLeft.align(bounds, item), Rect::new(0, 0, 15, 13));
    }

    #[test]
    fn test_font_style() {
        let font = Font::new("Serif", 12.0).with_style(FontStyle::BOLD | FontStyle::UNDERLINE);
        assert!(font.is_bold());
        assert!(!font.is_italic());
        assert!(Font::default().style.is_empty());
    }
}
