//! Integer geometry primitives used for control bounds

pub mod rect;

pub use rect::{Point, Rect, Size};
