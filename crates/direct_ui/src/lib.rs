//! # Direct UI
//!
//! Control base type for a direct-rendered UI layer. A [`Control`](ui::Control)
//! holds geometry and display attributes and hands drawing to an injected
//! [`Painter`](ui::Painter).
//!
//! ## Quick Start
//!
//! ```rust
//! use std::rc::Rc;
//! use direct_ui::prelude::*;
//!
//! fn main() -> Result<(), ControlError> {
//!     let mut button = Control::new();
//!     button.set_painter(Some(Rc::new(|c: &Control| {
//!         println!("draw {} at {:?}", c.name(), c.rectangle());
//!     })))?;
//!
//!     button.set_bounds(10, 10, 80, 24); // one repaint
//!     button.inflate(2, 2);              // another
//!     assert_eq!(button.rectangle(), Rect::new(8, 8, 84, 28));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod foundation;
pub mod geometry;
pub mod assets;
pub mod config;
pub mod ui;

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        assets::{AssetError, Image},
        config::{Config, ConfigError, ControlDefaults},
        foundation::math::Color,
        geometry::{Point, Rect, Size},
        ui::{
            ContentAlignment, Control, ControlError, Font, FontStyle, ImageLayout, Painter,
        },
    };
}
