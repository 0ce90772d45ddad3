//! Math utilities and types
//!
//! Colors are stored as RGBA vectors with components in `0.0..=1.0`.

pub use nalgebra::Vector4;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// RGBA color type
pub type Color = Vec4;

/// Opaque black
pub fn black() -> Color {
    Color::new(0.0, 0.0, 0.0, 1.0)
}

/// Opaque white
pub fn white() -> Color {
    Color::new(1.0, 1.0, 1.0, 1.0)
}

/// Build a color from 8-bit RGBA channels
pub fn color_from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Color {
    Color::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        f32::from(a) / 255.0,
    )
}
