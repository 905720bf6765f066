//! Software framebuffer and drawing
//!
//! The buffer is a plain `[u8]` the caller allocates, [`crate::BUFFER_SIZE`]
//! bytes for the full panel. Layout is packed 1 bit per pixel, row-major in
//! native coordinates, MSB first, and inverted: a set bit is white.
//!
//! [`Paint`] only carries the rotation. Every drawing function goes through
//! [`Paint::set_pixel`], rotation is never baked into storage.

pub mod canvas;
pub mod color;
pub mod font;
pub mod framebuffer;
pub mod graphics;

pub use canvas::Canvas;
pub use color::Color;
pub use font::Font;
pub use framebuffer::{DisplayRotation, Paint};
