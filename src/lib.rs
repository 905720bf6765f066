//! 1.54 inch e-Paper Display Driver (version 2 panel, 200x200, black/white)
//!
//! The crate has two halves that never call each other:
//!
//! - [`epd1in54v2`] speaks the panel protocol: reset and init sequences, RAM
//!   windows, full and partial refresh, deep sleep. It talks to the hardware
//!   through a [`epd1in54v2::Transport`].
//! - [`paint`] is the software framebuffer: a packed 1-bit bitmap owned by the
//!   caller, rotation-aware pixel addressing and a small set of drawing
//!   functions built on a single set-or-clear pixel primitive.
//!
//! ### Usage
//!
//! 1. allocate a buffer of [`BUFFER_SIZE`] bytes and clear it with [`paint::Paint::clear`]
//! 1. draw onto it with the functions in [`paint::graphics`], or through
//!    [`paint::Canvas`] with [`embedded_graphics`]
//! 1. push it to the panel with [`epd1in54v2::Epd::display`] or one of the
//!    partial refresh variants
//!
#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::too_many_arguments)]

pub mod epd1in54v2;
pub mod paint;

/// Display width in pixels, native orientation
pub const WIDTH: u16 = 200;

/// Display height in pixels, native orientation
pub const HEIGHT: u16 = 200;

/// Bytes in one native row of the framebuffer
pub const ROW_BYTES: usize = (WIDTH as usize).div_ceil(8);

/// Size of a full framebuffer in bytes
pub const BUFFER_SIZE: usize = ROW_BYTES * HEIGHT as usize;
