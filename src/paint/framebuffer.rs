//! Pixel addressing on the packed 1-bit framebuffer

use crate::paint::color::Color;
use crate::{BUFFER_SIZE, HEIGHT, WIDTH};

/// Display rotation, only 90° increments supported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayRotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate by 90 degrees clockwise
    Rotate90,
    /// Rotate by 180 degrees clockwise
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
}

impl DisplayRotation {
    /// Map a logical coordinate to the native one.
    ///
    /// Anchored to the native `WIDTH`/`HEIGHT`, not the swapped logical size,
    /// so the mapping always follows the physical memory layout.
    pub fn to_native(self, x: i32, y: i32) -> (i32, i32) {
        let width = i32::from(WIDTH);
        let height = i32::from(HEIGHT);
        match self {
            DisplayRotation::Rotate0 => (x, y),
            DisplayRotation::Rotate90 => (width - y, x),
            DisplayRotation::Rotate180 => (width - x, height - y),
            DisplayRotation::Rotate270 => (y, height - x),
        }
    }

    /// Whether width and height trade places
    pub fn is_transposed(self) -> bool {
        matches!(self, DisplayRotation::Rotate90 | DisplayRotation::Rotate270)
    }
}

/// Rotation state for drawing into a caller-owned buffer.
///
/// Changing the rotation never touches a buffer, it only changes how later
/// pixel writes are addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Paint {
    rotation: DisplayRotation,
}

impl Paint {
    /// Paint with the given rotation
    pub fn new(rotation: DisplayRotation) -> Self {
        Paint { rotation }
    }

    /// Set the display rotation.
    ///
    /// This only concerns future drawing. Anything already drawn stays as it
    /// is in the buffer.
    pub fn set_rotation(&mut self, rotation: DisplayRotation) {
        self.rotation = rotation;
    }

    /// Get current rotation
    pub fn rotation(&self) -> DisplayRotation {
        self.rotation
    }

    /// Logical width under the current rotation
    pub fn width(&self) -> i32 {
        if self.rotation.is_transposed() {
            i32::from(HEIGHT)
        } else {
            i32::from(WIDTH)
        }
    }

    /// Logical height under the current rotation
    pub fn height(&self) -> i32 {
        if self.rotation.is_transposed() {
            i32::from(WIDTH)
        } else {
            i32::from(HEIGHT)
        }
    }

    /// Whether a logical coordinate is on the panel
    pub fn contains(&self, x: i32, y: i32) -> bool {
        (0..self.width()).contains(&x) && (0..self.height()).contains(&y)
    }

    /// Set every native pixel of `frame` to `color`
    pub fn clear(&self, frame: &mut [u8], color: Color) {
        let value = color.get_byte_value();
        for byte in frame.iter_mut().take(BUFFER_SIZE) {
            *byte = value;
        }
    }

    /// Set one pixel in logical coordinates, off-panel coordinates are ignored
    pub fn set_pixel(&self, frame: &mut [u8], x: i32, y: i32, color: Color) {
        if !self.contains(x, y) {
            return;
        }
        let (x, y) = self.rotation.to_native(x, y);
        set_absolute_pixel(frame, x, y, color);
    }

    /// Read one pixel in logical coordinates
    pub fn pixel(&self, frame: &[u8], x: i32, y: i32) -> Option<Color> {
        if !self.contains(x, y) {
            return None;
        }
        let (x, y) = self.rotation.to_native(x, y);
        absolute_pixel(frame, x, y)
    }
}

/// Byte index and bit mask of a native coordinate, `None` off the panel
fn locate(x: i32, y: i32) -> Option<(usize, u8)> {
    // Bounds against the native size, never the rotated one
    if x < 0 || x >= i32::from(WIDTH) || y < 0 || y >= i32::from(HEIGHT) {
        return None;
    }
    let index = (x + y * i32::from(WIDTH)) as usize / 8;
    Some((index, 0x80 >> (x % 8)))
}

/// Set one pixel in native coordinates, ignoring the rotation
pub fn set_absolute_pixel(frame: &mut [u8], x: i32, y: i32, color: Color) {
    let Some((index, mask)) = locate(x, y) else {
        return;
    };
    let Some(byte) = frame.get_mut(index) else {
        return;
    };
    if color.is_colored() {
        *byte &= !mask;
    } else {
        *byte |= mask;
    }
}

/// Read one pixel in native coordinates
pub fn absolute_pixel(frame: &[u8], x: i32, y: i32) -> Option<Color> {
    let (index, mask) = locate(x, y)?;
    let byte = frame.get(index)?;
    Some(if byte & mask == 0 {
        Color::Black
    } else {
        Color::White
    })
}
