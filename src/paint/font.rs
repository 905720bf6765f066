//! Fixed-width bitmap fonts
//!
//! Glyph tables are not part of this crate. A table holds one glyph per ASCII
//! code starting at space, each glyph `height` rows of `ceil(width / 8)`
//! bytes, MSB first.

/// A borrowed fixed-width font
#[derive(Debug, Clone, Copy)]
pub struct Font<'a> {
    /// Glyph data, starting at `' '`
    pub table: &'a [u8],
    /// Glyph width in pixels, also the advance
    pub width: u16,
    /// Glyph height in pixels
    pub height: u16,
}

impl<'a> Font<'a> {
    /// Wrap a glyph table
    pub const fn new(table: &'a [u8], width: u16, height: u16) -> Self {
        Font {
            table,
            width,
            height,
        }
    }

    /// Bytes in one glyph row, padded to whole bytes
    pub const fn row_bytes(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }

    /// Bytes in one glyph
    pub const fn glyph_bytes(&self) -> usize {
        self.row_bytes() * self.height as usize
    }

    /// Glyph data for `code`, `None` below space or past the end of the table
    pub fn glyph(&self, code: u8) -> Option<&'a [u8]> {
        let index = usize::from(code.checked_sub(b' ')?);
        let start = index * self.glyph_bytes();
        self.table.get(start..start + self.glyph_bytes())
    }
}
