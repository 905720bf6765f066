//! Graphics primitives
//!
//! All of them are free functions over a caller-owned buffer and draw through
//! [`Paint::set_pixel`] only, so rotation and clipping are handled in one place.
//! Coordinates are logical and may be negative or off the panel, such pixels
//! are dropped. Internal arithmetic is done in `i64` so extreme coordinates
//! never overflow.

use crate::paint::{color::Color, font::Font, framebuffer::Paint};

/// Set one logical pixel given in wide coordinates
fn plot(paint: &Paint, frame: &mut [u8], x: i64, y: i64, color: Color) {
    if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
        paint.set_pixel(frame, x, y, color);
    }
}

/// Pixels `x_start..x_end` of row `y`, clipped to the logical width
fn span(paint: &Paint, frame: &mut [u8], x_start: i64, x_end: i64, y: i64, color: Color) {
    if !(0..i64::from(paint.height())).contains(&y) {
        return;
    }
    for i in x_start.max(0)..x_end.min(i64::from(paint.width())) {
        plot(paint, frame, i, y, color);
    }
}

/// Pixels `y_start..y_end` of column `x`, clipped to the logical height
fn column(paint: &Paint, frame: &mut [u8], x: i64, y_start: i64, y_end: i64, color: Color) {
    if !(0..i64::from(paint.width())).contains(&x) {
        return;
    }
    for j in y_start.max(0)..y_end.min(i64::from(paint.height())) {
        plot(paint, frame, x, j, color);
    }
}

/// Bresenham line from (`x0`, `y0`) towards (`x1`, `y1`).
///
/// Stepping stops as soon as either axis reaches its end coordinate, so the
/// end point itself is not drawn and a purely horizontal or vertical line
/// draws nothing. Use [`draw_horizontal_line`] / [`draw_vertical_line`] for
/// those.
pub fn draw_line(
    paint: &Paint,
    frame: &mut [u8],
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    color: Color,
) {
    let (mut x0, mut y0) = (i64::from(x0), i64::from(y0));
    let (x1, y1) = (i64::from(x1), i64::from(y1));
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    while x0 != x1 && y0 != y1 {
        plot(paint, frame, x0, y0, color);
        if 2 * err >= dy {
            err += dy;
            x0 += sx;
        }
        if 2 * err <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// `width` pixels to the right of (`x`, `y`)
pub fn draw_horizontal_line(
    paint: &Paint,
    frame: &mut [u8],
    x: i32,
    y: i32,
    width: i32,
    color: Color,
) {
    let x = i64::from(x);
    span(paint, frame, x, x + i64::from(width), i64::from(y), color);
}

/// `height` pixels down from (`x`, `y`)
pub fn draw_vertical_line(
    paint: &Paint,
    frame: &mut [u8],
    x: i32,
    y: i32,
    height: i32,
    color: Color,
) {
    let y = i64::from(y);
    column(paint, frame, i64::from(x), y, y + i64::from(height), color);
}

/// Ordered (min, max) corners of the rectangle spanned by two points
fn normalize(x0: i32, y0: i32, x1: i32, y1: i32) -> (i64, i64, i64, i64) {
    (
        i64::from(x0.min(x1)),
        i64::from(y0.min(y1)),
        i64::from(x0.max(x1)),
        i64::from(y0.max(y1)),
    )
}

/// Rectangle outline, both corners inclusive, in any order
pub fn draw_rectangle(
    paint: &Paint,
    frame: &mut [u8],
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    color: Color,
) {
    let (min_x, min_y, max_x, max_y) = normalize(x0, y0, x1, y1);
    span(paint, frame, min_x, max_x + 1, min_y, color);
    span(paint, frame, min_x, max_x + 1, max_y, color);
    column(paint, frame, min_x, min_y, max_y + 1, color);
    column(paint, frame, max_x, min_y, max_y + 1, color);
}

/// Solid rectangle, both corners inclusive, in any order
pub fn draw_filled_rectangle(
    paint: &Paint,
    frame: &mut [u8],
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    color: Color,
) {
    let (min_x, min_y, max_x, max_y) = normalize(x0, y0, x1, y1);
    for i in min_x.max(0)..=max_x.min(i64::from(paint.width()) - 1) {
        column(paint, frame, i, min_y, max_y + 1, color);
    }
}

/// Radius beyond which no point of a circle centered on the panel is visible
fn circle_reach(paint: &Paint) -> i64 {
    2 * (i64::from(paint.width()) + i64::from(paint.height()))
}

/// Walk one quadrant of the Bresenham circle, calling `plot` with the
/// current (x, y) offset pair. `x` runs from `-radius` up to 0.
fn walk_circle(radius: i64, mut plot: impl FnMut(i64, i64)) {
    let mut x_pos = -radius;
    let mut y_pos = 0;
    let mut err = 2 - 2 * radius;
    loop {
        plot(x_pos, y_pos);
        let mut e2 = err;
        if e2 <= y_pos {
            y_pos += 1;
            err += y_pos * 2 + 1;
            if -x_pos == y_pos && e2 <= x_pos {
                e2 = 0;
            }
        }
        if e2 > x_pos {
            x_pos += 1;
            err += x_pos * 2 + 1;
        }
        if x_pos > 0 {
            break;
        }
    }
}

/// Circle outline around (`x`, `y`). Nothing is drawn when the center is off
/// the panel.
pub fn draw_circle(paint: &Paint, frame: &mut [u8], x: i32, y: i32, radius: i32, color: Color) {
    let radius = i64::from(radius);
    if !paint.contains(x, y) || radius > circle_reach(paint) {
        return;
    }
    let (x, y) = (i64::from(x), i64::from(y));
    walk_circle(radius, |x_pos, y_pos| {
        plot(paint, frame, x - x_pos, y + y_pos, color);
        plot(paint, frame, x + x_pos, y + y_pos, color);
        plot(paint, frame, x + x_pos, y - y_pos, color);
        plot(paint, frame, x - x_pos, y - y_pos, color);
    });
}

/// Solid circle around (`x`, `y`). Nothing is drawn when the center is off
/// the panel.
pub fn draw_filled_circle(
    paint: &Paint,
    frame: &mut [u8],
    x: i32,
    y: i32,
    radius: i32,
    color: Color,
) {
    let radius = i64::from(radius);
    if !paint.contains(x, y) {
        return;
    }
    if radius > circle_reach(paint) {
        // Covers the whole panel
        for j in 0..i64::from(paint.height()) {
            span(paint, frame, 0, i64::from(paint.width()), j, color);
        }
        return;
    }
    let (x, y) = (i64::from(x), i64::from(y));
    walk_circle(radius, |x_pos, y_pos| {
        plot(paint, frame, x - x_pos, y + y_pos, color);
        plot(paint, frame, x + x_pos, y + y_pos, color);
        plot(paint, frame, x + x_pos, y - y_pos, color);
        plot(paint, frame, x - x_pos, y - y_pos, color);
        let end = x - x_pos + 1;
        span(paint, frame, x + x_pos, end, y + y_pos, color);
        span(paint, frame, x + x_pos, end, y - y_pos, color);
    });
}

/// Draw one glyph with its top left corner at (`x`, `y`).
///
/// Only set bits are drawn, the background stays as it is. Characters the
/// font has no glyph for are skipped.
pub fn draw_char_at(
    paint: &Paint,
    frame: &mut [u8],
    x: i32,
    y: i32,
    ch: char,
    font: &Font<'_>,
    color: Color,
) {
    draw_glyph(paint, frame, i64::from(x), i64::from(y), ch, font, color);
}

fn draw_glyph(
    paint: &Paint,
    frame: &mut [u8],
    x: i64,
    y: i64,
    ch: char,
    font: &Font<'_>,
    color: Color,
) {
    if font.width == 0 || font.height == 0 || !ch.is_ascii() {
        return;
    }
    let Some(glyph) = font.glyph(ch as u8) else {
        return;
    };
    let row_bytes = font.row_bytes();
    for (j, row) in glyph.chunks_exact(row_bytes).enumerate() {
        for i in 0..usize::from(font.width) {
            if row[i / 8] & (0x80 >> (i % 8)) != 0 {
                plot(paint, frame, x + i as i64, y + j as i64, color);
            }
        }
    }
}

/// Draw `text` left to right starting at (`x`, `y`).
///
/// Every character advances by the font width. No wrapping, no kerning and
/// no control characters.
pub fn draw_string_at(
    paint: &Paint,
    frame: &mut [u8],
    x: i32,
    y: i32,
    text: &str,
    font: &Font<'_>,
    color: Color,
) {
    let mut cursor = i64::from(x);
    for ch in text.chars() {
        if cursor >= i64::from(paint.width()) {
            break;
        }
        draw_glyph(paint, frame, cursor, i64::from(y), ch, font, color);
        cursor += i64::from(font.width);
    }
}
