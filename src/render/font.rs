//! Minimal embedded 5x7 bitmap font for axis labels and cell annotations.
//!
//! Glyphs are column-encoded: five bytes per character, bit 0 is the top
//! row. Covers printable ASCII; anything else falls back to '?'.

use image::{Rgb, RgbImage};

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal advance per character (glyph plus one column of spacing).
pub const ADVANCE: u32 = GLYPH_WIDTH + 1;

#[rustfmt::skip]
const GLYPHS: [[u8; 5]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x00, 0x00, 0x5F, 0x00, 0x00], // '!'
    [0x00, 0x07, 0x00, 0x07, 0x00], // '"'
    [0x14, 0x7F, 0x14, 0x7F, 0x14], // '#'
    [0x24, 0x2A, 0x7F, 0x2A, 0x12], // '$'
    [0x23, 0x13, 0x08, 0x64, 0x62], // '%'
    [0x36, 0x49, 0x55, 0x22, 0x50], // '&'
    [0x00, 0x05, 0x03, 0x00, 0x00], // '\''
    [0x00, 0x1C, 0x22, 0x41, 0x00], // '('
    [0x00, 0x41, 0x22, 0x1C, 0x00], // ')'
    [0x08, 0x2A, 0x1C, 0x2A, 0x08], // '*'
    [0x08, 0x08, 0x3E, 0x08, 0x08], // '+'
    [0x00, 0x50, 0x30, 0x00, 0x00], // ','
    [0x08, 0x08, 0x08, 0x08, 0x08], // '-'
    [0x00, 0x60, 0x60, 0x00, 0x00], // '.'
    [0x20, 0x10, 0x08, 0x04, 0x02], // '/'
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // '0'
    [0x00, 0x42, 0x7F, 0x40, 0x00], // '1'
    [0x42, 0x61, 0x51, 0x49, 0x46], // '2'
    [0x21, 0x41, 0x45, 0x4B, 0x31], // '3'
    [0x18, 0x14, 0x12, 0x7F, 0x10], // '4'
    [0x27, 0x45, 0x45, 0x45, 0x39], // '5'
    [0x3C, 0x4A, 0x49, 0x49, 0x30], // '6'
    [0x01, 0x71, 0x09, 0x05, 0x03], // '7'
    [0x36, 0x49, 0x49, 0x49, 0x36], // '8'
    [0x06, 0x49, 0x49, 0x29, 0x1E], // '9'
    [0x00, 0x36, 0x36, 0x00, 0x00], // ':'
    [0x00, 0x56, 0x36, 0x00, 0x00], // ';'
    [0x00, 0x08, 0x14, 0x22, 0x41], // '<'
    [0x14, 0x14, 0x14, 0x14, 0x14], // '='
    [0x41, 0x22, 0x14, 0x08, 0x00], // '>'
    [0x02, 0x01, 0x51, 0x09, 0x06], // '?'
    [0x32, 0x49, 0x79, 0x41, 0x3E], // '@'
    [0x7E, 0x11, 0x11, 0x11, 0x7E], // 'A'
    [0x7F, 0x49, 0x49, 0x49, 0x36], // 'B'
    [0x3E, 0x41, 0x41, 0x41, 0x22], // 'C'
    [0x7F, 0x41, 0x41, 0x22, 0x1C], // 'D'
    [0x7F, 0x49, 0x49, 0x49, 0x41], // 'E'
    [0x7F, 0x09, 0x09, 0x09, 0x01], // 'F'
    [0x3E, 0x41, 0x49, 0x49, 0x7A], // 'G'
    [0x7F, 0x08, 0x08, 0x08, 0x7F], // 'H'
    [0x00, 0x41, 0x7F, 0x41, 0x00], // 'I'
    [0x20, 0x40, 0x41, 0x3F, 0x01], // 'J'
    [0x7F, 0x08, 0x14, 0x22, 0x41], // 'K'
    [0x7F, 0x40, 0x40, 0x40, 0x40], // 'L'
    [0x7F, 0x02, 0x0C, 0x02, 0x7F], // 'M'
    [0x7F, 0x04, 0x08, 0x10, 0x7F], // 'N'
    [0x3E, 0x41, 0x41, 0x41, 0x3E], // 'O'
    [0x7F, 0x09, 0x09, 0x09, 0x06], // 'P'
    [0x3E, 0x41, 0x51, 0x21, 0x5E], // 'Q'
    [0x7F, 0x09, 0x19, 0x29, 0x46], // 'R'
    [0x46, 0x49, 0x49, 0x49, 0x31], // 'S'
    [0x01, 0x01, 0x7F, 0x01, 0x01], // 'T'
    [0x3F, 0x40, 0x40, 0x40, 0x3F], // 'U'
    [0x1F, 0x20, 0x40, 0x20, 0x1F], // 'V'
    [0x3F, 0x40, 0x38, 0x40, 0x3F], // 'W'
    [0x63, 0x14, 0x08, 0x14, 0x63], // 'X'
    [0x07, 0x08, 0x70, 0x08, 0x07], // 'Y'
    [0x61, 0x51, 0x49, 0x45, 0x43], // 'Z'
    [0x00, 0x7F, 0x41, 0x41, 0x00], // '['
    [0x02, 0x04, 0x08, 0x10, 0x20], // '\\'
    [0x00, 0x41, 0x41, 0x7F, 0x00], // ']'
    [0x04, 0x02, 0x01, 0x02, 0x04], // '^'
    [0x40, 0x40, 0x40, 0x40, 0x40], // '_'
    [0x00, 0x01, 0x02, 0x04, 0x00], // '`'
    [0x20, 0x54, 0x54, 0x54, 0x78], // 'a'
    [0x7F, 0x48, 0x44, 0x44, 0x38], // 'b'
    [0x38, 0x44, 0x44, 0x44, 0x20], // 'c'
    [0x38, 0x44, 0x44, 0x48, 0x7F], // 'd'
    [0x38, 0x54, 0x54, 0x54, 0x18], // 'e'
    [0x08, 0x7E, 0x09, 0x01, 0x02], // 'f'
    [0x0C, 0x52, 0x52, 0x52, 0x3E], // 'g'
    [0x7F, 0x08, 0x04, 0x04, 0x78], // 'h'
    [0x00, 0x44, 0x7D, 0x40, 0x00], // 'i'
    [0x20, 0x40, 0x44, 0x3D, 0x00], // 'j'
    [0x7F, 0x10, 0x28, 0x44, 0x00], // 'k'
    [0x00, 0x41, 0x7F, 0x40, 0x00], // 'l'
    [0x7C, 0x04, 0x18, 0x04, 0x78], // 'm'
    [0x7C, 0x08, 0x04, 0x04, 0x78], // 'n'
    [0x38, 0x44, 0x44, 0x44, 0x38], // 'o'
    [0x7C, 0x14, 0x14, 0x14, 0x08], // 'p'
    [0x08, 0x14, 0x14, 0x18, 0x7C], // 'q'
    [0x7C, 0x08, 0x04, 0x04, 0x08], // 'r'
    [0x48, 0x54, 0x54, 0x54, 0x20], // 's'
    [0x04, 0x3F, 0x44, 0x40, 0x20], // 't'
    [0x3C, 0x40, 0x40, 0x20, 0x7C], // 'u'
    [0x1C, 0x20, 0x40, 0x20, 0x1C], // 'v'
    [0x3C, 0x40, 0x30, 0x40, 0x3C], // 'w'
    [0x44, 0x28, 0x10, 0x28, 0x44], // 'x'
    [0x0C, 0x50, 0x50, 0x50, 0x3C], // 'y'
    [0x44, 0x64, 0x54, 0x4C, 0x44], // 'z'
    [0x00, 0x08, 0x36, 0x41, 0x00], // '{'
    [0x00, 0x00, 0x7F, 0x00, 0x00], // '|'
    [0x00, 0x41, 0x36, 0x08, 0x00], // '}'
    [0x08, 0x04, 0x08, 0x10, 0x08], // '~'
];

fn glyph(c: char) -> &'static [u8; 5] {
    let idx = (c as usize).wrapping_sub(0x20);
    GLYPHS.get(idx).unwrap_or(&GLYPHS[b'?' as usize - 0x20])
}

/// Pixel width of `text` at the given integer scale.
pub fn text_width(text: &str, scale: u32) -> u32 {
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return 0;
    }
    (chars * ADVANCE - 1) * scale
}

/// Pixel height of a single text line at the given integer scale.
pub fn text_height(scale: u32) -> u32 {
    GLYPH_HEIGHT * scale
}

fn put_pixel_checked(img: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}

/// For every lit pixel of `text` (local coordinates, y down, scale applied),
/// call `plot` with the local position.
fn for_each_text_pixel(text: &str, scale: u32, mut plot: impl FnMut(i64, i64)) {
    let mut pen_x = 0i64;
    for c in text.chars() {
        let columns = glyph(c);
        for (cx, column) in columns.iter().enumerate() {
            for cy in 0..GLYPH_HEIGHT {
                if column >> cy & 1 == 1 {
                    for sx in 0..scale as i64 {
                        for sy in 0..scale as i64 {
                            plot(
                                pen_x + cx as i64 * scale as i64 + sx,
                                cy as i64 * scale as i64 + sy,
                            );
                        }
                    }
                }
            }
        }
        pen_x += (ADVANCE * scale) as i64;
    }
}

/// Draw `text` with its top-left corner at (x, y). Clips at image bounds.
pub fn draw_text(img: &mut RgbImage, x: i64, y: i64, text: &str, scale: u32, color: Rgb<u8>) {
    for_each_text_pixel(text, scale, |tx, ty| {
        put_pixel_checked(img, x + tx, y + ty, color);
    });
}

/// Draw `text` rotated 45 degrees, right-aligned so the reading direction
/// rises towards the anchor; the text extends down and to the left of
/// (x, y). Used for column tick labels.
pub fn draw_text_rotated45(
    img: &mut RgbImage,
    x: i64,
    y: i64,
    text: &str,
    scale: u32,
    color: Rgb<u8>,
) {
    let width = text_width(text, scale) as i64;
    // cos(45°) = sin(45°)
    let c = std::f64::consts::FRAC_1_SQRT_2;
    for_each_text_pixel(text, scale, |tx, ty| {
        let lx = (tx - width) as f64;
        let ly = ty as f64;
        let px = x as f64 + lx * c + ly * c;
        let py = y as f64 - lx * c + ly * c;
        // 2x2 block so the rotated raster stays hole-free
        for dx in 0..2 {
            for dy in 0..2 {
                put_pixel_checked(img, px.round() as i64 + dx, py.round() as i64 + dy, color);
            }
        }
    });
}

/// Draw `text` rotated 90 degrees counter-clockwise (reading bottom to top),
/// with (x, y) the top-left corner of the rotated bounding box.
pub fn draw_text_rotated90(
    img: &mut RgbImage,
    x: i64,
    y: i64,
    text: &str,
    scale: u32,
    color: Rgb<u8>,
) {
    let width = text_width(text, scale) as i64;
    for_each_text_pixel(text, scale, |tx, ty| {
        put_pixel_checked(img, x + ty, y + width - 1 - tx, color);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("", 1), 0);
        assert_eq!(text_width("0", 1), 5);
        assert_eq!(text_width("0.00", 1), 23);
        assert_eq!(text_width("ab", 2), 22);
    }

    #[test]
    fn test_draw_text_marks_pixels() {
        let mut img = RgbImage::from_pixel(20, 10, Rgb([255, 255, 255]));
        draw_text(&mut img, 1, 1, "1", 1, Rgb([0, 0, 0]));
        let black = img.pixels().filter(|p| p.0 == [0, 0, 0]).count();
        assert!(black > 0, "glyph should set some pixels");
    }

    #[test]
    fn test_draw_text_clips_out_of_bounds() {
        let mut img = RgbImage::from_pixel(4, 4, Rgb([255, 255, 255]));
        // Entirely off-canvas anchors must not panic.
        draw_text(&mut img, -100, -100, "clip", 1, Rgb([0, 0, 0]));
        draw_text_rotated45(&mut img, 200, 200, "clip", 1, Rgb([0, 0, 0]));
        draw_text_rotated90(&mut img, 200, -50, "clip", 1, Rgb([0, 0, 0]));
    }

    #[test]
    fn test_unknown_glyph_falls_back() {
        // Same pixel footprint as '?'
        let mut a = RgbImage::from_pixel(10, 10, Rgb([255, 255, 255]));
        let mut b = RgbImage::from_pixel(10, 10, Rgb([255, 255, 255]));
        draw_text(&mut a, 0, 0, "\u{00e9}", 1, Rgb([0, 0, 0]));
        draw_text(&mut b, 0, 0, "?", 1, Rgb([0, 0, 0]));
        assert_eq!(a.as_raw(), b.as_raw());
    }
}
