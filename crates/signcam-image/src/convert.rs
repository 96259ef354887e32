use signcam_base::{LumaFrame, RawFrame};

const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Converts one RGB565 pixel to 8-bit luma.
///
/// Channels are extracted as red = bits 15..11, green = bits 10..5,
/// blue = bits 4..0, and scaled to 0..=255 with truncating integer division
/// by the field maximum (31 or 63). The weighted sum
/// `0.299 R + 0.587 G + 0.114 B` is evaluated in `f32`, left to right, and
/// truncated.
///
/// White (`0xFFFF`) maps to 255 and black to 0.
#[inline]
pub fn rgb565_to_luma(pixel: u16) -> u8 {
    let r = (pixel >> 11) & 0x1F;
    let g = (pixel >> 5) & 0x3F;
    let b = pixel & 0x1F;

    let r = (r * 255 / 31) as f32;
    let g = (g * 255 / 63) as f32;
    let b = (b * 255 / 31) as f32;

    (LUMA_R * r + LUMA_G * g + LUMA_B * b) as u8
}

/// Converts `src` RGB565 pixels to luma in `dst`, index for index.
///
/// # Panics
///
/// Panics if `src` and `dst` differ in length.
pub fn rgb565_to_luma_slice(src: &[u16], dst: &mut [u8]) {
    assert_eq!(
        src.len(),
        dst.len(),
        "luma buffer must match source pixel count"
    );
    for (out, &px) in dst.iter_mut().zip(src) {
        *out = rgb565_to_luma(px);
    }
}

/// Converts a full sensor frame to luma.
pub fn convert_frame(raw: &RawFrame, luma: &mut LumaFrame) {
    rgb565_to_luma_slice(raw, luma);
}
