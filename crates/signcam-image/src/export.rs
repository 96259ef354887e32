use crate::ImageError;
use crates_image::ImageEncoder;
use crates_image::codecs::png::PngEncoder;
use signcam_base::{OutputTensor, TENSOR_HEIGHT, TENSOR_WIDTH};
use std::path::Path;

// Darkest to brightest
const ASCII_RAMP: &[u8] = b" .:-=+*#%@";

/// Encode a tensor as an 8-bit grayscale PNG.
pub fn encode_png(tensor: &OutputTensor) -> Result<Vec<u8>, ImageError> {
    let mut buffer = Vec::new();
    PngEncoder::new(&mut buffer).write_image(
        tensor,
        TENSOR_WIDTH as u32,
        TENSOR_HEIGHT as u32,
        crates_image::ExtendedColorType::L8,
    )?;
    Ok(buffer)
}

/// Write a tensor to `path` as a grayscale PNG.
pub fn save_png(tensor: &OutputTensor, path: impl AsRef<Path>) -> Result<(), ImageError> {
    let png = encode_png(tensor)?;
    std::fs::write(path, png)?;
    Ok(())
}

/// Render a tensor as text, one line per row, for terminal previews.
pub fn tensor_to_ascii(tensor: &OutputTensor) -> String {
    let mut out = String::with_capacity((TENSOR_WIDTH + 1) * TENSOR_HEIGHT);
    for row in tensor.chunks_exact(TENSOR_WIDTH) {
        for &v in row {
            let idx = v as usize * ASCII_RAMP.len() / 256;
            out.push(ASCII_RAMP[idx] as char);
        }
        out.push('\n');
    }
    out
}
