use signcam_base::{
    CAPTURE_HEIGHT, CAPTURE_WIDTH, LumaFrame, OutputTensor, TENSOR_HEIGHT, TENSOR_WIDTH,
};

/// Nearest-neighbor resize of a row-major single-channel image.
///
/// Output pixel `(x, y)` copies source pixel
/// `(x * src_width / dst_width, y * src_height / dst_height)` using floor
/// division. No interpolation.
///
/// # Panics
///
/// Panics if a buffer length disagrees with its declared dimensions, or if
/// the source is empty while the destination is not.
pub fn resize_nearest(
    src: &[u8],
    src_width: usize,
    src_height: usize,
    dst: &mut [u8],
    dst_width: usize,
    dst_height: usize,
) {
    assert_eq!(src.len(), src_width * src_height, "source length mismatch");
    assert_eq!(dst.len(), dst_width * dst_height, "destination length mismatch");
    if dst.is_empty() {
        return;
    }
    assert!(!src.is_empty(), "cannot resample from an empty source");

    for (y, dst_row) in dst.chunks_exact_mut(dst_width).enumerate() {
        let src_y = y * src_height / dst_height;
        let src_row = &src[src_y * src_width..(src_y + 1) * src_width];
        for (x, out) in dst_row.iter_mut().enumerate() {
            *out = src_row[x * src_width / dst_width];
        }
    }
}

/// Downsample a luma sensor frame to the model input tensor.
pub fn resize_to_tensor(luma: &LumaFrame, tensor: &mut OutputTensor) {
    resize_nearest(
        luma,
        CAPTURE_WIDTH,
        CAPTURE_HEIGHT,
        tensor,
        TENSOR_WIDTH,
        TENSOR_HEIGHT,
    );
}
