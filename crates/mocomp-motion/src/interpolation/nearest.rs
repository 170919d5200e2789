use mocomp_frame::Frame;

/// Kernel for nearest neighbor interpolation
///
/// # Arguments
///
/// * `frame` - The input frame container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The nearest pixel values. Coordinates outside the frame are clamped to
/// the border.
pub(crate) fn nearest_neighbor_interpolation<const C: usize>(
    frame: &Frame<f32, C>,
    u: f32,
    v: f32,
) -> [f32; C] {
    let (rows, cols) = (frame.rows(), frame.cols());

    let iu = u.round().clamp(0.0, (cols - 1) as f32) as usize;
    let iv = v.round().clamp(0.0, (rows - 1) as f32) as usize;

    let base = (iv * cols + iu) * C;

    let mut pixel = [0.0; C];
    unsafe {
        let src = frame.as_slice().get_unchecked(base..base + C);
        pixel.copy_from_slice(src);
    }

    pixel
}
