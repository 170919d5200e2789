use super::bilinear::bilinear_interpolation;
use super::nearest::nearest_neighbor_interpolation;
use mocomp_frame::Frame;

/// Interpolation mode for frame sampling operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolationMode {
    /// Bilinear interpolation
    Bilinear,
    /// Nearest neighbor (point) interpolation
    Nearest,
}

/// Kernel for sampling a pixel value with border clamping
///
/// # Arguments
///
/// * `frame` - The input frame container with shape (height, width, C).
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `interpolation` - The interpolation mode to use.
///
/// # Returns
///
/// The sampled pixel values.
pub fn interpolate_pixel<const C: usize>(
    frame: &Frame<f32, C>,
    u: f32,
    v: f32,
    interpolation: InterpolationMode,
) -> [f32; C] {
    match interpolation {
        InterpolationMode::Bilinear => bilinear_interpolation(frame, u, v),
        InterpolationMode::Nearest => nearest_neighbor_interpolation(frame, u, v),
    }
}
