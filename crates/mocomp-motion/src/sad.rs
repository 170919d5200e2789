use crate::interpolation::bilinear_interpolation;
use mocomp_frame::Frame;

/// Compute the sum of absolute differences between two frame patches.
///
/// Compares a `block_width` x `block_height` patch of the current frame
/// anchored at `anchor` against a patch of the previous frame anchored at
/// `candidate`, on channel 0 (luminance). Both patches are read with
/// bilinear sampling and border clamping, so the anchor coordinates may be
/// fractional and may extend past the frame borders.
///
/// # Arguments
///
/// * `current` - The current frame.
/// * `previous` - The previous frame.
/// * `anchor` - Top-left corner of the patch in the current frame.
/// * `candidate` - Top-left corner of the patch in the previous frame.
/// * `block_width` - Patch width in pixels.
/// * `block_height` - Patch height in pixels.
///
/// # Returns
///
/// The accumulated absolute difference; 0 for identical patches.
///
/// # Example
///
/// ```
/// use mocomp_frame::{Frame, FrameSize};
/// use mocomp_motion::sad::patch_sad;
///
/// let frame = Frame::<f32, 1>::new(
///     FrameSize {
///         width: 4,
///         height: 4,
///     },
///     (0..16).map(|x| x as f32).collect(),
/// )
/// .unwrap();
///
/// let cost = patch_sad(&frame, &frame, [0.0, 0.0], [0.0, 0.0], 4, 4);
/// assert_eq!(cost, 0.0);
/// ```
pub fn patch_sad<const C: usize>(
    current: &Frame<f32, C>,
    previous: &Frame<f32, C>,
    anchor: [f32; 2],
    candidate: [f32; 2],
    block_width: usize,
    block_height: usize,
) -> f32 {
    let mut sum = 0.0;
    for y in 0..block_height {
        for x in 0..block_width {
            let a = bilinear_interpolation(current, anchor[0] + x as f32, anchor[1] + y as f32);
            let b =
                bilinear_interpolation(previous, candidate[0] + x as f32, candidate[1] + y as f32);
            sum += (a[0] - b[0]).abs();
        }
    }
    sum
}
