use crate::field::MotionField;
use crate::interpolation::{interpolate_pixel, InterpolationMode};
use crate::parallel;
use mocomp_frame::{Frame, FrameError};

/// Reconstruct a frame by motion-compensated warping of the previous frame.
///
/// For each output pixel, looks up the motion cell of the containing block
/// (nearest block, not interpolated across cells), offsets the pixel
/// position by the cell's vector and samples the previous frame there with
/// border clamping. The output alpha channel is forced to fully opaque.
///
/// The result is a predictive approximation of the current frame built from
/// the previous frame plus estimated motion.
///
/// # Arguments
///
/// * `previous` - The previous RGBA frame to sample from.
/// * `field` - The motion field estimated for the frame pair.
/// * `dst` - The output RGBA frame, same size as `previous`.
/// * `interpolation` - The interpolation mode to use when sampling.
///
/// # Errors
///
/// Fails if the frames' dimensions differ, or if either dimension is zero.
pub fn compensate(
    previous: &Frame<f32, 4>,
    field: &MotionField,
    dst: &mut Frame<f32, 4>,
    interpolation: InterpolationMode,
) -> Result<(), FrameError> {
    if previous.size() != dst.size() {
        return Err(FrameError::InvalidFrameSize(
            previous.width(),
            previous.height(),
            dst.width(),
            dst.height(),
        ));
    }
    if previous.width() == 0 || previous.height() == 0 {
        return Err(FrameError::ZeroSizedFrame(previous.width(), previous.height()));
    }

    log::debug!(
        "compensating {}x{} frame from a {}x{} field",
        previous.width(),
        previous.height(),
        field.cols(),
        field.rows()
    );

    parallel::par_iter_rows_indexed(dst, |x, y, dst_pixel| {
        let cell = field.cell_for_pixel(x, y);
        let u = x as f32 + cell.vector.x;
        let v = y as f32 + cell.vector.y;
        let pixel = interpolate_pixel(previous, u, v, interpolation);
        dst_pixel.copy_from_slice(&pixel);
        dst_pixel[3] = 1.0;
    });

    Ok(())
}
