use crate::parallel;
use mocomp_frame::{Frame, FrameError};

/// Define the RGB weights for the grayscale conversion.
const RW: f64 = 0.299;
const GW: f64 = 0.587;
const BW: f64 = 0.114;

/// Convert an RGB frame to grayscale using the formula:
///
/// Y = 0.299 * R + 0.587 * G + 0.114 * B
///
/// The resulting single-channel frame is the luminance plane the motion
/// search matches on.
///
/// # Arguments
///
/// * `src` - The input RGB frame.
/// * `dst` - The output grayscale frame.
///
/// Precondition: the input and output frames must have the same size.
///
/// # Example
///
/// ```
/// use mocomp_frame::{Frame, FrameSize};
/// use mocomp_motion::color::gray_from_rgb;
///
/// let frame = Frame::<f32, 3>::new(
///     FrameSize {
///         width: 4,
///         height: 5,
///     },
///     vec![0f32; 4 * 5 * 3],
/// )
/// .unwrap();
///
/// let mut gray = Frame::<f32, 1>::from_size_val(frame.size(), 0.0).unwrap();
///
/// gray_from_rgb(&frame, &mut gray).unwrap();
/// assert_eq!(gray.num_channels(), 1);
/// ```
pub fn gray_from_rgb<T>(src: &Frame<T, 3>, dst: &mut Frame<T, 1>) -> Result<(), FrameError>
where
    T: Send + Sync + num_traits::Float,
{
    gray_impl(src, dst)
}

/// Convert an RGBA frame to grayscale, ignoring the alpha channel.
///
/// Same weights as [`gray_from_rgb`]; decoded video frames commonly arrive
/// with an alpha channel attached.
pub fn gray_from_rgba<T>(src: &Frame<T, 4>, dst: &mut Frame<T, 1>) -> Result<(), FrameError>
where
    T: Send + Sync + num_traits::Float,
{
    gray_impl(src, dst)
}

fn gray_impl<T, const C: usize>(src: &Frame<T, C>, dst: &mut Frame<T, 1>) -> Result<(), FrameError>
where
    T: Send + Sync + num_traits::Float,
{
    if src.size() != dst.size() {
        return Err(FrameError::InvalidFrameSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    let rw = T::from(RW).ok_or(FrameError::CastError)?;
    let gw = T::from(GW).ok_or(FrameError::CastError)?;
    let bw = T::from(BW).ok_or(FrameError::CastError)?;

    // parallelize the grayscale conversion by rows
    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        let r = src_pixel[0];
        let g = src_pixel[1];
        let b = src_pixel[2];
        dst_pixel[0] = rw * r + gw * g + bw * b;
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mocomp_frame::{Frame, FrameError, FrameSize};

    #[test]
    fn gray_weights() -> Result<(), FrameError> {
        let size = FrameSize {
            width: 1,
            height: 1,
        };
        let src = Frame::<f32, 3>::new(size, vec![1.0, 1.0, 1.0])?;
        let mut gray = Frame::<f32, 1>::from_size_val(size, 0.0)?;

        gray_from_rgb(&src, &mut gray)?;
        approx::assert_relative_eq!(gray.as_slice()[0], 1.0, epsilon = 1e-6);

        Ok(())
    }

    #[test]
    fn gray_from_rgba_ignores_alpha() -> Result<(), FrameError> {
        let size = FrameSize {
            width: 2,
            height: 1,
        };
        let src = Frame::<f32, 4>::new(
            size,
            vec![0.5, 0.5, 0.5, 0.0, 0.5, 0.5, 0.5, 1.0],
        )?;
        let mut gray = Frame::<f32, 1>::from_size_val(size, 0.0)?;

        gray_from_rgba(&src, &mut gray)?;
        approx::assert_relative_eq!(gray.as_slice()[0], 0.5, epsilon = 1e-6);
        assert_eq!(gray.as_slice()[0], gray.as_slice()[1]);

        Ok(())
    }

    #[test]
    fn size_mismatch_is_rejected() -> Result<(), FrameError> {
        let src = Frame::<f32, 3>::from_size_val(
            FrameSize {
                width: 2,
                height: 2,
            },
            0.0,
        )?;
        let mut gray = Frame::<f32, 1>::from_size_val(
            FrameSize {
                width: 3,
                height: 2,
            },
            0.0,
        )?;

        assert!(gray_from_rgb(&src, &mut gray).is_err());

        Ok(())
    }
}
