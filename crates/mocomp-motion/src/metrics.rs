//! Frame quality and similarity metrics.
//!
//! Used to measure how closely a motion-compensated reconstruction matches
//! the true current frame.

use mocomp_frame::{Frame, FrameError};

/// Compute the mean squared error (MSE) between two frames.
///
/// The MSE is defined as:
///
/// $ MSE = \frac{1}{n} \sum_{i=1}^{n} (I_1 - I_2)^2 $
///
/// where `I_1` and `I_2` are the two frames and `n` is the number of samples.
///
/// # Arguments
///
/// * `frame1` - The first input frame with shape (H, W, C).
/// * `frame2` - The second input frame with shape (H, W, C).
///
/// # Example
///
/// ```
/// use mocomp_frame::{Frame, FrameSize};
/// use mocomp_motion::metrics::mse;
///
/// let frame = Frame::<f32, 1>::new(
///     FrameSize {
///         width: 2,
///         height: 3,
///     },
///     vec![0f32, 1.0, 2.0, 3.0, 4.0, 5.0],
/// )
/// .unwrap();
///
/// let mse = mse(&frame, &frame).unwrap();
/// assert_eq!(mse, 0f32);
/// ```
pub fn mse<const C: usize>(
    frame1: &Frame<f32, C>,
    frame2: &Frame<f32, C>,
) -> Result<f32, FrameError> {
    if frame1.size() != frame2.size() {
        return Err(FrameError::InvalidFrameSize(
            frame1.width(),
            frame1.height(),
            frame2.width(),
            frame2.height(),
        ));
    }

    let mse = frame1
        .as_slice()
        .iter()
        .zip(frame2.as_slice().iter())
        .map(|(a, b)| (a - b).powi(2))
        .sum::<f32>();

    Ok(mse / (frame1.numel() as f32))
}

/// Compute the peak signal-to-noise ratio (PSNR) between two frames.
///
/// The PSNR is defined as:
///
/// $ PSNR = 20 \log_{10} \left( \frac{MAX}{\sqrt{MSE}} \right) $
///
/// where `MAX` is the maximum possible sample value and `MSE` is the mean
/// squared error.
///
/// # Arguments
///
/// * `frame1` - The first input frame with shape (H, W, C).
/// * `frame2` - The second input frame with shape (H, W, C).
/// * `max_value` - The maximum possible sample value.
pub fn psnr<const C: usize>(
    frame1: &Frame<f32, C>,
    frame2: &Frame<f32, C>,
    max_value: f32,
) -> Result<f32, FrameError> {
    let mse = mse(frame1, frame2)?;

    Ok(20.0 * (max_value / mse.sqrt()).log10())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mocomp_frame::{Frame, FrameError, FrameSize};

    #[test]
    fn test_mse() -> Result<(), FrameError> {
        let size = FrameSize {
            width: 2,
            height: 3,
        };
        let frame1 = Frame::<f32, 1>::new(size, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0])?;
        let frame2 = Frame::<f32, 1>::new(size, vec![5.0, 4.0, 3.0, 2.0, 1.0, 0.0])?;

        // squared differences: 25, 9, 1, 1, 9, 25
        let mse = mse(&frame1, &frame2)?;
        approx::assert_relative_eq!(mse, 70.0 / 6.0, epsilon = 1e-6);

        Ok(())
    }

    #[test]
    fn test_psnr() -> Result<(), FrameError> {
        let size = FrameSize {
            width: 1,
            height: 2,
        };
        let frame1 = Frame::<f32, 1>::new(size, vec![0.0, 0.0])?;
        let frame2 = Frame::<f32, 1>::new(size, vec![1.0, 1.0])?;

        // mse = 1, so psnr = 20 * log10(max)
        let psnr = psnr(&frame1, &frame2, 255.0)?;
        approx::assert_relative_eq!(psnr, 48.1308, epsilon = 1e-3);

        Ok(())
    }

    #[test]
    fn test_mse_size_mismatch() -> Result<(), FrameError> {
        let frame1 = Frame::<f32, 1>::from_size_val(
            FrameSize {
                width: 2,
                height: 2,
            },
            0.0,
        )?;
        let frame2 = Frame::<f32, 1>::from_size_val(
            FrameSize {
                width: 3,
                height: 2,
            },
            0.0,
        )?;

        assert!(mse(&frame1, &frame2).is_err());

        Ok(())
    }
}
