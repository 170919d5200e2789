use mocomp::frame::{Frame, FrameError, FrameSize};
use mocomp::motion::compensate::compensate;
use mocomp::motion::field::{estimate_motion, MotionVector};
use mocomp::motion::interpolation::InterpolationMode;
use mocomp::motion::metrics::mse;
use mocomp::motion::overlay::overlay_segments;
use mocomp::motion::search::SearchParams;

/// Deterministic noise-like texture, defined on all of Z^2 so frames can be
/// filled with a translated copy of the same scene.
fn texture(x: i64, y: i64) -> f32 {
    let h = ((x + 128) as u32)
        .wrapping_mul(2654435761)
        .wrapping_add(((y + 128) as u32).wrapping_mul(40503));
    ((h >> 16) % 61) as f32
}

fn luma_frame(size: FrameSize, dx: i64, dy: i64) -> Result<Frame<f32, 1>, FrameError> {
    let mut data = Vec::with_capacity(size.width * size.height);
    for y in 0..size.height as i64 {
        for x in 0..size.width as i64 {
            data.push(texture(x - dx, y - dy));
        }
    }
    Frame::new(size, data)
}

fn rgba_frame(size: FrameSize, dx: i64, dy: i64) -> Result<Frame<f32, 4>, FrameError> {
    let mut data = Vec::with_capacity(size.width * size.height * 4);
    for y in 0..size.height as i64 {
        for x in 0..size.width as i64 {
            let v = texture(x - dx, y - dy) / 60.0;
            data.extend_from_slice(&[v, v * 0.5, 1.0 - v, 1.0]);
        }
    }
    Frame::new(size, data)
}

fn test_params() -> SearchParams {
    SearchParams {
        block_width: 16,
        block_height: 16,
        search_radius: 4.0,
        search_step: 1.0,
    }
}

#[test]
fn identical_solid_frames_produce_a_zero_field_and_exact_reconstruction(
) -> Result<(), FrameError> {
    let size = FrameSize {
        width: 64,
        height: 48,
    };
    let luma = Frame::<f32, 1>::from_size_val(size, 0.5)?;
    let rgba = Frame::<f32, 4>::from_size_val(size, 1.0)?;

    let field = estimate_motion(&luma, &luma, &test_params())?;
    for cell in field.as_slice() {
        assert_eq!(cell.vector, MotionVector::ZERO);
        assert_eq!(cell.residual, 0.0);
    }

    let mut reconstructed = Frame::<f32, 4>::from_size_val(size, 0.0)?;
    compensate(&rgba, &field, &mut reconstructed, InterpolationMode::Bilinear)?;
    assert_eq!(reconstructed.as_slice(), rgba.as_slice());

    Ok(())
}

#[test]
fn global_translation_is_recovered_for_interior_blocks() -> Result<(), FrameError> {
    let size = FrameSize {
        width: 64,
        height: 64,
    };
    // the previous frame holds the same scene translated by (3, -2)
    let current = luma_frame(size, 0, 0)?;
    let previous = luma_frame(size, 3, -2)?;

    let field = estimate_motion(&current, &previous, &test_params())?;
    assert_eq!((field.cols(), field.rows()), (4, 4));

    for block_y in 1..3 {
        for block_x in 1..3 {
            let cell = field.get(block_x, block_y).unwrap();
            assert_eq!(cell.vector, MotionVector { x: 3.0, y: -2.0 });
            assert_eq!(cell.residual, 0.0);
        }
    }

    Ok(())
}

#[test]
fn compensation_beats_a_plain_frame_copy() -> Result<(), FrameError> {
    let size = FrameSize {
        width: 64,
        height: 64,
    };
    let current_luma = luma_frame(size, 0, 0)?;
    let previous_luma = luma_frame(size, 3, -2)?;
    let current_rgba = rgba_frame(size, 0, 0)?;
    let previous_rgba = rgba_frame(size, 3, -2)?;

    let field = estimate_motion(&current_luma, &previous_luma, &test_params())?;

    let mut reconstructed = Frame::<f32, 4>::from_size_val(size, 0.0)?;
    compensate(
        &previous_rgba,
        &field,
        &mut reconstructed,
        InterpolationMode::Bilinear,
    )?;

    let copy_error = mse(&previous_rgba, &current_rgba)?;
    let compensated_error = mse(&reconstructed, &current_rgba)?;
    assert!(compensated_error < copy_error);

    Ok(())
}

#[test]
fn overlay_emits_two_vertices_per_estimated_block() -> Result<(), FrameError> {
    let size = FrameSize {
        width: 64,
        height: 48,
    };
    let current = luma_frame(size, 0, 0)?;
    let previous = luma_frame(size, 1, 0)?;

    let field = estimate_motion(&current, &previous, &test_params())?;
    let vertices = overlay_segments(&field);

    assert_eq!(vertices.len(), 2 * field.cols() * field.rows());
    for pair in vertices.chunks_exact(2) {
        assert_eq!(pair[0].endpoint, 0);
        assert_eq!(pair[1].endpoint, 1);
    }

    Ok(())
}

#[test]
fn frames_smaller_than_a_block_run_end_to_end() -> Result<(), FrameError> {
    let size = FrameSize {
        width: 8,
        height: 6,
    };
    let luma = luma_frame(size, 0, 0)?;
    let rgba = rgba_frame(size, 0, 0)?;

    let field = estimate_motion(&luma, &luma, &test_params())?;
    assert_eq!((field.cols(), field.rows()), (1, 1));

    let mut reconstructed = Frame::<f32, 4>::from_size_val(size, 0.0)?;
    compensate(&rgba, &field, &mut reconstructed, InterpolationMode::Bilinear)?;
    assert_eq!(reconstructed.as_slice(), rgba.as_slice());

    Ok(())
}
