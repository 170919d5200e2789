use std::collections::HashMap;

use mocomp::frame::{Frame, FrameDtype, FrameSize};
use mocomp::motion::color::gray_from_rgba;
use mocomp::motion::compensate::compensate;
use mocomp::motion::field::estimate_motion;
use mocomp::motion::interpolation::InterpolationMode;
use mocomp::motion::metrics::{mse, psnr};
use mocomp::motion::overlay::{draw_overlay, overlay_segments};
use mocomp::motion::search::SearchParams;

/// Deterministic noise-like texture so the frame pair has enough contrast
/// for matching.
fn texture(x: i64, y: i64) -> f32 {
    let h = ((x + 256) as u32)
        .wrapping_mul(2654435761)
        .wrapping_add(((y + 256) as u32).wrapping_mul(40503));
    ((h >> 16) % 61) as f32 / 60.0
}

/// Build an RGBA frame holding the scene translated by (dx, dy).
fn scene(size: FrameSize, dx: i64, dy: i64) -> Result<Frame<f32, 4>, Box<dyn std::error::Error>> {
    let mut data = Vec::with_capacity(size.width * size.height * 4);
    for y in 0..size.height as i64 {
        for x in 0..size.width as i64 {
            let v = texture(x - dx, y - dy);
            data.extend_from_slice(&[v, v * 0.5, 1.0 - v, 1.0]);
        }
    }
    Ok(Frame::new(size, data)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let size = FrameSize {
        width: 128,
        height: 96,
    };

    // synthetic pair: the whole scene moves by (5, -3) between the frames
    let current = scene(size, 0, 0)?;
    let previous = scene(size, 5, -3)?;

    let mut current_luma = Frame::<f32, 1>::from_size_val(size, 0.0)?;
    let mut previous_luma = Frame::<f32, 1>::from_size_val(size, 0.0)?;
    gray_from_rgba(&current, &mut current_luma)?;
    gray_from_rgba(&previous, &mut previous_luma)?;

    let params = SearchParams {
        block_width: 16,
        block_height: 16,
        search_radius: 8.0,
        search_step: 1.0,
    };

    let field = estimate_motion(&current_luma, &previous_luma, &params)?;
    log::info!("estimated {}x{} motion field", field.cols(), field.rows());

    // tally the vectors to find the dominant motion
    let mut counts: HashMap<(i64, i64), usize> = HashMap::new();
    for [x, y] in field.vectors() {
        *counts.entry((x as i64, y as i64)).or_default() += 1;
    }
    let (dominant, blocks) = counts
        .iter()
        .max_by_key(|(_, count)| **count)
        .expect("field is never empty");
    println!(
        "dominant motion vector: ({}, {}) over {}/{} blocks",
        dominant.0,
        dominant.1,
        blocks,
        field.len()
    );

    let vertices = overlay_segments(&field);
    println!("overlay: {} vertices", vertices.len());

    // rasterize the overlay onto a grayscale render of the current frame
    let mut canvas_data = Vec::with_capacity(size.width * size.height * 3);
    for &v in current_luma.as_slice() {
        let g = u8::from_f32(v * 255.0);
        canvas_data.extend_from_slice(&[g, g, g]);
    }
    let mut canvas = Frame::<u8, 3>::new(size, canvas_data)?;
    draw_overlay(&mut canvas, &field, [0, 255, 0], 1);
    let touched = canvas
        .as_slice()
        .chunks_exact(3)
        .filter(|pixel| *pixel == [0, 255, 0])
        .count();
    println!("overlay raster: {touched} pixels touched");

    let mut reconstructed = Frame::<f32, 4>::from_size_val(size, 0.0)?;
    compensate(
        &previous,
        &field,
        &mut reconstructed,
        InterpolationMode::Bilinear,
    )?;

    let copy_mse = mse(&previous, &current)?;
    let comp_mse = mse(&reconstructed, &current)?;
    println!("plain copy mse: {copy_mse:.6}");
    println!(
        "compensated mse: {comp_mse:.6} (psnr {:.2} dB)",
        psnr(&reconstructed, &current, 1.0)?
    );

    Ok(())
}
