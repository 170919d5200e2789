use rayon::prelude::*;

use mocomp_frame::Frame;

/// Apply a function to each pixel in the frame in parallel.
pub fn par_iter_rows<T1, const C1: usize, T2, const C2: usize>(
    src: &Frame<T1, C1>,
    dst: &mut Frame<T2, C2>,
    f: impl Fn(&[T1], &mut [T2]) + Send + Sync,
) where
    T1: Send + Sync,
    T2: Send + Sync,
{
    let cols = src.cols();
    src.as_slice()
        .par_chunks_exact(C1 * cols)
        .zip(dst.as_slice_mut().par_chunks_exact_mut(C2 * cols))
        .for_each(|(src_chunk, dst_chunk)| {
            src_chunk
                .chunks_exact(C1)
                .zip(dst_chunk.chunks_exact_mut(C2))
                .for_each(|(src_pixel, dst_pixel)| {
                    f(src_pixel, dst_pixel);
                });
        });
}

/// Fill a row-major cell grid in parallel.
///
/// The function is invoked once per cell with the cell's grid coordinates;
/// the grid is fully written when the call returns.
pub fn par_iter_cells<T>(
    cells: &mut [T],
    cols: usize,
    f: impl Fn(usize, usize, &mut T) + Send + Sync,
) where
    T: Send,
{
    cells.par_iter_mut().enumerate().for_each(|(i, cell)| {
        f(i % cols, i / cols, cell);
    });
}

/// Apply a function to each output pixel in parallel with its coordinates.
pub fn par_iter_rows_indexed<const C: usize>(
    dst: &mut Frame<f32, C>,
    f: impl Fn(usize, usize, &mut [f32]) + Send + Sync,
) {
    let cols = dst.cols();
    dst.as_slice_mut()
        .par_chunks_exact_mut(C * cols)
        .enumerate()
        .for_each(|(y, dst_chunk)| {
            dst_chunk
                .chunks_exact_mut(C)
                .enumerate()
                .for_each(|(x, dst_pixel)| {
                    f(x, y, dst_pixel);
                });
        });
}
