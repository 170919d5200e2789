use crate::parallel;
use crate::search::{match_block, SearchParams};
use mocomp_frame::{Frame, FrameError};

/// A continuous 2D displacement in pixel units.
///
/// Maps a block of the current frame to its best-matching location in the
/// previous frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionVector {
    /// Horizontal displacement in pixels.
    pub x: f32,
    /// Vertical displacement in pixels.
    pub y: f32,
}

impl MotionVector {
    /// The zero displacement.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
}

/// The matching result for one block.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionCell {
    /// Displacement into the previous frame.
    pub vector: MotionVector,
    /// The SAD cost achieved by the vector; lower is a better match.
    pub residual: f32,
}

/// A per-block grid of motion vectors and residuals for one frame pair.
///
/// Cells are stored row-major matching the block grid. A field is produced
/// fresh per frame pair and never cached or merged across invocations.
#[derive(Debug, Clone)]
pub struct MotionField {
    cols: usize,
    rows: usize,
    block_width: usize,
    block_height: usize,
    cells: Vec<MotionCell>,
}

impl MotionField {
    /// Create a motion field from a row-major cell grid.
    ///
    /// # Errors
    ///
    /// If the grid has a zero dimension or the cell count does not match
    /// `cols * rows`, an error is returned.
    pub fn new(
        cols: usize,
        rows: usize,
        block_width: usize,
        block_height: usize,
        cells: Vec<MotionCell>,
    ) -> Result<Self, FrameError> {
        if cols == 0 || rows == 0 {
            return Err(FrameError::ZeroSizedFrame(cols, rows));
        }
        if cells.len() != cols * rows {
            return Err(FrameError::InvalidChannelShape(cells.len(), cols * rows));
        }

        Ok(Self {
            cols,
            rows,
            block_width,
            block_height,
            cells,
        })
    }

    /// Create a motion field with every cell set to the given value.
    pub fn from_size_val(
        cols: usize,
        rows: usize,
        block_width: usize,
        block_height: usize,
        cell: MotionCell,
    ) -> Result<Self, FrameError> {
        Self::new(cols, rows, block_width, block_height, vec![cell; cols * rows])
    }

    /// Number of block columns in the grid.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of block rows in the grid.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Width of a block in pixels.
    pub fn block_width(&self) -> usize {
        self.block_width
    }

    /// Height of a block in pixels.
    pub fn block_height(&self) -> usize {
        self.block_height
    }

    /// Total number of cells in the grid.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid holds no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get the cell at the given block coordinates, or `None` if out of bounds.
    pub fn get(&self, block_x: usize, block_y: usize) -> Option<&MotionCell> {
        if block_x >= self.cols || block_y >= self.rows {
            return None;
        }
        self.cells.get(block_y * self.cols + block_x)
    }

    /// Get the cell whose block contains the given pixel coordinate.
    ///
    /// Pixels past the grid extent map to the last block in that direction,
    /// mirroring the boundary clamping applied while sampling.
    pub fn cell_for_pixel(&self, x: usize, y: usize) -> &MotionCell {
        let block_x = (x / self.block_width).min(self.cols - 1);
        let block_y = (y / self.block_height).min(self.rows - 1);
        &self.cells[block_y * self.cols + block_x]
    }

    /// Get the cells as a flat row-major slice.
    pub fn as_slice(&self) -> &[MotionCell] {
        &self.cells
    }

    /// Export the motion vectors as a flat row-major buffer of (x, y) pairs.
    ///
    /// This is the externally consumed form of the field; residuals are kept
    /// internal.
    pub fn vectors(&self) -> Vec<[f32; 2]> {
        self.cells
            .iter()
            .map(|cell| [cell.vector.x, cell.vector.y])
            .collect()
    }
}

/// Estimate the motion field between two frames.
///
/// Runs the block matching search independently for every block of the
/// current frame, in parallel. Each block's search only reads the two input
/// frames and writes its own cell, so no synchronization beyond the final
/// join is needed; the returned field is always fully populated.
///
/// Matching compares channel 0 of the frames, so callers typically pass
/// luminance planes (see `crate::color::gray_from_rgb`).
///
/// # Errors
///
/// Fails if the frames' dimensions differ, or if either dimension is zero.
///
/// # Example
///
/// ```
/// use mocomp_frame::{Frame, FrameSize};
/// use mocomp_motion::field::estimate_motion;
/// use mocomp_motion::search::SearchParams;
///
/// let size = FrameSize {
///     width: 32,
///     height: 32,
/// };
/// let frame = Frame::<f32, 1>::from_size_val(size, 0.5).unwrap();
///
/// let params = SearchParams {
///     block_width: 16,
///     block_height: 16,
///     search_radius: 4.0,
///     search_step: 1.0,
/// };
/// let field = estimate_motion(&frame, &frame, &params).unwrap();
///
/// assert_eq!(field.cols(), 2);
/// assert_eq!(field.rows(), 2);
/// ```
pub fn estimate_motion<const C: usize>(
    current: &Frame<f32, C>,
    previous: &Frame<f32, C>,
    params: &SearchParams,
) -> Result<MotionField, FrameError> {
    if current.size() != previous.size() {
        return Err(FrameError::InvalidFrameSize(
            current.width(),
            current.height(),
            previous.width(),
            previous.height(),
        ));
    }
    if current.width() == 0 || current.height() == 0 {
        return Err(FrameError::ZeroSizedFrame(current.width(), current.height()));
    }

    let (cols, rows) = params.grid_size(current.size());
    log::debug!("estimating motion field over {cols}x{rows} blocks");

    let mut cells = vec![MotionCell::default(); cols * rows];
    parallel::par_iter_cells(&mut cells, cols, |block_x, block_y, cell| {
        *cell = match_block(current, previous, block_x, block_y, params);
    });

    MotionField::new(cols, rows, params.block_width, params.block_height, cells)
}
