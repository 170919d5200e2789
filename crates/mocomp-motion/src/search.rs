use crate::field::{MotionCell, MotionVector};
use crate::sad::patch_sad;
use mocomp_frame::{Frame, FrameSize};

/// Configuration for the block matching search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchParams {
    /// Width of a block in pixels.
    pub block_width: usize,
    /// Height of a block in pixels.
    pub block_height: usize,
    /// Maximum displacement searched in each direction, in pixels.
    pub search_radius: f32,
    /// Spacing between evaluated displacements, in pixels.
    pub search_step: f32,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            block_width: 16,
            block_height: 16,
            search_radius: 32.0,
            search_step: 1.0,
        }
    }
}

impl SearchParams {
    /// Number of blocks covering a frame of the given size, per axis.
    ///
    /// A frame that is not a multiple of the block size gets one extra
    /// partially-covered block per axis; a frame smaller than one block is
    /// covered by a single boundary-clamped block.
    pub fn grid_size(&self, size: FrameSize) -> (usize, usize) {
        (
            size.width.div_ceil(self.block_width),
            size.height.div_ceil(self.block_height),
        )
    }

    /// Number of displacements evaluated per axis when scanning the window.
    pub(crate) fn steps_per_axis(&self) -> usize {
        (2.0 * self.search_radius / self.search_step).floor() as usize + 1
    }
}

/// Find the best motion vector for one block with an exhaustive search.
///
/// Evaluates the SAD cost of every displacement `(dx, dy)` with `dx`, `dy`
/// ranging from `-search_radius` to `+search_radius` in increments of
/// `search_step` (`dx` in the outer loop, `dy` in the inner loop), against
/// the baseline cost of the zero displacement.
///
/// A zero baseline returns immediately (static region), as does a zero cost
/// found during the scan; no other displacement can be better. Otherwise the
/// earliest displacement achieving the lowest cost is returned with that
/// cost as the residual. The zero-displacement baseline seeds the best
/// candidate, so the residual is never worse than the baseline and ties are
/// broken toward the earlier candidate in scan order.
pub fn match_block<const C: usize>(
    current: &Frame<f32, C>,
    previous: &Frame<f32, C>,
    block_x: usize,
    block_y: usize,
    params: &SearchParams,
) -> MotionCell {
    let anchor = [
        (block_x * params.block_width) as f32,
        (block_y * params.block_height) as f32,
    ];

    let baseline = patch_sad(
        current,
        previous,
        anchor,
        anchor,
        params.block_width,
        params.block_height,
    );
    if baseline == 0.0 {
        return MotionCell {
            vector: MotionVector::ZERO,
            residual: 0.0,
        };
    }

    let mut best = MotionCell {
        vector: MotionVector::ZERO,
        residual: baseline,
    };

    let radius = params.search_radius;
    let step = params.search_step;
    // offsets derive from the step index, not from accumulated addition
    let steps = params.steps_per_axis();

    for i in 0..steps {
        let dx = -radius + i as f32 * step;
        for j in 0..steps {
            let dy = -radius + j as f32 * step;
            let candidate = [anchor[0] + dx, anchor[1] + dy];
            let sad = patch_sad(
                current,
                previous,
                anchor,
                candidate,
                params.block_width,
                params.block_height,
            );
            if sad < best.residual {
                best = MotionCell {
                    vector: MotionVector { x: dx, y: dy },
                    residual: sad,
                };
                if sad == 0.0 {
                    return best;
                }
            }
        }
    }

    best
}
