use crate::draw::draw_line;
use crate::field::MotionField;
use mocomp_frame::Frame;

/// A single endpoint of a motion overlay line segment.
///
/// Segments are consumed by an external line-rendering stage; the endpoint
/// flag lets it style the two ends differently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayVertex {
    /// Position in block-grid units.
    pub position: [f32; 2],
    /// 0 for the segment start (block center), 1 for the end (predicted
    /// source point).
    pub endpoint: u32,
}

/// Derive the line-segment list visualizing a motion field.
///
/// Emits exactly two vertices per block, ordered row-major by block: the
/// start vertex at the block's center in block-grid units, and the end
/// vertex displaced against the block's motion vector (converted from pixel
/// units to block-grid units), pointing at the matched location in the
/// previous frame.
pub fn overlay_segments(field: &MotionField) -> Vec<OverlayVertex> {
    let block_width = field.block_width() as f32;
    let block_height = field.block_height() as f32;

    let cells = field.as_slice();
    let mut vertices = Vec::with_capacity(2 * field.len());
    for block_y in 0..field.rows() {
        for block_x in 0..field.cols() {
            let cell = &cells[block_y * field.cols() + block_x];
            let start = [block_x as f32 + 0.5, block_y as f32 + 0.5];
            let end = [
                start[0] - cell.vector.x / block_width,
                start[1] - cell.vector.y / block_height,
            ];
            vertices.push(OverlayVertex {
                position: start,
                endpoint: 0,
            });
            vertices.push(OverlayVertex {
                position: end,
                endpoint: 1,
            });
        }
    }
    vertices
}

/// Rasterize the motion overlay onto a frame for debug visualization.
///
/// Converts each segment from block-grid units to pixel units and draws it
/// with Bresenham lines. Rendering for presentation belongs to an external
/// pipeline; this helper exists so a field can be inspected without one.
pub fn draw_overlay<const C: usize>(
    img: &mut Frame<u8, C>,
    field: &MotionField,
    color: [u8; C],
    thickness: usize,
) {
    let block_width = field.block_width() as f32;
    let block_height = field.block_height() as f32;

    for segment in overlay_segments(field).chunks_exact(2) {
        let p0 = (
            (segment[0].position[0] * block_width) as i64,
            (segment[0].position[1] * block_height) as i64,
        );
        let p1 = (
            (segment[1].position[0] * block_width) as i64,
            (segment[1].position[1] * block_height) as i64,
        );
        draw_line(img, p0, p1, color, thickness);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{MotionCell, MotionField, MotionVector};
    use mocomp_frame::{FrameError, FrameSize};

    #[test]
    fn emits_two_vertices_per_block() -> Result<(), FrameError> {
        // the reference frame layout: 1280x720 with 16x16 blocks
        let field = MotionField::from_size_val(80, 45, 16, 16, MotionCell::default())?;

        let vertices = overlay_segments(&field);
        assert_eq!(vertices.len(), 7200);

        for pair in vertices.chunks_exact(2) {
            assert_eq!(pair[0].endpoint, 0);
            assert_eq!(pair[1].endpoint, 1);
        }

        Ok(())
    }

    #[test]
    fn segments_start_at_block_centers() -> Result<(), FrameError> {
        let field = MotionField::from_size_val(2, 2, 16, 16, MotionCell::default())?;

        let vertices = overlay_segments(&field);
        assert_eq!(vertices[0].position, [0.5, 0.5]);
        assert_eq!(vertices[2].position, [1.5, 0.5]);
        assert_eq!(vertices[4].position, [0.5, 1.5]);
        assert_eq!(vertices[6].position, [1.5, 1.5]);

        Ok(())
    }

    #[test]
    fn segment_ends_oppose_the_vector_in_grid_units() -> Result<(), FrameError> {
        let cell = MotionCell {
            vector: MotionVector { x: 8.0, y: -4.0 },
            residual: 0.0,
        };
        let field = MotionField::from_size_val(1, 1, 16, 16, cell)?;

        let vertices = overlay_segments(&field);
        assert_eq!(vertices[0].position, [0.5, 0.5]);
        assert_eq!(vertices[1].position, [0.0, 0.75]);

        Ok(())
    }

    #[test]
    fn draw_overlay_marks_moving_blocks() -> Result<(), FrameError> {
        let cell = MotionCell {
            vector: MotionVector { x: 8.0, y: 0.0 },
            residual: 0.0,
        };
        let field = MotionField::from_size_val(1, 1, 16, 16, cell)?;

        let size = FrameSize {
            width: 16,
            height: 16,
        };
        let mut img = mocomp_frame::Frame::<u8, 3>::from_size_val(size, 0)?;
        draw_overlay(&mut img, &field, [0, 255, 0], 1);

        // the segment runs from the block center (8, 8) back to (0, 8)
        assert_eq!(img.get([8, 8, 1]), Some(&255));
        assert_eq!(img.get([8, 0, 1]), Some(&255));

        Ok(())
    }
}
