/// An error type for frame construction and frame-based operations.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum FrameError {
    /// Error when the data length does not match the frame shape.
    #[error("Data length ({0}) does not match the frame size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when two frames do not have matching dimensions.
    #[error("Frame sizes do not match ({0}x{1} != {2}x{3})")]
    InvalidFrameSize(usize, usize, usize, usize),

    /// Error when a frame has a zero width or height.
    #[error("Frame has a zero-sized dimension ({0}x{1})")]
    ZeroSizedFrame(usize, usize),

    /// Error when the channel index is out of bounds.
    #[error("Channel index ({0}) is out of bounds ({1})")]
    ChannelIndexOutOfBounds(usize, usize),

    /// Error when the pixel data cannot be cast to the requested type.
    #[error("Failed to cast the pixel data")]
    CastError,
}
