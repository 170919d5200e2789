#![deny(missing_docs)]
//! Frame types and traits for motion estimation and compensation

/// frame representation for video processing purposes.
pub mod frame;

/// Error types for the frame module.
pub mod error;

pub use crate::error::FrameError;
pub use crate::frame::{Frame, FrameDtype, FrameSize};
