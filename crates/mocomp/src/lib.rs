//! Block-matching motion estimation and compensation in Rust.

#[doc(inline)]
pub use mocomp_frame as frame;

#[doc(inline)]
pub use mocomp_motion as motion;
