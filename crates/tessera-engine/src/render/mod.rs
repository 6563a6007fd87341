//! Draw-stream dispatch.
//!
//! The dispatcher walks a `scene` command stream in order, tessellates the
//! shapes that need it and hands meshes and passthrough commands to a host
//! [`Surface`].
//!
//! Convention:
//! - geometry is in surface pixels (top-left origin, +Y down), after the
//!   configured scale factor is applied
//! - at most one clip region is active at a time

mod dispatch;
mod surface;

#[cfg(test)]
pub(crate) mod recording;

pub use dispatch::{DispatchConfig, Dispatcher, FrameStats};
pub use surface::Surface;
