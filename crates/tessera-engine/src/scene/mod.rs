//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands in paint order
//! - keep shape-specific payloads and push helpers in `scene::shapes`
//!
//! Commands are consumed strictly in insertion order; there is no sorting.

mod cmd;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::DrawList;
pub use shapes::{BorderCmd, ImageCmd, ImageId, RectCmd, RoundedRectCmd, TextCmd};
