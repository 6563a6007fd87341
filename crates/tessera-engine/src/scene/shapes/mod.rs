//! Per-shape draw payloads and their `DrawList` push helpers.

mod border;
mod image;
mod rect;
mod rounded_rect;
mod text;

pub use border::BorderCmd;
pub use image::{ImageCmd, ImageId};
pub use rect::RectCmd;
pub use rounded_rect::RoundedRectCmd;
pub use text::TextCmd;
