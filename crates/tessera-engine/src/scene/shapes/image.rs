use crate::coords::Rect;
use crate::scene::{DrawCmd, DrawList};

/// Opaque handle to an image owned by the host.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ImageId(pub u64);

/// Image draw payload: the host stretches `image` to fill `rect`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ImageCmd {
    pub rect: Rect,
    pub image: ImageId,
}

impl DrawList {
    #[inline]
    pub fn push_image(&mut self, rect: Rect, image: ImageId) {
        self.push(DrawCmd::Image(ImageCmd { rect, image }));
    }
}
