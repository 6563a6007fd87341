use crate::coords::Rect;

use super::DrawCmd;

/// Recorded draw stream for a frame, in paint order.
///
/// `push()` is O(1); [`clear`](Self::clear) keeps the allocation so a list
/// can be reused every frame.
///
/// # Clipping
///
/// [`push_clip`](Self::push_clip) / [`pop_clip`](Self::pop_clip) record
/// `ClipStart` / `ClipEnd`. Only one clip region can be active at a time;
/// the list records nesting as given and the dispatcher rejects it.
///
/// ```ignore
/// draw_list.push_clip(scroll_area);
/// // ... push children ...
/// draw_list.pop_clip();
/// ```
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded commands. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    #[inline]
    pub fn push_clip(&mut self, rect: Rect) {
        self.push(DrawCmd::ClipStart(rect));
    }

    #[inline]
    pub fn pop_clip(&mut self) {
        self.push(DrawCmd::ClipEnd);
    }

    /// Commands in paint order.
    #[inline]
    pub fn commands(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a DrawList {
    type Item = &'a DrawCmd;
    type IntoIter = std::slice::Iter<'a, DrawCmd>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    #[test]
    fn preserves_insertion_order() {
        let mut list = DrawList::new();
        list.push_clip(Rect::new(0.0, 0.0, 5.0, 5.0));
        list.push_solid_rect(Rect::new(1.0, 1.0, 2.0, 2.0), Color::black());
        list.pop_clip();
        let kinds: Vec<_> = list.into_iter().map(DrawCmd::kind).collect();
        assert_eq!(kinds, ["clip_start", "rect", "clip_end"]);
    }

    #[test]
    fn clear_empties_the_list() {
        let mut list = DrawList::new();
        list.pop_clip();
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }
}
