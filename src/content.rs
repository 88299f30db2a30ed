//! The inner scrollable content, seen from the pull layout.

use bitflags::bitflags;

bitflags! {
    /// Axes a nested scroll sequence moves along
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct ScrollAxes: u8 {
        const HORIZONTAL = 0b01;
        const VERTICAL   = 0b10;
    }
}

/// Capability the layout needs from the element it wraps.
///
/// The layout never scrolls the content itself; it only asks whether the
/// content still has room in the reveal direction and, for list-like content,
/// where the visible window starts.
pub trait ScrollableContent {
    /// True if the content can still scroll toward its trailing edge
    fn can_scroll_forward(&self) -> bool;

    /// Index of the first visible item, if the content is a list
    fn first_visible_index(&self) -> Option<usize> {
        None
    }
}
