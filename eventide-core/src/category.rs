//! Category bitmask used for coarse-grained event filtering.

use bitflags::bitflags;

bitflags! {
    /// Groups of event kinds.
    ///
    /// An event can belong to several categories at once; filtering is done
    /// by intersecting masks. The mask of an event is always derived from its
    /// kind, see [`EventKind::categories`](crate::EventKind::categories).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct Category: u32 {
        /// Placeholder events.
        const EMPTY = 1 << 0;
        /// Application lifecycle.
        const APP = 1 << 1;
        /// Any user input.
        const INPUT = 1 << 2;
        /// Window state.
        const WINDOW = 1 << 3;
        /// Keyboard input.
        const KEY = 1 << 4;
        /// Mouse input.
        const MOUSE = 1 << 5;
        /// Mouse buttons and motion.
        const MOUSE_BUTTON = 1 << 6;
    }
}
