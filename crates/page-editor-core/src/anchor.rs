//! Anchor capture and restore
//!
//! An [`Anchor`] remembers where an element sat so it can be put back at
//! the same logical position after other edits. The next sibling is the
//! precise anchor, the numeric index is the fallback and appending is the
//! last resort. Restoring never fails.

use crate::page::{PageId, PagesContainer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub element: PageId,
    pub next_sibling: Option<PageId>,
    /// None when the element was not attached at capture time
    pub index: Option<usize>,
}

/// Capture the position of `element`. Must happen before it is removed.
pub fn capture_anchor(pages: &PagesContainer, element: PageId) -> Anchor {
    Anchor {
        element,
        next_sibling: pages.next_sibling(element),
        index: pages.index_of(element),
    }
}

/// Reinsert `anchor.element` as close to its captured position as the
/// current order allows
pub fn insert_with_anchor(pages: &mut PagesContainer, anchor: &Anchor) {
    if let Some(sibling) = anchor.next_sibling {
        if sibling != anchor.element && pages.contains(sibling) {
            pages.insert_before(anchor.element, Some(sibling));
            return;
        }
    }

    // The index refers to the order without the element itself
    pages.remove(anchor.element);
    if let Some(index) = anchor.index {
        if let Some(child) = pages.child_at(index) {
            tracing::trace!(element = %anchor.element, index, "anchor sibling gone, using index");
            pages.insert_before(anchor.element, Some(child));
            return;
        }
    }

    tracing::trace!(element = %anchor.element, "anchor unresolved, appending");
    pages.append(anchor.element);
}
