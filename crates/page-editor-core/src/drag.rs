//! Drag and drop reordering
//!
//! Turns a pointer drag over page thumbnails into a single undoable move.
//! One dragged page becomes a [`MovePage`]; several dragged pages become a
//! [`CommandSequence`] of moves that keeps their relative order.

use crate::command::Command;
use crate::commands::{CommandSequence, MovePage};
use crate::context::EditorContext;
use crate::page::{PageId, PagesContainer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    Before(PageId),
    End,
}

impl DropTarget {
    fn destination(self) -> Option<PageId> {
        match self {
            DropTarget::Before(id) => Some(id),
            DropTarget::End => None,
        }
    }
}

/// Where a drop lands given the hovered thumbnail and the pointer's
/// horizontal position inside it (0.0 left edge, 1.0 right edge)
pub fn resolve_drop_target(
    pages: &PagesContainer,
    hovered: Option<PageId>,
    pointer_fraction: f64,
) -> DropTarget {
    let Some(hovered) = hovered.filter(|&id| pages.contains(id)) else {
        return DropTarget::End;
    };

    if pointer_fraction < 0.5 {
        DropTarget::Before(hovered)
    } else {
        pages
            .next_sibling(hovered)
            .map_or(DropTarget::End, DropTarget::Before)
    }
}

#[derive(Debug, Default)]
pub struct DragDropBridge {
    dragging: Vec<PageId>,
    hovered: Option<PageId>,
}

impl DragDropBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start dragging `pages`, in document order
    pub fn begin(&mut self, pages: impl IntoIterator<Item = PageId>) {
        self.dragging = pages.into_iter().collect();
        self.hovered = None;
    }

    pub fn hover(&mut self, target: Option<PageId>) {
        if self.is_dragging() {
            self.hovered = target;
        }
    }

    pub fn hovered(&self) -> Option<PageId> {
        self.hovered
    }

    pub fn dragging(&self) -> &[PageId] {
        &self.dragging
    }

    pub fn is_dragging(&self) -> bool {
        !self.dragging.is_empty()
    }

    pub fn cancel(&mut self) {
        self.dragging.clear();
        self.hovered = None;
    }

    /// Finish the drag. Returns the command to run, or None when the drop
    /// would leave every page where it is.
    pub fn drop_on(
        &mut self,
        ctx: &EditorContext,
        target: DropTarget,
    ) -> Option<Box<dyn Command>> {
        let dragging: Vec<PageId> = std::mem::take(&mut self.dragging)
            .into_iter()
            .filter(|&id| ctx.pages.contains(id))
            .collect();
        self.hovered = None;

        let destination = target.destination();
        if let Some(destination) = destination {
            if dragging.contains(&destination) {
                return None;
            }
        }

        match dragging.as_slice() {
            [] => None,
            [element] => {
                let element = *element;
                if ctx.pages.next_sibling(element) == destination {
                    return None;
                }
                let command = MovePage::new(
                    &ctx.pages,
                    element,
                    destination,
                    ctx.config.scroll_on_move,
                );
                Some(Box::new(command) as Box<dyn Command>)
            }
            elements => {
                // Several pages never scroll the wrapper
                let moves = elements
                    .iter()
                    .map(|&element| {
                        Box::new(MovePage::new(&ctx.pages, element, destination, false))
                            as Box<dyn Command>
                    })
                    .collect();
                Some(Box::new(CommandSequence::new(moves)) as Box<dyn Command>)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(labels: &[&str]) -> (EditorContext, Vec<PageId>) {
        let mut ctx = EditorContext::headless();
        let ids = labels
            .iter()
            .map(|label| {
                let id = ctx.pages.create(*label);
                ctx.pages.append(id);
                id
            })
            .collect();
        (ctx, ids)
    }

    #[test]
    fn test_resolve_left_half_drops_before() {
        let (ctx, ids) = context(&["a", "b", "c"]);
        assert_eq!(
            resolve_drop_target(&ctx.pages, Some(ids[1]), 0.2),
            DropTarget::Before(ids[1])
        );
    }

    #[test]
    fn test_resolve_right_half_drops_after() {
        let (ctx, ids) = context(&["a", "b", "c"]);
        assert_eq!(
            resolve_drop_target(&ctx.pages, Some(ids[1]), 0.8),
            DropTarget::Before(ids[2])
        );
        assert_eq!(
            resolve_drop_target(&ctx.pages, Some(ids[2]), 0.8),
            DropTarget::End
        );
    }

    #[test]
    fn test_resolve_without_hover_is_end() {
        let (ctx, _) = context(&["a"]);
        assert_eq!(resolve_drop_target(&ctx.pages, None, 0.1), DropTarget::End);
    }

    #[test]
    fn test_drop_onto_itself_yields_nothing() {
        let (ctx, ids) = context(&["a", "b"]);
        let mut bridge = DragDropBridge::new();
        bridge.begin([ids[0]]);
        assert!(bridge.drop_on(&ctx, DropTarget::Before(ids[0])).is_none());
        assert!(!bridge.is_dragging());
    }

    #[test]
    fn test_drop_in_place_yields_nothing() {
        let (ctx, ids) = context(&["a", "b"]);
        let mut bridge = DragDropBridge::new();
        bridge.begin([ids[0]]);
        assert!(bridge.drop_on(&ctx, DropTarget::Before(ids[1])).is_none());
    }

    #[test]
    fn test_single_drop_builds_move() {
        let (ctx, ids) = context(&["a", "b", "c"]);
        let mut bridge = DragDropBridge::new();
        bridge.begin([ids[0]]);
        bridge.hover(Some(ids[2]));
        assert_eq!(bridge.hovered(), Some(ids[2]));

        let command = bridge.drop_on(&ctx, DropTarget::Before(ids[2])).unwrap();
        assert!(command.description().starts_with("move page"));
    }

    #[test]
    fn test_hover_without_drag_is_ignored() {
        let (_, ids) = context(&["a"]);
        let mut bridge = DragDropBridge::new();
        bridge.hover(Some(ids[0]));
        assert_eq!(bridge.hovered(), None);
    }

    #[test]
    fn test_cancel_forgets_drag() {
        let (ctx, ids) = context(&["a", "b"]);
        let mut bridge = DragDropBridge::new();
        bridge.begin([ids[0]]);
        bridge.cancel();
        assert!(bridge.drop_on(&ctx, DropTarget::End).is_none());
    }
}
