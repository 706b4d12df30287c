//! Command protocol
//!
//! Every page mutation is a [`Command`]. A command is bound to the page ids
//! it affects when it is built, and keeps whatever it learns during
//! `execute` so that `undo` and `redo` can be run any number of times.

use crate::anchor::{capture_anchor, insert_with_anchor, Anchor};
use crate::context::EditorContext;
use crate::error::Result;
use crate::page::{PageId, PagesContainer};
use async_trait::async_trait;

#[async_trait(?Send)]
pub trait Command {
    fn description(&self) -> String;

    async fn execute(&mut self, _ctx: &mut EditorContext) -> Result<()> {
        Ok(())
    }

    async fn undo(&mut self, _ctx: &mut EditorContext) -> Result<()> {
        Ok(())
    }

    async fn redo(&mut self, _ctx: &mut EditorContext) -> Result<()> {
        Ok(())
    }
}

/// Pages added by a command whose output size is only known after execute.
///
/// Anchors are captured fresh on every detach since the tracked pages may
/// have drifted since the last cycle.
#[derive(Debug, Clone, Default)]
pub struct TrackedElements {
    elements: Vec<PageId>,
    anchors: Vec<Anchor>,
}

impl TrackedElements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&mut self, ids: impl IntoIterator<Item = PageId>) {
        self.elements.extend(ids);
    }

    pub fn elements(&self) -> &[PageId] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Capture anchors for every tracked page, then remove them all
    pub fn detach_all(&mut self, pages: &mut PagesContainer) {
        self.anchors = self
            .elements
            .iter()
            .map(|&id| capture_anchor(pages, id))
            .collect();

        for &id in &self.elements {
            pages.remove(id);
        }
    }

    /// Put every tracked page back at its anchor, in tracking order
    pub fn reattach_all(&self, pages: &mut PagesContainer) {
        for anchor in &self.anchors {
            insert_with_anchor(pages, anchor);
        }
    }
}
