//! Page deletion, single and bulk

use crate::command::Command;
use crate::context::EditorContext;
use crate::error::Result;
use crate::page::PageId;
use crate::selection::Selection;
use async_trait::async_trait;

/// Delete one page
#[derive(Debug)]
pub struct DeletePage {
    element: PageId,
    next_sibling: Option<PageId>,
    filename: String,
}

impl DeletePage {
    pub fn new(element: PageId) -> Self {
        Self {
            element,
            next_sibling: None,
            filename: String::new(),
        }
    }

    fn remove(&self, ctx: &mut EditorContext) {
        if let Some(page) = ctx.pages.get_mut(self.element) {
            page.remove_badge();
        }
        ctx.pages.remove(self.element);
        ctx.disable_controls_if_empty();
    }
}

#[async_trait(?Send)]
impl Command for DeletePage {
    fn description(&self) -> String {
        format!("delete page {}", self.element)
    }

    async fn execute(&mut self, ctx: &mut EditorContext) -> Result<()> {
        self.filename = ctx.ui.filename();
        self.next_sibling = ctx.pages.next_sibling(self.element);
        self.remove(ctx);
        Ok(())
    }

    async fn undo(&mut self, ctx: &mut EditorContext) -> Result<()> {
        let reference = self.next_sibling.filter(|&id| ctx.pages.contains(id));
        ctx.pages.insert_before(self.element, reference);
        if let Some(page) = ctx.pages.get_mut(self.element) {
            page.remove_badge();
        }
        ctx.enable_controls(&self.filename);
        Ok(())
    }

    async fn redo(&mut self, ctx: &mut EditorContext) -> Result<()> {
        self.remove(ctx);
        Ok(())
    }
}

/// Delete every selected page
#[derive(Debug, Default)]
pub struct DeleteSelected {
    /// Removed page with the index it was removed from, in removal order
    removed: Vec<(PageId, usize)>,
    previous_selection: Selection,
    filename: String,
}

impl DeleteSelected {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn removed(&self) -> Vec<PageId> {
        self.removed.iter().map(|&(id, _)| id).collect()
    }
}

#[async_trait(?Send)]
impl Command for DeleteSelected {
    fn description(&self) -> String {
        format!("delete {} selected page(s)", self.removed.len())
    }

    async fn execute(&mut self, ctx: &mut EditorContext) -> Result<()> {
        self.previous_selection = ctx.selection.clone();
        self.filename = ctx.ui.filename();
        self.removed.clear();

        // Each removal shifts the following pages one slot to the left
        let mut deleted = 0;
        for page in ctx.selection.pages() {
            let Some(index) = (page as usize).checked_sub(1 + deleted) else {
                continue;
            };
            if let Some(id) = ctx.pages.child_at(index) {
                ctx.pages.remove(id);
                self.removed.push((id, index));
                deleted += 1;
            }
        }
        tracing::debug!(count = deleted, "selected pages deleted");

        ctx.selection.clear();
        ctx.disable_controls_if_empty();
        ctx.refresh_page_numbers();
        ctx.notify_selection();
        Ok(())
    }

    async fn undo(&mut self, ctx: &mut EditorContext) -> Result<()> {
        while let Some((id, index)) = self.removed.pop() {
            if ctx.pages.len() <= index {
                ctx.pages.append(id);
            } else {
                let reference = ctx.pages.child_at(index);
                ctx.pages.insert_before(id, reference);
            }
        }

        ctx.selection = self.previous_selection.clone();
        ctx.enable_controls(&self.filename);
        ctx.refresh_page_numbers();
        ctx.notify_selection();
        Ok(())
    }

    async fn redo(&mut self, ctx: &mut EditorContext) -> Result<()> {
        self.execute(ctx).await
    }
}
