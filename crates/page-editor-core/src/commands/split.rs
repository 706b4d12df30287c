//! Split markers
//!
//! A page carrying the split marker starts a new document when the pages
//! are exported as several files.

use crate::command::Command;
use crate::context::EditorContext;
use crate::error::Result;
use crate::page::PageId;
use async_trait::async_trait;

/// Flip the split marker of one page
#[derive(Debug)]
pub struct ToggleSplit {
    element: PageId,
}

impl ToggleSplit {
    pub fn new(element: PageId) -> Self {
        Self { element }
    }

    fn toggle(&self, ctx: &mut EditorContext) {
        if let Some(page) = ctx.pages.get_mut(self.element) {
            page.toggle_split();
        }
    }
}

#[async_trait(?Send)]
impl Command for ToggleSplit {
    fn description(&self) -> String {
        format!("toggle split at page {}", self.element)
    }

    async fn execute(&mut self, ctx: &mut EditorContext) -> Result<()> {
        self.toggle(ctx);
        Ok(())
    }

    async fn undo(&mut self, ctx: &mut EditorContext) -> Result<()> {
        self.toggle(ctx);
        Ok(())
    }

    async fn redo(&mut self, ctx: &mut EditorContext) -> Result<()> {
        self.toggle(ctx);
        Ok(())
    }
}

/// Set or clear split markers on a whole set of pages.
///
/// Outside selection mode, if any page is marked all markers are cleared,
/// otherwise all pages are marked. In selection mode every selected page
/// is flipped on its own. Undo restores the exact markers each page had
/// before, mixed ones included, instead of applying the rule again.
#[derive(Debug)]
pub struct SplitAll {
    elements: Vec<PageId>,
    selected: Option<Vec<u32>>,
    before: Vec<(PageId, bool)>,
}

impl SplitAll {
    /// `selected` holds 1-based positions into `elements`, None when the
    /// whole set is in scope
    pub fn new(elements: Vec<PageId>, selected: Option<Vec<u32>>) -> Self {
        Self {
            elements,
            selected,
            before: Vec::new(),
        }
    }

    /// All current pages, scoped to the selection while selection mode is on
    pub fn from_context(ctx: &EditorContext) -> Self {
        let selected = ctx.selection.mode().then(|| ctx.selection.pages());
        Self::new(ctx.pages.children().to_vec(), selected)
    }

    fn apply(&self, ctx: &mut EditorContext) {
        match &self.selected {
            Some(selected) => {
                for &page in selected {
                    let Some(&id) = (page as usize)
                        .checked_sub(1)
                        .and_then(|index| self.elements.get(index))
                    else {
                        continue;
                    };
                    if let Some(element) = ctx.pages.get_mut(id) {
                        element.toggle_split();
                    }
                }
            }
            None => {
                let any_marked = self
                    .elements
                    .iter()
                    .filter_map(|&id| ctx.pages.get(id))
                    .any(|page| page.split_before);
                for &id in &self.elements {
                    if let Some(page) = ctx.pages.get_mut(id) {
                        page.split_before = !any_marked;
                    }
                }
            }
        }
    }
}

#[async_trait(?Send)]
impl Command for SplitAll {
    fn description(&self) -> String {
        format!("split {} page(s)", self.elements.len())
    }

    async fn execute(&mut self, ctx: &mut EditorContext) -> Result<()> {
        self.before = self
            .elements
            .iter()
            .filter_map(|&id| ctx.pages.get(id).map(|page| (id, page.split_before)))
            .collect();
        self.apply(ctx);
        Ok(())
    }

    /// Restores the markers seen by `execute`; for uniformly marked or
    /// unmarked pages this is the same as applying the rule again
    async fn undo(&mut self, ctx: &mut EditorContext) -> Result<()> {
        for &(id, marked) in &self.before {
            if let Some(page) = ctx.pages.get_mut(id) {
                page.split_before = marked;
            }
        }
        Ok(())
    }

    async fn redo(&mut self, ctx: &mut EditorContext) -> Result<()> {
        self.execute(ctx).await
    }
}
