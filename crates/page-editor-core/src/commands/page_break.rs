use crate::command::{Command, TrackedElements};
use crate::context::EditorContext;
use crate::error::Result;
use crate::page::PageId;
use async_trait::async_trait;

/// Insert a blank page in front of every page but the first, or in front
/// of every selected page while selection mode is on
#[derive(Debug)]
pub struct PageBreak {
    elements: Vec<PageId>,
    selected: Option<Vec<u32>>,
    tracked: TrackedElements,
    filename: String,
}

impl PageBreak {
    pub fn new(elements: Vec<PageId>, selected: Option<Vec<u32>>) -> Self {
        Self {
            elements,
            selected,
            tracked: TrackedElements::new(),
            filename: String::new(),
        }
    }

    pub fn from_context(ctx: &EditorContext) -> Self {
        let selected = ctx.selection.mode().then(|| ctx.selection.pages());
        Self::new(ctx.pages.children().to_vec(), selected)
    }

    pub fn inserted(&self) -> &[PageId] {
        self.tracked.elements()
    }

    fn in_scope(&self, index: usize) -> bool {
        match &self.selected {
            Some(selected) => selected.contains(&(index as u32 + 1)),
            None => true,
        }
    }
}

#[async_trait(?Send)]
impl Command for PageBreak {
    fn description(&self) -> String {
        format!("insert {} page break(s)", self.tracked.len())
    }

    async fn execute(&mut self, ctx: &mut EditorContext) -> Result<()> {
        self.tracked = TrackedElements::new();

        let mut added: Vec<PageId> = Vec::new();
        for (index, &element) in self.elements.iter().enumerate().skip(1) {
            if !self.in_scope(index) || !ctx.pages.contains(element) {
                continue;
            }
            let output = ctx
                .actions
                .page_break(&mut ctx.pages, element, &added)
                .await?;
            added.extend(
                output
                    .into_ids()
                    .into_iter()
                    .filter(|&id| ctx.pages.contains(id)),
            );
        }
        tracing::debug!(count = added.len(), "page breaks inserted");

        self.tracked.track(added);
        ctx.refresh_page_numbers();
        Ok(())
    }

    async fn undo(&mut self, ctx: &mut EditorContext) -> Result<()> {
        self.filename = ctx.ui.filename();
        self.tracked.detach_all(&mut ctx.pages);
        ctx.clear_controls_if_empty();
        ctx.refresh_page_numbers();
        Ok(())
    }

    async fn redo(&mut self, ctx: &mut EditorContext) -> Result<()> {
        if self.tracked.is_empty() {
            return Ok(());
        }
        self.tracked.reattach_all(&mut ctx.pages);
        ctx.enable_controls(&self.filename);
        ctx.refresh_page_numbers();
        Ok(())
    }
}
