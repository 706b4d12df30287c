use crate::command::{Command, TrackedElements};
use crate::context::EditorContext;
use crate::error::Result;
use crate::page::PageId;
use async_trait::async_trait;

/// Add pages from user files through [`crate::PageActions::add_files`]
#[derive(Debug, Default)]
pub struct AddPages {
    anchor: Option<PageId>,
    tracked: TrackedElements,
    filename: String,
}

impl AddPages {
    /// `anchor` is the page the new pages go in front of, None to append
    pub fn new(anchor: Option<PageId>) -> Self {
        Self {
            anchor,
            ..Self::default()
        }
    }

    pub fn added(&self) -> &[PageId] {
        self.tracked.elements()
    }
}

#[async_trait(?Send)]
impl Command for AddPages {
    fn description(&self) -> String {
        format!("add {} page(s)", self.tracked.len())
    }

    async fn execute(&mut self, ctx: &mut EditorContext) -> Result<()> {
        self.tracked = TrackedElements::new();
        let output = ctx.actions.add_files(&mut ctx.pages, self.anchor).await?;

        // Only what actually landed in the container is tracked
        let added: Vec<PageId> = output
            .into_ids()
            .into_iter()
            .filter(|&id| ctx.pages.contains(id))
            .collect();
        tracing::debug!(count = added.len(), "pages added from files");

        self.tracked.track(added);
        if !self.tracked.is_empty() {
            let filename = ctx.ui.filename();
            ctx.enable_controls(&filename);
        }
        Ok(())
    }

    async fn undo(&mut self, ctx: &mut EditorContext) -> Result<()> {
        self.filename = ctx.ui.filename();
        self.tracked.detach_all(&mut ctx.pages);
        ctx.disable_controls_if_empty();
        Ok(())
    }

    async fn redo(&mut self, ctx: &mut EditorContext) -> Result<()> {
        if self.tracked.is_empty() {
            return Ok(());
        }
        self.tracked.reattach_all(&mut ctx.pages);
        ctx.enable_controls(&self.filename);
        Ok(())
    }
}
