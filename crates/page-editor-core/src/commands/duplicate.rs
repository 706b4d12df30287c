use crate::anchor::{capture_anchor, insert_with_anchor, Anchor};
use crate::command::Command;
use crate::context::EditorContext;
use crate::error::Result;
use crate::page::PageId;
use async_trait::async_trait;

/// Duplicate a page through [`crate::PageActions::duplicate_page`]
#[derive(Debug)]
pub struct DuplicatePage {
    source: PageId,
    copy: Option<PageId>,
    anchor: Option<Anchor>,
}

impl DuplicatePage {
    pub fn new(source: PageId) -> Self {
        Self {
            source,
            copy: None,
            anchor: None,
        }
    }

    pub fn copy(&self) -> Option<PageId> {
        self.copy
    }
}

#[async_trait(?Send)]
impl Command for DuplicatePage {
    fn description(&self) -> String {
        format!("duplicate page {}", self.source)
    }

    async fn execute(&mut self, ctx: &mut EditorContext) -> Result<()> {
        let copy = ctx.actions.duplicate_page(&mut ctx.pages, self.source).await?;
        self.copy = Some(copy);
        self.anchor = None;
        ctx.refresh_page_numbers();
        Ok(())
    }

    async fn undo(&mut self, ctx: &mut EditorContext) -> Result<()> {
        if let Some(copy) = self.copy {
            self.anchor = Some(capture_anchor(&ctx.pages, copy));
            ctx.pages.remove(copy);
        }
        ctx.disable_controls_if_empty();
        ctx.refresh_page_numbers();
        Ok(())
    }

    async fn redo(&mut self, ctx: &mut EditorContext) -> Result<()> {
        let Some(copy) = self.copy.filter(|&id| ctx.pages.exists(id)) else {
            tracing::debug!(source = %self.source, "duplicate lost, running the action again");
            return self.execute(ctx).await;
        };

        match &self.anchor {
            Some(anchor) => insert_with_anchor(&mut ctx.pages, anchor),
            None => {
                let next = ctx.pages.next_sibling(self.source);
                ctx.pages.insert_before(copy, next);
            }
        }
        ctx.refresh_page_numbers();
        Ok(())
    }
}
