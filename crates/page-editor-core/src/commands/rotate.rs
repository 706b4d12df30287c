use crate::command::Command;
use crate::context::EditorContext;
use crate::error::Result;
use crate::page::PageId;
use async_trait::async_trait;

/// Rotate a single page by a signed number of degrees
#[derive(Debug)]
pub struct RotatePage {
    element: PageId,
    degrees: i32,
}

impl RotatePage {
    pub fn new(element: PageId, degrees: i32) -> Self {
        Self { element, degrees }
    }
}

#[async_trait(?Send)]
impl Command for RotatePage {
    fn description(&self) -> String {
        format!("rotate page {} by {}", self.element, self.degrees)
    }

    async fn execute(&mut self, ctx: &mut EditorContext) -> Result<()> {
        rotate(ctx, &[self.element], self.degrees);
        Ok(())
    }

    async fn undo(&mut self, ctx: &mut EditorContext) -> Result<()> {
        rotate(ctx, &[self.element], -self.degrees);
        Ok(())
    }

    async fn redo(&mut self, ctx: &mut EditorContext) -> Result<()> {
        self.execute(ctx).await
    }
}

/// Rotate several pages by the same delta
#[derive(Debug)]
pub struct RotatePages {
    elements: Vec<PageId>,
    degrees: i32,
}

impl RotatePages {
    pub fn new(elements: Vec<PageId>, degrees: i32) -> Self {
        Self { elements, degrees }
    }

    /// Every page, or only the selected ones while selection mode is on
    pub fn in_scope(ctx: &EditorContext, degrees: i32) -> Self {
        let elements = ctx
            .pages
            .children()
            .iter()
            .enumerate()
            .filter(|(index, _)| ctx.selection.in_scope(*index as u32 + 1))
            .map(|(_, &id)| id)
            .collect();
        Self::new(elements, degrees)
    }
}

#[async_trait(?Send)]
impl Command for RotatePages {
    fn description(&self) -> String {
        format!("rotate {} page(s) by {}", self.elements.len(), self.degrees)
    }

    async fn execute(&mut self, ctx: &mut EditorContext) -> Result<()> {
        rotate(ctx, &self.elements, self.degrees);
        Ok(())
    }

    async fn undo(&mut self, ctx: &mut EditorContext) -> Result<()> {
        rotate(ctx, &self.elements, -self.degrees);
        Ok(())
    }

    async fn redo(&mut self, ctx: &mut EditorContext) -> Result<()> {
        self.execute(ctx).await
    }
}

fn rotate(ctx: &mut EditorContext, elements: &[PageId], degrees: i32) {
    for &id in elements {
        if let Some(page) = ctx.pages.get_mut(id) {
            page.rotate_by(degrees);
        }
    }
}
