use crate::command::Command;
use crate::context::EditorContext;
use crate::error::Result;
use async_trait::async_trait;

/// Checkbox-driven selection of one page.
///
/// Undo and redo flip the checkbox state and run the same logic again, so
/// undoing a select is a deselect and the other way round.
#[derive(Debug)]
pub struct TogglePageSelection {
    page: u32,
    checked: bool,
}

impl TogglePageSelection {
    /// `page` is 1-based, `checked` the checkbox state after the click
    pub fn new(page: u32, checked: bool) -> Self {
        Self { page, checked }
    }

    fn apply(&self, ctx: &mut EditorContext) {
        let was_empty = ctx.selection.is_empty();
        if self.checked {
            ctx.selection.select(self.page);
        } else {
            ctx.selection.deselect(self.page);
        }
        let is_empty = ctx.selection.is_empty();

        if was_empty && !is_empty && !ctx.selection.mode() {
            ctx.selection.set_mode(true);
            ctx.ui.set_selection_mode(true);
        } else if !was_empty && is_empty && ctx.selection.mode() {
            ctx.selection.set_mode(false);
            ctx.ui.set_selection_mode(false);
        }
        ctx.notify_selection();
    }
}

#[async_trait(?Send)]
impl Command for TogglePageSelection {
    fn description(&self) -> String {
        let verb = if self.checked { "select" } else { "deselect" };
        format!("{} page {}", verb, self.page)
    }

    async fn execute(&mut self, ctx: &mut EditorContext) -> Result<()> {
        self.apply(ctx);
        Ok(())
    }

    async fn undo(&mut self, ctx: &mut EditorContext) -> Result<()> {
        self.checked = !self.checked;
        self.apply(ctx);
        Ok(())
    }

    async fn redo(&mut self, ctx: &mut EditorContext) -> Result<()> {
        self.checked = !self.checked;
        self.apply(ctx);
        Ok(())
    }
}
