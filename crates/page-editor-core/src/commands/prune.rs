use crate::command::Command;
use crate::context::EditorContext;
use crate::error::Result;
use async_trait::async_trait;

/// Runs a command, then drops selected page numbers past the end of the
/// document. Undo selects the dropped numbers again once the wrapped
/// command is undone.
pub struct PruneSelection {
    command: Box<dyn Command>,
    dropped: Vec<u32>,
}

impl PruneSelection {
    pub fn new(command: Box<dyn Command>) -> Self {
        Self {
            command,
            dropped: Vec::new(),
        }
    }

    fn prune(&mut self, ctx: &mut EditorContext) {
        let count = ctx.pages.len();
        let before = ctx.selection.pages();
        ctx.selection.retain_existing(count);
        self.dropped = before
            .into_iter()
            .filter(|&page| !ctx.selection.contains(page))
            .collect();

        if !self.dropped.is_empty() {
            tracing::debug!(dropped = ?self.dropped, "selection pruned");
            ctx.notify_selection();
        }
    }
}

impl std::fmt::Debug for PruneSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PruneSelection")
            .field("command", &self.command.description())
            .field("dropped", &self.dropped)
            .finish()
    }
}

#[async_trait(?Send)]
impl Command for PruneSelection {
    fn description(&self) -> String {
        self.command.description()
    }

    async fn execute(&mut self, ctx: &mut EditorContext) -> Result<()> {
        self.command.execute(ctx).await?;
        self.prune(ctx);
        Ok(())
    }

    async fn undo(&mut self, ctx: &mut EditorContext) -> Result<()> {
        self.command.undo(ctx).await?;
        if self.dropped.is_empty() {
            return Ok(());
        }
        for page in self.dropped.drain(..) {
            ctx.selection.select(page);
        }
        ctx.notify_selection();
        Ok(())
    }

    async fn redo(&mut self, ctx: &mut EditorContext) -> Result<()> {
        self.command.redo(ctx).await?;
        self.prune(ctx);
        Ok(())
    }
}
