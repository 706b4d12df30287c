use crate::command::Command;
use crate::context::EditorContext;
use crate::error::Result;
use async_trait::async_trait;

/// Several commands undone and redone as one unit.
///
/// Undo runs the members in reverse order. Redo runs `execute` on every
/// member in order, so members must behave the same on `execute` and
/// `redo`. A failing member stops the sequence; members already run stay
/// applied.
#[derive(Default)]
pub struct CommandSequence {
    commands: Vec<Box<dyn Command>>,
}

impl CommandSequence {
    pub fn new(commands: Vec<Box<dyn Command>>) -> Self {
        Self { commands }
    }

    pub fn push(&mut self, command: Box<dyn Command>) {
        self.commands.push(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl std::fmt::Debug for CommandSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.commands.iter().map(|command| command.description()))
            .finish()
    }
}

#[async_trait(?Send)]
impl Command for CommandSequence {
    fn description(&self) -> String {
        self.commands
            .iter()
            .map(|command| command.description())
            .collect::<Vec<_>>()
            .join(", ")
    }

    async fn execute(&mut self, ctx: &mut EditorContext) -> Result<()> {
        for command in self.commands.iter_mut() {
            command.execute(ctx).await?;
        }
        Ok(())
    }

    async fn undo(&mut self, ctx: &mut EditorContext) -> Result<()> {
        for command in self.commands.iter_mut().rev() {
            command.undo(ctx).await?;
        }
        Ok(())
    }

    async fn redo(&mut self, ctx: &mut EditorContext) -> Result<()> {
        self.execute(ctx).await
    }
}
