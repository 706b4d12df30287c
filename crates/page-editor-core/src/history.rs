//! Undo/redo history
//!
//! Two stacks of executed commands. A command is pushed only once its
//! `execute` has fully resolved; a new command clears the redo stack.

use crate::command::Command;
use crate::config::EditorConfig;
use crate::context::EditorContext;
use crate::error::Result;

#[derive(Default)]
pub struct HistoryManager {
    undo_stack: Vec<Box<dyn Command>>,
    redo_stack: Vec<Box<dyn Command>>,
    limit: Option<usize>,
}

impl HistoryManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    pub fn from_config(config: &EditorConfig) -> Self {
        Self::with_limit(config.history_limit)
    }

    /// Run `command` and record it. A failing command is dropped and its
    /// error returned; whatever it changed before failing stays.
    pub async fn execute(
        &mut self,
        ctx: &mut EditorContext,
        mut command: Box<dyn Command>,
    ) -> Result<()> {
        ctx.ui.set_history_enabled(false, false);

        let result = command.execute(ctx).await;
        match &result {
            Ok(()) => {
                tracing::debug!(command = %command.description(), pages = ctx.pages.len(), "executed");
                self.push_undo_clear_redo(command);
            }
            Err(e) => {
                tracing::warn!(command = %command.description(), error = %e, "command failed");
            }
        }

        self.publish(ctx);
        result
    }

    /// Record a command the caller already executed
    pub fn push_undo_clear_redo(&mut self, command: Box<dyn Command>) {
        self.undo_stack.push(command);
        if let Some(limit) = self.limit {
            let excess = self.undo_stack.len().saturating_sub(limit);
            self.undo_stack.drain(..excess);
        }
        self.redo_stack.clear();
    }

    /// Undo the most recent command. Returns false when there was nothing
    /// to undo.
    pub async fn undo(&mut self, ctx: &mut EditorContext) -> Result<bool> {
        let Some(mut command) = self.undo_stack.pop() else {
            return Ok(false);
        };
        ctx.ui.set_history_enabled(false, false);

        let result = command.undo(ctx).await;
        match &result {
            Ok(()) => {
                tracing::debug!(command = %command.description(), pages = ctx.pages.len(), "undone");
                self.redo_stack.push(command);
            }
            Err(e) => {
                tracing::warn!(command = %command.description(), error = %e, "undo failed, dropping command");
            }
        }

        self.publish(ctx);
        result.map(|()| true)
    }

    /// Redo the most recently undone command. Returns false when there was
    /// nothing to redo.
    pub async fn redo(&mut self, ctx: &mut EditorContext) -> Result<bool> {
        let Some(mut command) = self.redo_stack.pop() else {
            return Ok(false);
        };
        ctx.ui.set_history_enabled(false, false);

        let result = command.redo(ctx).await;
        match &result {
            Ok(()) => {
                tracing::debug!(command = %command.description(), pages = ctx.pages.len(), "redone");
                self.undo_stack.push(command);
            }
            Err(e) => {
                tracing::warn!(command = %command.description(), error = %e, "redo failed, dropping command");
            }
        }

        self.publish(ctx);
        result.map(|()| true)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn undo_description(&self) -> Option<String> {
        self.undo_stack.last().map(|command| command.description())
    }

    pub fn redo_description(&self) -> Option<String> {
        self.redo_stack.last().map(|command| command.description())
    }

    pub fn clear(&mut self, ctx: &mut EditorContext) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.publish(ctx);
    }

    /// Tell the UI which history buttons are usable
    pub fn publish(&self, ctx: &mut EditorContext) {
        ctx.ui.set_history_enabled(self.can_undo(), self.can_redo());
    }
}

impl std::fmt::Debug for HistoryManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryManager")
            .field("undo_depth", &self.undo_depth())
            .field("redo_depth", &self.redo_depth())
            .field("limit", &self.limit)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::RotatePage;
    use crate::error::EditorError;
    use crate::ui::HeadlessUi;
    use crate::LocalPageActions;
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Failing;

    #[async_trait(?Send)]
    impl Command for Failing {
        fn description(&self) -> String {
            "failing".to_string()
        }

        async fn execute(&mut self, _ctx: &mut EditorContext) -> Result<()> {
            Err(EditorError::Action("boom".to_string()))
        }
    }

    fn context() -> (EditorContext, Rc<RefCell<HeadlessUi>>) {
        let ui = Rc::new(RefCell::new(HeadlessUi::default()));
        let mut ctx = EditorContext::new(Box::new(ui.clone()), Box::new(LocalPageActions));
        let id = ctx.pages.create("a");
        ctx.pages.append(id);
        (ctx, ui)
    }

    #[tokio::test]
    async fn test_empty_stacks_are_no_ops() {
        let (mut ctx, _) = context();
        let mut history = HistoryManager::new();
        assert_eq!(history.undo(&mut ctx).await, Ok(false));
        assert_eq!(history.redo(&mut ctx).await, Ok(false));
    }

    #[tokio::test]
    async fn test_failed_execute_is_not_recorded() {
        let (mut ctx, ui) = context();
        let mut history = HistoryManager::new();

        let result = history.execute(&mut ctx, Box::new(Failing)).await;
        assert!(matches!(result, Err(EditorError::Action(_))));
        assert!(!history.can_undo());
        assert!(!ui.borrow().can_undo);
    }

    #[tokio::test]
    async fn test_new_command_clears_redo() {
        let (mut ctx, ui) = context();
        let page = ctx.pages.children()[0];
        let mut history = HistoryManager::new();

        history
            .execute(&mut ctx, Box::new(RotatePage::new(page, 90)))
            .await
            .unwrap();
        history.undo(&mut ctx).await.unwrap();
        assert!(history.can_redo());
        assert!(ui.borrow().can_redo);

        history
            .execute(&mut ctx, Box::new(RotatePage::new(page, 180)))
            .await
            .unwrap();
        assert!(!history.can_redo());
        assert_eq!(history.undo_depth(), 1);
        assert_eq!(ctx.pages.get(page).unwrap().rotation, 180);
    }

    #[tokio::test]
    async fn test_limit_drops_oldest() {
        let (mut ctx, _) = context();
        let page = ctx.pages.children()[0];
        let mut history = HistoryManager::with_limit(Some(2));

        for degrees in [90, 180, 270] {
            history
                .execute(&mut ctx, Box::new(RotatePage::new(page, degrees)))
                .await
                .unwrap();
        }
        assert_eq!(history.undo_depth(), 2);
        assert_eq!(
            history.undo_description().as_deref(),
            Some(format!("rotate page {} by 270", page).as_str())
        );

        while history.undo(&mut ctx).await.unwrap() {}
        assert_eq!(ctx.pages.get(page).unwrap().rotation, 90);
    }

    #[tokio::test]
    async fn test_clear_publishes_state() {
        let (mut ctx, ui) = context();
        let page = ctx.pages.children()[0];
        let mut history = HistoryManager::new();
        history
            .execute(&mut ctx, Box::new(RotatePage::new(page, 90)))
            .await
            .unwrap();
        assert!(ui.borrow().can_undo);

        history.clear(&mut ctx);
        assert!(!ui.borrow().can_undo);
        assert!(!history.can_undo());
    }
}
