//! Shared fixtures for the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use page_editor_core::{
    ActionOutput, Command, EditorContext, EditorError, HeadlessUi, HistoryManager, PageActions,
    PageId, PageSpec, PagesContainer, Result,
};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Page actions driven by a script instead of real files
#[derive(Default)]
pub struct ScriptedActions {
    /// Labels each `add_files` call produces, one batch per call
    pub file_batches: VecDeque<Vec<String>>,
    pub fail_add_files: bool,
    /// Fail the n-th page break call (0-based)
    pub fail_page_break_at: Option<usize>,
    /// `added_so_far.len()` seen by every page break call
    pub page_break_log: Rc<RefCell<Vec<usize>>>,
    pub page_break_calls: usize,
}

impl ScriptedActions {
    pub fn with_batches(batches: &[&[&str]]) -> Self {
        Self {
            file_batches: batches
                .iter()
                .map(|batch| batch.iter().map(|label| label.to_string()).collect())
                .collect(),
            ..Self::default()
        }
    }
}

#[async_trait(?Send)]
impl PageActions for ScriptedActions {
    async fn add_files(
        &mut self,
        pages: &mut PagesContainer,
        anchor: Option<PageId>,
    ) -> Result<ActionOutput> {
        if self.fail_add_files {
            return Err(EditorError::Action("could not read file".to_string()));
        }
        let Some(batch) = self.file_batches.pop_front() else {
            return Ok(ActionOutput::None);
        };

        let ids: Vec<PageId> = batch
            .into_iter()
            .map(|label| {
                let id = pages.create_from_spec(PageSpec::new(label));
                pages.insert_before(id, anchor);
                id
            })
            .collect();

        Ok(match ids.as_slice() {
            [] => ActionOutput::None,
            [id] => ActionOutput::One(*id),
            _ => ActionOutput::Many(ids),
        })
    }

    async fn page_break(
        &mut self,
        pages: &mut PagesContainer,
        before: PageId,
        added_so_far: &[PageId],
    ) -> Result<ActionOutput> {
        let call = self.page_break_calls;
        self.page_break_calls += 1;
        self.page_break_log.borrow_mut().push(added_so_far.len());

        if self.fail_page_break_at == Some(call) {
            return Err(EditorError::Action("blank page failed".to_string()));
        }

        let blank = pages.create(format!("break{}", call));
        pages.insert_before(blank, Some(before));
        Ok(ActionOutput::One(blank))
    }
}

/// Snapshot of everything a command may change on the pages
pub type PageState = Vec<(String, i32, bool)>;

pub struct Editor {
    pub ctx: EditorContext,
    pub ui: Rc<RefCell<HeadlessUi>>,
    pub history: HistoryManager,
}

impl Editor {
    pub fn new(labels: &[&str]) -> Self {
        Self::with_actions(labels, ScriptedActions::default())
    }

    pub fn with_actions(labels: &[&str], actions: ScriptedActions) -> Self {
        let ui = Rc::new(RefCell::new(HeadlessUi::new("document")));
        let mut ctx = EditorContext::new(Box::new(ui.clone()), Box::new(actions));
        for label in labels {
            let id = ctx.pages.create(*label);
            ctx.pages.append(id);
        }
        Self {
            ctx,
            ui,
            history: HistoryManager::new(),
        }
    }

    pub fn id(&self, label: &str) -> PageId {
        self.ctx
            .pages
            .iter()
            .find(|page| page.label == label)
            .map(|page| page.id)
            .unwrap_or_else(|| panic!("no attached page labelled {}", label))
    }

    pub fn labels(&self) -> Vec<String> {
        self.ctx
            .pages
            .labels()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn state(&self) -> PageState {
        self.ctx
            .pages
            .iter()
            .map(|page| (page.label.clone(), page.rotation, page.split_before))
            .collect()
    }

    pub async fn run(&mut self, command: impl Command + 'static) -> Result<()> {
        self.history.execute(&mut self.ctx, Box::new(command)).await
    }

    pub async fn undo(&mut self) -> bool {
        self.history.undo(&mut self.ctx).await.expect("undo failed")
    }

    pub async fn redo(&mut self) -> bool {
        self.history.redo(&mut self.ctx).await.expect("redo failed")
    }

    /// Execute `command`, then undo/redo it `cycles` times, checking the
    /// pages match the state right after execute on every redo and the
    /// state before execute on every undo
    pub async fn assert_cycles(&mut self, command: impl Command + 'static, cycles: usize) {
        let before = self.state();
        self.run(command).await.expect("execute failed");
        let after = self.state();

        for cycle in 0..cycles {
            assert!(self.undo().await);
            assert_eq!(self.state(), before, "undo of cycle {}", cycle);
            assert!(self.redo().await);
            assert_eq!(self.state(), after, "redo of cycle {}", cycle);
        }
    }
}
