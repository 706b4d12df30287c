//! Collaborator callbacks
//!
//! The page content itself (PDF parsing, thumbnails, blank pages) is
//! produced outside this crate. Commands call into [`PageActions`] and
//! only track the page ids that come back.

use crate::error::{EditorError, Result};
use crate::page::{PageId, PageSpec, PagesContainer};
use async_trait::async_trait;

/// What an external action added to the container
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActionOutput {
    #[default]
    None,
    One(PageId),
    Many(Vec<PageId>),
}

impl ActionOutput {
    /// Flatten into the list of ids to track
    pub fn into_ids(self) -> Vec<PageId> {
        match self {
            ActionOutput::None => Vec::new(),
            ActionOutput::One(id) => vec![id],
            ActionOutput::Many(ids) => ids,
        }
    }
}

impl From<Option<PageId>> for ActionOutput {
    fn from(value: Option<PageId>) -> Self {
        value.map_or(ActionOutput::None, ActionOutput::One)
    }
}

impl From<Vec<PageId>> for ActionOutput {
    fn from(value: Vec<PageId>) -> Self {
        ActionOutput::Many(value)
    }
}

#[async_trait(?Send)]
pub trait PageActions {
    /// Insert pages from user files before `anchor` (or at the end)
    async fn add_files(
        &mut self,
        _pages: &mut PagesContainer,
        _anchor: Option<PageId>,
    ) -> Result<ActionOutput> {
        Ok(ActionOutput::None)
    }

    /// Clone `source` into the container, returning the inserted copy
    async fn duplicate_page(
        &mut self,
        pages: &mut PagesContainer,
        source: PageId,
    ) -> Result<PageId> {
        let copy = pages
            .clone_element(source)
            .ok_or(EditorError::UnknownPage(source))?;
        let next = pages.next_sibling(source);
        pages.insert_before(copy, next);
        Ok(copy)
    }

    /// Insert a blank page before `before`. `added_so_far` holds the pages
    /// this pass already inserted.
    async fn page_break(
        &mut self,
        pages: &mut PagesContainer,
        before: PageId,
        _added_so_far: &[PageId],
    ) -> Result<ActionOutput> {
        let blank = pages.create_from_spec(PageSpec::new("blank"));
        pages.insert_before(blank, Some(before));
        Ok(ActionOutput::One(blank))
    }
}

/// Page actions that only use the container itself
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalPageActions;

#[async_trait(?Send)]
impl PageActions for LocalPageActions {}
