//! Page arena and ordered container
//!
//! Every page element gets an immutable [`PageId`] when it is created. The
//! container keeps all elements ever created in an arena and a separate
//! ordered list of the attached ones, so commands can hold on to ids of
//! removed pages and put the very same element back later.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(u32);

impl PageId {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for PageId {
    fn from(value: u32) -> Self {
        PageId(value)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One rendered page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageElement {
    pub id: PageId,
    /// Stable content identity, e.g. "report.pdf #3"
    pub label: String,
    /// Signed degrees. Deltas are summed and never wrapped.
    pub rotation: i32,
    /// Split marker: a new document starts at this page on export
    pub split_before: bool,
    /// A page-number badge is still attached to the thumbnail
    pub page_number_badge: bool,
}

impl PageElement {
    pub fn rotate_by(&mut self, delta: i32) {
        self.rotation += delta;
    }

    pub fn toggle_split(&mut self) {
        self.split_before = !self.split_before;
    }

    /// Drop a stale page-number badge, returns whether one was present
    pub fn remove_badge(&mut self) -> bool {
        std::mem::replace(&mut self.page_number_badge, false)
    }
}

/// Description of a page to create, as handed over by hosts
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PageSpec {
    pub label: String,
    #[serde(default)]
    pub rotation: Option<i32>,
    #[serde(default, alias = "splitBefore")]
    pub split_before: bool,
    /// The host already drew a page-number badge on the thumbnail
    #[serde(default, alias = "pageNumberBadge")]
    pub page_number_badge: bool,
}

impl PageSpec {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PagesContainer {
    next_id: u32,
    elements: HashMap<PageId, PageElement>,
    order: Vec<PageId>,
}

impl PagesContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detached page element
    pub fn create(&mut self, label: impl Into<String>) -> PageId {
        self.create_from_spec(PageSpec::new(label))
    }

    pub fn create_from_spec(&mut self, spec: PageSpec) -> PageId {
        let id = PageId(self.next_id);
        self.next_id += 1;

        self.elements.insert(
            id,
            PageElement {
                id,
                label: spec.label,
                rotation: spec.rotation.unwrap_or(0),
                split_before: spec.split_before,
                page_number_badge: spec.page_number_badge,
            },
        );
        id
    }

    /// Create a detached copy of `source` with a fresh id
    pub fn clone_element(&mut self, source: PageId) -> Option<PageId> {
        let template = self.elements.get(&source)?.clone();
        let id = PageId(self.next_id);
        self.next_id += 1;

        self.elements.insert(
            id,
            PageElement {
                id,
                page_number_badge: false,
                ..template
            },
        );
        Some(id)
    }

    pub fn append(&mut self, id: PageId) -> bool {
        self.insert_at(id, usize::MAX)
    }

    /// Insert `id` before `reference`, appending when `reference` is None or not attached.
    /// An element that is already attached is moved, never duplicated.
    pub fn insert_before(&mut self, id: PageId, reference: Option<PageId>) -> bool {
        if !self.elements.contains_key(&id) {
            return false;
        }
        self.detach(id);

        let index = reference
            .and_then(|r| self.index_of(r))
            .unwrap_or(self.order.len());
        self.order.insert(index, id);
        true
    }

    /// Insert `id` at `index`, clamped to the end of the list
    pub fn insert_at(&mut self, id: PageId, index: usize) -> bool {
        if !self.elements.contains_key(&id) {
            return false;
        }
        self.detach(id);

        let index = index.min(self.order.len());
        self.order.insert(index, id);
        true
    }

    /// Detach `id`, keeping it in the arena. Returns its former index.
    pub fn remove(&mut self, id: PageId) -> Option<usize> {
        self.detach(id)
    }

    /// Drop `id` from the arena; its identity is gone afterwards
    pub fn destroy(&mut self, id: PageId) -> Option<PageElement> {
        self.detach(id);
        self.elements.remove(&id)
    }

    fn detach(&mut self, id: PageId) -> Option<usize> {
        let index = self.index_of(id)?;
        self.order.remove(index);
        Some(index)
    }

    pub fn index_of(&self, id: PageId) -> Option<usize> {
        self.order.iter().position(|&child| child == id)
    }

    pub fn next_sibling(&self, id: PageId) -> Option<PageId> {
        let index = self.index_of(id)?;
        self.order.get(index + 1).copied()
    }

    /// Whether `id` is currently attached
    pub fn contains(&self, id: PageId) -> bool {
        self.order.contains(&id)
    }

    /// Whether `id` still exists in the arena, attached or not
    pub fn exists(&self, id: PageId) -> bool {
        self.elements.contains_key(&id)
    }

    pub fn child_at(&self, index: usize) -> Option<PageId> {
        self.order.get(index).copied()
    }

    pub fn children(&self) -> &[PageId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, id: PageId) -> Option<&PageElement> {
        self.elements.get(&id)
    }

    pub fn get_mut(&mut self, id: PageId) -> Option<&mut PageElement> {
        self.elements.get_mut(&id)
    }

    /// Attached elements in document order
    pub fn iter(&self) -> impl Iterator<Item = &PageElement> + '_ {
        self.order.iter().filter_map(|id| self.elements.get(id))
    }

    pub fn labels(&self) -> Vec<&str> {
        self.iter().map(|page| page.label.as_str()).collect()
    }

    /// Detach and destroy every element
    pub fn clear(&mut self) {
        self.order.clear();
        self.elements.clear();
    }
}
