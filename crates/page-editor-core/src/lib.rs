//! Undoable page operations for the PDF page editor
//!
//! Every page-level mutation (add, delete, move, rotate, split, duplicate,
//! page break, selection) is a [`Command`] run through the
//! [`HistoryManager`], which keeps it for undo and redo.
//!
//! Pages live in an arena ([`PagesContainer`]) and are addressed by stable
//! [`PageId`]s, so a page that was removed can be put back as the very
//! same element. Positions are restored through [`Anchor`]s that degrade
//! gracefully when the surrounding pages moved in the meantime.
//!
//! The crate does no rendering and no PDF work of its own: hosts plug in
//! an [`EditorUi`] for the controls it has to update and [`PageActions`]
//! for the operations that produce new pages.

pub mod actions;
pub mod anchor;
pub mod command;
pub mod commands;
pub mod config;
pub mod context;
pub mod drag;
pub mod error;
pub mod history;
pub mod page;
pub mod selection;
pub mod ui;

pub use actions::{ActionOutput, LocalPageActions, PageActions};
pub use anchor::{capture_anchor, insert_with_anchor, Anchor};
pub use command::{Command, TrackedElements};
pub use config::EditorConfig;
pub use context::EditorContext;
pub use drag::{resolve_drop_target, DragDropBridge, DropTarget};
pub use error::{EditorError, Result};
pub use history::HistoryManager;
pub use page::{PageElement, PageId, PageSpec, PagesContainer};
pub use selection::{format_ranges, parse_ranges, Selection};
pub use ui::{EditorUi, HeadlessUi};
