//! Editor context
//!
//! Owns the state every command works on: the pages container, the
//! selection and the two collaborator objects. Commands get it as
//! `&mut EditorContext`, so no two commands can touch it at once.

use crate::actions::{LocalPageActions, PageActions};
use crate::config::EditorConfig;
use crate::page::PagesContainer;
use crate::selection::Selection;
use crate::ui::{EditorUi, HeadlessUi};

pub struct EditorContext {
    pub pages: PagesContainer,
    pub selection: Selection,
    pub ui: Box<dyn EditorUi>,
    pub actions: Box<dyn PageActions>,
    pub config: EditorConfig,
}

impl EditorContext {
    pub fn new(ui: Box<dyn EditorUi>, actions: Box<dyn PageActions>) -> Self {
        Self::with_config(ui, actions, EditorConfig::default())
    }

    pub fn with_config(
        ui: Box<dyn EditorUi>,
        actions: Box<dyn PageActions>,
        config: EditorConfig,
    ) -> Self {
        Self {
            pages: PagesContainer::new(),
            selection: Selection::new(),
            ui,
            actions,
            config,
        }
    }

    /// A context without any host attached
    pub fn headless() -> Self {
        Self::new(Box::new(HeadlessUi::default()), Box::new(LocalPageActions))
    }

    /// Disable the filename input and export button once the last page is
    /// gone. Returns whether the container is empty.
    pub fn disable_controls_if_empty(&mut self) -> bool {
        if !self.pages.is_empty() {
            return false;
        }
        self.ui.set_filename_editable(false, "");
        self.ui.set_export_enabled(false);
        true
    }

    /// Same as [`Self::disable_controls_if_empty`], also blanking the
    /// filename label
    pub fn clear_controls_if_empty(&mut self) -> bool {
        let empty = self.disable_controls_if_empty();
        if empty {
            self.ui.set_filename_label("");
        }
        empty
    }

    /// Re-enable the controls after pages came back, restoring `filename`
    pub fn enable_controls(&mut self, filename: &str) {
        if self.pages.is_empty() {
            return;
        }
        self.ui.set_filename_editable(true, filename);
        self.ui.set_export_enabled(true);
    }

    pub fn refresh_page_numbers(&mut self) {
        self.ui
            .update_page_numbers_and_checkboxes(&self.pages, &self.selection);
    }

    pub fn notify_selection(&mut self) {
        self.ui.selection_updated(&self.selection);
    }
}

impl std::fmt::Debug for EditorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorContext")
            .field("pages", &self.pages)
            .field("selection", &self.selection)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
