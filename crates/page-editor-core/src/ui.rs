//! UI capability object
//!
//! Commands never reach into a UI tree. Everything they need to show or
//! read goes through [`EditorUi`]; every method has a no-op default so a
//! host only implements what it renders.

use crate::page::PagesContainer;
use crate::selection::Selection;
use std::cell::RefCell;
use std::rc::Rc;

pub trait EditorUi {
    /// Current value of the filename input
    fn filename(&self) -> String {
        String::new()
    }

    fn set_filename_editable(&mut self, _editable: bool, _value: &str) {}

    /// Paragraph next to the filename input that echoes the loaded file
    fn set_filename_label(&mut self, _text: &str) {}

    fn set_export_enabled(&mut self, _enabled: bool) {}

    fn set_history_enabled(&mut self, _can_undo: bool, _can_redo: bool) {}

    fn selection_updated(&mut self, _selection: &Selection) {}

    /// Show or hide the selection-mode affordances (checkboxes, delete button)
    fn set_selection_mode(&mut self, _active: bool) {}

    fn update_page_numbers_and_checkboxes(
        &mut self,
        _pages: &PagesContainer,
        _selection: &Selection,
    ) {
    }

    /// Width of one page thumbnail in the scrolling wrapper
    fn page_extent(&self) -> f64 {
        0.0
    }

    fn scroll_by(&mut self, _dx: f64) {}
}

/// Lets a host keep a handle on the UI object it gave to the editor
impl<T: EditorUi> EditorUi for Rc<RefCell<T>> {
    fn filename(&self) -> String {
        self.borrow().filename()
    }

    fn set_filename_editable(&mut self, editable: bool, value: &str) {
        self.borrow_mut().set_filename_editable(editable, value);
    }

    fn set_filename_label(&mut self, text: &str) {
        self.borrow_mut().set_filename_label(text);
    }

    fn set_export_enabled(&mut self, enabled: bool) {
        self.borrow_mut().set_export_enabled(enabled);
    }

    fn set_history_enabled(&mut self, can_undo: bool, can_redo: bool) {
        self.borrow_mut().set_history_enabled(can_undo, can_redo);
    }

    fn selection_updated(&mut self, selection: &Selection) {
        self.borrow_mut().selection_updated(selection);
    }

    fn set_selection_mode(&mut self, active: bool) {
        self.borrow_mut().set_selection_mode(active);
    }

    fn update_page_numbers_and_checkboxes(
        &mut self,
        pages: &PagesContainer,
        selection: &Selection,
    ) {
        self.borrow_mut()
            .update_page_numbers_and_checkboxes(pages, selection);
    }

    fn page_extent(&self) -> f64 {
        self.borrow().page_extent()
    }

    fn scroll_by(&mut self, dx: f64) {
        self.borrow_mut().scroll_by(dx);
    }
}

/// An [`EditorUi`] that keeps every control in memory
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessUi {
    pub filename: String,
    pub filename_editable: bool,
    pub filename_label: String,
    pub export_enabled: bool,
    pub can_undo: bool,
    pub can_redo: bool,
    pub selection_mode: bool,
    pub selection_notifications: usize,
    pub numbering_refreshes: usize,
    pub page_extent: f64,
    pub scroll_left: f64,
}

impl HeadlessUi {
    pub fn new(filename: impl Into<String>) -> Self {
        let filename = filename.into();
        Self {
            filename_label: filename.clone(),
            filename,
            ..Self::default()
        }
    }
}

impl Default for HeadlessUi {
    fn default() -> Self {
        Self {
            filename: String::new(),
            filename_editable: true,
            filename_label: String::new(),
            export_enabled: true,
            can_undo: false,
            can_redo: false,
            selection_mode: false,
            selection_notifications: 0,
            numbering_refreshes: 0,
            page_extent: 100.0,
            scroll_left: 0.0,
        }
    }
}

impl EditorUi for HeadlessUi {
    fn filename(&self) -> String {
        self.filename.clone()
    }

    fn set_filename_editable(&mut self, editable: bool, value: &str) {
        self.filename_editable = editable;
        self.filename = value.to_string();
    }

    fn set_filename_label(&mut self, text: &str) {
        self.filename_label = text.to_string();
    }

    fn set_export_enabled(&mut self, enabled: bool) {
        self.export_enabled = enabled;
    }

    fn set_history_enabled(&mut self, can_undo: bool, can_redo: bool) {
        self.can_undo = can_undo;
        self.can_redo = can_redo;
    }

    fn selection_updated(&mut self, _selection: &Selection) {
        self.selection_notifications += 1;
    }

    fn set_selection_mode(&mut self, active: bool) {
        self.selection_mode = active;
    }

    fn update_page_numbers_and_checkboxes(
        &mut self,
        _pages: &PagesContainer,
        _selection: &Selection,
    ) {
        self.numbering_refreshes += 1;
    }

    fn page_extent(&self) -> f64 {
        self.page_extent
    }

    fn scroll_by(&mut self, dx: f64) {
        self.scroll_left += dx;
    }
}
