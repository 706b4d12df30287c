//! Page state as handed to JavaScript
//!
//! Hosts re-render thumbnails from these snapshots after every change.

use page_editor_core::{PagesContainer, Selection};
use serde::Serialize;

/// One attached page, in document order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    /// Stable id to pass back into session methods
    pub id: u32,
    /// Page number (1-indexed)
    pub number: u32,
    pub label: String,
    pub rotation: i32,
    pub split_before: bool,
    /// Class to render for the split marker, present only when marked
    pub split_class: Option<String>,
    pub selected: bool,
    pub page_number_badge: bool,
}

pub fn page_views(
    pages: &PagesContainer,
    selection: &Selection,
    split_marker: &str,
) -> Vec<PageView> {
    pages
        .iter()
        .zip(1u32..)
        .map(|(page, number)| PageView {
            id: page.id.get(),
            number,
            label: page.label.clone(),
            rotation: page.rotation,
            split_before: page.split_before,
            split_class: page.split_before.then(|| split_marker.to_string()),
            selected: selection.contains(number),
            page_number_badge: page.page_number_badge,
        })
        .collect()
}
