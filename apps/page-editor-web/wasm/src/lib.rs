//! WASM bindings for the undoable page editor
//!
//! Pages, selection and undo history live in Rust inside a
//! `PageEditorSession`. JavaScript forwards user events and renders what
//! the UI callbacks report; producing page content (reading files, blank
//! pages) stays on the JavaScript side behind the page action callbacks.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { PageEditorSession } from './pkg/page_editor_wasm.js';
//!
//! await init();
//!
//! const session = new PageEditorSession(
//!   {
//!     filename: () => input.value,
//!     setFilenameEditable: (editable, value) => { input.disabled = !editable; input.value = value; },
//!     setHistoryEnabled: (canUndo, canRedo) => updateButtons(canUndo, canRedo),
//!     updatePages: (pages) => renderThumbnails(pages),
//!   },
//!   {
//!     addFiles: async (beforeId) => readPickedFiles(),   // [{ label, rotation? }]
//!   },
//!   JSON.stringify({ history_limit: 100 }),
//! );
//!
//! session.loadPages([{ label: "report.pdf #1" }, { label: "report.pdf #2" }], "report.pdf");
//! await session.rotatePage(pageId, 90);
//! await session.undo();
//! ```

pub mod bridge;
pub mod session;
pub mod view;

use page_editor_core::{format_ranges, parse_ranges};
use wasm_bindgen::prelude::*;

pub use session::PageEditorSession;
pub use view::PageView;

/// Initialize the WASM module
/// Called automatically by wasm-bindgen
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    // A second init (tests, hot reload) keeps the first subscriber
    let _ = tracing_wasm::try_set_as_global_default();
}

/// Get the library version
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Parse a range string like "1-3, 5" into sorted, unique page numbers
/// no larger than `page_count`. Malformed parts are skipped.
#[wasm_bindgen(js_name = parsePageRanges)]
pub fn parse_page_ranges(input: &str, page_count: u32) -> Vec<u32> {
    parse_ranges(input, page_count)
}

/// Collapse page numbers into a range string like "1-3, 5"
#[wasm_bindgen(js_name = formatPageRanges)]
pub fn format_page_ranges(pages: Vec<u32>) -> String {
    format_ranges(&pages)
}
