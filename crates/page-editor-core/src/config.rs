//! Editor configuration

use crate::error::{EditorError, Result};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Maximum number of undoable commands kept, None for unbounded
    pub history_limit: Option<usize>,
    /// Scroll the page wrapper along with a dragged page
    pub scroll_on_move: bool,
    /// Class name hosts render for the split marker
    pub split_marker: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_limit: None,
            scroll_on_move: true,
            split_marker: "split-before".to_string(),
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| EditorError::Config(e.to_string()))
    }
}
