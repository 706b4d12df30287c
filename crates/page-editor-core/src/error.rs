use thiserror::Error;

use crate::page::PageId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// A collaborator callback (add files, duplicate, page break) failed
    #[error("Page action failed: {0}")]
    Action(String),

    #[error("Unknown page: {0}")]
    UnknownPage(PageId),

    /// Another history operation is still in flight
    #[error("Editor is busy with another operation")]
    Busy,

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, EditorError>;
