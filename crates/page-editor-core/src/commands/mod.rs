//! Atomic page commands and the command sequence

mod add_pages;
mod delete;
mod duplicate;
mod move_page;
mod page_break;
mod prune;
mod rotate;
mod select;
mod sequence;
mod split;

pub use add_pages::AddPages;
pub use delete::{DeletePage, DeleteSelected};
pub use duplicate::DuplicatePage;
pub use move_page::MovePage;
pub use page_break::PageBreak;
pub use prune::PruneSelection;
pub use rotate::{RotatePage, RotatePages};
pub use select::TogglePageSelection;
pub use sequence::CommandSequence;
pub use split::{SplitAll, ToggleSplit};
