//! Value objects - immutable types that represent domain concepts

mod page;
mod public_id;

pub use page::{total_pages, PageRequest, PageWindow, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use public_id::{PublicId, PublicIdParseError};
