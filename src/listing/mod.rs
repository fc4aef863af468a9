//! Client-side listing engine: filter the cached jobs, page the result and
//! keep the per-render listing state.

pub mod filter;
pub mod paginate;
pub mod sidebar;
pub mod state;

// Re-export commonly used types
pub use filter::{filter_jobs, ListingFilter, SearchFilter};
pub use sidebar::more_jobs_from_company;
pub use state::{derive_visible_page, ListingAction, ListingState, ListingView};
