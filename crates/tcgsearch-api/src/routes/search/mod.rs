//! Search routes - Card search page and JSON endpoints
//!
//! Features:
//! - Search by card name with an optional game filter
//! - Games list and search results fetched concurrently, each degrading to empty
//! - HTMX partial refresh of the results grid
//!
//! Structure:
//! - api.rs: JSON API endpoints
//! - page.rs: Page and fragment rendering

pub mod api;
pub mod page;

pub use api::{api_games, api_search};
pub use page::page_search;
