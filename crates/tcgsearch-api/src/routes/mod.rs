//! Route handlers
//!
//! - search: the card search page and its JSON counterparts

pub mod search;
