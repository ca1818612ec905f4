//! Card data model and result formatting
//!
//! Everything here is pure and synchronous: it shapes already-fetched
//! upstream data for display.
//! - models: upstream wire types (Card, Variant, PriceHistoryPoint, Game)
//! - select: cheapest-variant selection
//! - sparkline: price history to SVG polyline geometry
//! - format: currency / percentage formatting and change classification
//! - summary: one card shaped for the results grid

pub mod format;
pub mod models;
pub mod select;
pub mod serde_util;
pub mod sparkline;
pub mod summary;

pub use format::{format_change, format_currency, ChangeClass, ChangeStyle, PLACEHOLDER};
pub use models::{Card, Envelope, Game, PriceHistoryPoint, Variant};
pub use select::select_cheapest;
pub use sparkline::{Sparkline, SparklineSize};
pub use summary::{CardSummary, ChangeBadge};
