//! Spot-table loading and report merging for the reconciliation system.
//!
//! This crate handles:
//! - Parsing the HTML-exported spot table into a normalized structure
//! - Inner-joining futures token records with spot rows on ticker
//! - Rendering the merged report as HTML with the interpretive legend
//! - The external rendering-collaborator seam

pub mod merge;
pub mod render;
pub mod spot;

pub use merge::ReportMerger;
pub use render::{render_html, ReportRenderer, LEGEND_HTML};
pub use spot::{load_spot_table, parse_spot_html};
