//! Dashboard module
//!
//! Provides the overview page with the summary totals, the monthly expenses
//! chart and the transaction lists.

mod aggregation;
mod cards;
mod charts;
mod handlers;
mod summary;

pub use handlers::get_dashboard_page;
