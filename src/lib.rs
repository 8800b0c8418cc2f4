pub mod api;
pub mod config;
pub mod error;
pub mod observability;
pub mod scheduler;
pub mod scrape;
pub mod snapshot;
pub mod types;

/// Fixed identification header sent with every upstream request; the quote
/// pages reject clients that do not present one.
pub const USER_AGENT: &str = "Mozilla/5.0";
