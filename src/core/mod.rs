// Core algorithm exports
pub mod aggregate;
pub mod error;
pub mod finder;
pub mod history;
pub mod intersect;
pub mod time_ago;
pub mod window;

pub use aggregate::aggregate;
pub use error::DiscoveryError;
pub use finder::{CommonMatchFinder, CommonMatchIds, CommonMatches};
pub use history::{fetch_bounded_history, PaginationPlan};
pub use intersect::{dedup_preserving_order, intersect};
pub use time_ago::{format_timestamp, time_ago, time_ago_at};
pub use window::{resolve_window_start, window_start_from};
