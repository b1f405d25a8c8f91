//! Duo Finder - discovers the matches two players shared
//!
//! Given two Riot IDs, the core resolves a bounded window of match history,
//! pages through both players' match IDs, intersects them and fetches the
//! detail of every shared match.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{intersect, time_ago, CommonMatchFinder, DiscoveryError, PaginationPlan};
pub use crate::models::{Account, MatchRecord, Region, RiotId};
pub use crate::services::{RiotClient, RiotError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let common = intersect(&["m1", "m2"], &["m2", "m3"]);
        assert_eq!(common, vec!["m2".to_string()]);
    }
}
