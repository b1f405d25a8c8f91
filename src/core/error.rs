use crate::services::RiotError;
use thiserror::Error;

/// Failures of a common-match discovery run
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error(transparent)]
    Riot(#[from] RiotError),

    #[error("No matches found for one or both summoners")]
    NoMatches,

    #[error("Could not get match history")]
    HistoryUnavailable,

    #[error("Could not get match timestamp for {0}")]
    MissingTimestamp(String),
}

impl DiscoveryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, DiscoveryError::Riot(RiotError::NotFound(_)))
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, DiscoveryError::Riot(RiotError::RateLimited { .. }))
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, DiscoveryError::Riot(RiotError::Configuration(_)))
    }

    /// Empty histories are reported to the user rather than treated as failures
    pub fn is_empty_history(&self) -> bool {
        matches!(self, DiscoveryError::NoMatches | DiscoveryError::HistoryUnavailable)
    }
}
