use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to find the matches two players shared
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindCommonMatchesRequest {
    /// First player, `Name#Tag`
    #[validate(length(min = 1, message = "Summoner 1 is required"))]
    pub summoner1: String,
    /// Second player, `Name#Tag`
    #[validate(length(min = 1, message = "Summoner 2 is required"))]
    pub summoner2: String,
    /// Regional routing value; falls back to the configured default region
    #[serde(default)]
    pub region: Option<String>,
}
