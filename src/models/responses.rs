use serde::{Deserialize, Serialize};

/// Response for the common matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommonMatchesResponse {
    pub request_id: String,
    pub found_summoners: bool,
    pub current_game_version: Option<String>,
    pub region: String,
    pub summoners: Vec<SummonerSummary>,
    /// Lower bound of the searched window, seconds since the epoch
    pub window_start: i64,
    pub matches: Vec<MatchSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummonerSummary {
    pub game_name: String,
    pub tag_line: String,
    pub puuid: String,
}

/// One shared match, trimmed down for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSummary {
    pub match_id: String,
    pub game_mode: String,
    pub queue_id: i64,
    pub game_version: String,
    pub game_start_timestamp: i64,
    pub game_duration: i64,
    pub started_at: String,
    pub time_ago: String,
    pub players: Vec<PlayerLine>,
}

/// How one of the searched players did in a match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerLine {
    pub puuid: String,
    pub riot_id: String,
    pub champion_name: String,
    pub team_id: i64,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub win: bool,
}

/// Region choice offered to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionOption {
    pub value: String,
    pub label: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
