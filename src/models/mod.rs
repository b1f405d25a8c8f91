// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Account, MatchInfo, MatchMetadata, MatchRecord, Participant, Region, RiotId, RiotIdError, UnknownRegion};
pub use requests::FindCommonMatchesRequest;
pub use responses::{CommonMatchesResponse, ErrorResponse, HealthResponse, MatchSummary, PlayerLine, RegionOption, SummonerSummary};
