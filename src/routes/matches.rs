use actix_web::{web, HttpResponse, Responder};
use tracing::Instrument;
use validator::Validate;
use crate::core::{format_timestamp, time_ago, CommonMatchFinder, CommonMatches, DiscoveryError};
use crate::models::{
    Account, CommonMatchesResponse, ErrorResponse, FindCommonMatchesRequest, HealthResponse,
    MatchRecord, MatchSummary, PlayerLine, Region, RegionOption, RiotId, SummonerSummary,
};
use crate::services::{RiotClient, RiotError};
use std::sync::Arc;

/// Shown for anything the handler cannot classify
const GENERIC_FAILURE: &str = "An unexpected error occurred. Please try again.";

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub riot: Arc<RiotClient>,
    pub finder: CommonMatchFinder,
    pub default_region: Region,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/regions", web::get().to(list_regions))
        .route("/matches/common", web::post().to(find_common_matches));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Region choices
///
/// GET /api/v1/regions
async fn list_regions() -> impl Responder {
    let regions: Vec<RegionOption> = Region::ALL
        .iter()
        .map(|region| RegionOption {
            value: region.as_str().to_string(),
            label: region.label().to_string(),
        })
        .collect();

    HttpResponse::Ok().json(regions)
}

/// Find common matches endpoint
///
/// POST /api/v1/matches/common
///
/// Request body:
/// ```json
/// {
///   "summoner1": "Name#TAG",
///   "summoner2": "Other#TAG",
///   "region": "AMERICAS|ASIA|EUROPE|SEA"
/// }
/// ```
async fn find_common_matches(
    state: web::Data<AppState>,
    req: web::Json<FindCommonMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_common_matches request: {:?}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    let summoner1 = match RiotId::parse(req.summoner1.trim()) {
        Ok(id) => id,
        Err(e) => return bad_request("Invalid summoner 1", e.to_string()),
    };
    let summoner2 = match RiotId::parse(req.summoner2.trim()) {
        Ok(id) => id,
        Err(e) => return bad_request("Invalid summoner 2", e.to_string()),
    };

    let region = match req.region.as_deref() {
        None | Some("") => state.default_region,
        Some(raw) => match raw.parse::<Region>() {
            Ok(region) => region,
            Err(e) => return bad_request("Invalid region", e.to_string()),
        },
    };

    let request_id = uuid::Uuid::new_v4().to_string();
    let span = tracing::info_span!("common_matches", %request_id, %region);

    async move {
        tracing::info!("Finding common matches for {} and {}", summoner1, summoner2);

        let (version, result) = tokio::join!(
            state.riot.get_current_game_version(),
            state.finder.find(&state.riot, &summoner1, &summoner2, region),
        );

        let current_game_version = match version {
            Ok(version) => Some(version),
            Err(e) => {
                tracing::warn!("Could not resolve current game version: {}", e);
                None
            }
        };

        match result {
            Ok(common) => {
                tracing::info!("Returning {} common matches", common.matches.len());
                HttpResponse::Ok().json(build_response(request_id, region, current_game_version, common))
            }
            Err(e) => discovery_error_response(&e),
        }
    }
    .instrument(span)
    .await
}

fn build_response(
    request_id: String,
    region: Region,
    current_game_version: Option<String>,
    common: CommonMatches,
) -> CommonMatchesResponse {
    let players = [&common.player1, &common.player2];

    CommonMatchesResponse {
        request_id,
        found_summoners: true,
        current_game_version,
        region: region.to_string(),
        summoners: players
            .iter()
            .map(|account| SummonerSummary {
                game_name: account.game_name.clone(),
                tag_line: account.tag_line.clone(),
                puuid: account.puuid.clone(),
            })
            .collect(),
        window_start: common.window_start,
        matches: common
            .matches
            .iter()
            .map(|record| summarize(record, &players))
            .collect(),
    }
}

/// Condense a match to what a result row shows
pub fn summarize(record: &MatchRecord, players: &[&Account]) -> MatchSummary {
    let start = record.info.game_start_timestamp;

    MatchSummary {
        match_id: record.match_id().to_string(),
        game_mode: record.info.game_mode.clone(),
        queue_id: record.info.queue_id,
        game_version: record.info.game_version.clone(),
        game_start_timestamp: start,
        game_duration: record.info.game_duration,
        started_at: format_timestamp(start),
        time_ago: time_ago(start),
        players: players
            .iter()
            .filter_map(|account| {
                record.participant(&account.puuid).map(|p| {
                    let riot_id = if p.riot_id_game_name.is_empty() {
                        account.riot_id().to_string()
                    } else {
                        format!("{}#{}", p.riot_id_game_name, p.riot_id_tagline)
                    };

                    PlayerLine {
                        puuid: p.puuid.clone(),
                        riot_id,
                        champion_name: p.champion_name.clone(),
                        team_id: p.team_id,
                        kills: p.kills,
                        deaths: p.deaths,
                        assists: p.assists,
                        win: p.win,
                    }
                })
            })
            .collect(),
    }
}

fn bad_request(error: &str, message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 400,
    })
}

/// Translate a discovery failure into the user-facing JSON error
pub fn discovery_error_response(err: &DiscoveryError) -> HttpResponse {
    let (mut builder, error, message, status_code) = match err {
        DiscoveryError::Riot(RiotError::NotFound(id)) => (
            HttpResponse::NotFound(),
            "Not found",
            format!("Not found: {}", id),
            404,
        ),
        DiscoveryError::Riot(RiotError::RateLimited { .. }) => (
            HttpResponse::TooManyRequests(),
            "Rate limit exceeded",
            "Rate limit exceeded, could not fetch all matches. Please try again later.".to_string(),
            429,
        ),
        DiscoveryError::NoMatches | DiscoveryError::HistoryUnavailable => (
            HttpResponse::NotFound(),
            "No match history",
            err.to_string(),
            404,
        ),
        DiscoveryError::Riot(RiotError::Configuration(_)) => {
            tracing::error!("Service misconfigured: {}", err);
            (
                HttpResponse::InternalServerError(),
                "Service unavailable",
                err.to_string(),
                500,
            )
        }
        _ => {
            tracing::error!("Discovery failed: {}", err);
            (
                HttpResponse::BadGateway(),
                "Unexpected error",
                GENERIC_FAILURE.to_string(),
                502,
            )
        }
    };

    if let DiscoveryError::Riot(RiotError::RateLimited { retry_after: Some(secs) }) = err {
        builder.insert_header(("Retry-After", secs.to_string()));
    }

    builder.json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code,
    })
}
