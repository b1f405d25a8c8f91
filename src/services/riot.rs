use crate::config::RiotSettings;
use crate::models::{Account, MatchRecord, Region, RiotId};
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use thiserror::Error;

/// Header carrying the API key on every regional request
const API_KEY_HEADER: &str = "X-Riot-Token";

/// Largest page the match-ID endpoint accepts
pub const MAX_PAGE_SIZE: u32 = 100;

/// Errors that can occur when talking to the Riot API
#[derive(Debug, Error)]
pub enum RiotError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded, please try again later")]
    RateLimited { retry_after: Option<u64> },

    #[error("API returned error: {0}")]
    Api(String),

    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Paging parameters for a match-ID request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchIdsQuery {
    pub start: u32,
    pub count: u32,
    /// Only matches that ended before this instant, seconds since the epoch
    pub end_time: Option<i64>,
}

impl MatchIdsQuery {
    /// The single newest match
    pub fn latest() -> Self {
        Self {
            start: 0,
            count: 1,
            end_time: None,
        }
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("start", self.start.to_string()),
            ("count", self.count.to_string()),
        ];
        if let Some(end_time) = self.end_time {
            params.push(("endTime", end_time.to_string()));
        }
        params
    }
}

/// Riot API client
///
/// Covers the four lookups discovery needs:
/// - Riot ID to account (PUUID)
/// - match IDs by PUUID, paged
/// - match detail by ID
/// - current game version from Data Dragon
///
/// The key is injected once at construction. An empty key is accepted here
/// and reported as [`RiotError::Configuration`] by every keyed call, before
/// any request leaves the process.
#[derive(Debug, Clone)]
pub struct RiotClient {
    base_url: String,
    versions_url: String,
    api_key: String,
    client: Client,
}

impl RiotClient {
    /// Create a new Riot API client
    pub fn new(settings: &RiotSettings) -> Result<Self, RiotError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: settings.base_url.clone(),
            versions_url: settings.versions_url.clone(),
            api_key: settings.api_key.trim().to_string(),
            client,
        })
    }

    fn api_key(&self) -> Result<&str, RiotError> {
        if self.api_key.is_empty() {
            return Err(RiotError::Configuration(
                "RIOT_API_KEY is not configured".to_string(),
            ));
        }
        Ok(&self.api_key)
    }

    fn regional_url(&self, region: Region, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url
                .replace("{region}", region.routing_value())
                .trim_end_matches('/'),
            path
        )
    }

    async fn get(
        &self,
        url: &str,
        query: &[(&'static str, String)],
    ) -> Result<Response, RiotError> {
        let api_key = self.api_key()?;

        tracing::debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(url)
            .header(API_KEY_HEADER, api_key)
            .query(query)
            .send()
            .await?;

        Ok(response)
    }

    /// Look up the account behind a Riot ID
    pub async fn get_account(&self, riot_id: &RiotId, region: Region) -> Result<Account, RiotError> {
        let url = self.regional_url(
            region,
            &format!(
                "riot/account/v1/accounts/by-riot-id/{}/{}",
                urlencoding::encode(&riot_id.game_name),
                urlencoding::encode(&riot_id.tag_line)
            ),
        );

        let response = self.get(&url, &[]).await?;
        let response = check_status(response, || Some(riot_id.to_string()), "account").await?;

        response
            .json::<Account>()
            .await
            .map_err(|e| RiotError::InvalidResponse(format!("Failed to parse account: {}", e)))
    }

    /// Fetch one page of match IDs, newest first
    pub async fn get_match_ids(
        &self,
        puuid: &str,
        query: MatchIdsQuery,
        region: Region,
    ) -> Result<Vec<String>, RiotError> {
        if puuid.is_empty() {
            return Err(RiotError::Api("PUUID not provided".to_string()));
        }

        let url = self.regional_url(
            region,
            &format!("lol/match/v5/matches/by-puuid/{}/ids", urlencoding::encode(puuid)),
        );

        let response = self.get(&url, &query.params()).await?;
        let response = check_status(response, || None, "match history").await?;

        response
            .json::<Vec<String>>()
            .await
            .map_err(|e| RiotError::InvalidResponse(format!("Failed to parse match ids: {}", e)))
    }

    /// Fetch the full detail of a match
    pub async fn get_match(&self, match_id: &str, region: Region) -> Result<MatchRecord, RiotError> {
        let url = self.regional_url(
            region,
            &format!("lol/match/v5/matches/{}", urlencoding::encode(match_id)),
        );

        let response = self.get(&url, &[]).await?;
        let response = check_status(response, || Some(match_id.to_string()), "match").await?;

        response
            .json::<MatchRecord>()
            .await
            .map_err(|e| RiotError::InvalidResponse(format!("Failed to parse match {}: {}", match_id, e)))
    }

    /// Newest game version published on Data Dragon
    pub async fn get_current_game_version(&self) -> Result<String, RiotError> {
        tracing::debug!("GET {}", self.versions_url);

        let response = self.client.get(&self.versions_url).send().await?;
        let response = check_status(response, || None, "game versions").await?;

        let versions: Vec<String> = response
            .json()
            .await
            .map_err(|e| RiotError::InvalidResponse(format!("Failed to parse versions: {}", e)))?;

        versions
            .into_iter()
            .next()
            .ok_or_else(|| RiotError::InvalidResponse("Could not get game version".into()))
    }
}

/// Map a non-success status onto the error taxonomy.
///
/// `not_found` names the looked-up identifier when a 404 means "no such
/// entity"; when it yields `None` a 404 is treated like any other failure.
async fn check_status(
    response: Response,
    not_found: impl FnOnce() -> Option<String>,
    what: &str,
) -> Result<Response, RiotError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());
        tracing::warn!("Rate limited while fetching {} (retry after: {:?})", what, retry_after);
        return Err(RiotError::RateLimited { retry_after });
    }

    if status == StatusCode::NOT_FOUND {
        if let Some(id) = not_found() {
            return Err(RiotError::NotFound(id));
        }
    }

    let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
    tracing::error!("Failed to fetch {}: {} - {}", what, status, body);
    Err(RiotError::Api(format!("Error fetching {}: {}", what, status)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(api_key: &str) -> RiotSettings {
        RiotSettings {
            api_key: api_key.to_string(),
            ..RiotSettings::default()
        }
    }

    #[test]
    fn test_riot_client_creation() {
        let client = RiotClient::new(&settings("  test_key ")).unwrap();

        assert_eq!(client.api_key, "test_key");
        assert_eq!(client.base_url, "https://{region}.api.riotgames.com");
    }

    #[test]
    fn test_regional_url() {
        let client = RiotClient::new(&settings("test_key")).unwrap();

        assert_eq!(
            client.regional_url(Region::Europe, "lol/match/v5/matches/EUW1_1"),
            "https://europe.api.riotgames.com/lol/match/v5/matches/EUW1_1"
        );
    }

    #[test]
    fn test_match_ids_query_params() {
        let query = MatchIdsQuery {
            start: 100,
            count: 100,
            end_time: Some(1_699_000_000),
        };
        assert_eq!(
            query.params(),
            vec![
                ("start", "100".to_string()),
                ("count", "100".to_string()),
                ("endTime", "1699000000".to_string()),
            ]
        );

        assert_eq!(MatchIdsQuery::latest().params().len(), 2);
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_network() {
        // Unroutable base URL: reaching the network would surface a RequestError instead.
        let client = RiotClient::new(&RiotSettings {
            base_url: "http://127.0.0.1:9".to_string(),
            ..settings("")
        })
        .unwrap();

        let err = client
            .get_account(&RiotId::new("Ghost", "0000"), Region::Americas)
            .await
            .unwrap_err();
        assert!(matches!(err, RiotError::Configuration(_)));

        let err = client
            .get_match_ids("puuid", MatchIdsQuery::latest(), Region::Americas)
            .await
            .unwrap_err();
        assert!(matches!(err, RiotError::Configuration(_)));
    }
}
