use crate::config::MatchingSettings;
use crate::core::{
    aggregate::aggregate,
    error::DiscoveryError,
    history::{fetch_bounded_history, PaginationPlan},
    intersect::{dedup_preserving_order, intersect},
    window::resolve_window_start,
};
use crate::models::{Account, MatchRecord, Region, RiotId};
use crate::services::RiotClient;

/// Match IDs both players appear in, newest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonMatchIds {
    /// Lower bound of the searched window, seconds since the epoch
    pub window_start: i64,
    pub match_ids: Vec<String>,
}

/// Outcome of a full discovery run
#[derive(Debug, Clone)]
pub struct CommonMatches {
    pub player1: Account,
    pub player2: Account,
    pub window_start: i64,
    pub matches: Vec<MatchRecord>,
}

/// Discovery orchestrator
///
/// # Pipeline Stages
/// 1. Resolve both Riot IDs to PUUIDs
/// 2. Resolve the window start from both players' latest matches
/// 3. Fetch each player's bounded history
/// 4. Intersect, keeping the second player's order
/// 5. Fetch detail for every shared match
///
/// Holds no per-request state; one finder serves any number of runs.
#[derive(Debug, Clone, Copy)]
pub struct CommonMatchFinder {
    plan: PaginationPlan,
    dedup_history: bool,
}

impl CommonMatchFinder {
    pub fn new(plan: PaginationPlan, dedup_history: bool) -> Self {
        Self { plan, dedup_history }
    }

    pub fn from_settings(settings: &MatchingSettings) -> Self {
        Self::new(PaginationPlan::from_settings(settings), settings.dedup_history)
    }

    pub fn plan(&self) -> &PaginationPlan {
        &self.plan
    }

    /// Run the whole pipeline for two Riot IDs
    pub async fn find(
        &self,
        client: &RiotClient,
        summoner1: &RiotId,
        summoner2: &RiotId,
        region: Region,
    ) -> Result<CommonMatches, DiscoveryError> {
        let (player1, player2) = tokio::try_join!(
            client.get_account(summoner1, region),
            client.get_account(summoner2, region),
        )?;

        let common = self
            .find_common_ids(client, &player1.puuid, &player2.puuid, region)
            .await?;

        let matches = aggregate(client, &common.match_ids, region).await?;

        tracing::info!(
            "{} and {} share {} matches since {} in {}",
            summoner1,
            summoner2,
            matches.len(),
            common.window_start,
            region
        );

        Ok(CommonMatches {
            player1,
            player2,
            window_start: common.window_start,
            matches,
        })
    }

    /// Shared match IDs of two PUUIDs, without fetching match detail
    pub async fn find_common_ids(
        &self,
        client: &RiotClient,
        puuid1: &str,
        puuid2: &str,
        region: Region,
    ) -> Result<CommonMatchIds, DiscoveryError> {
        let window_start = resolve_window_start(client, puuid1, puuid2, region).await?;

        let (history1, history2) = tokio::try_join!(
            fetch_bounded_history(client, puuid1, window_start, &self.plan, region),
            fetch_bounded_history(client, puuid2, window_start, &self.plan, region),
        )?;

        let (history1, history2) = if self.dedup_history {
            (dedup_preserving_order(history1), dedup_preserving_order(history2))
        } else {
            (history1, history2)
        };

        tracing::debug!(
            "Histories before {}: {} and {} ids",
            window_start,
            history1.len(),
            history2.len()
        );

        Ok(CommonMatchIds {
            window_start,
            match_ids: intersect(&history1, &history2),
        })
    }
}

impl Default for CommonMatchFinder {
    fn default() -> Self {
        Self::from_settings(&MatchingSettings::default())
    }
}
