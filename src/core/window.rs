use crate::core::error::DiscoveryError;
use crate::models::{MatchRecord, Region};
use crate::services::{MatchIdsQuery, RiotClient};

/// Lower bound of the search window in seconds: the earlier of the two
/// players' latest match start times.
#[inline]
pub fn window_start_from(latest1_ms: i64, latest2_ms: i64) -> i64 {
    latest1_ms.min(latest2_ms).div_euclid(1000)
}

/// Resolve where the history search starts for a pair of players
///
/// Fetches each player's single newest match ID, then the detail of both
/// matches, and keeps the earlier `gameStartTimestamp`.
///
/// # Errors
/// - [`DiscoveryError::NoMatches`] if either player has no match at all
/// - [`DiscoveryError::MissingTimestamp`] if a match detail lacks its start time
/// - any client error, unchanged
pub async fn resolve_window_start(
    client: &RiotClient,
    puuid1: &str,
    puuid2: &str,
    region: Region,
) -> Result<i64, DiscoveryError> {
    let (latest1, latest2) = tokio::try_join!(
        client.get_match_ids(puuid1, MatchIdsQuery::latest(), region),
        client.get_match_ids(puuid2, MatchIdsQuery::latest(), region),
    )?;

    let (Some(match1), Some(match2)) = (latest1.first(), latest2.first()) else {
        return Err(DiscoveryError::NoMatches);
    };

    let (record1, record2) = tokio::try_join!(
        client.get_match(match1, region),
        client.get_match(match2, region),
    )?;

    let start1 = start_timestamp(&record1)?;
    let start2 = start_timestamp(&record2)?;

    let window_start = window_start_from(start1, start2);
    tracing::debug!(
        "Latest matches {} ({}) and {} ({}), window starts at {}",
        match1, start1, match2, start2, window_start
    );

    Ok(window_start)
}

fn start_timestamp(record: &MatchRecord) -> Result<i64, DiscoveryError> {
    record
        .start_timestamp_ms()
        .ok_or_else(|| DiscoveryError::MissingTimestamp(record.match_id().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_start_takes_earlier_timestamp() {
        assert_eq!(window_start_from(1_700_000_000_000, 1_699_000_000_000), 1_699_000_000);
        assert_eq!(window_start_from(1_699_000_000_000, 1_700_000_000_000), 1_699_000_000);
    }

    #[test]
    fn test_window_start_floors_milliseconds() {
        assert_eq!(window_start_from(1_699_000_000_999, 1_800_000_000_000), 1_699_000_000);
    }
}
