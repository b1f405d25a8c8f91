use crate::core::error::DiscoveryError;
use crate::models::{MatchRecord, Region};
use crate::services::RiotClient;

/// Fetch the full detail of every match, in the given order
///
/// The first failed lookup aborts the run and its error is returned; records
/// already fetched are dropped so a caller never sees a silently shortened
/// list.
pub async fn aggregate<T: AsRef<str>>(
    client: &RiotClient,
    match_ids: &[T],
    region: Region,
) -> Result<Vec<MatchRecord>, DiscoveryError> {
    let mut records = Vec::with_capacity(match_ids.len());

    for match_id in match_ids {
        let match_id = match_id.as_ref();
        match client.get_match(match_id, region).await {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::warn!(
                    "Aborting detail lookup at {} after {} of {} matches: {}",
                    match_id,
                    records.len(),
                    match_ids.len(),
                    e
                );
                return Err(e.into());
            }
        }
    }

    Ok(records)
}
