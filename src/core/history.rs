use crate::config::MatchingSettings;
use crate::core::error::DiscoveryError;
use crate::models::Region;
use crate::services::{riot::MAX_PAGE_SIZE, MatchIdsQuery, RiotClient};

/// How a player's history is paged through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationPlan {
    /// Match IDs requested per page, at most [`MAX_PAGE_SIZE`]
    pub page_size: u32,
    /// Number of page requests issued per player
    pub pages: u32,
}

impl PaginationPlan {
    /// Plan enough pages of `page_size` to cover `max_list_size` matches
    pub fn new(page_size: u32, max_list_size: u32) -> Self {
        let page_size = page_size.min(MAX_PAGE_SIZE);
        let pages = max_list_size.checked_div(page_size).unwrap_or(0);
        Self { page_size, pages }
    }

    pub fn from_settings(settings: &MatchingSettings) -> Self {
        Self {
            page_size: settings.page_size(),
            pages: settings.max_match_history_requests(),
        }
    }

    /// Queries in request order, each bounded above by `end_time`
    pub fn queries(&self, end_time: i64) -> impl Iterator<Item = MatchIdsQuery> + '_ {
        (0..self.pages).map(move |page| MatchIdsQuery {
            start: page * self.page_size,
            count: self.page_size,
            end_time: Some(end_time),
        })
    }

    /// Upper bound on the IDs one player can contribute
    pub fn max_matches(&self) -> u32 {
        self.page_size * self.pages
    }
}

/// Fetch a player's match IDs up to the window start, newest first
///
/// Issues exactly `plan.pages` requests and concatenates them in request
/// order. IDs repeated across pages are passed through untouched.
///
/// # Errors
/// [`DiscoveryError::HistoryUnavailable`] when nothing came back at all.
pub async fn fetch_bounded_history(
    client: &RiotClient,
    puuid: &str,
    window_start: i64,
    plan: &PaginationPlan,
    region: Region,
) -> Result<Vec<String>, DiscoveryError> {
    let mut history = Vec::with_capacity(plan.max_matches() as usize);

    for query in plan.queries(window_start) {
        let page = client.get_match_ids(puuid, query, region).await?;
        tracing::trace!("Page at {} returned {} ids for {}", query.start, page.len(), puuid);
        history.extend(page);
    }

    if history.is_empty() {
        return Err(DiscoveryError::HistoryUnavailable);
    }

    Ok(history)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_plan_is_single_page() {
        let plan = PaginationPlan::from_settings(&MatchingSettings::default());
        assert_eq!(plan, PaginationPlan { page_size: 100, pages: 1 });
        assert_eq!(plan.max_matches(), 100);
    }

    #[test]
    fn test_queries_advance_offset() {
        let plan = PaginationPlan::new(20, 60);
        let queries: Vec<_> = plan.queries(1_699_000_000).collect();

        assert_eq!(queries.len(), 3);
        assert_eq!(
            queries.iter().map(|q| q.start).collect::<Vec<_>>(),
            vec![0, 20, 40]
        );
        assert!(queries.iter().all(|q| q.count == 20 && q.end_time == Some(1_699_000_000)));
    }

    #[test]
    fn test_page_size_capped() {
        let plan = PaginationPlan::new(250, 500);
        assert_eq!(plan.page_size, MAX_PAGE_SIZE);
        assert_eq!(plan.pages, 5);
    }

    #[test]
    fn test_plan_from_settings_caps_page_size() {
        let settings = MatchingSettings {
            default_match_count: 200,
            max_match_list_size: 400,
            ..MatchingSettings::default()
        };
        let plan = PaginationPlan::from_settings(&settings);

        assert_eq!(plan, PaginationPlan { page_size: 100, pages: 4 });
        assert_eq!(plan, PaginationPlan::new(200, 400));
        assert_eq!(plan.pages, settings.max_match_history_requests());
    }

    #[test]
    fn test_zero_page_size_plans_nothing() {
        let plan = PaginationPlan::new(0, 100);
        assert_eq!(plan.pages, 0);
        assert_eq!(plan.queries(0).count(), 0);
    }
}
