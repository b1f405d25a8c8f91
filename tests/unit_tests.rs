// Unit tests for Duo Finder

use duo_finder::config::MatchingSettings;
use duo_finder::core::{
    dedup_preserving_order, format_timestamp, intersect, time_ago_at, window_start_from,
    PaginationPlan,
};
use duo_finder::models::{Region, RiotId, RiotIdError};
use chrono::{Duration, Utc};
use std::collections::HashSet;

fn ids(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_intersect_follows_second_order() {
    let a = ids(&["m1", "m2", "m3", "m4"]);
    let b = ids(&["m4", "m7", "m2"]);

    assert_eq!(intersect(&a, &b), ids(&["m4", "m2"]));
}

#[test]
fn test_intersect_same_set_either_way() {
    let a = ids(&["m1", "m2", "m3"]);
    let b = ids(&["m3", "m2", "m5"]);

    let ab = intersect(&a, &b);
    let ba = intersect(&b, &a);

    assert_ne!(ab, ba);
    assert_eq!(
        ab.into_iter().collect::<HashSet<_>>(),
        ba.into_iter().collect::<HashSet<_>>()
    );
}

#[test]
fn test_intersect_with_itself() {
    let a = ids(&["m1", "m2", "m3"]);
    assert_eq!(intersect(&a, &a), a);
}

#[test]
fn test_intersect_empty() {
    let a = ids(&["m1", "m2"]);
    let empty: Vec<String> = Vec::new();

    assert!(intersect(&empty, &a).is_empty());
    assert!(intersect(&a, &empty).is_empty());
    assert!(intersect(&empty, &empty).is_empty());
}

#[test]
fn test_intersect_disjoint() {
    assert!(intersect(&ids(&["m1"]), &ids(&["m2"])).is_empty());
}

#[test]
fn test_dedup_then_intersect() {
    let a = dedup_preserving_order(ids(&["m1", "m2", "m1"]));
    let b = dedup_preserving_order(ids(&["m2", "m2", "m1"]));

    assert_eq!(intersect(&a, &b), ids(&["m2", "m1"]));
}

#[test]
fn test_window_start_example() {
    assert_eq!(window_start_from(1_700_000_000_000, 1_699_000_000_000), 1_699_000_000);
}

#[test]
fn test_pagination_plan_from_settings() {
    let settings = MatchingSettings {
        default_match_count: 100,
        max_match_list_size: 300,
        ..MatchingSettings::default()
    };

    let plan = PaginationPlan::from_settings(&settings);
    assert_eq!(plan.pages, settings.max_match_history_requests());

    let starts: Vec<u32> = plan.queries(0).map(|q| q.start).collect();
    assert_eq!(starts, vec![0, 100, 200]);

    let oversized = MatchingSettings {
        default_match_count: 200,
        max_match_list_size: 400,
        ..MatchingSettings::default()
    };
    let plan = PaginationPlan::from_settings(&oversized);
    assert_eq!(plan.page_size, 100);
    assert_eq!(plan.pages, oversized.max_match_history_requests());
    assert_eq!(plan.pages, 4);
}

#[test]
fn test_time_ago_examples() {
    let now = Utc::now();

    let ninety_seconds = (now - Duration::seconds(90)).timestamp_millis();
    assert_eq!(time_ago_at(ninety_seconds, now), "1 minute ago");

    let three_days = (now - Duration::days(3)).timestamp_millis();
    assert_eq!(time_ago_at(three_days, now), "3 days ago");
}

#[test]
fn test_time_ago_boundaries() {
    let now = Utc::now();
    let at = |secs: i64| time_ago_at((now - Duration::seconds(secs)).timestamp_millis(), now);

    assert_eq!(at(0), "less than a minute ago");
    assert_eq!(at(60), "1 minute ago");
    assert_eq!(at(3_599), "59 minutes ago");
    assert_eq!(at(3_600), "1 hour ago");
    assert_eq!(at(86_400), "1 day ago");
    assert_eq!(at(2_592_000), "1 month ago");
    assert_eq!(at(31_536_000), "1 year ago");
}

#[test]
fn test_format_timestamp_utc() {
    assert_eq!(format_timestamp(0), "1970-01-01 00:00:00");
}

#[test]
fn test_riot_id_validation() {
    assert_eq!(RiotId::parse("Hide on bush#KR1").unwrap().game_name, "Hide on bush");
    assert_eq!("Ghost#0000".parse::<RiotId>().unwrap().to_string(), "Ghost#0000");
    assert_eq!(RiotId::parse("No separator"), Err(RiotIdError::InvalidFormat));
    assert_eq!(RiotId::parse("Two#Hash#Tags"), Err(RiotIdError::InvalidFormat));
    assert_eq!(RiotId::parse("Short#AB"), Err(RiotIdError::TagTooShort));
}

#[test]
fn test_region_routing() {
    let routes: Vec<&str> = Region::ALL.iter().map(|r| r.routing_value()).collect();
    assert_eq!(routes, vec!["americas", "asia", "europe", "sea"]);
    assert_eq!(Region::default(), Region::Americas);
}
