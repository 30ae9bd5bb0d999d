//! End-to-end flow over the bundled sample data: load, filter, report.

use chrono::{TimeZone, Utc};
use influencer_core::Dataset;
use influencer_ingest::{load_dataset, DataSources};
use influencer_reporting::metrics::{self, DEFAULT_TOP_N};
use influencer_reporting::{DashboardReport, FacetFilter, Facets, ReportOptions};
use std::collections::BTreeSet;
use std::path::PathBuf;

fn bundled() -> Dataset {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data");
    load_dataset(&DataSources::in_dir(dir)).unwrap()
}

#[test]
fn test_report_is_deterministic() {
    let dataset = bundled();
    let options = ReportOptions::default();
    let at = Utc.with_ymd_and_hms(2025, 7, 1, 9, 0, 0).unwrap();

    let first = DashboardReport::build_at(&dataset, &options, at);
    let second = DashboardReport::build_at(&dataset, &options, at);
    assert_eq!(first, second);
}

#[test]
fn test_top_influencers_properties() {
    let dataset = bundled();
    let top =
        metrics::get_top_influencers_by_revenue(&dataset.tracking, &dataset.influencers, DEFAULT_TOP_N);

    let groups: BTreeSet<_> = dataset.tracking.iter().map(|t| t.influencer_id).collect();
    assert_eq!(top.len(), DEFAULT_TOP_N.min(groups.len()));
    assert!(top.windows(2).all(|w| w[0].revenue >= w[1].revenue));
}

#[test]
fn test_platform_summary_matches_joined_platforms() {
    let dataset = bundled();
    let summary = metrics::get_platform_summary(&dataset.tracking, &dataset.influencers);

    let expected: BTreeSet<_> = dataset
        .tracking
        .iter()
        .filter_map(|t| dataset.influencers.iter().find(|i| i.id == t.influencer_id))
        .map(|i| i.platform.clone())
        .collect();
    let actual: BTreeSet<_> = summary.iter().map(|p| p.platform.clone()).collect();
    assert_eq!(actual, expected);

    let joined_total: f64 = summary.iter().map(|p| p.revenue).sum();
    assert!((joined_total - metrics::total_revenue(&dataset.tracking)).abs() < 1e-6);
}

#[test]
fn test_filtered_report_only_covers_selected_platform() {
    let dataset = bundled();
    let facets = Facets::of(&dataset);
    let platform = facets.platforms[0].clone();

    let filtered = FacetFilter::new().with_platforms([platform.clone()]).apply(&dataset);
    let report = DashboardReport::build(&filtered, &ReportOptions::default());

    assert!(report.top_influencers.iter().all(|r| r.platform == platform));
    assert!(report.lowest_roas.iter().all(|r| r.platform == platform));
    assert!(report.platform_summary.len() <= 1);
    assert!(report.platform_summary.iter().all(|p| p.platform == platform));
}

#[test]
fn test_engagement_rates_match_definition() {
    let dataset = bundled();
    let engaged = metrics::calculate_engagement_rate(&dataset.posts);

    assert_eq!(engaged.len(), dataset.posts.len());
    for row in &engaged {
        let expected =
            (row.post.likes as f64 + row.post.comments as f64) / row.post.reach as f64;
        assert_eq!(row.engagement_rate, Some(expected));
    }
}
