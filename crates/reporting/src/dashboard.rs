//! Influencer campaign dashboard: every metric computed over one snapshot.

use crate::metrics::{
    self, BaselineTable, BrandIncrementalRoas, CampaignKpis, InfluencerRevenue, InfluencerRoas,
    PersonaPerformance,
};
use chrono::{DateTime, Utc};
use influencer_core::{AppConfig, Dataset};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Limits and lookup tables used while building a report.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub top_n: usize,
    pub persona_limit: usize,
    pub lowest_roas_limit: usize,
    pub baselines: BaselineTable,
}

impl ReportOptions {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            top_n: config.top_n,
            persona_limit: config.persona_limit,
            lowest_roas_limit: config.lowest_roas_limit,
            baselines: BaselineTable::from_config(config),
        }
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

/// Platform revenue plus its share of all joined revenue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformShare {
    pub platform: String,
    pub revenue: f64,
    /// `None` when no joined revenue exists at all.
    pub share: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    pub kpis: CampaignKpis,
    pub top_influencers: Vec<InfluencerRevenue>,
    pub platform_summary: Vec<PlatformShare>,
    pub personas: Vec<PersonaPerformance>,
    pub lowest_roas: Vec<InfluencerRoas>,
    pub incremental_roas: Vec<BrandIncrementalRoas>,
    pub generated_at: DateTime<Utc>,
}

impl DashboardReport {
    pub fn build(dataset: &Dataset, options: &ReportOptions) -> Self {
        Self::build_at(dataset, options, Utc::now())
    }

    pub fn build_at(dataset: &Dataset, options: &ReportOptions, generated_at: DateTime<Utc>) -> Self {
        let kpis = metrics::campaign_kpis(dataset);

        let platforms = metrics::get_platform_summary(&dataset.tracking, &dataset.influencers);
        let platform_total: f64 = platforms.iter().map(|p| p.revenue).sum();
        let platform_summary = platforms
            .into_iter()
            .map(|p| PlatformShare {
                share: if platform_total > 0.0 {
                    Some(p.revenue / platform_total)
                } else {
                    None
                },
                platform: p.platform,
                revenue: p.revenue,
            })
            .collect();

        let report = Self {
            top_influencers: metrics::get_top_influencers_by_revenue(
                &dataset.tracking,
                &dataset.influencers,
                options.top_n,
            ),
            platform_summary,
            personas: metrics::get_persona_performance(
                &dataset.tracking,
                &dataset.influencers,
                options.persona_limit,
            ),
            lowest_roas: metrics::get_lowest_roas_influencers(
                &dataset.tracking,
                &dataset.payouts,
                &dataset.influencers,
                options.lowest_roas_limit,
            ),
            incremental_roas: metrics::get_incremental_roas_by_brand(
                &dataset.tracking,
                &options.baselines,
                kpis.total_payout,
            ),
            kpis,
            generated_at,
        };

        info!(
            influencers = dataset.influencers.len(),
            tracking_rows = dataset.tracking.len(),
            total_revenue = report.kpis.total_revenue,
            roas = report.kpis.roas,
            "Dashboard report built"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use influencer_core::{Influencer, Payout, TrackingRecord};

    fn dataset() -> Dataset {
        Dataset::new(
            vec![
                Influencer {
                    id: 1,
                    name: "Asha".to_string(),
                    platform: "Instagram".to_string(),
                    category: "Fitness".to_string(),
                    gender: "Female".to_string(),
                },
                Influencer {
                    id: 2,
                    name: "Rohan".to_string(),
                    platform: "YouTube".to_string(),
                    category: "Nutrition".to_string(),
                    gender: "Male".to_string(),
                },
            ],
            vec![],
            vec![
                TrackingRecord {
                    influencer_id: 1,
                    source: "MuscleBlaze".to_string(),
                    product: "Whey Protein".to_string(),
                    revenue: 30000.0,
                    orders: 10,
                },
                TrackingRecord {
                    influencer_id: 2,
                    source: "MuscleBlaze".to_string(),
                    product: "Creatine".to_string(),
                    revenue: 10000.0,
                    orders: 4,
                },
            ],
            vec![
                Payout { influencer_id: 1, total_payout: 12000.0 },
                Payout { influencer_id: 2, total_payout: 8000.0 },
            ],
        )
    }

    #[test]
    fn test_report_sections() {
        let report = DashboardReport::build(&dataset(), &ReportOptions::default());

        assert_eq!(report.kpis.total_revenue, 40000.0);
        assert_eq!(report.kpis.total_orders, 14);
        assert_eq!(report.kpis.roas, 2.0);
        assert_eq!(report.top_influencers[0].name, "Asha");
        assert_eq!(report.platform_summary.len(), 2);
        assert_eq!(report.platform_summary[0].share, Some(0.75));
        assert_eq!(report.personas.len(), 2);
        assert_eq!(report.lowest_roas[0].name, "Rohan");

        let brand = &report.incremental_roas[0];
        assert_eq!(brand.incremental_revenue, Some(10000.0));
        assert_eq!(brand.incremental_roas, Some(0.5));
    }

    #[test]
    fn test_options_limit_sections() {
        let options = ReportOptions {
            top_n: 1,
            persona_limit: 1,
            lowest_roas_limit: 1,
            baselines: BaselineTable::new(),
        };
        let report = DashboardReport::build(&dataset(), &options);

        assert_eq!(report.top_influencers.len(), 1);
        assert_eq!(report.personas.len(), 1);
        assert_eq!(report.lowest_roas.len(), 1);
        assert_eq!(report.incremental_roas[0].baseline, None);
    }

    #[test]
    fn test_empty_dataset_report() {
        let report = DashboardReport::build(&Dataset::default(), &ReportOptions::default());
        assert!(report.top_influencers.is_empty());
        assert!(report.platform_summary.is_empty());
        assert!(report.incremental_roas.is_empty());
        assert_eq!(report.kpis.roas, 0.0);
    }

    #[test]
    fn test_report_serializes() {
        let report = DashboardReport::build(&dataset(), &ReportOptions::default());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["kpis"]["total_orders"], 14);
        assert!(json["lowest_roas"].is_array());
    }
}
