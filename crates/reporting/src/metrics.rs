//! Campaign metrics: engagement, ROAS, revenue rankings and brand lift.
//!
//! Every function borrows its input tables and returns freshly built rows.
//! Data-shape problems (zero reach, zero payout, unknown influencer ids,
//! brands without a baseline, empty tables) never fail: they resolve to
//! `0.0`, `None`, or a dropped join row as documented per function.

use influencer_core::{AppConfig, Dataset, Influencer, InfluencerId, Payout, Post, TrackingRecord};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

pub const DEFAULT_TOP_N: usize = 5;
pub const DEFAULT_PERSONA_LIMIT: usize = 5;
pub const DEFAULT_LOWEST_ROAS_LIMIT: usize = 5;

// ─── Result rows ─────────────────────────────────────────────────────

/// A post together with its derived engagement rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagedPost {
    #[serde(flatten)]
    pub post: Post,
    /// `(likes + comments) / reach`; `None` when reach is zero.
    pub engagement_rate: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfluencerRevenue {
    pub influencer_id: InfluencerId,
    pub name: String,
    pub platform: String,
    pub category: String,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformRevenue {
    pub platform: String,
    pub revenue: f64,
}

/// Revenue per tracking record within one (category, gender) segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonaPerformance {
    pub category: String,
    pub gender: String,
    pub mean_revenue: f64,
    pub records: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfluencerRoas {
    pub influencer_id: InfluencerId,
    pub name: String,
    pub platform: String,
    pub category: String,
    /// `None` when the influencer has no tracking rows.
    pub revenue: Option<f64>,
    pub total_payout: f64,
    /// `None` when revenue is missing or the payout is zero.
    pub roas: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandIncrementalRoas {
    pub source: String,
    pub revenue: f64,
    pub baseline: Option<f64>,
    pub incremental_revenue: Option<f64>,
    pub incremental_roas: Option<f64>,
}

/// Headline totals for the filtered campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignKpis {
    pub total_revenue: f64,
    pub total_orders: u64,
    pub total_payout: f64,
    pub roas: f64,
    pub avg_reach: Option<f64>,
    pub avg_engagement_rate: Option<f64>,
}

// ─── Baselines ───────────────────────────────────────────────────────

/// Brand → baseline revenue, i.e. what the brand is expected to sell
/// without influencer activity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaselineTable {
    baselines: HashMap<String, f64>,
}

impl BaselineTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            baselines: config.baseline_map(),
        }
    }

    pub fn get(&self, brand: &str) -> Option<f64> {
        self.baselines.get(brand).copied()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for BaselineTable {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            baselines: iter.into_iter().map(|(b, v)| (b.into(), v)).collect(),
        }
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────

fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        None
    } else {
        Some(numerator / denominator)
    }
}

fn mean(sum: f64, count: usize) -> Option<f64> {
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Roster lookup by id. The first row wins if an id repeats.
fn influencer_index(influencers: &[Influencer]) -> HashMap<InfluencerId, &Influencer> {
    let mut index = HashMap::with_capacity(influencers.len());
    for influencer in influencers {
        index.entry(influencer.id).or_insert(influencer);
    }
    index
}

/// Summed revenue per influencer, ascending by id.
fn revenue_by_influencer(tracking: &[TrackingRecord]) -> BTreeMap<InfluencerId, f64> {
    let mut totals = BTreeMap::new();
    for record in tracking {
        *totals.entry(record.influencer_id).or_insert(0.0) += record.revenue;
    }
    totals
}

/// Summed payout per influencer in order of first appearance.
fn payout_by_influencer(payouts: &[Payout]) -> Vec<(InfluencerId, f64)> {
    let mut positions: HashMap<InfluencerId, usize> = HashMap::new();
    let mut totals: Vec<(InfluencerId, f64)> = Vec::new();
    for payout in payouts {
        match positions.get(&payout.influencer_id) {
            Some(&pos) => totals[pos].1 += payout.total_payout,
            None => {
                positions.insert(payout.influencer_id, totals.len());
                totals.push((payout.influencer_id, payout.total_payout));
            }
        }
    }
    totals
}

pub fn total_revenue(tracking: &[TrackingRecord]) -> f64 {
    tracking.iter().map(|r| r.revenue).sum()
}

/// Saturates at `u64::MAX` instead of overflowing.
pub fn total_orders(tracking: &[TrackingRecord]) -> u64 {
    tracking
        .iter()
        .fold(0u64, |acc, r| acc.saturating_add(r.orders))
}

pub fn total_payout(payouts: &[Payout]) -> f64 {
    payouts.iter().map(|p| p.total_payout).sum()
}

// ─── Metrics ─────────────────────────────────────────────────────────

/// Attach an engagement rate to every post, keeping input order.
pub fn calculate_engagement_rate(posts: &[Post]) -> Vec<EngagedPost> {
    posts
        .iter()
        .map(|post| EngagedPost {
            post: post.clone(),
            engagement_rate: ratio(post.likes as f64 + post.comments as f64, post.reach as f64),
        })
        .collect()
}

/// Global return on ad spend: total revenue over total payout, `0.0` when
/// nothing was paid out.
pub fn calculate_roas(tracking: &[TrackingRecord], payouts: &[Payout]) -> f64 {
    let revenue = total_revenue(tracking);
    let payout = total_payout(payouts);
    ratio(revenue, payout).unwrap_or(0.0)
}

/// Influencers ranked by summed revenue, highest first. Ties keep id order.
pub fn get_top_influencers_by_revenue(
    tracking: &[TrackingRecord],
    influencers: &[Influencer],
    top_n: usize,
) -> Vec<InfluencerRevenue> {
    let index = influencer_index(influencers);
    let mut rows: Vec<InfluencerRevenue> = revenue_by_influencer(tracking)
        .into_iter()
        .filter_map(|(id, revenue)| {
            index.get(&id).map(|inf| InfluencerRevenue {
                influencer_id: id,
                name: inf.name.clone(),
                platform: inf.platform.clone(),
                category: inf.category.clone(),
                revenue,
            })
        })
        .collect();

    rows.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
    rows.truncate(top_n);
    debug!(rows = rows.len(), top_n, "Top influencers ranked");
    rows
}

/// Revenue per platform over tracking rows with a known influencer.
pub fn get_platform_summary(
    tracking: &[TrackingRecord],
    influencers: &[Influencer],
) -> Vec<PlatformRevenue> {
    let index = influencer_index(influencers);
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for record in tracking {
        if let Some(inf) = index.get(&record.influencer_id) {
            *totals.entry(inf.platform.as_str()).or_insert(0.0) += record.revenue;
        }
    }

    totals
        .into_iter()
        .map(|(platform, revenue)| PlatformRevenue {
            platform: platform.to_string(),
            revenue,
        })
        .collect()
}

/// Best (category, gender) segments by mean revenue per tracking record.
///
/// The mean is taken over individual records, not over per-influencer
/// totals, so influencers with more orders weigh more.
pub fn get_persona_performance(
    tracking: &[TrackingRecord],
    influencers: &[Influencer],
    limit: usize,
) -> Vec<PersonaPerformance> {
    let index = influencer_index(influencers);
    let mut groups: BTreeMap<(&str, &str), (f64, usize)> = BTreeMap::new();
    for record in tracking {
        if let Some(inf) = index.get(&record.influencer_id) {
            let entry = groups
                .entry((inf.category.as_str(), inf.gender.as_str()))
                .or_insert((0.0, 0));
            entry.0 += record.revenue;
            entry.1 += 1;
        }
    }

    let mut rows: Vec<PersonaPerformance> = groups
        .into_iter()
        .filter_map(|((category, gender), (sum, count))| {
            mean(sum, count).map(|mean_revenue| PersonaPerformance {
                category: category.to_string(),
                gender: gender.to_string(),
                mean_revenue,
                records: count,
            })
        })
        .collect();

    rows.sort_by(|a, b| b.mean_revenue.total_cmp(&a.mean_revenue));
    rows.truncate(limit);
    rows
}

/// Paid influencers with the weakest return, lowest ROAS first.
///
/// Every payout is kept even without matching revenue; such rows, and rows
/// with a zero payout, have no ROAS and sort after all defined values.
pub fn get_lowest_roas_influencers(
    tracking: &[TrackingRecord],
    payouts: &[Payout],
    influencers: &[Influencer],
    limit: usize,
) -> Vec<InfluencerRoas> {
    let revenue_totals = revenue_by_influencer(tracking);
    let index = influencer_index(influencers);

    let mut rows: Vec<InfluencerRoas> = payout_by_influencer(payouts)
        .into_iter()
        .filter_map(|(id, total_payout)| {
            let inf = index.get(&id)?;
            let revenue = revenue_totals.get(&id).copied();
            Some(InfluencerRoas {
                influencer_id: id,
                name: inf.name.clone(),
                platform: inf.platform.clone(),
                category: inf.category.clone(),
                revenue,
                total_payout,
                roas: revenue.and_then(|r| ratio(r, total_payout)),
            })
        })
        .collect();

    rows.sort_by(|a, b| match (a.roas, b.roas) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    rows.truncate(limit);
    debug!(rows = rows.len(), "Lowest ROAS influencers ranked");
    rows
}

/// Revenue above each brand's baseline, relative to the overall payout.
///
/// `total_payout_overall` is one scalar shared by every brand row. Brands
/// missing from `baselines` are kept with `None` incremental figures.
pub fn get_incremental_roas_by_brand(
    tracking: &[TrackingRecord],
    baselines: &BaselineTable,
    total_payout_overall: f64,
) -> Vec<BrandIncrementalRoas> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for record in tracking {
        *totals.entry(record.source.as_str()).or_insert(0.0) += record.revenue;
    }

    totals
        .into_iter()
        .map(|(source, revenue)| {
            let baseline = baselines.get(source);
            if baseline.is_none() {
                debug!(brand = source, "No baseline configured for brand");
            }
            let incremental_revenue = baseline.map(|b| revenue - b);
            BrandIncrementalRoas {
                source: source.to_string(),
                revenue,
                baseline,
                incremental_revenue,
                incremental_roas: incremental_revenue
                    .and_then(|inc| ratio(inc, total_payout_overall)),
            }
        })
        .collect()
}

/// Headline KPIs over one dataset snapshot.
pub fn campaign_kpis(dataset: &Dataset) -> CampaignKpis {
    let engaged = calculate_engagement_rate(&dataset.posts);
    let reach_sum: f64 = dataset.posts.iter().map(|p| p.reach as f64).sum();
    let rates: Vec<f64> = engaged.iter().filter_map(|p| p.engagement_rate).collect();

    CampaignKpis {
        total_revenue: total_revenue(&dataset.tracking),
        total_orders: total_orders(&dataset.tracking),
        total_payout: total_payout(&dataset.payouts),
        roas: calculate_roas(&dataset.tracking, &dataset.payouts),
        avg_reach: mean(reach_sum, dataset.posts.len()),
        avg_engagement_rate: mean(rates.iter().sum(), rates.len()),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
