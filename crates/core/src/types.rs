//! Record types for the four campaign tables.
//!
//! Every table is a plain `Vec` of rows. Field names match the CSV headers
//! the marketing team exports, and any extra columns are ignored on load.

use serde::{Deserialize, Serialize};

pub type InfluencerId = u64;

/// Roster entry. Reference data; never modified after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Influencer {
    pub id: InfluencerId,
    pub name: String,
    pub platform: String,
    pub category: String,
    pub gender: String,
}

/// A single social post and its raw engagement counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub influencer_id: InfluencerId,
    pub likes: u64,
    pub comments: u64,
    /// Expected to be positive. Zero is tolerated and yields no engagement rate.
    pub reach: u64,
}

/// Conversion tracking row attributed to an influencer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingRecord {
    pub influencer_id: InfluencerId,
    /// Brand the order was placed with.
    pub source: String,
    pub product: String,
    pub revenue: f64,
    pub orders: u64,
}

/// Amount paid to an influencer. Several rows for one influencer are summed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    pub influencer_id: InfluencerId,
    pub total_payout: f64,
}

/// One snapshot of all four tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub influencers: Vec<Influencer>,
    pub posts: Vec<Post>,
    pub tracking: Vec<TrackingRecord>,
    pub payouts: Vec<Payout>,
}

impl Dataset {
    pub fn new(
        influencers: Vec<Influencer>,
        posts: Vec<Post>,
        tracking: Vec<TrackingRecord>,
        payouts: Vec<Payout>,
    ) -> Self {
        Self {
            influencers,
            posts,
            tracking,
            payouts,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.influencers.is_empty()
            && self.posts.is_empty()
            && self.tracking.is_empty()
            && self.payouts.is_empty()
    }

    /// Row counts in table order: influencers, posts, tracking, payouts.
    pub fn row_counts(&self) -> [usize; 4] {
        [
            self.influencers.len(),
            self.posts.len(),
            self.tracking.len(),
            self.payouts.len(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dataset_is_empty() {
        let dataset = Dataset::default();
        assert!(dataset.is_empty());
        assert_eq!(dataset.row_counts(), [0, 0, 0, 0]);
    }

    #[test]
    fn test_row_counts() {
        let dataset = Dataset::new(
            vec![Influencer {
                id: 1,
                name: "Asha".to_string(),
                platform: "Instagram".to_string(),
                category: "Fitness".to_string(),
                gender: "Female".to_string(),
            }],
            vec![],
            vec![TrackingRecord {
                influencer_id: 1,
                source: "MuscleBlaze".to_string(),
                product: "Whey".to_string(),
                revenue: 1200.0,
                orders: 2,
            }],
            vec![],
        );
        assert!(!dataset.is_empty());
        assert_eq!(dataset.row_counts(), [1, 0, 1, 0]);
    }

    #[test]
    fn test_tracking_record_json_shape() {
        let json = r#"{"influencer_id":7,"source":"HKVitals","product":"Multivitamin","revenue":499.5,"orders":1}"#;
        let record: TrackingRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.influencer_id, 7);
        assert_eq!(record.source, "HKVitals");
        assert!((record.revenue - 499.5).abs() < f64::EPSILON);
    }
}
