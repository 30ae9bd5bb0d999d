//! Facet filters over a dataset snapshot.
//!
//! Influencers are narrowed by platform and category; posts, payouts and
//! tracking rows follow the surviving roster, and tracking rows are further
//! narrowed by brand and product.

use influencer_core::{Dataset, InfluencerId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use tracing::debug;

/// Accepted values per facet. `None` accepts everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacetFilter {
    pub platforms: Option<BTreeSet<String>>,
    pub categories: Option<BTreeSet<String>>,
    pub brands: Option<BTreeSet<String>>,
    pub products: Option<BTreeSet<String>>,
}

/// Distinct values present in a dataset, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Facets {
    pub platforms: Vec<String>,
    pub categories: Vec<String>,
    pub brands: Vec<String>,
    pub products: Vec<String>,
}

fn accepts(allowed: &Option<BTreeSet<String>>, value: &str) -> bool {
    allowed.as_ref().map_or(true, |set| set.contains(value))
}

fn to_set<I, S>(values: I) -> Option<BTreeSet<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Some(values.into_iter().map(Into::into).collect())
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

impl FacetFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_platforms<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.platforms = to_set(values);
        self
    }

    pub fn with_categories<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = to_set(values);
        self
    }

    pub fn with_brands<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.brands = to_set(values);
        self
    }

    pub fn with_products<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.products = to_set(values);
        self
    }

    pub fn is_unrestricted(&self) -> bool {
        self.platforms.is_none()
            && self.categories.is_none()
            && self.brands.is_none()
            && self.products.is_none()
    }

    /// Build the filtered snapshot. The input is left untouched.
    pub fn apply(&self, dataset: &Dataset) -> Dataset {
        let influencers: Vec<_> = dataset
            .influencers
            .iter()
            .filter(|i| accepts(&self.platforms, &i.platform) && accepts(&self.categories, &i.category))
            .cloned()
            .collect();

        let kept: HashSet<InfluencerId> = influencers.iter().map(|i| i.id).collect();

        let posts = dataset
            .posts
            .iter()
            .filter(|p| kept.contains(&p.influencer_id))
            .cloned()
            .collect();

        let tracking = dataset
            .tracking
            .iter()
            .filter(|t| {
                kept.contains(&t.influencer_id)
                    && accepts(&self.brands, &t.source)
                    && accepts(&self.products, &t.product)
            })
            .cloned()
            .collect();

        let payouts = dataset
            .payouts
            .iter()
            .filter(|p| kept.contains(&p.influencer_id))
            .cloned()
            .collect();

        let filtered = Dataset::new(influencers, posts, tracking, payouts);
        debug!(before = ?dataset.row_counts(), after = ?filtered.row_counts(), "Facet filter applied");
        filtered
    }
}

impl Facets {
    pub fn of(dataset: &Dataset) -> Self {
        Self {
            platforms: distinct(dataset.influencers.iter().map(|i| i.platform.as_str())),
            categories: distinct(dataset.influencers.iter().map(|i| i.category.as_str())),
            brands: distinct(dataset.tracking.iter().map(|t| t.source.as_str())),
            products: distinct(dataset.tracking.iter().map(|t| t.product.as_str())),
        }
    }
}
