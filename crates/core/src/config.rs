use crate::error::DashboardResult;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Root dashboard configuration. Loaded from an optional TOML file and
/// environment variables with the prefix `INFLUENCER_DASHBOARD__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default = "default_persona_limit")]
    pub persona_limit: usize,
    #[serde(default = "default_lowest_roas_limit")]
    pub lowest_roas_limit: usize,
    /// Brand revenue expected without influencer activity.
    #[serde(default = "default_baselines")]
    pub baselines: Vec<BrandBaseline>,
}

/// Keys are kept as a list of entries: config keys are case-folded, brand
/// names must not be.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BrandBaseline {
    pub brand: String,
    pub baseline: f64,
}

// Default functions
fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}
fn default_currency_symbol() -> String {
    "₹".to_string()
}
fn default_top_n() -> usize {
    5
}
fn default_persona_limit() -> usize {
    5
}
fn default_lowest_roas_limit() -> usize {
    5
}
fn default_baselines() -> Vec<BrandBaseline> {
    [("MuscleBlaze", 30000.0), ("HKVitals", 20000.0), ("Gritzo", 10000.0)]
        .into_iter()
        .map(|(brand, baseline)| BrandBaseline {
            brand: brand.to_string(),
            baseline,
        })
        .collect()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            currency_symbol: default_currency_symbol(),
            top_n: default_top_n(),
            persona_limit: default_persona_limit(),
            lowest_roas_limit: default_lowest_roas_limit(),
            baselines: default_baselines(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and an optional config file.
    pub fn load(file: Option<&Path>) -> DashboardResult<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix("INFLUENCER_DASHBOARD")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Baselines keyed by brand. A later entry for the same brand wins.
    pub fn baseline_map(&self) -> HashMap<String, f64> {
        self.baselines
            .iter()
            .map(|b| (b.brand.clone(), b.baseline))
            .collect()
    }
}
