use influencer_core::{DashboardError, DashboardResult, Dataset};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const INFLUENCERS_FILE: &str = "influencers.csv";
pub const POSTS_FILE: &str = "posts.csv";
pub const TRACKING_FILE: &str = "tracking_data.csv";
pub const PAYOUTS_FILE: &str = "payouts.csv";

/// Locations of the four campaign tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSources {
    pub influencers: PathBuf,
    pub posts: PathBuf,
    pub tracking: PathBuf,
    pub payouts: PathBuf,
}

impl DataSources {
    /// The default file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            influencers: dir.join(INFLUENCERS_FILE),
            posts: dir.join(POSTS_FILE),
            tracking: dir.join(TRACKING_FILE),
            payouts: dir.join(PAYOUTS_FILE),
        }
    }

    /// Explicit files replace the defaults only as a complete set of four.
    pub fn resolve(
        dir: impl AsRef<Path>,
        influencers: Option<PathBuf>,
        posts: Option<PathBuf>,
        tracking: Option<PathBuf>,
        payouts: Option<PathBuf>,
    ) -> Self {
        match (influencers, posts, tracking, payouts) {
            (Some(influencers), Some(posts), Some(tracking), Some(payouts)) => Self {
                influencers,
                posts,
                tracking,
                payouts,
            },
            (None, None, None, None) => Self::in_dir(dir),
            _ => {
                warn!("Only some data files were given, loading all four from the data directory");
                Self::in_dir(dir)
            }
        }
    }
}

/// Read one CSV table into typed rows. Columns the row type does not name
/// are ignored, surrounding whitespace is trimmed.
pub fn load_table<T: DeserializeOwned>(path: &Path) -> DashboardResult<Vec<T>> {
    if !path.is_file() {
        return Err(DashboardError::MissingFile(path.to_path_buf()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| DashboardError::csv(path, e))?;

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        rows.push(result.map_err(|e| DashboardError::csv(path, e))?);
    }

    debug!(path = %path.display(), rows = rows.len(), "Table loaded");
    Ok(rows)
}

pub fn load_dataset(sources: &DataSources) -> DashboardResult<Dataset> {
    let dataset = Dataset::new(
        load_table(&sources.influencers)?,
        load_table(&sources.posts)?,
        load_table(&sources.tracking)?,
        load_table(&sources.payouts)?,
    );

    let [influencers, posts, tracking, payouts] = dataset.row_counts();
    info!(influencers, posts, tracking, payouts, "Campaign data loaded");
    Ok(dataset)
}
