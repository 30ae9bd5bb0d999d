//! Influencer Dashboard: campaign KPIs, rankings and brand lift for the
//! marketing team, computed from the four campaign CSV files.

mod render;

use clap::{Parser, ValueEnum};
use influencer_core::config::AppConfig;
use influencer_ingest::{export_tracking, load_dataset, DataSources};
use influencer_reporting::{DashboardReport, FacetFilter, Facets, ReportOptions};
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "influencer-dashboard")]
#[command(about = "Influencer marketing campaign dashboard")]
#[command(version)]
struct Cli {
    /// TOML configuration file
    #[arg(long, env = "INFLUENCER_DASHBOARD_CONFIG")]
    config: Option<PathBuf>,

    /// Directory holding influencers.csv, posts.csv, tracking_data.csv and payouts.csv (overrides config)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Influencer roster CSV (used only when all four files are given)
    #[arg(long)]
    influencers: Option<PathBuf>,

    /// Posts CSV
    #[arg(long)]
    posts: Option<PathBuf>,

    /// Conversion tracking CSV
    #[arg(long)]
    tracking: Option<PathBuf>,

    /// Payouts CSV
    #[arg(long)]
    payouts: Option<PathBuf>,

    /// Keep only these platforms
    #[arg(long, value_delimiter = ',')]
    platform: Vec<String>,

    /// Keep only these influencer categories
    #[arg(long, value_delimiter = ',')]
    category: Vec<String>,

    /// Keep only these brands
    #[arg(long, value_delimiter = ',')]
    brand: Vec<String>,

    /// Keep only these products
    #[arg(long, value_delimiter = ',')]
    product: Vec<String>,

    /// Number of top influencers to list (overrides config)
    #[arg(long)]
    top_n: Option<usize>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write the filtered tracking rows to this CSV file
    #[arg(long)]
    export: Option<PathBuf>,

    /// List the platforms, categories, brands and products in the data, then exit
    #[arg(long, default_value_t = false)]
    list_facets: bool,

    /// Emit logs as JSON
    #[arg(long, default_value_t = false)]
    log_json: bool,
}

impl Cli {
    fn facet_filter(&self) -> FacetFilter {
        let mut filter = FacetFilter::new();
        if !self.platform.is_empty() {
            filter = filter.with_platforms(self.platform.iter().cloned());
        }
        if !self.category.is_empty() {
            filter = filter.with_categories(self.category.iter().cloned());
        }
        if !self.brand.is_empty() {
            filter = filter.with_brands(self.brand.iter().cloned());
        }
        if !self.product.is_empty() {
            filter = filter.with_products(self.product.iter().cloned());
        }
        filter
    }
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            "influencer_dashboard=info,influencer_ingest=info,influencer_reporting=info".into()
        });
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    // An explicit config file must load; otherwise fall back to defaults.
    let mut config = match cli.config.as_deref() {
        Some(path) => AppConfig::load(Some(path))?,
        None => AppConfig::load(None).unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load config, using defaults");
            AppConfig::default()
        }),
    };

    if let Some(dir) = cli.data_dir.clone() {
        config.data_dir = dir;
    }
    if let Some(top_n) = cli.top_n {
        config.top_n = top_n;
    }

    info!(
        data_dir = %config.data_dir.display(),
        top_n = config.top_n,
        baselines = config.baselines.len(),
        "Configuration loaded"
    );

    let sources = DataSources::resolve(
        &config.data_dir,
        cli.influencers.clone(),
        cli.posts.clone(),
        cli.tracking.clone(),
        cli.payouts.clone(),
    );
    let dataset = load_dataset(&sources)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if cli.list_facets {
        let facets = Facets::of(&dataset);
        match cli.format {
            OutputFormat::Text => render::render_facets(&mut out, &facets)?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut out, &facets)?;
                writeln!(out)?;
            }
        }
        return Ok(());
    }

    let filter = cli.facet_filter();
    let filtered = filter.apply(&dataset);
    if !filter.is_unrestricted() && filtered.tracking.is_empty() {
        warn!("No tracking rows match the selected filters");
    }

    let report = DashboardReport::build(&filtered, &ReportOptions::from_config(&config));

    match cli.format {
        OutputFormat::Text => render::render_text(&mut out, &report, &config.currency_symbol)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        }
    }

    if let Some(path) = cli.export.as_deref() {
        export_tracking(path, &filtered.tracking)?;
    }

    Ok(())
}
