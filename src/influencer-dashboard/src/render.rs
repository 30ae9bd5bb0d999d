//! Plain-text rendering of a dashboard report.

use influencer_reporting::format::{
    format_average, format_count, format_currency, format_percent, format_ratio,
};
use influencer_reporting::{DashboardReport, Facets};
use std::io::{self, Write};

fn heading(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(72))
}

fn optional_currency(value: Option<f64>, symbol: &str) -> String {
    value.map_or_else(|| "-".to_string(), |v| format_currency(v, symbol))
}

/// Values accepted by the `--platform/--category/--brand/--product` filters.
pub fn render_facets(out: &mut impl Write, facets: &Facets) -> io::Result<()> {
    heading(out, "AVAILABLE FILTERS")?;
    for (label, values) in [
        ("Platform", &facets.platforms),
        ("Category", &facets.categories),
        ("Brand", &facets.brands),
        ("Product", &facets.products),
    ] {
        writeln!(out, "{:<10} {}", format!("{label}:"), values.join(", "))?;
    }
    Ok(())
}

pub fn render_text(out: &mut impl Write, report: &DashboardReport, symbol: &str) -> io::Result<()> {
    let kpis = &report.kpis;

    heading(out, "CAMPAIGN KPIs")?;
    writeln!(out, "Total Revenue:        {}", format_currency(kpis.total_revenue, symbol))?;
    writeln!(out, "Total Orders:         {}", format_count(kpis.total_orders))?;
    writeln!(out, "Total Payout:         {}", format_currency(kpis.total_payout, symbol))?;
    writeln!(out, "ROAS:                 {}", format_ratio(Some(kpis.roas)))?;

    heading(out, "POST PERFORMANCE")?;
    writeln!(out, "Avg Reach per Post:   {}", format_average(kpis.avg_reach))?;
    writeln!(out, "Avg Engagement Rate:  {}", format_percent(kpis.avg_engagement_rate))?;

    heading(out, &format!("TOP {} INFLUENCERS BY REVENUE", report.top_influencers.len()))?;
    writeln!(out, "{:<22} {:<12} {:<12} {:>18}", "Name", "Platform", "Category", "Revenue")?;
    for row in &report.top_influencers {
        writeln!(
            out,
            "{:<22} {:<12} {:<12} {:>18}",
            row.name,
            row.platform,
            row.category,
            format_currency(row.revenue, symbol)
        )?;
    }

    heading(out, "REVENUE BY PLATFORM")?;
    writeln!(out, "{:<22} {:>18} {:>10}", "Platform", "Revenue", "Share")?;
    for row in &report.platform_summary {
        writeln!(
            out,
            "{:<22} {:>18} {:>10}",
            row.platform,
            format_currency(row.revenue, symbol),
            format_percent(row.share)
        )?;
    }

    heading(out, "BEST PERFORMING PERSONAS")?;
    writeln!(out, "{:<16} {:<10} {:>18} {:>8}", "Category", "Gender", "Avg Revenue", "Records")?;
    for row in &report.personas {
        writeln!(
            out,
            "{:<16} {:<10} {:>18} {:>8}",
            row.category,
            row.gender,
            format_currency(row.mean_revenue, symbol),
            row.records
        )?;
    }

    heading(out, "LOWEST PERFORMING INFLUENCERS (POOR ROI)")?;
    writeln!(
        out,
        "{:<22} {:<12} {:<12} {:>16} {:>16} {:>8}",
        "Name", "Platform", "Category", "Revenue", "Payout", "ROAS"
    )?;
    for row in &report.lowest_roas {
        writeln!(
            out,
            "{:<22} {:<12} {:<12} {:>16} {:>16} {:>8}",
            row.name,
            row.platform,
            row.category,
            optional_currency(row.revenue, symbol),
            format_currency(row.total_payout, symbol),
            format_ratio(row.roas)
        )?;
    }

    heading(out, "INCREMENTAL ROAS BY BRAND")?;
    writeln!(
        out,
        "{:<16} {:>16} {:>16} {:>18} {:>10}",
        "Brand", "Revenue", "Baseline", "Incremental", "Inc. ROAS"
    )?;
    for row in &report.incremental_roas {
        writeln!(
            out,
            "{:<16} {:>16} {:>16} {:>18} {:>10}",
            row.source,
            format_currency(row.revenue, symbol),
            optional_currency(row.baseline, symbol),
            optional_currency(row.incremental_revenue, symbol),
            format_ratio(row.incremental_roas)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Generated at {}", report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"))
}
