//! Influencer campaign reporting: revenue, ROAS and engagement metrics,
//! facet filters, and dashboard assembly.

pub mod dashboard;
pub mod filter;
pub mod format;
pub mod metrics;

pub use dashboard::{DashboardReport, ReportOptions};
pub use filter::{FacetFilter, Facets};
pub use format::format_currency;
pub use metrics::BaselineTable;
