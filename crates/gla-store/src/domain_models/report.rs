use crate::query_key::query_key;
use chrono::NaiveDate;
use gla_client::Query;
use std::fmt;

/// Which program a report is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportSource {
    /// Paid campaigns (`/ads/reports/...`)
    Ads,
    /// Free listings (`/mc/reports/...`)
    FreeListings,
}

impl ReportSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportSource::Ads => "ads",
            ReportSource::FreeListings => "mc",
        }
    }
}

impl fmt::Display for ReportSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one report data set: source, report type (`programs`,
/// `products`) and the metric/date-range query
#[derive(Debug, Clone, PartialEq)]
pub struct ReportKey {
    pub source: ReportSource,
    pub report_type: String,
    pub query: Query,
}

impl ReportKey {
    pub fn new(source: ReportSource, report_type: impl Into<String>, query: Query) -> Self {
        Self {
            source,
            report_type: report_type.into(),
            query,
        }
    }

    /// Report over a closed date range
    pub fn for_range(
        source: ReportSource,
        report_type: impl Into<String>,
        after: NaiveDate,
        before: NaiveDate,
        query: Query,
    ) -> Self {
        let query = query
            .with("after", after.format("%Y-%m-%d").to_string())
            .with("before", before.format("%Y-%m-%d").to_string());
        Self::new(source, report_type, query)
    }

    /// Key under which the data set is stored in `state.report`
    pub fn cache_key(&self) -> String {
        format!(
            "{}:{}:{}",
            self.source,
            self.report_type,
            query_key(&self.query)
        )
    }

    /// Namespace-relative endpoint path
    pub fn path(&self) -> String {
        format!("/{}/reports/{}", self.source, self.report_type)
    }
}
