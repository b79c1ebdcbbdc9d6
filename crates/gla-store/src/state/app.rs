use super::McState;
use crate::domain_models::{AdsCampaign, IssuesPage, McSetup, ProductFeedPage, ProductStatistics};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Results of a paged resource, keyed by the query that produced them
pub type QueryCache<T> = BTreeMap<String, Arc<T>>;

/// Root of the store state
///
/// `None` means the slice has not been fetched yet and must be read as
/// "loading", not as "empty".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateTree {
    pub mc: Arc<McState>,
    pub ads_campaigns: Option<Arc<Vec<AdsCampaign>>>,
    pub mc_setup: Option<Arc<McSetup>>,
    pub mc_product_statistics: Option<Arc<ProductStatistics>>,
    pub mc_issues: Arc<QueryCache<IssuesPage>>,
    pub mc_product_feed: Arc<QueryCache<ProductFeedPage>>,
    /// Report data sets keyed by `ReportKey::cache_key`
    pub report: Arc<BTreeMap<String, Arc<Value>>>,
}
