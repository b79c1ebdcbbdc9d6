//! Report actions

use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum ReportAction {
    /// Data set fetched for a report key (see `ReportKey::cache_key`)
    Receive { key: String, data: Value },
}
