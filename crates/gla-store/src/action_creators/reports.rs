//! Report creators

use super::ActionContext;
use crate::actions::{Action, ReportAction};
use crate::domain_models::ReportKey;
use gla_client::ApiRequest;
use serde_json::Value;

pub fn receive_report(key: String, data: Value) -> Action {
    Action::Report(ReportAction::Receive { key, data })
}

/// Load the data set of one report
///
/// Reports are kept as raw JSON: their shape depends on the requested fields.
pub async fn fetch_report(ctx: &ActionContext, key: &ReportKey) -> Option<Action> {
    let request = ApiRequest::get(key.path()).with_query(key.query.clone());
    let result = ctx.fetch_json::<Value>(request).await;
    let data = ctx.settle(result, "There was an error loading the report.")?;
    Some(receive_report(key.cache_key(), data))
}
