//! Report Reducer

use crate::actions::ReportAction;
use crate::reducers::update_root;
use crate::state::StateTree;
use std::sync::Arc;

/// Store a report data set under its cache key
pub fn reduce_report(state: &Arc<StateTree>, action: &ReportAction) -> Arc<StateTree> {
    match action {
        ReportAction::Receive { key, data } => {
            let data = Arc::new(data.clone());
            update_root(state, |root| {
                Arc::make_mut(&mut root.report).insert(key.clone(), data);
            })
        }
    }
}
