use crate::actions::Action;
use crate::reducers::{
    accounts_reducer, campaigns_reducer, merchant_center_reducer, report_reducer,
    shipping_reducer,
};
use crate::state::StateTree;
use std::sync::Arc;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(state: &Arc<StateTree>, action: &Action) -> Arc<StateTree> {
    match action {
        Action::Shipping(action) => shipping_reducer::reduce_shipping(state, action),
        Action::Accounts(action) => accounts_reducer::reduce_accounts(state, action),
        Action::MerchantCenter(action) => {
            merchant_center_reducer::reduce_merchant_center(state, action)
        }
        Action::Campaigns(action) => campaigns_reducer::reduce_campaigns(state, action),
        Action::Report(action) => report_reducer::reduce_report(state, action),
        Action::None => Arc::clone(state),
    }
}
