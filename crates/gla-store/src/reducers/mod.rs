//! Reducers
//!
//! `app_reducer::reduce` is the root reducer; it hands each tagged action to
//! the reducer of its slice. Every reducer takes the current `Arc<StateTree>`
//! and returns either that same `Arc` (nothing to change) or a new root that
//! shares every branch it did not touch.

pub mod accounts_reducer;
pub mod app_reducer;
pub mod campaigns_reducer;
pub mod merchant_center_reducer;
pub mod report_reducer;
pub mod shipping_reducer;

pub use app_reducer::reduce;

use crate::state::{AccountsState, McState, ShippingState, StateTree};
use std::sync::Arc;

// The clone held by the caller keeps every refcount >= 2, so each
// `Arc::make_mut` below copies exactly one level of the tree.

pub(crate) fn update_root(
    state: &Arc<StateTree>,
    f: impl FnOnce(&mut StateTree),
) -> Arc<StateTree> {
    let mut next = Arc::clone(state);
    f(Arc::make_mut(&mut next));
    next
}

pub(crate) fn update_mc(state: &Arc<StateTree>, f: impl FnOnce(&mut McState)) -> Arc<StateTree> {
    update_root(state, |root| f(Arc::make_mut(&mut root.mc)))
}

pub(crate) fn update_shipping(
    state: &Arc<StateTree>,
    f: impl FnOnce(&mut ShippingState),
) -> Arc<StateTree> {
    update_mc(state, |mc| f(Arc::make_mut(&mut mc.shipping)))
}

pub(crate) fn update_accounts(
    state: &Arc<StateTree>,
    f: impl FnOnce(&mut AccountsState),
) -> Arc<StateTree> {
    update_mc(state, |mc| f(Arc::make_mut(&mut mc.accounts)))
}
