//! Accounts Reducer
//!
//! Connection records for Jetpack, Google, Merchant Center and Google Ads.

use crate::actions::AccountsAction;
use crate::reducers::{update_accounts, update_mc};
use crate::state::{AccountsState, StateTree};
use std::sync::Arc;

/// Reduce account connection state
pub fn reduce_accounts(state: &Arc<StateTree>, action: &AccountsAction) -> Arc<StateTree> {
    let accounts = &state.mc.accounts;
    match action {
        AccountsAction::ReceiveJetpack(account) => {
            let account = Arc::new(account.clone());
            update_accounts(state, |a| a.jetpack = Some(account))
        }

        AccountsAction::ReceiveGoogle(account) => {
            let account = Arc::new(account.clone());
            update_accounts(state, |a| a.google = Some(account))
        }

        AccountsAction::ReceiveGoogleAccess(access) => {
            let access = Arc::new(access.clone());
            update_accounts(state, |a| a.google_access = Some(access))
        }

        AccountsAction::ReceiveMerchantCenter(account) => {
            let account = Arc::new(account.clone());
            update_accounts(state, |a| a.mc = Some(account))
        }

        AccountsAction::ReceiveExistingMerchantCenter(list) => {
            let list = Arc::new(list.clone());
            update_accounts(state, |a| a.existing_mc = Some(list))
        }

        AccountsAction::ReceiveAds(account) => {
            let account = Arc::new(account.clone());
            update_accounts(state, |a| a.ads = Some(account))
        }

        AccountsAction::ReceiveExistingAds(list) => {
            let list = Arc::new(list.clone());
            update_accounts(state, |a| a.existing_ads = Some(list))
        }

        AccountsAction::ReceiveAdsBillingStatus(status) => {
            let status = Arc::new(status.clone());
            update_accounts(state, |a| a.ads_billing_status = Some(status))
        }

        AccountsAction::DisconnectGoogle => {
            if accounts.google.is_none() && accounts.google_access.is_none() {
                return Arc::clone(state);
            }
            log::info!("Google account disconnected");
            update_accounts(state, |a| {
                a.google = None;
                a.google_access = None;
            })
        }

        AccountsAction::DisconnectAds => {
            if accounts.ads.is_none() && accounts.ads_billing_status.is_none() {
                return Arc::clone(state);
            }
            log::info!("Google Ads account disconnected");
            update_accounts(state, |a| {
                a.ads = None;
                a.ads_billing_status = None;
            })
        }

        AccountsAction::DisconnectAll => {
            if accounts.is_empty() {
                return Arc::clone(state);
            }
            log::info!("All accounts disconnected");
            update_mc(state, |mc| mc.accounts = Arc::new(AccountsState::default()))
        }
    }
}
