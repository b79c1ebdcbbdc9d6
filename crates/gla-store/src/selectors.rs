//! Selectors
//!
//! Pure readers over a `StateTree`. They return the stored `Arc`s so callers
//! can compare snapshots with `Arc::ptr_eq`. `None` means the resource has not
//! been loaded yet.

use crate::domain_models::{
    AdsAccount, AdsBillingStatus, AdsCampaign, ContactInformation, CountryCode,
    ExistingAdsAccount, ExistingMerchantCenterAccount, GoogleAccount, IssuesPage,
    JetpackAccount, McSetup, MerchantCenterAccount, ProductFeedPage, ProductStatistics,
    ReportKey, Settings, ShippingRate, ShippingTime, SupportedCountry, TargetAudience,
};
use crate::query_key::query_key;
use crate::state::StateTree;
use gla_client::Query;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

pub fn get_shipping_rates(state: &StateTree) -> &Arc<Vec<ShippingRate>> {
    &state.mc.shipping.rates
}

pub fn get_shipping_times(state: &StateTree) -> &Arc<Vec<ShippingTime>> {
    &state.mc.shipping.times
}

pub fn get_settings(state: &StateTree) -> Option<&Arc<Settings>> {
    state.mc.settings.as_ref()
}

pub fn get_jetpack_account(state: &StateTree) -> Option<&Arc<JetpackAccount>> {
    state.mc.accounts.jetpack.as_ref()
}

pub fn get_google_account(state: &StateTree) -> Option<&Arc<GoogleAccount>> {
    state.mc.accounts.google.as_ref()
}

pub fn get_google_account_access(state: &StateTree) -> Option<&Arc<Value>> {
    state.mc.accounts.google_access.as_ref()
}

pub fn get_google_mc_account(state: &StateTree) -> Option<&Arc<MerchantCenterAccount>> {
    state.mc.accounts.mc.as_ref()
}

pub fn get_existing_google_mc_accounts(
    state: &StateTree,
) -> Option<&Arc<Vec<ExistingMerchantCenterAccount>>> {
    state.mc.accounts.existing_mc.as_ref()
}

pub fn get_google_ads_account(state: &StateTree) -> Option<&Arc<AdsAccount>> {
    state.mc.accounts.ads.as_ref()
}

pub fn get_google_ads_account_billing_status(
    state: &StateTree,
) -> Option<&Arc<AdsBillingStatus>> {
    state.mc.accounts.ads_billing_status.as_ref()
}

pub fn get_existing_google_ads_accounts(
    state: &StateTree,
) -> Option<&Arc<Vec<ExistingAdsAccount>>> {
    state.mc.accounts.existing_ads.as_ref()
}

pub fn get_countries(state: &StateTree) -> Option<&Arc<BTreeMap<CountryCode, SupportedCountry>>> {
    state.mc.countries.as_ref()
}

pub fn get_target_audience(state: &StateTree) -> Option<&Arc<TargetAudience>> {
    state.mc.target_audience.as_ref()
}

pub fn get_google_mc_contact_information(state: &StateTree) -> Option<&Arc<ContactInformation>> {
    state.mc.contact.as_ref()
}

pub fn get_ads_campaigns(state: &StateTree) -> Option<&Arc<Vec<AdsCampaign>>> {
    state.ads_campaigns.as_ref()
}

pub fn get_mc_setup(state: &StateTree) -> Option<&Arc<McSetup>> {
    state.mc_setup.as_ref()
}

pub fn get_mc_product_statistics(state: &StateTree) -> Option<&Arc<ProductStatistics>> {
    state.mc_product_statistics.as_ref()
}

pub fn get_mc_issues<'a>(state: &'a StateTree, query: &Query) -> Option<&'a Arc<IssuesPage>> {
    state.mc_issues.get(&query_key(query))
}

pub fn get_mc_product_feed<'a>(
    state: &'a StateTree,
    query: &Query,
) -> Option<&'a Arc<ProductFeedPage>> {
    state.mc_product_feed.get(&query_key(query))
}

pub fn get_report<'a>(state: &'a StateTree, key: &ReportKey) -> Option<&'a Arc<Value>> {
    state.report.get(&key.cache_key())
}

/// Whether the Google Ads account is connected and fully set up
pub fn is_ads_account_connected(state: &StateTree) -> bool {
    get_google_ads_account(state)
        .and_then(|account| account.status.as_deref())
        .is_some_and(|status| status == "connected")
}
