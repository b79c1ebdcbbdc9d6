use crate::domain_models::{
    AdsAccount, AdsBillingStatus, ExistingAdsAccount, ExistingMerchantCenterAccount,
    GoogleAccount, JetpackAccount, MerchantCenterAccount,
};
use serde_json::Value;
use std::sync::Arc;

/// Connection state of every provider the merchant links
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountsState {
    pub jetpack: Option<Arc<JetpackAccount>>,
    pub google: Option<Arc<GoogleAccount>>,
    pub mc: Option<Arc<MerchantCenterAccount>>,
    pub ads: Option<Arc<AdsAccount>>,
    pub existing_mc: Option<Arc<Vec<ExistingMerchantCenterAccount>>>,
    pub existing_ads: Option<Arc<Vec<ExistingAdsAccount>>>,
    pub ads_billing_status: Option<Arc<AdsBillingStatus>>,
    /// Scopes granted to the Google connection, as sent by the OAuth flow
    pub google_access: Option<Arc<Value>>,
}

impl AccountsState {
    /// True when nothing is known about any account
    pub fn is_empty(&self) -> bool {
        self.jetpack.is_none()
            && self.google.is_none()
            && self.mc.is_none()
            && self.ads.is_none()
            && self.existing_mc.is_none()
            && self.existing_ads.is_none()
            && self.ads_billing_status.is_none()
            && self.google_access.is_none()
    }
}
