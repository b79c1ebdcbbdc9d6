//! Account connection actions

use crate::domain_models::{
    AdsAccount, AdsBillingStatus, ExistingAdsAccount, ExistingMerchantCenterAccount,
    GoogleAccount, JetpackAccount, MerchantCenterAccount,
};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum AccountsAction {
    ReceiveJetpack(JetpackAccount),
    ReceiveGoogle(GoogleAccount),
    /// Access scopes reported after the Google OAuth round trip
    ReceiveGoogleAccess(Value),
    ReceiveMerchantCenter(MerchantCenterAccount),
    ReceiveExistingMerchantCenter(Vec<ExistingMerchantCenterAccount>),
    ReceiveAds(AdsAccount),
    ReceiveExistingAds(Vec<ExistingAdsAccount>),
    ReceiveAdsBillingStatus(AdsBillingStatus),

    // Disconnects
    /// Google account disconnected (also forgets granted access)
    DisconnectGoogle,
    /// Ads account disconnected (also forgets billing status)
    DisconnectAds,
    /// Every connection removed
    DisconnectAll,
}
