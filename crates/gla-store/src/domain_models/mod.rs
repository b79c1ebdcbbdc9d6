//! Domain models held in the store
//!
//! Most resources are stored exactly as the API describes them and are
//! re-exported from `gla_client`. Shipping rows and report keys get their own
//! types because the store shapes them differently from the wire.

mod report;
mod shipping;

pub use report::{ReportKey, ReportSource};
pub use shipping::{AggregatedShippingRate, AggregatedShippingTime, ShippingRate, ShippingTime};

pub use gla_client::types::{
    AdsAccount, AdsBillingStatus, AdsCampaign, BillingStatus, CampaignUpdate, ContactInformation,
    CountryCode, ExistingAdsAccount, ExistingMerchantCenterAccount, GoogleAccount, IssuesPage, JetpackAccount,
    McSetup, MerchantCenterAccount, ProductFeedPage, ProductStatistics, Settings,
    SupportedCountry, TargetAudience,
};
