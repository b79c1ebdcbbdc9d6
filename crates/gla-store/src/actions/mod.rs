//! Actions module
//!
//! Actions are the resolution records produced by action creators and
//! consumed by the reducer. They are tagged by the part of the state they
//! affect:
//! - `Shipping`: shipping rates and times
//! - `Accounts`: Jetpack / Google / Merchant Center / Ads connections
//! - `MerchantCenter`: settings, audience, contact details, product status
//! - `Campaigns`: paid ads campaigns
//! - `Report`: report data sets

pub mod accounts;
pub mod campaigns;
pub mod merchant_center;
pub mod report;
pub mod shipping;

pub use accounts::AccountsAction;
pub use campaigns::CampaignAction;
pub use merchant_center::MerchantCenterAction;
pub use report::ReportAction;
pub use shipping::ShippingAction;

/// Root action enum - tagged by state slice
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Shipping(ShippingAction),
    Accounts(AccountsAction),
    MerchantCenter(MerchantCenterAction),
    Campaigns(CampaignAction),
    Report(ReportAction),

    /// No-op action
    None,
}
