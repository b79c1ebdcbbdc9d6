//! Merchant Center actions

use crate::domain_models::{
    ContactInformation, CountryCode, IssuesPage, McSetup, ProductFeedPage, ProductStatistics,
    Settings, SupportedCountry, TargetAudience,
};
use gla_client::Query;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub enum MerchantCenterAction {
    // Settings
    ReceiveSettings(Settings),
    SaveSettings(Settings),

    // Audience
    ReceiveCountries(BTreeMap<CountryCode, SupportedCountry>),
    ReceiveTargetAudience(TargetAudience),
    SaveTargetAudience(TargetAudience),

    /// Contact details as stored in Merchant Center
    ReceiveContactInformation(ContactInformation),

    // Status
    ReceiveSetup(McSetup),
    ReceiveProductStatistics(ProductStatistics),
    /// One page of issues for the given query
    ReceiveIssues { query: Query, data: IssuesPage },
    /// One page of the product feed for the given query
    ReceiveProductFeed { query: Query, data: ProductFeedPage },

    /// Channel visibility changed for these products
    UpdateProductsVisibility { ids: Vec<u64>, visible: bool },
}
