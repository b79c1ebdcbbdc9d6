//! Plugin API data transfer objects
//!
//! These types mirror the JSON shapes of the `/wc/gla` REST endpoints. Field
//! names follow the wire format; where the server uses a name that is not
//! snake_case the rename happens here.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

/// ISO 3166-1 alpha-2 country code, e.g. `US`
pub type CountryCode = String;

/// `yes`/`no` flag used by the connection endpoints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Active {
    Yes,
    #[default]
    No,
}

impl Active {
    pub fn is_yes(&self) -> bool {
        matches!(self, Active::Yes)
    }
}

/// A collection the server sends either as a JSON array or as an object
/// keyed by some identifier (country code, product id)
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum KeyedCollection<T> {
    List(Vec<T>),
    Keyed(BTreeMap<String, T>),
}

impl<T> KeyedCollection<T> {
    pub fn into_values(self) -> Vec<T> {
        match self {
            KeyedCollection::List(items) => items,
            KeyedCollection::Keyed(map) => map.into_values().collect(),
        }
    }
}

impl<T: DeserializeOwned> KeyedCollection<T> {
    /// Decode a response body, treating `null` as an empty collection
    pub fn from_value(value: Value) -> Result<Vec<T>, serde_json::Error> {
        if value.is_null() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_value::<Self>(value)?.into_values())
    }
}

// === Shipping ===

/// One row of `GET /mc/shipping/rates`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingRateRecord {
    pub country_code: CountryCode,
    pub currency: String,
    pub rate: f64,
}

/// One row of `GET /mc/shipping/times`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingTimeRecord {
    pub country_code: CountryCode,
    pub time: u32,
}

/// Body of `POST /mc/shipping/rates/batch`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShippingRatesBatch<'a> {
    pub country_codes: &'a [CountryCode],
    pub currency: &'a str,
    pub rate: &'a str,
}

/// Body of `POST /mc/shipping/times/batch`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShippingTimesBatch<'a> {
    pub country_codes: &'a [CountryCode],
    pub time: u32,
}

/// Body of the batch `DELETE` shipping endpoints
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryCodesBatch<'a> {
    pub country_codes: &'a [CountryCode],
}

// === Settings & audience ===

/// Merchant Center settings (`/mc/settings`)
///
/// Fields the store does not interpret are kept in `other` so a save sends
/// back everything that was fetched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// `automatic`, `flat` or `manual`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_rate: Option<String>,
    /// `flat` or `manual`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_time: Option<String>,
    /// `destination` or `manual`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_live: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkout_process_secure: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_methods_visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refund_tos_visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_info_visible: Option<bool>,
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

/// Where the merchant sells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    #[default]
    All,
    Selected,
}

/// Target audience (`/mc/target_audience`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetAudience {
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub countries: BTreeSet<CountryCode>,
}

/// Entry of `GET /mc/countries`, keyed by country code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedCountry {
    pub name: String,
    pub currency: String,
}

// === Accounts ===

/// `GET /jetpack/connected`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JetpackAccount {
    pub active: Active,
    #[serde(default)]
    pub owner: Active,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, rename = "displayName")]
    pub display_name: Option<String>,
}

/// `GET /google/connected`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleAccount {
    pub active: Active,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub scope: Vec<String>,
}

/// `GET /mc/connection`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchantCenterAccount {
    pub id: u64,
    /// `connected`, `incomplete` or `disconnected`
    #[serde(default)]
    pub status: Option<String>,
}

/// `GET /ads/connection`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdsAccount {
    pub id: u64,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Entry of `GET /mc/accounts`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistingMerchantCenterAccount {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub subaccount: bool,
    #[serde(default)]
    pub domain: Option<String>,
}

/// Entry of `GET /ads/accounts`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistingAdsAccount {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingStatus {
    Approved,
    Pending,
    Cancelled,
    #[default]
    #[serde(other)]
    Unknown,
}

/// `GET /ads/billing-status`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdsBillingStatus {
    pub status: BillingStatus,
    #[serde(default)]
    pub billing_url: Option<String>,
}

// === Contact information ===

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street_address: Option<String>,
    #[serde(default)]
    pub locality: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub country: Option<CountryCode>,
}

/// `/mc/contact-information`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInformation {
    pub id: u64,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub mc_address: Option<Address>,
    #[serde(default)]
    pub wc_address: Option<Address>,
    #[serde(default)]
    pub is_mc_address_different: bool,
}

/// Body of `POST /mc/contact-information`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactInformationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

// === Campaigns ===

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    #[default]
    Enabled,
    Paused,
    Removed,
}

/// Entry of `GET /ads/campaigns`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdsCampaign {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub status: CampaignStatus,
    /// Daily budget in the account currency
    pub amount: f64,
    #[serde(default)]
    pub country: Option<CountryCode>,
}

/// Partial campaign update sent to `POST /ads/campaigns/:id`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CampaignStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

impl CampaignUpdate {
    /// Apply the fields present in this update to `campaign`
    pub fn apply_to(&self, campaign: &mut AdsCampaign) {
        if let Some(name) = &self.name {
            campaign.name = name.clone();
        }
        if let Some(status) = self.status {
            campaign.status = status;
        }
        if let Some(amount) = self.amount {
            campaign.amount = amount;
        }
    }
}

// === Merchant Center status ===

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SetupStatus {
    #[default]
    Incomplete,
    Complete,
}

/// `GET /mc/setup`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct McSetup {
    pub status: SetupStatus,
    /// Onboarding step the merchant is on while incomplete
    #[serde(default)]
    pub step: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCounts {
    #[serde(default)]
    pub active: u64,
    #[serde(default)]
    pub expiring: u64,
    #[serde(default)]
    pub pending: u64,
    #[serde(default)]
    pub disapproved: u64,
    #[serde(default)]
    pub not_synced: u64,
}

/// `GET /mc/product-statistics`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductStatistics {
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub statistics: ProductCounts,
    #[serde(default)]
    pub scheduled_sync: Option<u64>,
}

/// One page of `GET /mc/issues`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IssuesPage {
    #[serde(default)]
    pub issues: Vec<Value>,
    #[serde(default)]
    pub total: u64,
}

/// One page of `GET /mc/product-feed`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductFeedPage {
    #[serde(default)]
    pub products: Vec<Value>,
    #[serde(default)]
    pub total: u64,
}

/// Body of `POST /mc/product-visibility`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductVisibilityUpdate<'a> {
    pub ids: &'a [u64],
    pub visible: bool,
}

/// Response of `POST /mc/product-visibility`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductVisibilityResult {
    #[serde(default)]
    pub success: Vec<u64>,
    #[serde(default)]
    pub errors: Vec<u64>,
}
