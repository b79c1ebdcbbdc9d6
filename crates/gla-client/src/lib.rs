//! REST client for the Google Listings & Ads plugin API
//!
//! This crate is the network boundary of the data store. Everything above it
//! (action creators, reducer, selectors) talks to the plugin only through the
//! [`ApiFetch`] trait, so tests can swap the transport for a scripted mock.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                ApiFetch trait                    │
//! │  - fetch(ApiRequest) -> JSON value               │
//! └─────────────────────────────────────────────────┘
//!                        │
//!        ┌───────────────┴───────────────┐
//!        ▼                               ▼
//! ┌─────────────────┐         ┌─────────────────────┐
//! │ HttpApiClient   │         │ test doubles        │
//! │ (reqwest)       │         │ (scripted replies)  │
//! └─────────────────┘         └─────────────────────┘
//! ```
//!
//! Paths are relative to the plugin namespace (`/wc/gla` by default), e.g.
//! `/mc/shipping/rates`.
//!
//! # Example
//!
//! ```rust,no_run
//! use gla_client::{ApiFetch, ApiRequest, HttpApiClient};
//! use gla_config::AppConfig;
//!
//! # async fn example() -> Result<(), gla_client::ApiError> {
//! let client = HttpApiClient::new(&AppConfig::default())?;
//! let settings = client.fetch(ApiRequest::get("/mc/settings")).await?;
//! println!("{settings}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod http_client;
pub mod types;

pub use client::{ApiFetch, ApiRequest, Method, Query};
pub use error::ApiError;
pub use http_client::HttpApiClient;
pub use types::{
    Active, AdsAccount, AdsBillingStatus, AdsCampaign, Address, BillingStatus, CampaignStatus,
    CampaignUpdate, ContactInformation, CountryCode, ExistingAdsAccount,
    ExistingMerchantCenterAccount, GoogleAccount, IssuesPage, JetpackAccount, KeyedCollection,
    Location, McSetup, MerchantCenterAccount, ProductCounts, ProductFeedPage, ProductStatistics,
    ProductVisibilityResult, Settings, SetupStatus, SupportedCountry, TargetAudience,
};
