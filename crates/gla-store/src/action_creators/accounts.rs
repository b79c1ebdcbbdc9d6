//! Account connection creators

use super::ActionContext;
use crate::actions::{AccountsAction, Action};
use crate::domain_models::{
    AdsAccount, AdsBillingStatus, ExistingAdsAccount, ExistingMerchantCenterAccount,
    GoogleAccount, JetpackAccount, MerchantCenterAccount,
};
use gla_client::{ApiError, ApiRequest};
use serde_json::Value;

pub async fn fetch_jetpack_account(ctx: &ActionContext) -> Option<Action> {
    let result = ctx
        .fetch_json::<JetpackAccount>(ApiRequest::get("/jetpack/connected"))
        .await;
    let account = ctx.settle(result, "There was an error loading Jetpack account info.")?;
    Some(Action::Accounts(AccountsAction::ReceiveJetpack(account)))
}

pub async fn fetch_google_account(ctx: &ActionContext) -> Option<Action> {
    let result = ctx
        .fetch_json::<GoogleAccount>(ApiRequest::get("/google/connected"))
        .await;
    let account = ctx.settle(result, "There was an error loading Google account info.")?;
    Some(Action::Accounts(AccountsAction::ReceiveGoogle(account)))
}

/// Record the access granted during the Google OAuth round trip
pub fn receive_google_account_access(data: Value) -> Action {
    Action::Accounts(AccountsAction::ReceiveGoogleAccess(data))
}

pub async fn fetch_google_mc_account(ctx: &ActionContext) -> Option<Action> {
    let result = ctx
        .fetch_json::<MerchantCenterAccount>(ApiRequest::get("/mc/connection"))
        .await;
    let account = ctx.settle(
        result,
        "There was an error loading Google Merchant Center account info.",
    )?;
    Some(receive_mc_account(account))
}

pub fn receive_mc_account(account: MerchantCenterAccount) -> Action {
    Action::Accounts(AccountsAction::ReceiveMerchantCenter(account))
}

/// Merchant Center accounts the Google user could connect instead of
/// creating a new one
pub async fn fetch_existing_google_mc_accounts(ctx: &ActionContext) -> Option<Action> {
    let result = ctx
        .fetch_json::<Vec<ExistingMerchantCenterAccount>>(ApiRequest::get("/mc/accounts"))
        .await;
    let accounts = ctx.settle(
        result,
        "There was an error getting your Google Merchant Center accounts.",
    )?;
    Some(Action::Accounts(
        AccountsAction::ReceiveExistingMerchantCenter(accounts),
    ))
}

pub async fn fetch_google_ads_account(ctx: &ActionContext) -> Option<Action> {
    let result = ctx
        .fetch_json::<AdsAccount>(ApiRequest::get("/ads/connection"))
        .await;
    let account = ctx.settle(result, "There was an error loading Google Ads account info.")?;
    Some(receive_ads_account(account))
}

pub fn receive_ads_account(account: AdsAccount) -> Action {
    Action::Accounts(AccountsAction::ReceiveAds(account))
}

pub async fn fetch_google_ads_account_billing_status(ctx: &ActionContext) -> Option<Action> {
    let result = ctx
        .fetch_json::<AdsBillingStatus>(ApiRequest::get("/ads/billing-status"))
        .await;
    let status = ctx.settle(
        result,
        "There was an error getting the billing status of your Google Ads account.",
    )?;
    Some(receive_google_ads_account_billing_status(status))
}

pub fn receive_google_ads_account_billing_status(status: AdsBillingStatus) -> Action {
    Action::Accounts(AccountsAction::ReceiveAdsBillingStatus(status))
}

pub async fn fetch_existing_google_ads_accounts(ctx: &ActionContext) -> Option<Action> {
    let result = ctx
        .fetch_json::<Vec<ExistingAdsAccount>>(ApiRequest::get("/ads/accounts"))
        .await;
    let accounts = ctx.settle(result, "There was an error getting your Google Ads accounts.")?;
    Some(Action::Accounts(AccountsAction::ReceiveExistingAds(accounts)))
}

// Disconnects hand the error back so the caller can keep its dialog open

pub async fn disconnect_google_account(ctx: &ActionContext) -> Result<Action, ApiError> {
    let result = ctx.send(ApiRequest::delete("/google/connect")).await;
    ctx.settle_or_raise(
        result,
        "Unable to disconnect your Google account. Please try again later.",
    )?;
    Ok(Action::Accounts(AccountsAction::DisconnectGoogle))
}

pub async fn disconnect_google_ads_account(ctx: &ActionContext) -> Result<Action, ApiError> {
    let result = ctx.send(ApiRequest::delete("/ads/connection")).await;
    ctx.settle_or_raise(
        result,
        "Unable to disconnect your Google Ads account. Please try again later.",
    )?;
    Ok(Action::Accounts(AccountsAction::DisconnectAds))
}

pub async fn disconnect_all_accounts(ctx: &ActionContext) -> Result<Action, ApiError> {
    let result = ctx.send(ApiRequest::delete("/connections")).await;
    ctx.settle_or_raise(
        result,
        "Unable to disconnect all your accounts. Please try again later.",
    )?;
    Ok(Action::Accounts(AccountsAction::DisconnectAll))
}
