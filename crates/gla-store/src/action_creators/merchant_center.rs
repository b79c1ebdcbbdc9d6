//! Merchant Center creators: settings, audience, contact details and product
//! status

use super::ActionContext;
use crate::actions::{Action, MerchantCenterAction};
use crate::domain_models::{
    ContactInformation, CountryCode, IssuesPage, McSetup, ProductFeedPage, ProductStatistics,
    Settings, SupportedCountry, TargetAudience,
};
use gla_client::types::{
    ContactInformationUpdate, ProductVisibilityResult, ProductVisibilityUpdate,
};
use gla_client::{ApiError, ApiRequest, Query};
use std::collections::BTreeMap;

const SETTINGS_PATH: &str = "/mc/settings";
const TARGET_AUDIENCE_PATH: &str = "/mc/target_audience";
const CONTACT_INFORMATION_PATH: &str = "/mc/contact-information";

// === Settings ===

pub async fn fetch_settings(ctx: &ActionContext) -> Option<Action> {
    let result = ctx
        .fetch_json::<Settings>(ApiRequest::get(SETTINGS_PATH))
        .await;
    let settings = ctx.settle(result, "There was an error loading merchant center settings.")?;
    Some(Action::MerchantCenter(MerchantCenterAction::ReceiveSettings(
        settings,
    )))
}

pub async fn save_settings(ctx: &ActionContext, settings: Settings) -> Option<Action> {
    let result = async {
        let request = ApiRequest::post(SETTINGS_PATH).with_data(&settings)?;
        ctx.send(request).await
    }
    .await;

    ctx.settle(
        result,
        "There was an error trying to save settings. Please try again later.",
    )?;
    Some(Action::MerchantCenter(MerchantCenterAction::SaveSettings(
        settings,
    )))
}

// === Audience ===

/// Countries Merchant Center supports, keyed by country code
pub async fn fetch_countries(ctx: &ActionContext) -> Option<Action> {
    let result = ctx
        .fetch_json::<BTreeMap<CountryCode, SupportedCountry>>(ApiRequest::get("/mc/countries"))
        .await;
    let countries = ctx.settle(result, "There was an error loading supported country details.")?;
    Some(Action::MerchantCenter(
        MerchantCenterAction::ReceiveCountries(countries),
    ))
}

pub async fn fetch_target_audience(ctx: &ActionContext) -> Option<Action> {
    let result = ctx
        .fetch_json::<TargetAudience>(ApiRequest::get(TARGET_AUDIENCE_PATH))
        .await;
    let audience = ctx.settle(result, "There was an error loading target audience.")?;
    Some(Action::MerchantCenter(
        MerchantCenterAction::ReceiveTargetAudience(audience),
    ))
}

pub async fn save_target_audience(
    ctx: &ActionContext,
    target_audience: TargetAudience,
) -> Option<Action> {
    let result = async {
        let request = ApiRequest::post(TARGET_AUDIENCE_PATH).with_data(&target_audience)?;
        ctx.send(request).await
    }
    .await;

    ctx.settle(result, "There was an error saving target audience data.")?;
    Some(Action::MerchantCenter(
        MerchantCenterAction::SaveTargetAudience(target_audience),
    ))
}

// === Contact information ===

pub fn receive_google_mc_contact_information(data: ContactInformation) -> Action {
    Action::MerchantCenter(MerchantCenterAction::ReceiveContactInformation(data))
}

pub async fn fetch_mc_contact_information(ctx: &ActionContext) -> Option<Action> {
    let result = ctx
        .fetch_json::<ContactInformation>(ApiRequest::get(CONTACT_INFORMATION_PATH))
        .await;
    let contact = ctx.settle(
        result,
        "There was an error loading your Google Merchant Center contact information.",
    )?;
    Some(receive_google_mc_contact_information(contact))
}

/// Push the store's contact details to Merchant Center
///
/// The phone number is only sent when both the calling code and the national
/// number are non-empty; otherwise the request body is `{}` and only the
/// address is synced.
pub async fn update_mc_contact_information(
    ctx: &ActionContext,
    country_calling_code: Option<&str>,
    national_number: Option<&str>,
) -> Result<Action, ApiError> {
    let phone_number = match (country_calling_code, national_number) {
        (Some(code), Some(number)) if !code.is_empty() && !number.is_empty() => {
            Some(format!("+{}{}", code, number))
        }
        _ => None,
    };

    let result = async {
        let request = ApiRequest::post(CONTACT_INFORMATION_PATH)
            .with_data(&ContactInformationUpdate { phone_number })?;
        ctx.fetch_json::<ContactInformation>(request).await
    }
    .await;

    let contact = ctx.settle_or_raise(
        result,
        "Unable to update your Google Merchant Center contact information. Please try again later.",
    )?;
    Ok(receive_google_mc_contact_information(contact))
}

// === Product status ===

pub fn receive_mc_setup(setup: McSetup) -> Action {
    Action::MerchantCenter(MerchantCenterAction::ReceiveSetup(setup))
}

pub async fn fetch_mc_setup(ctx: &ActionContext) -> Option<Action> {
    let result = ctx.fetch_json::<McSetup>(ApiRequest::get("/mc/setup")).await;
    let setup = ctx.settle(
        result,
        "There was an error loading your merchant center setup status.",
    )?;
    Some(receive_mc_setup(setup))
}

pub fn receive_mc_product_statistics(statistics: ProductStatistics) -> Action {
    Action::MerchantCenter(MerchantCenterAction::ReceiveProductStatistics(statistics))
}

pub async fn fetch_mc_product_statistics(ctx: &ActionContext) -> Option<Action> {
    let result = ctx
        .fetch_json::<ProductStatistics>(ApiRequest::get("/mc/product-statistics"))
        .await;
    let statistics = ctx.settle(result, "There was an error loading product statistics.")?;
    Some(receive_mc_product_statistics(statistics))
}

pub fn receive_mc_issues(query: Query, data: IssuesPage) -> Action {
    Action::MerchantCenter(MerchantCenterAction::ReceiveIssues { query, data })
}

/// One page of product and account issues
pub async fn fetch_mc_issues(ctx: &ActionContext, query: Query) -> Option<Action> {
    let request = ApiRequest::get("/mc/issues").with_query(query.clone());
    let result = ctx.fetch_json::<IssuesPage>(request).await;
    let page = ctx.settle(result, "There was an error loading issues.")?;
    Some(receive_mc_issues(query, page))
}

pub fn receive_mc_product_feed(query: Query, data: ProductFeedPage) -> Action {
    Action::MerchantCenter(MerchantCenterAction::ReceiveProductFeed { query, data })
}

/// One page of the product feed
pub async fn fetch_mc_product_feed(ctx: &ActionContext, query: Query) -> Option<Action> {
    let request = ApiRequest::get("/mc/product-feed").with_query(query.clone());
    let result = ctx.fetch_json::<ProductFeedPage>(request).await;
    let page = ctx.settle(result, "There was an error loading product feed.")?;
    Some(receive_mc_product_feed(query, page))
}

/// Show or hide products on Google
///
/// The server answers 400 when any id could not be updated; that is reported
/// like every other failure.
pub async fn update_mc_product_visibility(
    ctx: &ActionContext,
    ids: Vec<u64>,
    visible: bool,
) -> Result<Action, ApiError> {
    let result = async {
        let request = ApiRequest::post("/mc/product-visibility")
            .with_data(&ProductVisibilityUpdate { ids: &ids, visible })?;
        ctx.fetch_json::<ProductVisibilityResult>(request).await
    }
    .await;

    let outcome = ctx.settle_or_raise(
        result,
        "Unable to update the channel visibility of products. Please try again later.",
    )?;
    log::info!(
        "Updated visibility of {} products to {} ({} failed)",
        outcome.success.len(),
        visible,
        outcome.errors.len()
    );
    Ok(Action::MerchantCenter(
        MerchantCenterAction::UpdateProductsVisibility { ids, visible },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_context, MockApi};
    use gla_client::types::{Location, ProductCounts};
    use gla_client::Method;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Arc;

    fn contact_reply() -> serde_json::Value {
        json!({
            "id": 12345,
            "phone_number": "+12133734253",
            "mc_address": null,
            "wc_address": null,
            "is_mc_address_different": false
        })
    }

    #[tokio::test]
    async fn test_save_settings_returns_input() {
        let api = Arc::new(MockApi::default());
        api.reply(Method::Post, SETTINGS_PATH, json!({ "status": "success" }));
        let (ctx, _notices) = test_context(&api);
        let settings = Settings {
            shipping_rate: Some("flat".to_string()),
            ..Settings::default()
        };

        let action = save_settings(&ctx, settings.clone()).await;

        assert_eq!(
            action,
            Some(Action::MerchantCenter(MerchantCenterAction::SaveSettings(
                settings
            )))
        );
        assert_eq!(api.requests()[0].data, Some(json!({ "shipping_rate": "flat" })));
    }

    #[tokio::test]
    async fn test_fetch_countries_keyed_by_code() {
        let api = Arc::new(MockApi::default());
        api.reply(
            Method::Get,
            "/mc/countries",
            json!({ "US": { "name": "United States", "currency": "USD" } }),
        );
        let (ctx, _notices) = test_context(&api);

        let Some(Action::MerchantCenter(MerchantCenterAction::ReceiveCountries(countries))) =
            fetch_countries(&ctx).await
        else {
            panic!("expected countries");
        };

        assert_eq!(countries["US"].currency, "USD");
    }

    #[tokio::test]
    async fn test_fetch_target_audience() {
        let api = Arc::new(MockApi::default());
        api.reply(
            Method::Get,
            TARGET_AUDIENCE_PATH,
            json!({
                "locale": "en_US",
                "language": "English",
                "location": "selected",
                "countries": ["US", "CA"]
            }),
        );
        let (ctx, _notices) = test_context(&api);

        let Some(Action::MerchantCenter(MerchantCenterAction::ReceiveTargetAudience(audience))) =
            fetch_target_audience(&ctx).await
        else {
            panic!("expected target audience");
        };

        assert_eq!(audience.location, Location::Selected);
        assert_eq!(audience.countries.len(), 2);
    }

    #[tokio::test]
    async fn test_contact_update_sends_phone_when_both_parts_present() {
        let api = Arc::new(MockApi::default());
        api.reply(Method::Post, CONTACT_INFORMATION_PATH, contact_reply());
        let (ctx, _notices) = test_context(&api);

        let action = update_mc_contact_information(&ctx, Some("1"), Some("2133734253"))
            .await
            .unwrap();

        assert_eq!(
            api.requests()[0].data,
            Some(json!({ "phone_number": "+12133734253" }))
        );
        let Action::MerchantCenter(MerchantCenterAction::ReceiveContactInformation(contact)) =
            action
        else {
            panic!("expected contact information");
        };
        assert_eq!(contact.id, 12345);
    }

    #[tokio::test]
    async fn test_contact_update_omits_phone_when_a_part_is_missing() {
        let api = Arc::new(MockApi::default());
        api.reply(Method::Post, CONTACT_INFORMATION_PATH, contact_reply());
        let (ctx, _notices) = test_context(&api);

        update_mc_contact_information(&ctx, Some("1"), Some(""))
            .await
            .unwrap();
        update_mc_contact_information(&ctx, None, Some("2133734253"))
            .await
            .unwrap();

        for request in api.requests() {
            assert_eq!(request.data, Some(json!({})));
        }
    }

    #[tokio::test]
    async fn test_contact_update_reraises() {
        let api = Arc::new(MockApi::default());
        api.fail(Method::Post, CONTACT_INFORMATION_PATH, 500);
        let (ctx, notices) = test_context(&api);

        let result = update_mc_contact_information(&ctx, None, None).await;

        assert!(result.is_err());
        assert_eq!(
            notices.drain()[0].message,
            "Unable to update your Google Merchant Center contact information. Please try again later."
        );
    }

    #[tokio::test]
    async fn test_fetch_product_statistics() {
        let api = Arc::new(MockApi::default());
        api.reply(
            Method::Get,
            "/mc/product-statistics",
            json!({
                "timestamp": 1620000000,
                "statistics": { "active": 5, "expiring": 1, "pending": 2, "disapproved": 0, "not_synced": 3 },
                "scheduled_sync": 0
            }),
        );
        let (ctx, _notices) = test_context(&api);

        let action = fetch_mc_product_statistics(&ctx).await;

        assert_eq!(
            action,
            Some(receive_mc_product_statistics(ProductStatistics {
                timestamp: Some(1620000000),
                statistics: ProductCounts {
                    active: 5,
                    expiring: 1,
                    pending: 2,
                    disapproved: 0,
                    not_synced: 3,
                },
                scheduled_sync: Some(0),
            }))
        );
    }

    #[tokio::test]
    async fn test_fetch_issues_carries_query() {
        let api = Arc::new(MockApi::default());
        api.reply(
            Method::Get,
            "/mc/issues",
            json!({ "issues": [{ "code": "missing_gtin" }], "total": 1 }),
        );
        let (ctx, _notices) = test_context(&api);
        let query = Query::new().with("page", 1).with("per_page", 10);

        let action = fetch_mc_issues(&ctx, query.clone()).await;

        assert_eq!(
            action,
            Some(receive_mc_issues(
                query.clone(),
                IssuesPage {
                    issues: vec![json!({ "code": "missing_gtin" })],
                    total: 1,
                }
            ))
        );
        assert_eq!(api.requests()[0].query, query);
    }

    #[tokio::test]
    async fn test_fetch_product_feed_failure() {
        let api = Arc::new(MockApi::default());
        api.fail(Method::Get, "/mc/product-feed", 500);
        let (ctx, notices) = test_context(&api);

        assert_eq!(fetch_mc_product_feed(&ctx, Query::new()).await, None);
        assert_eq!(
            notices.drain()[0].message,
            "There was an error loading product feed."
        );
    }

    #[tokio::test]
    async fn test_visibility_update_partial_failure_reraises() {
        let api = Arc::new(MockApi::default());
        api.fail(Method::Post, "/mc/product-visibility", 400);
        let (ctx, notices) = test_context(&api);

        let result = update_mc_product_visibility(&ctx, vec![1, 2], false).await;

        assert_eq!(result.unwrap_err().status_code(), Some(400));
        assert_eq!(notices.len(), 1);
        assert_eq!(
            api.requests()[0].data,
            Some(json!({ "ids": [1, 2], "visible": false }))
        );
    }

    #[tokio::test]
    async fn test_visibility_update_success() {
        let api = Arc::new(MockApi::default());
        api.reply(
            Method::Post,
            "/mc/product-visibility",
            json!({ "success": [1, 2], "errors": [] }),
        );
        let (ctx, _notices) = test_context(&api);

        let action = update_mc_product_visibility(&ctx, vec![1, 2], true)
            .await
            .unwrap();

        assert_eq!(
            action,
            Action::MerchantCenter(MerchantCenterAction::UpdateProductsVisibility {
                ids: vec![1, 2],
                visible: true,
            })
        );
    }
    #[tokio::test]
    async fn test_visibility_update_rejects_malformed_result() {
        let api = Arc::new(MockApi::default());
        api.reply(
            Method::Post,
            "/mc/product-visibility",
            json!({ "success": "all" }),
        );
        let (ctx, notices) = test_context(&api);

        let result = update_mc_product_visibility(&ctx, vec![1], true).await;

        assert!(matches!(result, Err(ApiError::Decode { .. })));
        assert_eq!(notices.len(), 1);
    }
}
