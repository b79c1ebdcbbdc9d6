//! Shipping rate and time creators

use super::ActionContext;
use crate::actions::{Action, ShippingAction};
use crate::domain_models::{
    AggregatedShippingRate, AggregatedShippingTime, CountryCode, ShippingRate, ShippingTime,
};
use gla_client::types::{
    CountryCodesBatch, ShippingRateRecord, ShippingRatesBatch, ShippingTimeRecord,
    ShippingTimesBatch,
};
use gla_client::{ApiError, ApiRequest, KeyedCollection};

const RATES_PATH: &str = "/mc/shipping/rates";
const RATES_BATCH_PATH: &str = "/mc/shipping/rates/batch";
const TIMES_PATH: &str = "/mc/shipping/times";
const TIMES_BATCH_PATH: &str = "/mc/shipping/times/batch";

/// Load every shipping rate
///
/// The server keys rates by country code; only the values are kept.
pub async fn fetch_shipping_rates(ctx: &ActionContext) -> Option<Action> {
    let result = async {
        let value = ctx.fetch_json(ApiRequest::get(RATES_PATH)).await?;
        KeyedCollection::<ShippingRateRecord>::from_value(value).map_err(|source| {
            ApiError::Decode {
                path: RATES_PATH.to_string(),
                source,
            }
        })
    }
    .await;

    let records = ctx.settle(result, "There was an error loading shipping rates.")?;
    let rates: Vec<ShippingRate> = records.into_iter().map(ShippingRate::from).collect();
    log::debug!("Loaded {} shipping rates", rates.len());
    Some(Action::Shipping(ShippingAction::ReceiveRates(rates)))
}

/// Save one rate for a group of countries
pub async fn upsert_shipping_rates(
    ctx: &ActionContext,
    shipping_rate: AggregatedShippingRate,
) -> Option<Action> {
    let result = async {
        let request = ApiRequest::post(RATES_BATCH_PATH).with_data(&ShippingRatesBatch {
            country_codes: &shipping_rate.country_codes,
            currency: &shipping_rate.currency,
            rate: &shipping_rate.rate,
        })?;
        ctx.send(request).await
    }
    .await;

    ctx.settle(
        result,
        "There was an error trying to add / update shipping rates. Please try again later.",
    )?;
    Some(Action::Shipping(ShippingAction::UpsertRates(shipping_rate)))
}

/// Remove the rates of the given countries
pub async fn delete_shipping_rates(
    ctx: &ActionContext,
    country_codes: Vec<CountryCode>,
) -> Option<Action> {
    let result = async {
        let request = ApiRequest::delete(RATES_BATCH_PATH).with_data(&CountryCodesBatch {
            country_codes: &country_codes,
        })?;
        ctx.send(request).await
    }
    .await;

    ctx.settle(
        result,
        "There was an error trying to delete shipping rates. Please try again later.",
    )?;
    Some(Action::Shipping(ShippingAction::DeleteRates(country_codes)))
}

/// Load every shipping time
pub async fn fetch_shipping_times(ctx: &ActionContext) -> Option<Action> {
    let result = async {
        let value = ctx.fetch_json(ApiRequest::get(TIMES_PATH)).await?;
        KeyedCollection::<ShippingTimeRecord>::from_value(value).map_err(|source| {
            ApiError::Decode {
                path: TIMES_PATH.to_string(),
                source,
            }
        })
    }
    .await;

    let records = ctx.settle(result, "There was an error loading shipping times.")?;
    let times: Vec<ShippingTime> = records.into_iter().map(ShippingTime::from).collect();
    Some(Action::Shipping(ShippingAction::ReceiveTimes(times)))
}

/// Save one shipping time for a group of countries
pub async fn upsert_shipping_times(
    ctx: &ActionContext,
    shipping_time: AggregatedShippingTime,
) -> Option<Action> {
    let result = async {
        let request = ApiRequest::post(TIMES_BATCH_PATH).with_data(&ShippingTimesBatch {
            country_codes: &shipping_time.country_codes,
            time: shipping_time.time,
        })?;
        ctx.send(request).await
    }
    .await;

    ctx.settle(
        result,
        "There was an error trying to add / update shipping times. Please try again later.",
    )?;
    Some(Action::Shipping(ShippingAction::UpsertTimes(shipping_time)))
}

/// Remove the shipping times of the given countries
pub async fn delete_shipping_times(
    ctx: &ActionContext,
    country_codes: Vec<CountryCode>,
) -> Option<Action> {
    let result = async {
        let request = ApiRequest::delete(TIMES_BATCH_PATH).with_data(&CountryCodesBatch {
            country_codes: &country_codes,
        })?;
        ctx.send(request).await
    }
    .await;

    ctx.settle(
        result,
        "There was an error trying to delete shipping times. Please try again later.",
    )?;
    Some(Action::Shipping(ShippingAction::DeleteTimes(country_codes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notices::NoticeStatus;
    use crate::test_utils::{test_context, MockApi};
    use gla_client::Method;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_fetch_rates_from_keyed_object() {
        let api = Arc::new(MockApi::default());
        api.reply(
            Method::Get,
            RATES_PATH,
            json!({
                "US": { "country_code": "US", "currency": "USD", "rate": 4 },
                "CA": { "country_code": "CA", "currency": "USD", "rate": 12.5 }
            }),
        );
        let (ctx, notices) = test_context(&api);

        let action = fetch_shipping_rates(&ctx).await;

        // Object values come back in key order
        assert_eq!(
            action,
            Some(Action::Shipping(ShippingAction::ReceiveRates(vec![
                ShippingRate {
                    country_code: "CA".to_string(),
                    currency: "USD".to_string(),
                    rate: "12.5".to_string(),
                },
                ShippingRate {
                    country_code: "US".to_string(),
                    currency: "USD".to_string(),
                    rate: "4".to_string(),
                },
            ])))
        );
        assert!(notices.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_times_from_array() {
        let api = Arc::new(MockApi::default());
        api.reply(
            Method::Get,
            TIMES_PATH,
            json!([{ "country_code": "US", "time": 3 }]),
        );
        let (ctx, _notices) = test_context(&api);

        let action = fetch_shipping_times(&ctx).await;

        assert_eq!(
            action,
            Some(Action::Shipping(ShippingAction::ReceiveTimes(vec![
                ShippingTime {
                    country_code: "US".to_string(),
                    time: 3,
                }
            ])))
        );
    }

    #[tokio::test]
    async fn test_fetch_rates_failure_raises_notice() {
        let api = Arc::new(MockApi::default());
        api.fail(Method::Get, RATES_PATH, 500);
        let (ctx, notices) = test_context(&api);

        let action = fetch_shipping_rates(&ctx).await;

        assert_eq!(action, None);
        let notices = notices.drain();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].status, NoticeStatus::Error);
        assert_eq!(notices[0].message, "There was an error loading shipping rates.");
    }

    #[tokio::test]
    async fn test_unauthorized_failure_is_silent() {
        let api = Arc::new(MockApi::default());
        api.fail(Method::Get, TIMES_PATH, 401);
        let (ctx, notices) = test_context(&api);

        assert_eq!(fetch_shipping_times(&ctx).await, None);
        assert!(notices.is_empty());
    }

    #[tokio::test]
    async fn test_upsert_rates_sends_batch_body() {
        let api = Arc::new(MockApi::default());
        api.reply(Method::Post, RATES_BATCH_PATH, json!({}));
        let (ctx, _notices) = test_context(&api);
        let shipping_rate = AggregatedShippingRate {
            country_codes: vec!["US".to_string(), "CA".to_string()],
            currency: "USD".to_string(),
            rate: "20".to_string(),
        };

        let action = upsert_shipping_rates(&ctx, shipping_rate.clone()).await;

        assert_eq!(
            action,
            Some(Action::Shipping(ShippingAction::UpsertRates(shipping_rate)))
        );
        let requests = api.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(
            requests[0].data,
            Some(json!({ "country_codes": ["US", "CA"], "currency": "USD", "rate": "20" }))
        );
    }

    #[tokio::test]
    async fn test_delete_times_failure_message() {
        let api = Arc::new(MockApi::default());
        api.fail(Method::Delete, TIMES_BATCH_PATH, 400);
        let (ctx, notices) = test_context(&api);

        let action = delete_shipping_times(&ctx, vec!["US".to_string()]).await;

        assert_eq!(action, None);
        assert_eq!(
            notices.drain()[0].message,
            "There was an error trying to delete shipping times. Please try again later."
        );
        assert_eq!(
            api.requests()[0].data,
            Some(json!({ "country_codes": ["US"] }))
        );
    }
}
