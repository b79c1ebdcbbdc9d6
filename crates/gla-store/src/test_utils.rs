//! Shared test helpers: a scripted API, a context wired to a notice queue,
//! and structural-sharing assertions for state snapshots.

use crate::action_creators::ActionContext;
use crate::domain_models::{
    AdsAccount, AdsCampaign, ContactInformation, GoogleAccount, IssuesPage, JetpackAccount,
    McSetup, MerchantCenterAccount, ProductFeedPage, ProductStatistics, Settings, ShippingRate,
    ShippingTime, SupportedCountry, TargetAudience,
};
use crate::notices::NoticeQueue;
use crate::state::{AccountsState, McState, ShippingState, StateTree};
use async_trait::async_trait;
use gla_client::types::{Active, CampaignStatus};
use gla_client::{ApiError, ApiFetch, ApiRequest, Method};
use serde_json::{json, Value};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

/// API double answering from scripted replies
///
/// Replies are keyed by method and path (the query is ignored) and are
/// returned for every matching request. Unscripted requests fail with 404.
#[derive(Default)]
pub struct MockApi {
    replies: Mutex<HashMap<(Method, String), Result<Value, u16>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockApi {
    pub fn reply(&self, method: Method, path: &str, body: Value) {
        self.replies
            .lock()
            .unwrap()
            .insert((method, path.to_string()), Ok(body));
    }

    pub fn fail(&self, method: Method, path: &str, status: u16) {
        self.replies
            .lock()
            .unwrap()
            .insert((method, path.to_string()), Err(status));
    }

    /// Every request received so far, oldest first
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl ApiFetch for MockApi {
    async fn fetch(&self, request: ApiRequest) -> Result<Value, ApiError> {
        self.requests.lock().unwrap().push(request.clone());
        let reply = self
            .replies
            .lock()
            .unwrap()
            .get(&(request.method, request.path.clone()))
            .cloned();

        match reply {
            Some(Ok(body)) => Ok(body),
            Some(Err(status)) => Err(ApiError::Status {
                status,
                path: request.path,
                code: None,
                message: "scripted failure".to_string(),
            }),
            None => Err(ApiError::Status {
                status: 404,
                path: request.path,
                code: Some("rest_no_route".to_string()),
                message: "No route was found matching the URL and request method.".to_string(),
            }),
        }
    }
}

/// Context talking to `api`, plus the queue its notices land in
pub fn test_context(api: &Arc<MockApi>) -> (ActionContext, NoticeQueue) {
    let notices = NoticeQueue::new();
    let ctx = ActionContext::new(api.clone(), Arc::new(notices.clone()));
    (ctx, notices)
}

/// State with every slice loaded
pub fn populated_state() -> StateTree {
    let mut countries = BTreeMap::new();
    countries.insert(
        "US".to_string(),
        SupportedCountry {
            name: "United States".to_string(),
            currency: "USD".to_string(),
        },
    );

    let accounts = AccountsState {
        jetpack: Some(Arc::new(JetpackAccount {
            active: Active::Yes,
            owner: Active::Yes,
            email: Some("owner@example.com".to_string()),
            display_name: Some("Owner".to_string()),
        })),
        google: Some(Arc::new(GoogleAccount {
            active: Active::Yes,
            email: Some("merchant@example.com".to_string()),
            scope: vec!["https://www.googleapis.com/auth/content".to_string()],
        })),
        mc: Some(Arc::new(MerchantCenterAccount {
            id: 12345,
            status: Some("connected".to_string()),
        })),
        ads: Some(Arc::new(AdsAccount {
            id: 777,
            currency: Some("USD".to_string()),
            symbol: Some("$".to_string()),
            status: Some("connected".to_string()),
        })),
        ..AccountsState::default()
    };

    let mc = McState {
        target_audience: Some(Arc::new(TargetAudience {
            locale: Some("en_US".to_string()),
            ..TargetAudience::default()
        })),
        countries: Some(Arc::new(countries)),
        shipping: Arc::new(ShippingState {
            rates: Arc::new(vec![ShippingRate {
                country_code: "US".to_string(),
                currency: "USD".to_string(),
                rate: "4.99".to_string(),
            }]),
            times: Arc::new(vec![ShippingTime {
                country_code: "US".to_string(),
                time: 3,
            }]),
        }),
        settings: Some(Arc::new(Settings {
            shipping_rate: Some("flat".to_string()),
            ..Settings::default()
        })),
        accounts: Arc::new(accounts),
        contact: Some(Arc::new(ContactInformation {
            id: 12345,
            ..ContactInformation::default()
        })),
    };

    let mut issues = BTreeMap::new();
    issues.insert(
        "{}".to_string(),
        Arc::new(IssuesPage {
            issues: vec![json!({ "code": "missing_gtin" })],
            total: 1,
        }),
    );
    let mut feed = BTreeMap::new();
    feed.insert(
        "{}".to_string(),
        Arc::new(ProductFeedPage {
            products: vec![json!({ "id": 1 })],
            total: 1,
        }),
    );
    let mut report = BTreeMap::new();
    report.insert(
        "ads:programs:{}".to_string(),
        Arc::new(json!({ "totals": {} })),
    );

    StateTree {
        mc: Arc::new(mc),
        ads_campaigns: Some(Arc::new(vec![AdsCampaign {
            id: 1,
            name: "Spring".to_string(),
            status: CampaignStatus::Enabled,
            amount: 10.0,
            country: Some("US".to_string()),
        }])),
        mc_setup: Some(Arc::new(McSetup::default())),
        mc_product_statistics: Some(Arc::new(ProductStatistics::default())),
        mc_issues: Arc::new(issues),
        mc_product_feed: Arc::new(feed),
        report: Arc::new(report),
    }
}

fn ptr<T>(arc: &Arc<T>) -> usize {
    Arc::as_ptr(arc) as *const () as usize
}

fn opt_ptr<T>(opt: &Option<Arc<T>>) -> usize {
    opt.as_ref().map_or(0, |arc| ptr(arc))
}

/// Allocation of every branch of the tree, by dotted path
fn branches(state: &StateTree) -> Vec<(&'static str, usize)> {
    let mc = &state.mc;
    let accounts = &mc.accounts;
    vec![
        ("mc", ptr(mc)),
        ("mc.target_audience", opt_ptr(&mc.target_audience)),
        ("mc.countries", opt_ptr(&mc.countries)),
        ("mc.shipping", ptr(&mc.shipping)),
        ("mc.shipping.rates", ptr(&mc.shipping.rates)),
        ("mc.shipping.times", ptr(&mc.shipping.times)),
        ("mc.settings", opt_ptr(&mc.settings)),
        ("mc.accounts", ptr(accounts)),
        ("mc.accounts.jetpack", opt_ptr(&accounts.jetpack)),
        ("mc.accounts.google", opt_ptr(&accounts.google)),
        ("mc.accounts.mc", opt_ptr(&accounts.mc)),
        ("mc.accounts.ads", opt_ptr(&accounts.ads)),
        ("mc.accounts.existing_mc", opt_ptr(&accounts.existing_mc)),
        ("mc.accounts.existing_ads", opt_ptr(&accounts.existing_ads)),
        ("mc.accounts.ads_billing_status", opt_ptr(&accounts.ads_billing_status)),
        ("mc.accounts.google_access", opt_ptr(&accounts.google_access)),
        ("mc.contact", opt_ptr(&mc.contact)),
        ("ads_campaigns", opt_ptr(&state.ads_campaigns)),
        ("mc_setup", opt_ptr(&state.mc_setup)),
        ("mc_product_statistics", opt_ptr(&state.mc_product_statistics)),
        ("mc_issues", ptr(&state.mc_issues)),
        ("mc_product_feed", ptr(&state.mc_product_feed)),
        ("report", ptr(&state.report)),
    ]
}

/// Assert that every branch of `next` not on the path to one of `changed`
/// is the very allocation it was in `prev`
///
/// Ancestors and descendants of a changed path are exempt.
pub fn assert_consistent_refs(prev: &StateTree, next: &StateTree, changed: &[&str]) {
    for ((path, before), (_, after)) in branches(prev).into_iter().zip(branches(next)) {
        let exempt = changed.iter().any(|c| {
            *c == path
                || c.starts_with(&format!("{}.", path))
                || path.starts_with(&format!("{}.", c))
        });
        if !exempt {
            assert_eq!(before, after, "branch `{}` was replaced", path);
        }
    }
}
