use crate::action_creators::{self as creators, ActionContext};
use crate::actions::{AccountsAction, Action, MerchantCenterAction};
use crate::domain_models::{
    AdsAccount, AdsBillingStatus, AdsCampaign, ContactInformation, CountryCode,
    ExistingAdsAccount, ExistingMerchantCenterAccount, GoogleAccount, IssuesPage,
    JetpackAccount, McSetup, MerchantCenterAccount, ProductFeedPage, ProductStatistics,
    ReportKey, Settings, ShippingRate, ShippingTime, SupportedCountry, TargetAudience,
};
use crate::middleware::Middleware;
use crate::query_key::query_key;
use crate::reducers::reduce;
use crate::selectors;
use crate::state::StateTree;
use gla_client::{ApiError, Query};
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};
use std::future::Future;
use std::sync::Arc;

/// A resource the store knows how to load on first read
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Resource {
    ShippingRates,
    ShippingTimes,
    Settings,
    JetpackAccount,
    GoogleAccount,
    GoogleMcAccount,
    ExistingGoogleMcAccounts,
    GoogleAdsAccount,
    GoogleAdsBillingStatus,
    ExistingGoogleAdsAccounts,
    Countries,
    TargetAudience,
    AdsCampaigns,
    McSetup,
    McProductStatistics,
    McContactInformation,
    /// Issues page, by query key
    McIssues(String),
    /// Product feed page, by query key
    McProductFeed(String),
    /// Report data set, by report cache key
    Report(String),
}

/// Store - holds the state tree and runs the dispatch loop
///
/// Reads through the resolving accessors (`settings()`, `mc_issues(query)`,
/// ...) load a resource the first time it is asked for. Each resource is
/// attempted once per store; a failed load is not retried until the resource
/// is invalidated. Disconnects and visibility updates invalidate the resources
/// they empty.
pub struct Store {
    state: Arc<StateTree>,
    middleware: Vec<Box<dyn Middleware>>,
    context: ActionContext,
    resolved: HashSet<Resource>,
}

impl Store {
    pub fn new(context: ActionContext) -> Self {
        Self::with_state(context, StateTree::default())
    }

    pub fn with_state(context: ActionContext, initial_state: StateTree) -> Self {
        Self {
            state: Arc::new(initial_state),
            middleware: Vec::new(),
            context,
            resolved: HashSet::new(),
        }
    }

    /// Add middleware to the store
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &Arc<StateTree> {
        &self.state
    }

    /// Capabilities handed to action creators
    pub fn context(&self) -> &ActionContext {
        &self.context
    }

    /// Process an action through middleware chain and reducer
    pub fn dispatch(&mut self, action: Action) {
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state) {
                return;
            }
        }

        if let Action::MerchantCenter(MerchantCenterAction::UpdateProductsVisibility { .. }) =
            &action
        {
            // Feed pages carry the visibility flag
            self.resolved
                .retain(|resource| !matches!(resource, Resource::McProductFeed(_)));
        }
        if let Action::Accounts(accounts) = &action {
            for resource in cleared_by_disconnect(accounts) {
                self.resolved.remove(&resource);
            }
        }

        self.state = reduce(&self.state, &action);
    }

    /// Await an action creator and dispatch what it resolved to
    ///
    /// Returns whether an action was dispatched.
    pub async fn perform<F>(&mut self, creator: F) -> bool
    where
        F: Future<Output = Option<Action>>,
    {
        match creator.await {
            Some(action) => {
                self.dispatch(action);
                true
            }
            None => false,
        }
    }

    /// Like `perform`, for creators that hand their error back
    pub async fn try_perform<F>(&mut self, creator: F) -> Result<(), ApiError>
    where
        F: Future<Output = Result<Action, ApiError>>,
    {
        let action = creator.await?;
        self.dispatch(action);
        Ok(())
    }

    pub fn is_resolved(&self, resource: &Resource) -> bool {
        self.resolved.contains(resource)
    }

    /// Forget that `resource` was loaded so the next read fetches it again
    pub fn invalidate(&mut self, resource: &Resource) {
        self.resolved.remove(resource);
    }

    /// Run `creator` unless `resource` was already attempted
    async fn resolve<F>(&mut self, resource: Resource, creator: F)
    where
        F: Future<Output = Option<Action>>,
    {
        if !self.resolved.insert(resource.clone()) {
            return;
        }
        log::debug!("Resolving {:?}", resource);
        if !self.perform(creator).await {
            log::debug!("Resolving {:?} produced no data", resource);
        }
    }

    // === Resolving accessors ===

    pub async fn shipping_rates(&mut self) -> Arc<Vec<ShippingRate>> {
        let ctx = self.context.clone();
        self.resolve(Resource::ShippingRates, creators::fetch_shipping_rates(&ctx))
            .await;
        Arc::clone(selectors::get_shipping_rates(&self.state))
    }

    pub async fn shipping_times(&mut self) -> Arc<Vec<ShippingTime>> {
        let ctx = self.context.clone();
        self.resolve(Resource::ShippingTimes, creators::fetch_shipping_times(&ctx))
            .await;
        Arc::clone(selectors::get_shipping_times(&self.state))
    }

    pub async fn settings(&mut self) -> Option<Arc<Settings>> {
        let ctx = self.context.clone();
        self.resolve(Resource::Settings, creators::fetch_settings(&ctx))
            .await;
        selectors::get_settings(&self.state).cloned()
    }

    pub async fn jetpack_account(&mut self) -> Option<Arc<JetpackAccount>> {
        let ctx = self.context.clone();
        self.resolve(Resource::JetpackAccount, creators::fetch_jetpack_account(&ctx))
            .await;
        selectors::get_jetpack_account(&self.state).cloned()
    }

    pub async fn google_account(&mut self) -> Option<Arc<GoogleAccount>> {
        let ctx = self.context.clone();
        self.resolve(Resource::GoogleAccount, creators::fetch_google_account(&ctx))
            .await;
        selectors::get_google_account(&self.state).cloned()
    }

    /// Access data is only ever pushed by the OAuth flow, never fetched
    pub fn google_account_access(&self) -> Option<Arc<Value>> {
        selectors::get_google_account_access(&self.state).cloned()
    }

    pub async fn google_mc_account(&mut self) -> Option<Arc<MerchantCenterAccount>> {
        let ctx = self.context.clone();
        self.resolve(
            Resource::GoogleMcAccount,
            creators::fetch_google_mc_account(&ctx),
        )
        .await;
        selectors::get_google_mc_account(&self.state).cloned()
    }

    pub async fn existing_google_mc_accounts(
        &mut self,
    ) -> Option<Arc<Vec<ExistingMerchantCenterAccount>>> {
        let ctx = self.context.clone();
        self.resolve(
            Resource::ExistingGoogleMcAccounts,
            creators::fetch_existing_google_mc_accounts(&ctx),
        )
        .await;
        selectors::get_existing_google_mc_accounts(&self.state).cloned()
    }

    pub async fn google_ads_account(&mut self) -> Option<Arc<AdsAccount>> {
        let ctx = self.context.clone();
        self.resolve(
            Resource::GoogleAdsAccount,
            creators::fetch_google_ads_account(&ctx),
        )
        .await;
        selectors::get_google_ads_account(&self.state).cloned()
    }

    pub async fn google_ads_account_billing_status(&mut self) -> Option<Arc<AdsBillingStatus>> {
        let ctx = self.context.clone();
        self.resolve(
            Resource::GoogleAdsBillingStatus,
            creators::fetch_google_ads_account_billing_status(&ctx),
        )
        .await;
        selectors::get_google_ads_account_billing_status(&self.state).cloned()
    }

    pub async fn existing_google_ads_accounts(&mut self) -> Option<Arc<Vec<ExistingAdsAccount>>> {
        let ctx = self.context.clone();
        self.resolve(
            Resource::ExistingGoogleAdsAccounts,
            creators::fetch_existing_google_ads_accounts(&ctx),
        )
        .await;
        selectors::get_existing_google_ads_accounts(&self.state).cloned()
    }

    pub async fn countries(&mut self) -> Option<Arc<BTreeMap<CountryCode, SupportedCountry>>> {
        let ctx = self.context.clone();
        self.resolve(Resource::Countries, creators::fetch_countries(&ctx))
            .await;
        selectors::get_countries(&self.state).cloned()
    }

    pub async fn target_audience(&mut self) -> Option<Arc<TargetAudience>> {
        let ctx = self.context.clone();
        self.resolve(Resource::TargetAudience, creators::fetch_target_audience(&ctx))
            .await;
        selectors::get_target_audience(&self.state).cloned()
    }

    pub async fn ads_campaigns(&mut self) -> Option<Arc<Vec<AdsCampaign>>> {
        let ctx = self.context.clone();
        self.resolve(Resource::AdsCampaigns, creators::fetch_ads_campaigns(&ctx))
            .await;
        selectors::get_ads_campaigns(&self.state).cloned()
    }

    pub async fn mc_setup(&mut self) -> Option<Arc<McSetup>> {
        let ctx = self.context.clone();
        self.resolve(Resource::McSetup, creators::fetch_mc_setup(&ctx))
            .await;
        selectors::get_mc_setup(&self.state).cloned()
    }

    pub async fn mc_product_statistics(&mut self) -> Option<Arc<ProductStatistics>> {
        let ctx = self.context.clone();
        self.resolve(
            Resource::McProductStatistics,
            creators::fetch_mc_product_statistics(&ctx),
        )
        .await;
        selectors::get_mc_product_statistics(&self.state).cloned()
    }

    pub async fn mc_contact_information(&mut self) -> Option<Arc<ContactInformation>> {
        let ctx = self.context.clone();
        self.resolve(
            Resource::McContactInformation,
            creators::fetch_mc_contact_information(&ctx),
        )
        .await;
        selectors::get_google_mc_contact_information(&self.state).cloned()
    }

    pub async fn mc_issues(&mut self, query: &Query) -> Option<Arc<IssuesPage>> {
        let ctx = self.context.clone();
        self.resolve(
            Resource::McIssues(query_key(query)),
            creators::fetch_mc_issues(&ctx, query.clone()),
        )
        .await;
        selectors::get_mc_issues(&self.state, query).cloned()
    }

    pub async fn mc_product_feed(&mut self, query: &Query) -> Option<Arc<ProductFeedPage>> {
        let ctx = self.context.clone();
        self.resolve(
            Resource::McProductFeed(query_key(query)),
            creators::fetch_mc_product_feed(&ctx, query.clone()),
        )
        .await;
        selectors::get_mc_product_feed(&self.state, query).cloned()
    }

    pub async fn report(&mut self, key: &ReportKey) -> Option<Arc<Value>> {
        let ctx = self.context.clone();
        self.resolve(
            Resource::Report(key.cache_key()),
            creators::fetch_report(&ctx, key),
        )
        .await;
        selectors::get_report(&self.state, key).cloned()
    }
}

/// Account resources a disconnect empties, so the next read asks the server again
fn cleared_by_disconnect(action: &AccountsAction) -> Vec<Resource> {
    match action {
        AccountsAction::DisconnectGoogle => vec![Resource::GoogleAccount],
        AccountsAction::DisconnectAds => vec![
            Resource::GoogleAdsAccount,
            Resource::GoogleAdsBillingStatus,
        ],
        AccountsAction::DisconnectAll => vec![
            Resource::JetpackAccount,
            Resource::GoogleAccount,
            Resource::GoogleMcAccount,
            Resource::ExistingGoogleMcAccounts,
            Resource::GoogleAdsAccount,
            Resource::GoogleAdsBillingStatus,
            Resource::ExistingGoogleAdsAccounts,
        ],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::LoggingMiddleware;
    use crate::test_utils::{test_context, MockApi};
    use gla_client::Method;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn store_with(api: &Arc<MockApi>) -> Store {
        let (ctx, _notices) = test_context(api);
        let mut store = Store::new(ctx);
        store.add_middleware(Box::new(LoggingMiddleware::new()));
        store
    }

    /// Middleware that swallows every disconnect
    struct BlockDisconnects;

    impl Middleware for BlockDisconnects {
        fn handle(&mut self, action: &Action, _state: &StateTree) -> bool {
            !matches!(action, Action::Accounts(AccountsAction::DisconnectAll))
        }
    }

    #[tokio::test]
    async fn test_resolving_accessor_fetches_once() {
        let api = Arc::new(MockApi::default());
        api.reply(
            Method::Get,
            "/mc/settings",
            json!({ "shipping_rate": "flat", "website_live": true }),
        );
        let mut store = store_with(&api);

        let first = store.settings().await.unwrap();
        let second = store.settings().await.unwrap();

        assert_eq!(first.shipping_rate.as_deref(), Some("flat"));
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(api.request_count(), 1);
        assert!(store.is_resolved(&Resource::Settings));
    }

    #[tokio::test]
    async fn test_failed_resolution_is_not_retried() {
        let api = Arc::new(MockApi::default());
        api.fail(Method::Get, "/ads/campaigns", 500);
        let mut store = store_with(&api);

        assert!(store.ads_campaigns().await.is_none());
        assert!(store.ads_campaigns().await.is_none());
        assert_eq!(api.request_count(), 1);

        store.invalidate(&Resource::AdsCampaigns);
        store.ads_campaigns().await;
        assert_eq!(api.request_count(), 2);
    }

    #[tokio::test]
    async fn test_query_resources_resolve_per_query() {
        let api = Arc::new(MockApi::default());
        api.reply(
            Method::Get,
            "/mc/issues",
            json!({ "issues": [], "total": 0 }),
        );
        let mut store = store_with(&api);
        let page_one = Query::new().with("page", 1);
        let page_two = Query::new().with("page", 2);

        store.mc_issues(&page_one).await;
        store.mc_issues(&page_two).await;
        store.mc_issues(&page_one).await;

        assert_eq!(api.request_count(), 2);
        assert_eq!(store.state().mc_issues.len(), 2);
    }

    #[tokio::test]
    async fn test_visibility_update_invalidates_product_feed() {
        let api = Arc::new(MockApi::default());
        api.reply(
            Method::Get,
            "/mc/product-feed",
            json!({ "products": [{ "id": 1, "visible": true }], "total": 1 }),
        );
        api.reply(
            Method::Post,
            "/mc/product-visibility",
            json!({ "success": [1], "errors": [] }),
        );
        let mut store = store_with(&api);
        let query = Query::new().with("page", 1);

        store.mc_product_feed(&query).await;
        let ctx = store.context().clone();
        store
            .try_perform(creators::update_mc_product_visibility(&ctx, vec![1], false))
            .await
            .unwrap();
        assert!(!store.is_resolved(&Resource::McProductFeed(query_key(&query))));

        store.mc_product_feed(&query).await;
        let feed_requests = api
            .requests()
            .into_iter()
            .filter(|r| r.path == "/mc/product-feed")
            .count();
        assert_eq!(feed_requests, 2);
    }

    #[tokio::test]
    async fn test_disconnect_refetches_accounts_on_next_read() {
        let api = Arc::new(MockApi::default());
        api.reply(
            Method::Get,
            "/google/connected",
            json!({ "active": "yes", "email": "merchant@example.com" }),
        );
        api.reply(Method::Delete, "/connections", json!({}));
        let mut store = store_with(&api);

        assert!(store.google_account().await.is_some());
        let ctx = store.context().clone();
        store
            .try_perform(creators::disconnect_all_accounts(&ctx))
            .await
            .unwrap();
        assert!(!store.is_resolved(&Resource::GoogleAccount));

        let account = store.google_account().await;

        assert!(account.is_some());
        let google_requests = api
            .requests()
            .into_iter()
            .filter(|r| r.path == "/google/connected")
            .count();
        assert_eq!(google_requests, 2);
    }

    #[test]
    fn test_disconnect_ads_keeps_google_resolution() {
        let api = Arc::new(MockApi::default());
        let (ctx, _notices) = test_context(&api);
        let mut store = Store::with_state(ctx, crate::test_utils::populated_state());
        store.resolved.insert(Resource::GoogleAccount);
        store.resolved.insert(Resource::GoogleAdsAccount);

        store.dispatch(Action::Accounts(AccountsAction::DisconnectAds));

        assert!(store.is_resolved(&Resource::GoogleAccount));
        assert!(!store.is_resolved(&Resource::GoogleAdsAccount));
    }

    #[tokio::test]
    async fn test_try_perform_returns_error_and_keeps_state() {
        let api = Arc::new(MockApi::default());
        api.fail(Method::Delete, "/ads/campaigns/1", 500);
        let mut store = store_with(&api);
        let before = Arc::clone(store.state());

        let ctx = store.context().clone();
        let result = store
            .try_perform(creators::delete_ads_campaign(&ctx, 1))
            .await;

        assert!(result.is_err());
        assert!(Arc::ptr_eq(&before, store.state()));
    }

    #[tokio::test]
    async fn test_perform_dispatches_resolution() {
        let api = Arc::new(MockApi::default());
        api.reply(Method::Get, "/mc/setup", json!({ "status": "complete" }));
        let mut store = store_with(&api);

        let ctx = store.context().clone();
        let dispatched = store.perform(creators::fetch_mc_setup(&ctx)).await;

        assert!(dispatched);
        assert!(store.state().mc_setup.is_some());
    }

    #[test]
    fn test_middleware_can_consume_action() {
        let api = Arc::new(MockApi::default());
        let (ctx, _notices) = test_context(&api);
        let mut store = Store::with_state(ctx, crate::test_utils::populated_state());
        store.add_middleware(Box::new(BlockDisconnects));
        let before = Arc::clone(store.state());

        store.dispatch(Action::Accounts(AccountsAction::DisconnectAll));
        assert!(Arc::ptr_eq(&before, store.state()));

        store.dispatch(Action::Accounts(AccountsAction::DisconnectGoogle));
        assert!(store.state().mc.accounts.google.is_none());
    }
}
