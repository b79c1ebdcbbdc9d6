//! Merchant Center Reducer
//!
//! Settings, audience, contact details and the product status resources.
//! Issues and product feed pages are cached per query.

use crate::actions::MerchantCenterAction;
use crate::query_key::query_key;
use crate::reducers::{update_mc, update_root};
use crate::state::StateTree;
use std::sync::Arc;

/// Reduce Merchant Center state
pub fn reduce_merchant_center(
    state: &Arc<StateTree>,
    action: &MerchantCenterAction,
) -> Arc<StateTree> {
    match action {
        MerchantCenterAction::ReceiveSettings(settings)
        | MerchantCenterAction::SaveSettings(settings) => {
            let settings = Arc::new(settings.clone());
            update_mc(state, |mc| mc.settings = Some(settings))
        }

        MerchantCenterAction::ReceiveCountries(countries) => {
            let countries = Arc::new(countries.clone());
            update_mc(state, |mc| mc.countries = Some(countries))
        }

        MerchantCenterAction::ReceiveTargetAudience(audience)
        | MerchantCenterAction::SaveTargetAudience(audience) => {
            let audience = Arc::new(audience.clone());
            update_mc(state, |mc| mc.target_audience = Some(audience))
        }

        MerchantCenterAction::ReceiveContactInformation(contact) => {
            let contact = Arc::new(contact.clone());
            update_mc(state, |mc| mc.contact = Some(contact))
        }

        MerchantCenterAction::ReceiveSetup(setup) => {
            let setup = Arc::new(setup.clone());
            update_root(state, |root| root.mc_setup = Some(setup))
        }

        MerchantCenterAction::ReceiveProductStatistics(statistics) => {
            let statistics = Arc::new(statistics.clone());
            update_root(state, |root| root.mc_product_statistics = Some(statistics))
        }

        MerchantCenterAction::ReceiveIssues { query, data } => {
            let key = query_key(query);
            log::debug!("Caching {} issues for {}", data.issues.len(), key);
            let page = Arc::new(data.clone());
            update_root(state, |root| {
                Arc::make_mut(&mut root.mc_issues).insert(key, page);
            })
        }

        MerchantCenterAction::ReceiveProductFeed { query, data } => {
            let key = query_key(query);
            log::debug!("Caching {} feed products for {}", data.products.len(), key);
            let page = Arc::new(data.clone());
            update_root(state, |root| {
                Arc::make_mut(&mut root.mc_product_feed).insert(key, page);
            })
        }

        // Visibility lives on the product feed pages; the store drops those
        // pages so they are fetched again
        MerchantCenterAction::UpdateProductsVisibility { .. } => Arc::clone(state),
    }
}
