//! Shipping Reducer
//!
//! Keeps at most one rate and one time per country code. Upserts replace the
//! rows of every country they name; deletes drop them.

use crate::actions::ShippingAction;
use crate::domain_models::CountryCode;
use crate::reducers::update_shipping;
use crate::state::StateTree;
use std::sync::Arc;

/// Reduce shipping rates and times
pub fn reduce_shipping(state: &Arc<StateTree>, action: &ShippingAction) -> Arc<StateTree> {
    let shipping = &state.mc.shipping;
    match action {
        ShippingAction::ReceiveRates(rates) => {
            let rates = Arc::new(rates.clone());
            update_shipping(state, |s| s.rates = rates)
        }

        ShippingAction::UpsertRates(aggregated) => {
            let rates = upsert(
                shipping.rates.as_slice(),
                aggregated.entries(),
                |rate| &rate.country_code,
            );
            update_shipping(state, |s| s.rates = Arc::new(rates))
        }

        ShippingAction::DeleteRates(codes) => {
            match remove(shipping.rates.as_slice(), codes, |rate| &rate.country_code) {
                Some(rates) => update_shipping(state, |s| s.rates = Arc::new(rates)),
                None => {
                    log::debug!("No shipping rates stored for {:?}", codes);
                    Arc::clone(state)
                }
            }
        }

        ShippingAction::ReceiveTimes(times) => {
            let times = Arc::new(times.clone());
            update_shipping(state, |s| s.times = times)
        }

        ShippingAction::UpsertTimes(aggregated) => {
            let times = upsert(
                shipping.times.as_slice(),
                aggregated.entries(),
                |time| &time.country_code,
            );
            update_shipping(state, |s| s.times = Arc::new(times))
        }

        ShippingAction::DeleteTimes(codes) => {
            match remove(shipping.times.as_slice(), codes, |time| &time.country_code) {
                Some(times) => update_shipping(state, |s| s.times = Arc::new(times)),
                None => {
                    log::debug!("No shipping times stored for {:?}", codes);
                    Arc::clone(state)
                }
            }
        }
    }
}

/// Drop every row whose country is among `entries`, then append `entries`
/// (first row wins when a country is named twice)
fn upsert<T: Clone>(
    current: &[T],
    entries: impl Iterator<Item = T>,
    code_of: impl Fn(&T) -> &CountryCode,
) -> Vec<T> {
    let mut fresh: Vec<T> = Vec::new();
    for entry in entries {
        if !fresh.iter().any(|e| code_of(e) == code_of(&entry)) {
            fresh.push(entry);
        }
    }

    let mut next: Vec<T> = current
        .iter()
        .filter(|&row| !fresh.iter().any(|e| code_of(e) == code_of(row)))
        .cloned()
        .collect();
    next.extend(fresh);
    next
}

/// Rows left after removing `codes`, or `None` when no row matched
fn remove<T: Clone>(
    current: &[T],
    codes: &[CountryCode],
    code_of: impl Fn(&T) -> &CountryCode,
) -> Option<Vec<T>> {
    if !current.iter().any(|row| codes.contains(code_of(row))) {
        return None;
    }
    Some(
        current
            .iter()
            .filter(|&row| !codes.contains(code_of(row)))
            .cloned()
            .collect(),
    )
}
