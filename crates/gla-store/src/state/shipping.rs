use crate::domain_models::{ShippingRate, ShippingTime};
use std::sync::Arc;

/// Shipping rates and times, at most one entry per country code each
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShippingState {
    pub rates: Arc<Vec<ShippingRate>>,
    pub times: Arc<Vec<ShippingTime>>,
}
