//! Shipping actions

use crate::domain_models::{
    AggregatedShippingRate, AggregatedShippingTime, CountryCode, ShippingRate, ShippingTime,
};

#[derive(Debug, Clone, PartialEq)]
pub enum ShippingAction {
    /// Full list of shipping rates fetched from the server
    ReceiveRates(Vec<ShippingRate>),
    /// One rate saved for a set of countries
    UpsertRates(AggregatedShippingRate),
    /// Rates removed for these countries
    DeleteRates(Vec<CountryCode>),
    /// Full list of shipping times fetched from the server
    ReceiveTimes(Vec<ShippingTime>),
    /// One shipping time saved for a set of countries
    UpsertTimes(AggregatedShippingTime),
    /// Times removed for these countries
    DeleteTimes(Vec<CountryCode>),
}
