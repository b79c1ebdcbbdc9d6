use gla_client::types::{CountryCode, ShippingRateRecord, ShippingTimeRecord};
use serde::{Deserialize, Serialize};

/// Shipping rate for a single destination country
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingRate {
    pub country_code: CountryCode,
    pub currency: String,
    /// Price as entered by the merchant, e.g. "4.99"
    pub rate: String,
}

impl From<ShippingRateRecord> for ShippingRate {
    fn from(record: ShippingRateRecord) -> Self {
        Self {
            country_code: record.country_code,
            currency: record.currency,
            // f64 Display drops a trailing ".0" (4.0 -> "4")
            rate: record.rate.to_string(),
        }
    }
}

/// Shipping time for a single destination country
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingTime {
    pub country_code: CountryCode,
    /// Days in transit
    pub time: u32,
}

impl From<ShippingTimeRecord> for ShippingTime {
    fn from(record: ShippingTimeRecord) -> Self {
        Self {
            country_code: record.country_code,
            time: record.time,
        }
    }
}

/// One rate applied to several countries at once
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedShippingRate {
    pub country_codes: Vec<CountryCode>,
    pub currency: String,
    pub rate: String,
}

impl AggregatedShippingRate {
    /// Per-country rows, in the order of `country_codes`
    pub fn entries(&self) -> impl Iterator<Item = ShippingRate> + '_ {
        self.country_codes.iter().map(|code| ShippingRate {
            country_code: code.clone(),
            currency: self.currency.clone(),
            rate: self.rate.clone(),
        })
    }
}

/// One shipping time applied to several countries at once
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedShippingTime {
    pub country_codes: Vec<CountryCode>,
    pub time: u32,
}

impl AggregatedShippingTime {
    /// Per-country rows, in the order of `country_codes`
    pub fn entries(&self) -> impl Iterator<Item = ShippingTime> + '_ {
        self.country_codes.iter().map(|code| ShippingTime {
            country_code: code.clone(),
            time: self.time,
        })
    }
}
