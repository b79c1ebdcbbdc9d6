use super::{AccountsState, ShippingState};
use crate::domain_models::{
    ContactInformation, CountryCode, Settings, SupportedCountry, TargetAudience,
};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Merchant Center configuration and connected accounts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct McState {
    pub target_audience: Option<Arc<TargetAudience>>,
    pub countries: Option<Arc<BTreeMap<CountryCode, SupportedCountry>>>,
    pub shipping: Arc<ShippingState>,
    pub settings: Option<Arc<Settings>>,
    pub accounts: Arc<AccountsState>,
    pub contact: Option<Arc<ContactInformation>>,
}
