//! Paid campaign actions

use crate::domain_models::{AdsCampaign, CampaignUpdate};

#[derive(Debug, Clone, PartialEq)]
pub enum CampaignAction {
    Receive(Vec<AdsCampaign>),
    Update { id: u64, data: CampaignUpdate },
    Delete(u64),
}
