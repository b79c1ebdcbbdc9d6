//! Campaigns Reducer

use crate::actions::CampaignAction;
use crate::reducers::update_root;
use crate::state::StateTree;
use std::sync::Arc;

/// Reduce the paid campaign list
pub fn reduce_campaigns(state: &Arc<StateTree>, action: &CampaignAction) -> Arc<StateTree> {
    match action {
        CampaignAction::Receive(campaigns) => {
            let campaigns = Arc::new(campaigns.clone());
            update_root(state, |root| root.ads_campaigns = Some(campaigns))
        }

        CampaignAction::Update { id, data } => {
            let Some(campaigns) = &state.ads_campaigns else {
                log::warn!("Campaign {} updated before campaigns were loaded", id);
                return Arc::clone(state);
            };
            if !campaigns.iter().any(|c| c.id == *id) {
                log::warn!("Updated campaign {} is not in the list", id);
                return Arc::clone(state);
            }

            let updated: Vec<_> = campaigns
                .iter()
                .map(|campaign| {
                    let mut campaign = campaign.clone();
                    if campaign.id == *id {
                        data.apply_to(&mut campaign);
                    }
                    campaign
                })
                .collect();
            update_root(state, |root| root.ads_campaigns = Some(Arc::new(updated)))
        }

        CampaignAction::Delete(id) => {
            let Some(campaigns) = &state.ads_campaigns else {
                return Arc::clone(state);
            };
            if !campaigns.iter().any(|c| c.id == *id) {
                return Arc::clone(state);
            }

            let remaining: Vec<_> = campaigns.iter().filter(|c| c.id != *id).cloned().collect();
            log::debug!("Removed campaign {}, {} left", id, remaining.len());
            update_root(state, |root| root.ads_campaigns = Some(Arc::new(remaining)))
        }
    }
}
