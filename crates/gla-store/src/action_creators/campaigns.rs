//! Paid campaign creators

use super::ActionContext;
use crate::actions::{Action, CampaignAction};
use crate::domain_models::{AdsCampaign, CampaignUpdate};
use gla_client::{ApiError, ApiRequest};

fn campaign_path(id: u64) -> String {
    format!("/ads/campaigns/{}", id)
}

pub fn receive_ads_campaigns(campaigns: Vec<AdsCampaign>) -> Action {
    Action::Campaigns(CampaignAction::Receive(campaigns))
}

pub async fn fetch_ads_campaigns(ctx: &ActionContext) -> Option<Action> {
    let result = ctx
        .fetch_json::<Vec<AdsCampaign>>(ApiRequest::get("/ads/campaigns"))
        .await;
    let campaigns = ctx.settle(result, "There was an error loading ads campaigns.")?;
    Some(receive_ads_campaigns(campaigns))
}

/// Change name, status or budget of a campaign
pub async fn update_ads_campaign(
    ctx: &ActionContext,
    id: u64,
    data: CampaignUpdate,
) -> Option<Action> {
    let result = async {
        let request = ApiRequest::post(campaign_path(id)).with_data(&data)?;
        ctx.send(request).await
    }
    .await;

    ctx.settle(
        result,
        "Unable to update your paid ads campaign. Please try again later.",
    )?;
    Some(Action::Campaigns(CampaignAction::Update { id, data }))
}

pub async fn delete_ads_campaign(ctx: &ActionContext, id: u64) -> Result<Action, ApiError> {
    let result = ctx.send(ApiRequest::delete(campaign_path(id))).await;
    ctx.settle_or_raise(
        result,
        "Unable to delete your paid ads campaign. Please try again later.",
    )?;
    Ok(Action::Campaigns(CampaignAction::Delete(id)))
}
