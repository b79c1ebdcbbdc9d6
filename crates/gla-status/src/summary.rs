//! Plain-text rendering of a loaded state tree

use gla_store::domain_models::{ShippingRate, ShippingTime};
use gla_store::selectors;
use gla_store::{Notice, StateTree};
use std::fmt::{self, Write};

const NOT_LOADED: &str = "not loaded";

/// Summary of accounts, setup and shipping configuration
pub fn render(state: &StateTree) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out, "Accounts")?;
    let jetpack = selectors::get_jetpack_account(state).map(|account| {
        connection(
            account.active.is_yes(),
            account.display_name.as_deref().or(account.email.as_deref()),
        )
    });
    line(&mut out, "Jetpack", jetpack)?;

    let google = selectors::get_google_account(state)
        .map(|account| connection(account.active.is_yes(), account.email.as_deref()));
    line(&mut out, "Google", google)?;

    let mc = selectors::get_google_mc_account(state).map(|account| {
        format!(
            "{} ({})",
            account.id,
            account.status.as_deref().unwrap_or("unknown")
        )
    });
    line(&mut out, "Merchant Center", mc)?;

    let ads = selectors::get_google_ads_account(state).map(|account| {
        format!(
            "{} ({})",
            account.id,
            account.status.as_deref().unwrap_or("unknown")
        )
    });
    line(&mut out, "Google Ads", ads)?;

    if let Some(billing) = selectors::get_google_ads_account_billing_status(state) {
        line(&mut out, "Billing", Some(format!("{:?}", billing.status)))?;
    }

    writeln!(out)?;
    writeln!(out, "Merchant Center")?;
    let setup = selectors::get_mc_setup(state).map(|setup| match &setup.step {
        Some(step) => format!("{:?} (step: {})", setup.status, step),
        None => format!("{:?}", setup.status),
    });
    line(&mut out, "Setup", setup)?;

    let audience = selectors::get_target_audience(state).map(|audience| {
        let countries: Vec<&str> = audience.countries.iter().map(String::as_str).collect();
        if countries.is_empty() {
            format!("{:?}", audience.location)
        } else {
            format!("{:?}: {}", audience.location, countries.join(", "))
        }
    });
    line(&mut out, "Audience", audience)?;

    let settings = selectors::get_settings(state).map(|settings| {
        format!(
            "shipping rate {}, shipping time {}, tax {}",
            settings.shipping_rate.as_deref().unwrap_or("-"),
            settings.shipping_time.as_deref().unwrap_or("-"),
            settings.tax_rate.as_deref().unwrap_or("-"),
        )
    });
    line(&mut out, "Settings", settings)?;

    line(
        &mut out,
        "Shipping rates",
        Some(render_rates(selectors::get_shipping_rates(state))),
    )?;
    line(
        &mut out,
        "Shipping times",
        Some(render_times(selectors::get_shipping_times(state))),
    )?;

    if let Some(campaigns) = selectors::get_ads_campaigns(state) {
        writeln!(out)?;
        writeln!(out, "Campaigns")?;
        if campaigns.is_empty() {
            writeln!(out, "  none")?;
        }
        for campaign in campaigns.iter() {
            writeln!(
                out,
                "  #{} {} [{:?}] {:.2}/day",
                campaign.id, campaign.name, campaign.status, campaign.amount
            )?;
        }
    }

    Ok(out)
}

pub fn render_notice(notice: &Notice) -> String {
    format!(
        "  [{}] {} {}",
        notice.created_at.format("%H:%M:%S"),
        notice.status.as_str(),
        notice.message
    )
}

fn line(out: &mut String, label: &str, value: Option<String>) -> fmt::Result {
    let value = value.unwrap_or_else(|| NOT_LOADED.to_string());
    writeln!(out, "  {:<16}{}", format!("{}:", label), value)
}

fn connection(active: bool, who: Option<&str>) -> String {
    match (active, who) {
        (true, Some(who)) => format!("connected as {}", who),
        (true, None) => "connected".to_string(),
        (false, _) => "not connected".to_string(),
    }
}

fn render_rates(rates: &[ShippingRate]) -> String {
    if rates.is_empty() {
        return "none".to_string();
    }
    rates
        .iter()
        .map(|rate| format!("{} {} {}", rate.country_code, rate.rate, rate.currency))
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_times(times: &[ShippingTime]) -> String {
    if times.is_empty() {
        return "none".to_string();
    }
    times
        .iter()
        .map(|time| format!("{} {}d", time.country_code, time.time))
        .collect::<Vec<_>>()
        .join(", ")
}
