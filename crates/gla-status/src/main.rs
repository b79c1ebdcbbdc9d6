use anyhow::{Context, Result};
use gla_client::HttpApiClient;
use gla_config::AppConfig;
use gla_store::{ActionContext, LoggingMiddleware, NoticeQueue, Store};
use std::sync::Arc;

mod summary;

#[tokio::main]
async fn main() -> Result<()> {
    // Before loading config so GLA_* variables from .env apply
    let dotenv = dotenvy::dotenv();

    let config = AppConfig::load().context("Failed to load configuration")?;
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    match dotenv {
        Ok(path) => log::debug!("Loaded .env file from: {:?}", path),
        Err(_) => log::debug!(".env file not found, relying on environment variables"),
    }

    config.validate().context("Invalid configuration")?;
    if !config.has_credentials() {
        log::warn!("No application password configured, most endpoints will answer 401");
    }

    log::info!("Starting gla-status for {}", config.site_url);

    let client = HttpApiClient::new(&config).context("Failed to build API client")?;
    log::debug!("API base url: {}", client.base_url());

    let notices = NoticeQueue::new();
    let ctx = ActionContext::new(Arc::new(client), Arc::new(notices.clone()));
    let mut store = Store::new(ctx);
    store.add_middleware(Box::new(LoggingMiddleware::new()));

    load(&mut store).await;

    let summary = summary::render(store.state()).context("Failed to render summary")?;
    print!("{}", summary);

    let pending = notices.drain();
    if !pending.is_empty() {
        println!();
        println!("Notices:");
        for notice in &pending {
            println!("{}", summary::render_notice(notice));
        }
    }

    log::info!("Exiting gla-status");
    Ok(())
}

/// Resolve every resource the summary shows
async fn load(store: &mut Store) {
    store.jetpack_account().await;
    store.google_account().await;
    store.google_mc_account().await;
    store.google_ads_account().await;

    let ads_connected = gla_store::selectors::is_ads_account_connected(store.state());
    if ads_connected {
        store.google_ads_account_billing_status().await;
        store.ads_campaigns().await;
    }

    store.mc_setup().await;
    store.settings().await;
    store.target_audience().await;
    store.shipping_rates().await;
    store.shipping_times().await;
}
