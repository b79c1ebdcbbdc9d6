//! reqwest-based plugin API client
//!
//! Direct implementation of the `ApiFetch` trait. Requests go to
//! `{site_url}/wp-json{api_namespace}{path}` and authenticate with a
//! WordPress application password when one is configured.

use crate::client::{ApiFetch, ApiRequest, Method};
use crate::error::ApiError;
use async_trait::async_trait;
use gla_config::AppConfig;
use log::debug;
use serde_json::Value;
use std::time::Duration;

/// Direct plugin API client
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Option<(String, String)>,
}

impl HttpApiClient {
    /// Create a client for the site described by `config`
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        let base_url = api_base_url(&config.site_url, &config.api_namespace)?;

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(|source| ApiError::Transport {
            path: base_url.clone(),
            source,
        })?;

        let credentials = match (&config.username, &config.application_password) {
            (Some(user), Some(password)) => Some((user.clone(), password.clone())),
            _ => None,
        };

        Ok(Self {
            http,
            base_url,
            credentials,
        })
    }

    /// Absolute URL of a namespace-relative path
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn api_base_url(site_url: &str, namespace: &str) -> Result<String, ApiError> {
    let site = site_url.trim().trim_end_matches('/');
    if !(site.starts_with("http://") || site.starts_with("https://")) {
        return Err(ApiError::InvalidBaseUrl(site_url.to_string()));
    }
    let namespace = namespace.trim_matches('/');
    Ok(format!("{}/wp-json/{}", site, namespace))
}

fn to_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait]
impl ApiFetch for HttpApiClient {
    async fn fetch(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let url = self.endpoint(&request.path);
        debug!("{} {}", request.method, url);

        let mut builder = self.http.request(to_reqwest(request.method), &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query.to_pairs());
        }
        if let Some(data) = &request.data {
            builder = builder.json(data);
        }
        if let Some((user, password)) = &self.credentials {
            builder = builder.basic_auth(user, Some(password));
        }

        let transport = |source| ApiError::Transport {
            path: request.path.clone(),
            source,
        };
        let response = builder.send().await.map_err(transport)?;
        let status = response.status();
        let body = response.bytes().await.map_err(transport)?;

        if !status.is_success() {
            debug!("{} {} -> {}", request.method, request.path, status);
            return Err(ApiError::from_response(
                status.as_u16(),
                request.path.clone(),
                &body,
            ));
        }

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&body).map_err(|source| ApiError::Decode {
            path: request.path.clone(),
            source,
        })
    }
}
