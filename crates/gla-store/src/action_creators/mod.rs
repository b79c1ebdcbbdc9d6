//! Action creators
//!
//! Each creator performs at most one request against the plugin API and
//! resolves to the `Action` the reducer understands. Wire-format translation
//! (keyed collections, numeric rates, camel-cased fields) happens here and
//! nowhere else.
//!
//! Creators come in two shapes:
//! - `async fn fetch_x(ctx) -> Option<Action>`: on failure a notice is raised
//!   and `None` is returned.
//! - `async fn x(ctx) -> Result<Action, ApiError>`: same notice, but the error
//!   is handed back so the caller can react (disconnects, deletes).
//!
//! Creators never touch the state; dispatching their result is the job of
//! `Store::perform` / `Store::try_perform`.

pub mod accounts;
pub mod campaigns;
pub mod merchant_center;
pub mod reports;
pub mod shipping;

pub use accounts::*;
pub use campaigns::*;
pub use merchant_center::*;
pub use reports::*;
pub use shipping::*;

use crate::notices::{handle_fetch_error, Notifier};
use gla_client::{ApiError, ApiFetch, ApiRequest};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Capabilities an action creator may use: the API transport and the notice
/// sink
#[derive(Clone)]
pub struct ActionContext {
    api: Arc<dyn ApiFetch>,
    notifier: Arc<dyn Notifier>,
}

impl ActionContext {
    pub fn new(api: Arc<dyn ApiFetch>, notifier: Arc<dyn Notifier>) -> Self {
        Self { api, notifier }
    }

    pub fn api(&self) -> &dyn ApiFetch {
        self.api.as_ref()
    }

    pub fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }

    /// Run the request and decode the response body into `T`
    pub(crate) async fn fetch_json<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<T, ApiError> {
        let path = request.path.clone();
        let value = self.api.fetch(request).await?;
        serde_json::from_value(value).map_err(|source| ApiError::Decode { path, source })
    }

    /// Run the request, ignoring the response body
    pub(crate) async fn send(&self, request: ApiRequest) -> Result<(), ApiError> {
        self.api.fetch(request).await.map(|_| ())
    }

    /// Report a failure and swallow it
    pub(crate) fn settle<T>(&self, result: Result<T, ApiError>, message: &str) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                handle_fetch_error(self.notifier(), &error, message);
                None
            }
        }
    }

    /// Report a failure and hand it back to the caller
    pub(crate) fn settle_or_raise<T>(
        &self,
        result: Result<T, ApiError>,
        message: &str,
    ) -> Result<T, ApiError> {
        result.map_err(|error| {
            handle_fetch_error(self.notifier(), &error, message);
            error
        })
    }
}

impl std::fmt::Debug for ActionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionContext").finish_non_exhaustive()
    }
}
