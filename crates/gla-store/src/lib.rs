//! Client-side data store for the Google Listings & Ads admin
//!
//! # Data flow
//!
//! ```text
//!  caller ──► action creator ──► ApiFetch (HTTP)
//!                  │
//!                  ▼ Action
//!  Store::dispatch ──► middleware chain ──► reduce(&Arc<StateTree>, &Action)
//!                                                  │
//!                                                  ▼ new Arc<StateTree>
//!                                             selectors
//! ```
//!
//! Action creators own all I/O and wire-format translation and report
//! failures through the `Notifier` in their `ActionContext`. Reducers are
//! pure and share every untouched branch with the previous state.
//!
//! # Example
//!
//! ```rust,ignore
//! use gla_store::{action_creators, ActionContext, NoticeQueue, Store};
//! use std::sync::Arc;
//!
//! let notices = NoticeQueue::new();
//! let ctx = ActionContext::new(Arc::new(client), Arc::new(notices.clone()));
//! let mut store = Store::new(ctx.clone());
//!
//! let settings = store.settings().await;
//! store.try_perform(action_creators::disconnect_all_accounts(&ctx)).await?;
//! ```

pub mod action_creators;
pub mod actions;
pub mod domain_models;
pub mod middleware;
pub mod notices;
pub mod query_key;
pub mod reducers;
pub mod selectors;
pub mod state;
pub mod store;

#[cfg(test)]
mod test_utils;

pub use action_creators::ActionContext;
pub use actions::Action;
pub use middleware::{LoggingMiddleware, Middleware};
pub use notices::{handle_fetch_error, Notice, NoticeQueue, NoticeStatus, Notifier};
pub use query_key::query_key;
pub use reducers::reduce;
pub use state::StateTree;
pub use store::{Resource, Store};
