//! Store State Module
//!
//! The state tree is a tree of `Arc`s. Reducers copy only the path from the
//! root down to the branch they change; every other branch keeps its
//! allocation, so `Arc::ptr_eq` tells a consumer whether a slice changed.

mod accounts;
mod app;
mod merchant_center;
mod shipping;

pub use accounts::AccountsState;
pub use app::{QueryCache, StateTree};
pub use merchant_center::McState;
pub use shipping::ShippingState;
