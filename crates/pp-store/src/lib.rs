//! pp-store library
//!
//! Owns the client-side profile collection and the derived views over it.

pub mod query;
pub mod stats;
pub mod store;
pub mod views;

pub use store::{ProfileStore, Snapshot};
pub use views::{DashboardView, ProfileListView, ProfileSummary, ViewCoordinator};

#[cfg(test)]
mod tests;
