//! Listing search, location lookup and the supporting flows of a Kuwaiti
//! real-estate classifieds app.

pub mod advice;
pub mod app;
pub mod auth;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod filters;
pub mod locations;
pub mod models;
pub mod submission;

pub use app::{Action, AppState, Outcome, View};
pub use config::Config;
pub use filters::{filter_listings, FilterCriteria};
pub use locations::LocationIndex;
pub use models::{Category, Listing, Purpose};
