//! Data-access core for the sports administration dashboard.
//!
//! - [`cache::RequestCache`] runs network calls with single-flight
//!   deduplication and a keyed response cache
//! - [`loading::LoadingManager`] aggregates named busy flags into one global flag
//! - [`store::ResourceStore`] holds list/detail/pagination state for one entity
//!   type and exposes `fetch_list`, `fetch_one`, `create`, `update`, `delete`
//!
//! [`app::Stores`] wires one store per entity against a shared cache and
//! loading registry.

pub mod api;
pub mod app;
pub mod cache;
pub mod commands;
pub mod config;
pub mod error;
pub mod loading;
pub mod logging;
pub mod store;

pub use app::Stores;
pub use error::ApiError;
