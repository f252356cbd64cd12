//! Entertainment catalog
//!
//! - Item records and their JSON shape
//! - Fetching the list from the remote endpoint
//! - Multi-select bookkeeping for the home screen

pub mod client;
pub mod models;
pub mod selection;

pub use client::{CatalogClient, CatalogState};
pub use models::{CatalogItem, ItemId};
pub use selection::{Selection, Toggle};
