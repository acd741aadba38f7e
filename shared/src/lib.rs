//! Shared types and stock classification for the Pharma Stock Management Platform
//!
//! This crate contains the batch model and the stock-status rules shared
//! between the backend, both portals (via WASM), and reporting.

pub mod classifier;
pub mod error;
pub mod models;
pub mod validation;

pub use classifier::*;
pub use error::*;
pub use models::*;
pub use validation::*;
