//! Domain models for the Pharma Stock Management Platform

mod batch;
mod stock;

pub use batch::*;
pub use stock::*;
