//! Consolidated type definitions for the statistics API.
//!
//! This module contains the shared wire types used across the estimate and
//! inspection endpoints.

mod estimates;
mod geo;
mod inspections;
mod items;
mod tenders;

pub use estimates::*;
pub use geo::*;
pub use inspections::*;
pub use items::*;
pub use tenders::*;
