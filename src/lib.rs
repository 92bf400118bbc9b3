//! policy-dash: scenario analytics and shared chart geometry.
//!
//! This crate turns quarter-indexed macroeconomic time series into derived
//! indicators, yearly aggregates, and backend-agnostic chart geometry so an
//! interactive surface and a static vector-export surface render identically.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartId, DashboardState, Scenario};
pub use crate::core::{Period, RangeConfig};
pub use error::{DashError, DashResult};
