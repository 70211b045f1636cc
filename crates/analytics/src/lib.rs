//! # KPI Analytics Engine
//!
//! This crate turns a campaign's raw numbers into the marketing KPIs shown on the
//! dashboard: conversion rate, CPA, ROAS, break-even sales, lifetime value and
//! drop-off, plus a month-by-month growth projection.
//!
//! ## Architectural Principles
//!
//! - **Pure Logic:** No I/O, no clocks, no shared state. It depends only on
//!   `core-types`.
//! - **Stateless Calculation:** `KpiEngine` validates an input record and returns
//!   a `KpiReport`. Every zero denominator yields a zero metric instead of an
//!   error; the only failures are validation rejections.
//!
//! ## Public API
//!
//! - `KpiEngine`: the calculator.
//! - `KpiReport` / `ExtendedKpis`: the computed metrics.
//! - `Projection` / `ProjectionPoint`: the lazy growth series.
//! - `DashboardSnapshot`: report, cards and collected projection in one value.
//! - `metric_cards`, `FORMULAS`, `kpi_context`: presentation helpers shared by the
//!   CLI and the web API.

pub mod context;
pub mod display;
pub mod engine;
pub mod error;
pub mod formulas;
pub mod projection;
pub mod report;
pub mod snapshot;

// Re-export the key components to create a clean, public-facing API.
pub use context::kpi_context;
pub use display::{metric_cards, MetricCard};
pub use engine::KpiEngine;
pub use error::AnalyticsError;
pub use formulas::{FormulaNote, FORMULAS};
pub use projection::{Projection, ProjectionPoint, RevenueBand};
pub use report::{ExtendedKpis, KpiReport};
pub use snapshot::DashboardSnapshot;
