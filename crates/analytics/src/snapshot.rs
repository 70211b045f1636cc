use crate::display::{metric_cards, MetricCard};
use crate::engine::KpiEngine;
use crate::error::AnalyticsError;
use crate::projection::ProjectionPoint;
use crate::report::KpiReport;
use core_types::{CampaignInputs, GrowthInputs};
use serde::Serialize;

/// Everything a dashboard page shows for one set of inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub report: KpiReport,
    pub cards: Vec<MetricCard>,
    /// Empty for the basic variant.
    pub projection: Vec<ProjectionPoint>,
}

impl KpiEngine {
    /// Computes the report, its metric cards and, when growth inputs are given,
    /// the collected projection.
    pub fn snapshot(
        &self,
        inputs: &CampaignInputs,
        growth: Option<&GrowthInputs>,
    ) -> Result<DashboardSnapshot, AnalyticsError> {
        let (report, projection) = match growth {
            Some(growth) => (
                self.calculate_extended(inputs, growth)?,
                self.project(inputs, growth)?.collect(),
            ),
            None => (self.calculate(inputs)?, Vec::new()),
        };

        Ok(DashboardSnapshot {
            cards: metric_cards(&report),
            report,
            projection,
        })
    }
}
