use crate::error::AnalyticsError;
use crate::projection::Projection;
use crate::report::{ExtendedKpis, KpiReport};
use core_types::{CampaignInputs, GrowthInputs};

/// A stateless calculator for deriving marketing KPIs from campaign numbers.
#[derive(Debug, Default)]
pub struct KpiEngine {}

impl KpiEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculates the basic KPI set.
    ///
    /// # Arguments
    ///
    /// * `inputs` - The campaign's visits, sales, spend, price and costs.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `KpiReport` (with `extended` left as `None`)
    /// or an `AnalyticsError` if the inputs are out of range.
    pub fn calculate(&self, inputs: &CampaignInputs) -> Result<KpiReport, AnalyticsError> {
        inputs.validate()?;

        let mut report = KpiReport::new();
        self.calculate_funnel(inputs, &mut report);
        self.calculate_acquisition(inputs, &mut report);
        self.calculate_unit_economics(inputs, &mut report);

        tracing::debug!(
            conversion_rate = report.conversion_rate,
            cpa = report.cost_per_acquisition,
            roas = report.return_on_ad_spend,
            "Calculated campaign KPIs."
        );
        Ok(report)
    }

    /// Calculates the basic KPI set plus lifetime value and drop-off rate.
    pub fn calculate_extended(
        &self,
        inputs: &CampaignInputs,
        growth: &GrowthInputs,
    ) -> Result<KpiReport, AnalyticsError> {
        growth.validate()?;
        let mut report = self.calculate(inputs)?;
        report.extended = Some(extended_kpis(inputs, growth));
        Ok(report)
    }

    /// Builds the lazy month-by-month projection starting from the current period.
    pub fn project(
        &self,
        inputs: &CampaignInputs,
        growth: &GrowthInputs,
    ) -> Result<Projection, AnalyticsError> {
        inputs.validate()?;
        growth.validate()?;

        Ok(Projection::new(
            inputs.sales as f64,
            inputs.price,
            cost_per_acquisition(inputs),
            growth.projection_months,
            growth.monthly_growth_pct,
        ))
    }

    fn calculate_funnel(&self, inputs: &CampaignInputs, report: &mut KpiReport) {
        // Validation guarantees visits >= 1.
        report.conversion_rate = (inputs.sales as f64 / inputs.visits as f64) * 100.0;
    }

    fn calculate_acquisition(&self, inputs: &CampaignInputs, report: &mut KpiReport) {
        report.cost_per_acquisition = cost_per_acquisition(inputs);
        report.revenue = inputs.sales as f64 * inputs.price;

        if inputs.ad_spend > 0.0 {
            report.return_on_ad_spend = report.revenue / inputs.ad_spend;
        }
    }

    fn calculate_unit_economics(&self, inputs: &CampaignInputs, report: &mut KpiReport) {
        report.unit_margin = inputs.price - inputs.variable_cost_per_unit;

        if report.unit_margin > 0.0 {
            report.break_even_sales = inputs.fixed_costs / report.unit_margin;
        }
    }
}

/// Lifetime value and drop-off. Inputs must already be validated.
pub(crate) fn extended_kpis(inputs: &CampaignInputs, growth: &GrowthInputs) -> ExtendedKpis {
    let visits = inputs.visits as f64;
    ExtendedKpis {
        lifetime_value: inputs.price * growth.purchase_frequency as f64,
        drop_off_rate: ((visits - inputs.sales as f64) / visits) * 100.0,
    }
}

fn cost_per_acquisition(inputs: &CampaignInputs) -> f64 {
    if inputs.sales > 0 {
        inputs.ad_spend / inputs.sales as f64
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::CoreError;

    fn campaign() -> CampaignInputs {
        CampaignInputs {
            visits: 10_000,
            sales: 100,
            ad_spend: 500.0,
            price: 50.0,
            fixed_costs: 1_000.0,
            variable_cost_per_unit: 10.0,
        }
    }

    fn growth() -> GrowthInputs {
        GrowthInputs {
            purchase_frequency: 3,
            projection_months: 6,
            monthly_growth_pct: 10.0,
        }
    }

    #[test]
    fn dashboard_example_matches_published_numbers() {
        let report = KpiEngine::new().calculate(&campaign()).unwrap();

        assert_eq!(report.conversion_rate, 1.0);
        assert_eq!(report.cost_per_acquisition, 5.0);
        assert_eq!(report.revenue, 5_000.0);
        assert_eq!(report.return_on_ad_spend, 10.0);
        assert_eq!(report.unit_margin, 40.0);
        assert_eq!(report.break_even_sales, 25.0);
        assert!(report.extended.is_none());
    }

    #[test]
    fn extended_adds_ltv_and_drop_off() {
        let report = KpiEngine::new().calculate_extended(&campaign(), &growth()).unwrap();
        let extended = report.extended.unwrap();

        assert_eq!(extended.lifetime_value, 150.0);
        assert_eq!(extended.drop_off_rate, 99.0);
    }

    #[test]
    fn no_sales_means_zero_cpa() {
        let inputs = CampaignInputs { sales: 0, ad_spend: 9_999.0, ..campaign() };
        let report = KpiEngine::new().calculate(&inputs).unwrap();

        assert_eq!(report.cost_per_acquisition, 0.0);
        assert_eq!(report.conversion_rate, 0.0);
    }

    #[test]
    fn no_spend_means_zero_roas() {
        let inputs = CampaignInputs { ad_spend: 0.0, ..campaign() };
        let report = KpiEngine::new().calculate(&inputs).unwrap();

        assert_eq!(report.revenue, 5_000.0);
        assert_eq!(report.return_on_ad_spend, 0.0);
    }

    #[test]
    fn non_positive_margin_means_zero_break_even() {
        let equal = CampaignInputs { variable_cost_per_unit: 50.0, ..campaign() };
        assert_eq!(KpiEngine::new().calculate(&equal).unwrap().break_even_sales, 0.0);

        let negative = CampaignInputs { variable_cost_per_unit: 80.0, ..campaign() };
        let report = KpiEngine::new().calculate(&negative).unwrap();
        assert_eq!(report.unit_margin, -30.0);
        assert_eq!(report.break_even_sales, 0.0);
    }

    #[test]
    fn invalid_inputs_are_rejected_before_calculation() {
        let inputs = CampaignInputs { visits: 0, ..campaign() };
        let err = KpiEngine::new().calculate(&inputs).unwrap_err();

        assert!(matches!(
            err,
            AnalyticsError::InvalidInput(CoreError::InvalidInput(ref field, _)) if field == "visits"
        ));
    }

    #[test]
    fn invalid_growth_is_rejected() {
        let bad = GrowthInputs { projection_months: 0, ..growth() };
        assert!(KpiEngine::new().calculate_extended(&campaign(), &bad).is_err());
        assert!(KpiEngine::new().project(&campaign(), &bad).is_err());
    }

    #[test]
    fn projection_starts_from_current_period() {
        let engine = KpiEngine::new();
        let report = engine.calculate(&campaign()).unwrap();
        let first = engine.project(&campaign(), &growth()).unwrap().next().unwrap();

        assert_eq!(first.month, 1);
        assert_eq!(first.sales, 100.0);
        assert_eq!(first.revenue, report.revenue);
        assert_eq!(first.cost_per_acquisition, report.cost_per_acquisition);
    }
}
