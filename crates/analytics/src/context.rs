use crate::engine::{extended_kpis, KpiEngine};
use crate::error::AnalyticsError;
use core_types::{CampaignInputs, GrowthInputs};
use std::fmt::Write;

/// Renders the KPI summary handed to the text-completion assistant.
///
/// The extended metrics are always computed here, so lifetime value and drop-off
/// in the summary are real values. Money inputs keep their decimal point
/// (`500.0`); derived metrics are fixed to two decimals.
pub fn kpi_context(inputs: &CampaignInputs, growth: &GrowthInputs) -> Result<String, AnalyticsError> {
    growth.validate()?;
    let report = KpiEngine::new().calculate(inputs)?;
    let extended = extended_kpis(inputs, growth);

    let mut context = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(context, "Visits: {}", inputs.visits);
    let _ = writeln!(context, "Sales: {}", inputs.sales);
    let _ = writeln!(context, "Ad spend: {:?}", inputs.ad_spend);
    let _ = writeln!(context, "Price: {:?}", inputs.price);
    let _ = writeln!(context, "CPA: {:.2}", report.cost_per_acquisition);
    let _ = writeln!(context, "ROAS: {:.2}x", report.return_on_ad_spend);
    let _ = writeln!(context, "LTV: {:.2}", extended.lifetime_value);
    let _ = writeln!(context, "Drop-off: {:.2}%", extended.drop_off_rate);
    let _ = write!(
        context,
        "Projection {} months at {}% monthly",
        growth.projection_months, growth.monthly_growth_pct
    );
    Ok(context)
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn context_lists_inputs_and_derived_metrics() {
        let expected = "Visits: 10000\n\
                        Sales: 100\n\
                        Ad spend: 500.0\n\
                        Price: 50.0\n\
                        CPA: 5.00\n\
                        ROAS: 10.00x\n\
                        LTV: 150.00\n\
                        Drop-off: 99.00%\n\
                        Projection 6 months at 10% monthly";
        assert_eq!(kpi_context(&campaign(), &growth()).unwrap(), expected);
    }

    #[test]
    fn fractional_money_is_printed_as_entered() {
        let inputs = CampaignInputs { ad_spend: 123.45, price: 19.99, ..campaign() };
        let context = kpi_context(&inputs, &growth()).unwrap();

        assert!(context.contains("Ad spend: 123.45\n"));
        assert!(context.contains("Price: 19.99\n"));
    }

    #[test]
    fn lifetime_value_and_drop_off_are_never_placeholders() {
        let inputs = CampaignInputs { sales: 2_500, ..campaign() };
        let growth = GrowthInputs { purchase_frequency: 5, ..growth() };
        let context = kpi_context(&inputs, &growth).unwrap();

        assert!(context.contains("LTV: 250.00\n"));
        assert!(context.contains("Drop-off: 75.00%\n"));
    }

    #[test]
    fn invalid_growth_is_rejected() {
        let bad = GrowthInputs { purchase_frequency: 0, ..growth() };
        assert!(matches!(
            kpi_context(&campaign(), &bad),
            Err(AnalyticsError::InvalidInput(_))
        ));
    }
}
