use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// The scalar business inputs behind every KPI.
///
/// Counts are integers, money is `f64`. A record is only meaningful after
/// [`CampaignInputs::validate`] has accepted it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CampaignInputs {
    /// Site visits in the measured period. Must be at least 1.
    pub visits: u64,
    /// Completed sales in the same period.
    pub sales: u64,
    /// Advertising spend in currency units.
    pub ad_spend: f64,
    /// Unit price of the product. Must be at least 1.
    pub price: f64,
    pub fixed_costs: f64,
    pub variable_cost_per_unit: f64,
}

/// Inputs only used by the extended variant: lifetime value, drop-off and
/// the multi-month projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthInputs {
    /// Average purchases per customer over their lifetime.
    pub purchase_frequency: u32,
    /// Number of months in the projection, month 1 included.
    pub projection_months: u32,
    /// Expected month-over-month sales growth, in percent (0 to 100).
    pub monthly_growth_pct: f64,
}

impl CampaignInputs {
    /// Rejects out-of-range values before any KPI is computed.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.visits < 1 {
            return Err(CoreError::invalid("visits", "must be at least 1"));
        }
        check_finite("ad_spend", self.ad_spend)?;
        check_finite("price", self.price)?;
        check_finite("fixed_costs", self.fixed_costs)?;
        check_finite("variable_cost_per_unit", self.variable_cost_per_unit)?;

        if self.price < 1.0 {
            return Err(CoreError::invalid("price", format!("must be at least 1, got {}", self.price)));
        }
        check_non_negative("ad_spend", self.ad_spend)?;
        check_non_negative("fixed_costs", self.fixed_costs)?;
        check_non_negative("variable_cost_per_unit", self.variable_cost_per_unit)?;

        Ok(())
    }
}

impl GrowthInputs {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.purchase_frequency < 1 {
            return Err(CoreError::invalid("purchase_frequency", "must be at least 1"));
        }
        if self.projection_months < 1 {
            return Err(CoreError::invalid("projection_months", "must be at least 1"));
        }
        check_finite("monthly_growth_pct", self.monthly_growth_pct)?;
        if !(0.0..=100.0).contains(&self.monthly_growth_pct) {
            return Err(CoreError::invalid(
                "monthly_growth_pct",
                format!("must be between 0 and 100, got {}", self.monthly_growth_pct),
            ));
        }
        Ok(())
    }
}

fn check_finite(field: &str, value: f64) -> Result<(), CoreError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CoreError::invalid(field, format!("must be a finite number, got {}", value)))
    }
}

fn check_non_negative(field: &str, value: f64) -> Result<(), CoreError> {
    if value < 0.0 {
        return Err(CoreError::invalid(field, format!("must not be negative, got {}", value)));
    }
    Ok(())
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

    fn rejected_field(err: CoreError) -> String {
        match err {
            CoreError::InvalidInput(field, _) => field,
        }
    }

    #[test]
    fn accepts_dashboard_defaults() {
        assert!(campaign().validate().is_ok());
        assert!(growth().validate().is_ok());
    }

    #[test]
    fn rejects_zero_visits() {
        let inputs = CampaignInputs { visits: 0, ..campaign() };
        assert_eq!(rejected_field(inputs.validate().unwrap_err()), "visits");
    }

    #[test]
    fn rejects_price_below_one() {
        let inputs = CampaignInputs { price: 0.99, ..campaign() };
        assert_eq!(rejected_field(inputs.validate().unwrap_err()), "price");
    }

    #[test]
    fn rejects_negative_costs() {
        let spend = CampaignInputs { ad_spend: -1.0, ..campaign() };
        assert_eq!(rejected_field(spend.validate().unwrap_err()), "ad_spend");

        let fixed = CampaignInputs { fixed_costs: -0.5, ..campaign() };
        assert_eq!(rejected_field(fixed.validate().unwrap_err()), "fixed_costs");

        let variable = CampaignInputs { variable_cost_per_unit: -10.0, ..campaign() };
        assert_eq!(rejected_field(variable.validate().unwrap_err()), "variable_cost_per_unit");
    }

    #[test]
    fn rejects_non_finite_money() {
        let inputs = CampaignInputs { ad_spend: f64::NAN, ..campaign() };
        assert_eq!(rejected_field(inputs.validate().unwrap_err()), "ad_spend");

        let inputs = CampaignInputs { price: f64::INFINITY, ..campaign() };
        assert_eq!(rejected_field(inputs.validate().unwrap_err()), "price");
    }

    #[test]
    fn accepts_zero_sales_and_sales_above_visits() {
        assert!(CampaignInputs { sales: 0, ..campaign() }.validate().is_ok());
        assert!(CampaignInputs { sales: 20_000, ..campaign() }.validate().is_ok());
    }

    #[test]
    fn growth_bounds_are_inclusive() {
        assert!(GrowthInputs { monthly_growth_pct: 0.0, ..growth() }.validate().is_ok());
        assert!(GrowthInputs { monthly_growth_pct: 100.0, ..growth() }.validate().is_ok());

        let over = GrowthInputs { monthly_growth_pct: 100.5, ..growth() };
        assert_eq!(rejected_field(over.validate().unwrap_err()), "monthly_growth_pct");

        let under = GrowthInputs { monthly_growth_pct: -1.0, ..growth() };
        assert_eq!(rejected_field(under.validate().unwrap_err()), "monthly_growth_pct");
    }

    #[test]
    fn rejects_zero_frequency_and_months() {
        let freq = GrowthInputs { purchase_frequency: 0, ..growth() };
        assert_eq!(rejected_field(freq.validate().unwrap_err()), "purchase_frequency");

        let months = GrowthInputs { projection_months: 0, ..growth() };
        assert_eq!(rejected_field(months.validate().unwrap_err()), "projection_months");
    }

    #[test]
    fn deserializes_from_json() {
        let json = r#"{"visits":10,"sales":1,"ad_spend":5.0,"price":2.0,"fixed_costs":0.0,"variable_cost_per_unit":1.5}"#;
        let inputs: CampaignInputs = serde_json::from_str(json).unwrap();
        assert_eq!(inputs.visits, 10);
        assert_eq!(inputs.variable_cost_per_unit, 1.5);
    }
}
