/// Per-invocation replacements for the configured default inputs.
///
/// With the `clap` feature enabled this doubles as a set of command-line flags.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "clap", derive(clap::Args))]
pub struct InputOverrides {
    /// Number of site visits in the period.
    #[cfg_attr(feature = "clap", arg(long))]
    pub visits: Option<u64>,

    /// Number of completed sales in the period.
    #[cfg_attr(feature = "clap", arg(long))]
    pub sales: Option<u64>,

    /// Advertising spend.
    #[cfg_attr(feature = "clap", arg(long))]
    pub ad_spend: Option<f64>,

    /// Unit price of the product.
    #[cfg_attr(feature = "clap", arg(long))]
    pub price: Option<f64>,

    #[cfg_attr(feature = "clap", arg(long))]
    pub fixed_costs: Option<f64>,

    #[cfg_attr(feature = "clap", arg(long))]
    pub variable_cost_per_unit: Option<f64>,

    /// Average purchases per customer (lifetime value).
    #[cfg_attr(feature = "clap", arg(long))]
    pub purchase_frequency: Option<u32>,

    /// Number of months to project.
    #[cfg_attr(feature = "clap", arg(long))]
    pub projection_months: Option<u32>,

    /// Estimated monthly growth, in percent.
    #[cfg_attr(feature = "clap", arg(long))]
    pub monthly_growth_pct: Option<f64>,
}
