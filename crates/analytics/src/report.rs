use serde::{Deserialize, Serialize};

/// The standardized set of KPIs computed for one campaign snapshot.
///
/// This struct is the output of the `KpiEngine` and the data transfer object
/// used by the CLI tables, the web API and the assistant context.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KpiReport {
    // I. Funnel
    /// Sales per visit, in percent.
    pub conversion_rate: f64,

    // II. Acquisition
    pub cost_per_acquisition: f64, // 0 when there are no sales
    pub revenue: f64,
    pub return_on_ad_spend: f64, // 0 when nothing was spent

    // III. Unit Economics
    pub unit_margin: f64,
    pub break_even_sales: f64, // 0 when the margin is not positive

    // IV. Extended variant only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended: Option<ExtendedKpis>,
}

/// Metrics that need the extended input record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtendedKpis {
    pub lifetime_value: f64,
    /// Visits that did not convert, in percent.
    pub drop_off_rate: f64,
}

impl KpiReport {
    /// Creates a zeroed-out report.
    pub fn new() -> Self {
        Self {
            conversion_rate: 0.0,
            cost_per_acquisition: 0.0,
            revenue: 0.0,
            return_on_ad_spend: 0.0,
            unit_margin: 0.0,
            break_even_sales: 0.0,
            extended: None,
        }
    }
}

impl Default for KpiReport {
    fn default() -> Self {
        Self::new()
    }
}
