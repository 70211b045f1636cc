use crate::report::KpiReport;
use serde::Serialize;

/// A labelled, pre-formatted headline metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: String,
}

impl MetricCard {
    fn new(label: &'static str, value: String) -> Self {
        Self { label, value }
    }
}

/// Formats the headline metrics in dashboard order.
///
/// The four key KPIs always come first; lifetime value and drop-off follow when
/// the report was computed with growth inputs.
pub fn metric_cards(report: &KpiReport) -> Vec<MetricCard> {
    let mut cards = vec![
        MetricCard::new("Conversion Rate", format!("{:.2}%", report.conversion_rate)),
        MetricCard::new("CPA", format!("${:.2}", report.cost_per_acquisition)),
        MetricCard::new("ROAS", format!("{:.2}x", report.return_on_ad_spend)),
        MetricCard::new("Break-even Sales", format!("{:.0}", report.break_even_sales)),
    ];

    if let Some(extended) = &report.extended {
        cards.push(MetricCard::new("Lifetime Value (LTV)", format!("${:.2}", extended.lifetime_value)));
        cards.push(MetricCard::new("Drop-off Rate", format!("{:.2}%", extended.drop_off_rate)));
    }

    cards
}
