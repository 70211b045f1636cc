use serde::{Deserialize, Serialize};

/// Width of the revenue uncertainty band on either side of the estimate.
const BAND_LOW_FACTOR: f64 = 0.9;
const BAND_HIGH_FACTOR: f64 = 1.1;

/// One month of the growth projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// 1-based month index; month 1 is the current period.
    pub month: u32,
    pub sales: f64,
    pub revenue: f64,
    pub cost_per_acquisition: f64,
    pub revenue_band: RevenueBand,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevenueBand {
    pub low: f64,
    pub high: f64,
}

impl RevenueBand {
    fn around(revenue: f64) -> Self {
        Self {
            low: revenue * BAND_LOW_FACTOR,
            high: revenue * BAND_HIGH_FACTOR,
        }
    }
}

/// A lazy, finite series of monthly projections.
///
/// Sales compound by `1 + growth_pct / 100` each month, revenue follows sales at
/// a fixed price and CPA is held at the month-1 value. Nothing is computed until
/// the iterator is advanced.
#[derive(Debug, Clone)]
pub struct Projection {
    /// Month index of the last point yielded; 0 before the first.
    month: u32,
    remaining: u32,
    sales: f64,
    price: f64,
    cost_per_acquisition: f64,
    growth_pct: f64,
}

impl Projection {
    /// Builds the series from the month-1 baseline.
    ///
    /// The caller is responsible for validated inputs; the engine's
    /// `KpiEngine::project` is the usual way in.
    pub fn new(
        base_sales: f64,
        price: f64,
        cost_per_acquisition: f64,
        months: u32,
        growth_pct: f64,
    ) -> Self {
        Self {
            month: 0,
            remaining: months,
            sales: base_sales,
            price,
            cost_per_acquisition,
            growth_pct,
        }
    }
}

impl Iterator for Projection {
    type Item = ProjectionPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        if self.month > 0 {
            self.sales *= 1.0 + self.growth_pct / 100.0;
        }
        // month never exceeds the requested count, which fits in u32.
        self.month += 1;
        self.remaining -= 1;

        let revenue = self.sales * self.price;
        Some(ProjectionPoint {
            month: self.month,
            sales: self.sales,
            revenue,
            cost_per_acquisition: self.cost_per_acquisition,
            revenue_band: RevenueBand::around(revenue),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Projection {}
