use serde::Serialize;

/// A human-readable note explaining how one metric is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormulaNote {
    pub metric: &'static str,
    pub expression: &'static str,
}

pub const FORMULAS: &[FormulaNote] = &[
    FormulaNote { metric: "Conversion Rate", expression: "(Sales / Visits) * 100" },
    FormulaNote { metric: "CPA", expression: "Ad Spend / Sales" },
    FormulaNote { metric: "ROAS", expression: "Revenue / Ad Spend" },
    FormulaNote { metric: "Break-even Sales", expression: "Fixed Costs / (Price - Variable Costs)" },
    FormulaNote { metric: "LTV", expression: "Price * Purchase Frequency" },
    FormulaNote { metric: "Drop-off Rate", expression: "((Visits - Sales) / Visits) * 100" },
    FormulaNote {
        metric: "Revenue and Sales Projection",
        expression: "Sales compound month over month by the growth percentage; revenue = sales * price",
    },
];
