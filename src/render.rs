use analytics::{FormulaNote, MetricCard, ProjectionPoint};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Table};

fn base_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(header);
    table
}

/// The headline KPIs, one row per card.
pub fn cards_table(cards: &[MetricCard]) -> Table {
    let mut table = base_table(vec!["KPI", "Value"]);
    for card in cards {
        table.add_row(vec![
            Cell::new(card.label),
            Cell::new(&card.value).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Month-by-month projection with the revenue band.
pub fn projection_table(points: &[ProjectionPoint]) -> Table {
    let mut table = base_table(vec![
        "Month",
        "Sales",
        "Revenue",
        "Revenue (low)",
        "Revenue (high)",
        "CPA",
    ]);
    for point in points {
        table.add_row(vec![
            Cell::new(point.month),
            money_cell(format!("{:.1}", point.sales)),
            money_cell(format!("${:.2}", point.revenue)),
            money_cell(format!("${:.2}", point.revenue_band.low)),
            money_cell(format!("${:.2}", point.revenue_band.high)),
            money_cell(format!("${:.2}", point.cost_per_acquisition)),
        ]);
    }
    table
}

pub fn formulas_table(notes: &[FormulaNote]) -> Table {
    let mut table = base_table(vec!["Metric", "Formula"]);
    for note in notes {
        table.add_row(vec![note.metric, note.expression]);
    }
    table
}

fn money_cell(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}
