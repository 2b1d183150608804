use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use essent_prices::{EnergyData, Tariff};

/// Build a table of one day's tariffs, coloring each price against the
/// day's average.
pub fn build_tariff_table(tariffs: &[Tariff], data: &EnergyData) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    let total_header = format!("Total ({})", data.unit);
    table.set_header(vec!["Start", "End", total_header.as_str(), "Ex VAT", "VAT"]);
    for tariff in tariffs {
        table.add_row(vec![
            Cell::new(tariff.start.as_deref().unwrap_or("—")),
            Cell::new(tariff.end.as_deref().unwrap_or("—")).add_attribute(Attribute::Dim),
            amount_cell(tariff.total_amount).fg(match tariff.total_amount {
                Some(amount) if amount >= data.avg_price => Color::Red,
                Some(_) => Color::Green,
                None => Color::Grey,
            }),
            amount_cell(tariff.total_amount_ex).add_attribute(Attribute::Dim),
            amount_cell(tariff.total_amount_vat).add_attribute(Attribute::Dim),
        ]);
    }
    table
}

/// Build the min/avg/max summary row for one energy type.
pub fn build_summary_table(data: &EnergyData) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_header(vec!["Unit", "Min", "Avg", "Max"]);
    table.add_row(vec![
        Cell::new(&data.unit),
        Cell::new(format!("{:.4}", data.min_price)).fg(Color::Green),
        Cell::new(format!("{:.4}", data.avg_price)),
        Cell::new(format!("{:.4}", data.max_price)).fg(Color::Red),
    ]);
    table
}

fn amount_cell(amount: Option<f64>) -> Cell {
    match amount {
        Some(amount) => Cell::new(format!("{amount:.4}")).set_alignment(CellAlignment::Right),
        None => Cell::new("—").set_alignment(CellAlignment::Right),
    }
}
