use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use catalog_model::SetState;

use crate::commands::{ConversionResult, StatsResult};

pub fn print_conversion(result: &ConversionResult) {
    println!("{}", result.summary_line());
}

pub fn print_stats(result: &StatsResult) {
    println!("Catalog: {}", result.input.display());
    println!("{}", stats_table(result));
}

/// State breakdown: one row per distinct raw state, then the total.
pub fn stats_table(result: &StatsResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("State"), header_cell("Sets")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (state, count) in &result.counts {
        table.add_row(vec![state_cell(state.as_deref()), Cell::new(count)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.summary.total).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn state_cell(state: Option<&str>) -> Cell {
    match state.and_then(SetState::from_exact) {
        Some(SetState::ReadyToGo) => Cell::new(SetState::ReadyToGo).fg(Color::Green),
        Some(SetState::PartiallyComplete) => Cell::new(SetState::PartiallyComplete).fg(Color::Yellow),
        Some(SetState::InTheAether) => Cell::new(SetState::InTheAether).fg(Color::DarkGrey),
        None => match state {
            Some("") => dim_cell("(blank)"),
            Some(other) => Cell::new(other),
            None => dim_cell("(missing)"),
        },
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
