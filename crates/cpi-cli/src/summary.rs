use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::pipeline::RunResult;

/// Maximum number of unmapped codes listed before eliding the rest.
const MAX_LISTED_CODES: usize = 12;

pub fn print_summary(result: &RunResult) {
    println!("{}", summary_table(result));
}

pub fn summary_table(result: &RunResult) -> Table {
    let stats = &result.stats;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Item"), header_cell("Value")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    table.add_row(vec![label_cell("Source"), Cell::new(&result.source)]);
    table.add_row(vec![
        label_cell("Output"),
        Cell::new(result.destination.to_string()),
    ]);
    table.add_row(vec![label_cell("Layout"), Cell::new(result.layout)]);
    table.add_row(vec![label_cell("Rows read"), Cell::new(stats.rows_read)]);
    table.add_row(vec![
        label_cell("Observations written"),
        Cell::new(stats.observations).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        label_cell("Empty cells skipped"),
        dim_cell(stats.empty_cells),
    ]);
    table.add_row(vec![
        label_cell("Unmapped codes"),
        count_cell(stats.unmapped_codes.len(), Color::Yellow),
    ]);
    if !stats.unmapped_codes.is_empty() {
        table.add_row(vec![
            label_cell("  -> codes"),
            Cell::new(unmapped_list(stats.unmapped_codes.iter().map(String::as_str)))
                .fg(Color::Yellow),
        ]);
    }
    table
}

fn unmapped_list<'a>(codes: impl ExactSizeIterator<Item = &'a str>) -> String {
    let total = codes.len();
    let listed: Vec<&str> = codes.take(MAX_LISTED_CODES).collect();
    let mut text = listed.join(", ");
    if total > MAX_LISTED_CODES {
        text.push_str(&format!(" (+{} more)", total - MAX_LISTED_CODES));
    }
    text
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn label_cell(label: &str) -> Cell {
    Cell::new(label).fg(Color::Blue)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
