use crate::models::token::ColorRamp;
use comfy_table::{Attribute, Cell, CellAlignment, Table};

/// Print a ramp as a table with a truecolor swatch per step, plus a
/// continuous bar of the whole ramp underneath.
pub fn print_ramp_summary(label: &str, ramp: &ColorRamp) {
    let mut table = Table::new();
    table
        .set_header(vec![
            Cell::new("Step")
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Center),
            Cell::new("Value")
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Center),
            Cell::new("Swatch").add_attribute(Attribute::Bold),
            Cell::new("Description")
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Center),
        ])
        .load_preset(comfy_table::presets::ASCII_BORDERS_ONLY_CONDENSED);

    for (step, token) in ramp {
        table.add_row(vec![
            Cell::new(step).set_alignment(CellAlignment::Center),
            Cell::new(&token.value),
            Cell::new(swatch(&token.value, 6)),
            Cell::new(&token.description),
        ]);
    }

    println!("\nRamp for {label}:\n{table}");

    let bar: String = ramp.values().map(|t| swatch(&t.value, 3)).collect();
    if !bar.is_empty() {
        println!("\n  {bar}\n");
    }
}

fn swatch(value: &str, width: usize) -> String {
    match csscolorparser::parse(value) {
        Ok(color) => {
            let [r, g, b, _] = color.to_rgba8();
            format!("\x1b[38;2;{};{};{}m{}\x1b[0m", r, g, b, "█".repeat(width))
        }
        Err(_) => " ".repeat(width),
    }
}
