use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::core::{aid::AidRules, calculation::Calculation, catalog::Catalog};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

fn verdict(meets: bool) -> Cell {
    if meets { Cell::new("Yes").fg(Color::Green) } else { Cell::new("No").fg(Color::Red) }
}

pub fn build_catalog_table(catalog: &Catalog) -> Table {
    let mut table = new_table();
    table.set_header(vec!["ID", "Name", "Cost", "Class steps"]);
    for improvement in catalog.iter() {
        let cost = match (improvement.cost_per_square_metre, improvement.fixed_cost) {
            (Some(cost_per_square_metre), _) => cost_per_square_metre.to_string(),
            (None, Some(fixed_cost)) => fixed_cost.to_string(),
            (None, None) => String::new(),
        };
        table.add_row(vec![
            Cell::new(&improvement.id).add_attribute(Attribute::Bold),
            Cell::new(&improvement.name),
            Cell::new(cost).set_alignment(CellAlignment::Right),
            Cell::new(improvement.class_steps).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn build_aid_rules_table(rules: &AidRules) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Aid", "Applies from", "Rate", "Cap"]);
    table.add_row(vec![
        Cell::new("Subsidy"),
        Cell::new("any gain").add_attribute(Attribute::Dim),
        Cell::new(rules.subsidy_rate).set_alignment(CellAlignment::Right),
        Cell::new(rules.subsidy_cap).set_alignment(CellAlignment::Right),
    ]);
    for tier in &rules.deduction_tiers {
        table.add_row(vec![
            Cell::new("Tax deduction"),
            Cell::new(format!("{} steps", tier.min_gain)),
            Cell::new(tier.rate).set_alignment(CellAlignment::Right),
            Cell::new(tier.cap).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new("Energy savings").add_attribute(Attribute::Dim),
        Cell::new("per year").add_attribute(Attribute::Dim),
        Cell::new(rules.savings_rate).set_alignment(CellAlignment::Right),
        Cell::new(""),
    ]);
    table
}

pub fn build_measures_table(calculation: &Calculation) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Measure", "Cost", "Class steps"]);
    for measure in &calculation.measures {
        table.add_row(vec![
            Cell::new(&measure.name),
            Cell::new(measure.cost).set_alignment(CellAlignment::Right),
            Cell::new(measure.class_steps).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(calculation.total_cost)
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
        Cell::new(calculation.total_gain)
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn build_calculation_table(calculation: &Calculation) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Class", "New class", "Subsidy", "Deduction", "Net cost", "Savings", "Payback", "2030",
        "2033",
    ]);
    table.add_row(vec![
        Cell::new(calculation.current_class).fg(calculation.current_class.color()),
        Cell::new(format!("{} (+{})", calculation.new_class, calculation.class_steps_gained))
            .fg(calculation.new_class.color())
            .add_attribute(Attribute::Bold),
        Cell::new(calculation.estimated_subsidy).set_alignment(CellAlignment::Right),
        Cell::new(calculation.tax_deduction).set_alignment(CellAlignment::Right),
        Cell::new(calculation.net_cost)
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
        Cell::new(calculation.annual_savings).set_alignment(CellAlignment::Right),
        Cell::new(format!("{} y", calculation.payback_years)).set_alignment(CellAlignment::Right),
        verdict(calculation.meets_2030_threshold),
        verdict(calculation.meets_2033_threshold),
    ]);
    table
}
