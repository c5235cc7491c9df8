use crate::error::Result;
use crate::models::{
    Architecture, ArchiveType, CanonicalValue, Distribution, LibCType, OperatingSystem,
    PackageType,
};
use colored::Colorize;
use comfy_table::{Cell, Table};

/// Prints the accepted value of every canonical field.
pub struct InfoCommand;

impl InfoCommand {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self) -> Result<()> {
        print!("{}", render());
        Ok(())
    }
}

impl Default for InfoCommand {
    fn default() -> Self {
        Self::new()
    }
}

fn render() -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", "---------- DiscoCLI ----------".cyan().bold()));
    out.push_str("Supported parameters with their available values.\n");
    out.push_str(
        "Not every distribution supports all operating systems, archive types and package types.\n\n",
    );

    out.push_str(&section("Distributions"));
    out.push_str(&format!("{}\n\n", distribution_table()));

    out.push_str(&value_list::<OperatingSystem>("Operating systems"));
    out.push_str(&value_list::<LibCType>("Libc types"));
    out.push_str(&value_list::<Architecture>("Architectures"));
    out.push_str(&value_list::<ArchiveType>("Archive types"));
    out.push_str(&value_list::<PackageType>("Package types"));

    out
}

fn section(title: &str) -> String {
    format!("{}\n", format!("---------- {title} ----------").cyan().bold())
}

fn distribution_table() -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_BORDERS_ONLY);
    table.set_header(vec![
        Cell::new("Distribution"),
        Cell::new("Name"),
        Cell::new("Maintained"),
    ]);

    for distribution in Distribution::sorted_by_label() {
        table.add_row(vec![
            Cell::new(distribution.api_string()),
            Cell::new(distribution.label()),
            Cell::new(if distribution.is_maintained() { "yes" } else { "no" }),
        ]);
    }

    table
}

fn value_list<T: CanonicalValue>(title: &str) -> String {
    let mut out = section(title);
    for &value in T::variants() {
        out.push_str(value.api_string());
        out.push('\n');
    }
    out.push('\n');
    out
}
