use anyhow::{Context, Result};
use comfy_table::Table;
use contacts_cli::pipeline::{CleanResult, clean_file};
use contacts_transform::ColumnAliases;

use crate::cli::CleanArgs;
use crate::summary::{apply_table_style, header_cell};

pub fn run_clean(args: &CleanArgs) -> Result<CleanResult> {
    let options = args.to_options();
    clean_file(&options).with_context(|| format!("failed to clean {}", args.input.display()))
}

pub fn run_aliases() -> Result<()> {
    let aliases = ColumnAliases::default();
    let mut table = Table::new();
    table.set_header(vec![header_cell("Header"), header_cell("Column")]);
    apply_table_style(&mut table);
    for (alias, column) in aliases.iter() {
        table.add_row(vec![alias.to_string(), column.to_string()]);
    }
    println!("{table}");
    Ok(())
}
