//! List the components known to the suite

use serde::Serialize;

use pagesweep_runner::components;

use crate::output::{print_list, OutputFormat, TableDisplay};

#[derive(Serialize)]
struct ComponentRow {
    name: String,
    data_columns: usize,
    columns: Vec<String>,
}

impl TableDisplay for ComponentRow {
    fn headers() -> Vec<&'static str> {
        vec!["NAME", "DATA COLUMNS", "COLUMNS"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.data_columns.to_string(),
            self.columns.join(", "),
        ]
    }
}

pub fn execute(format: OutputFormat) -> anyhow::Result<()> {
    let rows: Vec<ComponentRow> = components::all()
        .iter()
        .map(|c| ComponentRow {
            name: c.name().to_string(),
            data_columns: c.columns().len(),
            columns: c.columns().iter().map(|s| s.to_string()).collect(),
        })
        .collect();

    print_list(&rows, format);
    Ok(())
}
