//! Preview the worker assignment for an input source

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use pagesweep_common::SweepConfig;
use pagesweep_runner::{assign, input};

use crate::output::{print_list, OutputFormat, TableDisplay};

#[derive(Args, Debug)]
pub struct AssignArgs {
    /// Path to a sweep configuration file
    #[arg(long, default_value = "pagesweep.toml")]
    pub config: PathBuf,

    /// Override the worker count
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Override the input source path
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override the group-name prefix
    #[arg(long)]
    pub prefix: Option<String>,
}

#[derive(Serialize)]
struct AssignmentRow {
    worker: usize,
    groups: Vec<String>,
    urls: usize,
}

impl TableDisplay for AssignmentRow {
    fn headers() -> Vec<&'static str> {
        vec!["WORKER", "GROUPS", "URLS"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.worker.to_string(),
            if self.groups.is_empty() {
                "(none)".to_string()
            } else {
                self.groups.join(", ")
            },
            self.urls.to_string(),
        ]
    }
}

pub fn execute(args: AssignArgs, format: OutputFormat) -> anyhow::Result<()> {
    let mut config = SweepConfig::load(&args.config)?;
    if let Some(workers) = args.workers {
        config.workers.count = workers;
    }
    if let Some(path) = args.input {
        config.input.path = path;
    }
    if let Some(prefix) = args.prefix {
        config.input.group_prefix = prefix;
    }
    config.validate()?;

    let groups = input::load_row_groups(&config.input.path)?;
    let total = config.workers.count;

    let mut rows = Vec::with_capacity(total);
    for worker_index in 0..total {
        let assigned = assign::assign(&groups, worker_index, total, &config.input.group_prefix)?;
        rows.push(AssignmentRow {
            worker: worker_index + 1,
            urls: assigned.iter().map(|g| g.urls.len()).sum(),
            groups: assigned.into_iter().map(|g| g.name).collect(),
        });
    }

    print_list(&rows, format);
    Ok(())
}
