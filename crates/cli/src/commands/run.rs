//! Run a component sweep

use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use colored::Colorize;

use pagesweep_common::SweepConfig;
use pagesweep_runner::{components, ScriptDriverConfig, ScriptSessionFactory, SweepRunner};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Component under test (see `pagesweep components`)
    #[arg(short, long)]
    pub component: String,

    /// Path to a sweep configuration file
    #[arg(long, default_value = "pagesweep.toml")]
    pub config: PathBuf,

    /// Override the worker count
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Override the input source path
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override the output directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the group-name prefix
    #[arg(long)]
    pub prefix: Option<String>,

    /// Extractor program handling navigation and scraping
    #[arg(long, default_value = "node")]
    pub extractor: String,

    /// Leading extractor arguments, e.g. the script path (repeatable)
    #[arg(long = "extractor-arg")]
    pub extractor_args: Vec<String>,
}

/// Run the sweep; returns whether every URL passed cleanly.
pub async fn execute(args: RunArgs) -> anyhow::Result<bool> {
    let mut config = SweepConfig::load(&args.config)?;
    if let Some(workers) = args.workers {
        config.workers.count = workers;
    }
    if let Some(path) = args.input {
        config.input.path = path;
    }
    if let Some(dir) = args.output {
        config.output.dir = dir;
    }
    if let Some(prefix) = args.prefix {
        config.input.group_prefix = prefix;
    }

    let component = components::by_name(&args.component).ok_or_else(|| {
        anyhow::anyhow!(
            "unknown component \"{}\" (see `pagesweep components`)",
            args.component
        )
    })?;

    let driver_config = ScriptDriverConfig {
        command: args.extractor,
        args: args.extractor_args,
        page_load_timeout: Duration::from_millis(config.timeouts.page_load_ms),
        tab_switch_timeout: Duration::from_millis(config.timeouts.tab_switch_ms),
    };

    let runner = SweepRunner::new(config, component, ScriptSessionFactory::new(driver_config));
    let summary = runner.run().await?;
    runner.write_summary(&summary)?;

    println!();
    for worker in &summary.workers {
        match &worker.error {
            Some(error) => println!(
                "{} worker {}: {}",
                "✗".red(),
                worker.worker_index + 1,
                error
            ),
            None => println!(
                "{} worker {}: {} group(s), {} passed, {} failed",
                "✓".green(),
                worker.worker_index + 1,
                worker.groups,
                worker.passed,
                worker.failed
            ),
        }
    }

    let totals = format!(
        "{} URL(s), {} passed, {} failed ({} ms)",
        summary.urls, summary.passed, summary.failed, summary.duration_ms
    );
    let clean = summary.failed == 0 && summary.workers.iter().all(|w| w.error.is_none());
    if clean {
        println!("{}", totals.green());
    } else {
        println!("{}", totals.red());
    }

    Ok(clean)
}
