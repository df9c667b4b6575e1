//! Sweep orchestration across parallel workers
//!
//! The runner spawns one task per worker. Workers are fully independent:
//! each re-reads the read-only input source, takes its assignment, drives
//! its own session, and writes artifacts nobody else writes. A failure
//! inside one worker never terminates the others.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tokio::task::JoinSet;
use tracing::{error, info, warn};

use pagesweep_common::{Result, SweepConfig};

use crate::assign;
use crate::collect::ResultCollector;
use crate::component::Component;
use crate::driver::SessionFactory;
use crate::input;
use crate::pipeline;

/// Result of one worker's run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerSummary {
    pub worker_index: usize,
    pub groups: usize,
    pub urls: usize,
    pub passed: usize,
    pub failed: usize,
    pub artifacts: Vec<PathBuf>,
    pub error: Option<String>,
}

impl WorkerSummary {
    fn new(worker_index: usize) -> Self {
        Self {
            worker_index,
            groups: 0,
            urls: 0,
            passed: 0,
            failed: 0,
            artifacts: Vec::new(),
            error: None,
        }
    }
}

/// Result of the whole sweep
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepSummary {
    pub component: String,
    pub total_workers: usize,
    pub groups: usize,
    pub urls: usize,
    pub passed: usize,
    pub failed: usize,
    pub started_at: String,
    pub duration_ms: u64,
    pub workers: Vec<WorkerSummary>,
}

/// Runs one component's sweep across the configured workers
pub struct SweepRunner<F: SessionFactory> {
    config: SweepConfig,
    component: &'static dyn Component,
    factory: Arc<F>,
}

impl<F> SweepRunner<F>
where
    F: SessionFactory + 'static,
{
    pub fn new(config: SweepConfig, component: &'static dyn Component, factory: F) -> Self {
        Self {
            config,
            component,
            factory: Arc::new(factory),
        }
    }

    /// Run the sweep and aggregate per-worker results.
    pub async fn run(&self) -> Result<SweepSummary> {
        self.config.validate()?;

        let start = Instant::now();
        let started_at = chrono::Utc::now().to_rfc3339();
        let total_workers = self.config.workers.count;

        info!(
            "Running {} sweep with {} worker(s)",
            self.component.name(),
            total_workers
        );

        let mut tasks = JoinSet::new();
        for worker_index in 0..total_workers {
            let config = self.config.clone();
            let component = self.component;
            let factory = Arc::clone(&self.factory);
            tasks.spawn(async move {
                run_worker(config, component, factory, worker_index, total_workers).await
            });
        }

        let mut workers = Vec::with_capacity(total_workers);
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(summary) => workers.push(summary),
                Err(e) => error!("Worker task panicked: {}", e),
            }
        }
        workers.sort_by_key(|w: &WorkerSummary| w.worker_index);

        let summary = SweepSummary {
            component: self.component.name().to_string(),
            total_workers,
            groups: workers.iter().map(|w| w.groups).sum(),
            urls: workers.iter().map(|w| w.urls).sum(),
            passed: workers.iter().map(|w| w.passed).sum(),
            failed: workers.iter().map(|w| w.failed).sum(),
            started_at,
            duration_ms: start.elapsed().as_millis() as u64,
            workers,
        };

        info!(
            "Sweep finished: {} URL(s), {} passed, {} failed ({} ms)",
            summary.urls, summary.passed, summary.failed, summary.duration_ms
        );
        Ok(summary)
    }

    /// Write the run summary as JSON next to the artifacts.
    pub fn write_summary(&self, summary: &SweepSummary) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.config.output.dir)?;

        let path = self.config.output.dir.join("sweep-summary.json");
        let json = serde_json::to_string_pretty(summary)?;
        std::fs::write(&path, json)?;

        info!("Summary written to: {}", path.display());
        Ok(path)
    }
}

async fn run_worker<F>(
    config: SweepConfig,
    component: &'static dyn Component,
    factory: Arc<F>,
    worker_index: usize,
    total_workers: usize,
) -> WorkerSummary
where
    F: SessionFactory,
{
    let mut summary = WorkerSummary::new(worker_index);

    // A broken input source degrades to "no work" rather than failing the
    // worker; a partial environment outage should not crash the suite.
    let groups = match input::load_row_groups(&config.input.path) {
        Ok(groups) => groups,
        Err(e) => {
            warn!(
                "Worker {} could not read input source, no work assigned: {}",
                worker_index + 1,
                e
            );
            Vec::new()
        }
    };

    let assigned = match assign::assign(
        &groups,
        worker_index,
        total_workers,
        &config.input.group_prefix,
    ) {
        Ok(assigned) => assigned,
        Err(e) => {
            error!("Worker {} configuration error: {}", worker_index + 1, e);
            summary.error = Some(e.to_string());
            return summary;
        }
    };

    info!(
        "Worker {} received {} group(s) to process",
        worker_index + 1,
        assigned.len()
    );
    if assigned.is_empty() {
        return summary;
    }

    let mut driver = match factory.open(worker_index).await {
        Ok(driver) => driver,
        Err(e) => {
            error!(
                "Worker {} could not open a driver session: {}",
                worker_index + 1,
                e
            );
            summary.error = Some(e.to_string());
            return summary;
        }
    };

    let collector = ResultCollector::new(config.output.dir.clone(), component.name());

    for group in &assigned {
        info!(
            "Worker {} processing group {} with {} URL(s)",
            worker_index + 1,
            group.name,
            group.urls.len()
        );

        let outcome = match pipeline::process_group(&mut driver, component, group, worker_index).await
        {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(
                    "Worker {} could not process group {}: {}",
                    worker_index + 1,
                    group.name,
                    e
                );
                summary.error = Some(e.to_string());
                continue;
            }
        };

        summary.groups += 1;
        summary.urls += outcome.table.len();
        summary.passed += outcome.passed;
        summary.failed += outcome.failed;

        // Persist per group so earlier results survive a later failure.
        match collector.persist(&group.name, &outcome.table, worker_index) {
            Ok(path) => {
                info!(
                    "Worker {} saved results for {} to {}",
                    worker_index + 1,
                    group.name,
                    path.display()
                );
                summary.artifacts.push(path);
            }
            Err(e) => {
                warn!(
                    "Worker {} could not save results for {}: {}",
                    worker_index + 1,
                    group.name,
                    e
                );
            }
        }
    }

    summary
}
