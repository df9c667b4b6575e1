//! Result persistence
//!
//! One artifact per (worker, group) pair, named from both identifiers so
//! no two workers ever write the same file. The header row is written
//! unconditionally so downstream tooling can always parse the artifact,
//! even when a group produced zero rows.

use std::path::{Path, PathBuf};

use pagesweep_common::{Result, ResultTable};

pub struct ResultCollector {
    output_dir: PathBuf,
    component: String,
}

impl ResultCollector {
    pub fn new(output_dir: impl Into<PathBuf>, component: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            component: component.into(),
        }
    }

    /// Deterministic artifact path for a (worker, group) pair.
    ///
    /// Worker indices are rendered 1-based in file names, matching the
    /// run logs.
    pub fn artifact_path(&self, worker_index: usize, group_name: &str) -> PathBuf {
        self.output_dir.join(format!(
            "{}_results_worker{}_{}.csv",
            self.component,
            worker_index + 1,
            group_name
        ))
    }

    /// Write one group's table to its artifact, header first.
    pub fn persist(
        &self,
        group_name: &str,
        table: &ResultTable,
        worker_index: usize,
    ) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.output_dir)?;

        let path = self.artifact_path(worker_index, group_name);
        write_table(&path, table)?;
        Ok(path)
    }
}

/// Write a result table as CSV, header row included.
pub fn write_table(path: &Path, table: &ResultTable) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(table.headers())?;
    for row in table.rows() {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
