//! Sweep configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Sweep configuration
///
/// Constructed once at startup and passed by parameter into the assigner,
/// pipeline and collector. Nothing reads configuration globally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Worker parallelization settings
    pub workers: WorkerSettings,

    /// Input source settings
    pub input: InputSettings,

    /// Output artifact settings
    pub output: OutputSettings,

    /// Timeout settings
    pub timeouts: TimeoutSettings,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            workers: WorkerSettings::default(),
            input: InputSettings::default(),
            output: OutputSettings::default(),
            timeouts: TimeoutSettings::default(),
        }
    }
}

/// Worker fan-out settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerSettings {
    /// Number of parallel workers
    pub count: usize,
}

impl Default for WorkerSettings {
    fn default() -> Self {
        Self { count: 4 }
    }
}

/// Input source settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputSettings {
    /// Path to the input file (grouped CSV) or directory of per-group CSVs
    pub path: PathBuf,

    /// Only groups whose name starts with this prefix are assigned
    pub group_prefix: String,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("testdata/input.csv"),
            group_prefix: "dcPages".to_string(),
        }
    }
}

/// Output artifact settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Directory for result artifacts and the run summary
    pub dir: PathBuf,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("test-results"),
        }
    }
}

/// Timeout settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutSettings {
    /// Maximum wait for one page extraction (milliseconds)
    pub page_load_ms: u64,

    /// Wait after switching tabs within a page (milliseconds)
    pub tab_switch_ms: u64,
}

impl Default for TimeoutSettings {
    fn default() -> Self {
        Self {
            page_load_ms: 7000,
            tab_switch_ms: 5000,
        }
    }
}

impl SweepConfig {
    /// Load configuration from a TOML file, falling back to defaults when
    /// the file does not exist. Environment overrides are applied last.
    pub fn load(path: &std::path::Path) -> crate::Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content)
                .map_err(|e| crate::Error::InvalidConfig(format!("{}: {}", path.display(), e)))?
        } else {
            Self::default()
        };
        config.apply_env();
        Ok(config)
    }

    /// Apply environment-variable overrides
    pub fn apply_env(&mut self) {
        if let Some(count) = env_parse::<usize>("PAGESWEEP_WORKERS") {
            self.workers.count = count;
        }
        if let Ok(path) = std::env::var("PAGESWEEP_INPUT") {
            self.input.path = PathBuf::from(path);
        }
        if let Ok(prefix) = std::env::var("PAGESWEEP_SHEET_PREFIX") {
            self.input.group_prefix = prefix;
        }
        if let Ok(dir) = std::env::var("PAGESWEEP_RESULTS_DIR") {
            self.output.dir = PathBuf::from(dir);
        }
        if let Some(ms) = env_parse::<u64>("PAGESWEEP_PAGE_LOAD_TIMEOUT_MS") {
            self.timeouts.page_load_ms = ms;
        }
        if let Some(ms) = env_parse::<u64>("PAGESWEEP_TAB_SWITCH_TIMEOUT_MS") {
            self.timeouts.tab_switch_ms = ms;
        }
    }

    /// Validate the settings that the assigner fails fast on
    pub fn validate(&self) -> crate::Result<()> {
        if self.workers.count == 0 {
            return Err(crate::Error::InvalidConfig(
                "worker count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &std::path::Path) -> crate::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::InvalidConfig(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}
