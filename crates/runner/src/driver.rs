//! Page driver boundary
//!
//! Navigation and DOM extraction live outside this crate. Workers talk to
//! a [`PageDriver`] session; the shipped [`ScriptDriver`] delegates each
//! URL to an external extractor command (typically a node/Playwright
//! script) and parses a JSON object of extracted fields from its stdout.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use pagesweep_common::{Error, PageFields, Result};

use crate::component::Component;

/// One browser-facing session, owned by exactly one worker.
#[async_trait]
pub trait PageDriver: Send {
    /// Navigate to the URL and let the page settle.
    async fn goto(&mut self, url: &str) -> Result<()>;

    /// Extract the component's fields from the current page.
    async fn extract(&mut self, component: &dyn Component) -> Result<PageFields>;
}

/// Opens one [`PageDriver`] session per worker.
///
/// An open failure aborts only the worker that requested the session.
#[async_trait]
pub trait SessionFactory: Send + Sync {
    type Session: PageDriver + 'static;

    async fn open(&self, worker_index: usize) -> Result<Self::Session>;
}

/// Configuration for the external extractor command
#[derive(Debug, Clone)]
pub struct ScriptDriverConfig {
    /// Program to run, e.g. "node"
    pub command: String,

    /// Leading arguments, e.g. the script path
    pub args: Vec<String>,

    /// Page-load wait budget handed to the extractor
    pub page_load_timeout: Duration,

    /// Tab-switch wait budget handed to the extractor
    pub tab_switch_timeout: Duration,
}

impl ScriptDriverConfig {
    /// Hard bound for one extractor invocation: the waits it was granted.
    fn call_budget(&self) -> Duration {
        self.page_load_timeout + self.tab_switch_timeout
    }
}

impl Default for ScriptDriverConfig {
    fn default() -> Self {
        Self {
            command: "node".to_string(),
            args: vec!["scripts/extract.js".to_string()],
            page_load_timeout: Duration::from_millis(7000),
            tab_switch_timeout: Duration::from_millis(5000),
        }
    }
}

/// Driver that shells out to the configured extractor per URL.
///
/// The extractor is invoked as
/// `<command> <args..> --component <name> --url <url>` and must print a
/// single JSON object mapping field names to values on stdout. The
/// browser session itself lives inside the extractor process.
pub struct ScriptDriver {
    config: ScriptDriverConfig,
    worker_index: usize,
    current_url: Option<String>,
}

impl ScriptDriver {
    pub fn new(config: ScriptDriverConfig, worker_index: usize) -> Self {
        Self {
            config,
            worker_index,
            current_url: None,
        }
    }
}

#[async_trait]
impl PageDriver for ScriptDriver {
    async fn goto(&mut self, url: &str) -> Result<()> {
        // Navigation happens inside the extractor process; remember the
        // target so extract() can hand it over.
        self.current_url = Some(url.to_string());
        Ok(())
    }

    async fn extract(&mut self, component: &dyn Component) -> Result<PageFields> {
        let url = self
            .current_url
            .clone()
            .ok_or_else(|| Error::Session("extract called before goto".to_string()))?;

        debug!(
            "Worker {} extracting {} from {}",
            self.worker_index + 1,
            component.name(),
            url
        );

        let mut cmd = Command::new(&self.config.command);
        cmd.args(&self.config.args)
            .arg("--component")
            .arg(component.name())
            .arg("--url")
            .arg(&url)
            .arg("--page-load-ms")
            .arg(self.config.page_load_timeout.as_millis().to_string())
            .arg("--tab-switch-ms")
            .arg(self.config.tab_switch_timeout.as_millis().to_string())
            .kill_on_drop(true);

        let budget = self.config.call_budget();
        let output = tokio::time::timeout(budget, cmd.output())
            .await
            .map_err(|_| Error::Timeout {
                ms: budget.as_millis() as u64,
            })?
            .map_err(|e| Error::Extraction {
                url: url.clone(),
                reason: format!("failed to spawn {}: {}", self.config.command, e),
            })?;

        if !output.status.success() {
            return Err(Error::Extraction {
                url,
                reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        parse_fields(&output.stdout).map_err(|e| Error::Extraction {
            url,
            reason: format!("invalid extractor output: {}", e),
        })
    }
}

/// Parse the extractor's JSON object, stringifying non-string values.
fn parse_fields(stdout: &[u8]) -> serde_json::Result<PageFields> {
    let raw: HashMap<String, serde_json::Value> = serde_json::from_slice(stdout)?;
    Ok(raw
        .into_iter()
        .map(|(key, value)| {
            let value = match value {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
            (key, value)
        })
        .collect())
}

/// Factory handing each worker its own [`ScriptDriver`].
pub struct ScriptSessionFactory {
    config: ScriptDriverConfig,
}

impl ScriptSessionFactory {
    pub fn new(config: ScriptDriverConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl SessionFactory for ScriptSessionFactory {
    type Session = ScriptDriver;

    async fn open(&self, worker_index: usize) -> Result<Self::Session> {
        if self.config.command.is_empty() {
            return Err(Error::Session("extractor command not configured".to_string()));
        }
        Ok(ScriptDriver::new(self.config.clone(), worker_index))
    }
}
