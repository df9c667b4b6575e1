//! Pagesweep Runner
//!
//! Work distribution, page processing and result collection for the
//! pagesweep UI regression suite:
//! - Reads named row-groups of URLs from a tabular input source
//! - Statically partitions groups across parallel workers
//! - Drives an external page extractor per URL and validates the result
//! - Persists one tabular artifact per (worker, group) pair
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      SweepRunner                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  worker 0..W, each fully independent:                       │
//! │    input::load_row_groups(source)   -> [RowGroup]           │
//! │    assign::assign(groups, i, W)     -> worker's subset      │
//! │    per group, per URL (sequential):                         │
//! │      PageDriver::goto + extract     -> PageFields           │
//! │      Component::validate            -> Verdict              │
//! │      (failure -> all-"Error" row, loop continues)           │
//! │    ResultCollector::persist         -> one CSV per group    │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod assign;
pub mod collect;
pub mod component;
pub mod components;
pub mod driver;
pub mod input;
pub mod locale;
pub mod pipeline;
pub mod runner;

pub use component::Component;
pub use driver::{
    PageDriver, ScriptDriver, ScriptDriverConfig, ScriptSessionFactory, SessionFactory,
};
pub use runner::{SweepRunner, SweepSummary, WorkerSummary};
