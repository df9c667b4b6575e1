//! Per-URL processing loop
//!
//! URLs within one group are processed strictly in input order, one at a
//! time, against the worker's single driver session. A URL failure is
//! recovered into a degraded error row; it never aborts the rest of the
//! group. No retries happen at this layer.

use tracing::{info, warn};

use pagesweep_common::{Result, ResultTable, RowGroup};

use crate::component::{self, Component};
use crate::driver::PageDriver;
use crate::locale;

/// One group's processed table plus its pass/fail tally
#[derive(Debug)]
pub struct GroupOutcome {
    pub table: ResultTable,
    pub passed: usize,
    pub failed: usize,
}

/// Process every URL of one group, producing exactly one data row per URL.
pub async fn process_group<D: PageDriver>(
    driver: &mut D,
    component_under_test: &dyn Component,
    group: &RowGroup,
    worker_index: usize,
) -> Result<GroupOutcome> {
    let mut table = component::table_for(component_under_test);
    let mut passed = 0;
    let mut failed = 0;

    for url in &group.urls {
        info!("Worker {} processing URL: {}", worker_index + 1, url);

        let row = match process_url(driver, component_under_test, url).await {
            Ok(row) => row,
            Err(e) => {
                warn!(
                    "Worker {} error processing URL {}: {}",
                    worker_index + 1,
                    url,
                    e
                );
                component::error_row(component_under_test, url)
            }
        };

        if row.last().map(String::as_str) == Some("Pass") {
            passed += 1;
        } else {
            failed += 1;
        }
        table.push(row)?;
    }

    Ok(GroupOutcome {
        table,
        passed,
        failed,
    })
}

async fn process_url<D: PageDriver>(
    driver: &mut D,
    component_under_test: &dyn Component,
    url: &str,
) -> Result<Vec<String>> {
    driver.goto(url).await?;
    let fields = driver.extract(component_under_test).await?;
    let (country, locale) = locale::country_and_locale(url);
    Ok(component::data_row(
        component_under_test,
        url,
        &country,
        &locale,
        &fields,
    ))
}
