use anyhow::{bail, Result};
use gridwalk_core::{
    devlog::{Outcome, SessionLog},
    exhaustive, tabulation, Field, FieldError, PathCount, Strategy,
};
use log::{info, warn};
use std::time::Instant;

use crate::{grid::to_pretty_string, logger::DevLogger};

/// Cap on paths echoed to the devlog.
const MAX_LISTED_PATHS: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountMode { ExhaustiveOnly, TabulationOnly, Compare }

impl CountMode {
    fn strategies(self) -> &'static [Strategy] {
        match self {
            CountMode::ExhaustiveOnly => &[Strategy::Exhaustive],
            CountMode::TabulationOnly => &[Strategy::Tabulation],
            CountMode::Compare => &Strategy::ALL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StrategyResult {
    pub strategy: Strategy,
    pub paths: Option<PathCount>,
    pub error: Option<String>,
    pub elapsed_us: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CountReport {
    pub rows: usize,
    pub cols: usize,
    pub results: Vec<StrategyResult>,
}

impl CountReport {
    /// The agreed count, if any strategy produced one.
    pub fn paths(&self) -> Option<PathCount> { self.results.iter().find_map(|r| r.paths) }

    pub fn to_session(&self, title: &str, field: &Field) -> SessionLog {
        let mut log = SessionLog::new(title, field.clone());
        for r in &self.results {
            let outcome = match (&r.paths, &r.error) {
                (Some(n), _) => Outcome::Counted { paths: *n },
                (None, e) => Outcome::Failed { reason: e.clone().unwrap_or_default() },
            };
            log.record(r.strategy, outcome, r.elapsed_us);
        }
        log
    }
}

pub struct Runner { mode: CountMode, show_table: bool, list_paths: bool }

impl Runner {
    pub fn new(mode: CountMode) -> Self { Self { mode, show_table: false, list_paths: false } }

    pub fn with_table(mut self, show: bool) -> Self { self.show_table = show; self }
    pub fn with_paths(mut self, list: bool) -> Self { self.list_paths = list; self }

    pub fn run(&self, field: &Field, logger: &mut DevLogger) -> Result<CountReport> {
        logger.log(
            "Validation",
            &format!("{}x{} field, {} blocked, {} steps per path:\n{}", field.rows(), field.cols(), field.blocked_count(), field.path_len(), to_pretty_string(field, None, false)),
        )?;

        let mut results = Vec::new();
        for &strategy in self.mode.strategies() {
            let counter = strategy.counter();
            let started = Instant::now();
            let outcome = counter.count(field);
            let elapsed_us = started.elapsed().as_micros() as u64;
            match outcome {
                Ok(n) => {
                    info!("{}: {} paths in {} µs", counter.name(), n, elapsed_us);
                    logger.log(&format!("{} count", counter.name()), &format!("{} paths ({} µs)", n, elapsed_us))?;
                    results.push(StrategyResult { strategy, paths: Some(n), error: None, elapsed_us });
                }
                Err(e @ FieldError::FieldTooLarge { .. }) if self.mode == CountMode::Compare => {
                    warn!("{}: {}; relying on remaining strategies", counter.name(), e);
                    logger.log(&format!("{} skipped", counter.name()), &e.to_string())?;
                    results.push(StrategyResult { strategy, paths: None, error: Some(e.to_string()), elapsed_us });
                }
                Err(e) => return Err(anyhow::Error::new(e).context(format!("{} count", counter.name()))),
            }
        }

        if self.show_table {
            let table = tabulation::tabulate(field)?;
            logger.log("Tabulation table", &table.to_string())?;
        }

        if self.list_paths {
            match exhaustive::valid_paths_iter(field) {
                Ok(paths) => {
                    // the listing is exhaustive order, so its total comes from the exhaustive count
                    let total = match results.iter().find(|r| r.strategy == Strategy::Exhaustive).and_then(|r| r.paths) {
                        Some(n) => n,
                        None => exhaustive::count_exhaustive(field)?,
                    };
                    let mut details = paths.take(MAX_LISTED_PATHS).map(|p| format!("{}\n{}", p, to_pretty_string(field, Some(&p), false))).collect::<Vec<_>>().join("\n");
                    let listed = total.min(MAX_LISTED_PATHS as PathCount);
                    if total > listed { details.push_str(&format!("\n... {} more", total - listed)); }
                    logger.log(&format!("{} valid paths", total), &details)?;
                }
                Err(e) => warn!("cannot list paths: {}", e),
            }
        }

        let counts: Vec<PathCount> = results.iter().filter_map(|r| r.paths).collect();
        if counts.windows(2).any(|w| w[0] != w[1]) {
            logger.log("Comparison", &format!("strategies disagree: {:?}", counts))?;
            bail!("strategies disagree: {:?}", counts);
        }
        if counts.len() > 1 { logger.log("Comparison", &format!("strategies agree on {}", counts[0]))?; }

        Ok(CountReport { rows: field.rows(), cols: field.cols(), results })
    }
}
