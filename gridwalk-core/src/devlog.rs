use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use time::macros::format_description;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::counter::Strategy;
use crate::field::Field;
use crate::PathCount;

/// Outcome of one strategy within a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Counted { paths: PathCount },
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyRun {
    pub strategy: Strategy,
    pub outcome: Outcome,
    pub elapsed_us: u64,
}

/// Summary of one counting run, written as markdown or JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionLog {
    pub id: Uuid,
    pub title: String,
    pub field: Field,
    pub runs: Vec<StrategyRun>,
}

impl SessionLog {
    pub fn new(title: impl Into<String>, field: Field) -> Self {
        Self { id: Uuid::new_v4(), title: title.into(), field, runs: Vec::new() }
    }

    pub fn record(&mut self, strategy: Strategy, outcome: Outcome, elapsed_us: u64) {
        self.runs.push(StrategyRun { strategy, outcome, elapsed_us });
    }

    /// Whether all counts match; `None` with fewer than two successful counts.
    pub fn counts_agree(&self) -> Option<bool> {
        let counts: Vec<PathCount> = self.runs.iter().filter_map(|r| match r.outcome { Outcome::Counted { paths } => Some(paths), _ => None }).collect();
        if counts.len() < 2 { return None; }
        Some(counts.windows(2).all(|w| w[0] == w[1]))
    }
}

fn session_path(dir: &Path, id: &Uuid, ext: &str) -> PathBuf {
    let ts_fmt = format_description!("[year]-[month]-[day]_[hour][minute][second]");
    let now = OffsetDateTime::now_utc().format(&ts_fmt).unwrap_or_else(|_| "now".into());
    dir.join(format!("session_{}_{}.{}", now, id.simple(), ext))
}

pub fn write_session_markdown<P: AsRef<Path>>(dir: P, log: &SessionLog) -> std::io::Result<PathBuf> {
    fs::create_dir_all(dir.as_ref())?;
    let path = session_path(dir.as_ref(), &log.id, "md");
    let mut f = OpenOptions::new().create(true).write(true).truncate(true).open(&path)?;
    writeln!(f, "# {}", log.title)?;
    writeln!(f, "Session: `{}`", log.id)?;
    writeln!(f, "Field: {}x{}, {} blocked", log.field.rows(), log.field.cols(), log.field.blocked_count())?;
    writeln!(f, "\n```\n{}```", log.field)?;
    writeln!(f, "\n## Runs")?;
    for run in &log.runs {
        match &run.outcome {
            Outcome::Counted { paths } => writeln!(f, "- {:?}: {} paths in {} µs", run.strategy, paths, run.elapsed_us)?,
            Outcome::Failed { reason } => writeln!(f, "- {:?}: failed ({})", run.strategy, reason)?,
        }
    }
    match log.counts_agree() {
        Some(true) => writeln!(f, "\nStrategies agree.")?,
        Some(false) => writeln!(f, "\n**Strategies disagree.**")?,
        None => {}
    }
    Ok(path)
}

pub fn write_session_json<P: AsRef<Path>>(dir: P, log: &SessionLog) -> std::io::Result<PathBuf> {
    fs::create_dir_all(dir.as_ref())?;
    let path = session_path(dir.as_ref(), &log.id, "json");
    let json = serde_json::to_string_pretty(log).map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    fs::write(&path, json)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> SessionLog {
        let field = Field::parse_rows(&["..", ".."]).unwrap();
        let mut log = SessionLog::new("square", field);
        log.record(Strategy::Exhaustive, Outcome::Counted { paths: 2 }, 10);
        log.record(Strategy::Tabulation, Outcome::Counted { paths: 2 }, 3);
        log
    }

    #[test]
    fn agreement_needs_two_counts() {
        let mut log = session();
        assert_eq!(log.counts_agree(), Some(true));
        log.runs.pop();
        assert_eq!(log.counts_agree(), None);
        log.record(Strategy::Tabulation, Outcome::Counted { paths: 3 }, 1);
        assert_eq!(log.counts_agree(), Some(false));
    }

    #[test]
    fn writes_markdown_and_json() {
        let dir = std::env::temp_dir().join(format!("gridwalk_devlog_{}", Uuid::new_v4().simple()));
        let log = session();
        let md = write_session_markdown(&dir, &log).unwrap();
        let text = fs::read_to_string(&md).unwrap();
        assert!(text.starts_with("# square"));
        assert!(text.contains("Exhaustive: 2 paths"));
        assert!(text.contains("Strategies agree."));

        let json = write_session_json(&dir, &log).unwrap();
        let back: SessionLog = serde_json::from_str(&fs::read_to_string(&json).unwrap()).unwrap();
        assert_eq!(back.id, log.id);
        assert_eq!(back.field, log.field);
        assert_eq!(back.runs, log.runs);
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn counts_serialize_as_numbers() {
        let mut log = session();
        // above u64::MAX, still a plain integer
        log.record(Strategy::Tabulation, Outcome::Counted { paths: 1u128 << 70 }, 1);
        let json = serde_json::to_string(&log.runs).unwrap();
        assert!(json.contains(r#""Counted":{"paths":2}"#));
        assert!(json.contains(r#""paths":1180591620717411303424"#));
        let back: Vec<StrategyRun> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, log.runs);
        assert_eq!(log.counts_agree(), Some(false));
    }
}
