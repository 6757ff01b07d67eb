use anyhow::{Context, Result};
use colored::*;
use gridwalk_core::{exhaustive::Path, Field, Pos};
use itertools::Itertools;

/// Parse a field from free-form text: one row per line, surrounding
/// whitespace trimmed, blank lines and `#` comments skipped.
pub fn read_field(text: &str) -> Result<Field> {
    let rows: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .collect();
    Field::parse_rows(&rows).with_context(|| format!("parsing field ({} rows)", rows.len()))
}

/// Boxed rendering of a field, optionally tracing a path with `*`.
pub fn to_pretty_string(field: &Field, path: Option<&Path>, color: bool) -> String {
    let on_path: Vec<Pos> = path.map(|p| p.positions()).unwrap_or_default();
    let border = format!("+{}+\n", "-".repeat(field.cols() * 2 + 1));
    let mut s = border.clone();
    for r in 0..field.rows() {
        let row = (0..field.cols())
            .map(|c| {
                let p = Pos::new(r, c);
                let (ch, walked) = if !field.is_open(p) { ('X', false) } else if on_path.contains(&p) { ('*', true) } else { ('·', false) };
                match (color, ch) {
                    (false, _) => ch.to_string(),
                    (true, 'X') => ch.to_string().red().bold().to_string(),
                    (true, _) if walked => ch.to_string().green().bold().to_string(),
                    (true, _) => ch.to_string().dimmed().to_string(),
                }
            })
            .join(" ");
        s.push_str(&format!("| {} |\n", row));
    }
    s.push_str(&border);
    s
}
