//! Small string utilities with no connection to the path counters.

use itertools::Itertools;
use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::error::TextError;

const YEARS: std::ops::RangeInclusive<i64> = 1900..=2099;
const MONTHS: std::ops::RangeInclusive<i64> = 1..=12;
const DAYS: std::ops::RangeInclusive<i64> = 1..=31;

/// Month lookup by lowercase full name and three-letter abbreviation.
static MONTH_NAMES: Lazy<HashMap<&'static str, i64>> = Lazy::new(|| {
    const NAMES: [&str; 12] = [
        "january", "february", "march", "april", "may", "june",
        "july", "august", "september", "october", "november", "december",
    ];
    let mut m = HashMap::with_capacity(24);
    for (i, &name) in NAMES.iter().enumerate() {
        m.insert(name, i as i64 + 1);
        m.insert(&name[..3], i as i64 + 1);
    }
    m
});

/// Replace every run of `K > 1` equal characters with `K` followed by the character.
///
/// Only lowercase ASCII letters and whitespace are accepted. Whitespace is the
/// C locale set, so vertical tab counts too.
pub fn run_length_encode(uncompressed: &str) -> Result<String, TextError> {
    if let Some((index, found)) = uncompressed.chars().enumerate().find(|&(_, ch)| !(ch.is_ascii_lowercase() || is_c_space(ch))) {
        return Err(TextError::InvalidCharacter { index, found });
    }
    let mut out = String::with_capacity(uncompressed.len());
    for (run, ch) in uncompressed.chars().dedup_with_count() {
        if run > 1 { out.push_str(&run.to_string()); }
        out.push(ch);
    }
    Ok(out)
}

fn is_c_space(ch: char) -> bool { ch.is_ascii_whitespace() || ch == '\x0b' }

/// Longest substring whose characters each occur at least `k` times in the whole text.
///
/// Ties go to the earliest substring. Any character below the threshold splits
/// the text, so the answer is the longest stretch between such characters.
pub fn longest_frequent_substring(text: &str, k: usize) -> String {
    let freq = text.chars().counts();
    let mut best = "";
    let mut start = None;
    for (i, ch) in text.char_indices().chain(std::iter::once((text.len(), '\0'))) {
        let frequent = i < text.len() && freq.get(&ch).copied().unwrap_or(0) >= k;
        match (frequent, start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                if text[s..i].chars().count() > best.chars().count() { best = &text[s..i]; }
                start = None;
            }
            _ => {}
        }
    }
    best.to_string()
}

fn parse_number(token: &str) -> Result<i64, TextError> {
    token.parse::<i64>().map_err(|_| TextError::BadNumber(token.to_string()))
}

fn in_range(field: &'static str, value: i64, range: &std::ops::RangeInclusive<i64>) -> Result<i64, TextError> {
    if range.contains(&value) { Ok(value) } else { Err(TextError::OutOfRange { field, value }) }
}

/// Reformat `Y-M-D`, `M/D/Y`, `MONTH DAY, YEAR` or `MON DAY, YEAR` as `YYYY-MM-DD`.
pub fn reformat_date(input: &str) -> Result<String, TextError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let (year, month, day) = match tokens.as_slice() {
        [numeric] => {
            let (mut parts, ymd): (Vec<&str>, bool) = if numeric.contains('-') {
                (numeric.split('-').collect(), true)
            } else if numeric.contains('/') {
                (numeric.split('/').collect(), false)
            } else {
                return Err(TextError::UnrecognizedDate(input.trim().to_string()));
            };
            // one trailing separator ends the last field rather than opening an empty one
            if parts.len() > 1 && parts.last() == Some(&"") { parts.pop(); }
            if parts.len() != 3 { return Err(TextError::UnrecognizedDate(input.trim().to_string())); }
            let n: Vec<i64> = parts.iter().map(|p| parse_number(p)).collect::<Result<_, _>>()?;
            if ymd { (n[0], n[1], n[2]) } else { (n[2], n[0], n[1]) }
        }
        [name, day, year] => {
            let month = *MONTH_NAMES.get(name.to_lowercase().as_str()).ok_or_else(|| TextError::UnknownMonth(name.to_string()))?;
            let day = day.strip_suffix(',').ok_or_else(|| TextError::UnrecognizedDate(input.trim().to_string()))?;
            (parse_number(year)?, month, parse_number(day)?)
        }
        _ => return Err(TextError::UnrecognizedDate(input.trim().to_string())),
    };
    let year = in_range("year", year, &YEARS)?;
    let month = in_range("month", month, &MONTHS)?;
    let day = in_range("day", day, &DAYS)?;
    Ok(format!("{}-{:02}-{:02}", year, month, day))
}
