use super::sections::{is_heading_for, is_heading_like};
use crate::config::ExtractionConfig;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

// Three date-range families, tried in order. A later family never claims
// text already claimed by an earlier one, so "Jan 2020 - Dec 2022" counts
// once rather than also matching as a bare-year range.
static MONTH_NAME_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+(\d{4})\s*(?:-|–|—|to|until)\s*(?:(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+(\d{4})|(present|current|now))",
    )
    .expect("month-name range pattern")
});

static NUMERIC_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(\d{1,2})\s*/\s*(\d{4})\s*(?:-|–|—|to|until)\s*(?:(\d{1,2})\s*/\s*(\d{4})|(present|current|now))",
    )
    .expect("numeric range pattern")
});

static YEAR_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b((?:19|20)\d{2})\s*(?:-|–|—|to|until)\s*(?:((?:19|20)\d{2})|(present|current|now))\b",
    )
    .expect("year range pattern")
});

static YEARS_PHRASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d{1,2})\+?\s*years?\s+(?:of\s+)?experience").expect("years phrase pattern")
});

#[derive(Debug, Clone, Copy)]
struct DateRange {
    from: (i32, u32),
    to: (i32, u32),
}

impl DateRange {
    /// Whole months between the endpoints; zero and backwards ranges do
    /// not contribute.
    fn months(&self) -> u32 {
        let delta =
            (self.to.0 - self.from.0) * 12 + self.to.1 as i32 - self.from.1 as i32;
        delta.max(0) as u32
    }
}

/// Total years of experience, floored from summed months across the date
/// ranges in the experience section.
///
/// `None` means the document has no experience section at all; `Some(0)`
/// means the section exists but no duration could be read from it. A
/// section without parseable ranges falls back to a stated
/// "N years of experience" phrase.
pub fn extract_experience_years(
    text: &str,
    cfg: &ExtractionConfig,
    today: NaiveDate,
) -> Option<u32> {
    let lines: Vec<&str> = text.lines().collect();
    let heading_indices: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| is_heading_for(line, &cfg.experience_headings))
        .map(|(index, _)| index)
        .collect();
    if heading_indices.is_empty() {
        return None;
    }

    let mut block = String::new();
    for &heading in &heading_indices {
        for line in &lines[heading + 1..] {
            if is_heading_for(line, &cfg.section_headings)
                || is_heading_for(line, &cfg.experience_headings)
                || is_heading_like(line)
            {
                break;
            }
            block.push_str(line);
            block.push('\n');
        }
    }

    let ranges = collect_ranges(&block, today);
    let total_months: u32 = ranges.iter().map(DateRange::months).sum();
    if total_months > 0 {
        return Some(total_months / 12);
    }

    if let Some(captures) = YEARS_PHRASE.captures(text) {
        if let Ok(years) = captures[1].parse::<u32>() {
            return Some(years);
        }
    }

    Some(0)
}

fn collect_ranges(block: &str, today: NaiveDate) -> Vec<DateRange> {
    let now = (today.year(), today.month());
    let mut ranges = Vec::new();
    let mut spans: Vec<(usize, usize)> = Vec::new();

    for captures in MONTH_NAME_RANGE.captures_iter(block) {
        let whole = captures.get(0).map(|m| (m.start(), m.end()));
        let from = match (month_number(&captures[1]), captures[2].parse::<i32>()) {
            (Some(month), Ok(year)) => (year, month),
            _ => continue,
        };
        let to = match (captures.get(3), captures.get(4)) {
            (Some(month), Some(year)) => {
                match (month_number(month.as_str()), year.as_str().parse::<i32>()) {
                    (Some(month), Ok(year)) => (year, month),
                    _ => continue,
                }
            }
            _ => now,
        };
        if let Some(span) = whole {
            spans.push(span);
            ranges.push(DateRange { from, to });
        }
    }

    for captures in NUMERIC_RANGE.captures_iter(block) {
        let whole = match captures.get(0) {
            Some(m) => (m.start(), m.end()),
            None => continue,
        };
        if overlaps(&spans, whole) {
            continue;
        }
        let from = match (captures[1].parse::<u32>(), captures[2].parse::<i32>()) {
            (Ok(month @ 1..=12), Ok(year)) => (year, month),
            _ => continue,
        };
        let to = match (captures.get(3), captures.get(4)) {
            (Some(month), Some(year)) => {
                match (month.as_str().parse::<u32>(), year.as_str().parse::<i32>()) {
                    (Ok(month @ 1..=12), Ok(year)) => (year, month),
                    _ => continue,
                }
            }
            _ => now,
        };
        spans.push(whole);
        ranges.push(DateRange { from, to });
    }

    for captures in YEAR_RANGE.captures_iter(block) {
        let whole = match captures.get(0) {
            Some(m) => (m.start(), m.end()),
            None => continue,
        };
        if overlaps(&spans, whole) {
            continue;
        }
        let from = match captures[1].parse::<i32>() {
            Ok(year) => (year, 1),
            Err(_) => continue,
        };
        let to = match captures.get(2) {
            Some(year) => match year.as_str().parse::<i32>() {
                Ok(year) => (year, 1),
                Err(_) => continue,
            },
            None => now,
        };
        spans.push(whole);
        ranges.push(DateRange { from, to });
    }

    ranges
}

fn overlaps(spans: &[(usize, usize)], candidate: (usize, usize)) -> bool {
    spans
        .iter()
        .any(|span| candidate.0 < span.1 && span.0 < candidate.1)
}

fn month_number(name: &str) -> Option<u32> {
    let key = name.to_lowercase();
    let index = [
        "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
    ]
    .iter()
    .position(|prefix| key.starts_with(prefix))?;
    Some(index as u32 + 1)
}
