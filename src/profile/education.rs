use super::sections::section_window;
use crate::config::ExtractionConfig;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(19|20)\d{2}\b").expect("year pattern"));

const DEGREE_KEYWORDS: [&str; 9] = [
    "bachelor",
    "master",
    "phd",
    "b.s.",
    "m.s.",
    "mba",
    "associate",
    "diploma",
    "degree",
];

const INSTITUTION_KEYWORDS: [&str; 5] =
    ["university", "college", "institute", "school", "academy"];

const EDUCATION_WINDOW: usize = 8;
const CERTIFICATION_WINDOW: usize = 8;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EducationEntry {
    pub degree: Option<String>,
    pub institution: Option<String>,
    pub year: Option<i32>,
}

/// Education entries from the lines under an education heading. Each line
/// contributes what it can: a degree mention, an institution mention, a
/// graduation year. A line carrying a degree starts a new entry.
pub fn extract_education(text: &str, cfg: &ExtractionConfig) -> Vec<EducationEntry> {
    let lines: Vec<&str> = text.lines().collect();
    let Some(window) = section_window(
        &lines,
        &cfg.education_headings,
        &cfg.section_headings,
        EDUCATION_WINDOW,
    ) else {
        return Vec::new();
    };

    let mut entries: Vec<EducationEntry> = Vec::new();
    for line in window {
        let trimmed = line.trim();
        let lowered = trimmed.to_lowercase();
        let has_degree = DEGREE_KEYWORDS.iter().any(|k| lowered.contains(k));
        let has_institution = INSTITUTION_KEYWORDS.iter().any(|k| lowered.contains(k));
        let year = YEAR
            .find(trimmed)
            .and_then(|m| m.as_str().parse::<i32>().ok());

        if !has_degree && !has_institution && year.is_none() {
            continue;
        }

        let needs_new_entry = entries.is_empty()
            || (has_degree && entries.last().is_some_and(|e| e.degree.is_some()));
        if needs_new_entry {
            entries.push(EducationEntry::default());
        }
        if let Some(entry) = entries.last_mut() {
            if has_degree && entry.degree.is_none() {
                entry.degree = Some(trimmed.to_string());
            }
            if has_institution && entry.institution.is_none() {
                entry.institution = Some(trimmed.to_string());
            }
            if entry.year.is_none() {
                entry.year = year;
            }
        }
    }

    entries
}

/// Certification lines under their own heading, taken verbatim minus
/// bullet markers.
pub fn extract_certifications(text: &str, cfg: &ExtractionConfig) -> Vec<String> {
    let lines: Vec<&str> = text.lines().collect();
    let Some(window) = section_window(
        &lines,
        &cfg.certification_headings,
        &cfg.section_headings,
        CERTIFICATION_WINDOW,
    ) else {
        return Vec::new();
    };

    window
        .iter()
        .map(|line| line.trim().trim_start_matches(['-', '*', '\u{2022}']).trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
