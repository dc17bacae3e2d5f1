use super::sections::section_window;
use crate::analysis::keywords::contains_word;
use crate::config::ExtractionConfig;
use std::collections::HashSet;

const SKILL_DELIMITERS: [char; 5] = [',', '|', ';', '\u{2022}', '\u{00b7}'];
const MIN_SKILL_LEN: usize = 2;
const MAX_SKILL_LEN: usize = 60;

/// Skills come from two passes: items listed under a skills heading, then a
/// dictionary scan over the whole document for known skills the section
/// missed. Order is first-seen; duplicates collapse case-insensitively.
pub fn extract_skills(text: &str, cfg: &ExtractionConfig) -> Vec<String> {
    let mut skills = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    let lines: Vec<&str> = text.lines().collect();
    if let Some(window) = section_window(&lines, &cfg.skills_headings, &cfg.section_headings, 12) {
        for line in window {
            for item in line.split(SKILL_DELIMITERS) {
                let item = item
                    .trim()
                    .trim_start_matches(['-', '*', '\u{2022}'])
                    .trim();
                let key = item.to_lowercase();
                if !(MIN_SKILL_LEN..=MAX_SKILL_LEN).contains(&key.len()) {
                    continue;
                }
                if seen.insert(key.clone()) {
                    skills.push(display_form(item, &key, cfg));
                }
            }
        }
    }

    let lowered = text.to_lowercase();
    for known in &cfg.known_skills {
        let key = known.to_lowercase();
        if seen.contains(&key) || !contains_word(&lowered, &key) {
            continue;
        }
        seen.insert(key.clone());
        skills.push(display_form(known, &key, cfg));
    }

    skills
}

/// Canonical display form when the dictionary knows one, otherwise the raw
/// section text (its casing is usually deliberate) or title case for
/// dictionary hits.
fn display_form(raw: &str, key: &str, cfg: &ExtractionConfig) -> String {
    if let Some(canonical) = cfg.canonical_skills.get(key) {
        return canonical.clone();
    }
    if raw.chars().any(char::is_uppercase) {
        return raw.to_string();
    }
    title_case(raw)
}

fn title_case(raw: &str) -> String {
    raw.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
