use super::sections::{is_heading_like, section_window};
use crate::config::ExtractionConfig;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("email pattern")
});

static LINKEDIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"linkedin\.com/in/[A-Za-z0-9_-]+").expect("linkedin pattern"));

static GITHUB: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"github\.com/[A-Za-z0-9-]+").expect("github pattern"));

// International form first: +<1-3 digit country code> then 7-15 national
// digits with tolerated separators.
static INTL_PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\+(\d{1,3})[\s.\-]?((?:\(?\d\)?[\s.\-]?){7,15})").expect("intl phone pattern")
});

// North-American 3-3-4 grouping fallback.
static NA_PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(?([0-9]{3})\)?[\s.\-]?([0-9]{3})[\s.\-]?([0-9]{4})\b").expect("na phone pattern")
});

const ADDRESS_SCAN_LINES: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneNumber {
    pub raw: String,
    pub country_code: Option<String>,
    pub national_number: String,
}

pub fn extract_email(text: &str) -> Option<String> {
    EMAIL.find(text).map(|m| m.as_str().to_string())
}

pub fn extract_linkedin(text: &str) -> Option<String> {
    LINKEDIN.find(text).map(|m| format!("https://www.{}", m.as_str()))
}

pub fn extract_github(text: &str) -> Option<String> {
    GITHUB.find(text).map(|m| format!("https://www.{}", m.as_str()))
}

/// Phone extraction: the international pattern wins when present; the
/// national part is reduced to digits, and a national number that
/// redundantly repeats the country code loses that prefix once.
pub fn extract_phone(text: &str) -> Option<PhoneNumber> {
    if let Some(captures) = INTL_PHONE.captures(text) {
        let country = captures.get(1).map(|m| m.as_str().to_string())?;
        let mut national: String = captures
            .get(2)
            .map(|m| m.as_str())?
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        if national.starts_with(&country) && national.len() - country.len() >= 7 {
            national = national[country.len()..].to_string();
        }
        return Some(PhoneNumber {
            raw: captures.get(0).map(|m| m.as_str().trim().to_string())?,
            country_code: Some(format!("+{country}")),
            national_number: national,
        });
    }

    NA_PHONE.captures(text).map(|captures| {
        let national = format!("{}{}{}", &captures[1], &captures[2], &captures[3]);
        PhoneNumber {
            raw: captures[0].trim().to_string(),
            country_code: None,
            national_number: national,
        }
    })
}

/// Address: a labeled section when one exists, otherwise the first short
/// comma-containing line near the top of the document.
pub fn extract_address(text: &str, cfg: &ExtractionConfig) -> Option<String> {
    let lines: Vec<&str> = text.lines().collect();

    if let Some(window) = section_window(&lines, &cfg.address_headings, &cfg.section_headings, 3) {
        let joined = window
            .iter()
            .map(|line| line.trim())
            .collect::<Vec<_>>()
            .join(", ");
        if !joined.is_empty() {
            return Some(joined);
        }
    }

    lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .take(ADDRESS_SCAN_LINES)
        .map(|line| line.trim())
        .find(|line| {
            line.contains(',')
                && (10..=80).contains(&line.len())
                && !line.contains('@')
                && !line.contains("http")
                && !is_heading_like(line)
        })
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn first_email_wins() {
        let text = "jane@work.example.com and jane.personal@mail.org";
        assert_eq!(extract_email(text).as_deref(), Some("jane@work.example.com"));
        assert!(extract_email("no contact details").is_none());
    }

    #[test]
    fn profile_links_are_normalized_to_urls() {
        let text = "linkedin.com/in/jane-doe | github.com/janedoe";
        assert_eq!(
            extract_linkedin(text).as_deref(),
            Some("https://www.linkedin.com/in/jane-doe")
        );
        assert_eq!(
            extract_github(text).as_deref(),
            Some("https://www.github.com/janedoe")
        );
    }

    #[test]
    fn international_phone_splits_country_and_national_parts() {
        let phone = extract_phone("Mobile: +44 7700 900123").expect("phone found");
        assert_eq!(phone.country_code.as_deref(), Some("+44"));
        assert_eq!(phone.national_number, "7700900123");
    }

    #[test]
    fn redundant_country_prefix_is_trimmed_once() {
        let phone = extract_phone("+44 44 7700 900123").expect("phone found");
        assert_eq!(phone.country_code.as_deref(), Some("+44"));
        assert_eq!(phone.national_number, "447700900123".trim_start_matches("44").to_string());
        assert!(!phone.national_number.starts_with("44"));
    }

    #[test]
    fn falls_back_to_north_american_grouping() {
        let phone = extract_phone("Call (555) 123-4567 today").expect("phone found");
        assert_eq!(phone.country_code, None);
        assert_eq!(phone.national_number, "5551234567");
    }

    #[test]
    fn address_prefers_labeled_section() {
        let text = indoc! {"
            Jane Doe

            Address
            12 Rose Lane
            Springfield, IL 62704
        "};
        let address = extract_address(text, &ExtractionConfig::default()).expect("address");
        assert_eq!(address, "12 Rose Lane, Springfield, IL 62704");
    }

    #[test]
    fn address_falls_back_to_comma_line_near_top() {
        let text = "Jane Doe\nSpringfield, IL 62704\njane@mail.org";
        let address = extract_address(text, &ExtractionConfig::default()).expect("address");
        assert_eq!(address, "Springfield, IL 62704");
    }
}
