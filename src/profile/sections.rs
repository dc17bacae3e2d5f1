use crate::config::ExtractionConfig;

const MAX_HEADING_LEN: usize = 48;
const SUMMARY_WINDOW: usize = 6;

/// A line counts as a heading for a vocabulary when it is short, not a
/// sentence, and mentions one of the vocabulary terms. Vocabularies come
/// from configuration so the heuristics can be retuned per locale.
pub(crate) fn is_heading_for(line: &str, vocab: &[String]) -> bool {
    let trimmed = line.trim().trim_end_matches(':').trim();
    if trimmed.is_empty() || trimmed.len() > MAX_HEADING_LEN || trimmed.ends_with('.') {
        return false;
    }
    let lowered = trimmed.to_lowercase();
    vocab.iter().any(|term| lowered.contains(term.as_str()))
}

/// All-caps short lines read as headings even when they use vocabulary we
/// do not know; they terminate extraction windows. A line opening with a
/// bullet marker or carrying list delimiters is content, never a heading,
/// however it is cased.
pub(crate) fn is_heading_like(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.starts_with(['-', '*', '\u{2022}']) || trimmed.contains([',', '|', ';']) {
        return false;
    }
    if trimmed.is_empty() || trimmed.len() > MAX_HEADING_LEN || trimmed.ends_with('.') {
        return false;
    }
    let mut has_letter = false;
    for ch in trimmed.chars() {
        if ch.is_alphabetic() {
            has_letter = true;
            if ch.is_lowercase() {
                return false;
            }
        }
    }
    has_letter
}

pub(crate) fn find_heading(lines: &[&str], vocab: &[String]) -> Option<usize> {
    lines.iter().position(|line| is_heading_for(line, vocab))
}

/// Bounded window of content lines following a labeled heading. The window
/// closes at the next heading-like line, at a blank-line gap after content
/// started, or at the line limit.
pub(crate) fn section_window<'a>(
    lines: &[&'a str],
    vocab: &[String],
    stop_vocab: &[String],
    max_lines: usize,
) -> Option<Vec<&'a str>> {
    let heading = find_heading(lines, vocab)?;
    let mut window = Vec::new();
    for line in &lines[heading + 1..] {
        if line.trim().is_empty() {
            if window.is_empty() {
                continue;
            }
            break;
        }
        if is_heading_like(line) || is_heading_for(line, stop_vocab) {
            break;
        }
        window.push(*line);
        if window.len() >= max_lines {
            break;
        }
    }
    Some(window)
}

/// Summary/objective paragraph under its heading, joined to a single string.
pub fn extract_summary(text: &str, cfg: &ExtractionConfig) -> Option<String> {
    let lines: Vec<&str> = text.lines().collect();
    let window = section_window(
        &lines,
        &cfg.summary_headings,
        &cfg.section_headings,
        SUMMARY_WINDOW,
    )?;
    let summary = window
        .iter()
        .map(|line| line.trim())
        .collect::<Vec<_>>()
        .join(" ");
    (!summary.is_empty()).then_some(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    fn cfg() -> ExtractionConfig {
        ExtractionConfig::default()
    }

    #[test]
    fn recognizes_vocabulary_headings() {
        let vocab = cfg().experience_headings;
        assert!(is_heading_for("Work Experience", &vocab));
        assert!(is_heading_for("PROFESSIONAL EXPERIENCE:", &vocab));
        assert!(!is_heading_for(
            "I have ten years of work experience in various roles across the industry.",
            &vocab
        ));
    }

    #[test]
    fn all_caps_lines_read_as_headings() {
        assert!(is_heading_like("EDUCATION"));
        assert!(is_heading_like("SKILLS & TOOLS"));
        assert!(!is_heading_like("Education"));
        assert!(!is_heading_like(""));
    }

    #[test]
    fn bulleted_and_delimited_lines_are_content_not_headings() {
        assert!(!is_heading_like("- CKA"));
        assert!(!is_heading_like("* AWS"));
        assert!(!is_heading_like("\u{2022} PMP"));
        assert!(!is_heading_like("SQL, AWS, GCP"));
    }

    #[test]
    fn all_caps_bullet_entries_stay_inside_the_window() {
        let text = indoc! {"
            Certifications
            - AWS Solutions Architect
            - CKA
            - PMP
        "};
        let lines: Vec<&str> = text.lines().collect();
        let window = section_window(
            &lines,
            &cfg().certification_headings,
            &cfg().section_headings,
            8,
        )
        .expect("window found");
        assert_eq!(window, vec!["- AWS Solutions Architect", "- CKA", "- PMP"]);
    }

    #[test]
    fn summary_window_stops_at_next_section() {
        let text = indoc! {"
            Jane Doe

            Summary
            Product engineer with a decade of
            platform experience.

            Skills
            Rust, SQL
        "};
        let summary = extract_summary(text, &cfg()).expect("summary found");
        assert_eq!(
            summary,
            "Product engineer with a decade of platform experience."
        );
    }

    #[test]
    fn summary_absent_without_heading() {
        assert!(extract_summary("Jane Doe\nEngineer", &cfg()).is_none());
    }
}
