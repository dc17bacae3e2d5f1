pub mod contact;
pub mod education;
pub mod experience;
pub mod sections;
pub mod skills;

pub use contact::PhoneNumber;
pub use education::EducationEntry;

use crate::config::ExtractionConfig;
use crate::report::{Issue, IssueKind, Severity};
use chrono::NaiveDate;
use serde::Serialize;

const MIN_SKILL_COUNT: usize = 5;
const CREATIVE_TITLES: [&str; 5] = ["ninja", "guru", "rockstar", "wizard", "hero"];

/// Structured fields pulled from a plain-text resume. Every field is
/// best-effort; absence is always represented, never guessed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResumeProfile {
    pub email: Option<String>,
    pub phone: Option<PhoneNumber>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub address: Option<String>,
    pub summary: Option<String>,
    pub skills: Vec<String>,
    pub experience_years: Option<u32>,
    pub education: Vec<EducationEntry>,
    pub certifications: Vec<String>,
}

impl ResumeProfile {
    /// Runs every field extractor over the raw text. `today` anchors
    /// open-ended employment ranges so extraction stays deterministic.
    pub fn extract(text: &str, cfg: &ExtractionConfig, today: NaiveDate) -> Self {
        Self {
            email: contact::extract_email(text),
            phone: contact::extract_phone(text),
            linkedin: contact::extract_linkedin(text),
            github: contact::extract_github(text),
            address: contact::extract_address(text, cfg),
            summary: sections::extract_summary(text, cfg),
            skills: skills::extract_skills(text, cfg),
            experience_years: experience::extract_experience_years(text, cfg, today),
            education: education::extract_education(text, cfg),
            certifications: education::extract_certifications(text, cfg),
        }
    }

    /// Profile-level advisories layered on top of the language findings.
    pub fn advisories(&self, text: &str) -> Vec<Issue> {
        let mut issues = Vec::new();
        let mut push = |kind, severity, message: &str, suggestion: &str| {
            issues.push(Issue {
                kind,
                snippet: String::new(),
                suggestion: suggestion.to_string(),
                message: message.to_string(),
                severity,
            });
        };

        if self.phone.is_none() {
            push(
                IssueKind::Contact,
                Severity::High,
                "No phone number found",
                "Add a phone number so recruiters can reach you",
            );
        }
        if self.linkedin.is_none() {
            push(
                IssueKind::Contact,
                Severity::Medium,
                "No LinkedIn profile found",
                "Add a LinkedIn profile URL",
            );
        }
        if self.skills.len() < MIN_SKILL_COUNT {
            push(
                IssueKind::Skills,
                Severity::High,
                "Few identifiable skills listed",
                "Add a dedicated skills section with at least five relevant skills",
            );
        }
        if self.education.is_empty() {
            push(
                IssueKind::Education,
                Severity::Medium,
                "No education section found",
                "List your degrees or relevant training",
            );
        }
        if self.experience_years.is_none() {
            push(
                IssueKind::Experience,
                Severity::High,
                "No work experience section found",
                "Add a work experience section with dated roles",
            );
        }

        if self.summary.is_none() {
            push(
                IssueKind::Content,
                Severity::High,
                "No summary or objective section found",
                "Open with a short professional summary",
            );
        }

        let lowered = text.to_lowercase();
        for title in CREATIVE_TITLES {
            if !crate::analysis::keywords::contains_word(&lowered, title) {
                continue;
            }
            issues.push(Issue {
                kind: IssueKind::Formatting,
                snippet: title.to_string(),
                suggestion: "Use conventional job titles that applicant tracking systems recognize"
                    .to_string(),
                message: "Creative job titles may confuse automated screening".to_string(),
                severity: Severity::Medium,
            });
        }

        issues
    }
}
