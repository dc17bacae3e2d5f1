use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ordinal severity shared by every issue producer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Grammar,
    Spelling,
    Language,
    Contact,
    Skills,
    Education,
    Experience,
    Formatting,
    Content,
}

/// A single actionable finding surfaced to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub snippet: String,
    pub suggestion: String,
    pub message: String,
    pub severity: Severity,
}

/// One grammar rule violation aggregated across all of its occurrences.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrammarIssue {
    pub message: String,
    pub severity: Severity,
    pub count: usize,
    pub examples: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpellingSuggestion {
    pub word: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeakLanguageHit {
    pub phrase: String,
    pub suggestions: Vec<String>,
    /// Byte offset of the occurrence in the normalized text.
    pub offset: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordMatchSummary {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    /// Share of the configured terms that matched, one decimal place.
    pub percentage: f64,
}

impl KeywordMatchSummary {
    pub fn new(matched: Vec<String>, missing: Vec<String>) -> Self {
        // Denominator is the de-duplicated term set (matched + missing), so
        // a term repeated in configuration counts once toward coverage.
        let total = matched.len() + missing.len();
        let percentage = if total == 0 {
            0.0
        } else {
            let pct = matched.len() as f64 / total as f64 * 100.0;
            (pct * 10.0).round() / 10.0
        };
        Self {
            matched,
            missing,
            percentage,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadabilityReport {
    pub avg_sentence_length: f64,
    pub complex_word_ratio: f64,
    pub total_words: usize,
    pub warnings: Vec<String>,
}

/// Points awarded per category, plus the deduction applied to the subtotal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub keywords: u32,
    pub industry_keywords: u32,
    pub action_verbs: u32,
    pub quantification: u32,
    pub readability: u32,
    pub buzzwords: u32,
    pub penalty: u32,
}

/// Full scoring output; constructed once per document and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    pub ats_score: u8,
    pub breakdown: ScoreBreakdown,
    pub keyword_matches: KeywordMatchSummary,
    pub industry_keyword_matches: KeywordMatchSummary,
    pub action_verbs_found: BTreeMap<String, Vec<String>>,
    pub quantification_found: BTreeMap<String, Vec<String>>,
    pub grammar_issues: Vec<GrammarIssue>,
    pub spelling_suggestions: Vec<SpellingSuggestion>,
    pub readability: ReadabilityReport,
    pub weak_language_found: Vec<WeakLanguageHit>,
    pub industry_buzzwords_found: Vec<String>,
    pub issues: Vec<Issue>,
}

/// Stable ordering for the flattened issue list: highest severity first,
/// producer order preserved within a severity.
pub fn sort_issues(issues: &mut [Issue]) {
    issues.sort_by(|a, b| b.severity.cmp(&a.severity));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_orders_low_to_high() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
    }

    #[test]
    fn keyword_summary_percentage_is_rounded() {
        let summary = KeywordMatchSummary::new(
            vec!["rust".to_string()],
            vec!["go".to_string(), "zig".to_string()],
        );
        assert_eq!(summary.percentage, 33.3);
    }

    #[test]
    fn keyword_summary_handles_empty_term_set() {
        let summary = KeywordMatchSummary::new(Vec::new(), Vec::new());
        assert_eq!(summary.percentage, 0.0);
    }

    #[test]
    fn issues_sort_by_descending_severity_stably() {
        let issue = |message: &str, severity| Issue {
            kind: IssueKind::Content,
            snippet: String::new(),
            suggestion: String::new(),
            message: message.to_string(),
            severity,
        };
        let mut issues = vec![
            issue("first-low", Severity::Low),
            issue("first-high", Severity::High),
            issue("second-low", Severity::Low),
        ];
        sort_issues(&mut issues);
        let order: Vec<&str> = issues.iter().map(|i| i.message.as_str()).collect();
        assert_eq!(order, vec!["first-high", "first-low", "second-low"]);
    }
}
