use serde::Deserialize;
use thiserror::Error;

/// Character budget for the document excerpt embedded in the review prompt.
pub const PROMPT_CHAR_BUDGET: usize = 3000;

#[derive(Debug, Error)]
pub enum AdvisoryError {
    #[error("advisory reviewer unavailable")]
    Unavailable,
    #[error("advisory call failed: {0}")]
    Transport(String),
    #[error("advisory response was not valid structured data")]
    MalformedResponse,
}

/// Structured result of an advisory spelling/grammar review.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AdvisoryReview {
    pub spelling_errors: Vec<AdvisorySpellingError>,
    pub grammar_errors: Vec<AdvisoryGrammarError>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AdvisorySpellingError {
    pub word: String,
    pub correction: String,
    pub context: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AdvisoryGrammarError {
    pub issue: String,
    pub suggestion: String,
    pub context: String,
}

/// Best-effort external review of a document. Implementations own their
/// transport and must bound it (timeout, size limits); the scoring
/// pipeline treats any error as "no advisory input" and degrades to
/// rule-based detection with an unchanged score.
pub trait AdvisoryReviewer {
    fn review(&self, text: &str) -> Result<AdvisoryReview, AdvisoryError>;
}

/// Builds the review prompt around a truncated document excerpt. The
/// contract asks for conservative, JSON-only output so `parse_review` can
/// consume it directly.
pub fn build_review_prompt(text: &str) -> String {
    let excerpt = truncate_chars(text, PROMPT_CHAR_BUDGET);
    format!(
        "You are an expert resume reviewer and spelling/grammar checker.\n\
         Identify ONLY genuine spelling mistakes and grammar errors. Do not flag \
         proper nouns, technical terms, job titles, abbreviations, or unusual but \
         correctly spelled words.\n\n\
         Resume text:\n{excerpt}\n\n\
         Respond with JSON of this exact shape and nothing else:\n\
         {{\"spelling_errors\": [{{\"word\": \"...\", \"correction\": \"...\", \"context\": \"...\"}}],\n\
          \"grammar_errors\": [{{\"issue\": \"...\", \"suggestion\": \"...\", \"context\": \"...\"}}]}}\n\
         Return empty arrays when nothing is wrong. Be conservative."
    )
}

/// Parses a reviewer response, tolerating surrounding whitespace and a
/// fenced ```json code block. Returns `None` for anything else; callers
/// discard malformed responses silently.
pub fn parse_review(raw: &str) -> Option<AdvisoryReview> {
    let body = strip_code_fence(raw.trim());
    serde_json::from_str(body).ok()
}

fn strip_code_fence(raw: &str) -> &str {
    let Some(rest) = raw.strip_prefix("```") else {
        return raw;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.trim_start_matches(['\r', '\n']);
    rest.strip_suffix("```").map_or(rest, str::trim_end)
}

fn truncate_chars(text: &str, budget: usize) -> &str {
    match text.char_indices().nth(budget) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
