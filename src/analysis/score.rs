use super::advisory::AdvisoryReviewer;
use super::keywords::{flatten, match_terms};
use super::normalize::normalize;
use super::quantify::find_quantification;
use super::readability::calc_readability;
use super::rules::{self, GrammarRule, GENERIC_WEAK_SUGGESTION};
use crate::config::{KeywordNode, LanguageConfig, ProfessionalConfig};
use crate::report::{
    sort_issues, GrammarIssue, Issue, IssueKind, KeywordMatchSummary, ScoreBreakdown, ScoreReport,
    Severity, SpellingSuggestion,
};
use std::collections::BTreeMap;
use tracing::{debug, warn};

const KEYWORD_CAP: u32 = 15;
const INDUSTRY_KEYWORD_CAP: u32 = 20;
const ACTION_VERB_CAP: u32 = 10;
const QUANTIFICATION_CAP: u32 = 10;
const READABILITY_CAP: u32 = 10;
const BUZZWORD_CAP: u32 = 5;
const GRAMMAR_PENALTY_CAP: usize = 10;
const WEAK_LANGUAGE_PENALTY_CAP: usize = 5;
const MAX_SCORE: u32 = 100;

/// Stateless aggregator that turns the individual analysis signals into a
/// capped, penalized composite score. Configuration is compiled once at
/// construction; every `score` call is a pure function of its arguments.
pub struct ScoringEngine {
    language: LanguageConfig,
    professional: ProfessionalConfig,
    grammar_rules: Vec<GrammarRule>,
}

impl ScoringEngine {
    pub fn new(language: LanguageConfig, professional: ProfessionalConfig) -> Self {
        let grammar_rules = rules::compile_rules(&language.grammar);
        Self {
            language,
            professional,
            grammar_rules,
        }
    }

    pub fn score(
        &self,
        text: &str,
        industry: &str,
        industry_keywords: &KeywordNode,
        advisory: Option<&dyn AdvisoryReviewer>,
    ) -> ScoreReport {
        let normalized = normalize(text);

        let keyword_outcome = match_terms(&normalized, &self.language.general_keywords);
        let industry_terms = flatten(industry_keywords);
        let industry_outcome = match_terms(&normalized, &industry_terms);

        let mut action_verbs_found = BTreeMap::new();
        for (category, verbs) in &self.professional.action_verbs {
            let outcome = match_terms(&normalized, verbs);
            if !outcome.matched.is_empty() {
                action_verbs_found.insert(category.clone(), outcome.matched);
            }
        }

        let quantification_found =
            find_quantification(text, &self.professional.quantification_patterns);

        let mut grammar_issues = rules::apply_grammar_rules(text, &self.grammar_rules);
        let mut spelling_suggestions = rules::check_spelling(&normalized, &self.language.spelling);

        if let Some(reviewer) = advisory {
            match reviewer.review(text) {
                Ok(review) => {
                    debug!(
                        spelling = review.spelling_errors.len(),
                        grammar = review.grammar_errors.len(),
                        "merging advisory review"
                    );
                    for error in review.spelling_errors {
                        if error.word.is_empty() {
                            continue;
                        }
                        let suggestions = if error.correction.is_empty() {
                            Vec::new()
                        } else {
                            vec![error.correction]
                        };
                        spelling_suggestions.push(SpellingSuggestion {
                            word: error.word,
                            suggestions,
                        });
                    }
                    for error in review.grammar_errors {
                        let message = if error.context.is_empty() {
                            "Grammar issue".to_string()
                        } else {
                            format!("Grammar issue: {}", error.context)
                        };
                        let examples = if error.issue.is_empty() {
                            Vec::new()
                        } else {
                            vec![error.issue]
                        };
                        grammar_issues.push(GrammarIssue {
                            message,
                            severity: Severity::Medium,
                            count: 1,
                            examples,
                        });
                    }
                }
                Err(error) => {
                    warn!(%error, "advisory review unavailable, continuing rule-based only");
                }
            }
        }

        let readability = calc_readability(text, &self.language.readability);
        let weak_language_found =
            rules::find_weak_language(&normalized, &self.professional.weak_language);
        let buzzword_outcome =
            match_terms(&normalized, self.professional.buzzwords_for(industry));

        let keywords = (keyword_outcome.matched.len() as u32).min(KEYWORD_CAP);
        let industry_points = (industry_outcome.matched.len() as u32).min(INDUSTRY_KEYWORD_CAP);
        let verb_hits: usize = action_verbs_found.values().map(Vec::len).sum();
        let action_verbs = (verb_hits as u32).min(ACTION_VERB_CAP);
        let quant_hits: usize = quantification_found.values().map(Vec::len).sum();
        let quantification = (quant_hits as u32).min(QUANTIFICATION_CAP);
        let readability_points =
            READABILITY_CAP.saturating_sub(readability.warnings.len() as u32);

        // The deduction applies to the subtotal collected so far; buzzword
        // points land after it and are therefore never eaten by the penalty.
        let subtotal =
            keywords + industry_points + action_verbs + quantification + readability_points;
        let penalty = (grammar_issues.len().min(GRAMMAR_PENALTY_CAP)
            + weak_language_found.len().min(WEAK_LANGUAGE_PENALTY_CAP)) as u32;
        let after_penalty = subtotal.saturating_sub(penalty);
        let buzzwords = (buzzword_outcome.matched.len() as u32).min(BUZZWORD_CAP);
        let total = (after_penalty + buzzwords).min(MAX_SCORE);

        let mut issues = Vec::new();
        for grammar in &grammar_issues {
            issues.push(Issue {
                kind: IssueKind::Grammar,
                snippet: grammar.examples.first().cloned().unwrap_or_default(),
                suggestion: "Rewrite to fix grammar".to_string(),
                message: format!("{} ({} instances)", grammar.message, grammar.count),
                severity: grammar.severity,
            });
        }
        for spelling in &spelling_suggestions {
            issues.push(Issue {
                kind: IssueKind::Spelling,
                snippet: spelling.word.clone(),
                suggestion: format!("Consider: {}", spelling.suggestions.join(", ")),
                message: "Potential misspelling".to_string(),
                severity: Severity::Low,
            });
        }
        for weak in &weak_language_found {
            let suggestion = weak
                .suggestions
                .first()
                .cloned()
                .unwrap_or_else(|| GENERIC_WEAK_SUGGESTION.to_string());
            issues.push(Issue {
                kind: IssueKind::Language,
                snippet: weak.phrase.clone(),
                suggestion,
                message: "Weak phrase".to_string(),
                severity: Severity::Low,
            });
        }
        sort_issues(&mut issues);

        debug!(score = total, penalty, "scoring complete");

        ScoreReport {
            ats_score: total as u8,
            breakdown: ScoreBreakdown {
                keywords,
                industry_keywords: industry_points,
                action_verbs,
                quantification,
                readability: readability_points,
                buzzwords,
                penalty,
            },
            keyword_matches: KeywordMatchSummary::new(
                keyword_outcome.matched,
                keyword_outcome.missing,
            ),
            industry_keyword_matches: KeywordMatchSummary::new(
                industry_outcome.matched,
                industry_outcome.missing,
            ),
            action_verbs_found,
            quantification_found,
            grammar_issues,
            spelling_suggestions,
            readability,
            weak_language_found,
            industry_buzzwords_found: buzzword_outcome.matched,
            issues,
        }
    }
}
