use super::keywords::{contains_word, word_occurrences};
use super::normalize::normalize;
use crate::config::{GrammarRuleSpec, SpellingConfig, WeakLanguageConfig};
use crate::report::{GrammarIssue, Severity, SpellingSuggestion, WeakLanguageHit};
use regex::{Regex, RegexBuilder};
use tracing::warn;

const MAX_EXAMPLES: usize = 5;
const SNIPPET_CONTEXT: usize = 30;

pub const GENERIC_WEAK_SUGGESTION: &str = "Use a stronger verb";

#[derive(Debug, Clone)]
pub struct GrammarRule {
    pattern: Regex,
    message: String,
    severity: Severity,
}

/// Compiles configured grammar rules case-insensitively. An unparseable
/// pattern is skipped with a warning; the remaining rules still apply.
pub fn compile_rules(specs: &[GrammarRuleSpec]) -> Vec<GrammarRule> {
    specs
        .iter()
        .filter_map(|spec| {
            match RegexBuilder::new(&spec.pattern).case_insensitive(true).build() {
                Ok(pattern) => Some(GrammarRule {
                    pattern,
                    message: spec.message.clone(),
                    severity: spec.severity,
                }),
                Err(err) => {
                    warn!(pattern = %spec.pattern, error = %err, "skipping unparseable grammar rule");
                    None
                }
            }
        })
        .collect()
}

/// Runs every rule over the original text and aggregates per rule: one
/// issue carrying the occurrence count and at most five context snippets,
/// so a typo repeated across the whole document yields a single finding.
pub fn apply_grammar_rules(text: &str, rules: &[GrammarRule]) -> Vec<GrammarIssue> {
    rules
        .iter()
        .filter_map(|rule| {
            let mut count = 0;
            let mut examples = Vec::new();
            for found in rule.pattern.find_iter(text) {
                count += 1;
                if examples.len() < MAX_EXAMPLES {
                    examples.push(snippet_around(text, found.start(), found.end()));
                }
            }
            (count > 0).then(|| GrammarIssue {
                message: rule.message.clone(),
                severity: rule.severity,
                count,
                examples,
            })
        })
        .collect()
}

/// Whole-word weak-phrase detection over normalized text. Unlike grammar
/// rules, each occurrence is reported individually with the best available
/// replacement.
pub fn find_weak_language(normalized_text: &str, cfg: &WeakLanguageConfig) -> Vec<WeakLanguageHit> {
    let mut hits = Vec::new();
    for phrase in &cfg.phrases {
        let needle = normalize(phrase);
        if needle.is_empty() {
            continue;
        }
        let suggestions = cfg.replacements.get(phrase).cloned().unwrap_or_default();
        for offset in word_occurrences(normalized_text, &needle) {
            hits.push(WeakLanguageHit {
                phrase: phrase.clone(),
                suggestions: suggestions.clone(),
                offset,
            });
        }
    }
    hits
}

/// Looks up every known misspelling with strict word-boundary matching and
/// suggests its correction.
pub fn check_spelling(normalized_text: &str, cfg: &SpellingConfig) -> Vec<SpellingSuggestion> {
    cfg.corrections
        .iter()
        .filter(|(wrong, _)| contains_word(normalized_text, &normalize(wrong)))
        .map(|(wrong, correction)| SpellingSuggestion {
            word: wrong.clone(),
            suggestions: vec![correction.clone()],
        })
        .collect()
}

fn snippet_around(text: &str, start: usize, end: usize) -> String {
    let from = snap_back(text, start.saturating_sub(SNIPPET_CONTEXT));
    let to = snap_forward(text, (end + SNIPPET_CONTEXT).min(text.len()));
    text[from..to].to_string()
}

fn snap_back(text: &str, mut index: usize) -> usize {
    while index > 0 && !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

fn snap_forward(text: &str, mut index: usize) -> usize {
    while index < text.len() && !text.is_char_boundary(index) {
        index += 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GrammarRuleSpec;
    use std::collections::BTreeMap;

    fn rule(pattern: &str, message: &str) -> GrammarRuleSpec {
        GrammarRuleSpec {
            pattern: pattern.to_string(),
            message: message.to_string(),
            severity: Severity::Medium,
        }
    }

    #[test]
    fn repeated_violation_aggregates_into_one_issue() {
        let rules = compile_rules(&[rule(r"\bteh\b", "Common typo of 'the'")]);
        let text = "teh report. ".repeat(50);
        let issues = apply_grammar_rules(&text, &rules);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].count, 50);
        assert_eq!(issues[0].examples.len(), 5);
    }

    #[test]
    fn rule_matching_is_case_insensitive() {
        let rules = compile_rules(&[rule("irregardless", "Not a standard word")]);
        let issues = apply_grammar_rules("Irregardless of the outcome", &rules);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].count, 1);
    }

    #[test]
    fn invalid_pattern_is_skipped_and_others_proceed() {
        let rules = compile_rules(&[rule(r"[unclosed", "broken"), rule("teh", "typo")]);
        assert_eq!(rules.len(), 1);
        let issues = apply_grammar_rules("teh end", &rules);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "typo");
    }

    #[test]
    fn snippets_respect_utf8_boundaries() {
        let text = format!("{}teh{}", "é".repeat(40), "é".repeat(40));
        let rules = compile_rules(&[rule("teh", "typo")]);
        let issues = apply_grammar_rules(&text, &rules);
        assert_eq!(issues[0].count, 1);
        assert!(issues[0].examples[0].contains("teh"));
    }

    #[test]
    fn weak_phrases_match_whole_words_only() {
        let cfg = WeakLanguageConfig {
            phrases: vec!["helped".to_string()],
            replacements: BTreeMap::from([(
                "helped".to_string(),
                vec!["led".to_string(), "drove".to_string()],
            )]),
        };
        let hits = find_weak_language("helped the team and helped again", &cfg);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].suggestions[0], "led");

        let none = find_weak_language("the helpedesk tool", &cfg);
        assert!(none.is_empty());
    }

    #[test]
    fn spelling_lexicon_flags_whole_words() {
        let cfg = SpellingConfig {
            corrections: BTreeMap::from([("recieve".to_string(), "receive".to_string())]),
        };
        let found = check_spelling("did recieve awards", &cfg);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].suggestions, vec!["receive"]);

        assert!(check_spelling("receiver of awards", &cfg).is_empty());
    }
}
