use super::normalize::normalize;
use crate::config::KeywordNode;
use std::collections::HashSet;

/// Walks an arbitrarily nested keyword tree and returns unique, normalized
/// terms in first-seen walk order. Mapping keys are category labels only
/// and never become terms.
pub fn flatten(node: &KeywordNode) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut terms = Vec::new();
    walk(node, &mut seen, &mut terms);
    terms
}

fn walk(node: &KeywordNode, seen: &mut HashSet<String>, terms: &mut Vec<String>) {
    match node {
        KeywordNode::Term(raw) => {
            let term = normalize(raw);
            if !term.is_empty() && seen.insert(term.clone()) {
                terms.push(term);
            }
        }
        KeywordNode::List(items) => {
            for item in items {
                walk(item, seen, terms);
            }
        }
        KeywordNode::Group(groups) => {
            for value in groups.values() {
                walk(value, seen, terms);
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchOutcome {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Forgiving matcher used for keyword presence: plain substring containment
/// on normalized text, so inflected or compounded forms still count. Terms
/// are de-duplicated by normalized key; matched and missing partition the
/// de-duplicated input.
pub fn match_terms(normalized_text: &str, terms: &[String]) -> MatchOutcome {
    let mut seen = HashSet::new();
    let mut outcome = MatchOutcome::default();
    for term in terms {
        let key = normalize(term);
        if key.is_empty() || !seen.insert(key.clone()) {
            continue;
        }
        if normalized_text.contains(&key) {
            outcome.matched.push(term.clone());
        } else {
            outcome.missing.push(term.clone());
        }
    }
    outcome
}

/// Strict matcher used for phrase and lexicon lookups: the term must sit
/// between non-word characters (or the ends of the text) so substrings of
/// legitimate words are never flagged.
pub fn contains_word(haystack: &str, term: &str) -> bool {
    !word_occurrences(haystack, term).is_empty()
}

/// Byte offsets of every whole-word occurrence of `term` in `haystack`.
pub fn word_occurrences(haystack: &str, term: &str) -> Vec<usize> {
    if term.is_empty() {
        return Vec::new();
    }
    haystack
        .match_indices(term)
        .filter(|(start, matched)| {
            let before = haystack[..*start].chars().next_back();
            let after = haystack[start + matched.len()..].chars().next();
            !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
        })
        .map(|(start, _)| start)
        .collect()
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn tree(raw: &str) -> KeywordNode {
        serde_json::from_str(raw).expect("tree parses")
    }

    #[test]
    fn flatten_walks_nested_groups_and_lists() {
        let node = tree(r#"{"a": ["X", {"b": "Y"}]}"#);
        assert_eq!(flatten(&node), vec!["x", "y"]);
    }

    #[test]
    fn flatten_dedupes_by_normalized_key() {
        let node = KeywordNode::List(vec![
            KeywordNode::Term("Cloud  Computing".to_string()),
            KeywordNode::Term("cloud computing".to_string()),
            KeywordNode::Term("  ".to_string()),
        ]);
        assert_eq!(flatten(&node), vec!["cloud computing"]);
    }

    #[test]
    fn flatten_ignores_group_keys() {
        let mut groups = BTreeMap::new();
        groups.insert(
            "ignored-category".to_string(),
            KeywordNode::Term("kept".to_string()),
        );
        assert_eq!(flatten(&KeywordNode::Group(groups)), vec!["kept"]);
    }

    #[test]
    fn match_terms_partitions_the_deduplicated_input() {
        let terms: Vec<String> = ["rust", "python", "Rust", "cobol"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let outcome = match_terms("built services in rust and python", &terms);
        assert_eq!(outcome.matched, vec!["rust", "python"]);
        assert_eq!(outcome.missing, vec!["cobol"]);
        assert_eq!(outcome.matched.len() + outcome.missing.len(), 3);
    }

    #[test]
    fn match_terms_tolerates_compounding() {
        let terms = vec!["java".to_string()];
        let outcome = match_terms("senior javascript developer", &terms);
        assert_eq!(outcome.matched, vec!["java"]);
    }

    #[test]
    fn contains_word_requires_boundaries() {
        assert!(contains_word("responsible for ai strategy", "ai"));
        assert!(!contains_word("maintained the platform", "ai"));
        assert!(contains_word("shipped node.js services", "node.js"));
    }

    #[test]
    fn word_occurrences_reports_every_hit() {
        let offsets = word_occurrences("helped out and helped again", "helped");
        assert_eq!(offsets, vec![0, 15]);
    }
}
