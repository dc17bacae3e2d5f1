use regex::RegexBuilder;
use std::collections::BTreeMap;
use tracing::warn;

const MAX_HITS_PER_CATEGORY: usize = 10;

/// Category-tagged search for achievement metrics (percentages, dollar
/// amounts, headcounts, ...). Runs case-insensitively over the original
/// text because `%` and `$` carry meaning that normalization handles but
/// casing should not gate. Hits are capped per category; an unparseable
/// pattern is skipped and the rest of its category still applies.
pub fn find_quantification(
    text: &str,
    patterns_by_category: &BTreeMap<String, Vec<String>>,
) -> BTreeMap<String, Vec<String>> {
    let mut found = BTreeMap::new();
    for (category, patterns) in patterns_by_category {
        let mut hits: Vec<String> = Vec::new();
        for pattern in patterns {
            let regex = match RegexBuilder::new(pattern).case_insensitive(true).build() {
                Ok(regex) => regex,
                Err(err) => {
                    warn!(category = %category, pattern = %pattern, error = %err,
                        "skipping unparseable quantification pattern");
                    continue;
                }
            };
            for matched in regex.find_iter(text) {
                if hits.len() >= MAX_HITS_PER_CATEGORY {
                    break;
                }
                hits.push(matched.as_str().to_string());
            }
            if hits.len() >= MAX_HITS_PER_CATEGORY {
                break;
            }
        }
        if !hits.is_empty() {
            found.insert(category.clone(), hits);
        }
    }
    found
}
