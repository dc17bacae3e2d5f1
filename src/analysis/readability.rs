use crate::config::ReadabilityConfig;
use crate::report::ReadabilityReport;
use once_cell::sync::Lazy;
use regex::Regex;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z]+").expect("word pattern"));

/// Sentence/word statistics with threshold-driven warnings. Sentences are
/// runs split on `.` `!` `?`; words are alphabetic runs. Thresholds come
/// from configuration so the same analysis serves different locales and
/// industries.
pub fn calc_readability(text: &str, cfg: &ReadabilityConfig) -> ReadabilityReport {
    let sentence_count = text
        .split(['.', '!', '?'])
        .filter(|chunk| !chunk.trim().is_empty())
        .count()
        .max(1);

    let words: Vec<&str> = WORD.find_iter(text).map(|m| m.as_str()).collect();
    let word_count = words.len();
    let complex_count = words
        .iter()
        .filter(|word| word.chars().count() >= cfg.complex_word_min_len)
        .count();

    let avg_sentence_length = word_count as f64 / sentence_count as f64;
    let complex_word_ratio = complex_count as f64 / word_count.max(1) as f64;

    let mut warnings = Vec::new();
    if avg_sentence_length > cfg.max_sentence_length {
        warnings.push(format!(
            "Average sentence length ({avg_sentence_length:.1}) exceeds recommended maximum"
        ));
    }
    if complex_word_ratio > cfg.max_complex_ratio {
        warnings.push(format!(
            "Complex word ratio ({:.1}%) exceeds recommended maximum",
            complex_word_ratio * 100.0
        ));
    }
    if word_count < cfg.target_word_count_min {
        warnings.push(format!(
            "Word count ({word_count}) is below recommended minimum"
        ));
    } else if word_count > cfg.target_word_count_max {
        warnings.push(format!(
            "Word count ({word_count}) exceeds recommended maximum"
        ));
    }

    ReadabilityReport {
        avg_sentence_length,
        complex_word_ratio,
        total_words: word_count,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relaxed() -> ReadabilityConfig {
        ReadabilityConfig {
            target_word_count_min: 0,
            ..ReadabilityConfig::default()
        }
    }

    #[test]
    fn three_sentences_of_ten_words_average_ten() {
        let sentence = "one two three four five six seven eight nine ten.";
        let text = format!("{sentence} {sentence} {sentence}");
        let report = calc_readability(&text, &relaxed());
        assert_eq!(report.total_words, 30);
        assert_eq!(report.avg_sentence_length, 10.0);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn empty_text_floors_sentence_and_word_counts() {
        let report = calc_readability("", &relaxed());
        assert_eq!(report.total_words, 0);
        assert_eq!(report.avg_sentence_length, 0.0);
        assert_eq!(report.complex_word_ratio, 0.0);
    }

    #[test]
    fn warns_on_long_sentences() {
        let text = "word ".repeat(40);
        let report = calc_readability(&text, &relaxed());
        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("sentence length")));
    }

    #[test]
    fn warns_when_word_count_outside_band() {
        let cfg = ReadabilityConfig::default();
        let short = calc_readability("Tiny resume.", &cfg);
        assert!(short.warnings.iter().any(|w| w.contains("below recommended")));

        let long_text = "word. ".repeat(1300);
        let long = calc_readability(&long_text, &cfg);
        assert!(long.warnings.iter().any(|w| w.contains("exceeds recommended maximum")));
    }

    #[test]
    fn complex_ratio_counts_configured_length() {
        let cfg = ReadabilityConfig {
            complex_word_min_len: 7,
            target_word_count_min: 0,
            ..ReadabilityConfig::default()
        };
        let report = calc_readability("delivered results now", &cfg);
        // "delivered" and "results" are at/above seven characters.
        assert!((report.complex_word_ratio - 2.0 / 3.0).abs() < 1e-9);
    }
}
