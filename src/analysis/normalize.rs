/// Canonical matching form: lowercase, dashes unified, characters outside
/// the allow-list removed, whitespace collapsed to single spaces. Total and
/// idempotent; document content can never make it fail.
pub fn normalize(text: &str) -> String {
    let mut filtered = String::with_capacity(text.len());
    for ch in text.chars() {
        let ch = match ch {
            '\t' | '\r' => ' ',
            '\u{2013}' | '\u{2014}' => '-',
            other => other,
        };
        if is_allowed(ch) {
            filtered.extend(ch.to_lowercase());
        }
    }
    filtered.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_allowed(ch: char) -> bool {
    ch.is_alphanumeric()
        || ch.is_whitespace()
        || matches!(ch, '%' | '$' | '+' | '-' | '/' | '.' | ',' | '(' | ')')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_collapses_whitespace() {
        assert_eq!(
            normalize("  Senior\tEngineer\r\n at   Acme  "),
            "senior engineer at acme"
        );
    }

    #[test]
    fn unifies_dashes_and_strips_disallowed_punctuation() {
        assert_eq!(
            normalize("Jan 2020 \u{2013} Dec 2022 [remote]; 40% gains!"),
            "jan 2020 - dec 2022 remote 40% gains"
        );
    }

    #[test]
    fn keeps_allow_listed_symbols() {
        assert_eq!(normalize("C++ / C# ($120,000)"), "c++ / c ($120,000)");
    }

    #[test]
    fn is_idempotent() {
        let samples = [
            "Hello,  World!",
            "tabs\tand\rreturns",
            "Ünïcödé — dashes",
            "",
            "   ",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "normalize not idempotent for {sample:?}");
        }
    }
}
