use crate::report::Severity;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// General language-quality rules: keywords, grammar patterns, spelling
/// lexicon, and readability thresholds. Every section is optional; a
/// missing section behaves as empty rather than failing the analysis.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LanguageConfig {
    pub general_keywords: Vec<String>,
    pub grammar: Vec<GrammarRuleSpec>,
    pub spelling: SpellingConfig,
    pub readability: ReadabilityConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GrammarRuleSpec {
    pub pattern: String,
    #[serde(default = "default_grammar_message")]
    pub message: String,
    #[serde(default)]
    pub severity: Severity,
}

fn default_grammar_message() -> String {
    "Grammar issue".to_string()
}

/// Known misspellings mapped to their corrections, looked up with strict
/// word-boundary matching.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SpellingConfig {
    pub corrections: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReadabilityConfig {
    pub complex_word_min_len: usize,
    pub max_sentence_length: f64,
    pub max_complex_ratio: f64,
    pub target_word_count_min: usize,
    pub target_word_count_max: usize,
}

impl Default for ReadabilityConfig {
    fn default() -> Self {
        Self {
            complex_word_min_len: 8,
            max_sentence_length: 24.0,
            max_complex_ratio: 0.16,
            target_word_count_min: 200,
            target_word_count_max: 1200,
        }
    }
}

/// Professional-language rules: action verbs by category, weak phrases and
/// their stronger replacements, buzzwords by industry, and quantification
/// patterns by category.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfessionalConfig {
    pub action_verbs: BTreeMap<String, Vec<String>>,
    pub weak_language: WeakLanguageConfig,
    pub buzzwords: BTreeMap<String, Vec<String>>,
    pub quantification_patterns: BTreeMap<String, Vec<String>>,
}

impl ProfessionalConfig {
    pub fn buzzwords_for(&self, industry: &str) -> &[String] {
        self.buzzwords
            .get(&industry.trim().to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WeakLanguageConfig {
    pub phrases: Vec<String>,
    pub replacements: BTreeMap<String, Vec<String>>,
}

/// Arbitrarily nested industry keyword tree: categories of categories with
/// string leaves. Loaded as-is and flattened at scoring time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum KeywordNode {
    Term(String),
    List(Vec<KeywordNode>),
    Group(BTreeMap<String, KeywordNode>),
}

impl Default for KeywordNode {
    fn default() -> Self {
        KeywordNode::List(Vec::new())
    }
}

/// Section-heading vocabularies and skill dictionaries used by the field
/// extractors. English defaults, overridable from `extraction.json` so the
/// heuristics stay configuration-driven.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    pub experience_headings: Vec<String>,
    /// Headings that terminate an experience block.
    pub section_headings: Vec<String>,
    pub skills_headings: Vec<String>,
    pub summary_headings: Vec<String>,
    pub education_headings: Vec<String>,
    pub address_headings: Vec<String>,
    pub certification_headings: Vec<String>,
    pub known_skills: Vec<String>,
    /// Lowercase skill key to preferred display form.
    pub canonical_skills: BTreeMap<String, String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        let to_vec = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        let canonical: &[(&str, &str)] = &[
            ("ab testing", "A/B Testing"),
            ("a/b testing", "A/B Testing"),
            ("ai", "AI"),
            ("machine learning", "Machine Learning"),
            ("data science", "Data Science"),
            ("sql", "SQL"),
            ("aws", "AWS"),
            ("gcp", "GCP"),
            ("php", "PHP"),
            ("c++", "C++"),
            ("c#", "C#"),
            ("javascript", "JavaScript"),
            ("node.js", "Node.js"),
            ("power bi", "Power BI"),
            ("mongodb", "MongoDB"),
            ("seo", "SEO"),
            ("crm", "CRM"),
            ("devops", "DevOps"),
        ];

        Self {
            experience_headings: to_vec(&[
                "work experience",
                "professional experience",
                "employment history",
                "career history",
                "work history",
                "experience",
            ]),
            section_headings: to_vec(&[
                "education",
                "skills",
                "projects",
                "certifications",
                "summary",
                "objective",
                "awards",
                "publications",
                "languages",
                "interests",
                "references",
                "volunteer",
            ]),
            skills_headings: to_vec(&[
                "technical skills",
                "core competencies",
                "competencies",
                "technologies",
                "skills",
            ]),
            summary_headings: to_vec(&[
                "professional summary",
                "summary",
                "objective",
                "profile",
                "about",
            ]),
            education_headings: to_vec(&[
                "education",
                "academic background",
                "qualifications",
                "academics",
            ]),
            address_headings: to_vec(&["address", "location"]),
            certification_headings: to_vec(&["certifications", "certificates", "licenses"]),
            known_skills: to_vec(&[
                "python",
                "javascript",
                "java",
                "c++",
                "c#",
                "php",
                "ruby",
                "rust",
                "react",
                "angular",
                "vue",
                "node.js",
                "django",
                "flask",
                "spring",
                "docker",
                "kubernetes",
                "aws",
                "azure",
                "gcp",
                "sql",
                "mongodb",
                "redis",
                "git",
                "jenkins",
                "agile",
                "scrum",
                "machine learning",
                "data science",
                "ai",
                "tableau",
                "power bi",
                "excel",
                "a/b testing",
                "ab testing",
                "product management",
                "seo",
                "analytics",
                "crm",
                "figma",
                "jira",
                "devops",
            ]),
            canonical_skills: canonical
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

const LANGUAGE_FILE: &str = "language_quality.json";
const PROFESSIONAL_FILE: &str = "professional_language.json";
const EXTRACTION_FILE: &str = "extraction.json";
const INDUSTRY_DIR: &str = "industry_keyword";

pub fn load_language_config(base_dir: &Path) -> Result<LanguageConfig, ConfigError> {
    read_json_or_default(&base_dir.join(LANGUAGE_FILE))
}

pub fn load_professional_config(base_dir: &Path) -> Result<ProfessionalConfig, ConfigError> {
    read_json_or_default(&base_dir.join(PROFESSIONAL_FILE))
}

pub fn load_extraction_config(base_dir: &Path) -> Result<ExtractionConfig, ConfigError> {
    read_json_or_default(&base_dir.join(EXTRACTION_FILE))
}

/// Loads `industry_keyword/<industry>.json`, falling back to the industry's
/// entry in `industry_keyword/all.json`, then to an empty tree.
pub fn load_industry_keywords(base_dir: &Path, industry: &str) -> Result<KeywordNode, ConfigError> {
    let industry_key = industry.trim().to_lowercase();
    let dir = base_dir.join(INDUSTRY_DIR);

    let dedicated = dir.join(format!("{industry_key}.json"));
    if dedicated.exists() {
        return read_json(&dedicated);
    }

    let fallback = dir.join("all.json");
    if fallback.exists() {
        let all: BTreeMap<String, KeywordNode> = read_json(&fallback)?;
        return Ok(all.get(&industry_key).cloned().unwrap_or_default());
    }

    Ok(KeywordNode::default())
}

fn read_json<T>(path: &Path) -> Result<T, ConfigError>
where
    T: serde::de::DeserializeOwned,
{
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}

fn read_json_or_default<T>(path: &Path) -> Result<T, ConfigError>
where
    T: serde::de::DeserializeOwned + Default,
{
    if !path.exists() {
        return Ok(T::default());
    }
    read_json(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_node_deserializes_nested_shapes() {
        let raw = r#"{"backend": ["rust", {"db": "postgres"}], "frontend": "react"}"#;
        let node: KeywordNode = serde_json::from_str(raw).expect("nested tree parses");
        match node {
            KeywordNode::Group(groups) => {
                assert_eq!(groups.len(), 2);
                assert!(matches!(groups.get("frontend"), Some(KeywordNode::Term(t)) if t == "react"));
            }
            other => panic!("expected group, got {other:?}"),
        }
    }

    #[test]
    fn language_config_sections_default_when_absent() {
        let cfg: LanguageConfig = serde_json::from_str("{}").expect("empty config parses");
        assert!(cfg.general_keywords.is_empty());
        assert!(cfg.grammar.is_empty());
        assert_eq!(cfg.readability.complex_word_min_len, 8);
        assert_eq!(cfg.readability.target_word_count_max, 1200);
    }

    #[test]
    fn grammar_rule_severity_defaults_to_medium() {
        let raw = r#"{"pattern": "teh"}"#;
        let rule: GrammarRuleSpec = serde_json::from_str(raw).expect("rule parses");
        assert_eq!(rule.severity, Severity::Medium);
        assert_eq!(rule.message, "Grammar issue");
    }

    #[test]
    fn missing_config_files_fall_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let language = load_language_config(dir.path()).expect("defaults load");
        assert!(language.general_keywords.is_empty());

        let tree = load_industry_keywords(dir.path(), "technology").expect("defaults load");
        assert_eq!(tree, KeywordNode::default());
    }

    #[test]
    fn industry_keywords_prefer_dedicated_file_over_all_json() {
        let dir = tempfile::tempdir().expect("tempdir");
        let ik_dir = dir.path().join("industry_keyword");
        std::fs::create_dir(&ik_dir).expect("industry dir");
        std::fs::write(ik_dir.join("finance.json"), r#"["trading", "risk"]"#).expect("write");
        std::fs::write(
            ik_dir.join("all.json"),
            r#"{"finance": ["ignored"], "technology": ["cloud"]}"#,
        )
        .expect("write");

        let dedicated = load_industry_keywords(dir.path(), "Finance").expect("loads");
        assert_eq!(
            dedicated,
            KeywordNode::List(vec![
                KeywordNode::Term("trading".to_string()),
                KeywordNode::Term("risk".to_string()),
            ])
        );

        let from_all = load_industry_keywords(dir.path(), "technology").expect("loads");
        assert_eq!(
            from_all,
            KeywordNode::List(vec![KeywordNode::Term("cloud".to_string())])
        );
    }
}
