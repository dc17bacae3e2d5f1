//! Resume analysis core: text normalization, keyword and rule matching,
//! readability metrics, structured field extraction, and a composite
//! applicant-tracking score.

pub mod analysis;
pub mod config;
pub mod error;
pub mod profile;
pub mod report;
pub mod telemetry;

pub use analysis::{AdvisoryError, AdvisoryReview, AdvisoryReviewer, ScoringEngine};
pub use config::{ExtractionConfig, KeywordNode, LanguageConfig, ProfessionalConfig};
pub use profile::ResumeProfile;
pub use report::{Issue, IssueKind, ScoreReport, Severity};

use chrono::NaiveDate;
use config::ConfigError;
use report::sort_issues;
use serde::Serialize;
use std::path::Path;

/// Combined output of one analysis run.
#[derive(Debug, Serialize)]
pub struct Analysis {
    pub profile: ResumeProfile,
    pub score: ScoreReport,
}

/// Front door of the crate: owns the compiled scoring configuration and
/// the extraction vocabularies, and runs both pipelines over a document.
pub struct Analyzer {
    scoring: ScoringEngine,
    extraction: ExtractionConfig,
}

impl Analyzer {
    pub fn new(
        language: LanguageConfig,
        professional: ProfessionalConfig,
        extraction: ExtractionConfig,
    ) -> Self {
        Self {
            scoring: ScoringEngine::new(language, professional),
            extraction,
        }
    }

    /// Loads every configuration document from `base_dir`. Missing files
    /// fall back to defaults; malformed files are errors.
    pub fn from_config_dir(base_dir: &Path) -> Result<Self, ConfigError> {
        Ok(Self::new(
            config::load_language_config(base_dir)?,
            config::load_professional_config(base_dir)?,
            config::load_extraction_config(base_dir)?,
        ))
    }

    /// Scores the document and extracts its structured profile. Advisories
    /// raised by the profile join the score report's issue list so callers
    /// see one ordered list of findings.
    pub fn analyze(
        &self,
        text: &str,
        industry: &str,
        industry_keywords: &KeywordNode,
        advisory: Option<&dyn AdvisoryReviewer>,
        today: NaiveDate,
    ) -> Analysis {
        let mut score = self.scoring.score(text, industry, industry_keywords, advisory);
        let profile = ResumeProfile::extract(text, &self.extraction, today);

        score.issues.extend(profile.advisories(text));
        sort_issues(&mut score.issues);

        Analysis { profile, score }
    }
}
