use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use resume_ats::config;
use resume_ats::error::AppError;
use resume_ats::report::ScoreReport;
use resume_ats::{telemetry, Analysis, Analyzer, ResumeProfile};
use std::fs;
use std::path::PathBuf;
use tracing::info;

const DEFAULT_CONFIG_DIR: &str = "config";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Parser, Debug)]
#[command(
    name = "resume-ats",
    about = "Analyze a plain-text resume: extract structured fields and compute an ATS compatibility score",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a resume file and print the findings
    Analyze(AnalyzeArgs),
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Path to the plain-text resume
    file: PathBuf,
    /// Industry whose keyword and buzzword lists apply
    #[arg(long, default_value = "technology")]
    industry: String,
    /// Directory holding the analysis configuration documents
    #[arg(long)]
    config_dir: Option<PathBuf>,
    /// Evaluation date for open-ended employment ranges (defaults to today)
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
    /// Emit the full analysis as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let log_level =
        std::env::var("APP_LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
    telemetry::init(&log_level)?;

    let cli = Cli::parse();
    match cli.command {
        Command::Analyze(args) => run_analyze(args),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let AnalyzeArgs {
        file,
        industry,
        config_dir,
        today,
        json,
    } = args;

    let config_dir = config_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR));
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let analyzer = Analyzer::from_config_dir(&config_dir)?;
    let industry_keywords = config::load_industry_keywords(&config_dir, &industry)?;
    let text = fs::read_to_string(&file)?;

    info!(file = %file.display(), %industry, "analyzing resume");

    let analysis = analyzer.analyze(&text, &industry, &industry_keywords, None, today);

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        render_analysis(&analysis);
    }

    Ok(())
}

fn render_analysis(analysis: &Analysis) {
    let Analysis { profile, score } = analysis;

    println!("ATS score: {}/100", score.ats_score);
    render_breakdown(score);
    render_profile(profile);

    if score.issues.is_empty() {
        println!("\nIssues: none");
    } else {
        println!("\nIssues");
        for issue in &score.issues {
            let snippet_note = if issue.snippet.is_empty() {
                String::new()
            } else {
                format!(" [{}]", issue.snippet)
            };
            println!(
                "- ({}) {}{} -> {}",
                issue.severity.label(),
                issue.message,
                snippet_note,
                issue.suggestion
            );
        }
    }
}

fn render_breakdown(score: &ScoreReport) {
    println!("\nScore breakdown");
    println!("- Keywords: {}", score.breakdown.keywords);
    println!("- Industry keywords: {}", score.breakdown.industry_keywords);
    println!("- Action verbs: {}", score.breakdown.action_verbs);
    println!("- Quantification: {}", score.breakdown.quantification);
    println!("- Readability: {}", score.breakdown.readability);
    println!("- Buzzwords: {}", score.breakdown.buzzwords);
    println!("- Penalty: -{}", score.breakdown.penalty);

    println!(
        "\nKeyword coverage: {:.1}% general, {:.1}% industry",
        score.keyword_matches.percentage, score.industry_keyword_matches.percentage
    );
    if !score.industry_keyword_matches.missing.is_empty() {
        println!(
            "Missing industry keywords: {}",
            score.industry_keyword_matches.missing.join(", ")
        );
    }

    if !score.readability.warnings.is_empty() {
        println!("\nReadability warnings");
        for warning in &score.readability.warnings {
            println!("- {warning}");
        }
    }
}

fn render_profile(profile: &ResumeProfile) {
    println!("\nProfile");
    println!("- Email: {}", option_or_dash(profile.email.as_deref()));
    let phone = profile.phone.as_ref().map(|p| p.raw.as_str());
    println!("- Phone: {}", option_or_dash(phone));
    println!("- LinkedIn: {}", option_or_dash(profile.linkedin.as_deref()));
    println!("- GitHub: {}", option_or_dash(profile.github.as_deref()));
    println!("- Address: {}", option_or_dash(profile.address.as_deref()));

    match profile.experience_years {
        Some(years) => println!("- Experience: {years} years"),
        None => println!("- Experience: not found"),
    }

    if profile.skills.is_empty() {
        println!("- Skills: none identified");
    } else {
        println!("- Skills: {}", profile.skills.join(", "));
    }

    for entry in &profile.education {
        let degree = option_or_dash(entry.degree.as_deref());
        let institution = option_or_dash(entry.institution.as_deref());
        let year = entry
            .year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("- Education: {degree} | {institution} | {year}");
    }

    if !profile.certifications.is_empty() {
        println!("- Certifications: {}", profile.certifications.join(", "));
    }
}

fn option_or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}
