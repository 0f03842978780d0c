use clap::{Parser, Subcommand};
use std::path::PathBuf;
use triage_core::{
    recommendation::classify_counts, AssessmentReport, Answers, AssessmentService, EngineConfig,
};

#[derive(Parser)]
#[command(name = "triage")]
#[command(about = "Symptom questionnaire triage CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess a questionnaire for a condition
    Assess {
        /// Condition slug, e.g. migraine-headache
        condition: String,
        /// Answers as a JSON object keyed by question number, e.g. '{"3": 9, "1": "Mild"}'
        answers: String,
        /// YAML file overriding the built-in engine tables
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },
    /// List configured conditions
    Conditions {
        /// YAML file overriding the built-in engine tables
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Show the recommendation for a score and counts
    Classify {
        /// Overall risk percentage (0-100)
        overall_risk: u8,
        /// Number of red flags
        #[arg(long, default_value_t = 0)]
        red_flags: usize,
        /// Number of critical symptoms
        #[arg(long, default_value_t = 0)]
        critical: usize,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Assess {
            condition,
            answers,
            config,
            json,
        }) => {
            let cfg = EngineConfig::load(config.as_deref())?;
            let answers = Answers::from_json_str(&answers)?;
            let report = AssessmentService::new(cfg.into()).evaluate(&condition, &answers);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_summary(&report);
            }
        }
        Some(Commands::Conditions { config }) => {
            let cfg = EngineConfig::load(config.as_deref())?;
            for (slug, profile) in cfg.profiles() {
                println!(
                    "{}: critical {:?}, moderate {:?}",
                    slug, profile.critical, profile.moderate
                );
            }
        }
        Some(Commands::Classify {
            overall_risk,
            red_flags,
            critical,
        }) => {
            let level = classify_counts(overall_risk.min(100), red_flags, critical);
            println!("{} ({:?} urgency, {})", level.title, level.urgency, level.timeframe);
            println!("{}", level.description);
            for action in level.actions {
                println!("  - {}", action);
            }
        }
        None => {
            println!("No command given. Use --help for usage.");
        }
    }

    Ok(())
}

fn print_summary(report: &AssessmentReport) {
    let a = &report.assessment;
    println!("Condition: {}", report.condition_name);
    if !report.condition_configured {
        println!("  (no profile configured, all questions weighted equally)");
    }
    println!(
        "Overall risk: {}% ({} risk), confidence {}%",
        a.overall_risk, report.risk_band, a.confidence_level
    );

    for (label, items) in [
        ("Red flags", &a.red_flags),
        ("Critical", &report.highlights.critical),
        ("Moderate", &report.highlights.moderate),
        ("Mild", &report.highlights.mild),
    ] {
        if !items.is_empty() {
            println!("{}:", label);
            for item in items {
                println!("  - {}", item);
            }
        }
    }

    println!("Symptom categories:");
    for analysis in &report.symptom_analysis {
        println!("  {:<20} {:>3}%", analysis.category, analysis.severity);
    }

    let r = &report.recommendation;
    println!("Recommendation: {} ({})", r.title, r.timeframe);
    println!("{}", r.description);
    for action in r.actions {
        println!("  - {}", action);
    }
}
