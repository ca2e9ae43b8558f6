//! Carelens — health assistant demo CLI
//!
//! Drives the Carelens core end to end: symptom triage, lab-test booking
//! with risk scoring and report export, metrics capture, the weekly trend
//! forecast, and the remote prediction call.
//!
//! Usage:
//!   cargo run -p carelens-cli -- chat "cough and fever for 3 days"
//!   cargo run -p carelens-cli -- tests
//!   cargo run -p carelens-cli -- book --name "Ada Example" --age 34 \
//!       --gender female --email ada@example.com --phone 555-0100 \
//!       --test thyroid --answers y,n,y --text-out report.txt
//!   cargo run -p carelens-cli -- save-metrics --heart-rate 72 --systolic 120 \
//!       --diastolic 80 --sugar 90 --weight 70 --height 175
//!   cargo run -p carelens-cli -- trend
//!   cargo run -p carelens-cli -- predict --endpoint http://localhost:8000

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::{Datelike, Local, Utc};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use carelens_contracts::{
    error::{CarelensError, CarelensResult},
    metrics::HealthMetrics,
    patient::{Gender, PatientDetails},
};
use carelens_predict::{weekly_forecast, MetricSample, PredictionClient};
use carelens_risk::{BookingRequest, RiskEngine};
use carelens_store::{MetricsObserver, MetricsStore};

// ── CLI definition ────────────────────────────────────────────────────────────

/// Carelens — keyword triage, rule-based lab-test risk scoring, and health
/// metrics tracking, from the command line.
#[derive(Parser)]
#[command(
    name = "carelens",
    about = "Carelens health assistant demo",
    long_about = "Runs the Carelens core: symptom triage, lab-test booking with\n\
                  rule-based risk scoring and report export, metrics capture,\n\
                  trend forecasting, and the remote prediction call."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a symptom description and print the assistant's reply.
    Chat {
        /// Free-text symptom description, e.g. "cough and fever for 3 days".
        message: String,
    },
    /// List the bookable lab tests.
    Tests,
    /// Book a lab test: score the risk and export the reports.
    Book {
        #[arg(long)]
        name: String,
        #[arg(long)]
        age: String,
        #[arg(long)]
        gender: Gender,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        /// Catalog id of the test, e.g. "cbc", "lipid", "thyroid".
        #[arg(long)]
        test: String,
        /// Questionnaire answers in question order, e.g. "y,n,y".
        #[arg(long)]
        answers: Option<String>,
        /// Optional free-text notes.
        #[arg(long, default_value = "")]
        notes: String,
        /// Medical history: frequent fatigue? (yes/no)
        #[arg(long, default_value = "")]
        fatigue: String,
        /// Medical history: unexplained bruising or bleeding? (yes/no)
        #[arg(long, default_value = "")]
        bruising: String,
        /// Medical history: family history of blood disorders? (yes/no)
        #[arg(long, default_value = "")]
        blood_disorders: String,
        /// Alternative assessment rules TOML.
        #[arg(long)]
        rules: Option<PathBuf>,
        /// Write the plain-text report here.
        #[arg(long)]
        text_out: Option<PathBuf>,
        /// Write the booking PDF here.
        #[arg(long)]
        pdf_out: Option<PathBuf>,
    },
    /// Save the six health metrics, overwriting the stored record.
    SaveMetrics {
        #[arg(long)]
        heart_rate: String,
        #[arg(long)]
        systolic: String,
        #[arg(long)]
        diastolic: String,
        #[arg(long)]
        sugar: String,
        #[arg(long)]
        weight: String,
        #[arg(long)]
        height: String,
        /// Directory holding the metrics record.
        #[arg(long, default_value = ".")]
        data_dir: PathBuf,
    },
    /// Print the seven-day trend forecast seeded from the stored metrics.
    Trend {
        #[arg(long, default_value = ".")]
        data_dir: PathBuf,
    },
    /// Send the stored metrics to the remote prediction endpoint.
    Predict {
        /// Base URL of the prediction service.
        #[arg(long)]
        endpoint: String,
        #[arg(long, default_value = ".")]
        data_dir: PathBuf,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Structured logging; set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Chat { message } => run_chat(&message),
        Command::Tests => run_tests(),
        Command::Book {
            name,
            age,
            gender,
            email,
            phone,
            test,
            answers,
            notes,
            fatigue,
            bruising,
            blood_disorders,
            rules,
            text_out,
            pdf_out,
        } => run_book(BookArgs {
            name,
            age,
            gender,
            email,
            phone,
            test,
            answers,
            notes,
            fatigue,
            bruising,
            blood_disorders,
            rules,
            text_out,
            pdf_out,
        }),
        Command::SaveMetrics {
            heart_rate,
            systolic,
            diastolic,
            sugar,
            weight,
            height,
            data_dir,
        } => run_save_metrics(
            HealthMetrics {
                heart_rate,
                blood_pressure_systolic: systolic,
                blood_pressure_diastolic: diastolic,
                blood_sugar: sugar,
                weight,
                height,
            },
            &data_dir,
        ),
        Command::Trend { data_dir } => run_trend(&data_dir),
        Command::Predict { endpoint, data_dir } => run_predict(&endpoint, &data_dir),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

// ── Chat ──────────────────────────────────────────────────────────────────────

fn run_chat(message: &str) -> CarelensResult<()> {
    let analysis = carelens_triage::analyze(message);
    let reply = carelens_triage::respond(&analysis);

    println!("You: {}", message);
    println!();
    println!("Health Assistant: {}", reply);

    if !analysis.symptoms.is_empty() {
        println!();
        println!(
            "  [matched: {} | severity: {} | duration: {} day(s)]",
            analysis.symptoms.join(", "),
            analysis.severity.as_str(),
            analysis.duration_days
        );
    }
    Ok(())
}

// ── Tests catalog ─────────────────────────────────────────────────────────────

fn run_tests() -> CarelensResult<()> {
    let engine = RiskEngine::builtin();
    println!("Available lab tests:");
    println!();
    for test in engine.tests() {
        println!("  {:10} {}", test.id, test.name);
        println!("  {:10} {}", "", test.description);
        println!("  {:10} Recommended: {}", "", test.recommended_frequency);
        println!();
    }
    Ok(())
}

// ── Booking ───────────────────────────────────────────────────────────────────

struct BookArgs {
    name: String,
    age: String,
    gender: Gender,
    email: String,
    phone: String,
    test: String,
    answers: Option<String>,
    notes: String,
    fatigue: String,
    bruising: String,
    blood_disorders: String,
    rules: Option<PathBuf>,
    text_out: Option<PathBuf>,
    pdf_out: Option<PathBuf>,
}

fn run_book(args: BookArgs) -> CarelensResult<()> {
    let engine = match &args.rules {
        Some(path) => RiskEngine::from_file(path)?,
        None => RiskEngine::builtin(),
    };

    let details = PatientDetails {
        name: args.name,
        age: args.age,
        gender: Some(args.gender),
        email: args.email,
        phone: args.phone,
        additional_notes: args.notes,
        frequent_fatigue: args.fatigue,
        unexplained_bruising: args.bruising,
        family_blood_disorders: args.blood_disorders,
    };

    let answers = parse_answers(&engine, &args.test, args.answers.as_deref())?;
    let booking = BookingRequest {
        details: details.clone(),
        test_id: args.test,
        answers,
    };

    let report = engine.score(&booking)?;

    println!("Lab test booked: {}", report.test_name);
    println!();
    println!("{}", carelens_report::render_text(&report));

    if let Some(path) = args.text_out {
        std::fs::write(&path, carelens_report::render_text(&report)).map_err(|e| {
            CarelensError::Export {
                reason: format!("failed to write '{}': {}", path.display(), e),
            }
        })?;
        println!("Text report written to {}", path.display());
    }

    if let Some(path) = args.pdf_out {
        let bytes = carelens_report::booking_pdf_bytes(&details, &report.test_name, Utc::now())?;
        std::fs::write(&path, bytes).map_err(|e| CarelensError::Export {
            reason: format!("failed to write '{}': {}", path.display(), e),
        })?;
        println!("Booking PDF written to {}", path.display());
    }

    Ok(())
}

/// Map a comma-separated answer list onto the test's questionnaire, in
/// question order. Missing entries count as "no".
fn parse_answers(
    engine: &RiskEngine,
    test_id: &str,
    raw: Option<&str>,
) -> CarelensResult<BTreeMap<String, bool>> {
    let questions = engine.questions(test_id)?;
    let mut answers = BTreeMap::new();

    let Some(raw) = raw else {
        return Ok(answers);
    };

    for (question, token) in questions.iter().zip(raw.split(',')) {
        let value = match token.trim().to_lowercase().as_str() {
            "y" | "yes" | "true" => true,
            "n" | "no" | "false" | "" => false,
            other => {
                return Err(CarelensError::Config {
                    reason: format!("unrecognized answer '{}' (expected yes/no)", other),
                })
            }
        };
        answers.insert(question.text.clone(), value);
    }
    Ok(answers)
}

// ── Metrics ───────────────────────────────────────────────────────────────────

/// Prints a refresh notice when the store reports a save — the stand-in for
/// the dashboard views that re-render on metrics updates.
struct TrendRefreshNotice;

impl MetricsObserver for TrendRefreshNotice {
    fn metrics_updated(&self, _metrics: &HealthMetrics) {
        println!("Trend view refreshed with the new metrics.");
    }
}

fn run_save_metrics(metrics: HealthMetrics, data_dir: &std::path::Path) -> CarelensResult<()> {
    let store = MetricsStore::new(data_dir);
    store.subscribe(Arc::new(TrendRefreshNotice));
    store.save(&metrics)?;
    println!("Metrics saved to {}", store.path().display());
    Ok(())
}

fn run_trend(data_dir: &std::path::Path) -> CarelensResult<()> {
    let store = MetricsStore::new(data_dir);
    let Some(metrics) = store.load()? else {
        println!("No stored metrics yet. Run save-metrics first.");
        return Ok(());
    };

    let sample = MetricSample::from_metrics(&metrics);
    let today = Local::now().date_naive().weekday();
    let mut rng = rand::thread_rng();
    let forecast = weekly_forecast(today, &sample, &mut rng);

    println!("Predicted health metrics for the week:");
    println!();
    println!(
        "  {:>4}  {:>10}  {:>8}  {:>9}  {:>11}",
        "day", "heart rate", "systolic", "diastolic", "blood sugar"
    );
    for day in &forecast {
        println!(
            "  {:>4}  {:>10.1}  {:>8.1}  {:>9.1}  {:>11.1}",
            day.day,
            day.metrics.heart_rate,
            day.metrics.blood_pressure_systolic,
            day.metrics.blood_pressure_diastolic,
            day.metrics.blood_sugar
        );
    }
    println!();
    println!("Day 1 is the stored record; later days are simulated predictions.");
    Ok(())
}

fn run_predict(endpoint: &str, data_dir: &std::path::Path) -> CarelensResult<()> {
    let store = MetricsStore::new(data_dir);
    let Some(metrics) = store.load()? else {
        println!("No stored metrics yet. Run save-metrics first.");
        return Ok(());
    };

    let client = PredictionClient::new(endpoint);
    match client.predict(&metrics) {
        Ok(prediction) => {
            println!("Health Prediction: {}", prediction.summary);
            println!("{}", prediction.details);
            Ok(())
        }
        Err(e) => {
            // Surfaced as a notification, not a crash; no retry.
            println!("Failed to predict health metrics: {}", e);
            Ok(())
        }
    }
}
