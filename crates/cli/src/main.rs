use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, Parser, Subcommand};

use speakscore_core::phrases::domain::phrase_repository::{
    resolve_expected_phrase, PhraseRepository,
};
use speakscore_core::phrases::infrastructure::json_phrase_repository::JsonPhraseRepository;
use speakscore_core::pipeline::assess_attempt_use_case::AssessAttemptUseCase;
use speakscore_core::scoring::domain::duration_estimator::DurationEstimator;
use speakscore_core::session::domain::speech_session::SpeechSession;
use speakscore_core::shared::language::Language;
use speakscore_core::shared::settings::ScoringSettings;
use speakscore_core::text::infrastructure::heuristic_word_similarity::HeuristicWordSimilarity;

/// Pronunciation scoring for language-practice attempts.
#[derive(Parser)]
#[command(name = "speakscore")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score a transcript against its expected phrase.
    Assess(AssessArgs),
    /// Show the syllable count and expected duration of a phrase.
    Estimate(EstimateArgs),
    /// List the phrases in a language's database.
    Phrases(PhrasesArgs),
}

#[derive(Args)]
struct AssessArgs {
    /// Expected phrase text.
    #[arg(long)]
    expected: Option<String>,

    /// Look the expected phrase up by id instead (needs --language and --data-dir).
    #[arg(long)]
    phrase_id: Option<u32>,

    /// Practice language: english, spanish, french, german.
    #[arg(long)]
    language: Option<String>,

    /// Directory holding <language>.json phrase databases.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Final transcript from the recognizer.
    #[arg(long)]
    transcript: String,

    /// Session JSON file ({startTime, endTime, interimEvents}).
    #[arg(long)]
    session: Option<PathBuf>,

    /// Recording duration in milliseconds (instead of --session).
    #[arg(long)]
    duration_ms: Option<u64>,

    /// Number of interim recognition events (with --duration-ms).
    #[arg(long, default_value = "0")]
    interim_events: usize,

    /// Override the estimated expected duration in milliseconds.
    #[arg(long)]
    expected_duration_ms: Option<f64>,

    /// Scoring settings JSON (defaults to the user config file when present).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args)]
struct EstimateArgs {
    /// Phrase text.
    #[arg(long)]
    expected: String,

    /// Scoring settings JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args)]
struct PhrasesArgs {
    #[arg(long)]
    language: String,

    #[arg(long)]
    data_dir: PathBuf,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    match Cli::parse().command {
        Command::Assess(args) => run_assess(args),
        Command::Estimate(args) => run_estimate(args),
        Command::Phrases(args) => run_phrases(args),
    }
}

fn run_assess(args: AssessArgs) -> Result<(), Box<dyn std::error::Error>> {
    validate_assess(&args)?;

    let settings = load_settings(args.config.as_deref())?;
    let expected = resolve_expected(&args)?;
    let session = match (&args.session, args.duration_ms) {
        (Some(path), _) => read_session(path)?,
        (None, Some(duration_ms)) => SpeechSession::synthetic(duration_ms, args.interim_events),
        (None, None) => return Err("Either --session or --duration-ms is required".into()),
    };

    let use_case = AssessAttemptUseCase::new(settings, Box::new(HeuristicWordSimilarity::new()));
    let report = use_case.execute(
        &expected,
        &args.transcript,
        &session,
        args.expected_duration_ms,
    );
    println!("{}", report.to_json_pretty()?);
    log::info!(
        "Overall {} ({})",
        report.overall,
        report.overall_feedback.message()
    );
    Ok(())
}

fn run_estimate(args: EstimateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let settings = load_settings(args.config.as_deref())?;
    let estimator = DurationEstimator::new(settings.syllables_per_second, settings.pause_buffer_ms);
    let syllables = DurationEstimator::estimate_syllables(&args.expected);
    let duration_ms = estimator.expected_duration_ms(&args.expected);
    println!("Syllables: {syllables}");
    println!("Expected duration: {duration_ms:.0} ms");
    Ok(())
}

fn run_phrases(args: PhrasesArgs) -> Result<(), Box<dyn std::error::Error>> {
    let language: Language = args.language.parse()?;
    let phrases = JsonPhraseRepository::new(&args.data_dir).load(language)?;
    for phrase in &phrases {
        match phrase.text_for(language) {
            Some(text) => println!("{}: {text}", phrase.id),
            None => log::warn!("Phrase {} has no {language} text", phrase.id),
        }
    }
    Ok(())
}

fn validate_assess(args: &AssessArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.expected.is_some() && args.phrase_id.is_some() {
        return Err("--expected and --phrase-id are mutually exclusive".into());
    }
    if args.expected.is_none() && args.phrase_id.is_none() {
        return Err("Either --expected or --phrase-id is required".into());
    }
    if args.phrase_id.is_some() && (args.language.is_none() || args.data_dir.is_none()) {
        return Err("--phrase-id requires --language and --data-dir".into());
    }
    if args.session.is_some() && args.duration_ms.is_some() {
        return Err("--session and --duration-ms are mutually exclusive".into());
    }
    if let Some(ms) = args.expected_duration_ms {
        if !ms.is_finite() || ms <= 0.0 {
            return Err(format!("Expected duration must be positive, got {ms}").into());
        }
    }
    Ok(())
}

fn resolve_expected(args: &AssessArgs) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(expected) = &args.expected {
        return Ok(expected.clone());
    }
    let (Some(id), Some(language), Some(data_dir)) =
        (args.phrase_id, &args.language, &args.data_dir)
    else {
        return Err("--phrase-id requires --language and --data-dir".into());
    };
    let language: Language = language.parse()?;
    let phrases = JsonPhraseRepository::new(data_dir).load(language)?;
    Ok(resolve_expected_phrase(&phrases, id, language)?.to_string())
}

fn load_settings(config: Option<&Path>) -> Result<ScoringSettings, Box<dyn std::error::Error>> {
    match config {
        Some(path) => {
            log::info!("Loading settings from {}", path.display());
            Ok(ScoringSettings::load(path)?)
        }
        None => Ok(ScoringSettings::load_or_default()),
    }
}

fn read_session(path: &Path) -> Result<SpeechSession, Box<dyn std::error::Error>> {
    let json = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read session file {}: {e}", path.display()))?;
    let session = serde_json::from_str(&json)
        .map_err(|e| format!("Failed to parse session file {}: {e}", path.display()))?;
    Ok(session)
}
