// Console front end for comment sentiment triage.
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use termcolor::{ColorChoice, StandardStream};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use comment_sentiment::report;
use comment_sentiment::{
    AnalysisResult, AnalyzerConfig, BatchSummary, SentimentAnalyzer, Thresholds,
};

#[derive(Parser)]
#[command(
    name = "comment-sentiment",
    version,
    about = "Lexicon-based sentiment triage for short comments"
)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// JSON configuration file (thresholds, scoring parameters, resource bundle)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Language resource bundle; the built-in English bundle is used if omitted
    #[arg(long, env = "COMMENT_SENTIMENT_RESOURCES", global = true)]
    resources: Option<PathBuf>,

    /// Scores at or above this value are positive
    #[arg(long, global = true, allow_hyphen_values = true)]
    positive_threshold: Option<f32>,

    /// Scores at or below this value are negative
    #[arg(long, global = true, allow_hyphen_values = true)]
    negative_threshold: Option<f32>,

    #[arg(long, value_enum, default_value_t = ColorMode::Auto, global = true)]
    color: ColorMode,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a single comment
    Analyze { text: String },
    /// Analyze multiple comments, one per line
    Batch {
        /// Read comments from a file instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Print results and summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the normalized form of a comment
    Normalize { text: String },
    /// Summarize previously produced results (JSON array of {text, sentiment})
    Summarize {
        #[arg(short, long)]
        input: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl From<ColorMode> for ColorChoice {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Auto => ColorChoice::Auto,
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}

#[derive(Serialize)]
struct BatchReport<'a> {
    results: &'a [AnalysisResult],
    summary: BatchSummary,
}

// Labels in external result files are free strings; unknown ones are dropped.
// A record without a label counts as neutral.
#[derive(Deserialize)]
struct ExternalResult {
    #[serde(default)]
    sentiment: Option<String>,
}

impl ExternalResult {
    fn label_name(&self) -> &str {
        self.sentiment.as_deref().unwrap_or("neutral")
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(io::stderr)
        .init();
}

fn build_config(cli: &Cli) -> Result<AnalyzerConfig> {
    let mut config = match &cli.config {
        Some(path) => AnalyzerConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => AnalyzerConfig::default(),
    };

    if let Some(path) = &cli.resources {
        config.resource_bundle = Some(path.clone());
    }

    if cli.positive_threshold.is_some() || cli.negative_threshold.is_some() {
        let positive = cli.positive_threshold.unwrap_or(config.thresholds.positive());
        let negative = cli.negative_threshold.unwrap_or(config.thresholds.negative());
        config.thresholds =
            Thresholds::new(positive, negative).context("invalid threshold flags")?;
    }

    Ok(config)
}

/// Reads comments from a file: every non-blank line.
fn read_comments_file(path: &Path) -> Result<Vec<String>> {
    let f = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut lines = Vec::new();
    for line in BufReader::new(f).lines() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

/// Reads comments interactively: stops at the first blank line or EOF.
fn read_comments_until_blank<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }
    Ok(lines)
}

fn read_external_results(path: &Path) -> Result<Vec<ExternalResult>> {
    let f = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let results = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("{} is not a JSON array of results", path.display()))?;
    Ok(results)
}

fn write_batch_json<W: Write>(
    out: &mut W,
    results: &[AnalysisResult],
    summary: BatchSummary,
) -> Result<()> {
    let batch_report = BatchReport { results, summary };
    serde_json::to_writer_pretty(&mut *out, &batch_report)?;
    writeln!(out)?;
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = build_config(&cli)?;
    let analyzer =
        SentimentAnalyzer::new(&config).context("failed to initialize sentiment analyzer")?;
    let mut out = StandardStream::stdout(cli.color.into());

    match cli.command {
        Commands::Analyze { text } => {
            if text.trim().is_empty() {
                writeln!(out, "Please enter a non-empty comment.")?;
                return Ok(());
            }
            let cleaned = analyzer.normalize_text(&text);
            let label = analyzer.classify_text(&text);
            report::write_single(&mut out, &text, &cleaned, label)?;
        }
        Commands::Batch { input, json } => {
            let lines = match input {
                Some(path) => read_comments_file(&path)?,
                None => {
                    if !json {
                        writeln!(out, "Enter comments (one per line). Submit an empty line to finish.")?;
                    }
                    read_comments_until_blank(io::stdin().lock())?
                }
            };

            if lines.is_empty() && !json {
                writeln!(out, "No comments entered.")?;
                return Ok(());
            }

            let results = analyzer.analyze_batch(&lines);
            let summary = analyzer.summarize_batch(&results);
            info!(
                items = results.len(),
                positive = summary.positive,
                neutral = summary.neutral,
                negative = summary.negative,
                "batch analyzed"
            );

            if json {
                write_batch_json(&mut out, &results, summary)?;
            } else {
                report::write_batch(&mut out, &results)?;
                report::write_summary(&mut out, &summary)?;
            }
        }
        Commands::Normalize { text } => {
            writeln!(out, "{}", analyzer.normalize_text(&text))?;
        }
        Commands::Summarize { input } => {
            let records = read_external_results(&input)?;
            let summary = BatchSummary::from_label_names(records.iter().map(|r| r.label_name()));
            if summary.total() < records.len() {
                info!(
                    dropped = records.len() - summary.total(),
                    "ignored records with unknown labels"
                );
            }
            report::write_summary(&mut out, &summary)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_until_blank_line() -> Result<()> {
        let input = Cursor::new("great stuff\nawful\n\nignored after blank\n");
        let lines = read_comments_until_blank(input)?;
        assert_eq!(lines, vec!["great stuff", "awful"]);
        Ok(())
    }

    #[test]
    fn test_read_until_eof() -> Result<()> {
        let lines = read_comments_until_blank(Cursor::new("only line"))?;
        assert_eq!(lines, vec!["only line"]);
        let lines = read_comments_until_blank(Cursor::new(""))?;
        assert!(lines.is_empty());
        Ok(())
    }

    #[test]
    fn test_read_comments_file_skips_blank_lines() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("comments.txt");
        std::fs::write(&path, "first\n\n   \nsecond\n")?;
        let lines = read_comments_file(&path)?;
        assert_eq!(lines, vec!["first", "second"]);
        Ok(())
    }

    #[test]
    fn test_read_external_results() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("results.json");
        std::fs::write(
            &path,
            r#"[{"text": "a", "sentiment": "positive"}, {"text": "b", "sentiment": "angry"}, {"text": "c"}, {"text": "d", "sentiment": ""}]"#,
        )?;
        let records = read_external_results(&path)?;
        assert_eq!(records.len(), 4);
        let summary = BatchSummary::from_label_names(records.iter().map(|r| r.label_name()));
        assert_eq!(summary.positive, 1);
        assert_eq!(summary.neutral, 1);
        assert_eq!(summary.negative, 0);
        assert_eq!(summary.total(), 2);
        Ok(())
    }

    #[test]
    fn test_empty_batch_json_is_valid() -> Result<()> {
        let mut buf = Vec::new();
        write_batch_json(&mut buf, &[], BatchSummary::default())?;
        let value: serde_json::Value = serde_json::from_slice(&buf)?;
        assert_eq!(value["results"], serde_json::json!([]));
        assert_eq!(value["summary"]["positive"], 0);
        assert_eq!(value["summary"]["neutral"], 0);
        assert_eq!(value["summary"]["negative"], 0);
        Ok(())
    }

    #[test]
    fn test_cli_parses_negative_threshold() {
        let cli = Cli::try_parse_from([
            "comment-sentiment",
            "--negative-threshold",
            "-0.4",
            "analyze",
            "fine",
        ])
        .unwrap();
        assert_eq!(cli.negative_threshold, Some(-0.4));
        let config = build_config(&cli).unwrap();
        assert_eq!(config.thresholds.negative(), -0.4);
        assert_eq!(config.thresholds.positive(), 0.2);
    }

    #[test]
    fn test_cli_rejects_inverted_thresholds() {
        let cli = Cli::try_parse_from([
            "comment-sentiment",
            "--positive-threshold",
            "-0.5",
            "normalize",
            "x",
        ])
        .unwrap();
        assert!(build_config(&cli).is_err());
    }

    #[test]
    fn test_cli_resources_flag_overrides_config() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let config_path = dir.path().join("config.json");
        std::fs::write(&config_path, r#"{"resource_bundle": "from_file.json"}"#)?;
        let cli = Cli::try_parse_from([
            "comment-sentiment",
            "--config",
            config_path.to_str().unwrap(),
            "--resources",
            "from_flag.json",
            "normalize",
            "x",
        ])?;
        let config = build_config(&cli)?;
        assert_eq!(config.resource_bundle, Some(PathBuf::from("from_flag.json")));
        Ok(())
    }

    #[test]
    fn test_missing_resource_bundle_fails_fast() {
        let config = AnalyzerConfig {
            resource_bundle: Some(PathBuf::from("/nonexistent/bundle.json")),
            ..Default::default()
        };
        assert!(SentimentAnalyzer::new(&config).is_err());
    }
}
