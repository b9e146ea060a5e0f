// Console reports for single comments, batches and summaries.
// Labels are colored when the writer supports it.
use std::io::{self, Write};

use termcolor::{Color, ColorSpec, WriteColor};

use crate::nlp::{AnalysisResult, BatchSummary, SentimentLabel};

pub fn label_color(label: SentimentLabel) -> ColorSpec {
    let mut spec = ColorSpec::new();
    match label {
        SentimentLabel::Positive => spec.set_fg(Some(Color::Green)).set_bold(true),
        SentimentLabel::Neutral => spec.set_fg(Some(Color::Yellow)),
        SentimentLabel::Negative => spec.set_fg(Some(Color::Red)).set_bold(true),
    };
    spec
}

pub fn write_label<W: WriteColor>(out: &mut W, label: SentimentLabel) -> io::Result<()> {
    out.set_color(&label_color(label))?;
    write!(out, "{}", label)?;
    out.reset()
}

pub fn write_single<W: WriteColor>(
    out: &mut W,
    original: &str,
    cleaned: &str,
    label: SentimentLabel,
) -> io::Result<()> {
    writeln!(out, "\nResult:")?;
    writeln!(out, "  Original: \"{}\"", original)?;
    writeln!(out, "  Cleaned : \"{}\"", cleaned)?;
    write!(out, "  Sentiment: ")?;
    write_label(out, label)?;
    writeln!(out)
}

pub fn write_batch<W: WriteColor>(out: &mut W, results: &[AnalysisResult]) -> io::Result<()> {
    writeln!(out, "\n=== Batch analysis results ===")?;
    for item in results {
        write!(out, "- \"{}\" -> ", item.text)?;
        write_label(out, item.sentiment)?;
        writeln!(out)?;
    }
    Ok(())
}

pub fn write_summary<W: WriteColor>(out: &mut W, summary: &BatchSummary) -> io::Result<()> {
    writeln!(out, "\nSummary:")?;
    for (label, count) in summary.iter() {
        let name = match label {
            SentimentLabel::Positive => "Positive:",
            SentimentLabel::Neutral => "Neutral :",
            SentimentLabel::Negative => "Negative:",
        };
        out.set_color(&label_color(label))?;
        write!(out, "  {}", name)?;
        out.reset()?;
        writeln!(out, " {}", count)?;
    }
    Ok(())
}
