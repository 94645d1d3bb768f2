//! Analyze quiz answers

use std::io::Read;
use std::path::PathBuf;

use colored::*;
use persona_analysis::{AnalysisResult, AnswerRecord, ProfileAnalyzer};
use tracing::{debug, info};

use crate::error::{CliError, CliResult};
use crate::output::{render, OutputFormat};

/// Arguments for `persona analyze`
#[derive(clap::Args, Debug)]
pub struct AnalyzeArgs {
    /// Answer record JSON file (reads stdin when omitted or `-`)
    #[arg(short, long)]
    pub answers: Option<PathBuf>,
}

/// Execute the analyze command
pub fn execute(args: AnalyzeArgs, analyzer: &ProfileAnalyzer, format: OutputFormat) -> CliResult<()> {
    let raw = read_answers(args.answers.as_ref())?;
    let answers = AnswerRecord::from_json(&raw)?;
    debug!(?answers, "Answer record parsed");

    let result = analyzer.analyze(&answers);
    info!(
        persona = result.persona.key.as_str(),
        insights = result.insights.len(),
        recommendations = result.recommendations.len(),
        "Analysis complete"
    );

    match format {
        OutputFormat::Text => println!("{}", render_text(&result)),
        other => println!("{}", render(&result, other)?),
    }
    Ok(())
}

fn read_answers(path: Option<&PathBuf>) -> CliResult<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => {
            std::fs::read_to_string(p).map_err(|source| CliError::Io {
                path: p.display().to_string(),
                source,
            })
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| CliError::Io {
                    path: "<stdin>".into(),
                    source,
                })?;
            Ok(buf)
        }
    }
}

fn render_text(result: &AnalysisResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", result.persona.name.bold()));
    out.push_str(&format!("{}\n\n", result.persona.description.dimmed()));
    out.push_str(&format!("{}\n\n", result.personalized_message));
    out.push_str(&format!("Tags: {}\n", result.tags.join(", ")));

    if !result.insights.is_empty() {
        out.push_str("\nInsights:\n");
        for insight in &result.insights {
            out.push_str(&format!(
                "  {} {} ({})\n",
                "•".cyan(),
                insight.title,
                insight.category.as_str()
            ));
        }
    }

    out.push_str("\nRecommended for you:\n");
    for (i, rec) in result.recommendations.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, rec));
    }
    out
}
