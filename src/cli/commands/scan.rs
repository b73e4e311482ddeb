//! Scan command - Classify files or stdin line by line
//!
//! Every line is classified on its own against one shared score memory, so
//! the final score reflects the whole input set.

use tokio::io::AsyncReadExt;
use tracing::info;

use super::{prepare_classifier, OutputFormat, ScanArgs};
use crate::cli::exit_codes;
use crate::cli::output::{JsonOutput, ReportRenderer, TerminalOutput};
use crate::error::{BiasLensError, InputError, OutputError};
use crate::rules::{Classifier, Finding, SessionReport};
use std::path::Path;

/// Source name used in locations when reading standard input
const STDIN_SOURCE: &str = "<stdin>";

/// Execute the scan command
///
/// # Returns
///
/// An exit code: 0 when nothing was found (or the score stayed within
/// `--max-score`), 1 when bias was detected, 3 when no category is left
/// to check.
pub async fn execute(args: ScanArgs, config_path: Option<&Path>) -> Result<i32, BiasLensError> {
    let Some(mut classifier) = prepare_classifier(config_path, args.only, args.skip)? else {
        return Ok(exit_codes::INVALID_ARGS);
    };

    let mut findings = Vec::new();

    if args.files.is_empty() {
        let mut input = String::new();
        tokio::io::stdin()
            .read_to_string(&mut input)
            .await
            .map_err(InputError::Stdin)?;
        findings.extend(scan_text(&mut classifier, STDIN_SOURCE, &input));
    } else {
        for path in &args.files {
            let source = path.display().to_string();
            let text = tokio::fs::read_to_string(path)
                .await
                .map_err(|e| InputError::FileRead {
                    path: source.clone(),
                    source: e,
                })?;
            findings.extend(scan_text(&mut classifier, &source, &text));
        }
    }

    let report = classifier.report().with_findings(findings);
    info!(
        findings = report.findings().len(),
        score = report.score,
        "Scan complete"
    );

    let renderer: Box<dyn ReportRenderer> = match args.format {
        OutputFormat::Terminal => Box::new(TerminalOutput::new()),
        OutputFormat::Json => Box::new(JsonOutput::new()),
    };
    let rendered = renderer.render_report(&report)?;

    if let Some(output_path) = args.output {
        std::fs::write(&output_path, &rendered).map_err(|e| OutputError::FileWrite {
            path: output_path.display().to_string(),
            source: e,
        })?;
        eprintln!("Report written to: {}", output_path.display());
    } else {
        println!("{rendered}");
    }

    Ok(exit_code(&report, args.max_score))
}

/// Classify `text` line by line, tagging findings with `source:line`
pub fn scan_text(classifier: &mut Classifier, source: &str, text: &str) -> Vec<Finding> {
    let mut findings = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line_findings = classifier.classify(line);
        findings.extend(
            line_findings
                .into_iter()
                .map(|f| f.with_location(format!("{}:{}", source, index + 1))),
        );
    }

    info!(source = %source, findings = findings.len(), "Scanned input");
    findings
}

fn exit_code(report: &SessionReport, max_score: Option<u32>) -> i32 {
    if report.is_clean() {
        return exit_codes::SUCCESS;
    }

    match max_score {
        Some(max) if report.score <= max => exit_codes::SUCCESS,
        _ => exit_codes::BIAS_DETECTED,
    }
}
