//! Interactive command - Classify sentences typed on the console
//!
//! Each non-empty line is either a session command (`report`, `reset`,
//! `exit`) or text to classify. The score memory lives as long as the
//! session.

use colored::Colorize;
use std::io::Write;
use std::path::Path;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::debug;

use super::{prepare_classifier, InteractiveArgs};
use crate::cli::exit_codes;
use crate::cli::output::TerminalOutput;
use crate::error::{BiasLensError, InputError};
use crate::rules::Classifier;

/// A parsed console line
#[derive(Debug, PartialEq, Eq)]
enum SessionCommand<'a> {
    Exit,
    Report,
    Reset,
    Blank,
    Classify(&'a str),
}

fn parse_command(line: &str) -> SessionCommand<'_> {
    let text = line.trim();
    if text.is_empty() {
        return SessionCommand::Blank;
    }

    match text.to_lowercase().as_str() {
        "exit" | "quit" => SessionCommand::Exit,
        "report" => SessionCommand::Report,
        "reset" => SessionCommand::Reset,
        _ => SessionCommand::Classify(text),
    }
}

/// Execute the interactive command on the process console
pub async fn execute(
    args: InteractiveArgs,
    config_path: Option<&Path>,
) -> Result<i32, BiasLensError> {
    let Some(mut classifier) = prepare_classifier(config_path, args.only, args.skip)? else {
        return Ok(exit_codes::INVALID_ARGS);
    };

    let reader = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    run_session(&mut classifier, reader, &mut stdout).await?;

    Ok(exit_codes::SUCCESS)
}

/// Drive one session: prompt, read a line, dispatch, until `exit` or end of input.
///
/// The final report is always printed before returning.
pub async fn run_session<R, W>(
    classifier: &mut Classifier,
    reader: R,
    out: &mut W,
) -> Result<(), BiasLensError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let output = TerminalOutput::new();
    let mut lines = reader.lines();

    writeln!(out, "\n{}", "BIASLENS INTERACTIVE SESSION".cyan().bold())?;
    writeln!(out, "Type a sentence, 'report', 'reset', or 'exit'\n")?;

    loop {
        write!(out, "Input: ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await.map_err(InputError::Stdin)? else {
            debug!("End of input");
            break;
        };

        match parse_command(&line) {
            SessionCommand::Exit => break,
            SessionCommand::Blank => continue,
            SessionCommand::Report => {
                write!(out, "{}", output.format_session_report(&classifier.report()))?;
            }
            SessionCommand::Reset => {
                classifier.reset();
                writeln!(out, "{}\n", "Score memory cleared.".dimmed())?;
            }
            SessionCommand::Classify(text) => {
                let findings = classifier.classify(text);
                write!(out, "{}", output.format_findings(&findings))?;
                if !findings.is_empty() {
                    write!(out, "\n{}", output.format_score(classifier.score()))?;
                }
                writeln!(out)?;
            }
        }
    }

    write!(out, "{}", output.format_session_report(&classifier.report()))?;
    writeln!(out, "\nSession ended.")?;
    out.flush()?;

    Ok(())
}
