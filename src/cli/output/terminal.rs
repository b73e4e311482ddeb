//! Terminal output formatting with colors

use crate::error::BiasLensError;
use colored::Colorize;

use super::{CatalogRenderer, ReportRenderer};
use crate::rules::memory::MAX_SCORE;
use crate::rules::{Finding, RuleCatalog, SessionReport};

pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }

    fn format_header(&self, report: &SessionReport) -> String {
        format!(
            "\n{} v{}\n{} {}\n",
            "biaslens".cyan().bold(),
            report.version,
            "Generated:".dimmed(),
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )
    }

    /// Numbered list of findings, as echoed after each interactive input
    pub fn format_findings(&self, findings: &[Finding]) -> String {
        if findings.is_empty() {
            return format!("{} No bias detected.\n", "✔".green());
        }

        let mut output = format!("\n{}\n", "⚠ Potential bias found:".yellow().bold());
        for (i, finding) in findings.iter().enumerate() {
            output.push_str(&format!(
                "{}. [{}] {}\n",
                i + 1,
                finding.category.as_str().to_uppercase().cyan(),
                finding.label
            ));
            if let Some(suggestion) = &finding.suggestion {
                output.push_str(&format!("   {} {}\n", "Suggestion:".dimmed(), suggestion));
            }
        }
        output
    }

    fn format_finding(&self, finding: &Finding) -> String {
        let mut output = format!(
            "  {} [{}] {} {}\n",
            "•".dimmed(),
            finding.rule_id.cyan(),
            finding.label,
            format!("({})", finding.severity.as_str()).dimmed()
        );

        if let Some(location) = &finding.location {
            output.push_str(&format!("    {} {}\n", "└─".dimmed(), location.dimmed()));
        }
        if let Some(suggestion) = &finding.suggestion {
            output.push_str(&format!("    {} {}\n", "└─".dimmed(), suggestion));
        }

        output
    }

    /// Score line shown after each classification
    pub fn format_score(&self, score: u32) -> String {
        let value = score.to_string();
        let value = if score == 0 {
            value.green().bold()
        } else if score < 50 {
            value.yellow().bold()
        } else {
            value.red().bold()
        };
        format!("Current bias score: {}/{}\n", value, MAX_SCORE)
    }

    /// Short session report: score and discovered categories
    pub fn format_session_report(&self, report: &SessionReport) -> String {
        let mut output = format!("\n{}\n", "━".repeat(34).dimmed());
        output.push_str(&format!("{}\n", "  FINAL REPORT".bold()));
        output.push_str(&format!("Bias score: {}/{}\n", report.score, MAX_SCORE));
        output.push_str("Detected categories:\n");
        if report.categories_found.is_empty() {
            output.push_str(&format!("  {}\n", "none".dimmed()));
        }
        for category in &report.categories_found {
            output.push_str(&format!(" - {}\n", category.display_name()));
        }
        output.push_str(&format!("{}\n", "━".repeat(34).dimmed()));
        output
    }

    fn format_summary(&self, report: &SessionReport) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{}\n{}\n\n",
            "━".repeat(50).dimmed(),
            "  SUMMARY".bold()
        ));

        output.push_str(&format!(
            "Score: {}/{} │ Matches: {}\n",
            report.score.to_string().bold(),
            MAX_SCORE,
            report.total_matches
        ));

        for (category, count) in &report.counts {
            output.push_str(&format!(
                "  {:<14} {}\n",
                category.display_name(),
                count.to_string().yellow()
            ));
        }

        if report.is_clean() {
            output.push_str(&format!("\n{}\n", "No bias detected.".green()));
        }

        output
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for TerminalOutput {
    fn render_report(&self, report: &SessionReport) -> Result<String, BiasLensError> {
        let mut output = self.format_header(report);

        if !report.findings().is_empty() {
            output.push_str(&format!(
                "\n{}\n{}\n\n",
                "━".repeat(50).dimmed(),
                "  FINDINGS".bold()
            ));
            for finding in report.findings() {
                output.push_str(&self.format_finding(finding));
            }
        }

        output.push_str(&self.format_summary(report));
        Ok(output)
    }
}

impl CatalogRenderer for TerminalOutput {
    fn render_catalog(&self, catalog: &RuleCatalog) -> Result<String, BiasLensError> {
        let mut output = format!("{} ({})\n\n", "RULES".bold(), catalog.len());
        for rule in catalog.rules() {
            output.push_str(&format!(
                "  {} {:<14} {}\n    {} {}\n",
                rule.id.cyan(),
                rule.category.as_str(),
                rule.label,
                "└─".dimmed(),
                rule.pattern().dimmed()
            ));
        }
        Ok(output)
    }
}
