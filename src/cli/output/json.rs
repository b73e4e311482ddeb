//! JSON output formatting

use crate::error::BiasLensError;
use serde::Serialize;

use super::{CatalogRenderer, ReportRenderer};
use crate::rules::{Category, RuleCatalog, SessionReport, Severity};

pub struct JsonOutput;

impl JsonOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct CatalogOutput<'a> {
    version: &'static str,
    rules: Vec<RuleSummary<'a>>,
}

#[derive(Serialize)]
struct RuleSummary<'a> {
    id: &'a str,
    category: Category,
    label: &'a str,
    severity: Severity,
    pattern: &'a str,
}

impl ReportRenderer for JsonOutput {
    fn render_report(&self, report: &SessionReport) -> Result<String, BiasLensError> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

impl CatalogRenderer for JsonOutput {
    fn render_catalog(&self, catalog: &RuleCatalog) -> Result<String, BiasLensError> {
        let output = CatalogOutput {
            version: env!("CARGO_PKG_VERSION"),
            rules: catalog
                .rules()
                .iter()
                .map(|r| RuleSummary {
                    id: &r.id,
                    category: r.category,
                    label: &r.label,
                    severity: r.severity,
                    pattern: r.pattern(),
                })
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Classifier;

    #[test]
    fn test_render_report() {
        let mut classifier = Classifier::default();
        let findings = classifier.classify("asians are smart and he is a leader");
        let report = classifier.report().with_findings(findings);

        let rendered = JsonOutput::new().render_report(&report).unwrap();
        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(json["score"], 20);
        assert_eq!(json["total_matches"], 2);
        assert_eq!(json["counts"]["gender"], 1);
        assert_eq!(json["counts"]["race"], 1);
        assert_eq!(json["categories_found"][0], "gender");
        assert_eq!(json["findings"][0]["rule_id"], "GEN001");
        assert_eq!(json["findings"][1]["severity"], "medium");
    }

    #[test]
    fn test_render_report_roundtrips() {
        let report = Classifier::default().report();
        let rendered = JsonOutput::new().render_report(&report).unwrap();
        let parsed: SessionReport = serde_json::from_str(&rendered).unwrap();

        assert_eq!(parsed.score, 0);
        assert!(parsed.findings().is_empty());
    }

    #[test]
    fn test_render_catalog() {
        let rendered = JsonOutput::new()
            .render_catalog(&RuleCatalog::builtin())
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        let rules = json["rules"].as_array().unwrap();
        assert_eq!(rules.len(), 8);
        assert_eq!(rules[0]["id"], "GEN001");
        assert_eq!(rules[0]["category"], "gender");
        assert_eq!(rules[7]["label"], "privilege assumption");
    }
}
