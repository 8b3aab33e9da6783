use crate::error::Result;
use crate::types::offer::Scenario;
use crate::types::report::{Label, OfferReport};
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Download document: the full scenario with the score result and an export
/// timestamp appended, matching the schema of previously exported files.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioExport<'a> {
    #[serde(flatten)]
    pub scenario: &'a Scenario,
    pub score: u8,
    pub label: Label,
    pub exported_at: String,
}

impl<'a> ScenarioExport<'a> {
    pub fn new(scenario: &'a Scenario, report: &OfferReport) -> Self {
        Self {
            scenario,
            score: report.score,
            label: report.label,
            exported_at: Utc::now().to_rfc3339(),
        }
    }
}

/// Write the export next to the scenario unless a destination is given.
/// Returns the path written.
pub fn write_export(
    scenario_path: &Path,
    scenario: &Scenario,
    report: &OfferReport,
    out: Option<&Path>,
) -> Result<PathBuf> {
    let out_path = match out {
        Some(path) => path.to_path_buf(),
        None => {
            let stamp = Utc::now().format("%Y%m%dT%H%M%SZ");
            let dir = scenario_path.parent().unwrap_or_else(|| Path::new("."));
            dir.join(format!("offer-scenario-{stamp}.json"))
        }
    };
    let export = ScenarioExport::new(scenario, report);
    let json = serde_json::to_string_pretty(&export)?;
    fs::write(&out_path, json)?;
    Ok(out_path)
}
