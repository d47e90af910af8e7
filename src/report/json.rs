/*!
 * JSON Export
 * Machine-readable reports
 */

use crate::core::errors::{SimError, SimResult};
use crate::runner::{RunReport, SimConfig};
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Everything written by `--output`
#[derive(Debug, Serialize)]
pub struct ExportDocument<'a> {
    pub config: &'a SimConfig,
    pub reports: &'a [RunReport],
}

/// Pretty-printed JSON for a set of reports
pub fn to_json(config: &SimConfig, reports: &[RunReport]) -> SimResult<String> {
    let doc = ExportDocument { config, reports };
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Write reports to `path`
pub fn write_json(path: impl AsRef<Path>, config: &SimConfig, reports: &[RunReport]) -> SimResult<()> {
    let path = path.as_ref();
    let json = to_json(config, reports)?;
    std::fs::write(path, json).map_err(|e| SimError::io(path.display().to_string(), e))?;
    info!(path = %path.display(), reports = reports.len(), "results exported");
    Ok(())
}
