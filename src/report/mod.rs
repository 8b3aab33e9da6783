pub mod export;
pub mod json;
pub mod md;

use crate::error::OfferError;
use crate::types::report::OfferReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(report: &OfferReport, format: OutputFormat) -> Result<String, OfferError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(OfferError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}
