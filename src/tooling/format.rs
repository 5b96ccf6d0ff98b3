//! Human-readable and JSON renderings of command results.

use crate::document::{DocumentKind, ValidationError};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::Path;

/// JSON shape of `germinator validate --format json`.
#[derive(Debug, Serialize)]
pub struct ValidateReport<'a> {
    pub file: String,
    pub kind: Option<DocumentKind>,
    pub platform: &'a str,
    pub valid: bool,
    pub errors: &'a [ValidationError],
}

impl<'a> ValidateReport<'a> {
    pub fn new(
        file: &Path,
        kind: Option<DocumentKind>,
        platform: &'a str,
        errors: &'a [ValidationError],
    ) -> Self {
        Self {
            file: file.display().to_string(),
            kind,
            platform,
            valid: errors.is_empty(),
            errors,
        }
    }
}

pub fn format_validate_result_text(report: &ValidateReport<'_>) -> String {
    if report.valid {
        return "Document is valid".to_string();
    }

    let heading = format!(
        "Validation failed: {} error(s) in {} ({})",
        report.errors.len(),
        report.file,
        report.platform
    );
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Field", "Error"]);
    for error in report.errors {
        table.add_row(vec![error.field.as_str(), error.message.as_str()]);
    }
    format!("{}\n\n{}", heading.red().bold(), table)
}

pub fn format_validate_result_json(report: &ValidateReport<'_>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
