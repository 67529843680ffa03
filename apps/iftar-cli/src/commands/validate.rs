//! Validate command implementation

use anyhow::Result;
use iftar_core::validation::validate_checkout;
use iftar_core::{CheckoutRequest, ValidationError};
use serde::Serialize;
use tracing::info;

use super::{query_part, to_json};
use crate::config::OutputFormat;

pub struct ValidateOutcome {
    pub output: String,
    pub valid: bool,
}

#[derive(Debug, Serialize)]
struct Problem {
    field: Option<String>,
    message: String,
}

#[derive(Debug, Serialize)]
struct ValidationReport {
    valid: bool,
    problems: Vec<Problem>,
}

/// Execute the validate command
///
/// Runs the checkout page's checks on the decoded request and lists every
/// problem, one per line.
pub fn execute(input: &str, format: OutputFormat) -> Result<ValidateOutcome> {
    let request = CheckoutRequest::from_query(query_part(input));

    let problems: Vec<Problem> = match validate_checkout(&request) {
        Ok(()) => Vec::new(),
        Err(ValidationError::Invalid(errors)) => errors.iter().map(problem).collect(),
        Err(err) => vec![problem(&err)],
    };
    let valid = problems.is_empty();
    info!(valid, problems = problems.len(), "validated checkout request");

    let output = match format {
        OutputFormat::Json => to_json(&ValidationReport {
            valid,
            problems,
        })?,
        OutputFormat::Human if valid => "OK: checkout request is complete".to_string(),
        OutputFormat::Human => problems
            .iter()
            .map(|p| p.message.as_str())
            .collect::<Vec<_>>()
            .join("\n"),
    };

    Ok(ValidateOutcome { output, valid })
}

fn problem(err: &ValidationError) -> Problem {
    Problem {
        field: err.field().map(str::to_string),
        message: err.to_string(),
    }
}
