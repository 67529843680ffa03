//! Schedule command implementation

use anyhow::Result;
use chrono::NaiveDate;
use iftar_core::schedule::{CampaignWindow, DATE_FORMAT};
use iftar_core::search_params_to_order;
use serde::Serialize;
use tracing::{info, warn};

use super::{query_part, to_json};
use crate::config::OutputFormat;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScheduleReport {
    window_start: NaiveDate,
    window_end: NaiveDate,
    window_days: u32,
    latest_start: NaiveDate,
    dates: Vec<NaiveDate>,
}

/// Execute the schedule command
pub fn execute(input: &str, format: OutputFormat) -> Result<String> {
    let order = search_params_to_order(query_part(input));
    let window = CampaignWindow::ramadan();
    let dates = window.delivery_dates(&order);

    if dates.is_empty() {
        warn!(start = %order.start_date, "no usable start date, nothing scheduled");
    } else if dates.iter().any(|date| !window.contains(*date)) {
        warn!("schedule runs past the end of the campaign");
    }
    info!(deliveries = dates.len(), "built delivery schedule");

    let report = ScheduleReport {
        window_start: window.start,
        window_end: window.end,
        window_days: window.len_days(),
        latest_start: window.latest_start(&order),
        dates,
    };

    match format {
        OutputFormat::Json => to_json(&report),
        OutputFormat::Human if report.dates.is_empty() => {
            Ok("No deliveries: pick a start date (YYYY-MM-DD)".to_string())
        }
        OutputFormat::Human => Ok(report
            .dates
            .iter()
            .enumerate()
            .map(|(i, date)| format!("{:>2}. {} {}", i + 1, date.format("%a"), date.format(DATE_FORMAT)))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}
