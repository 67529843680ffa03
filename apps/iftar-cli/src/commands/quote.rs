//! Quote command implementation

use anyhow::Result;
use iftar_core::format::{format_per_day, format_price, format_total};
use iftar_core::pricing::{addon_lines, AddonLine};
use iftar_core::{
    CheckoutRequest, CustomerInfo, DeliveryMethod, OrderConfig, PriceBreakdown, PriceTier,
};
use serde::Serialize;
use tracing::info;

use super::{query_part, to_json};
use crate::config::{CliConfig, OutputFormat};

/// Everything printed by `quote --output json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteReport {
    pub order: OrderConfig,
    pub customer: CustomerInfo,
    pub delivery: DeliveryMethod,
    pub tier: PriceTier,
    pub addons: Vec<AddonLine>,
    pub prices: PriceBreakdown,
    pub currency: String,
}

/// Execute the quote command
///
/// # Errors
/// Returns error only if JSON serialization fails. Decoding never fails.
pub fn execute(input: &str, format: OutputFormat, config: &CliConfig) -> Result<String> {
    let request = CheckoutRequest::from_query(query_part(input));
    let report = QuoteReport {
        tier: request.order.tier(),
        addons: addon_lines(&request.order),
        prices: request.quote(),
        delivery: request.delivery,
        customer: request.customer,
        order: request.order,
        currency: config.currency_code.clone(),
    };
    info!(tier = %report.tier, total = %report.prices.grand_total, "quoted order");

    match format {
        OutputFormat::Human => Ok(format_human(&report)),
        OutputFormat::Json => to_json(&report),
    }
}

fn plan_heading(order: &OrderConfig) -> String {
    if order.is_subscription() {
        format!("{}-day subscription", order.days())
    } else {
        "One-day order".to_string()
    }
}

fn row(label: &str, value: &str) -> String {
    format!("  {label:<24}{value:>14}")
}

pub fn format_human(report: &QuoteReport) -> String {
    let order = &report.order;
    let prices = &report.prices;

    let mut lines = vec![format!("{} ({})", plan_heading(order), report.tier)];
    let name = report.customer.full_name();
    if !name.is_empty() {
        lines.push(format!("For: {name}"));
    }
    lines.push(format!(
        "{} box, {} menu",
        order.box_size.label(),
        order.box_theme.label()
    ));
    lines.push(format!(
        "Includes: {}",
        order.box_size.included_items().join(", ")
    ));
    lines.push(String::new());

    lines.push(row("Box", &format_per_day(prices.box_price)));
    if order.has_addons() {
        for line in &report.addons {
            lines.push(row(&line.label, &format!("+{}", format_price(line.daily_price))));
        }
    } else {
        lines.push(row("Add-ons", "none"));
    }
    lines.push(row("Daily total", &format_per_day(prices.daily_total)));
    if prices.days > 1 {
        lines.push(row(
            &format!("\u{d7} {} days", prices.days),
            &format_price(prices.meal_total),
        ));
    }

    let (delivery_label, delivery) = match report.delivery {
        DeliveryMethod::Pickup => ("Pickup", "Free".to_string()),
        DeliveryMethod::Delivery if prices.delivery_fee.is_zero() => {
            ("Delivery", "Free".to_string())
        }
        DeliveryMethod::Delivery => ("Delivery", format_price(prices.delivery_fee)),
    };
    lines.push(row(delivery_label, &delivery));
    lines.push(row("Total", &format_total(prices.grand_total, &report.currency)));

    if prices.savings.is_positive() {
        lines.push(row("You save", &format_price(prices.savings)));
    }

    lines.join("\n")
}
