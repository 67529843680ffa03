//! Encode command implementation

use anyhow::Result;
use clap::Args;
use iftar_core::{
    order_to_search_params, BourekOption, BoxSize, BoxTheme, CheckoutRequest, CustomerInfo,
    DeliveryMethod, HmissOption, OrderConfig, OrderType, SaladExtra, SubDuration,
};
use serde::Serialize;
use tracing::info;

use super::to_json;
use crate::config::{CliConfig, OutputFormat};

/// Order and contact flags. Anything left out keeps the wizard's default.
#[derive(Args, Debug, Clone, Default)]
pub struct EncodeArgs {
    /// single | family
    #[arg(long = "box")]
    pub box_size: Option<BoxSize>,

    /// traditional | mixed | light
    #[arg(long)]
    pub theme: Option<BoxTheme>,

    /// one-day | subscription
    #[arg(long = "type")]
    pub order_type: Option<OrderType>,

    /// 10 | 30
    #[arg(long)]
    pub duration: Option<SubDuration>,

    /// 0 | 1 | 6 | 12
    #[arg(long)]
    pub boureks: Option<BourekOption>,

    /// none | small | large
    #[arg(long)]
    pub hmiss: Option<HmissOption>,

    /// Extra salads per day, 0 to 4
    #[arg(long)]
    pub salad: Option<SaladExtra>,

    /// Start date (YYYY-MM-DD); pass an empty string for "not chosen"
    #[arg(long)]
    pub start: Option<String>,

    /// pickup | delivery
    #[arg(long)]
    pub delivery: Option<DeliveryMethod>,

    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    #[arg(long)]
    pub postal_code: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,
}

impl EncodeArgs {
    pub fn order(&self) -> OrderConfig {
        let defaults = OrderConfig::default();
        OrderConfig {
            box_size: self.box_size.unwrap_or(defaults.box_size),
            box_theme: self.theme.unwrap_or(defaults.box_theme),
            order_type: self.order_type.unwrap_or(defaults.order_type),
            sub_duration: self.duration.unwrap_or(defaults.sub_duration),
            bourek_option: self.boureks.unwrap_or(defaults.bourek_option),
            hmiss_option: self.hmiss.unwrap_or(defaults.hmiss_option),
            salad_extra: self.salad.unwrap_or(defaults.salad_extra),
            start_date: self.start.clone().unwrap_or(defaults.start_date),
        }
    }

    /// `None` when no contact flag and no delivery method were given.
    fn checkout(&self) -> Option<CheckoutRequest> {
        let fields = [
            &self.first_name,
            &self.last_name,
            &self.phone,
            &self.email,
            &self.address,
            &self.city,
            &self.postal_code,
            &self.notes,
        ];
        if self.delivery.is_none() && fields.iter().all(|field| field.is_none()) {
            return None;
        }

        let text = |field: &Option<String>| field.clone().unwrap_or_default();
        let customer = CustomerInfo {
            first_name: text(&self.first_name),
            last_name: text(&self.last_name),
            phone: text(&self.phone),
            email: text(&self.email),
            address: text(&self.address),
            city: text(&self.city),
            postal_code: text(&self.postal_code),
            notes: text(&self.notes),
        };

        Some(CheckoutRequest::new(
            self.order(),
            customer,
            self.delivery.unwrap_or_default(),
        ))
    }
}

#[derive(Debug, Serialize)]
struct EncodedLink {
    url: String,
    query: String,
}

/// Execute the encode command
///
/// Prints the checkout URL. With contact flags or `--delivery` the full
/// hand-off query is produced, otherwise only the order pairs.
pub fn execute(args: &EncodeArgs, format: OutputFormat, config: &CliConfig) -> Result<String> {
    let query = match args.checkout() {
        Some(request) => request.to_query(),
        None => order_to_search_params(&args.order()),
    };
    let url = format!("{}?{query}", config.checkout_url);
    info!(%url, "encoded checkout link");

    match format {
        OutputFormat::Human => Ok(url),
        OutputFormat::Json => to_json(&EncodedLink { url, query }),
    }
}
