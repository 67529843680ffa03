//! # Checkout Hand-off
//!
//! The wizard finishes by navigating to the checkout with everything it
//! collected packed into one query string:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Wizard                                   Checkout                      │
//! │  ──────                                   ────────                      │
//! │  OrderConfig ─┐                      ┌──► OrderConfig ──┐               │
//! │  CustomerInfo ├─► to_query() ─► ?... ┼──► CustomerInfo  ├─► quote()     │
//! │  Delivery    ─┘                      └──► Delivery ─────┘               │
//! │                                                                         │
//! │  The price breakdown is NOT part of the query. The checkout always      │
//! │  recomputes it from the decoded order.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;
use url::form_urlencoded::Serializer;

use crate::codec::{self, keys, SearchParams};
use crate::pricing::{compute_prices, PriceBreakdown};
use crate::types::{CustomerInfo, DeliveryMethod, OrderConfig};

/// Everything the checkout page needs, decoded from the hand-off query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub order: OrderConfig,
    pub customer: CustomerInfo,
    pub delivery: DeliveryMethod,
}

impl CheckoutRequest {
    pub fn new(order: OrderConfig, customer: CustomerInfo, delivery: DeliveryMethod) -> Self {
        CheckoutRequest {
            order,
            customer,
            delivery,
        }
    }

    /// Serializes the request for the checkout URL.
    ///
    /// Order pairs come first, then the required contact fields and the
    /// delivery method. Optional address fields and notes are only written
    /// when filled in.
    pub fn to_query(&self) -> String {
        let mut serializer = Serializer::new(String::new());
        codec::append_order(&mut serializer, &self.order);

        let customer = &self.customer;
        serializer
            .append_pair(keys::FIRST_NAME, &customer.first_name)
            .append_pair(keys::LAST_NAME, &customer.last_name)
            .append_pair(keys::PHONE, &customer.phone)
            .append_pair(keys::EMAIL, &customer.email)
            .append_pair(keys::DELIVERY, self.delivery.as_str());

        for (key, value) in [
            (keys::ADDRESS, &customer.address),
            (keys::CITY, &customer.city),
            (keys::POSTAL_CODE, &customer.postal_code),
            (keys::NOTES, &customer.notes),
        ] {
            if !value.is_empty() {
                serializer.append_pair(key, value);
            }
        }

        serializer.finish()
    }

    /// Decodes a hand-off query. Never fails: missing contact fields become
    /// empty strings and any delivery value other than `delivery` means
    /// pickup.
    pub fn from_query(query: &str) -> Self {
        let params = SearchParams::parse(query);

        let customer = CustomerInfo {
            first_name: params.get_or_empty(keys::FIRST_NAME),
            last_name: params.get_or_empty(keys::LAST_NAME),
            phone: params.get_or_empty(keys::PHONE),
            email: params.get_or_empty(keys::EMAIL),
            address: params.get_or_empty(keys::ADDRESS),
            city: params.get_or_empty(keys::CITY),
            postal_code: params.get_or_empty(keys::POSTAL_CODE),
            notes: params.get_or_empty(keys::NOTES),
        };

        let delivery = match params.get(keys::DELIVERY) {
            Some("delivery") => DeliveryMethod::Delivery,
            Some("pickup") | None => DeliveryMethod::Pickup,
            Some(raw) => {
                debug!(key = keys::DELIVERY, raw, "unrecognised query value, using pickup");
                DeliveryMethod::Pickup
            }
        };

        CheckoutRequest {
            order: codec::decode_order(&params),
            customer,
            delivery,
        }
    }

    /// The breakdown to display and charge, computed locally.
    pub fn quote(&self) -> PriceBreakdown {
        compute_prices(&self.order, self.delivery)
    }
}
