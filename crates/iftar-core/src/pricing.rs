//! # Price Calculator
//!
//! Turns an [`OrderConfig`] and a [`DeliveryMethod`] into a
//! [`PriceBreakdown`].
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  tier = resolve_tier(order_type, sub_duration)                          │
//! │                                                                         │
//! │  box_price    = BOX[size][tier]                                         │
//! │  addons_daily = BOUREK[qty][tier] + HMISS[size][tier]                   │
//! │               + SALAD[tier] × salad_extra                               │
//! │  daily_total  = box_price + addons_daily                                │
//! │  meal_total   = daily_total × days          (days = 1 | 10 | 30)        │
//! │  delivery_fee = 5 if delivery AND one-day, else 0                       │
//! │  grand_total  = meal_total + delivery_fee                               │
//! │  savings      = (daily at one-day prices − daily_total) × days          │
//! │                 (subscriptions only)                                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The breakdown is never sent over the wire: the checkout recomputes it
//! from the decoded order, so its total cannot drift from the wizard's.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::tables::{self, DELIVERY_FEE_ONE_DAY};
use crate::tier::PriceTier;
use crate::types::{DeliveryMethod, OrderConfig, OrderType};

// =============================================================================
// Price Breakdown
// =============================================================================

/// Every price component shown to the customer for one order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    /// Box price per day.
    pub box_price: Money,
    /// All add-ons per day.
    pub addons_daily: Money,
    pub daily_total: Money,
    pub days: u32,
    /// `daily_total × days`, before delivery.
    pub meal_total: Money,
    pub delivery_fee: Money,
    pub grand_total: Money,
    /// What the same selection would cost more at one-day prices.
    /// Zero for one-day orders.
    pub savings: Money,
}

/// Computes the full breakdown for an order.
///
/// Infallible: every field of [`OrderConfig`] is a closed type, so any value
/// that can be constructed can be priced.
///
/// ```rust
/// use iftar_core::pricing::compute_prices;
/// use iftar_core::types::{DeliveryMethod, OrderConfig};
///
/// let prices = compute_prices(&OrderConfig::default(), DeliveryMethod::Pickup);
/// assert_eq!(prices.grand_total.to_string(), "540");
/// assert_eq!(prices.savings.to_string(), "150");
/// ```
pub fn compute_prices(order: &OrderConfig, delivery_method: DeliveryMethod) -> PriceBreakdown {
    let tier = order.tier();

    let box_price = tables::box_prices(order.box_size).at(tier);
    let addons_daily = addons_daily_at(order, tier);
    let daily_total = box_price + addons_daily;

    let days = order.days();
    let meal_total = daily_total * days;

    let delivery_fee = match (delivery_method, order.order_type) {
        (DeliveryMethod::Delivery, OrderType::OneDay) => DELIVERY_FEE_ONE_DAY,
        _ => Money::zero(),
    };

    let grand_total = meal_total + delivery_fee;

    let savings = match order.order_type {
        OrderType::Subscription => {
            let one_day_daily = tables::box_prices(order.box_size).at(PriceTier::OneDay)
                + addons_daily_at(order, PriceTier::OneDay);
            (one_day_daily - daily_total) * days
        }
        OrderType::OneDay => Money::zero(),
    };

    PriceBreakdown {
        box_price,
        addons_daily,
        daily_total,
        days,
        meal_total,
        delivery_fee,
        grand_total,
        savings,
    }
}

/// Sum of the selected add-ons per day, priced at `tier`.
fn addons_daily_at(order: &OrderConfig, tier: PriceTier) -> Money {
    addon_lines_at(order, tier)
        .into_iter()
        .map(|line| line.daily_price)
        .sum()
}

// =============================================================================
// Add-on Lines
// =============================================================================

/// Which add-on a summary line refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum AddonKind {
    Bourek,
    Hmiss,
    Salad,
}

/// One selected add-on with its per-day price, as listed in the order
/// summary ("Boureks (6 pcs) +14").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AddonLine {
    pub kind: AddonKind,
    pub label: String,
    pub daily_price: Money,
}

/// The selected add-ons priced at the order's own tier. Unselected add-ons
/// are omitted.
pub fn addon_lines(order: &OrderConfig) -> Vec<AddonLine> {
    addon_lines_at(order, order.tier())
}

fn addon_lines_at(order: &OrderConfig, tier: PriceTier) -> Vec<AddonLine> {
    let mut lines = Vec::with_capacity(3);

    if let Some(row) = tables::bourek_prices(order.bourek_option) {
        lines.push(AddonLine {
            kind: AddonKind::Bourek,
            label: format!("Boureks ({})", order.bourek_option.label()),
            daily_price: row.at(tier),
        });
    }

    if let Some(row) = tables::hmiss_prices(order.hmiss_option) {
        lines.push(AddonLine {
            kind: AddonKind::Hmiss,
            label: format!("Hmiss ({})", order.hmiss_option),
            daily_price: row.at(tier),
        });
    }

    let salad = order.salad_extra.count();
    if salad > 0 {
        lines.push(AddonLine {
            kind: AddonKind::Salad,
            label: format!("Extra salad \u{d7}{salad}"),
            daily_price: tables::SALAD.at(tier).multiply_quantity(i64::from(salad)),
        });
    }

    lines
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BourekOption, BoxSize, HmissOption, SaladExtra, SubDuration};

    fn money(major: i64) -> Money {
        Money::from_major(major)
    }

    #[test]
    fn test_default_subscription_pickup() {
        let prices = compute_prices(&OrderConfig::default(), DeliveryMethod::Pickup);
        assert_eq!(
            prices,
            PriceBreakdown {
                box_price: money(18),
                addons_daily: money(0),
                daily_total: money(18),
                days: 30,
                meal_total: money(540),
                delivery_fee: money(0),
                grand_total: money(540),
                savings: money(150),
            }
        );
    }

    #[test]
    fn test_one_day_with_addons_delivered() {
        let order = OrderConfig {
            order_type: OrderType::OneDay,
            bourek_option: BourekOption::Six,
            hmiss_option: HmissOption::Small,
            salad_extra: SaladExtra::saturating(1),
            ..OrderConfig::default()
        };
        let prices = compute_prices(&order, DeliveryMethod::Delivery);

        assert_eq!(prices.box_price, money(23));
        assert_eq!(prices.addons_daily, money(23));
        assert_eq!(prices.daily_total, money(46));
        assert_eq!(prices.days, 1);
        assert_eq!(prices.meal_total, money(46));
        assert_eq!(prices.delivery_fee, money(5));
        assert_eq!(prices.grand_total, money(51));
        assert_eq!(prices.savings, money(0));
    }

    #[test]
    fn test_family_ten_day_subscription() {
        let order = OrderConfig {
            box_size: BoxSize::Family,
            sub_duration: SubDuration::Ten,
            ..OrderConfig::default()
        };
        let prices = compute_prices(&order, DeliveryMethod::Pickup);

        assert_eq!(prices.box_price, money(73));
        assert_eq!(prices.daily_total, money(73));
        assert_eq!(prices.days, 10);
        assert_eq!(prices.meal_total, money(730));
        assert_eq!(prices.grand_total, money(730));
        assert_eq!(prices.savings, money(120));
    }

    #[test]
    fn test_half_unit_bourek_stays_exact() {
        let order = OrderConfig {
            order_type: OrderType::OneDay,
            bourek_option: BourekOption::One,
            ..OrderConfig::default()
        };
        let prices = compute_prices(&order, DeliveryMethod::Pickup);
        assert_eq!(prices.addons_daily, Money::from_cents(250));
        assert_eq!(prices.grand_total.to_string(), "25.50");
    }

    #[test]
    fn test_subscription_delivery_is_free() {
        let order = OrderConfig::default();
        let pickup = compute_prices(&order, DeliveryMethod::Pickup);
        let delivery = compute_prices(&order, DeliveryMethod::Delivery);
        assert!(delivery.delivery_fee.is_zero());
        assert_eq!(pickup, delivery);
    }

    #[test]
    fn test_savings_include_addons() {
        // sub-30: 18 + 22 + 8 + 3×2 = 54 vs one-day 23 + 26 + 9 + 4×2 = 66
        let order = OrderConfig {
            bourek_option: BourekOption::Twelve,
            hmiss_option: HmissOption::Large,
            salad_extra: SaladExtra::saturating(2),
            ..OrderConfig::default()
        };
        let prices = compute_prices(&order, DeliveryMethod::Pickup);
        assert_eq!(prices.daily_total, money(54));
        assert_eq!(prices.meal_total, money(1620));
        assert_eq!(prices.savings, money(12 * 30));
    }

    #[test]
    fn test_stale_duration_ignored_for_one_day() {
        let ten = OrderConfig {
            order_type: OrderType::OneDay,
            sub_duration: SubDuration::Ten,
            ..OrderConfig::default()
        };
        let thirty = OrderConfig {
            sub_duration: SubDuration::Thirty,
            ..ten.clone()
        };
        assert_eq!(
            compute_prices(&ten, DeliveryMethod::Pickup),
            compute_prices(&thirty, DeliveryMethod::Pickup)
        );
    }

    #[test]
    fn test_addon_lines() {
        let order = OrderConfig {
            bourek_option: BourekOption::Six,
            salad_extra: SaladExtra::saturating(3),
            ..OrderConfig::default()
        };
        let lines = addon_lines(&order);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].kind, AddonKind::Bourek);
        assert_eq!(lines[0].label, "Boureks (6 pcs)");
        assert_eq!(lines[0].daily_price, money(12));
        assert_eq!(lines[1].kind, AddonKind::Salad);
        assert_eq!(lines[1].label, "Extra salad \u{d7}3");
        assert_eq!(lines[1].daily_price, money(9));

        assert!(addon_lines(&OrderConfig::default()).is_empty());
    }

    #[test]
    fn test_breakdown_json_is_cents() {
        let prices = compute_prices(&OrderConfig::default(), DeliveryMethod::Pickup);
        let json = serde_json::to_value(prices).unwrap();
        assert_eq!(json["grandTotal"], 54000);
        assert_eq!(json["days"], 30);
    }
}
