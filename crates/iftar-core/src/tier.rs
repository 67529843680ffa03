//! # Tier Resolver
//!
//! Every priced item has one price per discount tier, and the tier is a
//! pure function of the order type and subscription length:
//!
//! ```text
//! order_type      sub_duration    tier
//! ──────────      ────────────    ────────
//! one-day         (ignored)       one-day
//! subscription    10              sub-10
//! subscription    30              sub-30
//! ```
//!
//! [`resolve_tier`] is the only place this mapping exists, so the wizard,
//! the checkout and the savings figure can never disagree about it.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{wire_enum, OrderConfig, OrderType, SubDuration};

/// Discount bracket that selects the price column for every item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PriceTier {
    #[serde(rename = "one-day")]
    OneDay,
    #[serde(rename = "sub-10")]
    Sub10,
    #[serde(rename = "sub-30")]
    Sub30,
}

wire_enum!(PriceTier, "price tier", {
    OneDay => "one-day",
    Sub10 => "sub-10",
    Sub30 => "sub-30",
});

/// Maps `(order_type, sub_duration)` to its price tier.
///
/// ```rust
/// use iftar_core::tier::{resolve_tier, PriceTier};
/// use iftar_core::types::{OrderType, SubDuration};
///
/// assert_eq!(resolve_tier(OrderType::OneDay, SubDuration::Ten), PriceTier::OneDay);
/// assert_eq!(resolve_tier(OrderType::Subscription, SubDuration::Ten), PriceTier::Sub10);
/// ```
pub const fn resolve_tier(order_type: OrderType, sub_duration: SubDuration) -> PriceTier {
    match (order_type, sub_duration) {
        (OrderType::OneDay, _) => PriceTier::OneDay,
        (OrderType::Subscription, SubDuration::Ten) => PriceTier::Sub10,
        (OrderType::Subscription, SubDuration::Thirty) => PriceTier::Sub30,
    }
}

impl OrderConfig {
    /// The tier this order is priced at.
    #[inline]
    pub fn tier(&self) -> PriceTier {
        resolve_tier(self.order_type, self.sub_duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pair_resolves() {
        for duration in SubDuration::ALL {
            assert_eq!(
                resolve_tier(OrderType::OneDay, *duration),
                PriceTier::OneDay
            );
        }
        assert_eq!(
            resolve_tier(OrderType::Subscription, SubDuration::Ten),
            PriceTier::Sub10
        );
        assert_eq!(
            resolve_tier(OrderType::Subscription, SubDuration::Thirty),
            PriceTier::Sub30
        );
    }

    #[test]
    fn test_order_tier() {
        assert_eq!(OrderConfig::default().tier(), PriceTier::Sub30);
    }

    #[test]
    fn test_tier_spelling() {
        assert_eq!(PriceTier::Sub10.to_string(), "sub-10");
        assert_eq!(
            serde_json::to_string(&PriceTier::OneDay).unwrap(),
            "\"one-day\""
        );
        assert_eq!("sub-30".parse::<PriceTier>().unwrap(), PriceTier::Sub30);
    }
}
