//! # Pricing Tables
//!
//! Static per-day prices for every sellable item, one column per tier.
//!
//! ```text
//! ┌──────────────────┬──────────┬──────────┬──────────┐
//! │ item             │ one-day  │ sub-10   │ sub-30   │
//! ├──────────────────┼──────────┼──────────┼──────────┤
//! │ single box       │    23    │    20    │    18    │
//! │ family box       │    85    │    73    │    65    │
//! │ bourek ×1        │   2.50   │     2    │     2    │
//! │ bourek ×6        │    14    │    12    │    12    │
//! │ bourek ×12       │    26    │    22    │    22    │
//! │ hmiss small      │     5    │     4    │     4    │
//! │ hmiss large      │     9    │     8    │     8    │
//! │ salad (each)     │     4    │     3    │     3    │
//! └──────────────────┴──────────┴──────────┴──────────┘
//! delivery fee (one-day orders delivered): 5
//! ```
//!
//! Subscription columns never exceed the one-day column, which is what keeps
//! the advertised savings non-negative.

use crate::money::Money;
use crate::tier::PriceTier;
use crate::types::{BourekOption, BoxSize, HmissOption};

/// One row of a price table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierPrices {
    pub one_day: Money,
    pub sub_10: Money,
    pub sub_30: Money,
}

impl TierPrices {
    /// Builds a row from cents.
    pub const fn from_cents(one_day: i64, sub_10: i64, sub_30: i64) -> Self {
        TierPrices {
            one_day: Money::from_cents(one_day),
            sub_10: Money::from_cents(sub_10),
            sub_30: Money::from_cents(sub_30),
        }
    }

    /// The price in the given tier's column.
    pub const fn at(&self, tier: PriceTier) -> Money {
        match tier {
            PriceTier::OneDay => self.one_day,
            PriceTier::Sub10 => self.sub_10,
            PriceTier::Sub30 => self.sub_30,
        }
    }
}

// =============================================================================
// Table Rows
// =============================================================================

pub const SINGLE_BOX: TierPrices = TierPrices::from_cents(2300, 2000, 1800);
pub const FAMILY_BOX: TierPrices = TierPrices::from_cents(8500, 7300, 6500);

pub const BOUREK_1: TierPrices = TierPrices::from_cents(250, 200, 200);
pub const BOUREK_6: TierPrices = TierPrices::from_cents(1400, 1200, 1200);
pub const BOUREK_12: TierPrices = TierPrices::from_cents(2600, 2200, 2200);

pub const HMISS_SMALL: TierPrices = TierPrices::from_cents(500, 400, 400);
pub const HMISS_LARGE: TierPrices = TierPrices::from_cents(900, 800, 800);

/// Price of one extra salad portion.
pub const SALAD: TierPrices = TierPrices::from_cents(400, 300, 300);

/// Flat fee for delivering a one-day order.
pub const DELIVERY_FEE_ONE_DAY: Money = Money::from_major(5);

/// Every priced row, for table-wide checks.
pub const ALL_ROWS: &[TierPrices] = &[
    SINGLE_BOX,
    FAMILY_BOX,
    BOUREK_1,
    BOUREK_6,
    BOUREK_12,
    HMISS_SMALL,
    HMISS_LARGE,
    SALAD,
];

// =============================================================================
// Lookups
// =============================================================================

pub const fn box_prices(size: BoxSize) -> &'static TierPrices {
    match size {
        BoxSize::Single => &SINGLE_BOX,
        BoxSize::Family => &FAMILY_BOX,
    }
}

/// `None` for zero boureks: there is no row for "no add-on".
pub const fn bourek_prices(option: BourekOption) -> Option<&'static TierPrices> {
    match option {
        BourekOption::None => None,
        BourekOption::One => Some(&BOUREK_1),
        BourekOption::Six => Some(&BOUREK_6),
        BourekOption::Twelve => Some(&BOUREK_12),
    }
}

pub const fn hmiss_prices(option: HmissOption) -> Option<&'static TierPrices> {
    match option {
        HmissOption::None => None,
        HmissOption::Small => Some(&HMISS_SMALL),
        HmissOption::Large => Some(&HMISS_LARGE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIERS: [PriceTier; 3] = [PriceTier::OneDay, PriceTier::Sub10, PriceTier::Sub30];

    #[test]
    fn test_lookup_columns() {
        assert_eq!(box_prices(BoxSize::Single).at(PriceTier::OneDay), Money::from_major(23));
        assert_eq!(box_prices(BoxSize::Family).at(PriceTier::Sub10), Money::from_major(73));
        assert_eq!(
            bourek_prices(BourekOption::One).map(|row| row.at(PriceTier::OneDay)),
            Some(Money::from_major_minor(2, 50))
        );
        assert_eq!(hmiss_prices(HmissOption::Large).map(|row| row.at(PriceTier::Sub30)), Some(Money::from_major(8)));
        assert_eq!(SALAD.at(PriceTier::Sub10), Money::from_major(3));
    }

    #[test]
    fn test_no_row_for_absent_addons() {
        assert!(bourek_prices(BourekOption::None).is_none());
        assert!(hmiss_prices(HmissOption::None).is_none());
    }

    #[test]
    fn test_subscription_never_above_one_day() {
        for row in ALL_ROWS {
            for tier in TIERS {
                assert!(row.at(tier) <= row.one_day, "{row:?} at {tier}");
            }
        }
    }

    #[test]
    fn test_all_prices_positive() {
        for row in ALL_ROWS {
            for tier in TIERS {
                assert!(row.at(tier).is_positive());
            }
        }
        assert!(DELIVERY_FEE_ONE_DAY.is_positive());
    }
}
