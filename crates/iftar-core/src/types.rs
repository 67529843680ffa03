//! # Domain Types
//!
//! Core domain types used throughout IftarBox.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  OrderConfig    │   │  CustomerInfo   │   │ DeliveryMethod  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  box_size       │   │  first_name     │   │  Pickup         │       │
//! │  │  box_theme      │   │  last_name      │   │  Delivery       │       │
//! │  │  order_type     │   │  phone, email   │   └─────────────────┘       │
//! │  │  sub_duration   │   │  address, city  │                              │
//! │  │  add-ons        │   │  postal, notes  │                              │
//! │  │  start_date     │   └─────────────────┘                              │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Closed Enums
//! Every option the wizard offers is a Rust enum. Untrusted strings only
//! become these types through [`crate::codec`] (lenient, defaulting) or the
//! strict `FromStr`/`TryFrom` impls below.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::RAMADAN_START;

/// Implements the wire spelling of a closed enum: `as_str`, `ALL`,
/// `Display` and a strict `FromStr`.
macro_rules! wire_enum {
    ($ty:ident, $kind:literal, { $($variant:ident => $wire:literal),+ $(,)? }) => {
        impl $ty {
            /// Every variant, in display order.
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// The query-string spelling.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $wire,)+
                }
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $ty {
            type Err = $crate::error::CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($ty::$variant),)+
                    other => Err($crate::error::CoreError::UnknownValue {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

pub(crate) use wire_enum;

// =============================================================================
// Box Size
// =============================================================================

/// The base meal unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum BoxSize {
    /// 1-2 persons.
    #[default]
    Single,
    /// 4-6 persons.
    Family,
}

wire_enum!(BoxSize, "box size", {
    Single => "single",
    Family => "family",
});

impl BoxSize {
    /// Display label for summaries.
    pub const fn label(&self) -> &'static str {
        match self {
            BoxSize::Single => "Single (1\u{2013}2 persons)",
            BoxSize::Family => "Family (4\u{2013}6 persons)",
        }
    }

    /// What comes in the box every day, regardless of theme.
    pub const fn included_items(&self) -> &'static [&'static str] {
        match self {
            BoxSize::Single => &[
                "Harira (soup)",
                "2 Boureks",
                "Fresh salad",
                "Bread, dates & sharbat",
            ],
            BoxSize::Family => &[
                "Harira \u{d7}4",
                "Boureks \u{d7}8",
                "Salad \u{d7}4",
                "Bread, dates & sharbat (family)",
            ],
        }
    }
}

// =============================================================================
// Box Theme
// =============================================================================

/// Menu theme. Cosmetic only: it never changes the price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum BoxTheme {
    #[default]
    Traditional,
    Mixed,
    Light,
}

wire_enum!(BoxTheme, "box theme", {
    Traditional => "traditional",
    Mixed => "mixed",
    Light => "light",
});

impl BoxTheme {
    pub const fn label(&self) -> &'static str {
        match self {
            BoxTheme::Traditional => "Traditional Tlemcen",
            BoxTheme::Mixed => "Mixed Algerian",
            BoxTheme::Light => "Light Ramadan",
        }
    }
}

// =============================================================================
// Order Type & Subscription Duration
// =============================================================================

/// A single delivery or a multi-day subscription.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum OrderType {
    OneDay,
    #[default]
    Subscription,
}

wire_enum!(OrderType, "order type", {
    OneDay => "one-day",
    Subscription => "subscription",
});

/// Subscription length in days.
///
/// Only meaningful when the order type is [`OrderType::Subscription`]. A
/// one-day order keeps whatever value was last selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum SubDuration {
    Ten,
    #[default]
    Thirty,
}

impl SubDuration {
    pub const ALL: &'static [SubDuration] = &[SubDuration::Ten, SubDuration::Thirty];

    pub const fn days(&self) -> u32 {
        match self {
            SubDuration::Ten => 10,
            SubDuration::Thirty => 30,
        }
    }
}

impl From<SubDuration> for u32 {
    fn from(duration: SubDuration) -> Self {
        duration.days()
    }
}

impl TryFrom<u32> for SubDuration {
    type Error = CoreError;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        match days {
            10 => Ok(SubDuration::Ten),
            30 => Ok(SubDuration::Thirty),
            other => Err(CoreError::UnknownValue {
                kind: "subscription duration",
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for SubDuration {
    type Err = CoreError;

    /// Exact spellings only: `"10"` or `"30"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "10" => Ok(SubDuration::Ten),
            "30" => Ok(SubDuration::Thirty),
            other => Err(CoreError::UnknownValue {
                kind: "subscription duration",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for SubDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.days())
    }
}

// =============================================================================
// Add-ons
// =============================================================================

/// Extra boureks per day. Only these pack sizes are sold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum BourekOption {
    #[default]
    None,
    One,
    Six,
    Twelve,
}

impl BourekOption {
    pub const ALL: &'static [BourekOption] = &[
        BourekOption::None,
        BourekOption::One,
        BourekOption::Six,
        BourekOption::Twelve,
    ];

    pub const fn pieces(&self) -> u8 {
        match self {
            BourekOption::None => 0,
            BourekOption::One => 1,
            BourekOption::Six => 6,
            BourekOption::Twelve => 12,
        }
    }

    /// Label used in summaries: "1 pc" or "6 pcs".
    pub fn label(&self) -> String {
        match self.pieces() {
            1 => "1 pc".to_string(),
            n => format!("{n} pcs"),
        }
    }
}

impl From<BourekOption> for u8 {
    fn from(option: BourekOption) -> Self {
        option.pieces()
    }
}

impl TryFrom<u8> for BourekOption {
    type Error = CoreError;

    fn try_from(pieces: u8) -> Result<Self, Self::Error> {
        match pieces {
            0 => Ok(BourekOption::None),
            1 => Ok(BourekOption::One),
            6 => Ok(BourekOption::Six),
            12 => Ok(BourekOption::Twelve),
            other => Err(CoreError::UnknownValue {
                kind: "bourek quantity",
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for BourekOption {
    type Err = CoreError;

    /// Exact pack sizes only: `"0"`, `"1"`, `"6"` or `"12"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u8>()
            .map_err(|_| CoreError::UnknownValue {
                kind: "bourek quantity",
                value: s.to_string(),
            })
            .and_then(BourekOption::try_from)
    }
}

impl fmt::Display for BourekOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pieces())
    }
}

/// Hmiss (roasted pepper salad) add-on size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum HmissOption {
    #[default]
    None,
    Small,
    Large,
}

wire_enum!(HmissOption, "hmiss option", {
    None => "none",
    Small => "small",
    Large => "large",
});

/// Extra salad portions per day, always within `0..=MAX`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SaladExtra(u8);

impl SaladExtra {
    pub const MAX: u8 = 4;

    /// Returns `None` when `count` is above [`SaladExtra::MAX`].
    pub const fn new(count: u8) -> Option<Self> {
        if count <= Self::MAX {
            Some(SaladExtra(count))
        } else {
            None
        }
    }

    /// Clamps any count into the allowed range.
    pub const fn saturating(count: u8) -> Self {
        if count > Self::MAX {
            SaladExtra(Self::MAX)
        } else {
            SaladExtra(count)
        }
    }

    pub const fn count(&self) -> u8 {
        self.0
    }
}

impl From<SaladExtra> for u8 {
    fn from(extra: SaladExtra) -> Self {
        extra.0
    }
}

impl TryFrom<u8> for SaladExtra {
    type Error = CoreError;

    fn try_from(count: u8) -> Result<Self, Self::Error> {
        SaladExtra::new(count).ok_or_else(|| CoreError::UnknownValue {
            kind: "salad extra",
            value: count.to_string(),
        })
    }
}

impl FromStr for SaladExtra {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u8>()
            .map_err(|_| CoreError::UnknownValue {
                kind: "salad extra",
                value: s.to_string(),
            })
            .and_then(SaladExtra::try_from)
    }
}

impl fmt::Display for SaladExtra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Delivery Method
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMethod {
    /// Collected in store. Always free.
    #[default]
    Pickup,
    /// Home delivery. Free for subscriptions, flat fee for one-day orders.
    Delivery,
}

wire_enum!(DeliveryMethod, "delivery method", {
    Pickup => "pickup",
    Delivery => "delivery",
});

// =============================================================================
// Order Config
// =============================================================================

/// The complete purchasable configuration built by the wizard.
///
/// ## Lifecycle
/// ```text
/// OrderConfig::default() ──► wizard edits fields ──► order_to_search_params()
///                                                            │
///                                                      query string
///                                                            │
///        checkout: search_params_to_order() ──► new OrderConfig ──► compute_prices()
/// ```
/// The wizard's and the checkout's instances are unrelated values; only
/// the query string travels between them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfig {
    pub box_size: BoxSize,
    pub box_theme: BoxTheme,
    pub order_type: OrderType,
    #[ts(type = "10 | 30")]
    pub sub_duration: SubDuration,
    #[ts(type = "0 | 1 | 6 | 12")]
    pub bourek_option: BourekOption,
    pub hmiss_option: HmissOption,
    #[ts(type = "number")]
    pub salad_extra: SaladExtra,
    /// `YYYY-MM-DD`, or empty when no date has been picked.
    pub start_date: String,
}

impl Default for OrderConfig {
    /// Single traditional box, 30-day subscription starting on the first
    /// day of the campaign, no add-ons.
    fn default() -> Self {
        OrderConfig {
            box_size: BoxSize::Single,
            box_theme: BoxTheme::Traditional,
            order_type: OrderType::Subscription,
            sub_duration: SubDuration::Thirty,
            bourek_option: BourekOption::None,
            hmiss_option: HmissOption::None,
            salad_extra: SaladExtra::default(),
            start_date: RAMADAN_START.to_string(),
        }
    }
}

impl OrderConfig {
    #[inline]
    pub fn is_subscription(&self) -> bool {
        self.order_type == OrderType::Subscription
    }

    /// Number of delivery days covered by this order.
    ///
    /// Always 1 for one-day orders, whatever `sub_duration` still holds.
    pub fn days(&self) -> u32 {
        match self.order_type {
            OrderType::OneDay => 1,
            OrderType::Subscription => self.sub_duration.days(),
        }
    }

    /// True when any add-on is selected.
    pub fn has_addons(&self) -> bool {
        self.bourek_option != BourekOption::None
            || self.hmiss_option != HmissOption::None
            || self.salad_extra.count() > 0
    }
}

// =============================================================================
// Customer Info
// =============================================================================

/// Contact and delivery details collected in the wizard.
///
/// Carried alongside the order for the checkout hand-off only; it plays no
/// part in pricing. Empty strings mean "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub notes: String,
}

impl CustomerInfo {
    /// "First Last", trimmed.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
