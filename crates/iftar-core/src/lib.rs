//! # iftar-core: Pure Ordering Logic for IftarBox
//!
//! This crate prices and serializes iftar box orders. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        IftarBox Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Order Wizard (4 steps)                          │   │
//! │  │    Configure Box ──► Add-ons ──► Your Info ──► Review           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ ?box=…&type=…&delivery=…               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 Checkout (recomputes the quote)                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ iftar-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │   │
//! │  │   │ tables  │ │  tier   │ │ pricing │ │  codec  │ │checkout │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌─────────┐             │   │
//! │  │   │  money  │ │ format  │ │validation│ │schedule │             │   │
//! │  │   └─────────┘ └─────────┘ └──────────┘ └─────────┘             │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Order, customer and option types
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`tables`] - Per-tier price tables
//! - [`tier`] - Tier resolver
//! - [`pricing`] - Price breakdown calculation
//! - [`codec`] - Order <-> query string
//! - [`checkout`] - Wizard -> checkout hand-off
//! - [`format`] - Amount display
//! - [`validation`] - Contact details and start date checks
//! - [`schedule`] - Campaign window and delivery dates
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use iftar_core::{compute_prices, order_to_search_params, search_params_to_order};
//! use iftar_core::{DeliveryMethod, OrderConfig, OrderType};
//!
//! let order = OrderConfig { order_type: OrderType::OneDay, ..OrderConfig::default() };
//!
//! // Wizard side
//! let query = order_to_search_params(&order);
//!
//! // Checkout side
//! let decoded = search_params_to_order(&query);
//! let prices = compute_prices(&decoded, DeliveryMethod::Delivery);
//!
//! assert_eq!(prices.grand_total.to_string(), "28");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod checkout;
pub mod codec;
pub mod error;
pub mod format;
pub mod money;
pub mod pricing;
pub mod schedule;
pub mod tables;
pub mod tier;
pub mod types;
pub mod validation;


// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use checkout::CheckoutRequest;
pub use codec::{order_to_search_params, search_params_to_order};
pub use error::{CoreError, CoreResult, ValidationError};
pub use format::format_amount;
pub use money::Money;
pub use pricing::{compute_prices, PriceBreakdown};
pub use tier::{resolve_tier, PriceTier};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// First day of the Ramadan 2026 campaign.
pub const RAMADAN_START: &str = "2026-02-18";

/// Last day of the Ramadan 2026 campaign.
pub const RAMADAN_END: &str = "2026-03-19";
