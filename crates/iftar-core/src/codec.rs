//! # Order Codec
//!
//! Converts an [`OrderConfig`] to and from the flat query string that
//! carries it from the wizard to the checkout.
//!
//! ## Wire Format
//! ```text
//! box=single&theme=traditional&type=subscription&duration=30
//!   &boureks=0&hmiss=none&salad=0&start=2026-02-18
//! ```
//!
//! ## Decode Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The query string is user-editable and therefore untrusted.             │
//! │                                                                         │
//! │  key       accepted                     anything else                   │
//! │  ───────   ──────────────────────────   ─────────────                   │
//! │  box       single | family              single                          │
//! │  theme     traditional | mixed | light  traditional                     │
//! │  type      one-day | subscription       subscription                    │
//! │  duration  10 | 30                      30                              │
//! │  boureks   number equal to 0|1|6|12     0                               │
//! │  hmiss     none | small | large         none                            │
//! │  salad     number, clamped to 0..=4     0                               │
//! │  start     verbatim                     ""                              │
//! │                                                                         │
//! │  Decoding never fails. Substitutions are reported as debug events.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The round trip is not fully canonical: `duration` is always written, even
//! for one-day orders, so a stale duration survives encode/decode.

use std::str::FromStr;

use tracing::debug;
use url::form_urlencoded::{self, Serializer};

use crate::types::{BourekOption, OrderConfig, SaladExtra};

/// Query-string keys.
pub mod keys {
    pub const BOX: &str = "box";
    pub const THEME: &str = "theme";
    pub const TYPE: &str = "type";
    pub const DURATION: &str = "duration";
    pub const BOUREKS: &str = "boureks";
    pub const HMISS: &str = "hmiss";
    pub const SALAD: &str = "salad";
    pub const START: &str = "start";

    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const PHONE: &str = "phone";
    pub const EMAIL: &str = "email";
    pub const ADDRESS: &str = "address";
    pub const CITY: &str = "city";
    pub const POSTAL_CODE: &str = "postalCode";
    pub const NOTES: &str = "notes";
    pub const DELIVERY: &str = "delivery";
}

// =============================================================================
// Search Params
// =============================================================================

/// Decoded `application/x-www-form-urlencoded` pairs.
///
/// A leading `?` is ignored, `+` and percent escapes are decoded, and when a
/// key repeats the first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pairs: Vec<(String, String)>,
}

impl SearchParams {
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        SearchParams {
            pairs: form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect(),
        }
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Value for `key`, or `""` when absent.
    pub fn get_or_empty(&self, key: &str) -> String {
        self.get(key).unwrap_or_default().to_string()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl FromStr for SearchParams {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SearchParams::parse(s))
    }
}

// =============================================================================
// Encode
// =============================================================================

/// Serializes an order into its query string.
///
/// ```rust
/// use iftar_core::codec::order_to_search_params;
/// use iftar_core::types::OrderConfig;
///
/// assert_eq!(
///     order_to_search_params(&OrderConfig::default()),
///     "box=single&theme=traditional&type=subscription&duration=30\
///      &boureks=0&hmiss=none&salad=0&start=2026-02-18"
/// );
/// ```
pub fn order_to_search_params(order: &OrderConfig) -> String {
    let mut serializer = Serializer::new(String::new());
    append_order(&mut serializer, order);
    serializer.finish()
}

/// Appends the order pairs to an existing serializer.
///
/// `start` is omitted entirely when no date is set, so "no date" stays
/// distinguishable from any literal value.
pub(crate) fn append_order(serializer: &mut Serializer<'_, String>, order: &OrderConfig) {
    serializer
        .append_pair(keys::BOX, order.box_size.as_str())
        .append_pair(keys::THEME, order.box_theme.as_str())
        .append_pair(keys::TYPE, order.order_type.as_str())
        .append_pair(keys::DURATION, &order.sub_duration.to_string())
        .append_pair(keys::BOUREKS, &order.bourek_option.to_string())
        .append_pair(keys::HMISS, order.hmiss_option.as_str())
        .append_pair(keys::SALAD, &order.salad_extra.to_string());

    if !order.start_date.is_empty() {
        serializer.append_pair(keys::START, &order.start_date);
    }
}

// =============================================================================
// Decode
// =============================================================================

/// Rebuilds an order from a query string. Never fails.
pub fn search_params_to_order(query: &str) -> OrderConfig {
    decode_order(&SearchParams::parse(query))
}

/// Rebuilds an order from already-parsed params. Never fails.
pub fn decode_order(params: &SearchParams) -> OrderConfig {
    if params.is_empty() {
        debug!("empty query, decoding the default order without a start date");
    }

    OrderConfig {
        box_size: closed_or_default(params, keys::BOX),
        box_theme: closed_or_default(params, keys::THEME),
        order_type: closed_or_default(params, keys::TYPE),
        sub_duration: closed_or_default(params, keys::DURATION),
        bourek_option: decode_boureks(params.get(keys::BOUREKS)),
        hmiss_option: closed_or_default(params, keys::HMISS),
        salad_extra: decode_salad(params.get(keys::SALAD)),
        start_date: params.get_or_empty(keys::START),
    }
}

/// Strict parse of a closed enum, falling back to its default.
fn closed_or_default<T>(params: &SearchParams, key: &'static str) -> T
where
    T: FromStr + Default,
{
    match params.get(key) {
        None => T::default(),
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            debug!(key, raw, "unrecognised query value, using default");
            T::default()
        }),
    }
}

/// Any number equal to a sold pack size (`6`, `6.0`, ` 6 `, `6e0`), else 0.
fn decode_boureks(raw: Option<&str>) -> BourekOption {
    let Some(raw) = raw else {
        return BourekOption::None;
    };

    let option = parse_number(raw)
        .filter(|n| n.fract() == 0.0 && (0.0..=f64::from(u8::MAX)).contains(n))
        .and_then(|n| BourekOption::try_from(n as u8).ok());

    option.unwrap_or_else(|| {
        debug!(key = keys::BOUREKS, raw, "unsold bourek quantity, using 0");
        BourekOption::None
    })
}

/// Parsed as a number (non-numeric counts as 0), clamped to
/// `0..=SaladExtra::MAX`, then truncated to a whole portion count.
fn decode_salad(raw: Option<&str>) -> SaladExtra {
    let Some(raw) = raw else {
        return SaladExtra::default();
    };

    let n = parse_number(raw).filter(|n| !n.is_nan()).unwrap_or(0.0);
    let clamped = n.clamp(0.0, f64::from(SaladExtra::MAX)).trunc();

    if clamped != n {
        debug!(key = keys::SALAD, raw, clamped, "salad count adjusted");
    }

    SaladExtra::saturating(clamped as u8)
}

/// Lenient decimal parse: surrounding whitespace is ignored, an empty
/// string is zero, and `Infinity` is accepted. Returns `None` for anything
/// that is not a plain decimal literal (no `inf`/`nan` spellings).
fn parse_number(raw: &str) -> Option<f64> {
    let s = raw.trim();
    match s {
        "" => return Some(0.0),
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    let is_decimal = s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !is_decimal {
        return None;
    }

    s.parse::<f64>().ok()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BoxSize, BoxTheme, HmissOption, OrderType, SubDuration};

    #[test]
    fn test_encode_default() {
        assert_eq!(
            order_to_search_params(&OrderConfig::default()),
            "box=single&theme=traditional&type=subscription&duration=30&boureks=0&hmiss=none&salad=0&start=2026-02-18"
        );
    }

    #[test]
    fn test_encode_omits_empty_start_but_keeps_duration() {
        let order = OrderConfig {
            order_type: OrderType::OneDay,
            sub_duration: SubDuration::Ten,
            start_date: String::new(),
            ..OrderConfig::default()
        };
        let query = order_to_search_params(&order);
        assert!(query.contains("type=one-day"));
        assert!(query.contains("duration=10"));
        assert!(!query.contains("start"));
    }

    #[test]
    fn test_decode_empty_query_is_default_without_start() {
        let order = search_params_to_order("");
        assert_eq!(
            order,
            OrderConfig {
                start_date: String::new(),
                ..OrderConfig::default()
            }
        );
    }

    #[test]
    fn test_decode_full_query() {
        let order = search_params_to_order(
            "?box=family&theme=light&type=one-day&duration=10&boureks=12&hmiss=large&salad=3&start=2026-03-01",
        );
        assert_eq!(order.box_size, BoxSize::Family);
        assert_eq!(order.box_theme, BoxTheme::Light);
        assert_eq!(order.order_type, OrderType::OneDay);
        assert_eq!(order.sub_duration, SubDuration::Ten);
        assert_eq!(order.bourek_option, BourekOption::Twelve);
        assert_eq!(order.hmiss_option, HmissOption::Large);
        assert_eq!(order.salad_extra.count(), 3);
        assert_eq!(order.start_date, "2026-03-01");
    }

    #[test]
    fn test_decode_garbage_falls_back() {
        let order = search_params_to_order(
            "box=FAMILY&theme=spicy&type=weekly&duration=30days&boureks=7&hmiss=huge&salad=lots",
        );
        assert_eq!(order.box_size, BoxSize::Single);
        assert_eq!(order.box_theme, BoxTheme::Traditional);
        assert_eq!(order.order_type, OrderType::Subscription);
        assert_eq!(order.sub_duration, SubDuration::Thirty);
        assert_eq!(order.bourek_option, BourekOption::None);
        assert_eq!(order.hmiss_option, HmissOption::None);
        assert_eq!(order.salad_extra.count(), 0);
        assert_eq!(order.start_date, "");
    }

    #[test]
    fn test_decode_boureks_numeric_forms() {
        let decode = |raw| decode_boureks(Some(raw));
        assert_eq!(decode("6"), BourekOption::Six);
        assert_eq!(decode(" 6 "), BourekOption::Six);
        assert_eq!(decode("6.0"), BourekOption::Six);
        assert_eq!(decode("1.2e1"), BourekOption::Twelve);
        assert_eq!(decode(""), BourekOption::None);
        assert_eq!(decode("7"), BourekOption::None);
        assert_eq!(decode("1.5"), BourekOption::None);
        assert_eq!(decode("-6"), BourekOption::None);
        assert_eq!(decode("256"), BourekOption::None);
        assert_eq!(decode("inf"), BourekOption::None);
        assert_eq!(decode("six"), BourekOption::None);
        assert_eq!(decode_boureks(None), BourekOption::None);
    }

    #[test]
    fn test_decode_boureks_is_decimal_only() {
        for raw in ["0x6", "0X6", "0b110", "0o6", "0xC"] {
            assert_eq!(decode_boureks(Some(raw)), BourekOption::None, "{raw}");
        }
        assert_eq!(search_params_to_order("boureks=0x6").bourek_option, BourekOption::None);
    }

    #[test]
    fn test_decode_salad_clamps() {
        let decode = |raw| decode_salad(Some(raw)).count();
        assert_eq!(decode("2"), 2);
        assert_eq!(decode("9"), 4);
        assert_eq!(decode("-3"), 0);
        assert_eq!(decode("Infinity"), 4);
        assert_eq!(decode("-Infinity"), 0);
        assert_eq!(decode("NaN"), 0);
        assert_eq!(decode("nan"), 0);
        assert_eq!(decode("abc"), 0);
        assert_eq!(decode("2.7"), 2);
        assert_eq!(decode(""), 0);
        assert_eq!(decode_salad(None).count(), 0);
    }

    #[test]
    fn test_decode_duration_is_exact() {
        assert_eq!(search_params_to_order("duration=10").sub_duration, SubDuration::Ten);
        assert_eq!(search_params_to_order("duration=10.0").sub_duration, SubDuration::Thirty);
        assert_eq!(search_params_to_order("duration=%2010").sub_duration, SubDuration::Thirty);
    }

    #[test]
    fn test_decode_start_verbatim() {
        // No window check at this layer.
        assert_eq!(search_params_to_order("start=1999-01-01").start_date, "1999-01-01");
        assert_eq!(search_params_to_order("start=not+a+date").start_date, "not a date");
        assert_eq!(search_params_to_order("start=").start_date, "");
    }

    #[test]
    fn test_first_occurrence_wins() {
        let order = search_params_to_order("box=family&box=single");
        assert_eq!(order.box_size, BoxSize::Family);
    }

    #[test]
    fn test_round_trip_keeps_stale_duration() {
        let order = OrderConfig {
            box_size: BoxSize::Family,
            box_theme: BoxTheme::Mixed,
            order_type: OrderType::OneDay,
            sub_duration: SubDuration::Ten,
            bourek_option: BourekOption::One,
            hmiss_option: HmissOption::Small,
            salad_extra: SaladExtra::saturating(4),
            start_date: "2026-03-05".to_string(),
        };
        assert_eq!(search_params_to_order(&order_to_search_params(&order)), order);
    }

    #[test]
    fn test_search_params_accessors() {
        let params: SearchParams = "a=1&b=two+words&c=%C3%A9".parse().unwrap();
        assert_eq!(params.get("a"), Some("1"));
        assert_eq!(params.get("b"), Some("two words"));
        assert_eq!(params.get("c"), Some("\u{e9}"));
        assert_eq!(params.get_or_empty("missing"), "");
        assert!(SearchParams::parse("?").is_empty());
    }
}
