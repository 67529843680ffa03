//! # Delivery Schedule
//!
//! Which days an order is delivered on, inside the campaign window.
//!
//! ```text
//!            Feb 18                                       Mar 19
//! window     ├───────────────────── 30 days ────────────────────┤
//! sub-30     ██████████████████████████████████████████████████████   fixed
//! sub-10                 ██████████████████                          start ≤ Mar 10
//! one-day                      ██                                    any day
//! ```

use chrono::{Days, NaiveDate};

use crate::types::{OrderConfig, OrderType, SubDuration};

/// Date format used on the wire and in the calendar.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// First campaign day; matches [`crate::RAMADAN_START`].
const FIRST_DAY: NaiveDate = campaign_day(2, 18);

/// Last campaign day; matches [`crate::RAMADAN_END`].
const LAST_DAY: NaiveDate = campaign_day(3, 19);

/// Evaluated at compile time: an invalid date fails the build.
const fn campaign_day(month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(2026, month, day) {
        Some(date) => date,
        None => panic!("campaign day is not a calendar date"),
    }
}

/// Inclusive date range during which deliveries happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CampaignWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl CampaignWindow {
    /// Ramadan 2026: 18 February to 19 March.
    pub const fn ramadan() -> Self {
        CampaignWindow {
            start: FIRST_DAY,
            end: LAST_DAY,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of days in the window, both ends included.
    pub fn len_days(&self) -> u32 {
        // Bounded by the window, which is a few weeks long.
        (self.end - self.start).num_days() as u32 + 1
    }

    /// Last day a run of `days` consecutive deliveries can start on and
    /// still end inside the window.
    pub fn latest_start_for(&self, days: u32) -> NaiveDate {
        let back = u64::from(days.saturating_sub(1));
        self.end
            .checked_sub_days(Days::new(back))
            .filter(|date| *date >= self.start)
            .unwrap_or(self.start)
    }

    /// Latest start the calendar allows for this order.
    ///
    /// A 10-day subscription must leave room for all ten deliveries. Other
    /// orders may start on any campaign day.
    pub fn latest_start(&self, order: &OrderConfig) -> NaiveDate {
        match (order.order_type, order.sub_duration) {
            (OrderType::Subscription, SubDuration::Ten) => self.latest_start_for(10),
            _ => self.end,
        }
    }

    /// Whether the customer may pick `date` as the start of this order.
    ///
    /// The 30-day subscription always covers the whole window, so no start
    /// is selectable for it.
    pub fn is_selectable_start(&self, order: &OrderConfig, date: NaiveDate) -> bool {
        if !self.contains(date) {
            return false;
        }
        match (order.order_type, order.sub_duration) {
            (OrderType::Subscription, SubDuration::Thirty) => false,
            _ => date <= self.latest_start(order),
        }
    }

    /// Every delivery day covered by the order.
    ///
    /// The 30-day subscription covers the window from its first day. Other
    /// orders run for `order.days()` consecutive days from the chosen start;
    /// without a parseable start date there is nothing to deliver yet.
    pub fn delivery_dates(&self, order: &OrderConfig) -> Vec<NaiveDate> {
        let first = match (order.order_type, order.sub_duration) {
            (OrderType::Subscription, SubDuration::Thirty) => Some(self.start),
            _ => parse_date(&order.start_date),
        };

        let Some(first) = first else {
            return Vec::new();
        };

        first
            .iter_days()
            .take(order.days() as usize)
            .collect()
    }
}

impl Default for CampaignWindow {
    fn default() -> Self {
        CampaignWindow::ramadan()
    }
}

/// Parses a `YYYY-MM-DD` string. Empty or malformed input gives `None`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// True when `date` falls inside the Ramadan campaign.
pub fn is_campaign_day(date: NaiveDate) -> bool {
    CampaignWindow::ramadan().contains(date)
}
