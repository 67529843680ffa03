//! # Validation Module
//!
//! Checkout-side checks on what the customer typed.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Query decoding (codec)                                       │
//! │  └── Lenient: bad option values silently become defaults               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Required contact fields                                           │
//! │  ├── Phone and email format                                            │
//! │  ├── Address fields when delivering                                    │
//! │  └── Start date inside the campaign window                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Pricing                                                      │
//! │  └── Infallible on any OrderConfig                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use iftar_core::validation::validate_customer;
//! use iftar_core::types::{CustomerInfo, DeliveryMethod};
//!
//! let errors = validate_customer(&CustomerInfo::default(), DeliveryMethod::Pickup);
//! assert_eq!(errors.len(), 4); // first name, last name, phone, email
//! ```

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::checkout::CheckoutRequest;
use crate::codec::keys;
use crate::error::ValidationError;
use crate::schedule::{parse_date, CampaignWindow, DATE_FORMAT};
use crate::types::{CustomerInfo, DeliveryMethod, OrderConfig};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Something, `@`, something, `.`, something. No whitespace anywhere.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// Optional leading `+`, then at least seven digits, spaces, dashes or
/// parentheses.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?[\d\s\-()]{7,}$").expect("phone pattern compiles")
});

// =============================================================================
// Contact Validators
// =============================================================================

fn require(field: &str, value: &str, errors: &mut Vec<ValidationError>) {
    if value.trim().is_empty() {
        errors.push(ValidationError::Required {
            field: field.to_string(),
        });
    }
}

/// Checks an email address.
///
/// ```rust
/// use iftar_core::validation::validate_email;
///
/// assert!(validate_email("amina@example.com").is_ok());
/// assert!(validate_email("amina@example").is_err());
/// assert!(validate_email("").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    if email.trim().is_empty() {
        return Err(ValidationError::Required {
            field: keys::EMAIL.to_string(),
        });
    }

    if !EMAIL_RE.is_match(email.trim()) {
        return Err(ValidationError::InvalidFormat {
            field: keys::EMAIL.to_string(),
            reason: "enter a valid email address".to_string(),
        });
    }

    Ok(())
}

/// Checks a phone number.
///
/// ```rust
/// use iftar_core::validation::validate_phone;
///
/// assert!(validate_phone("+1 (514) 555-0199").is_ok());
/// assert!(validate_phone("call me").is_err());
/// ```
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    let phone = phone.trim();
    if phone.is_empty() {
        return Err(ValidationError::Required {
            field: keys::PHONE.to_string(),
        });
    }

    if !PHONE_RE.is_match(phone) {
        return Err(ValidationError::InvalidFormat {
            field: keys::PHONE.to_string(),
            reason: "enter a valid phone number".to_string(),
        });
    }

    Ok(())
}

/// Collects every problem with the contact details.
///
/// ## Rules
/// - First name, last name, phone and email are required
/// - Phone may only hold digits, spaces, dashes and parentheses (at least
///   seven), with an optional leading `+`
/// - Email must look like `name@domain.tld`
/// - Phone and email are checked after trimming
/// - For home delivery, address, city and postal code are also required
///
/// Fields are reported by their query-string key. An empty vector means
/// the details are complete.
pub fn validate_customer(info: &CustomerInfo, delivery: DeliveryMethod) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    require(keys::FIRST_NAME, &info.first_name, &mut errors);
    require(keys::LAST_NAME, &info.last_name, &mut errors);
    for check in [validate_phone(&info.phone), validate_email(&info.email)] {
        if let Err(err) = check {
            errors.push(err);
        }
    }

    if delivery == DeliveryMethod::Delivery {
        require(keys::ADDRESS, &info.address, &mut errors);
        require(keys::CITY, &info.city, &mut errors);
        require(keys::POSTAL_CODE, &info.postal_code, &mut errors);
    }

    errors
}

// =============================================================================
// Start Date Validators
// =============================================================================

/// Checks the order's start date against the campaign window.
///
/// ## Rules
/// - Empty means "not chosen yet" and passes
/// - Otherwise it must be a `YYYY-MM-DD` date inside the window
/// - A 10-day subscription must start early enough for all ten deliveries
pub fn validate_start_date(order: &OrderConfig) -> ValidationResult<()> {
    validate_start_date_in(order, &CampaignWindow::ramadan())
}

/// [`validate_start_date`] against an explicit window.
pub fn validate_start_date_in(order: &OrderConfig, window: &CampaignWindow) -> ValidationResult<()> {
    if order.start_date.is_empty() {
        return Ok(());
    }

    let Some(date) = parse_date(&order.start_date) else {
        return Err(ValidationError::InvalidFormat {
            field: keys::START.to_string(),
            reason: "expected YYYY-MM-DD".to_string(),
        });
    };

    let latest = window.latest_start(order);
    if date < window.start || date > latest {
        return Err(ValidationError::OutsideWindow {
            field: keys::START.to_string(),
            start: window.start.format(DATE_FORMAT).to_string(),
            end: latest.format(DATE_FORMAT).to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Checkout
// =============================================================================

/// Runs every check on a decoded checkout request.
///
/// All failures are returned together in [`ValidationError::Invalid`] so the
/// form can highlight every field at once.
pub fn validate_checkout(request: &CheckoutRequest) -> ValidationResult<()> {
    let mut errors = validate_customer(&request.customer, request.delivery);

    if let Err(err) = validate_start_date(&request.order) {
        errors.push(err);
    }

    if errors.is_empty() {
        return Ok(());
    }

    debug!(count = errors.len(), "checkout request failed validation");
    Err(ValidationError::Invalid(errors))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OrderType, SubDuration};

    fn complete_customer() -> CustomerInfo {
        CustomerInfo {
            first_name: "Amina".to_string(),
            last_name: "Benali".to_string(),
            phone: "514 555 0199".to_string(),
            email: "amina@example.com".to_string(),
            ..CustomerInfo::default()
        }
    }

    fn fields(errors: &[ValidationError]) -> Vec<&str> {
        errors.iter().filter_map(ValidationError::field).collect()
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@b.co").is_ok());
        assert!(validate_email("first.last+tag@mail.example.org").is_ok());

        assert!(matches!(
            validate_email("   "),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_email("no-at-sign.com"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(validate_email("a@b").is_err());
        assert!(validate_email("a b@c.de").is_err());
        assert!(validate_email("a@@b.de").is_err());
    }

    #[test]
    fn test_email_is_trimmed() {
        assert!(validate_email(" amina@example.com ").is_ok());

        let info = CustomerInfo {
            email: "  amina@example.com\t".to_string(),
            ..complete_customer()
        };
        assert!(validate_customer(&info, DeliveryMethod::Pickup).is_empty());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("+1 (514) 555-0199").is_ok());
        assert!(validate_phone("514 555 0199").is_ok());
        assert!(validate_phone("  5145550199  ").is_ok());

        assert!(matches!(
            validate_phone(" "),
            Err(ValidationError::Required { .. })
        ));
        for bad in ["call me", "12", "555-01a9", "++15145550199"] {
            assert!(
                matches!(validate_phone(bad), Err(ValidationError::InvalidFormat { .. })),
                "{bad:?} accepted"
            );
        }
    }

    #[test]
    fn test_bad_phone_reported() {
        for phone in ["call me", "12"] {
            let info = CustomerInfo {
                phone: phone.to_string(),
                ..complete_customer()
            };
            let errors = validate_customer(&info, DeliveryMethod::Pickup);
            assert_eq!(fields(&errors), vec!["phone"]);
            assert_eq!(
                errors[0].to_string(),
                "phone has invalid format: enter a valid phone number"
            );
        }
    }

    #[test]
    fn test_complete_pickup_customer() {
        assert!(validate_customer(&complete_customer(), DeliveryMethod::Pickup).is_empty());
    }

    #[test]
    fn test_blank_fields_reported() {
        let info = CustomerInfo {
            first_name: "  ".to_string(),
            ..complete_customer()
        };
        let errors = validate_customer(&info, DeliveryMethod::Pickup);
        assert_eq!(fields(&errors), vec!["firstName"]);
    }

    #[test]
    fn test_delivery_requires_address() {
        let errors = validate_customer(&complete_customer(), DeliveryMethod::Delivery);
        assert_eq!(fields(&errors), vec!["address", "city", "postalCode"]);

        let info = CustomerInfo {
            address: "12 rue Saint-Denis".to_string(),
            city: "Montréal".to_string(),
            postal_code: "H2X 1K4".to_string(),
            ..complete_customer()
        };
        assert!(validate_customer(&info, DeliveryMethod::Delivery).is_empty());
    }

    #[test]
    fn test_start_date_rules() {
        let mut order = OrderConfig::default();
        assert!(validate_start_date(&order).is_ok());

        order.start_date = String::new();
        assert!(validate_start_date(&order).is_ok());

        order.start_date = "18/02/2026".to_string();
        assert!(matches!(
            validate_start_date(&order),
            Err(ValidationError::InvalidFormat { .. })
        ));

        order.start_date = "2026-03-20".to_string();
        assert!(matches!(
            validate_start_date(&order),
            Err(ValidationError::OutsideWindow { .. })
        ));
    }

    #[test]
    fn test_ten_day_start_must_fit() {
        let mut order = OrderConfig {
            sub_duration: SubDuration::Ten,
            start_date: "2026-03-10".to_string(),
            ..OrderConfig::default()
        };
        assert!(validate_start_date(&order).is_ok());

        order.start_date = "2026-03-11".to_string();
        let err = validate_start_date(&order).unwrap_err();
        assert_eq!(
            err.to_string(),
            "start must be between 2026-02-18 and 2026-03-10"
        );

        // The same date is fine for a one-day order.
        order.order_type = OrderType::OneDay;
        assert!(validate_start_date(&order).is_ok());
    }

    #[test]
    fn test_validate_checkout_collects_everything() {
        let request = CheckoutRequest::from_query("type=one-day&start=2027-01-01&delivery=delivery");
        let Err(ValidationError::Invalid(errors)) = validate_checkout(&request) else {
            panic!("expected a combined validation error");
        };
        assert_eq!(
            fields(&errors),
            vec![
                "firstName",
                "lastName",
                "phone",
                "email",
                "address",
                "city",
                "postalCode",
                "start"
            ]
        );
    }

    #[test]
    fn test_validate_checkout_passes() {
        let request = CheckoutRequest::new(
            OrderConfig::default(),
            complete_customer(),
            DeliveryMethod::Pickup,
        );
        assert!(validate_checkout(&request).is_ok());
    }
}
