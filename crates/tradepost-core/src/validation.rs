//! # Validation Module
//!
//! Input validation for the forms around the cart: quote requests, messages,
//! search boxes.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend                                                     │
//! │  ├── Basic format checks (empty, length, <input min=moq>)              │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Storefront command (Rust)                                    │
//! │  └── THIS MODULE: business rule validation                             │
//! │                                                                         │
//! │  NOT HERE: the cart store. It accepts any quantity and never fails.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tradepost_core::validation::{validate_message_content, validate_search_query};
//!
//! assert_eq!(validate_message_content("  hello ").unwrap(), "hello");
//! assert!(validate_message_content("   ").is_err());
//! assert!(validate_search_query(&"x".repeat(101)).is_err());
//! ```

use chrono::NaiveDate;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::Product;
use crate::{MAX_QUOTE_QUANTITY, MAX_REQUIREMENTS_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest message a buyer can send in one go.
pub const MAX_MESSAGE_LEN: usize = 5000;

/// Longest search box input.
pub const MAX_SEARCH_LEN: usize = 100;

/// Date format of the quote deadline picker.
pub const DEADLINE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// String Validators
// =============================================================================

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (matches everything)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_SEARCH_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_SEARCH_LEN,
        });
    }

    Ok(query.to_string())
}

/// Validates a chat message.
///
/// ## Rules
/// - Must not be blank
/// - At most 5000 characters after trimming
pub fn validate_message_content(content: &str) -> ValidationResult<String> {
    let content = content.trim();

    if content.is_empty() {
        return Err(ValidationError::Required {
            field: "content".to_string(),
        });
    }

    if content.chars().count() > MAX_MESSAGE_LEN {
        return Err(ValidationError::TooLong {
            field: "content".to_string(),
            max: MAX_MESSAGE_LEN,
        });
    }

    Ok(content.to_string())
}

/// Validates the free-text requirements of a quote request.
///
/// May be empty; at most [`MAX_REQUIREMENTS_LEN`] characters.
pub fn validate_requirements(requirements: &str) -> ValidationResult<String> {
    let requirements = requirements.trim();

    if requirements.chars().count() > MAX_REQUIREMENTS_LEN {
        return Err(ValidationError::TooLong {
            field: "requirements".to_string(),
            max: MAX_REQUIREMENTS_LEN,
        });
    }

    Ok(requirements.to_string())
}

/// Parses and checks a quote deadline.
///
/// ## Rules
/// - Blank or absent means "no deadline"
/// - Must be `YYYY-MM-DD`
/// - Must not be before `today`
pub fn validate_deadline(raw: Option<&str>, today: NaiveDate) -> ValidationResult<Option<NaiveDate>> {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return Ok(None);
    };

    let date = NaiveDate::parse_from_str(raw, DEADLINE_FORMAT).map_err(|e| {
        ValidationError::InvalidFormat {
            field: "deadline".to_string(),
            reason: e.to_string(),
        }
    })?;

    if date < today {
        return Err(ValidationError::InvalidFormat {
            field: "deadline".to_string(),
            reason: "must not be in the past".to_string(),
        });
    }

    Ok(Some(date))
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an optional target unit price: if given, it must be positive.
pub fn validate_target_price(price: Option<Money>) -> ValidationResult<Option<Money>> {
    match price {
        Some(p) if !p.is_positive() => Err(ValidationError::MustBePositive {
            field: "targetPrice".to_string(),
        }),
        other => Ok(other),
    }
}

/// Checks a quantity against the product's minimum order quantity.
///
/// ## Note
/// This is the advisory MOQ check. The cart store never calls it; the
/// storefront uses it for quote requests and for the cart's MOQ warnings.
///
/// ## Example
/// ```rust
/// use tradepost_core::validation::validate_moq;
/// # use tradepost_core::types::test_support::sample_product;
///
/// let product = sample_product("prod-001", 1250); // moq = 10
/// assert!(validate_moq(&product, 10).is_ok());
/// assert!(validate_moq(&product, 9).is_err());
/// ```
pub fn validate_moq(product: &Product, quantity: i64) -> CoreResult<()> {
    if quantity < product.moq {
        return Err(CoreError::BelowMinimumOrder {
            product_id: product.id.clone(),
            requested: quantity,
            moq: product.moq,
        });
    }
    Ok(())
}

/// Validates a quote request quantity.
///
/// ## Rules
/// - Must be positive
/// - At most [`MAX_QUOTE_QUANTITY`]
/// - At least the product's MOQ
pub fn validate_quote_quantity(product: &Product, quantity: i64) -> CoreResult<()> {
    if quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        }
        .into());
    }

    if quantity > MAX_QUOTE_QUANTITY {
        return Err(CoreError::QuantityTooLarge {
            requested: quantity,
            max: MAX_QUOTE_QUANTITY,
        });
    }

    validate_moq(product, quantity)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::test_support::sample_product;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DEADLINE_FORMAT).unwrap()
    }

    #[test]
    fn test_search_query() {
        assert_eq!(validate_search_query("  earbuds ").unwrap(), "earbuds");
        assert_eq!(validate_search_query("").unwrap(), "");
        assert!(validate_search_query(&"a".repeat(100)).is_ok());
        assert!(validate_search_query(&"a".repeat(101)).is_err());
    }

    #[test]
    fn test_message_content() {
        assert!(matches!(
            validate_message_content(" \n "),
            Err(ValidationError::Required { .. })
        ));
        assert!(validate_message_content(&"x".repeat(MAX_MESSAGE_LEN + 1)).is_err());
        assert_eq!(validate_message_content(" Need 500 units ").unwrap(), "Need 500 units");
    }

    #[test]
    fn test_requirements() {
        assert_eq!(validate_requirements("").unwrap(), "");
        assert!(validate_requirements(&"r".repeat(MAX_REQUIREMENTS_LEN)).is_ok());
        assert!(validate_requirements(&"r".repeat(MAX_REQUIREMENTS_LEN + 1)).is_err());
    }

    #[test]
    fn test_deadline() {
        let today = day("2026-10-18");

        assert_eq!(validate_deadline(None, today).unwrap(), None);
        assert_eq!(validate_deadline(Some("  "), today).unwrap(), None);
        assert_eq!(
            validate_deadline(Some("2026-10-18"), today).unwrap(),
            Some(today)
        );
        assert_eq!(
            validate_deadline(Some("2026-12-01"), today).unwrap(),
            Some(day("2026-12-01"))
        );
        assert!(validate_deadline(Some("2026-10-17"), today).is_err());
        assert!(validate_deadline(Some("18/10/2026"), today).is_err());
    }

    #[test]
    fn test_target_price() {
        assert_eq!(validate_target_price(None).unwrap(), None);
        assert!(validate_target_price(Some(Money::from_cents(1100))).is_ok());
        assert!(validate_target_price(Some(Money::zero())).is_err());
        assert!(validate_target_price(Some(Money::from_cents(-1))).is_err());
    }

    #[test]
    fn test_quote_quantity() {
        let product = sample_product("prod-001", 1250);

        assert!(validate_quote_quantity(&product, 10).is_ok());
        assert!(matches!(
            validate_quote_quantity(&product, 9),
            Err(CoreError::BelowMinimumOrder { moq: 10, .. })
        ));
        assert!(matches!(
            validate_quote_quantity(&product, 0),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            validate_quote_quantity(&product, MAX_QUOTE_QUANTITY + 1),
            Err(CoreError::QuantityTooLarge { .. })
        ));
    }
}
