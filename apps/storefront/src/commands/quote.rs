//! # Quote Commands
//!
//! Commands for requesting and tracking supplier quotations.
//!
//! ## Submission Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Request for Quotation                                │
//! │                                                                         │
//! │  QuoteRequestForm                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌───────────────────────────────────────────┐                         │
//! │  │  1. Product exists?           NOT_FOUND   │                         │
//! │  │  2. 0 < quantity <= 1,000,000 VALIDATION  │                         │
//! │  │  3. quantity >= MOQ           BELOW_MOQ   │                         │
//! │  │  4. target price > 0          VALIDATION  │                         │
//! │  │  5. requirements <= 2000      VALIDATION  │                         │
//! │  │  6. deadline YYYY-MM-DD, not  VALIDATION  │                         │
//! │  │     in the past                           │                         │
//! │  └───────────────────────────────────────────┘                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  QuoteRequest { id: quote-<uuid>, status: Pending }                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{debug, info};
use tradepost_catalog::Catalog;
use tradepost_core::validation::{
    validate_deadline, validate_quote_quantity, validate_requirements, validate_target_price,
};
use tradepost_core::{Money, QuoteRequest, QuoteStatus, User};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::QuoteBook;

/// The quote request form as the frontend submits it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequestForm {
    pub product_id: String,
    pub quantity: i64,
    #[serde(default)]
    pub target_price: Option<Money>,
    #[serde(default)]
    pub requirements: String,
    /// `YYYY-MM-DD`; blank means no deadline.
    #[serde(default)]
    pub deadline: Option<String>,
}

/// Validates and stores a quote request for the signed-in buyer.
pub fn submit_quote_request(
    catalog: &Catalog,
    quotes: &mut QuoteBook,
    buyer: &User,
    form: QuoteRequestForm,
) -> Result<QuoteRequest, ApiError> {
    submit_at(catalog, quotes, buyer, form, Utc::now())
}

fn submit_at(
    catalog: &Catalog,
    quotes: &mut QuoteBook,
    buyer: &User,
    form: QuoteRequestForm,
    now: DateTime<Utc>,
) -> Result<QuoteRequest, ApiError> {
    debug!(product_id = %form.product_id, quantity = %form.quantity, "submit_quote_request command");

    let product = catalog.products().get_by_id(&form.product_id)?;
    validate_quote_quantity(&product, form.quantity)?;
    let target_price = validate_target_price(form.target_price)?;
    let requirements = validate_requirements(&form.requirements)?;
    let deadline = validate_deadline(form.deadline.as_deref(), now.date_naive())?;

    let request = QuoteRequest {
        id: format!("quote-{}", Uuid::new_v4()),
        product_id: product.id.clone(),
        supplier_id: product.supplier.id.clone(),
        buyer_id: buyer.id.clone(),
        quantity: form.quantity,
        target_price,
        requirements,
        deadline,
        status: QuoteStatus::Pending,
        created_at: now,
        updated_at: now,
    };

    info!(
        request_id = %request.id,
        supplier_id = %request.supplier_id,
        quantity = request.quantity,
        "Quote request submitted"
    );
    quotes.insert(request.clone());
    Ok(request)
}

/// Lists the buyer's quote requests, newest first.
pub fn list_quote_requests(quotes: &QuoteBook, status: Option<QuoteStatus>) -> Vec<QuoteRequest> {
    debug!(status = ?status, "list_quote_requests command");
    quotes.list(status)
}

/// Moves a quote request through its lifecycle.
///
/// ## Errors
/// - `NOT_FOUND` for an unknown request id
/// - `BUSINESS_LOGIC` if the transition is not allowed
pub fn update_quote_status(
    quotes: &mut QuoteBook,
    request_id: &str,
    status: QuoteStatus,
) -> Result<QuoteRequest, ApiError> {
    debug!(request_id = %request_id, status = ?status, "update_quote_status command");
    Ok(quotes.update_status(request_id, status, Utc::now())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use chrono::NaiveDate;

    fn setup() -> (Catalog, QuoteBook) {
        (Catalog::load_embedded().unwrap(), QuoteBook::new())
    }

    fn form(product_id: &str, quantity: i64) -> QuoteRequestForm {
        QuoteRequestForm {
            product_id: product_id.to_string(),
            quantity,
            target_price: None,
            requirements: String::new(),
            deadline: None,
        }
    }

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-06-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_submit_valid_request() {
        let (catalog, mut quotes) = setup();
        let buyer = catalog.buyer().clone();
        let mut request_form = form("prod-001", 500);
        request_form.target_price = Some(Money::from_cents(1100));
        request_form.requirements = "  Custom logo on the case  ".to_string();
        request_form.deadline = Some("2024-07-15".to_string());

        let request = submit_at(&catalog, &mut quotes, &buyer, request_form, now()).unwrap();

        assert!(request.id.starts_with("quote-"));
        assert_eq!(request.supplier_id, "sup-001");
        assert_eq!(request.buyer_id, "user-001");
        assert_eq!(request.status, QuoteStatus::Pending);
        assert_eq!(request.requirements, "Custom logo on the case");
        assert_eq!(request.deadline, NaiveDate::from_ymd_opt(2024, 7, 15));
        assert_eq!(request.created_at, now());
        assert_eq!(quotes.len(), 1);
    }

    #[test]
    fn test_below_moq_rejected() {
        let (catalog, mut quotes) = setup();
        let buyer = catalog.buyer().clone();

        let err = submit_at(&catalog, &mut quotes, &buyer, form("prod-001", 99), now()).unwrap_err();
        assert_eq!(err.code, ErrorCode::BelowMoq);
        assert!(quotes.is_empty());
    }

    #[test]
    fn test_invalid_fields_rejected() {
        let (catalog, mut quotes) = setup();
        let buyer = catalog.buyer().clone();

        let mut bad_price = form("prod-002", 50);
        bad_price.target_price = Some(Money::zero());
        let err = submit_at(&catalog, &mut quotes, &buyer, bad_price, now()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let mut long = form("prod-002", 50);
        long.requirements = "x".repeat(2001);
        let err = submit_at(&catalog, &mut quotes, &buyer, long, now()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let mut past = form("prod-002", 50);
        past.deadline = Some("2024-05-31".to_string());
        let err = submit_at(&catalog, &mut quotes, &buyer, past, now()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = submit_at(&catalog, &mut quotes, &buyer, form("prod-999", 50), now()).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        assert!(quotes.is_empty());
    }

    #[test]
    fn test_deadline_today_accepted() {
        let (catalog, mut quotes) = setup();
        let buyer = catalog.buyer().clone();
        let mut today = form("prod-004", 20);
        today.deadline = Some("2024-06-01".to_string());

        assert!(submit_at(&catalog, &mut quotes, &buyer, today, now()).is_ok());
    }

    #[test]
    fn test_form_deserializes_from_camel_case() {
        let form: QuoteRequestForm = serde_json::from_str(
            r#"{"productId": "prod-003", "quantity": 30, "targetPrice": 1500}"#,
        )
        .unwrap();
        assert_eq!(form.target_price, Some(Money::from_cents(1500)));
        assert!(form.requirements.is_empty());
        assert!(form.deadline.is_none());
    }

    #[test]
    fn test_status_lifecycle() {
        let (catalog, mut quotes) = setup();
        let buyer = catalog.buyer().clone();
        let request = submit_at(&catalog, &mut quotes, &buyer, form("prod-003", 30), now()).unwrap();

        update_quote_status(&mut quotes, &request.id, QuoteStatus::Quoted).unwrap();
        update_quote_status(&mut quotes, &request.id, QuoteStatus::Negotiating).unwrap();
        let accepted = update_quote_status(&mut quotes, &request.id, QuoteStatus::Accepted).unwrap();
        assert_eq!(accepted.status, QuoteStatus::Accepted);

        let err = update_quote_status(&mut quotes, &request.id, QuoteStatus::Rejected).unwrap_err();
        assert_eq!(err.code, ErrorCode::BusinessLogic);

        assert_eq!(list_quote_requests(&quotes, Some(QuoteStatus::Accepted)).len(), 1);
        assert!(list_quote_requests(&quotes, Some(QuoteStatus::Pending)).is_empty());
    }
}
