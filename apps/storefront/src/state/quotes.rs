//! # Quote Book
//!
//! The buyer's quote requests for this session.
//!
//! ## Lifecycle
//! ```text
//! submit ──► Pending ──► Quoted ◄──► Negotiating
//!               │          │              │
//!               ▼          ▼              ▼
//!           Rejected    Accepted / Rejected
//! ```
//!
//! Form validation happens in the command layer; the book only stores
//! requests and enforces status transitions.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;
use tradepost_core::{CoreError, CoreResult, QuoteRequest, QuoteStatus};

/// Count of requests in one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount {
    pub status: QuoteStatus,
    pub count: usize,
}

#[derive(Debug, Default)]
pub struct QuoteBook {
    requests: Vec<QuoteRequest>,
}

impl QuoteBook {
    pub fn new() -> Self {
        QuoteBook::default()
    }

    /// Stores a new request.
    pub fn insert(&mut self, request: QuoteRequest) {
        debug!(request_id = %request.id, product_id = %request.product_id, "Quote request stored");
        self.requests.push(request);
    }

    pub fn get(&self, request_id: &str) -> CoreResult<&QuoteRequest> {
        self.requests
            .iter()
            .find(|r| r.id == request_id)
            .ok_or_else(|| CoreError::QuoteRequestNotFound(request_id.to_string()))
    }

    /// Requests, newest first, optionally limited to one status.
    pub fn list(&self, status: Option<QuoteStatus>) -> Vec<QuoteRequest> {
        let mut list: Vec<QuoteRequest> = self
            .requests
            .iter()
            .filter(|r| status.map_or(true, |s| r.status == s))
            .cloned()
            .collect();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        list
    }

    /// Moves a request to `next`.
    ///
    /// ## Errors
    /// - [`CoreError::QuoteRequestNotFound`]
    /// - [`CoreError::InvalidQuoteTransition`] if the lifecycle forbids the move
    pub fn update_status(
        &mut self,
        request_id: &str,
        next: QuoteStatus,
        now: DateTime<Utc>,
    ) -> CoreResult<QuoteRequest> {
        let request = self
            .requests
            .iter_mut()
            .find(|r| r.id == request_id)
            .ok_or_else(|| CoreError::QuoteRequestNotFound(request_id.to_string()))?;

        if !request.status.can_transition_to(next) {
            return Err(CoreError::InvalidQuoteTransition {
                request_id: request_id.to_string(),
                from: request.status,
                to: next,
            });
        }

        debug!(request_id, from = ?request.status, to = ?next, "Quote status updated");
        request.status = next;
        request.updated_at = now;
        Ok(request.clone())
    }

    /// One entry per status, in lifecycle order, zeros included.
    pub fn counts_by_status(&self) -> Vec<StatusCount> {
        QuoteStatus::ALL
            .iter()
            .map(|&status| StatusCount {
                status,
                count: self.requests.iter().filter(|r| r.status == status).count(),
            })
            .collect()
    }

    /// Requests that are not yet accepted or rejected.
    pub fn open_count(&self) -> usize {
        self.requests.iter().filter(|r| !r.status.is_terminal()).count()
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}
