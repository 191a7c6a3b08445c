//! # Messaging Commands
//!
//! Commands for the buyer's inbox.
//!
//! ## Conversation View
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  list_conversations("zhang")                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  get_messages("conv-001")  ── marks supplier messages read              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  send_message("conv-001", "Can you ship by March?")                     │
//! │       │                                                                 │
//! │       │   ~2s later                                                     │
//! │       ▼                                                                 │
//! │  collect_replies() ── supplier auto-reply appended                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  close_conversation("conv-001") ── cancels replies still on the way     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;
use tradepost_core::User;

use crate::error::ApiError;
use crate::state::{ConversationSummary, Message, MessageCenter};

/// Result of closing a conversation view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseResponse {
    pub cancelled_replies: usize,
}

/// Lists conversations, most recent first.
///
/// ## Arguments
/// * `search` - Matches supplier name, company, or last message
pub fn list_conversations(
    messages: &MessageCenter,
    search: Option<&str>,
) -> Vec<ConversationSummary> {
    debug!(search = ?search, "list_conversations command");
    messages.conversations(search)
}

/// Opens a conversation and marks the supplier's messages read.
pub fn get_messages(
    messages: &mut MessageCenter,
    conversation_id: &str,
) -> Result<Vec<Message>, ApiError> {
    debug!(conversation_id = %conversation_id, "get_messages command");
    Ok(messages.open(conversation_id)?)
}

/// Sends a buyer message. The supplier's auto-reply follows after the
/// configured delay.
///
/// ## Errors
/// `VALIDATION_ERROR` if the trimmed content is empty.
pub fn send_message(
    messages: &mut MessageCenter,
    buyer: &User,
    conversation_id: &str,
    content: &str,
) -> Result<Message, ApiError> {
    debug!(conversation_id = %conversation_id, "send_message command");
    Ok(messages.send(conversation_id, buyer, content)?)
}

/// Closes a conversation view, cancelling its pending auto-replies.
pub fn close_conversation(
    messages: &mut MessageCenter,
    conversation_id: &str,
) -> Result<CloseResponse, ApiError> {
    debug!(conversation_id = %conversation_id, "close_conversation command");
    let cancelled_replies = messages.close(conversation_id)?;
    Ok(CloseResponse { cancelled_replies })
}

/// Applies the auto-replies that have arrived since the last call.
pub fn collect_replies(messages: &mut MessageCenter) -> Vec<Message> {
    let replies = messages.collect_replies();
    if !replies.is_empty() {
        debug!(count = replies.len(), "collect_replies command");
    }
    replies
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::{AutoReply, ConfigState, SenderType};
    use std::time::Duration;
    use tradepost_catalog::Catalog;

    fn setup() -> (User, MessageCenter) {
        let buyer = Catalog::load_embedded().unwrap().buyer().clone();
        let center = MessageCenter::seeded(AutoReply::from_config(&ConfigState::default())).unwrap();
        (buyer, center)
    }

    #[test]
    fn test_list_and_open() {
        let (_, mut center) = setup();
        assert_eq!(list_conversations(&center, Some("zhang")).len(), 1);

        let messages = get_messages(&mut center, "conv-002").unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(list_conversations(&center, Some("li ming"))[0].unread_count, 0);

        let err = get_messages(&mut center, "conv-404").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_message_is_validation_error() {
        let (buyer, mut center) = setup();
        let err = send_message(&mut center, &buyer, "conv-001", "   ").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_then_collect_reply() {
        let (buyer, mut center) = setup();
        let sent = send_message(&mut center, &buyer, "conv-001", "Can you ship by March?").unwrap();
        assert_eq!(sent.sender_id, "user-001");
        assert!(collect_replies(&mut center).is_empty());

        tokio::time::sleep(Duration::from_millis(2001)).await;
        let replies = collect_replies(&mut center);
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0].sender_type, SenderType::Supplier);
        assert_eq!(replies[0].sender_name, "Zhang Wei");
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_reports_cancelled() {
        let (buyer, mut center) = setup();
        send_message(&mut center, &buyer, "conv-002", "Hello").unwrap();
        send_message(&mut center, &buyer, "conv-002", "Are you there?").unwrap();

        let response = close_conversation(&mut center, "conv-002").unwrap();
        assert_eq!(response.cancelled_replies, 2);

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(collect_replies(&mut center).is_empty());
    }
}
