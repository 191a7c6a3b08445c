//! # Messaging State
//!
//! Buyer/supplier conversations with a simulated supplier auto-reply.
//!
//! ## Auto-Reply Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    send_message ──► auto-reply                          │
//! │                                                                         │
//! │  send(conv, "Hello")                                                    │
//! │     │                                                                   │
//! │     ├──► buyer message appended (immediately)                           │
//! │     │                                                                   │
//! │     └──► tokio::spawn ──► sleep(delay) ──► tx.send((ticket, reply))     │
//! │                │                                    │                   │
//! │          JoinHandle kept                            ▼                   │
//! │          under `conv`                      replies channel              │
//! │                │                                    │                   │
//! │   close(conv) ─┴─► abort()         collect_replies / next_reply         │
//! │                                        │                                │
//! │                                        ▼                                │
//! │                          ticket still pending? ── no ──► dropped        │
//! │                                        │ yes                            │
//! │                                        ▼                                │
//! │                          supplier message appended                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The spawned task never touches the message list; replies are applied by
//! whoever owns the [`MessageCenter`] when they drain the channel. Dropping
//! the center aborts every reply still waiting.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{debug, info};
use tradepost_core::validation::validate_message_content;
use tradepost_core::{User, ValidationError};
use uuid::Uuid;

use super::ConfigState;

/// The seeded conversations compiled into the crate.
pub const EMBEDDED_CONVERSATIONS: &str = include_str!("../../data/conversations.json");

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Error)]
pub enum MessagingError {
    #[error("Conversation not found: {0}")]
    ConversationNotFound(String),

    #[error("Conversation {0} is archived")]
    ConversationArchived(String),

    #[error("Invalid conversation seed: {0}")]
    InvalidSeed(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

pub type MessagingResult<T> = Result<T, MessagingError>;

// =============================================================================
// Records
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationStatus {
    Active,
    Archived,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SenderType {
    Buyer,
    Supplier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Text,
    Image,
    File,
    Quote,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    pub supplier_id: String,
    pub supplier_name: String,
    pub supplier_company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_avatar: Option<String>,
    pub last_message: String,
    pub last_message_time: DateTime<Utc>,
    pub status: ConversationStatus,
    pub is_online: bool,
}

impl Conversation {
    /// Case-insensitive match on supplier name, company, or last message.
    fn matches(&self, needle: &str) -> bool {
        [&self.supplier_name, &self.supplier_company, &self.last_message]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub conversation_id: String,
    pub sender_id: String,
    pub sender_name: String,
    pub sender_type: SenderType,
    pub content: String,
    pub message_type: MessageType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_url: Option<String>,
    pub is_read: bool,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Unread means a supplier message the buyer has not opened.
    pub fn is_unread(&self) -> bool {
        self.sender_type == SenderType::Supplier && !self.is_read
    }
}

/// A conversation as listed in the inbox.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationSummary {
    #[serde(flatten)]
    pub conversation: Conversation,
    pub unread_count: usize,
}

#[derive(Debug, Deserialize)]
struct SeedFile {
    conversations: Vec<Conversation>,
    messages: Vec<Message>,
}

// =============================================================================
// Auto-Reply
// =============================================================================

/// What the simulated supplier answers, and when.
#[derive(Debug, Clone, PartialEq)]
pub struct AutoReply {
    pub delay: Duration,
    pub text: String,
}

impl AutoReply {
    pub fn from_config(config: &ConfigState) -> Self {
        AutoReply {
            delay: config.auto_reply_delay(),
            text: config.auto_reply_text.clone(),
        }
    }
}

type Ticket = u64;

// =============================================================================
// Message Center
// =============================================================================

/// In-memory inbox for the signed-in buyer.
pub struct MessageCenter {
    conversations: Vec<Conversation>,
    messages: HashMap<String, Vec<Message>>,
    auto_reply: AutoReply,
    replies_tx: UnboundedSender<(Ticket, Message)>,
    replies_rx: UnboundedReceiver<(Ticket, Message)>,
    pending: HashMap<String, Vec<(Ticket, JoinHandle<()>)>>,
    next_ticket: Ticket,
}

impl MessageCenter {
    /// Loads the embedded conversations.
    pub fn seeded(auto_reply: AutoReply) -> MessagingResult<Self> {
        Self::from_json(EMBEDDED_CONVERSATIONS, auto_reply)
    }

    /// Loads conversations and messages from a seed document.
    pub fn from_json(json: &str, auto_reply: AutoReply) -> MessagingResult<Self> {
        let seed: SeedFile = serde_json::from_str(json)?;

        let mut messages: HashMap<String, Vec<Message>> = HashMap::new();
        for message in seed.messages {
            if !seed.conversations.iter().any(|c| c.id == message.conversation_id) {
                return Err(MessagingError::ConversationNotFound(message.conversation_id));
            }
            messages
                .entry(message.conversation_id.clone())
                .or_default()
                .push(message);
        }

        info!(
            conversations = seed.conversations.len(),
            messages = messages.values().map(Vec::len).sum::<usize>(),
            "Conversations loaded"
        );

        let (replies_tx, replies_rx) = mpsc::unbounded_channel();
        Ok(MessageCenter {
            conversations: seed.conversations,
            messages,
            auto_reply,
            replies_tx,
            replies_rx,
            pending: HashMap::new(),
            next_ticket: 0,
        })
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Conversations matching `search`, most recent first.
    pub fn conversations(&self, search: Option<&str>) -> Vec<ConversationSummary> {
        let needle = search
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());

        let mut list: Vec<ConversationSummary> = self
            .conversations
            .iter()
            .filter(|c| needle.as_deref().map_or(true, |n| c.matches(n)))
            .map(|c| ConversationSummary {
                conversation: c.clone(),
                unread_count: self.unread_in(&c.id),
            })
            .collect();

        list.sort_by(|a, b| {
            b.conversation
                .last_message_time
                .cmp(&a.conversation.last_message_time)
        });
        list
    }

    pub fn conversation(&self, conversation_id: &str) -> MessagingResult<&Conversation> {
        self.conversations
            .iter()
            .find(|c| c.id == conversation_id)
            .ok_or_else(|| MessagingError::ConversationNotFound(conversation_id.to_string()))
    }

    pub fn conversation_count(&self) -> usize {
        self.conversations.len()
    }

    /// Unread supplier messages across every conversation.
    pub fn unread_count(&self) -> usize {
        self.messages
            .values()
            .flatten()
            .filter(|m| m.is_unread())
            .count()
    }

    fn unread_in(&self, conversation_id: &str) -> usize {
        self.messages
            .get(conversation_id)
            .map_or(0, |list| list.iter().filter(|m| m.is_unread()).count())
    }

    /// Auto-replies scheduled but not yet applied.
    pub fn pending_replies(&self) -> usize {
        self.pending.values().map(Vec::len).sum()
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Opens a conversation: returns its messages in order and marks the
    /// supplier's messages read.
    pub fn open(&mut self, conversation_id: &str) -> MessagingResult<Vec<Message>> {
        self.conversation(conversation_id)?;

        let list = self.messages.entry(conversation_id.to_string()).or_default();
        let mut marked = 0;
        for message in list.iter_mut().filter(|m| m.is_unread()) {
            message.is_read = true;
            marked += 1;
        }
        debug!(conversation_id, marked, "Conversation opened");
        Ok(list.clone())
    }

    /// Appends a buyer message and schedules the supplier's auto-reply.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// ## Errors
    /// - [`MessagingError::Validation`] if the trimmed content is empty or too long
    /// - [`MessagingError::ConversationNotFound`] / [`MessagingError::ConversationArchived`]
    pub fn send(
        &mut self,
        conversation_id: &str,
        sender: &User,
        content: &str,
    ) -> MessagingResult<Message> {
        let content = validate_message_content(content)?;
        let conversation = self.conversation(conversation_id)?.clone();
        if conversation.status == ConversationStatus::Archived {
            return Err(MessagingError::ConversationArchived(conversation.id));
        }

        let message = Message {
            id: new_message_id(),
            conversation_id: conversation.id.clone(),
            sender_id: sender.id.clone(),
            sender_name: sender.name.clone(),
            sender_type: SenderType::Buyer,
            content,
            message_type: MessageType::Text,
            attachment_url: None,
            is_read: true,
            timestamp: Utc::now(),
        };
        self.append(message.clone());
        self.schedule_reply(&conversation);

        debug!(
            conversation_id,
            message_id = %message.id,
            "Message sent, auto-reply scheduled"
        );
        Ok(message)
    }

    /// Cancels every auto-reply still pending for a conversation.
    ///
    /// Returns how many were cancelled.
    pub fn close(&mut self, conversation_id: &str) -> MessagingResult<usize> {
        self.conversation(conversation_id)?;

        let cancelled = self.pending.remove(conversation_id).unwrap_or_default();
        for (_, handle) in &cancelled {
            handle.abort();
        }
        debug!(conversation_id, cancelled = cancelled.len(), "Conversation closed");
        Ok(cancelled.len())
    }

    /// Applies every auto-reply that has already arrived, without waiting.
    pub fn collect_replies(&mut self) -> Vec<Message> {
        let mut applied = Vec::new();
        while let Ok((ticket, reply)) = self.replies_rx.try_recv() {
            if let Some(reply) = self.accept(ticket, reply) {
                applied.push(reply);
            }
        }
        applied
    }

    /// Waits for the next auto-reply and applies it.
    ///
    /// Returns `None` straight away when nothing is pending.
    pub async fn next_reply(&mut self) -> Option<Message> {
        while self.pending_replies() > 0 {
            let (ticket, reply) = self.replies_rx.recv().await?;
            if let Some(reply) = self.accept(ticket, reply) {
                return Some(reply);
            }
        }
        None
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn schedule_reply(&mut self, conversation: &Conversation) {
        let ticket = self.next_ticket;
        self.next_ticket += 1;

        let tx = self.replies_tx.clone();
        let delay = self.auto_reply.delay;
        let mut reply = Message {
            id: new_message_id(),
            conversation_id: conversation.id.clone(),
            sender_id: conversation.supplier_id.clone(),
            sender_name: conversation.supplier_name.clone(),
            sender_type: SenderType::Supplier,
            content: self.auto_reply.text.clone(),
            message_type: MessageType::Text,
            attachment_url: None,
            is_read: false,
            timestamp: Utc::now(),
        };

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            reply.timestamp = Utc::now();
            // The receiver lives as long as the center; a closed channel
            // means the center is gone and the reply has nowhere to go.
            let _ = tx.send((ticket, reply));
        });

        self.pending
            .entry(conversation.id.clone())
            .or_default()
            .push((ticket, handle));
    }

    /// Applies a reply if its ticket is still pending.
    fn accept(&mut self, ticket: Ticket, reply: Message) -> Option<Message> {
        let list = self.pending.get_mut(&reply.conversation_id)?;
        let index = list.iter().position(|(t, _)| *t == ticket)?;
        list.swap_remove(index);
        if list.is_empty() {
            self.pending.remove(&reply.conversation_id);
        }

        debug!(conversation_id = %reply.conversation_id, "Auto-reply received");
        self.append(reply.clone());
        Some(reply)
    }

    fn append(&mut self, message: Message) {
        if let Some(conversation) = self
            .conversations
            .iter_mut()
            .find(|c| c.id == message.conversation_id)
        {
            conversation.last_message = message.content.clone();
            conversation.last_message_time = message.timestamp;
        }
        self.messages
            .entry(message.conversation_id.clone())
            .or_default()
            .push(message);
    }
}

impl Drop for MessageCenter {
    fn drop(&mut self) {
        for (_, handle) in self.pending.values().flatten() {
            handle.abort();
        }
    }
}

impl std::fmt::Debug for MessageCenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageCenter")
            .field("conversations", &self.conversations.len())
            .field("pending_replies", &self.pending_replies())
            .finish()
    }
}

fn new_message_id() -> String {
    format!("msg-{}", Uuid::new_v4())
}
