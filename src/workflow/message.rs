//! Message Log
//!
//! Ordered record of conversation entries. Only the workflow controller holds
//! a mutable log; everything else sees snapshots.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use super::render::RenderedReport;

pub type MessageId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    System,
    Agent,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Loading,
    Complete,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum MessageContent {
    Text(String),
    Report(RenderedReport),
}

impl MessageContent {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MessageContent::Text(s) => Some(s),
            MessageContent::Report(_) => None,
        }
    }

    pub fn as_report(&self) -> Option<&RenderedReport> {
        match self {
            MessageContent::Report(r) => Some(r),
            MessageContent::Text(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub id: MessageId,
    pub role: MessageRole,
    pub content: MessageContent,
    pub timestamp: DateTime<Utc>,
    pub status: MessageStatus,
}

impl Message {
    fn new(role: MessageRole, content: MessageContent, status: MessageStatus) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content,
            timestamp: Utc::now(),
            status,
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(MessageRole::User, MessageContent::Text(text.into()), MessageStatus::Complete)
    }

    /// Progress placeholder shown while a run is active
    pub fn loading(label: impl Into<String>) -> Self {
        Self::new(MessageRole::System, MessageContent::Text(label.into()), MessageStatus::Loading)
    }

    pub fn agent(report: RenderedReport) -> Self {
        Self::new(MessageRole::Agent, MessageContent::Report(report), MessageStatus::Complete)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(MessageRole::Error, MessageContent::Text(text.into()), MessageStatus::Error)
    }

    pub fn is_loading(&self) -> bool {
        self.status == MessageStatus::Loading
    }
}

#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    messages: Vec<Message>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn get(&self, id: MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    /// The active progress placeholder, if any
    pub fn loading(&self) -> Option<&Message> {
        self.messages.iter().find(|m| m.is_loading())
    }

    /// Append a message. A new loading message evicts any previous one so the
    /// log never holds two placeholders.
    pub(crate) fn push(&mut self, message: Message) -> MessageId {
        if message.is_loading() {
            let before = self.messages.len();
            self.messages.retain(|m| !m.is_loading());
            if self.messages.len() != before {
                warn!("Replaced a stale loading message");
            }
        }
        let id = message.id;
        self.messages.push(message);
        id
    }

    /// Change the label of a loading message. Any other message is left
    /// untouched and `false` is returned.
    pub(crate) fn update_loading_text(&mut self, id: MessageId, text: &str) -> bool {
        match self.messages.iter_mut().find(|m| m.id == id) {
            Some(message) if message.is_loading() => {
                message.content = MessageContent::Text(text.to_string());
                true
            }
            _ => false,
        }
    }

    pub(crate) fn remove(&mut self, id: MessageId) -> Option<Message> {
        let index = self.messages.iter().position(|m| m.id == id)?;
        Some(self.messages.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_loading_message() {
        let mut log = MessageLog::new();
        log.push(Message::user("idea"));
        let first = log.push(Message::loading("Gathering market data..."));
        let second = log.push(Message::loading("Analyzing competitors..."));

        assert_eq!(log.messages().iter().filter(|m| m.is_loading()).count(), 1);
        assert!(log.get(first).is_none());
        assert_eq!(log.loading().map(|m| m.id), Some(second));
    }

    #[test]
    fn test_user_message_cannot_be_relabelled() {
        let mut log = MessageLog::new();
        let user = log.push(Message::user("cat food delivery"));

        assert!(!log.update_loading_text(user, "Analyzing competitors..."));
        assert_eq!(
            log.get(user).and_then(|m| m.content.as_text()),
            Some("cat food delivery")
        );
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut log = MessageLog::new();
        let a = log.push(Message::user("a"));
        let loading = log.push(Message::loading("..."));
        let c = log.push(Message::error("c"));

        let removed = log.remove(loading).unwrap();
        assert!(removed.is_loading());
        let ids: Vec<_> = log.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![a, c]);
        assert!(log.remove(loading).is_none());
    }

    #[test]
    fn test_roles_serialize_lowercase() {
        let json = serde_json::to_value(Message::error("boom")).unwrap();
        assert_eq!(json["role"], "error");
        assert_eq!(json["status"], "error");
        assert_eq!(json["content"]["type"], "text");
    }
}
