use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{IconKind, MemoryCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Assistant,
}

/// Message in the assistant log. The log is append-only and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: Sender,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<ChatPayload>,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(id: u64, content: impl Into<String>) -> Self {
        Self {
            id,
            sender: Sender::User,
            content: content.into(),
            payload: None,
            sent_at: Utc::now(),
        }
    }

    pub fn assistant(id: u64, reply: CannedReply) -> Self {
        Self {
            id,
            sender: Sender::Assistant,
            content: reply.content,
            payload: reply.payload,
            sent_at: Utc::now(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

/// Reply body produced by a response provider, before it gets an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CannedReply {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<ChatPayload>,
}

/// Structured attachment rendered under an assistant message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatPayload {
    Analysis(AnalysisCard),
    Report(StandupReport),
    Memory(MemoryLookup),
}

impl ChatPayload {
    pub fn kind(&self) -> &'static str {
        match self {
            ChatPayload::Analysis(_) => "analysis",
            ChatPayload::Report(_) => "report",
            ChatPayload::Memory(_) => "memory",
        }
    }
}

/// Drift-alert analysis shown in the manager's result drawer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisCard {
    pub summary: String,
    pub evidence: Vec<EvidenceItem>,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceItem {
    pub id: u32,
    pub title: String,
    pub value: String,
    pub description: String,
    pub icon: IconKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandupReport {
    pub title: String,
    pub date_label: String,
    pub sections: Vec<ReportSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSection {
    pub heading: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryLookup {
    pub summary: String,
    pub attachments: Vec<MemoryAttachment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryAttachment {
    pub memory_id: u32,
    pub title: String,
    pub app: String,
    pub timestamp: String,
    pub category: MemoryCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_is_internally_tagged() {
        let payload = ChatPayload::Report(StandupReport {
            title: "Standup".to_string(),
            date_label: "Today".to_string(),
            sections: vec![],
        });
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["type"], "report");
        assert_eq!(json["title"], "Standup");
    }

    #[test]
    fn test_assistant_message_takes_reply_body() {
        let reply = CannedReply {
            content: "hello".to_string(),
            payload: None,
        };
        let msg = ChatMessage::assistant(7, reply);
        assert_eq!(msg.id, 7);
        assert_eq!(msg.sender, Sender::Assistant);
        assert!(!msg.is_user());
        assert_eq!(msg.content, "hello");
    }
}
