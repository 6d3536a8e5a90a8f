// src/chat/message.rs — Transcript entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn label(&self) -> &'static str {
        match self {
            Sender::User => "You",
            Sender::Bot => "Assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: Sender,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(id: u64, sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id,
            sender,
            text: text.into(),
            sent_at: Utc::now(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

/// The simulated assistant's answer to `question`.
pub fn reply_text(question: &str) -> String {
    format!(
        "Thank you for your question about \"{question}\". Let me analyze this and \
         provide you with insights based on the available data."
    )
}

/// Plain-text transcript, one `[id] Sender: text` line per message.
pub fn render_transcript(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .map(|m| format!("[{}] {}: {}", m.id, m.sender.label(), m.text))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_template() {
        assert_eq!(
            reply_text("INSAT-3D"),
            "Thank you for your question about \"INSAT-3D\". Let me analyze this and provide you with insights based on the available data."
        );
    }

    #[test]
    fn test_render_transcript() {
        let msgs = vec![
            ChatMessage::new(1, Sender::Bot, "Hello"),
            ChatMessage::new(2, Sender::User, "Hi there"),
        ];
        insta::assert_snapshot!(render_transcript(&msgs), @r"
        [1] Assistant: Hello
        [2] You: Hi there
        ");
    }

    #[test]
    fn test_empty_transcript() {
        assert_eq!(render_transcript(&[]), "");
    }
}
