// src/chat/session.rs — The transcript state machine
//
// Idle --submit--> AwaitingReply --reply_ready--> Idle
//
// At most one reply is ever in flight. A submit while awaiting appends the
// user message but arms nothing. Teardown (or drop) cancels the pending
// reply so it can never land on a discarded transcript.

use std::time::Duration;

use serde::Serialize;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use super::message::{reply_text, ChatMessage, Sender};
use super::scheduler::{ReplyScheduler, ReplyTicket};
use crate::infra::config::ChatConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChatState {
    Idle,
    AwaitingReply,
}

/// What `submit` did with the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank text, or the session is closed. Nothing changed.
    Ignored,
    /// Appended and a reply was scheduled.
    Sent { id: u64 },
    /// Appended while a reply was already pending; no new reply scheduled.
    Queued { id: u64 },
}

impl SubmitOutcome {
    pub fn message_id(&self) -> Option<u64> {
        match self {
            SubmitOutcome::Ignored => None,
            SubmitOutcome::Sent { id } | SubmitOutcome::Queued { id } => Some(*id),
        }
    }
}

/// Published on every transition so the view can follow the newest message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollTarget {
    pub message_id: u64,
    pub awaiting_reply: bool,
}

#[derive(Debug)]
struct PendingReply {
    reply_to: u64,
    cancel: CancellationToken,
}

pub struct ChatSession<S: ReplyScheduler> {
    id: Uuid,
    messages: Vec<ChatMessage>,
    next_id: u64,
    pending: Option<PendingReply>,
    suggestions: Vec<String>,
    reply_delay: Duration,
    scheduler: S,
    cancel: CancellationToken,
    closed: bool,
    scroll_tx: watch::Sender<ScrollTarget>,
}

impl<S: ReplyScheduler> ChatSession<S> {
    /// Start a session seeded with the greeting as message 1.
    pub fn new(config: &ChatConfig, scheduler: S) -> Self {
        let seed = ChatMessage::new(1, Sender::Bot, config.greeting.clone());
        let (scroll_tx, _rx) = watch::channel(ScrollTarget {
            message_id: seed.id,
            awaiting_reply: false,
        });
        let id = Uuid::new_v4();
        tracing::debug!("Chat session {} started", id);
        Self {
            id,
            messages: vec![seed],
            next_id: 2,
            pending: None,
            suggestions: config.suggestions.clone(),
            reply_delay: config.reply_delay(),
            scheduler,
            cancel: CancellationToken::new(),
            closed: false,
            scroll_tx,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last_message(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn state(&self) -> ChatState {
        if self.pending.is_some() {
            ChatState::AwaitingReply
        } else {
            ChatState::Idle
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Id of the user message the pending reply will answer.
    pub fn pending_reply_to(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.reply_to)
    }

    pub fn submit(&mut self, text: &str) -> SubmitOutcome {
        let content = text.trim();
        if content.is_empty() || self.closed {
            return SubmitOutcome::Ignored;
        }

        let id = self.push(Sender::User, content.to_string());

        let outcome = if self.pending.is_some() {
            tracing::debug!("Message {} queued behind pending reply", id);
            SubmitOutcome::Queued { id }
        } else {
            let cancel = self.cancel.child_token();
            self.scheduler.schedule(
                self.reply_delay,
                ReplyTicket {
                    session: self.id,
                    reply_to: id,
                    question: content.to_string(),
                },
                cancel.clone(),
            );
            self.pending = Some(PendingReply {
                reply_to: id,
                cancel,
            });
            tracing::debug!("Message {} sent, reply due in {:?}", id, self.reply_delay);
            SubmitOutcome::Sent { id }
        };

        self.signal_scroll();
        outcome
    }

    /// Suggestions are on offer only before the first exchange.
    pub fn quick_suggestions(&self) -> &[String] {
        if self.messages.len() <= 1 && !self.closed {
            &self.suggestions
        } else {
            &[]
        }
    }

    /// Submit the suggestion at `index`, if suggestions are on offer.
    pub fn quick_suggestion(&mut self, index: usize) -> Option<SubmitOutcome> {
        let text = self.quick_suggestions().get(index)?.clone();
        Some(self.submit(&text))
    }

    /// Complete the pending reply. Tickets from another session, for a
    /// reply that is no longer pending, or arriving after teardown are
    /// dropped.
    pub fn reply_ready(&mut self, ticket: ReplyTicket) -> Option<&ChatMessage> {
        let expected = self.pending.as_ref().map(|p| p.reply_to);
        if self.closed || ticket.session != self.id || expected != Some(ticket.reply_to) {
            tracing::debug!(
                "Ignoring stale reply ticket for message {} (pending: {:?})",
                ticket.reply_to,
                expected
            );
            return None;
        }

        self.pending = None;
        self.push(Sender::Bot, reply_text(&ticket.question));
        self.signal_scroll();
        self.messages.last()
    }

    /// Cancel any pending reply and close the session.
    pub fn teardown(&mut self) {
        if self.closed {
            return;
        }
        if let Some(p) = self.pending.take() {
            p.cancel.cancel();
            tracing::debug!("Cancelled reply to message {}", p.reply_to);
        }
        self.cancel.cancel();
        self.closed = true;
        self.signal_scroll();
        tracing::debug!("Chat session {} torn down", self.id);
    }

    pub fn scroll_signal(&self) -> watch::Receiver<ScrollTarget> {
        self.scroll_tx.subscribe()
    }

    fn push(&mut self, sender: Sender, text: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage::new(id, sender, text));
        id
    }

    fn signal_scroll(&self) {
        let target = ScrollTarget {
            message_id: self.messages.last().map(|m| m.id).unwrap_or(0),
            awaiting_reply: self.pending.is_some(),
        };
        // send_replace never fails for lack of receivers
        self.scroll_tx.send_replace(target);
    }
}

impl<S: ReplyScheduler> Drop for ChatSession<S> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

impl<S: ReplyScheduler> std::fmt::Debug for ChatSession<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSession")
            .field("id", &self.id)
            .field("messages", &self.messages.len())
            .field("state", &self.state())
            .field("closed", &self.closed)
            .finish()
    }
}
