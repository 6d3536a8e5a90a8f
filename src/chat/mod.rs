// src/chat/mod.rs — Simulated assistant chat

pub mod message;
pub mod scheduler;
pub mod session;

pub use message::{render_transcript, reply_text, ChatMessage, Sender};
pub use scheduler::{ReplyScheduler, ReplyTicket, TokioReplyScheduler};
pub use session::{ChatSession, ChatState, ScrollTarget, SubmitOutcome};
