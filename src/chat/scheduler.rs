// src/chat/scheduler.rs — Cancellable delayed delivery of simulated replies

use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// Identifies one pending reply: which session, and which user message
/// triggered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyTicket {
    pub session: Uuid,
    pub reply_to: u64,
    pub question: String,
}

/// Arranges for a ticket to come back after `delay` unless `cancel` fires first.
#[cfg_attr(test, mockall::automock)]
pub trait ReplyScheduler {
    fn schedule(&self, delay: Duration, ticket: ReplyTicket, cancel: CancellationToken);
}

/// Spawns one tokio task per reply and delivers due tickets over a channel.
/// The owner of the receiver feeds them back into `ChatSession::reply_ready`.
#[derive(Debug, Clone)]
pub struct TokioReplyScheduler {
    tx: mpsc::UnboundedSender<ReplyTicket>,
}

impl TokioReplyScheduler {
    pub fn new(tx: mpsc::UnboundedSender<ReplyTicket>) -> Self {
        Self { tx }
    }

    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ReplyTicket>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }
}

impl ReplyScheduler for TokioReplyScheduler {
    fn schedule(&self, delay: Duration, ticket: ReplyTicket, cancel: CancellationToken) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::debug!("Reply to message {} cancelled", ticket.reply_to);
                }
                _ = tokio::time::sleep(delay) => {
                    if tx.send(ticket).is_err() {
                        tracing::debug!("Reply receiver dropped before delivery");
                    }
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(reply_to: u64) -> ReplyTicket {
        ReplyTicket {
            session: Uuid::new_v4(),
            reply_to,
            question: "orbit".into(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_delivers_after_delay() {
        let (sched, mut rx) = TokioReplyScheduler::channel();
        let t = ticket(2);
        sched.schedule(Duration::from_millis(2000), t.clone(), CancellationToken::new());

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert!(rx.try_recv().is_err());

        let got = rx.recv().await.unwrap();
        assert_eq!(got, t);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_suppresses_delivery() {
        let (sched, mut rx) = TokioReplyScheduler::channel();
        let token = CancellationToken::new();
        sched.schedule(Duration::from_millis(2000), ticket(2), token.clone());

        tokio::time::sleep(Duration::from_millis(500)).await;
        token.cancel();
        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert!(rx.try_recv().is_err());
    }
}
