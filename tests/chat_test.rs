// tests/chat_test.rs — Integration test: chat session with the tokio reply scheduler

use std::time::Duration;

use pretty_assertions::assert_eq;

use mosdac_portal::chat::{
    reply_text, ChatSession, ChatState, Sender, SubmitOutcome, TokioReplyScheduler,
};
use mosdac_portal::infra::config::ChatConfig;

/// Let spawned scheduler tasks observe the clock after it moved.
async fn settle(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    tokio::task::yield_now().await;
}

#[tokio::test(start_paused = true)]
async fn test_reply_arrives_after_delay() {
    let (scheduler, mut replies) = TokioReplyScheduler::channel();
    let mut session = ChatSession::new(&ChatConfig::default(), scheduler);

    assert_eq!(session.submit("What is INSAT-3D?"), SubmitOutcome::Sent { id: 2 });
    assert_eq!(session.state(), ChatState::AwaitingReply);

    settle(1999).await;
    assert!(replies.try_recv().is_err());

    settle(2).await;
    let ticket = replies.try_recv().unwrap();
    let reply = session.reply_ready(ticket).unwrap();
    assert_eq!(reply.id, 3);
    assert_eq!(reply.sender, Sender::Bot);
    assert_eq!(reply.text, reply_text("What is INSAT-3D?"));
    assert_eq!(session.state(), ChatState::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_teardown_cancels_pending_reply() {
    let (scheduler, mut replies) = TokioReplyScheduler::channel();
    let mut session = ChatSession::new(&ChatConfig::default(), scheduler);
    session.submit("hello");

    settle(500).await;
    session.teardown();
    settle(5000).await;

    assert!(replies.try_recv().is_err());
    assert_eq!(session.messages().len(), 2);
    assert!(session.is_closed());
    // a closed session accepts nothing
    assert_eq!(session.submit("again"), SubmitOutcome::Ignored);
}

#[tokio::test(start_paused = true)]
async fn test_dropping_session_cancels_pending_reply() {
    let (scheduler, mut replies) = TokioReplyScheduler::channel();
    let mut session = ChatSession::new(&ChatConfig::default(), scheduler);
    session.submit("hello");
    drop(session);

    settle(5000).await;
    assert!(replies.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn test_second_submit_while_pending_gets_no_extra_reply() {
    let (scheduler, mut replies) = TokioReplyScheduler::channel();
    let mut session = ChatSession::new(&ChatConfig::default(), scheduler);

    assert!(matches!(session.submit("first"), SubmitOutcome::Sent { .. }));
    settle(1000).await;
    assert_eq!(session.submit("second"), SubmitOutcome::Queued { id: 3 });

    settle(5000).await;
    let ticket = replies.try_recv().unwrap();
    assert!(replies.try_recv().is_err());

    let reply = session.reply_ready(ticket).unwrap();
    assert_eq!(reply.text, reply_text("first"));
    let ids: Vec<u64> = session.messages().iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[tokio::test(start_paused = true)]
async fn test_scroll_signal_follows_transcript() {
    let (scheduler, mut replies) = TokioReplyScheduler::channel();
    let mut session = ChatSession::new(&ChatConfig::default(), scheduler);
    let mut scroll = session.scroll_signal();

    session.quick_suggestion(0).unwrap();
    assert!(scroll.has_changed().unwrap());
    let target = *scroll.borrow_and_update();
    assert_eq!(target.message_id, 2);
    assert!(target.awaiting_reply);

    settle(2000).await;
    session.reply_ready(replies.try_recv().unwrap());
    let target = *scroll.borrow_and_update();
    assert_eq!(target.message_id, 3);
    assert!(!target.awaiting_reply);
}

#[tokio::test(start_paused = true)]
async fn test_custom_delay_and_greeting() {
    let config = ChatConfig {
        reply_delay_ms: 250,
        greeting: "Namaste".into(),
        suggestions: vec![],
    };
    let (scheduler, mut replies) = TokioReplyScheduler::channel();
    let mut session = ChatSession::new(&config, scheduler);
    assert_eq!(session.messages()[0].text, "Namaste");
    assert!(session.quick_suggestions().is_empty());
    assert!(session.quick_suggestion(0).is_none());

    session.submit("rainfall over Kerala");
    settle(250).await;
    assert!(session.reply_ready(replies.try_recv().unwrap()).is_some());
}

#[tokio::test(start_paused = true)]
async fn test_ticket_from_other_session_is_ignored() {
    let (scheduler, mut replies) = TokioReplyScheduler::channel();
    let mut a = ChatSession::new(&ChatConfig::default(), scheduler.clone());
    let mut b = ChatSession::new(&ChatConfig::default(), scheduler);

    a.submit("for a");
    b.submit("for b");
    settle(2000).await;

    let mut tickets = vec![replies.try_recv().unwrap(), replies.try_recv().unwrap()];
    tickets.sort_by_key(|t| t.session != a.id());

    // each session only accepts its own ticket
    assert!(b.reply_ready(tickets[0].clone()).is_none());
    assert!(a.reply_ready(tickets[0].clone()).is_some());
    assert!(b.reply_ready(tickets[1].clone()).is_some());
    assert_eq!(a.messages().len(), 3);
    assert_eq!(b.messages().len(), 3);
}
