// src/cli/chat.rs — Interactive REPL on a chat session

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::chat::{render_transcript, ChatSession, ChatState, SubmitOutcome, TokioReplyScheduler};
use crate::infra::config::Config;

/// One line of REPL input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Quit,
    Help,
    History,
    Suggestion(usize),
    Message(String),
    Unknown(String),
}

fn parse_input(line: &str) -> Input {
    let trimmed = line.trim();
    let Some(cmd) = trimmed.strip_prefix('/') else {
        return Input::Message(trimmed.to_string());
    };
    match cmd {
        "quit" | "exit" => Input::Quit,
        "help" => Input::Help,
        "history" => Input::History,
        n => match n.parse::<usize>() {
            Ok(i) if i >= 1 => Input::Suggestion(i - 1),
            _ => Input::Unknown(trimmed.to_string()),
        },
    }
}

/// Run the chat REPL until EOF or `/quit`. A reply still pending at EOF
/// is waited for before returning.
pub async fn run_chat(config: &Config) -> anyhow::Result<()> {
    let (scheduler, mut replies) = TokioReplyScheduler::channel();
    let mut session = ChatSession::new(&config.chat, scheduler);

    eprintln!("mosdac v{} | assistant | /help for commands\n", env!("CARGO_PKG_VERSION"));
    if let Some(greeting) = session.last_message() {
        println!("Bot: {}", greeting.text);
    }
    print_suggestions(&session);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    loop {
        if !stdin_open && session.state() == ChatState::Idle {
            break;
        }
        if stdin_open {
            prompt().await;
        }

        tokio::select! {
            line = lines.next_line(), if stdin_open => {
                let Some(line) = line? else {
                    stdin_open = false;
                    continue;
                };
                match parse_input(&line) {
                    Input::Quit => break,
                    Input::Help => print_help(),
                    Input::History => println!("{}", render_transcript(session.messages())),
                    Input::Suggestion(i) => match session.quick_suggestion(i) {
                        Some(outcome) => report(outcome),
                        None => eprintln!("  No suggestion {} on offer.", i + 1),
                    },
                    Input::Message(text) => report(session.submit(&text)),
                    Input::Unknown(cmd) => {
                        eprintln!("  Unknown command: {}. Type /help for commands.", cmd)
                    }
                }
            }
            Some(ticket) = replies.recv() => {
                if let Some(reply) = session.reply_ready(ticket) {
                    println!("\nBot: {}", reply.text);
                }
            }
        }
    }

    session.teardown();
    Ok(())
}

async fn prompt() {
    let mut out = tokio::io::stdout();
    out.write_all(b"> ").await.ok();
    out.flush().await.ok();
}

fn report(outcome: SubmitOutcome) {
    match outcome {
        SubmitOutcome::Ignored => {}
        SubmitOutcome::Sent { .. } => eprintln!("  Bot is typing..."),
        SubmitOutcome::Queued { .. } => {
            eprintln!("  (still answering your previous message)")
        }
    }
}

fn print_suggestions(session: &ChatSession<TokioReplyScheduler>) {
    let suggestions = session.quick_suggestions();
    if suggestions.is_empty() {
        return;
    }
    eprintln!("\n  Try one of these:");
    for (i, s) in suggestions.iter().enumerate() {
        eprintln!("    /{}  {}", i + 1, s);
    }
    eprintln!();
}

fn print_help() {
    eprintln!("  Commands:");
    eprintln!("    /1 /2 /3     Send a quick suggestion (before the first message)");
    eprintln!("    /history     Show the conversation so far");
    eprintln!("    /help        Show this help");
    eprintln!("    /quit        Leave the chat");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input("  hello  "), Input::Message("hello".into()));
        assert_eq!(parse_input("/2"), Input::Suggestion(1));
        assert_eq!(parse_input("/history"), Input::History);
        assert_eq!(parse_input("/exit"), Input::Quit);
        assert_eq!(parse_input("/quit"), Input::Quit);
        assert_eq!(parse_input("/0"), Input::Unknown("/0".into()));
        assert_eq!(parse_input("/model"), Input::Unknown("/model".into()));
    }

    #[test]
    fn test_bare_quit_words_are_chat_text() {
        assert_eq!(parse_input("quit"), Input::Message("quit".into()));
        assert_eq!(parse_input(" exit "), Input::Message("exit".into()));
    }

    #[test]
    fn test_blank_line_is_a_blank_message() {
        // the session turns it into a no-op
        assert_eq!(parse_input("   "), Input::Message(String::new()));
    }
}
