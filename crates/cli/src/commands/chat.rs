//! `shelfchat chat` — Interactive or single-message chat mode.

use crate::{render, widget};
use shelfchat_core::Result;
use shelfchat_session::ConversationSession;
use std::io::Write;
use std::path::Path;
use tokio::io::{self, AsyncBufReadExt, BufReader};

const EXIT_WORDS: &[&str] = &["exit", "quit", "/exit", "/quit", ":q"];

pub async fn run(
    config_path: Option<&Path>,
    message: Option<String>,
) -> Result<()> {
    let config = widget::load_config(config_path)?;
    let widget = widget::Widget::from_config(&config);

    if let Some(msg) = message {
        send(&widget.session, &msg).await;
        return Ok(());
    }

    println!();
    println!("  ShelfChat — Interactive Mode");
    println!("  Assistant: {}", config.assistant.endpoint);
    println!("  Type your message and press Enter. Type 'exit' or Ctrl+C to quit.");
    println!();

    let mut lines = BufReader::new(io::stdin()).lines();
    loop {
        print!("  You > ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if EXIT_WORDS.contains(&line) {
            break;
        }
        send(&widget.session, line).await;
    }

    println!();
    println!("  Goodbye!");
    Ok(())
}

/// One exchange; a failure is reported and the session stays usable.
async fn send(session: &ConversationSession, text: &str) {
    eprint!("  Thinking...");
    let outcome = session.send_user_message(text).await;
    eprint!("\r              \r");

    match outcome {
        Ok(Some(reply)) => println!("{}\n", render::assistant_reply(&reply)),
        Ok(None) => {}
        Err(e) => println!("  [Error] {}\n", e.user_message()),
    }
}
