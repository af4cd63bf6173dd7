use kisaan_core::entities::ChatMessage;
use kisaan_core::enums::Author;
use kisaan_views::pages::ChatView;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::root_commands::ChatArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::alerts::{BoardText, board_sections};
use crate::context::AppContext;
use crate::output::{output, output_sections};
use crate::progress::Progress;

/// Handle `kisaan chat`. With a question, ask once; otherwise read one
/// question per stdin line until EOF.
pub async fn handle(args: &ChatArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut view = ChatView::mount(ctx.session()).with_user(args.user_id);
    let text = view.text();

    if args.alerts {
        let progress = Progress::spinner(text.loading);
        let state = view.settle().await;
        progress.finish_clear();
        let board_text = BoardText {
            weather: text.weather_alerts,
            pests: text.pest_alerts,
            empty: text.no_alerts,
        };
        let sections = board_sections(state.loaded(), &board_text, flags.format)?;
        output_sections(&sections, flags.format)?;
    }

    if let Some(question) = args.question() {
        return ask(&mut view, &question, flags).await;
    }

    if flags.format == OutputFormat::Table {
        if let Some(welcome) = view.messages().first() {
            print_message(welcome);
        }
    }
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        ask(&mut view, &line, flags).await?;
    }
    tracing::debug!(messages = view.messages().len(), "chat session ended");
    Ok(())
}

async fn ask(view: &mut ChatView, question: &str, flags: &GlobalFlags) -> anyhow::Result<()> {
    let progress = Progress::spinner(view.text().loading);
    let reply = view.send(question).await;
    progress.finish_clear();

    match reply {
        Some(message) if flags.format == OutputFormat::Table => {
            print_message(message);
            Ok(())
        }
        Some(message) => output(message, flags.format),
        None => Ok(()),
    }
}

fn print_message(message: &ChatMessage) {
    println!("{}\n", format_message(message));
}

fn format_message(message: &ChatMessage) -> String {
    let author = match message.author {
        Author::User => "You",
        Author::Bot => "Agri-Bot",
    };
    format!(
        "[{}] {author}: {}",
        message.timestamp.format("%H:%M"),
        message.text
    )
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn bot_reply_is_prefixed_with_time_and_author() {
        let message = ChatMessage {
            author: Author::Bot,
            text: "Irrigate early.".into(),
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 6, 5, 0).unwrap(),
        };
        assert_eq!(format_message(&message), "[06:05] Agri-Bot: Irrigate early.");
    }
}
