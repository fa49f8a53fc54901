//! Terminal session over stdin/stdout.

use std::io;

use atlas_core::model::{Message, MessageId, OPTION_COUNT, OptionStatus, Speaker, Stage};
use services::{Clock, Pacing, SessionController};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdout};
use tracing::debug;

const HELP: &str = "Commands: /quiz, /chat, /help, /quit. In a quiz type 1-4 to answer.";

#[derive(Debug, Clone, PartialEq, Eq)]
enum PlayCommand {
    Quit,
    Help,
    StartQuiz,
    StartChat,
    Answer(usize),
    Chat(String),
    Nothing,
}

/// Interpret one input line for the given stage.
///
/// Numbers only count as answers while a quiz is running; anywhere else they
/// are plain chat text.
fn parse_line(line: &str, stage: Stage) -> PlayCommand {
    let line = line.trim();
    match line {
        "" => PlayCommand::Nothing,
        "/quit" | "/exit" => PlayCommand::Quit,
        "/help" => PlayCommand::Help,
        "/quiz" => PlayCommand::StartQuiz,
        "/chat" => PlayCommand::StartChat,
        _ => match (stage, line.parse::<usize>()) {
            (Stage::Quiz, Ok(number)) => PlayCommand::Answer(number.wrapping_sub(1)),
            _ => PlayCommand::Chat(line.to_string()),
        },
    }
}

fn render_message(message: &Message) -> String {
    let author = match message.speaker() {
        Speaker::User => "You",
        Speaker::Assistant => "Atlas",
    };
    let mut out = format!("{author}: {}", message.text());
    if let Some(options) = message.options() {
        for (index, option) in options.iter().enumerate() {
            let marker = match message.option_status(index) {
                OptionStatus::Pending => " ",
                OptionStatus::Correct => "✓",
                OptionStatus::Incorrect => "✗",
            };
            out.push_str(&format!("\n  {marker} {}) {option}", index + 1));
        }
    }
    out
}

struct Transcript {
    last_printed: Option<MessageId>,
}

impl Transcript {
    fn new() -> Self {
        Self { last_printed: None }
    }

    /// Lines for messages added since the last call. The user's own lines are
    /// skipped since they are already on screen.
    fn take_new(&mut self, controller: &SessionController) -> Vec<String> {
        let state = controller.state();
        let mut lines = Vec::new();
        for message in state.messages() {
            if self.last_printed.is_some_and(|last| message.id() <= last) {
                continue;
            }
            self.last_printed = Some(message.id());
            if message.speaker() == Speaker::User {
                continue;
            }
            if message.is_question()
                && let Some(progress) = state.progress()
            {
                lines.push(format!(
                    "[Question {}/{} | Score: {}]",
                    progress.question_number, progress.total, progress.score
                ));
            }
            lines.push(render_message(message));
        }
        lines
    }
}

async fn flush_new(
    transcript: &mut Transcript,
    controller: &SessionController,
    stdout: &mut Stdout,
) -> io::Result<()> {
    for line in transcript.take_new(controller) {
        stdout.write_all(line.as_bytes()).await?;
        stdout.write_all(b"\n\n").await?;
    }
    stdout.flush().await
}

/// Let every paced follow-up play out in real time.
async fn settle(
    transcript: &mut Transcript,
    controller: &mut SessionController,
    stdout: &mut Stdout,
) -> io::Result<()> {
    while let Some(wait) = controller.next_due_in() {
        tokio::time::sleep(wait).await;
        controller.advance(wait);
        flush_new(transcript, controller, stdout).await?;
    }
    Ok(())
}

/// Run an interactive session until `/quit` or end of input.
///
/// # Errors
///
/// Returns any I/O error from stdin or stdout.
pub async fn run(pacing: Pacing, seed: Option<u64>) -> io::Result<()> {
    let controller = SessionController::new(pacing, Clock::system());
    let mut controller = match seed {
        Some(seed) => controller.with_seed(seed),
        None => controller,
    };

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut transcript = Transcript::new();

    flush_new(&mut transcript, &controller, &mut stdout).await?;
    stdout.write_all(format!("{HELP}\n\n").as_bytes()).await?;

    loop {
        settle(&mut transcript, &mut controller, &mut stdout).await?;

        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        let outcome = match parse_line(&line, controller.state().stage()) {
            PlayCommand::Quit => break,
            PlayCommand::Nothing => continue,
            PlayCommand::Help => {
                stdout.write_all(format!("{HELP}\n\n").as_bytes()).await?;
                continue;
            }
            PlayCommand::StartQuiz => controller.start_quiz(),
            PlayCommand::StartChat => controller.start_chat(),
            PlayCommand::Answer(selected) => {
                if selected >= OPTION_COUNT {
                    stdout
                        .write_all(format!("Pick a number from 1 to {OPTION_COUNT}.\n\n").as_bytes())
                        .await?;
                }
                controller.submit_answer(selected)
            }
            PlayCommand::Chat(text) => controller.submit_chat_message(text),
        };
        debug!(?outcome, "terminal input handled");

        if !outcome.is_applied() && controller.state().is_idle() {
            stdout.write_all(format!("{HELP}\n\n").as_bytes()).await?;
        }
        flush_new(&mut transcript, &controller, &mut stdout).await?;
    }

    Ok(())
}
