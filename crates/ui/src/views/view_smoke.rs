use std::time::Duration;

use services::Pacing;

use super::test_harness::{setup_app_harness, setup_session_harness};
use crate::vm::SessionIntent;

#[test]
fn session_view_smoke_renders_welcome_and_mode_picker() {
    let harness = setup_session_harness(Pacing::standard());
    let html = harness.render();

    assert!(html.contains("ChatPT Atlas"), "missing title in {html}");
    assert!(html.contains("Your AI Geography Companion"), "missing subtitle in {html}");
    assert!(html.contains("Welcome to ChatPT Atlas!"), "missing welcome in {html}");
    assert!(html.contains("Start Quiz"), "missing quiz button in {html}");
    assert!(html.contains("Chat Mode"), "missing chat button in {html}");
    assert!(!html.contains("scoreboard"), "unexpected scoreboard in {html}");
}

#[test]
fn session_view_smoke_quiz_start_shows_scoreboard_and_options() {
    let mut harness = setup_session_harness(Pacing::standard());
    harness.dispatch(SessionIntent::StartQuiz);

    let prompt = harness.with_controller(|ctl| {
        ctl.state()
            .current_question()
            .expect("question on screen")
            .prompt()
            .to_string()
    });

    let html = harness.render();
    assert!(html.contains("Question 1/10 | Score: 0"), "missing scoreboard in {html}");
    assert!(html.contains(&prompt), "missing {prompt} in {html}");
    assert_eq!(html.matches("option-button").count(), 4);
    assert!(!html.contains("options locked"), "options locked early in {html}");
    assert!(!html.contains("Start Quiz"), "mode picker still shown in {html}");
}

#[test]
fn session_view_smoke_answer_reveals_then_feedback_arrives() {
    let mut harness = setup_session_harness(Pacing::standard());
    harness.dispatch(SessionIntent::StartQuiz);
    let correct = harness.correct_answer();

    harness.dispatch(SessionIntent::Answer(correct));
    let html = harness.render();
    assert!(html.contains("options locked"), "options not locked in {html}");
    assert!(html.contains("option-button correct"), "no correct marker in {html}");
    assert_eq!(html.matches("option-button incorrect").count(), 3);
    assert!(!html.contains("Correct!"), "feedback arrived early in {html}");

    harness.with_controller(|ctl| ctl.advance(Duration::from_secs(1)));
    let html = harness.render();
    assert!(html.contains("✅ Correct!"), "missing feedback in {html}");
    assert!(html.contains("Question 1/10 | Score: 1"), "score not updated in {html}");

    harness.with_controller(|ctl| ctl.advance(Duration::from_secs(2)));
    let html = harness.render();
    assert!(html.contains("Question 2/10 | Score: 1"), "did not advance in {html}");
}

#[test]
fn session_view_smoke_second_click_changes_nothing() {
    let mut harness = setup_session_harness(Pacing::standard());
    harness.dispatch(SessionIntent::StartQuiz);
    let correct = harness.correct_answer();

    harness.dispatch(SessionIntent::Answer((correct + 1) % 4));
    let before = harness.render();
    harness.dispatch(SessionIntent::Answer(correct));
    assert_eq!(harness.render(), before);
    assert_eq!(harness.with_controller(|ctl| ctl.state().score()), 0);
}

#[test]
fn session_view_smoke_completed_quiz_offers_play_again() {
    let mut harness = setup_session_harness(Pacing::instant());
    harness.dispatch(SessionIntent::StartQuiz);

    for _ in 0..10 {
        let correct = harness.correct_answer();
        harness.dispatch(SessionIntent::Answer(correct));
        harness.with_controller(|ctl| ctl.run_until_idle());
    }

    let html = harness.render();
    assert!(html.contains("Final score: 10/10"), "missing final score in {html}");
    assert!(html.contains("Excellent work!"), "missing verdict in {html}");
    assert!(html.contains("Play Again"), "missing replay button in {html}");

    harness.dispatch(SessionIntent::StartQuiz);
    let html = harness.render();
    assert!(html.contains("Question 1/10 | Score: 0"), "replay did not reset in {html}");
    assert!(!html.contains("Play Again"), "replay button still shown in {html}");
}

#[test]
fn session_view_smoke_chat_shows_typing_until_reply() {
    let mut harness = setup_session_harness(Pacing::standard());

    harness.dispatch(SessionIntent::StartChat);
    assert!(harness.render().contains("chat-form"), "missing chat form");

    harness.dispatch(SessionIntent::SendChat("What is the capital of Japan?".to_string()));
    let html = harness.render();
    assert!(html.contains("What is the capital of Japan?"), "missing user message in {html}");
    assert!(html.contains("AI is typing..."), "missing typing indicator in {html}");
    assert!(html.contains("chat-form waiting"), "input not disabled in {html}");

    harness.with_controller(|ctl| ctl.advance(Duration::from_secs(1)));
    let html = harness.render();
    assert!(
        html.contains("Capitals are the designated administrative centers"),
        "missing reply in {html}"
    );
    assert!(!html.contains("AI is typing..."), "typing indicator stuck in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn app_shell_smoke_renders_session() {
    let harness = setup_app_harness(Pacing::instant());
    let html = harness.render();

    assert!(html.contains("app-root"), "missing root container in {html}");
    assert!(html.contains("Welcome to ChatPT Atlas!"), "missing welcome in {html}");
    assert!(html.contains("Start Quiz"), "missing mode picker in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn app_shell_smoke_driver_delivers_reply() {
    let mut harness = setup_app_harness(Pacing::instant());
    harness.dispatch(SessionIntent::StartChat);
    harness.dispatch(SessionIntent::SendChat("tell me about islands".to_string()));
    assert!(harness.render().contains("AI is typing..."));

    for _ in 0..40 {
        if !harness.with_controller(|ctl| ctl.has_pending()) {
            break;
        }
        harness.drive_async().await;
    }

    let html = harness.render();
    assert!(html.contains("Greenland is the world"), "missing reply in {html}");
    assert!(!html.contains("AI is typing..."), "typing indicator stuck in {html}");
}
