use std::time::Duration;

use atlas_core::model::{FALLBACK_REPLY, QuestionId, Speaker, Stage};
use atlas_core::time::fixed_clock;
use proptest::prelude::*;
use services::{Pacing, SessionController};

fn play_full_quiz(ctl: &mut SessionController, pick: impl Fn(usize, usize) -> usize) -> u32 {
    let mut expected = 0;
    for turn in 0..ctl.state().questions().len() {
        let correct = ctl
            .state()
            .current_question()
            .expect("question on screen")
            .correct_index();
        let selected = pick(turn, correct);
        if selected == correct {
            expected += 1;
        }
        assert!(ctl.submit_answer(selected).is_applied());
        ctl.run_until_idle();
    }
    expected
}

#[test]
fn full_quiz_then_replay() {
    let mut ctl = SessionController::new(Pacing::standard(), fixed_clock()).with_seed(42);
    ctl.start_quiz();

    let expected = play_full_quiz(&mut ctl, |turn, correct| {
        if turn % 2 == 0 { correct } else { (correct + 1) % 4 }
    });

    assert_eq!(expected, 5);
    assert_eq!(ctl.state().stage(), Stage::QuizComplete);
    assert_eq!(ctl.state().score(), 5);
    assert_eq!(
        ctl.state().last_message().unwrap().text(),
        "🎉 Quiz complete! Your final score: 5/10. Good job!"
    );
    // Ten questions at 1s + 2s each.
    assert_eq!(ctl.elapsed(), Duration::from_secs(30));

    let first_order: Vec<QuestionId> = ctl.state().questions().iter().map(|q| q.id()).collect();

    assert!(ctl.start_quiz().is_applied());
    assert_eq!(ctl.state().stage(), Stage::Quiz);
    assert_eq!(ctl.state().score(), 0);
    assert_eq!(ctl.state().question_index(), 0);
    assert!(!ctl.state().answered());
    assert_eq!(ctl.state().messages().len(), 1);

    let second_order: Vec<QuestionId> = ctl.state().questions().iter().map(|q| q.id()).collect();
    let mut sorted = second_order.clone();
    sorted.sort();
    assert_eq!(sorted, (0..10).map(QuestionId::new).collect::<Vec<_>>());
    // Seed 42 reshuffles differently on replay.
    assert_ne!(first_order, second_order);
}

#[test]
fn answers_after_completion_are_ignored() {
    let mut ctl = SessionController::new(Pacing::instant(), fixed_clock()).with_seed(1);
    ctl.start_quiz();
    play_full_quiz(&mut ctl, |_, correct| correct);

    assert_eq!(ctl.state().score(), 10);
    assert!(!ctl.submit_answer(0).is_applied());
    assert_eq!(ctl.state().score(), 10);
    assert!(
        ctl.state()
            .last_message()
            .unwrap()
            .text()
            .ends_with("Excellent work!")
    );
}

#[test]
fn chat_session_uses_canned_replies() {
    let mut ctl = SessionController::new(Pacing::standard(), fixed_clock());
    ctl.start_chat();

    ctl.submit_chat_message("What is the capital of Japan?");
    ctl.advance(Duration::from_secs(1));
    ctl.submit_chat_message("xyz123");
    ctl.advance(Duration::from_secs(1));
    assert!(!ctl.submit_chat_message("   ").is_applied());

    let texts: Vec<(Speaker, &str)> = ctl
        .state()
        .messages()
        .iter()
        .map(|m| (m.speaker(), m.text()))
        .collect();
    assert_eq!(texts.len(), 5);
    assert_eq!(texts[1], (Speaker::User, "What is the capital of Japan?"));
    assert!(texts[2].1.starts_with("Capitals are the designated administrative centers"));
    assert_eq!(texts[3], (Speaker::User, "xyz123"));
    assert_eq!(texts[4], (Speaker::Assistant, FALLBACK_REPLY));
}

#[test]
fn starting_quiz_mid_chat_drops_pending_reply() {
    let mut ctl = SessionController::new(Pacing::standard(), fixed_clock()).with_seed(3);
    ctl.start_chat();
    ctl.submit_chat_message("tell me about deserts");
    ctl.start_quiz();

    ctl.advance(Duration::from_secs(5));
    assert_eq!(ctl.state().stage(), Stage::Quiz);
    assert_eq!(ctl.state().messages().len(), 1);
    assert!(ctl.state().messages()[0].is_question());
}

proptest! {
    #[test]
    fn score_matches_correct_submissions(
        picks in proptest::collection::vec(0usize..4, 10),
        repeats in proptest::collection::vec(any::<bool>(), 10),
        seed in any::<u64>(),
    ) {
        let mut ctl = SessionController::new(Pacing::instant(), fixed_clock()).with_seed(seed);
        ctl.start_quiz();

        let mut expected = 0_u32;
        for (pick, repeat) in picks.iter().zip(repeats.iter()) {
            let correct = ctl.state().current_question().unwrap().correct_index();
            if *pick == correct {
                expected += 1;
            }
            prop_assert!(ctl.submit_answer(*pick).is_applied());
            if *repeat {
                // Second click on the same question never counts.
                prop_assert!(!ctl.submit_answer(correct).is_applied());
            }
            ctl.run_until_idle();
        }

        prop_assert_eq!(ctl.state().stage(), Stage::QuizComplete);
        prop_assert_eq!(ctl.state().score(), expected);
        prop_assert!(ctl.state().score() <= 10);
    }
}
