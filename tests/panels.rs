mod support;

use std::sync::Arc;
use support::{spawn_backend, unreachable_url};
use tokio::sync::Mutex;
use wellbeing_companion::chatbox::{self, Chatbox, ChatboxState, REPORT_ERROR, TEXT_ERROR};
use wellbeing_companion::fitness::{
    self, ActivityLevel, AgeGroup, FitnessPlanner, Goal, PLAN_ERROR,
};
use wellbeing_companion::models::{Sender, UploadedFile};
use wellbeing_companion::mood::{self, MoodChat, FALLBACK_REPLY};
use wellbeing_companion::BackendClient;

#[tokio::test]
async fn mood_submit_records_reply_and_clears_message() {
    let backend = spawn_backend().await;
    let client = BackendClient::new(backend.base_url.as_str()).unwrap();
    let panel = Mutex::new(MoodChat::default());

    assert!(mood::submit(&panel, &client, "Overwhelmed", "too many tabs open").await);

    let panel = panel.lock().await;
    assert_eq!(panel.exchanges().len(), 1);
    assert_eq!(panel.exchanges()[0].user_text, "too many tabs open");
    assert_eq!(panel.exchanges()[0].reply, "[Overwhelmed] too many tabs open");
    assert_eq!(panel.message(), "");
}

#[tokio::test]
async fn mood_submit_swallows_backend_errors() {
    let backend = spawn_backend().await;
    let client = BackendClient::new(backend.base_url.as_str()).unwrap();
    let panel = Mutex::new(MoodChat::default());

    assert!(mood::submit(&panel, &client, "Sad", "fail").await);

    let panel = panel.lock().await;
    assert_eq!(panel.exchanges()[0].user_text, "fail");
    assert_eq!(panel.exchanges()[0].reply, FALLBACK_REPLY);
}

#[tokio::test]
async fn guarded_mood_submit_issues_no_request() {
    let backend = spawn_backend().await;
    let client = BackendClient::new(backend.base_url.as_str()).unwrap();
    let panel = Mutex::new(MoodChat::default());

    assert!(!mood::submit(&panel, &client, "", "  ").await);

    assert_eq!(backend.json_count("/chat/mood").await, 0);
    assert!(panel.lock().await.exchanges().is_empty());
}

#[tokio::test]
async fn fitness_generate_shows_backend_plan() {
    let backend = spawn_backend().await;
    let client = BackendClient::new(backend.base_url.as_str()).unwrap();
    let panel = Mutex::new(FitnessPlanner::default());

    fitness::generate(
        &panel,
        &client,
        Goal::WeightLoss,
        ActivityLevel::Beginner,
        AgeGroup::From18To25,
    )
    .await;

    let panel = panel.lock().await;
    assert_eq!(panel.plan(), ["Day 1: Walk 20 min"]);
    assert_eq!(panel.tips(), ["Stay hydrated"]);
}

#[tokio::test]
async fn fitness_failure_replaces_plan_with_error() {
    let backend = spawn_backend().await;
    let client = BackendClient::new(backend.base_url.as_str()).unwrap();
    let panel = Mutex::new(FitnessPlanner::default());

    fitness::generate(
        &panel,
        &client,
        Goal::WeightLoss,
        ActivityLevel::Beginner,
        AgeGroup::From18To25,
    )
    .await;
    fitness::generate(
        &panel,
        &client,
        Goal::Flexibility,
        ActivityLevel::Active,
        AgeGroup::From26To35,
    )
    .await;

    let panel = panel.lock().await;
    assert_eq!(panel.plan(), [PLAN_ERROR]);
    assert!(panel.tips().is_empty());
}

#[tokio::test]
async fn chatbox_text_and_report_share_one_list() {
    let backend = spawn_backend().await;
    let client = BackendClient::new(backend.base_url.as_str()).unwrap();
    let panel = Mutex::new(Chatbox::default());

    assert!(chatbox::send_text(&panel, &client, "Is coffee bad?").await);
    panel
        .lock()
        .await
        .select_file(Some(UploadedFile::new("labs.pdf", vec![1, 2, 3])));
    assert!(chatbox::analyze_report(&panel, &client).await);

    let panel = panel.lock().await;
    let messages = panel.messages();
    assert_eq!(messages.len(), 4);
    assert_eq!(messages[1].text, "You said: Is coffee bad?");
    assert_eq!(messages[2].text, "Uploaded report: labs.pdf");
    assert_eq!(messages[3].sender, Sender::ReportAnalysis);
    assert!(messages[3].text.contains("\"labs.pdf\""));
    assert!(messages[3].text.contains("All values normal."));
    assert!(messages[3].text.contains("- Stay active"));
    assert!(messages[3].text.contains("- Eat balanced meals"));
    assert!(panel.selected_file().is_none());
}

#[tokio::test]
async fn chatbox_errors_become_messages() {
    let client = BackendClient::new(unreachable_url()).unwrap();
    let panel = Mutex::new(Chatbox::default());

    chatbox::send_text(&panel, &client, "hello").await;
    panel
        .lock()
        .await
        .select_file(Some(UploadedFile::new("broken.pdf", vec![0])));
    chatbox::analyze_report(&panel, &client).await;

    let panel = panel.lock().await;
    let texts: Vec<_> = panel.messages().iter().map(|m| m.text.as_str()).collect();
    assert_eq!(
        texts,
        ["hello", TEXT_ERROR, "Uploaded report: broken.pdf", REPORT_ERROR]
    );
    assert_eq!(panel.input(), "");
}

#[tokio::test]
async fn pending_chatbox_call_blocks_both_operations() {
    let backend = spawn_backend().await;
    let client = BackendClient::new(backend.base_url.as_str()).unwrap();
    let panel = Arc::new(Mutex::new(Chatbox::default()));

    let in_flight = {
        let panel = Arc::clone(&panel);
        let client = client.clone();
        tokio::spawn(async move { chatbox::send_text(&panel, &client, "slow").await })
    };
    backend.wait_for_json("/chatbox", 1).await;
    assert_eq!(panel.lock().await.state(), ChatboxState::SendingText);

    assert!(!chatbox::send_text(&panel, &client, "again").await);
    panel
        .lock()
        .await
        .select_file(Some(UploadedFile::new("labs.pdf", vec![7])));
    assert!(!chatbox::analyze_report(&panel, &client).await);
    assert_eq!(backend.json_count("/chatbox").await, 1);
    assert!(backend.recorded.lock().await.uploads.is_empty());
    assert_eq!(panel.lock().await.messages().len(), 1);

    backend.release.notify_one();
    assert!(in_flight.await.unwrap());

    let panel = panel.lock().await;
    assert_eq!(panel.messages().len(), 2);
    assert_eq!(panel.messages()[1].text, "finally");
    assert_eq!(panel.state(), ChatboxState::Idle);
}

#[tokio::test]
async fn reset_during_flight_drops_the_late_reply() {
    let backend = spawn_backend().await;
    let client = BackendClient::new(backend.base_url.as_str()).unwrap();
    let panel = Arc::new(Mutex::new(Chatbox::default()));

    let in_flight = {
        let panel = Arc::clone(&panel);
        let client = client.clone();
        tokio::spawn(async move { chatbox::send_text(&panel, &client, "slow").await })
    };
    backend.wait_for_json("/chatbox", 1).await;

    panel.lock().await.reset();
    backend.release.notify_one();

    assert!(!in_flight.await.unwrap());
    assert!(panel.lock().await.messages().is_empty());
}

#[tokio::test]
async fn upload_during_text_send_is_rejected_and_not_kept() {
    let backend = spawn_backend().await;
    let client = BackendClient::new(backend.base_url.as_str()).unwrap();
    let panel = Arc::new(Mutex::new(Chatbox::default()));

    let in_flight = {
        let panel = Arc::clone(&panel);
        let client = client.clone();
        tokio::spawn(async move { chatbox::send_text(&panel, &client, "slow").await })
    };
    backend.wait_for_json("/chatbox", 1).await;

    let file = UploadedFile::new("labs.pdf", vec![9, 9]);
    assert!(!chatbox::upload_report(&panel, &client, file).await);
    assert!(panel.lock().await.selected_file().is_none());

    backend.release.notify_one();
    assert!(in_flight.await.unwrap());

    let panel_now = panel.lock().await;
    assert!(panel_now.selected_file().is_none());
    assert_eq!(panel_now.messages().len(), 2);
    drop(panel_now);
    assert!(backend.recorded.lock().await.uploads.is_empty());

    let file = UploadedFile::new("labs.pdf", vec![9, 9]);
    assert!(chatbox::upload_report(&panel, &client, file).await);
    assert_eq!(backend.recorded.lock().await.uploads.len(), 1);
    assert_eq!(panel.lock().await.messages()[3].sender, Sender::ReportAnalysis);
}
