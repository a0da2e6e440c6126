use std::sync::Arc;

use entresupport::config::AnalysisConfig;
use entresupport::fixture::demo_analysis;
use entresupport::source::{AnalysisClient, FixtureSource};
use entresupport::workflow::{
    AnalysisWorkflow, MessageRole, MessageStatus, SectionKind, SubmitOutcome, RESEARCH_STAGES,
};

fn fixture_workflow() -> AnalysisWorkflow {
    AnalysisWorkflow::new(Arc::new(FixtureSource), &AnalysisConfig::default())
}

#[tokio::test(start_paused = true)]
async fn cat_food_delivery_runs_through_every_stage() {
    let mut workflow = fixture_workflow();
    assert_eq!(workflow.submit("cat food delivery"), SubmitOutcome::Started(1));

    let mut labels: Vec<String> = Vec::new();
    loop {
        let loading: Vec<_> = workflow.messages().iter().filter(|m| m.is_loading()).collect();
        assert!(loading.len() <= 1);
        if let Some(message) = loading.first() {
            let label = message.content.as_text().unwrap().to_string();
            if labels.last() != Some(&label) {
                labels.push(label);
            }
        }
        if !workflow.next_event().await {
            break;
        }
    }

    assert_eq!(labels, RESEARCH_STAGES);
    assert!(!workflow.is_analyzing());

    let messages = workflow.messages();
    assert_eq!(messages.len(), 2);

    assert_eq!(messages[0].role, MessageRole::User);
    assert_eq!(messages[0].content.as_text(), Some("cat food delivery"));

    let agent = &messages[1];
    assert_eq!(agent.role, MessageRole::Agent);
    assert_eq!(agent.status, MessageStatus::Complete);

    let report = agent.content.as_report().unwrap();
    let market = report.section(SectionKind::MarketOverview).unwrap();
    assert_eq!(market.title.as_deref(), Some("Market Overview"));
    assert_eq!(report.section(SectionKind::Team).unwrap().blocks.len(), 3);

    let swot = report.section(SectionKind::Swot).unwrap();
    assert_eq!(swot.blocks.len(), 4);
    let strengths: Vec<String> = swot.blocks[0].items.iter().map(|i| i.text.clone()).collect();
    assert_eq!(strengths, demo_analysis().swot_analysis.strengths);
}

#[tokio::test(start_paused = true)]
async fn empty_input_changes_nothing() {
    let mut workflow = fixture_workflow();

    assert_eq!(workflow.submit(""), SubmitOutcome::IgnoredEmpty);
    assert_eq!(workflow.submit("  \n\t "), SubmitOutcome::IgnoredEmpty);

    assert!(workflow.messages().is_empty());
    assert!(!workflow.is_analyzing());
    assert_eq!(workflow.progress().percent, 0);
    assert!(!workflow.next_event().await);
}

#[tokio::test(start_paused = true)]
async fn resubmitting_while_loading_is_ignored() {
    let mut workflow = fixture_workflow();
    workflow.submit("cat food delivery");

    assert_eq!(workflow.submit("dog food delivery"), SubmitOutcome::IgnoredBusy);

    let messages = workflow.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages.iter().filter(|m| m.role == MessageRole::User).count(), 1);
    assert_eq!(messages.iter().filter(|m| m.is_loading()).count(), 1);

    workflow.run_until_idle().await;
    let roles: Vec<_> = workflow.messages().iter().map(|m| m.role).collect();
    assert_eq!(roles, vec![MessageRole::User, MessageRole::Agent]);
}

#[tokio::test]
async fn remote_service_error_becomes_error_message() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/analyze")
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail":"Agent pipeline crashed"}"#)
        .create_async()
        .await;

    let config = AnalysisConfig {
        api_base_url: server.url(),
        duration_ms: 200,
        ..AnalysisConfig::default()
    };
    let client = AnalysisClient::new(server.url(), config.request_timeout()).unwrap();
    let mut workflow = AnalysisWorkflow::new(Arc::new(client), &config);

    workflow.submit("cat food delivery");
    workflow.run_until_idle().await;
    mock.assert_async().await;

    let last = workflow.messages().last().unwrap();
    assert_eq!(last.role, MessageRole::Error);
    assert_eq!(last.status, MessageStatus::Error);
    assert_eq!(last.content.as_text(), Some("Agent pipeline crashed"));
    assert!(!workflow.is_analyzing());
}

#[tokio::test(start_paused = true)]
async fn subscribers_see_every_snapshot() {
    let mut workflow = fixture_workflow();
    let rx = workflow.subscribe();

    workflow.submit("cat food delivery");
    assert_eq!(rx.borrow().len(), 2);

    workflow.run_until_idle().await;
    let snapshot = rx.borrow();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[1].role, MessageRole::Agent);
}

#[tokio::test]
async fn remote_body_without_sections_becomes_error_message() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/analyze")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create_async()
        .await;

    let config = AnalysisConfig {
        api_base_url: server.url(),
        duration_ms: 200,
        ..AnalysisConfig::default()
    };
    let client = AnalysisClient::new(server.url(), config.request_timeout()).unwrap();
    let mut workflow = AnalysisWorkflow::new(Arc::new(client), &config);

    workflow.submit("cat food delivery");
    workflow.run_until_idle().await;
    mock.assert_async().await;

    let last = workflow.messages().last().unwrap();
    assert_eq!(last.role, MessageRole::Error);
    assert_eq!(
        last.content.as_text(),
        Some("Invalid analysis result: no analysis sections returned")
    );
    assert!(!workflow.is_analyzing());
}
