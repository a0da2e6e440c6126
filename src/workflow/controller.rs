//! Analysis Workflow Controller
//!
//! Owns the message log and the progress simulator and runs at most one
//! analysis at a time. Timer and fetch tasks report back through an event
//! channel; [`AnalysisWorkflow::poll_events`] or
//! [`AnalysisWorkflow::next_event`] applies them. Events carry the run id they
//! belong to and are dropped once that run is finished or cancelled.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use super::message::{Message, MessageId, MessageLog};
use super::progress::{ProgressSimulator, ProgressState};
use super::render::render;
use super::stages::StageSequence;
use crate::config::AnalysisConfig;
use crate::models::AnalysisResult;
use crate::source::AnalysisSource;
use crate::types::{AppError, AppResult};

pub type RunId = u64;

/// What `submit` did with the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Started(RunId),
    /// Empty or whitespace-only input
    IgnoredEmpty,
    /// A run is already in flight
    IgnoredBusy,
}

#[derive(Debug)]
enum WorkflowEvent {
    StageChanged { run: RunId, stage_index: usize },
    TimerDone { run: RunId },
    ResultReady { run: RunId, result: AppResult<AnalysisResult> },
}

impl WorkflowEvent {
    fn run(&self) -> RunId {
        match self {
            WorkflowEvent::StageChanged { run, .. }
            | WorkflowEvent::TimerDone { run }
            | WorkflowEvent::ResultReady { run, .. } => *run,
        }
    }
}

struct ActiveRun {
    id: RunId,
    loading_id: MessageId,
    timer_done: bool,
    result: Option<AppResult<AnalysisResult>>,
    fetch: JoinHandle<()>,
}

pub struct AnalysisWorkflow {
    log: MessageLog,
    stages: StageSequence,
    simulator: ProgressSimulator,
    source: Arc<dyn AnalysisSource>,
    stage_index: usize,
    active: Option<ActiveRun>,
    last_run: RunId,
    events_tx: mpsc::UnboundedSender<WorkflowEvent>,
    events_rx: mpsc::UnboundedReceiver<WorkflowEvent>,
    snapshots: watch::Sender<Vec<Message>>,
}

impl AnalysisWorkflow {
    pub fn new(source: Arc<dyn AnalysisSource>, config: &AnalysisConfig) -> Self {
        Self::with_stages(source, StageSequence::default(), config)
    }

    pub fn with_stages(
        source: Arc<dyn AnalysisSource>,
        stages: StageSequence,
        config: &AnalysisConfig,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (snapshots, _) = watch::channel(Vec::new());
        Self {
            log: MessageLog::new(),
            simulator: ProgressSimulator::with_total_duration(stages.clone(), config.duration()),
            stages,
            source,
            stage_index: 0,
            active: None,
            last_run: 0,
            events_tx,
            events_rx,
            snapshots,
        }
    }

    pub fn messages(&self) -> &[Message] {
        self.log.messages()
    }

    pub fn stages(&self) -> &StageSequence {
        &self.stages
    }

    pub fn is_analyzing(&self) -> bool {
        self.active.is_some()
    }

    pub fn progress(&self) -> ProgressState {
        ProgressState {
            percent: self.simulator.progress(),
            stage_index: self.stage_index,
        }
    }

    /// Label of the stage the current (or last) run is in
    pub fn current_stage_label(&self) -> &str {
        self.stages.label(self.stage_index).unwrap_or_else(|| self.stages.first())
    }

    /// Watch the log; a fresh snapshot is published after every change
    pub fn subscribe(&self) -> watch::Receiver<Vec<Message>> {
        self.snapshots.subscribe()
    }

    /// Start analysing `idea`. Must be called inside a Tokio runtime.
    pub fn submit(&mut self, idea: &str) -> SubmitOutcome {
        if idea.trim().is_empty() {
            debug!("Ignoring empty submission");
            return SubmitOutcome::IgnoredEmpty;
        }
        if let Some(run) = &self.active {
            debug!(active_run = run.id, "Ignoring submission while a run is active");
            return SubmitOutcome::IgnoredBusy;
        }

        self.log.push(Message::user(idea));

        self.last_run += 1;
        let run = self.last_run;
        self.stage_index = 0;
        let loading_id = self.log.push(Message::loading(self.stages.first()));

        let fetch = {
            let source = self.source.clone();
            let tx = self.events_tx.clone();
            let idea = idea.to_string();
            tokio::spawn(async move {
                // A panicking source still has to end the run
                let result = AssertUnwindSafe(source.analyze(&idea))
                    .catch_unwind()
                    .await
                    .unwrap_or_else(|_| {
                        error!(run, "Analysis source panicked");
                        Err(AppError::Internal("analysis source panicked".into()))
                    });
                tx.send(WorkflowEvent::ResultReady { run, result }).ok();
            })
        };

        let stage_tx = self.events_tx.clone();
        let done_tx = self.events_tx.clone();
        self.simulator.start(
            move |_progress, stage_index| {
                stage_tx.send(WorkflowEvent::StageChanged { run, stage_index }).ok();
            },
            move || {
                done_tx.send(WorkflowEvent::TimerDone { run }).ok();
            },
        );

        self.active = Some(ActiveRun {
            id: run,
            loading_id,
            timer_done: false,
            result: None,
            fetch,
        });

        info!(run, source = self.source.name(), idea_len = idea.len(), "Analysis started");
        self.publish();
        SubmitOutcome::Started(run)
    }

    /// Cancel the active run. Returns `false` when nothing was running.
    pub fn stop(&mut self) -> bool {
        let Some(run) = self.active.take() else {
            return false;
        };
        self.simulator.stop();
        run.fetch.abort();
        self.log.remove(run.loading_id);
        info!(run = run.id, "Analysis cancelled");
        self.publish();
        true
    }

    /// Apply every event that is already queued. Returns how many were applied.
    pub fn poll_events(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply(event);
            applied += 1;
        }
        applied
    }

    /// Wait for the next event of the active run and apply it. Returns `false`
    /// right away when no run is active.
    pub async fn next_event(&mut self) -> bool {
        while let Some(active) = self.active.as_ref().map(|r| r.id) {
            let Some(event) = self.events_rx.recv().await else {
                return false;
            };
            let current = event.run() == active;
            self.apply(event);
            if current {
                return true;
            }
        }
        false
    }

    /// Drive the active run to its end
    pub async fn run_until_idle(&mut self) {
        while self.next_event().await {}
    }

    fn apply(&mut self, event: WorkflowEvent) {
        let Some(active) = self.active.as_mut().filter(|r| r.id == event.run()) else {
            debug!(run = event.run(), "Dropping event from a finished run");
            return;
        };

        match event {
            WorkflowEvent::StageChanged { stage_index, .. } => {
                if stage_index <= self.stage_index {
                    return;
                }
                self.stage_index = stage_index;
                if let Some(label) = self.stages.label(stage_index) {
                    debug!(run = active.id, stage = stage_index, label, "Stage changed");
                    self.log.update_loading_text(active.loading_id, label);
                }
                self.publish();
            }
            WorkflowEvent::TimerDone { .. } => {
                active.timer_done = true;
                self.try_finish();
            }
            WorkflowEvent::ResultReady { result, .. } => {
                // Failures end the run right away; successes wait for the deadline.
                let failed = result.is_err();
                active.result = Some(result);
                if failed {
                    active.timer_done = true;
                }
                self.try_finish();
            }
        }
    }

    fn try_finish(&mut self) {
        let ready = self
            .active
            .as_ref()
            .is_some_and(|r| r.timer_done && r.result.is_some());
        if !ready {
            return;
        }
        let Some(run) = self.active.take() else {
            return;
        };

        self.simulator.stop();
        self.log.remove(run.loading_id);

        let outcome = run
            .result
            .unwrap_or_else(|| Err(AppError::Internal("missing result".into())))
            .and_then(|result| {
                result.validate()?;
                Ok(render(&result))
            });

        match outcome {
            Ok(report) => {
                self.log.push(Message::agent(report));
                info!(run = run.id, "Analysis complete");
            }
            Err(e) => {
                error!(run = run.id, error = %e, "Analysis failed");
                self.log.push(Message::error(e.to_string()));
            }
        }
        self.publish();
    }

    fn publish(&self) {
        self.snapshots.send_replace(self.log.messages().to_vec());
    }
}

impl Drop for AnalysisWorkflow {
    fn drop(&mut self) {
        if let Some(run) = self.active.take() {
            warn!(run = run.id, "Workflow dropped with an active run");
            run.fetch.abort();
        }
        self.simulator.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{AnalysisError, FixtureSource};
    use crate::workflow::message::{MessageRole, MessageStatus};
    use crate::workflow::render::SectionKind;
    use async_trait::async_trait;
    use std::time::Duration;

    fn workflow() -> AnalysisWorkflow {
        AnalysisWorkflow::new(Arc::new(FixtureSource), &AnalysisConfig::default())
    }

    struct FailingSource(AnalysisError);

    #[async_trait]
    impl AnalysisSource for FailingSource {
        async fn analyze(&self, _idea: &str) -> AppResult<AnalysisResult> {
            Err(self.0.clone().into())
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    struct SlowSource(Duration);

    #[async_trait]
    impl AnalysisSource for SlowSource {
        async fn analyze(&self, _idea: &str) -> AppResult<AnalysisResult> {
            tokio::time::sleep(self.0).await;
            Ok(crate::fixture::demo_analysis())
        }

        fn name(&self) -> &'static str {
            "slow"
        }
    }

    struct PanickingSource;

    #[async_trait]
    impl AnalysisSource for PanickingSource {
        async fn analyze(&self, _idea: &str) -> AppResult<AnalysisResult> {
            panic!("source blew up");
        }

        fn name(&self) -> &'static str {
            "panicking"
        }
    }

    struct BrokenSource;

    #[async_trait]
    impl AnalysisSource for BrokenSource {
        async fn analyze(&self, _idea: &str) -> AppResult<AnalysisResult> {
            let mut result = crate::fixture::demo_analysis();
            result.swot_analysis.error = Some("Could not parse SWOT analysis".to_string());
            Ok(result)
        }

        fn name(&self) -> &'static str {
            "broken"
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_appends_user_then_loading() {
        let mut wf = workflow();
        assert!(matches!(wf.submit("cat food delivery"), SubmitOutcome::Started(1)));

        let messages = wf.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, MessageRole::User);
        assert_eq!(messages[0].content.as_text(), Some("cat food delivery"));
        assert_eq!(messages[1].role, MessageRole::System);
        assert_eq!(messages[1].status, MessageStatus::Loading);
        assert_eq!(messages[1].content.as_text(), Some("Gathering market data..."));
        assert!(wf.is_analyzing());
        assert_eq!(wf.progress().percent, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_submission_is_noop() {
        let mut wf = workflow();
        assert_eq!(wf.submit(""), SubmitOutcome::IgnoredEmpty);
        assert_eq!(wf.submit("   \n\t"), SubmitOutcome::IgnoredEmpty);
        assert!(wf.messages().is_empty());
        assert!(!wf.is_analyzing());
        assert!(!wf.next_event().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_submission_while_loading_is_ignored() {
        let mut wf = workflow();
        wf.submit("cat food delivery");
        assert_eq!(wf.submit("dog walking app"), SubmitOutcome::IgnoredBusy);

        let users = wf.messages().iter().filter(|m| m.role == MessageRole::User).count();
        let loading = wf.messages().iter().filter(|m| m.is_loading()).count();
        assert_eq!(users, 1);
        assert_eq!(loading, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_ends_with_agent_report() {
        let mut wf = workflow();
        wf.submit("cat food delivery");
        wf.run_until_idle().await;

        assert!(!wf.is_analyzing());
        assert_eq!(wf.progress().percent, 100);
        let messages = wf.messages();
        assert_eq!(messages.len(), 2);
        assert!(messages.iter().all(|m| !m.is_loading()));
        let report = messages[1].content.as_report().unwrap();
        assert!(report.section(SectionKind::Swot).is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_loading_label_walks_all_stages_in_order() {
        let mut wf = workflow();
        let mut rx = wf.subscribe();
        wf.submit("cat food delivery");

        let mut labels: Vec<String> = Vec::new();
        let mut record = |messages: &[Message]| {
            if let Some(text) = messages.iter().find(|m| m.is_loading()).and_then(|m| m.content.as_text()) {
                if labels.last().map(String::as_str) != Some(text) {
                    labels.push(text.to_string());
                }
            }
        };
        record(rx.borrow_and_update().as_slice());

        while wf.next_event().await {
            record(rx.borrow_and_update().as_slice());
        }

        let expected: Vec<String> = wf.stages().labels().to_vec();
        assert_eq!(labels, expected);
    }

    #[tokio::test(start_paused = true)]
    async fn test_service_failure_becomes_error_message() {
        let source = Arc::new(FailingSource(AnalysisError::Connection));
        let mut wf = AnalysisWorkflow::new(source, &AnalysisConfig::default());
        wf.submit("cat food delivery");
        wf.run_until_idle().await;

        let last = wf.messages().last().unwrap();
        assert_eq!(last.role, MessageRole::Error);
        assert_eq!(last.status, MessageStatus::Error);
        assert_eq!(last.content.as_text(), Some("Failed to connect to analysis service"));
        assert!(!wf.is_analyzing());

        // The lock is released: a new submission starts
        assert!(matches!(wf.submit("retry"), SubmitOutcome::Started(2)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_panicking_source_releases_lock() {
        let mut wf = AnalysisWorkflow::new(Arc::new(PanickingSource), &AnalysisConfig::default());
        wf.submit("cat food delivery");

        let finished = tokio::time::timeout(Duration::from_secs(60), wf.run_until_idle()).await;
        assert!(finished.is_ok());
        assert!(!wf.is_analyzing());

        let roles: Vec<_> = wf.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![MessageRole::User, MessageRole::Error]);
        assert_eq!(
            wf.messages()[1].content.as_text(),
            Some("Internal error: analysis source panicked")
        );
        assert!(matches!(wf.submit("retry"), SubmitOutcome::Started(2)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_result_becomes_error_message() {
        let mut wf = AnalysisWorkflow::new(Arc::new(BrokenSource), &AnalysisConfig::default());
        wf.submit("cat food delivery");
        wf.run_until_idle().await;

        let last = wf.messages().last().unwrap();
        assert_eq!(last.role, MessageRole::Error);
        assert!(last.content.as_text().unwrap().contains("Could not parse SWOT analysis"));
        assert!(wf.messages().iter().all(|m| !m.is_loading()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_source_keeps_final_stage_until_result() {
        let source = Arc::new(SlowSource(Duration::from_secs(15)));
        let mut wf = AnalysisWorkflow::new(source, &AnalysisConfig::default());
        wf.submit("cat food delivery");

        tokio::time::sleep(Duration::from_secs(12)).await;
        wf.poll_events();
        assert!(wf.is_analyzing());
        assert_eq!(wf.progress().percent, 100);
        let loading = wf.messages().iter().find(|m| m.is_loading()).unwrap();
        assert_eq!(loading.content.as_text(), Some("Compiling final insights..."));

        wf.run_until_idle().await;
        assert!(wf.messages().last().unwrap().content.as_report().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_discards_pending_events() {
        let mut wf = workflow();
        wf.submit("cat food delivery");
        tokio::time::sleep(Duration::from_secs(3)).await;

        assert!(wf.stop());
        assert!(!wf.stop());
        let after_stop = wf.messages().to_vec();
        assert_eq!(after_stop.len(), 1);

        tokio::time::sleep(Duration::from_secs(20)).await;
        wf.poll_events();
        assert_eq!(wf.messages(), after_stop.as_slice());
        assert!(!wf.is_analyzing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_error_conversion_keeps_detail() {
        let err: AppError = AnalysisError::Service("Gemini API key not found".into()).into();
        assert_eq!(err.to_string(), "Gemini API key not found");
    }
}
