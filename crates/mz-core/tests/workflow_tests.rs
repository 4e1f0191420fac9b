use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use mz_core::{ActionWorkflow, ApiError, Clock, CoreError, ExecutionClient, NullSink, PackagePayload, PollSettings};
use mz_domain::ExecutionRecord;

struct FakeClock {
    now: DateTime<Utc>,
}

impl FakeClock {
    fn new() -> Self {
        Self { now: Utc.with_ymd_and_hms(2026, 8, 27, 15, 0, 0).unwrap() }
    }
}

impl Clock for FakeClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn sleep(&mut self, interval: Duration) {
        self.now += chrono::Duration::from_std(interval).unwrap();
    }
}

/// Action backend where executing returns no id, so the workflow must
/// resolve the most recent execution of the action.
struct ActionBackend {
    statuses: Vec<&'static str>,
    cursor: usize,
    has_executions: bool,
    package_available: bool,
}

impl ExecutionClient for ActionBackend {
    fn execute_action(&mut self, _project_id: &str, _action_id: &str) -> Result<Option<String>, ApiError> {
        Ok(None)
    }

    fn get_execution(&mut self, _project_id: &str, execution_id: &str) -> Result<ExecutionRecord, ApiError> {
        let idx = self.cursor.min(self.statuses.len() - 1);
        self.cursor += 1;
        let mut record = ExecutionRecord::new(execution_id, self.statuses[idx]);
        record.start_time = Some("2026-08-27T15:00:00Z".to_string());
        record.end_time = Some("2026-08-27T15:02:00Z".to_string());
        Ok(record)
    }

    fn executions_for_action(&mut self, _project_id: &str, _action_id: &str) -> Result<Vec<ExecutionRecord>, ApiError> {
        if self.has_executions {
            Ok(vec![ExecutionRecord::new("exec-latest", self.statuses[0])])
        } else {
            Ok(Vec::new())
        }
    }

    fn download_package(&mut self, _project_id: &str, execution_id: &str) -> Result<PackagePayload, ApiError> {
        if self.package_available {
            Ok(PackagePayload::Text("ok".to_string()))
        } else {
            Err(ApiError::not_found(execution_id))
        }
    }
}

fn quick_settings() -> PollSettings {
    PollSettings { interval: Duration::from_secs(1),
                   max_duration: Duration::from_secs(60),
                   max_transient_errors: 3 }
}

#[test]
fn workflow_resolves_execution_monitors_and_downloads() {
    let mut client = ActionBackend { statuses: vec!["queued", "running", "completed"],
                                     cursor: 0,
                                     has_executions: true,
                                     package_available: true };
    let mut clock = FakeClock::new();
    let summary = ActionWorkflow::new(&mut client, &mut clock, "proj-1", "action-1")
        .run(&quick_settings(), &mut NullSink)
        .unwrap();

    assert!(summary.succeeded);
    assert_eq!(summary.execution_id, "exec-latest");
    assert_eq!(summary.polls, 3);
    assert_eq!(summary.run_seconds, Some(120.0));
    assert!(matches!(summary.package, Some(PackagePayload::Text(_))));
}

#[test]
fn workflow_without_executions_reports_missing_id() {
    let mut client = ActionBackend { statuses: vec!["completed"],
                                     cursor: 0,
                                     has_executions: false,
                                     package_available: false };
    let mut clock = FakeClock::new();
    let result = ActionWorkflow::new(&mut client, &mut clock, "proj-1", "action-1").run(&quick_settings(), &mut NullSink);

    assert!(matches!(result, Err(CoreError::NoExecutionId)));
}

#[test]
fn failed_download_does_not_fail_the_workflow() {
    let mut client = ActionBackend { statuses: vec!["completed"],
                                     cursor: 0,
                                     has_executions: true,
                                     package_available: false };
    let mut clock = FakeClock::new();
    let summary = ActionWorkflow::new(&mut client, &mut clock, "proj-1", "action-1")
        .run(&quick_settings(), &mut NullSink)
        .unwrap();

    assert!(summary.succeeded);
    assert!(summary.package.is_none());
}

#[test]
fn failed_execution_skips_the_download_step() {
    let mut client = ActionBackend { statuses: vec!["running", "failed"],
                                     cursor: 0,
                                     has_executions: true,
                                     package_available: true };
    let mut clock = FakeClock::new();
    let summary = ActionWorkflow::new(&mut client, &mut clock, "proj-1", "action-1")
        .run(&quick_settings(), &mut NullSink)
        .unwrap();

    assert!(!summary.succeeded);
    assert_eq!(summary.final_status.as_ref().map(|s| s.as_str()), Some("failed"));
    assert!(summary.package.is_none());
}
