//! Integración de los adaptadores contra el backend en memoria.
use std::time::Duration;

use mz_adapters::{download_execution_package, render_statistics_csv, save_package, AdapterError, InMemoryPlatform};
use mz_core::{CatalogClient, EtlPipeline, ExecutionClient, ExecutionMonitor, NullSink, PackagePayload, PipelineConfig,
              PollSettings, ProjectClient, SystemClock, TenantStatistics};

const SALES_PROJECT: &str = "3f2b8c1e-5a47-4d06-9e13-7c55a2b4d901";

fn fast_settings() -> PollSettings {
    PollSettings { interval: Duration::from_millis(10),
                   max_duration: Duration::from_secs(5),
                   max_transient_errors: 3 }
}

#[test]
fn seeded_platform_lists_the_demo_tenant() {
    let mut platform = InMemoryPlatform::seeded();

    let projects = platform.list_projects().unwrap();
    assert_eq!(projects.len(), 2);
    assert!(projects.iter().any(|p| p.project_name == "Sales Analytics" && p.is_active));
    assert!(projects.iter().any(|p| p.project_name == "Support Tickets" && !p.is_active));

    let dashboards = platform.list_dashboards(SALES_PROJECT).unwrap();
    assert_eq!(dashboards.len(), 1);
    let investigations = platform.list_investigations(SALES_PROJECT).unwrap();
    assert_eq!(investigations.len(), 1);

    let stats = TenantStatistics::calculate(&projects);
    assert_eq!(stats.total_projects, 2);
    assert_eq!(stats.active_projects, 1);
    let csv = render_statistics_csv(&stats);
    assert!(csv.contains("Total Projects,2\n"));
}

#[test]
fn scripted_execution_completes_under_the_poller() {
    let mut platform = InMemoryPlatform::seeded();
    let mut clock = SystemClock;

    let report = ExecutionMonitor::new(&mut platform, &mut clock, SALES_PROJECT, "exec-0002")
        .monitor(&fast_settings(), &mut NullSink)
        .unwrap();

    // Guion queued -> running -> running -> completed: 4 polls, 3 cambios.
    assert!(report.outcome.is_success());
    assert_eq!(report.polls, 4);
    let statuses: Vec<&str> = report.history.iter().map(|s| s.status.as_str()).collect();
    assert_eq!(statuses, vec!["queued", "running", "completed"]);
}

#[test]
fn etl_pipeline_runs_against_the_memory_backend() {
    let mut platform = InMemoryPlatform::seeded();
    let summary = EtlPipeline::new(&mut platform, SystemClock, SALES_PROJECT).run(&PipelineConfig::demo());

    assert_eq!(summary.status, "completed");
    assert_eq!(summary.total_records_processed, 7000);
    assert_eq!(summary.final_datasets.len(), 2);
}

#[test]
fn pipeline_counts_simulated_storage_failures() {
    let mut platform = InMemoryPlatform::seeded();
    platform.fail_dataset_matching("customer");

    let summary = EtlPipeline::new(&mut platform, SystemClock, SALES_PROJECT).run(&PipelineConfig::demo());

    // customer_data falla en extracción; sales_data llega hasta el final.
    assert_eq!(summary.status, "completed");
    assert_eq!(summary.total_records_processed, 5000);
    assert_eq!(summary.final_datasets.len(), 1);
}

#[test]
fn completed_execution_yields_a_downloadable_package() {
    let mut platform = InMemoryPlatform::seeded();

    let payload = download_execution_package(&mut platform, SALES_PROJECT, "exec-0001").unwrap();
    assert!(matches!(payload, PackagePayload::Json(_)));

    let dir = std::env::temp_dir().join("mz-adapters-package-test");
    let path = save_package(&dir, "exec-0001", &payload).unwrap();
    assert!(path.file_name().unwrap().to_str().unwrap().starts_with("execution_exec-0001_package"));
    assert!(path.extension().unwrap() == "json");
    assert!(path.exists());
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn package_of_unfinished_execution_is_refused() {
    let mut platform = InMemoryPlatform::seeded();
    platform.script_execution(SALES_PROJECT, "action-slow", "exec-slow", &["running"]);

    let result = download_execution_package(&mut platform, SALES_PROJECT, "exec-slow");
    assert!(matches!(result, Err(AdapterError::NotCompleted(status)) if status == "running"));
}

#[test]
fn execute_action_resolves_the_scripted_execution() {
    let mut platform = InMemoryPlatform::seeded();
    let id = platform.execute_action(SALES_PROJECT, "action-daily-refresh").unwrap();
    assert_eq!(id.as_deref(), Some("exec-0001"));

    let none = platform.execute_action(SALES_PROJECT, "action-unknown").unwrap();
    assert!(none.is_none());
}
