//! Reporte de consola: secciones, banderas de resultado y el sink que
//! imprime el progreso del poller en vivo.
use mz_core::{ApiError, MonitorOutcome, MonitorReport, MonitorSink, PipelineSummary, StatusSample, TenantStatistics};
use mz_domain::{timefmt, ExecutionStatus, ProjectRecord};

pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {title}");
    println!("{}", "=".repeat(60));
}

pub fn print_success(message: &str) {
    println!("[OK] {message}");
}

pub fn print_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn print_info(message: &str) {
    println!("[INFO] {message}");
}

pub fn print_warning(message: &str) {
    println!("[WARN] {message}");
}

/// Sink de consola del poller: una línea por consulta y una nota en cada
/// cambio de status o error transitorio.
pub struct ConsoleSink;

impl MonitorSink for ConsoleSink {
    fn on_poll(&mut self, sample: &StatusSample) {
        println!("[{}] Status: {} | Progress: {} | Elapsed: {}",
                 sample.at.format("%H:%M:%S"),
                 sample.status,
                 sample.progress.as_deref().unwrap_or("N/A"),
                 timefmt::format_duration(sample.elapsed.as_secs_f64()));
    }

    fn on_status_change(&mut self, previous: Option<&ExecutionStatus>, sample: &StatusSample) {
        match previous {
            Some(prev) => print_info(&format!("status changed: {prev} -> {}", sample.status)),
            None => print_info(&format!("initial status: {}", sample.status)),
        }
    }

    fn on_transient_error(&mut self, error: &ApiError, consecutive: u32) {
        print_warning(&format!("transient error ({consecutive}): {error}"));
    }
}

pub fn print_projects(projects: &[ProjectRecord], detailed: bool) {
    print_section(&format!("Projects ({})", projects.len()));
    for project in projects {
        let flag = if project.is_active { "active" } else { "inactive" };
        println!("- {} [{flag}]", project.project_name);
        if detailed {
            if let Some(description) = &project.description {
                println!("    {description}");
            }
            println!("    datasets: {} | dashboards: {} | investigations: {} | users: {}",
                     project.dataset_count, project.dashboard_count, project.investigation_count, project.user_count);
            println!("    created: {} | modified: {}",
                     timefmt::format_date(project.date_created.as_deref()),
                     timefmt::format_date(project.date_modified.as_deref()));
        }
    }
}

pub fn print_statistics(stats: &TenantStatistics, detailed: bool) {
    print_section("Tenant Statistics");
    println!("Projects: {} total, {} active, {} inactive",
             stats.total_projects, stats.active_projects, stats.inactive_projects);
    println!("Datasets: {} total (avg {:.1}/project, max {})",
             stats.total_datasets, stats.avg_datasets_per_project, stats.max_datasets);
    println!("Dashboards: {} total (avg {:.1}/project, max {})",
             stats.total_dashboards, stats.avg_dashboards_per_project, stats.max_dashboards);
    println!("Projects with data: {} | empty: {}", stats.projects_with_data, stats.empty_projects);

    if !detailed {
        return;
    }

    println!("\nDataset distribution:");
    let max_count = stats.dataset_distribution.values().copied().max().unwrap_or(0);
    for (bucket, count) in &stats.dataset_distribution {
        println!("  {bucket:>6}: {}", timefmt::progress_bar(u64::from(*count), u64::from(max_count), 20));
    }

    println!("\nTop projects by datasets:");
    for digest in &stats.top_by_datasets {
        println!("  {} ({} datasets)", digest.name, digest.dataset_count);
    }
    println!("\nMost recent projects:");
    for digest in &stats.recent_projects {
        let created = digest.created.map(|dt| dt.format("%Y-%m-%d").to_string()).unwrap_or_default();
        println!("  {} (created {created})", digest.name);
    }
}

pub fn print_pipeline_summary(summary: &PipelineSummary) {
    print_section(&format!("Pipeline {}", summary.pipeline_id));
    println!("Status: {} | Steps: {} | Duration: {}",
             summary.status,
             summary.steps_completed,
             timefmt::format_duration(summary.duration_seconds));
    println!("Records processed: {}", summary.total_records_processed);
    for dataset in &summary.final_datasets {
        println!("  final dataset {} ({} records)", dataset.name, dataset.record_count);
    }
}

pub fn print_monitor_summary(report: &MonitorReport) {
    print_section("Monitoring Summary");
    println!("Polls: {} | Elapsed: {}", report.polls, timefmt::format_duration(report.elapsed.as_secs_f64()));
    for sample in &report.history {
        println!("  [+{}] {}", timefmt::format_duration(sample.elapsed.as_secs_f64()), sample.status);
    }
    match &report.outcome {
        MonitorOutcome::Succeeded(record) => {
            print_success(&format!("execution {} completed", record.id));
            if let Some(seconds) = record.run_seconds() {
                print_info(&format!("server-side runtime: {}", timefmt::format_duration(seconds)));
            }
        }
        MonitorOutcome::Failed(record) => {
            print_error(&format!("execution {} ended with status {}", record.id, record.status));
            if let Some(message) = &record.error {
                print_error(&format!("reported error: {message}"));
            }
        }
        MonitorOutcome::TimedOut { last } => {
            let status = last.as_ref().map(|r| r.status.as_str()).unwrap_or("unknown");
            print_warning(&format!("monitoring timed out (last status: {status})"));
        }
    }
}
