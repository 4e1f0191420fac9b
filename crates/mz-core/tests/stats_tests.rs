use mz_core::TenantStatistics;
use mz_domain::ProjectRecord;

fn project(name: &str, active: bool, datasets: u32, dashboards: u32, created: Option<&str>) -> ProjectRecord {
    let mut record = ProjectRecord::new(format!("id-{name}"), name);
    record.is_active = active;
    record.dataset_count = datasets;
    record.dashboard_count = dashboards;
    record.user_count = 3;
    record.date_created = created.map(str::to_string);
    record
}

#[test]
fn empty_tenant_yields_zeroed_statistics_with_seeded_buckets() {
    let stats = TenantStatistics::calculate(&[]);
    assert_eq!(stats.total_projects, 0);
    assert_eq!(stats.avg_datasets_per_project, 0.0);
    // Buckets come pre-seeded in canonical order for stable exports.
    let buckets: Vec<&str> = stats.dataset_distribution.keys().copied().collect();
    assert_eq!(buckets, vec!["0", "1-5", "6-10", "11-20", "20+"]);
}

#[test]
fn totals_averages_and_maxima() {
    let projects = vec![project("alpha", true, 4, 12, Some("2026-01-10T08:00:00Z")),
                        project("beta", false, 0, 0, Some("2025-06-01T08:00:00Z")),
                        project("gamma", true, 8, 30, None)];
    let stats = TenantStatistics::calculate(&projects);

    assert_eq!(stats.total_projects, 3);
    assert_eq!(stats.active_projects, 2);
    assert_eq!(stats.inactive_projects, 1);
    assert_eq!(stats.total_datasets, 12);
    assert_eq!(stats.total_dashboards, 42);
    assert_eq!(stats.total_users, 9);
    assert_eq!(stats.projects_with_data, 2);
    assert_eq!(stats.empty_projects, 1);
    assert_eq!(stats.max_datasets, 8);
    assert_eq!(stats.max_dashboards, 30);
    assert!((stats.avg_datasets_per_project - 4.0).abs() < f64::EPSILON);
    assert!((stats.avg_dashboards_per_project - 14.0).abs() < f64::EPSILON);
}

#[test]
fn distribution_buckets_count_projects() {
    let projects = vec![project("a", true, 0, 0, None),
                        project("b", true, 3, 5, None),
                        project("c", true, 7, 20, None),
                        project("d", true, 15, 40, None),
                        project("e", true, 99, 99, None)];
    let stats = TenantStatistics::calculate(&projects);

    assert_eq!(stats.dataset_distribution["0"], 1);
    assert_eq!(stats.dataset_distribution["1-5"], 1);
    assert_eq!(stats.dataset_distribution["6-10"], 1);
    assert_eq!(stats.dataset_distribution["11-20"], 1);
    assert_eq!(stats.dataset_distribution["20+"], 1);

    assert_eq!(stats.dashboard_distribution["0"], 1);
    assert_eq!(stats.dashboard_distribution["1-10"], 1);
    assert_eq!(stats.dashboard_distribution["11-25"], 1);
    assert_eq!(stats.dashboard_distribution["26-50"], 1);
    assert_eq!(stats.dashboard_distribution["50+"], 1);
}

#[test]
fn rankings_sort_and_ignore_undated_projects() {
    let projects = vec![project("old", true, 1, 1, Some("2024-01-01T00:00:00Z")),
                        project("new", true, 9, 2, Some("2026-05-01T00:00:00Z")),
                        project("undated", true, 5, 3, Some("not a date"))];
    let stats = TenantStatistics::calculate(&projects);

    assert_eq!(stats.top_by_datasets[0].name, "new");
    assert_eq!(stats.top_by_datasets[1].name, "undated");
    assert_eq!(stats.recent_projects.len(), 2);
    assert_eq!(stats.recent_projects[0].name, "new");
    assert_eq!(stats.oldest_projects[0].name, "old");
}
