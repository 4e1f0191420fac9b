//! Estadísticas agregadas sobre los proyectos de un tenant.
//!
//! Cálculo puro sobre registros ya traídos; la exportación CSV vive en
//! `mz-adapters`.
use chrono::{DateTime, Utc};
use indexmap::IndexMap;

use mz_domain::ProjectRecord;

/// Resumen por proyecto usado en rankings.
#[derive(Debug, Clone)]
pub struct ProjectDigest {
    pub name: String,
    pub is_active: bool,
    pub dataset_count: u32,
    pub dashboard_count: u32,
    pub investigation_count: u32,
    pub created: Option<DateTime<Utc>>,
}

impl ProjectDigest {
    fn from_record(record: &ProjectRecord) -> Self {
        Self { name: record.project_name.clone(),
               is_active: record.is_active,
               dataset_count: record.dataset_count,
               dashboard_count: record.dashboard_count,
               investigation_count: record.investigation_count,
               created: record.created_stamp().as_datetime() }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TenantStatistics {
    pub total_projects: u32,
    pub active_projects: u32,
    pub inactive_projects: u32,
    pub total_datasets: u64,
    pub total_dashboards: u64,
    pub total_investigations: u64,
    pub total_users: u64,
    pub projects_with_data: u32,
    pub empty_projects: u32,
    pub avg_datasets_per_project: f64,
    pub avg_dashboards_per_project: f64,
    pub avg_investigations_per_project: f64,
    pub max_datasets: u32,
    pub max_dashboards: u32,
    pub max_investigations: u32,
    /// Proyectos por rango de datasets, en orden canónico de buckets.
    pub dataset_distribution: IndexMap<&'static str, u32>,
    /// Proyectos por rango de dashboards, en orden canónico de buckets.
    pub dashboard_distribution: IndexMap<&'static str, u32>,
    pub top_by_datasets: Vec<ProjectDigest>,
    pub top_by_dashboards: Vec<ProjectDigest>,
    pub recent_projects: Vec<ProjectDigest>,
    pub oldest_projects: Vec<ProjectDigest>,
}

const TOP_LIMIT: usize = 10;
const DATED_LIMIT: usize = 5;

fn dataset_bucket(count: u32) -> &'static str {
    match count {
        0 => "0",
        1..=5 => "1-5",
        6..=10 => "6-10",
        11..=20 => "11-20",
        _ => "20+",
    }
}

fn dashboard_bucket(count: u32) -> &'static str {
    match count {
        0 => "0",
        1..=10 => "1-10",
        11..=25 => "11-25",
        26..=50 => "26-50",
        _ => "50+",
    }
}

impl TenantStatistics {
    pub fn calculate(projects: &[ProjectRecord]) -> Self {
        let mut stats = TenantStatistics::default();
        for bucket in ["0", "1-5", "6-10", "11-20", "20+"] {
            stats.dataset_distribution.insert(bucket, 0);
        }
        for bucket in ["0", "1-10", "11-25", "26-50", "50+"] {
            stats.dashboard_distribution.insert(bucket, 0);
        }

        if projects.is_empty() {
            return stats;
        }

        let mut digests: Vec<ProjectDigest> = Vec::with_capacity(projects.len());

        for project in projects {
            let digest = ProjectDigest::from_record(project);

            if project.is_active {
                stats.active_projects += 1;
            } else {
                stats.inactive_projects += 1;
            }

            stats.total_datasets += u64::from(project.dataset_count);
            stats.total_dashboards += u64::from(project.dashboard_count);
            stats.total_investigations += u64::from(project.investigation_count);
            stats.total_users += u64::from(project.user_count);

            if project.has_data() {
                stats.projects_with_data += 1;
            } else {
                stats.empty_projects += 1;
            }

            stats.max_datasets = stats.max_datasets.max(project.dataset_count);
            stats.max_dashboards = stats.max_dashboards.max(project.dashboard_count);
            stats.max_investigations = stats.max_investigations.max(project.investigation_count);

            *stats.dataset_distribution.entry(dataset_bucket(project.dataset_count)).or_insert(0) += 1;
            *stats.dashboard_distribution.entry(dashboard_bucket(project.dashboard_count)).or_insert(0) += 1;

            digests.push(digest);
        }

        stats.total_projects = projects.len() as u32;
        let total = f64::from(stats.total_projects);
        stats.avg_datasets_per_project = stats.total_datasets as f64 / total;
        stats.avg_dashboards_per_project = stats.total_dashboards as f64 / total;
        stats.avg_investigations_per_project = stats.total_investigations as f64 / total;

        let mut by_datasets = digests.clone();
        by_datasets.sort_by(|a, b| b.dataset_count.cmp(&a.dataset_count));
        by_datasets.truncate(TOP_LIMIT);
        stats.top_by_datasets = by_datasets;

        let mut by_dashboards = digests.clone();
        by_dashboards.sort_by(|a, b| b.dashboard_count.cmp(&a.dashboard_count));
        by_dashboards.truncate(TOP_LIMIT);
        stats.top_by_dashboards = by_dashboards;

        // Rankings por fecha solo con proyectos cuya fecha de creación
        // parseó.
        let mut dated: Vec<ProjectDigest> = digests.into_iter().filter(|d| d.created.is_some()).collect();
        dated.sort_by(|a, b| b.created.cmp(&a.created));
        stats.recent_projects = dated.iter().take(DATED_LIMIT).cloned().collect();
        dated.reverse();
        stats.oldest_projects = dated.into_iter().take(DATED_LIMIT).collect();

        stats
    }
}
