//! Exportación CSV de las estadísticas del tenant.
use std::fs;
use std::path::Path;

use mz_core::TenantStatistics;

use crate::error::AdapterError;

/// Arma el CSV en memoria: sección de métricas escalares y una sección por
/// distribución, separadas por línea en blanco. El orden de los buckets es
/// el canónico de `TenantStatistics`.
pub fn render_statistics_csv(stats: &TenantStatistics) -> String {
    let mut out = String::from("Metric,Value\n");

    out.push_str(&format!("Total Projects,{}\n", stats.total_projects));
    out.push_str(&format!("Active Projects,{}\n", stats.active_projects));
    out.push_str(&format!("Inactive Projects,{}\n", stats.inactive_projects));
    out.push_str(&format!("Total Datasets,{}\n", stats.total_datasets));
    out.push_str(&format!("Total Dashboards,{}\n", stats.total_dashboards));
    out.push_str(&format!("Total Investigations,{}\n", stats.total_investigations));
    out.push_str(&format!("Total Users,{}\n", stats.total_users));
    out.push_str(&format!("Projects With Data,{}\n", stats.projects_with_data));
    out.push_str(&format!("Empty Projects,{}\n", stats.empty_projects));
    out.push_str(&format!("Avg Datasets Per Project,{:.1}\n", stats.avg_datasets_per_project));
    out.push_str(&format!("Avg Dashboards Per Project,{:.1}\n", stats.avg_dashboards_per_project));
    out.push_str(&format!("Avg Investigations Per Project,{:.1}\n", stats.avg_investigations_per_project));
    out.push_str(&format!("Max Datasets,{}\n", stats.max_datasets));
    out.push_str(&format!("Max Dashboards,{}\n", stats.max_dashboards));

    out.push('\n');
    out.push_str("Dataset Distribution,Project Count\n");
    for (bucket, count) in &stats.dataset_distribution {
        out.push_str(&format!("{bucket},{count}\n"));
    }

    out.push('\n');
    out.push_str("Dashboard Distribution,Project Count\n");
    for (bucket, count) in &stats.dashboard_distribution {
        out.push_str(&format!("{bucket},{count}\n"));
    }

    out
}

pub fn export_statistics_csv(stats: &TenantStatistics, path: &Path) -> Result<(), AdapterError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, render_statistics_csv(stats))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mz_domain::ProjectRecord;

    #[test]
    fn csv_sections_are_separated_by_blank_lines() {
        let mut project = ProjectRecord::new("p1", "Alpha");
        project.dataset_count = 3;
        project.dashboard_count = 12;
        let csv = render_statistics_csv(&TenantStatistics::calculate(&[project]));

        assert!(csv.starts_with("Metric,Value\nTotal Projects,1\n"));
        assert!(csv.contains("\n\nDataset Distribution,Project Count\n"));
        assert!(csv.contains("\n\nDashboard Distribution,Project Count\n"));
        assert!(csv.contains("Avg Datasets Per Project,3.0\n"));
        assert!(csv.contains("1-5,1\n"));
        assert!(csv.contains("11-25,1\n"));
    }
}
