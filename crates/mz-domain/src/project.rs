//! Registro de proyecto del tenant.
use serde::{Deserialize, Serialize};

use crate::execution::DateStamp;

/// Proyecto tal como lo lista la plataforma. Los contadores agregados
/// (datasets, dashboards, etc.) vienen ya calculados del lado servidor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub project_id: String,
    pub project_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub dataset_count: u32,
    #[serde(default)]
    pub dashboard_count: u32,
    #[serde(default)]
    pub investigation_count: u32,
    #[serde(default)]
    pub user_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
}

fn default_active() -> bool {
    true
}

impl ProjectRecord {
    pub fn new(project_id: impl Into<String>, project_name: impl Into<String>) -> Self {
        Self { project_id: project_id.into(),
               project_name: project_name.into(),
               description: None,
               is_active: true,
               dataset_count: 0,
               dashboard_count: 0,
               investigation_count: 0,
               user_count: 0,
               date_created: None,
               date_modified: None }
    }

    pub fn created_stamp(&self) -> DateStamp {
        DateStamp::parse(self.date_created.as_deref())
    }

    pub fn modified_stamp(&self) -> DateStamp {
        DateStamp::parse(self.date_modified.as_deref())
    }

    /// Un proyecto "con datos" tiene al menos un dataset, dashboard o
    /// investigación.
    pub fn has_data(&self) -> bool {
        self.dataset_count > 0 || self.dashboard_count > 0 || self.investigation_count > 0
    }
}
