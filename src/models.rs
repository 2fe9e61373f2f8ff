use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One task deadline as supplied by the producing system.
///
/// Wire names follow the producer's camelCase convention. `status` and
/// `priority` are free-form labels; unrecognized values degrade to defaults
/// during feature extraction rather than failing here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeadlineRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "deadlineDate")]
    pub due_at: DateTime<Utc>,
    pub status: String,
    pub priority: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
}
