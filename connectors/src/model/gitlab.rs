use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct Project {
    pub id: u64,
    pub name: String,
    pub path_with_namespace: String,
    pub star_count: u64,
    pub forks_count: u64,
    /// Absent when the issue tracker is disabled for the project.
    pub open_issues_count: Option<u64>,
    pub created_at: DateTime<Utc>,
    pub last_activity_at: Option<DateTime<Utc>>,
    /// Whether the project pulls from an upstream repository.
    #[serde(default)]
    pub mirror: bool,
}

impl PartialEq for Project {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Project {}
