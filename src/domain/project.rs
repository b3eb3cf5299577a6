//! Construction projects, their team members and phases.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::EntityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Planning,
    InProgress,
    OnHold,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectPriority {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhaseStatus {
    NotStarted,
    InProgress,
    Completed,
    Delayed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMember {
    pub id: EntityId,
    pub name: String,
    pub role: String,
    pub avatar: Option<String>,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPhase {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: PhaseStatus,
    /// Percent complete, 0..=100.
    pub progress: u8,
    pub budget: f64,
    pub actual_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub priority: ProjectPriority,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: f64,
    pub actual_cost: f64,
    pub progress: u8,
    pub location: String,
    pub client: String,
    pub project_manager: String,
    pub members: Vec<ProjectMember>,
    pub phases: Vec<ProjectPhase>,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
}

impl Project {
    /// Spent share of the budget in percent; 0 for an unbudgeted project.
    pub fn budget_utilization(&self) -> f64 {
        if self.budget <= 0.0 {
            return 0.0;
        }
        self.actual_cost / self.budget * 100.0
    }

    /// Whole days from `today` until the end date. Negative once overdue.
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        (self.end_date - today).num_days()
    }

    pub fn remaining_budget(&self) -> f64 {
        self.budget - self.actual_cost
    }
}

/// Values captured by the create/edit project form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub priority: ProjectPriority,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub budget: Option<f64>,
    pub location: String,
    pub client: String,
    pub project_manager: String,
}

impl Default for ProjectDraft {
    fn default() -> Self {
        ProjectDraft {
            name: String::new(),
            description: String::new(),
            status: ProjectStatus::Planning,
            priority: ProjectPriority::Medium,
            start_date: None,
            end_date: None,
            budget: None,
            location: String::new(),
            client: String::new(),
            project_manager: String::new(),
        }
    }
}

impl From<&Project> for ProjectDraft {
    /// Pre-fills the edit form from an existing project.
    fn from(project: &Project) -> Self {
        ProjectDraft {
            name: project.name.clone(),
            description: project.description.clone(),
            status: project.status,
            priority: project.priority,
            start_date: Some(project.start_date),
            end_date: Some(project.end_date),
            budget: Some(project.budget),
            location: project.location.clone(),
            client: project.client.clone(),
            project_manager: project.project_manager.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{ymd, Fixtures};

    #[test]
    fn test_budget_utilization() {
        let projects = Fixtures::load().projects;
        assert!((projects[0].budget_utilization() - 48.0).abs() < 1e-9);
        assert_eq!(projects[1].budget_utilization(), 0.0);
        assert_eq!(projects[0].remaining_budget(), 1_300_000.0);

        let mut unbudgeted = projects[0].clone();
        unbudgeted.budget = 0.0;
        assert_eq!(unbudgeted.budget_utilization(), 0.0);
    }

    #[test]
    fn test_days_remaining() {
        let project = &Fixtures::load().projects[0];
        assert_eq!(project.days_remaining(ymd(2024, 12, 10)), 10);
        assert_eq!(project.days_remaining(ymd(2024, 12, 20)), 0);
        assert_eq!(project.days_remaining(ymd(2025, 1, 1)), -12);
    }

    #[test]
    fn test_draft_prefills_from_project() {
        let project = &Fixtures::load().projects[0];
        let draft = ProjectDraft::from(project);
        assert_eq!(draft.name, project.name);
        assert_eq!(draft.end_date, Some(ymd(2024, 12, 20)));
        assert_eq!(draft.budget, Some(2_500_000.0));
        assert_eq!(ProjectDraft::default().status, ProjectStatus::Planning);
    }
}
