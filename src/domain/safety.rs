//! Safety incidents, inspections, observations and training records.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::types::EntityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IncidentSeverity {
    Minor,
    Moderate,
    Serious,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IncidentStatus {
    Reported,
    Investigating,
    Resolved,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InspectionStatus {
    Scheduled,
    InProgress,
    Completed,
    Overdue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SafetyRating {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObservationType {
    SafeBehavior,
    UnsafeBehavior,
    NearMiss,
    Hazard,
    Suggestion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObservationStatus {
    Open,
    InProgress,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecklistResult {
    Pass,
    Fail,
    Na,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingPriority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionStatus {
    Pending,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingStatus {
    Completed,
    Expired,
    Upcoming,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyAttachment {
    pub id: EntityId,
    pub name: String,
    pub url: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub size: u64,
    pub uploaded_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InjuredPerson {
    pub name: String,
    pub role: String,
    pub injury_type: String,
    pub body_part: String,
    pub medical_attention: bool,
    pub hospital_required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyIncident {
    pub id: EntityId,
    pub incident_number: String,
    pub title: String,
    pub description: String,
    pub severity: IncidentSeverity,
    pub status: IncidentStatus,
    pub reported_by: String,
    pub reported_at: NaiveDateTime,
    pub occurred_at: NaiveDateTime,
    pub location: String,
    pub project_id: Option<EntityId>,
    pub project_name: Option<String>,
    pub injured_persons: Vec<InjuredPerson>,
    pub witnesses: Vec<String>,
    pub immediate_actions: String,
    pub root_cause: Option<String>,
    pub corrective_actions: Vec<String>,
    pub investigated_by: Option<String>,
    pub investigation_date: Option<NaiveDate>,
    pub attachments: Vec<SafetyAttachment>,
    pub follow_up_required: bool,
    pub follow_up_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionItem {
    pub id: EntityId,
    pub category: String,
    pub item: String,
    pub status: ChecklistResult,
    pub notes: Option<String>,
    pub priority: Option<FindingPriority>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectiveAction {
    pub id: EntityId,
    pub description: String,
    pub assigned_to: String,
    pub due_date: NaiveDate,
    pub status: ActionStatus,
    pub completed_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyInspection {
    pub id: EntityId,
    pub inspection_number: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: InspectionStatus,
    pub scheduled_date: NaiveDate,
    pub completed_date: Option<NaiveDateTime>,
    pub inspector: String,
    pub location: String,
    pub project_id: Option<EntityId>,
    pub project_name: Option<String>,
    pub checklist: Vec<InspectionItem>,
    pub overall_rating: SafetyRating,
    pub findings: Vec<String>,
    pub recommendations: Vec<String>,
    pub corrective_actions: Vec<CorrectiveAction>,
    pub next_inspection_date: Option<NaiveDate>,
}

impl SafetyInspection {
    pub fn failed_items(&self) -> impl Iterator<Item = &InspectionItem> {
        self.checklist.iter().filter(|item| item.status == ChecklistResult::Fail)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyObservation {
    pub id: EntityId,
    pub observation_number: String,
    #[serde(rename = "type")]
    pub kind: ObservationType,
    pub title: String,
    pub description: String,
    pub location: String,
    pub observed_by: String,
    pub observed_at: NaiveDateTime,
    pub project_id: Option<EntityId>,
    pub project_name: Option<String>,
    pub person_involved: Option<String>,
    pub immediate_action: String,
    pub follow_up_required: bool,
    pub follow_up_actions: Vec<String>,
    pub status: ObservationStatus,
    pub attachments: Vec<SafetyAttachment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyTraining {
    pub id: EntityId,
    pub employee_name: String,
    pub employee_id: String,
    pub training_type: String,
    pub training_date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    pub instructor: String,
    pub status: TrainingStatus,
    pub certificate_number: Option<String>,
    pub score: Option<u8>,
}

/// Counters shown on the safety dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyMetrics {
    pub total_incidents: usize,
    /// Anything not yet closed; resolved incidents still count as open.
    pub open_incidents: usize,
    pub critical_incidents: usize,
    pub completed_inspections: usize,
    pub overdue_inspections: usize,
}

impl SafetyMetrics {
    pub fn compute(incidents: &[SafetyIncident], inspections: &[SafetyInspection]) -> Self {
        let inspections_in = |status: InspectionStatus| inspections.iter().filter(|i| i.status == status).count();
        SafetyMetrics {
            total_incidents: incidents.len(),
            open_incidents: incidents.iter().filter(|i| i.status != IncidentStatus::Closed).count(),
            critical_incidents: incidents
                .iter()
                .filter(|i| i.severity == IncidentSeverity::Critical)
                .count(),
            completed_inspections: inspections_in(InspectionStatus::Completed),
            overdue_inspections: inspections_in(InspectionStatus::Overdue),
        }
    }
}

/// Scheduled inspections, at most `limit`, in fixture order.
pub fn upcoming_inspections(inspections: &[SafetyInspection], limit: usize) -> Vec<&SafetyInspection> {
    inspections
        .iter()
        .filter(|i| i.status == InspectionStatus::Scheduled)
        .take(limit)
        .collect()
}

pub fn expired_training(records: &[SafetyTraining]) -> Vec<&SafetyTraining> {
    records.iter().filter(|t| t.status == TrainingStatus::Expired).collect()
}

/// Share of training records marked completed, in percent. 0 for no records.
pub fn training_completion_rate(records: &[SafetyTraining]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let completed = records.iter().filter(|t| t.status == TrainingStatus::Completed).count();
    completed as f64 / records.len() as f64 * 100.0
}
