//! Form templates, submissions and the approval trail attached to them.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::AsRefStr;

use crate::error::DashboardError;
use crate::types::EntityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormStatus {
    Draft,
    Submitted,
    UnderReview,
    Approved,
    Rejected,
    RequiresChanges,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormType {
    WorkOrder,
    ChangeRequest,
    Inspection,
    Permit,
    DailyReport,
    IncidentReport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ApprovalAction {
    Approve,
    Reject,
    RequestChanges,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Textarea,
    Select,
    Date,
    Number,
    Checkbox,
    File,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    pub id: String,
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: FieldType,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormTemplate {
    pub id: EntityId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FormType,
    pub description: String,
    pub fields: Vec<FormField>,
    pub approval_required: bool,
    pub approvers: Vec<String>,
}

impl FormTemplate {
    /// Required fields with no usable value in `data`: absent, null, empty or
    /// whitespace-only strings, and unchecked checkboxes.
    pub fn missing_required<'a>(&'a self, data: &BTreeMap<String, Value>) -> Vec<&'a FormField> {
        self.fields
            .iter()
            .filter(|field| field.required)
            .filter(|field| match data.get(&field.name) {
                None | Some(Value::Null) => true,
                Some(Value::String(s)) => s.trim().is_empty(),
                Some(Value::Bool(checked)) => field.kind == FieldType::Checkbox && !checked,
                Some(_) => false,
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormApproval {
    pub id: EntityId,
    pub approver_name: String,
    pub approver_role: String,
    pub action: ApprovalAction,
    pub comment: Option<String>,
    pub timestamp: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormComment {
    pub id: EntityId,
    pub author_name: String,
    pub author_role: String,
    pub content: String,
    pub timestamp: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormAttachment {
    pub id: EntityId,
    pub name: String,
    pub url: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub uploaded_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmission {
    pub id: EntityId,
    pub template_id: EntityId,
    pub template_name: String,
    #[serde(rename = "type")]
    pub kind: FormType,
    pub title: String,
    pub status: FormStatus,
    pub submitted_by: String,
    pub submitted_at: NaiveDateTime,
    pub project_id: Option<EntityId>,
    pub project_name: Option<String>,
    pub data: BTreeMap<String, Value>,
    pub approvals: Vec<FormApproval>,
    pub comments: Vec<FormComment>,
    pub attachments: Vec<FormAttachment>,
}

impl FormSubmission {
    /// Only submitted and under-review forms take approval decisions.
    pub fn awaits_review(&self) -> bool {
        matches!(self.status, FormStatus::Submitted | FormStatus::UnderReview)
    }
}

/// Payload produced by the form builder when the user submits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDraft {
    pub template_id: EntityId,
    pub title: String,
    pub data: BTreeMap<String, Value>,
}

impl FormDraft {
    /// Builds a submission payload, validating required fields.
    ///
    /// A blank `title` falls back to `"<template name> - <M/D/YYYY>"` for `today`.
    pub fn build(
        template: &FormTemplate,
        title: &str,
        data: BTreeMap<String, Value>,
        today: NaiveDate,
    ) -> Result<Self, DashboardError> {
        let missing: Vec<String> = template
            .missing_required(&data)
            .into_iter()
            .map(|field| field.name.clone())
            .collect();
        if !missing.is_empty() {
            return Err(DashboardError::MissingFields(missing));
        }

        let title = match title.trim() {
            "" => format!("{} - {}", template.name, today.format("%-m/%-d/%Y")),
            t => t.to_string(),
        };
        Ok(FormDraft {
            template_id: template.id.clone(),
            title,
            data,
        })
    }
}
