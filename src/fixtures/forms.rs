use std::collections::BTreeMap;

use serde_json::{json, Value};

use crate::domain::{
    ApprovalAction, FieldType, FormApproval, FormAttachment, FormComment, FormField, FormStatus,
    FormSubmission, FormTemplate, FormType,
};
use crate::fixtures::{at, s, strings};

fn field(name: &str, label: &str, kind: FieldType, required: bool) -> FormField {
    FormField {
        id: s(name),
        name: s(name),
        label: s(label),
        kind,
        required,
        options: Vec::new(),
    }
}

fn select(name: &str, label: &str, required: bool, options: &[&str]) -> FormField {
    FormField {
        options: strings(options),
        ..field(name, label, FieldType::Select, required)
    }
}

fn data(value: Value) -> BTreeMap<String, Value> {
    match value {
        Value::Object(map) => map.into_iter().collect(),
        _ => BTreeMap::new(),
    }
}

const RATINGS: &[&str] = &["Excellent", "Good", "Fair", "Poor"];

pub fn templates() -> Vec<FormTemplate> {
    use FieldType::*;
    vec![
        FormTemplate {
            id: s("1"),
            name: s("Work Order Request"),
            kind: FormType::WorkOrder,
            description: s("Request for new work or modifications to existing work"),
            approval_required: true,
            approvers: strings(&["Project Manager", "Site Supervisor"]),
            fields: vec![
                field("title", "Work Order Title", Text, true),
                field("description", "Work Description", Textarea, true),
                select("priority", "Priority Level", true, &["Low", "Medium", "High", "Critical"]),
                field("requestedBy", "Requested By", Text, true),
                field("dueDate", "Due Date", Date, true),
                field("estimatedCost", "Estimated Cost ($)", Number, false),
            ],
        },
        FormTemplate {
            id: s("2"),
            name: s("Change Request"),
            kind: FormType::ChangeRequest,
            description: s("Request for changes to project scope, timeline, or budget"),
            approval_required: true,
            approvers: strings(&["Project Manager", "Client"]),
            fields: vec![
                field("changeTitle", "Change Request Title", Text, true),
                field("currentState", "Current State", Textarea, true),
                field("proposedChange", "Proposed Change", Textarea, true),
                field("justification", "Justification", Textarea, true),
                field("impactOnSchedule", "Impact on Schedule (days)", Number, false),
                field("impactOnBudget", "Impact on Budget ($)", Number, false),
            ],
        },
        FormTemplate {
            id: s("3"),
            name: s("Safety Inspection"),
            kind: FormType::Inspection,
            description: s("Daily safety inspection checklist"),
            approval_required: true,
            approvers: strings(&["Safety Officer"]),
            fields: vec![
                field("inspectionDate", "Inspection Date", Date, true),
                field("inspector", "Inspector Name", Text, true),
                field("area", "Area/Location", Text, true),
                select("ppeCompliance", "PPE Compliance", true, RATINGS),
                select("equipmentSafety", "Equipment Safety", true, RATINGS),
                select("housekeeping", "Housekeeping", true, RATINGS),
                field("hazardsIdentified", "Hazards Identified", Textarea, false),
                field("correctiveActions", "Corrective Actions Required", Textarea, false),
            ],
        },
        FormTemplate {
            id: s("4"),
            name: s("Daily Progress Report"),
            kind: FormType::DailyReport,
            description: s("Daily progress and activity report"),
            approval_required: false,
            approvers: Vec::new(),
            fields: vec![
                field("reportDate", "Report Date", Date, true),
                select(
                    "weather",
                    "Weather Conditions",
                    true,
                    &["Clear", "Partly Cloudy", "Overcast", "Light Rain", "Heavy Rain", "Snow"],
                ),
                field("crewSize", "Crew Size", Number, true),
                field("workCompleted", "Work Completed", Textarea, true),
                field("materialsUsed", "Materials Used", Textarea, false),
                field("equipmentUsed", "Equipment Used", Textarea, false),
                field("delays", "Delays or Issues", Textarea, false),
            ],
        },
    ]
}

fn approval(id: &str, name: &str, role: &str, action: ApprovalAction, comment: &str, when: (u32, u32, u32)) -> FormApproval {
    FormApproval {
        id: s(id),
        approver_name: s(name),
        approver_role: s(role),
        action,
        comment: Some(s(comment)),
        timestamp: at(2024, 3, when.0, when.1, when.2),
    }
}

fn comment(id: &str, name: &str, role: &str, content: &str, when: (u32, u32, u32)) -> FormComment {
    FormComment {
        id: s(id),
        author_name: s(name),
        author_role: s(role),
        content: s(content),
        timestamp: at(2024, 3, when.0, when.1, when.2),
    }
}

fn attachment(id: &str, name: &str, size: u64, mime_type: &str, when: (u32, u32, u32)) -> FormAttachment {
    FormAttachment {
        id: s(id),
        name: s(name),
        url: format!("/{name}"),
        size,
        mime_type: s(mime_type),
        uploaded_at: at(2024, 3, when.0, when.1, when.2),
    }
}

pub fn submissions() -> Vec<FormSubmission> {
    vec![
        FormSubmission {
            id: s("1"),
            template_id: s("1"),
            template_name: s("Work Order Request"),
            kind: FormType::WorkOrder,
            title: s("Electrical Panel Upgrade - Building A"),
            status: FormStatus::UnderReview,
            submitted_by: s("Mike Chen"),
            submitted_at: at(2024, 3, 10, 9, 30),
            project_id: Some(s("1")),
            project_name: Some(s("Downtown Office Complex")),
            data: data(json!({
                "title": "Electrical Panel Upgrade - Building A",
                "description": "Replace outdated electrical panel in Building A basement with new 400A panel to support increased load requirements.",
                "priority": "High",
                "requestedBy": "Mike Chen",
                "dueDate": "2024-03-25",
                "estimatedCost": 15000,
            })),
            approvals: vec![approval("1", "Sarah Johnson", "Project Manager", ApprovalAction::Approve,
                "Approved. This is critical for the project timeline.", (10, 14, 20))],
            comments: vec![comment("1", "Mike Chen", "Site Supervisor",
                "This upgrade is necessary to meet the new electrical code requirements.", (10, 9, 35))],
            attachments: vec![attachment("1", "electrical-panel-specs.pdf", 2_048_000, "application/pdf", (10, 9, 32))],
        },
        FormSubmission {
            id: s("2"),
            template_id: s("2"),
            template_name: s("Change Request"),
            kind: FormType::ChangeRequest,
            title: s("Additional Parking Spaces"),
            status: FormStatus::Approved,
            submitted_by: s("Sarah Johnson"),
            submitted_at: at(2024, 3, 8, 11, 15),
            project_id: Some(s("1")),
            project_name: Some(s("Downtown Office Complex")),
            data: data(json!({
                "changeTitle": "Additional Parking Spaces",
                "currentState": "Current design includes 150 parking spaces in the underground garage.",
                "proposedChange": "Add 25 additional parking spaces by extending the garage footprint.",
                "justification": "Client has requested additional parking to meet increased tenant demand.",
                "impactOnSchedule": 14,
                "impactOnBudget": 75000,
            })),
            approvals: vec![
                approval("2", "Sarah Johnson", "Project Manager", ApprovalAction::Approve,
                    "Change approved. Will adjust timeline accordingly.", (9, 10, 30)),
                approval("3", "Metro Development Corp", "Client", ApprovalAction::Approve,
                    "Approved. Please proceed with the additional parking spaces.", (9, 16, 45)),
            ],
            comments: Vec::new(),
            attachments: vec![attachment("2", "revised-parking-layout.dwg", 5_120_000, "application/dwg", (8, 11, 18))],
        },
        FormSubmission {
            id: s("3"),
            template_id: s("3"),
            template_name: s("Safety Inspection"),
            kind: FormType::Inspection,
            title: s("Daily Safety Inspection - March 12"),
            status: FormStatus::RequiresChanges,
            submitted_by: s("Lisa Rodriguez"),
            submitted_at: at(2024, 3, 12, 16, 0),
            project_id: Some(s("1")),
            project_name: Some(s("Downtown Office Complex")),
            data: data(json!({
                "inspectionDate": "2024-03-12",
                "inspector": "Lisa Rodriguez",
                "area": "Construction Site - Level 5",
                "ppeCompliance": "Good",
                "equipmentSafety": "Fair",
                "housekeeping": "Poor",
                "hazardsIdentified": "Loose scaffolding on east side, debris accumulation near elevator shaft",
                "correctiveActions": "Secure scaffolding, clear debris, improve housekeeping protocols",
            })),
            approvals: vec![approval("4", "Lisa Rodriguez", "Safety Officer", ApprovalAction::RequestChanges,
                "Immediate action required on scaffolding and debris. Re-inspection needed within 24 hours.", (12, 16, 30))],
            comments: vec![comment("2", "Mike Chen", "Site Supervisor",
                "Will address scaffolding issue immediately and schedule debris cleanup for tomorrow morning.", (12, 17, 15))],
            attachments: vec![attachment("3", "safety-inspection-photos.zip", 8_192_000, "application/zip", (12, 16, 5))],
        },
        FormSubmission {
            id: s("4"),
            template_id: s("4"),
            template_name: s("Daily Progress Report"),
            kind: FormType::DailyReport,
            title: s("Daily Report - March 11, 2024"),
            status: FormStatus::Submitted,
            submitted_by: s("Mike Chen"),
            submitted_at: at(2024, 3, 11, 17, 30),
            project_id: Some(s("1")),
            project_name: Some(s("Downtown Office Complex")),
            data: data(json!({
                "reportDate": "2024-03-11",
                "weather": "Clear",
                "crewSize": 24,
                "workCompleted": "Completed concrete pour for Level 4 slab. Started steel beam installation for Level 5.",
                "materialsUsed": "15 cubic yards concrete, 8 steel beams (W14x30), rebar #4 and #5",
                "equipmentUsed": "Tower crane, concrete pump, welding equipment",
                "delays": "None",
            })),
            approvals: Vec::new(),
            comments: Vec::new(),
            attachments: Vec::new(),
        },
    ]
}
