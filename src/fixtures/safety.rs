use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::{
    ActionStatus, ChecklistResult, CorrectiveAction, FindingPriority, IncidentSeverity, IncidentStatus,
    InjuredPerson, InspectionItem, InspectionStatus, ObservationStatus, ObservationType, SafetyAttachment,
    SafetyIncident, SafetyInspection, SafetyObservation, SafetyRating, SafetyTraining, TrainingStatus,
};
use crate::fixtures::{at, s, strings, ymd};

const SITE: &str = "Downtown Office Complex";

fn photo(id: &str, name: &str, size: u64, uploaded_at: NaiveDateTime) -> SafetyAttachment {
    SafetyAttachment {
        id: s(id),
        name: s(name),
        url: format!("/{name}"),
        mime_type: s("image/jpeg"),
        size,
        uploaded_at,
    }
}

pub fn incidents() -> Vec<SafetyIncident> {
    vec![
        SafetyIncident {
            id: s("1"),
            incident_number: s("INC-2024-001"),
            title: s("Minor Cut from Sharp Metal Edge"),
            description: s("Worker sustained a minor cut on left hand while handling steel beam with sharp edge."),
            severity: IncidentSeverity::Minor,
            status: IncidentStatus::Resolved,
            reported_by: s("Mike Chen"),
            reported_at: at(2024, 3, 12, 14, 30),
            occurred_at: at(2024, 3, 12, 14, 15),
            location: s("Level 5 - Steel Installation Area"),
            project_id: Some(s("1")),
            project_name: Some(s(SITE)),
            injured_persons: vec![InjuredPerson {
                name: s("Robert Martinez"),
                role: s("Steel Worker"),
                injury_type: s("Laceration"),
                body_part: s("Left Hand"),
                medical_attention: true,
                hospital_required: false,
            }],
            witnesses: strings(&["Carlos Rodriguez", "James Wilson"]),
            immediate_actions: s(
                "First aid applied, wound cleaned and bandaged. Worker sent to medical clinic for evaluation.",
            ),
            root_cause: Some(s("Steel beam had unfinished sharp edge that was not properly ground down.")),
            corrective_actions: strings(&[
                "All steel beams to be inspected for sharp edges before installation",
                "Additional safety briefing on handling materials with potential sharp edges",
                "Ensure proper PPE (cut-resistant gloves) are worn when handling steel",
            ]),
            investigated_by: Some(s("Lisa Rodriguez")),
            investigation_date: Some(ymd(2024, 3, 13)),
            attachments: vec![photo("1", "incident-photos.jpg", 2_048_000, at(2024, 3, 12, 15, 0))],
            follow_up_required: true,
            follow_up_date: Some(ymd(2024, 3, 19)),
        },
        SafetyIncident {
            id: s("2"),
            incident_number: s("INC-2024-002"),
            title: s("Near Miss - Falling Tools"),
            description: s("Hammer fell from Level 3 scaffolding, narrowly missing workers below."),
            severity: IncidentSeverity::Moderate,
            status: IncidentStatus::Investigating,
            reported_by: s("Sarah Johnson"),
            reported_at: at(2024, 3, 11, 10, 45),
            occurred_at: at(2024, 3, 11, 10, 30),
            location: s("Level 3 - Scaffolding Area"),
            project_id: Some(s("1")),
            project_name: Some(s(SITE)),
            injured_persons: Vec::new(),
            witnesses: strings(&["Mike Chen", "David Park"]),
            immediate_actions: s(
                "Area cleared, tool tethering procedures reviewed with all workers on elevated surfaces.",
            ),
            root_cause: None,
            corrective_actions: strings(&[
                "Mandatory tool tethering for all work above 6 feet",
                "Additional safety nets installed below scaffolding areas",
                "Daily tool inspection checklist implemented",
            ]),
            investigated_by: Some(s("Lisa Rodriguez")),
            investigation_date: Some(ymd(2024, 3, 12)),
            attachments: Vec::new(),
            follow_up_required: true,
            follow_up_date: Some(ymd(2024, 3, 18)),
        },
    ]
}

fn check(
    id: &str,
    category: &str,
    item: &str,
    status: ChecklistResult,
    notes: &str,
    priority: Option<FindingPriority>,
) -> InspectionItem {
    InspectionItem {
        id: s(id),
        category: s(category),
        item: s(item),
        status,
        notes: Some(s(notes)),
        priority,
    }
}

pub fn inspections() -> Vec<SafetyInspection> {
    use ChecklistResult::{Fail, Pass};
    vec![
        SafetyInspection {
            id: s("1"),
            inspection_number: s("INS-2024-001"),
            title: s("Weekly Safety Inspection - Level 5"),
            kind: s("Weekly General Inspection"),
            status: InspectionStatus::Completed,
            scheduled_date: ymd(2024, 3, 11),
            completed_date: Some(at(2024, 3, 11, 16, 0)),
            inspector: s("Lisa Rodriguez"),
            location: s("Level 5 - Construction Area"),
            project_id: Some(s("1")),
            project_name: Some(s(SITE)),
            checklist: vec![
                check("1", "PPE Compliance", "Hard hats worn by all personnel", Pass,
                    "All workers properly wearing hard hats", None),
                check("2", "PPE Compliance", "Safety glasses/goggles in use", Pass,
                    "Good compliance observed", None),
                check("3", "Fall Protection", "Guardrails properly installed", Fail,
                    "Missing guardrail on east side opening", Some(FindingPriority::High)),
                check("4", "Housekeeping", "Work areas clean and organized", Pass,
                    "Areas well maintained", None),
                check("5", "Equipment Safety", "Tools in good working condition", Pass,
                    "All tools inspected and tagged", None),
            ],
            overall_rating: SafetyRating::Good,
            findings: strings(&[
                "Missing guardrail creates fall hazard",
                "Overall good safety compliance",
                "Workers following proper procedures",
            ]),
            recommendations: strings(&[
                "Install missing guardrail immediately",
                "Continue current safety practices",
                "Consider additional fall protection training",
            ]),
            corrective_actions: vec![CorrectiveAction {
                id: s("1"),
                description: s("Install guardrail on east side opening"),
                assigned_to: s("Mike Chen"),
                due_date: ymd(2024, 3, 13),
                status: ActionStatus::Completed,
                completed_date: Some(ymd(2024, 3, 12)),
            }],
            next_inspection_date: Some(ymd(2024, 3, 18)),
        },
        SafetyInspection {
            id: s("2"),
            inspection_number: s("INS-2024-002"),
            title: s("Electrical Safety Inspection"),
            kind: s("Electrical Systems Inspection"),
            status: InspectionStatus::Scheduled,
            scheduled_date: ymd(2024, 3, 15),
            completed_date: None,
            inspector: s("David Park"),
            location: s("All Levels - Electrical Systems"),
            project_id: Some(s("1")),
            project_name: Some(s(SITE)),
            checklist: Vec::new(),
            overall_rating: SafetyRating::Good,
            findings: Vec::new(),
            recommendations: Vec::new(),
            corrective_actions: Vec::new(),
            next_inspection_date: None,
        },
    ]
}

pub fn observations() -> Vec<SafetyObservation> {
    vec![
        SafetyObservation {
            id: s("1"),
            observation_number: s("OBS-2024-001"),
            kind: ObservationType::SafeBehavior,
            title: s("Excellent Use of Fall Protection"),
            description: s(
                "Observed worker properly using full body harness and double lanyard system while working on edge.",
            ),
            location: s("Level 4 - Perimeter Work"),
            observed_by: s("Sarah Johnson"),
            observed_at: at(2024, 3, 10, 11, 30),
            project_id: Some(s("1")),
            project_name: Some(s(SITE)),
            person_involved: Some(s("Carlos Rodriguez")),
            immediate_action: s("Recognized worker for excellent safety practices"),
            follow_up_required: false,
            follow_up_actions: Vec::new(),
            status: ObservationStatus::Closed,
            attachments: Vec::new(),
        },
        SafetyObservation {
            id: s("2"),
            observation_number: s("OBS-2024-002"),
            kind: ObservationType::UnsafeBehavior,
            title: s("Improper Ladder Usage"),
            description: s("Worker observed using ladder without proper 4:1 ratio setup and no spotter present."),
            location: s("Level 2 - Electrical Work Area"),
            observed_by: s("Mike Chen"),
            observed_at: at(2024, 3, 9, 14, 20),
            project_id: Some(s("1")),
            project_name: Some(s(SITE)),
            person_involved: Some(s("James Wilson")),
            immediate_action: s("Stopped work, corrected ladder setup, provided refresher training"),
            follow_up_required: true,
            follow_up_actions: strings(&[
                "Schedule ladder safety refresher training",
                "Implement buddy system for ladder work",
            ]),
            status: ObservationStatus::InProgress,
            attachments: Vec::new(),
        },
        SafetyObservation {
            id: s("3"),
            observation_number: s("OBS-2024-003"),
            kind: ObservationType::Hazard,
            title: s("Exposed Electrical Wiring"),
            description: s("Temporary electrical wiring found without proper protection in high-traffic area."),
            location: s("Ground Level - Main Entrance"),
            observed_by: s("Lisa Rodriguez"),
            observed_at: at(2024, 3, 8, 9, 15),
            project_id: Some(s("1")),
            project_name: Some(s(SITE)),
            person_involved: None,
            immediate_action: s("Area cordoned off, electrical contractor notified immediately"),
            follow_up_required: true,
            follow_up_actions: strings(&["Install proper cable protection", "Review temporary electrical procedures"]),
            status: ObservationStatus::Closed,
            attachments: vec![photo("2", "hazard-photo.jpg", 1_536_000, at(2024, 3, 8, 9, 20))],
        },
    ]
}

pub fn training() -> Vec<SafetyTraining> {
    let record = |id: &str,
                  employee: (&str, &str),
                  training_type: &str,
                  training_date: NaiveDate,
                  expiry_date: Option<NaiveDate>,
                  instructor: &str,
                  status: TrainingStatus,
                  certificate: Option<(&str, u8)>| SafetyTraining {
        id: s(id),
        employee_name: s(employee.0),
        employee_id: s(employee.1),
        training_type: s(training_type),
        training_date,
        expiry_date,
        instructor: s(instructor),
        status,
        certificate_number: certificate.map(|(number, _)| s(number)),
        score: certificate.map(|(_, score)| score),
    };
    vec![
        record("1", ("Robert Martinez", "EMP-001"), "OSHA 10-Hour Construction", ymd(2024, 1, 15),
            Some(ymd(2027, 1, 15)), "Safety Training Institute", TrainingStatus::Completed,
            Some(("OSHA-10-2024-001", 95))),
        record("2", ("Carlos Rodriguez", "EMP-002"), "Fall Protection Competent Person", ymd(2024, 2, 20),
            Some(ymd(2025, 2, 20)), "Lisa Rodriguez", TrainingStatus::Completed,
            Some(("FP-CP-2024-002", 88))),
        record("3", ("James Wilson", "EMP-003"), "Scaffold Safety", ymd(2023, 12, 10),
            Some(ymd(2024, 12, 10)), "Construction Safety Corp", TrainingStatus::Expired,
            Some(("SS-2023-003", 92))),
        record("4", ("David Park", "EMP-004"), "Electrical Safety", ymd(2024, 3, 20),
            None, "ElectroSafe Training", TrainingStatus::Upcoming, None),
    ]
}
