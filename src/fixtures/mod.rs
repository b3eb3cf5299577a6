//! Static sample data standing in for a backend.
//!
//! `Fixtures::load()` builds the full data set in one go; pages borrow slices
//! from it through `crate::query::Repository`.

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::{
    FormSubmission, FormTemplate, Material, Project, PurchaseOrder, SafetyIncident, SafetyInspection,
    SafetyObservation, SafetyTraining, StockMovement, Supplier,
};

pub mod forms;
pub mod inventory;
pub mod projects;
pub mod safety;
pub mod users;

pub use users::{UserDirectory, DEMO_PASSWORD};

/// Every fixture list the dashboard reads from.
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub projects: Vec<Project>,
    pub materials: Vec<Material>,
    pub stock_movements: Vec<StockMovement>,
    pub purchase_orders: Vec<PurchaseOrder>,
    pub suppliers: Vec<Supplier>,
    pub form_templates: Vec<FormTemplate>,
    pub form_submissions: Vec<FormSubmission>,
    pub safety_incidents: Vec<SafetyIncident>,
    pub safety_inspections: Vec<SafetyInspection>,
    pub safety_observations: Vec<SafetyObservation>,
    pub safety_training: Vec<SafetyTraining>,
}

impl Fixtures {
    pub fn load() -> Self {
        let fixtures = Fixtures {
            projects: projects::projects(),
            materials: inventory::materials(),
            stock_movements: inventory::stock_movements(),
            purchase_orders: inventory::purchase_orders(),
            suppliers: inventory::suppliers(),
            form_templates: forms::templates(),
            form_submissions: forms::submissions(),
            safety_incidents: safety::incidents(),
            safety_inspections: safety::inspections(),
            safety_observations: safety::observations(),
            safety_training: safety::training(),
        };
        tracing::debug!(
            projects = fixtures.projects.len(),
            materials = fixtures.materials.len(),
            submissions = fixtures.form_submissions.len(),
            incidents = fixtures.safety_incidents.len(),
            "fixtures loaded"
        );
        fixtures
    }
}

impl Default for Fixtures {
    fn default() -> Self {
        Self::load()
    }
}

// Fixture dates are literals; an out-of-range literal degrades to the epoch
// rather than aborting the load.
pub(crate) fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub(crate) fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    ymd(year, month, day).and_hms_opt(hour, minute, 0).unwrap_or_default()
}

pub(crate) fn s(text: &str) -> String {
    text.to_string()
}

pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique<'a>(ids: impl Iterator<Item = &'a str>, what: &str) {
        let mut seen = HashSet::new();
        for id in ids {
            assert!(seen.insert(id), "duplicate {what} id {id}");
        }
    }

    #[test]
    fn test_fixture_counts() {
        let f = Fixtures::load();
        assert_eq!(f.projects.len(), 3);
        assert_eq!(f.materials.len(), 8);
        assert_eq!(f.stock_movements.len(), 4);
        assert_eq!(f.purchase_orders.len(), 3);
        assert_eq!(f.suppliers.len(), 4);
        assert_eq!(f.form_templates.len(), 4);
        assert_eq!(f.form_submissions.len(), 4);
        assert_eq!(f.safety_incidents.len(), 2);
        assert_eq!(f.safety_inspections.len(), 2);
        assert_eq!(f.safety_observations.len(), 3);
        assert_eq!(f.safety_training.len(), 4);
    }

    #[test]
    fn test_ids_unique_per_collection() {
        let f = Fixtures::load();
        assert_unique(f.projects.iter().map(|p| p.id.as_str()), "project");
        assert_unique(f.materials.iter().map(|m| m.id.as_str()), "material");
        assert_unique(f.purchase_orders.iter().map(|o| o.id.as_str()), "order");
        assert_unique(f.form_submissions.iter().map(|s| s.id.as_str()), "submission");
        assert_unique(f.safety_incidents.iter().map(|i| i.id.as_str()), "incident");
        assert_unique(f.safety_observations.iter().map(|o| o.id.as_str()), "observation");
    }

    #[test]
    fn test_submissions_reference_known_templates() {
        let f = Fixtures::load();
        for submission in &f.form_submissions {
            let template = f.form_templates.iter().find(|t| t.id == submission.template_id);
            assert_eq!(template.map(|t| t.name.as_str()), Some(submission.template_name.as_str()));
        }
    }

    #[test]
    fn test_date_helpers() {
        assert_eq!(ymd(2024, 3, 12).to_string(), "2024-03-12");
        assert_eq!(at(2024, 3, 12, 14, 30).to_string(), "2024-03-12 14:30:00");
        assert_eq!(ymd(2024, 2, 30), NaiveDate::default());
    }
}
