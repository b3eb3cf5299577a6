//!
//! Read access over fixture collections: id lookup plus the search / enum
//! filters the list views offer.
//!
//! Search is a case-insensitive substring match over a few text fields per
//! entity. A blank term matches everything, and an enum filter left at `None`
//! means "all".

use crate::domain::{
    FormStatus, FormSubmission, FormTemplate, FormType, IncidentSeverity, IncidentStatus, Material,
    MaterialCategory, ObservationStatus, ObservationType, OrderStatus, Project, ProjectPriority,
    ProjectStatus, PurchaseOrder, SafetyIncident, SafetyInspection, SafetyObservation, SafetyTraining,
    StockMovement, StockStatus, Supplier,
};

/// Anything addressable by a string id.
pub trait Record {
    fn id(&self) -> &str;
}

macro_rules! impl_record {
    ($($ty:ty),+ $(,)?) => {
        $(impl Record for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        })+
    };
}

impl_record!(
    Project,
    Material,
    StockMovement,
    PurchaseOrder,
    Supplier,
    FormTemplate,
    FormSubmission,
    SafetyIncident,
    SafetyInspection,
    SafetyObservation,
    SafetyTraining,
);

/// Predicate applied by `Repository::filter`.
pub trait Filter<T> {
    fn matches(&self, item: &T) -> bool;
}

impl<T, F> Filter<T> for F
where
    F: Fn(&T) -> bool,
{
    fn matches(&self, item: &T) -> bool {
        self(item)
    }
}

/// Borrowed view over one collection.
#[derive(Debug)]
pub struct Repository<'a, T> {
    items: &'a [T],
}

impl<'a, T> Clone for Repository<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Repository<'a, T> {}

impl<'a, T: Record> Repository<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Repository { items }
    }

    pub fn find_by_id(&self, id: &str) -> Option<&'a T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn all(&self) -> &'a [T] {
        self.items
    }

    /// Matching items in collection order.
    pub fn filter<F: Filter<T> + ?Sized>(&self, filter: &F) -> Vec<&'a T> {
        let hits: Vec<&'a T> = self.items.iter().filter(|item| filter.matches(item)).collect();
        tracing::trace!(total = self.items.len(), hits = hits.len(), "filtered collection");
        hits
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// True when `term` is blank or any field contains it, ignoring case and
/// surrounding whitespace in the term.
pub fn matches_search(term: &str, fields: &[&str]) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    fields.iter().any(|field| field.to_lowercase().contains(&needle))
}

fn matches_choice<E: PartialEq>(choice: &Option<E>, value: &E) -> bool {
    match choice {
        Some(wanted) => wanted == value,
        None => true,
    }
}

macro_rules! filter_builders {
    ($name:ident { $($field:ident: $ty:ty),* $(,)? }) => {
        impl $name {
            pub fn search(mut self, term: impl Into<String>) -> Self {
                self.search = term.into();
                self
            }

            $(pub fn $field(mut self, value: $ty) -> Self {
                self.$field = Some(value);
                self
            })*
        }
    };
}

/// Inventory list: name, SKU or supplier; category; stock status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterialFilter {
    pub search: String,
    pub category: Option<MaterialCategory>,
    pub status: Option<StockStatus>,
}

filter_builders!(MaterialFilter { category: MaterialCategory, status: StockStatus });

impl Filter<Material> for MaterialFilter {
    fn matches(&self, m: &Material) -> bool {
        matches_search(&self.search, &[&m.name, &m.sku, &m.supplier])
            && matches_choice(&self.category, &m.category)
            && matches_choice(&self.status, &m.status)
    }
}

/// Purchase orders: order number or supplier; order status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    pub search: String,
    pub status: Option<OrderStatus>,
}

filter_builders!(OrderFilter { status: OrderStatus });

impl Filter<PurchaseOrder> for OrderFilter {
    fn matches(&self, o: &PurchaseOrder) -> bool {
        matches_search(&self.search, &[&o.order_number, &o.supplier]) && matches_choice(&self.status, &o.status)
    }
}

/// Form list: title, submitter or template name; status; form type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionFilter {
    pub search: String,
    pub status: Option<FormStatus>,
    pub kind: Option<FormType>,
}

filter_builders!(SubmissionFilter { status: FormStatus, kind: FormType });

impl Filter<FormSubmission> for SubmissionFilter {
    fn matches(&self, f: &FormSubmission) -> bool {
        matches_search(&self.search, &[&f.title, &f.submitted_by, &f.template_name])
            && matches_choice(&self.status, &f.status)
            && matches_choice(&self.kind, &f.kind)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncidentFilter {
    pub search: String,
    pub severity: Option<IncidentSeverity>,
    pub status: Option<IncidentStatus>,
}

filter_builders!(IncidentFilter { severity: IncidentSeverity, status: IncidentStatus });

impl Filter<SafetyIncident> for IncidentFilter {
    fn matches(&self, i: &SafetyIncident) -> bool {
        matches_search(&self.search, &[&i.title, &i.incident_number, &i.reported_by])
            && matches_choice(&self.severity, &i.severity)
            && matches_choice(&self.status, &i.status)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservationFilter {
    pub search: String,
    pub kind: Option<ObservationType>,
    pub status: Option<ObservationStatus>,
}

filter_builders!(ObservationFilter { kind: ObservationType, status: ObservationStatus });

impl Filter<SafetyObservation> for ObservationFilter {
    fn matches(&self, o: &SafetyObservation) -> bool {
        matches_search(&self.search, &[&o.title, &o.observation_number, &o.observed_by])
            && matches_choice(&self.kind, &o.kind)
            && matches_choice(&self.status, &o.status)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub search: String,
    pub status: Option<ProjectStatus>,
    pub priority: Option<ProjectPriority>,
}

filter_builders!(ProjectFilter { status: ProjectStatus, priority: ProjectPriority });

impl Filter<Project> for ProjectFilter {
    fn matches(&self, p: &Project) -> bool {
        matches_search(&self.search, &[&p.name, &p.client, &p.location])
            && matches_choice(&self.status, &p.status)
            && matches_choice(&self.priority, &p.priority)
    }
}
