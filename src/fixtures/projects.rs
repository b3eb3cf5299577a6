use crate::domain::{PhaseStatus, Project, ProjectMember, ProjectPhase, ProjectPriority, ProjectStatus};
use crate::fixtures::{s, ymd};

fn member(id: &str, name: &str, role: &str, avatar: &str, email: &str) -> ProjectMember {
    ProjectMember {
        id: s(id),
        name: s(name),
        role: s(role),
        avatar: Some(s(avatar)),
        email: s(email),
    }
}

#[allow(clippy::too_many_arguments)]
fn phase(
    id: &str,
    name: &str,
    description: &str,
    start: (i32, u32, u32),
    end: (i32, u32, u32),
    status: PhaseStatus,
    progress: u8,
    budget: f64,
    actual_cost: f64,
) -> ProjectPhase {
    ProjectPhase {
        id: s(id),
        name: s(name),
        description: s(description),
        start_date: ymd(start.0, start.1, start.2),
        end_date: ymd(end.0, end.1, end.2),
        status,
        progress,
        budget,
        actual_cost,
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: s("1"),
            name: s("Downtown Office Complex"),
            description: s("Construction of a 15-story office building with underground parking and retail space on the ground floor."),
            status: ProjectStatus::InProgress,
            priority: ProjectPriority::High,
            start_date: ymd(2024, 1, 15),
            end_date: ymd(2024, 12, 20),
            budget: 2_500_000.0,
            actual_cost: 1_200_000.0,
            progress: 48,
            location: s("123 Main Street, Downtown"),
            client: s("Metro Development Corp"),
            project_manager: s("Sarah Johnson"),
            members: vec![
                member("1", "Sarah Johnson", "Project Manager", "/project-manager-team.png", "sarah@constructionsite.com"),
                member("2", "Mike Chen", "Site Supervisor", "/construction-manager.png", "mike@constructionsite.com"),
                member("3", "Lisa Rodriguez", "Safety Officer", "/demo-user-profile.png", "lisa@constructionsite.com"),
            ],
            phases: vec![
                phase("1", "Foundation & Excavation", "Site preparation, excavation, and foundation work",
                    (2024, 1, 15), (2024, 3, 30), PhaseStatus::Completed, 100, 400_000.0, 385_000.0),
                phase("2", "Structural Framework", "Steel framework and concrete structure",
                    (2024, 4, 1), (2024, 7, 15), PhaseStatus::InProgress, 65, 800_000.0, 520_000.0),
                phase("3", "MEP Installation", "Mechanical, electrical, and plumbing systems",
                    (2024, 7, 1), (2024, 10, 30), PhaseStatus::NotStarted, 0, 600_000.0, 0.0),
                phase("4", "Interior & Finishing", "Interior work, finishes, and final inspections",
                    (2024, 10, 15), (2024, 12, 20), PhaseStatus::NotStarted, 0, 700_000.0, 0.0),
            ],
            created_at: ymd(2024, 1, 1),
            updated_at: ymd(2024, 3, 15),
        },
        Project {
            id: s("2"),
            name: s("Residential Complex Phase 2"),
            description: s("Second phase of luxury residential development with 50 units, amenities, and landscaping."),
            status: ProjectStatus::Planning,
            priority: ProjectPriority::Medium,
            start_date: ymd(2024, 4, 1),
            end_date: ymd(2025, 2, 28),
            budget: 1_800_000.0,
            actual_cost: 0.0,
            progress: 5,
            location: s("456 Oak Avenue, Suburbs"),
            client: s("Greenfield Properties"),
            project_manager: s("John Smith"),
            members: vec![
                member("1", "John Smith", "Project Manager", "/construction-manager.png", "john@constructionsite.com"),
                member("4", "Emma Wilson", "Architect", "/trial-user-badge.png", "emma@constructionsite.com"),
            ],
            phases: vec![
                phase("5", "Design & Permits", "Architectural design and permit acquisition",
                    (2024, 4, 1), (2024, 6, 30), PhaseStatus::InProgress, 25, 150_000.0, 35_000.0),
                phase("6", "Site Preparation", "Land clearing and site preparation",
                    (2024, 7, 1), (2024, 8, 31), PhaseStatus::NotStarted, 0, 200_000.0, 0.0),
            ],
            created_at: ymd(2024, 2, 15),
            updated_at: ymd(2024, 3, 10),
        },
        Project {
            id: s("3"),
            name: s("Highway Bridge Renovation"),
            description: s("Complete renovation of the historic Main Street bridge including structural reinforcement and aesthetic improvements."),
            status: ProjectStatus::Completed,
            priority: ProjectPriority::Critical,
            start_date: ymd(2023, 8, 1),
            end_date: ymd(2024, 1, 31),
            budget: 950_000.0,
            actual_cost: 920_000.0,
            progress: 100,
            location: s("Main Street Bridge, City Center"),
            client: s("City Public Works Department"),
            project_manager: s("Sarah Johnson"),
            members: vec![
                member("1", "Sarah Johnson", "Project Manager", "/project-manager-team.png", "sarah@constructionsite.com"),
                member("5", "David Park", "Structural Engineer", "/demo-user-profile.png", "david@constructionsite.com"),
            ],
            phases: vec![
                phase("7", "Structural Assessment", "Complete structural analysis and planning",
                    (2023, 8, 1), (2023, 9, 30), PhaseStatus::Completed, 100, 100_000.0, 95_000.0),
                phase("8", "Renovation Work", "Bridge renovation and reinforcement",
                    (2023, 10, 1), (2024, 1, 31), PhaseStatus::Completed, 100, 850_000.0, 825_000.0),
            ],
            created_at: ymd(2023, 7, 15),
            updated_at: ymd(2024, 2, 1),
        },
    ]
}
