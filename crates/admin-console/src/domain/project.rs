//! Demo project-health entities and their data source.

/// Health of a demo project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectStatus {
    Healthy,
    Failed,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Healthy => "Healthy",
            ProjectStatus::Failed => "Failed",
        }
    }
}

/// A project card's backing record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub name: String,
    pub status: ProjectStatus,
    pub description: String,
    /// Percentage string, e.g. `"99.9%"`.
    pub uptime: String,
    /// Relative time, e.g. `"2 mins ago"`.
    pub last_check: String,
    /// Milliseconds string or `"N/A"`.
    pub response_time: String,
}

/// Source of the projects shown on the dashboard.
///
/// The in-memory implementation holds the demo list; a push-based feed can
/// replace it without touching the rendering path.
pub trait ProjectSource: Send {
    /// Current projects, in display order.
    fn list(&self) -> Vec<Project>;

    /// Set the status of the project at `index`. Returns true if the stored
    /// value changed.
    fn update(&mut self, index: usize, status: ProjectStatus) -> bool;
}

/// Projects held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjects {
    projects: Vec<Project>,
}

impl InMemoryProjects {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// The eight built-in demo projects.
    pub fn demo() -> Self {
        use ProjectStatus::{Failed, Healthy};

        let rows = [
            (1, "Main API Server", Healthy, "Core REST API handling all business logic", "99.9%", "2 mins ago", "145ms"),
            (2, "Authentication Service", Healthy, "OAuth2 and JWT token management service", "99.8%", "1 min ago", "89ms"),
            (3, "Database Cluster", Failed, "PostgreSQL primary and replica nodes", "95.2%", "30 secs ago", "N/A"),
            (4, "Payment Gateway", Healthy, "Stripe payment processing integration", "100%", "3 mins ago", "234ms"),
            (5, "Email Service", Healthy, "SMTP and email template rendering service", "98.7%", "5 mins ago", "412ms"),
            (6, "File Storage", Healthy, "S3-compatible object storage service", "99.5%", "1 min ago", "178ms"),
            (7, "WebSocket Server", Failed, "Real-time bidirectional communication server", "92.1%", "45 secs ago", "N/A"),
            (8, "Cache Layer", Healthy, "Redis distributed caching system", "99.9%", "2 mins ago", "12ms"),
        ];

        Self::new(
            rows.into_iter()
                .map(
                    |(id, name, status, description, uptime, last_check, response_time)| Project {
                        id,
                        name: name.to_string(),
                        status,
                        description: description.to_string(),
                        uptime: uptime.to_string(),
                        last_check: last_check.to_string(),
                        response_time: response_time.to_string(),
                    },
                )
                .collect(),
        )
    }
}

impl ProjectSource for InMemoryProjects {
    fn list(&self) -> Vec<Project> {
        self.projects.clone()
    }

    fn update(&mut self, index: usize, status: ProjectStatus) -> bool {
        match self.projects.get_mut(index) {
            Some(project) if project.status != status => {
                project.status = status;
                true
            }
            _ => false,
        }
    }
}

/// Counts shown in the dashboard summary bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusSummary {
    pub total: usize,
    pub healthy: usize,
    pub failed: usize,
}

impl StatusSummary {
    pub fn from_projects(projects: &[Project]) -> Self {
        let healthy = projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Healthy)
            .count();
        Self {
            total: projects.len(),
            healthy,
            failed: projects.len() - healthy,
        }
    }
}
