use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Profile
// =============================================================================

/// Personal details collected in wizard step 1.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
}

/// Business details collected in wizard step 2.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessInfo {
    pub company: String,
    pub industry: String,
    /// One of [`COMPANY_SIZES`]; drives sample data volume.
    pub size: String,
}

/// Color theme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Auto,
}

impl Theme {
    /// Resolve to a concrete dark/light choice. `Auto` follows the
    /// caller-supplied system preference.
    pub fn is_dark(self, system_prefers_dark: bool) -> bool {
        match self {
            Theme::Light => false,
            Theme::Dark => true,
            Theme::Auto => system_prefers_dark,
        }
    }
}

/// Dashboard layout density.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardLayout {
    Compact,
    #[default]
    Detailed,
    Minimal,
}

/// Dashboard preferences collected in wizard step 3.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub theme: Theme,
    pub dashboard_layout: DashboardLayout,
}

/// Wizard step 3 form state. Selections start empty so "please select"
/// validation has something to catch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreferencesDraft {
    pub theme: Option<Theme>,
    pub dashboard_layout: Option<DashboardLayout>,
}

impl PreferencesDraft {
    /// Concrete preferences. Meaningful only after validation has passed;
    /// unset selections fall back to the defaults.
    pub fn resolve(&self) -> Preferences {
        Preferences {
            theme: self.theme.unwrap_or_default(),
            dashboard_layout: self.dashboard_layout.unwrap_or_default(),
        }
    }
}

/// The onboarding-collected user profile.
///
/// Replaced wholesale on wizard completion or preference edits; reset to
/// the empty default on logout, never deleted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub personal: PersonalInfo,
    #[serde(default)]
    pub business: BusinessInfo,
    #[serde(default)]
    pub preferences: Preferences,
    #[serde(default)]
    pub onboarding_completed: bool,
}

// =============================================================================
// Projects
// =============================================================================

/// Project lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Planning,
    InProgress,
    Completed,
    OnHold,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 4] = [
        ProjectStatus::Planning,
        ProjectStatus::InProgress,
        ProjectStatus::Completed,
        ProjectStatus::OnHold,
    ];

    /// Display label ("in-progress" → "In Progress").
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planning",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::OnHold => "On Hold",
        }
    }
}

/// Project priority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];
}

/// A task within a project. Generated sample data leaves task lists empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub completed: bool,
    pub assignee: String,
    pub due_date: DateTime<Utc>,
}

/// A tracked project.
///
/// Team membership references member **ids**; display names are resolved at
/// read time against the member collection so a member rename never leaves
/// stale strings behind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub priority: Priority,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// Percentage in [0, 100].
    pub progress: u8,
    #[serde(default)]
    pub team_member_ids: Vec<String>,
    pub budget: u32,
    pub spent: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tasks: Vec<Task>,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when a user creates a project; tracking fields start
/// zeroed.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub priority: Priority,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub team_member_ids: Vec<String>,
    pub budget: u32,
}

impl Project {
    /// Create a user-authored project with a fresh id.
    pub fn create(params: NewProject) -> Self {
        Project {
            id: uuid::Uuid::new_v4().to_string(),
            name: params.name,
            description: params.description,
            status: params.status,
            priority: params.priority,
            start_date: params.start_date,
            end_date: params.end_date,
            progress: 0,
            team_member_ids: params.team_member_ids,
            budget: params.budget,
            spent: 0,
            tasks: Vec::new(),
            created_at: Utc::now(),
        }
    }
}

/// Partial update for a project; `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub priority: Option<Priority>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub progress: Option<u8>,
    pub team_member_ids: Option<Vec<String>>,
    pub budget: Option<u32>,
    pub spent: Option<u32>,
    pub tasks: Option<Vec<Task>>,
}

impl ProjectPatch {
    /// Merge into `project`. Progress is clamped to 100.
    pub fn apply(self, project: &mut Project) {
        if let Some(name) = self.name {
            project.name = name;
        }
        if let Some(description) = self.description {
            project.description = description;
        }
        if let Some(status) = self.status {
            project.status = status;
        }
        if let Some(priority) = self.priority {
            project.priority = priority;
        }
        if let Some(start_date) = self.start_date {
            project.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            project.end_date = end_date;
        }
        if let Some(progress) = self.progress {
            project.progress = progress.min(100);
        }
        if let Some(ids) = self.team_member_ids {
            project.team_member_ids = ids;
        }
        if let Some(budget) = self.budget {
            project.budget = budget;
        }
        if let Some(spent) = self.spent {
            project.spent = spent;
        }
        if let Some(tasks) = self.tasks {
            project.tasks = tasks;
        }
    }
}

// =============================================================================
// Team members
// =============================================================================

/// Member activity status. Members are deactivated, never hard-deleted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    #[default]
    Active,
    Inactive,
}

impl MemberStatus {
    /// The opposite status, for activate/deactivate toggles.
    pub fn toggled(self) -> Self {
        match self {
            MemberStatus::Active => MemberStatus::Inactive,
            MemberStatus::Inactive => MemberStatus::Active,
        }
    }
}

/// A team member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub avatar_url: String,
    pub join_date: NaiveDate,
    pub status: MemberStatus,
}

/// Fields supplied when a user adds a member through the team form.
#[derive(Debug, Clone)]
pub struct NewTeamMember {
    pub name: String,
    pub email: String,
    pub role: String,
    pub avatar_url: String,
}

impl TeamMember {
    /// Create a user-added member: fresh id, joined today, active.
    pub fn create(params: NewTeamMember) -> Self {
        TeamMember {
            id: uuid::Uuid::new_v4().to_string(),
            name: params.name,
            email: params.email,
            role: params.role,
            avatar_url: params.avatar_url,
            join_date: Utc::now().date_naive(),
            status: MemberStatus::Active,
        }
    }
}

/// Partial update for a team member; `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct TeamMemberPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub avatar_url: Option<String>,
    pub join_date: Option<NaiveDate>,
    pub status: Option<MemberStatus>,
}

impl TeamMemberPatch {
    /// Merge into `member`.
    pub fn apply(self, member: &mut TeamMember) {
        if let Some(name) = self.name {
            member.name = name;
        }
        if let Some(email) = self.email {
            member.email = email;
        }
        if let Some(role) = self.role {
            member.role = role;
        }
        if let Some(avatar_url) = self.avatar_url {
            member.avatar_url = avatar_url;
        }
        if let Some(join_date) = self.join_date {
            member.join_date = join_date;
        }
        if let Some(status) = self.status {
            member.status = status;
        }
    }
}

// =============================================================================
// Notifications
// =============================================================================

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

/// An in-app notification. The collection is prepend-only; the only
/// mutation ever applied is flipping `read`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Create an app-event notification: fresh id, unread, stamped now.
    pub fn create(title: &str, message: &str, kind: NotificationKind) -> Self {
        Notification {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.to_string(),
            message: message.to_string(),
            kind,
            read: false,
            created_at: Utc::now(),
        }
    }
}

// =============================================================================
// Aggregate root
// =============================================================================

/// Aggregate root: the profile plus the three owned collections.
///
/// One instance per session, loaded from the persisted snapshot (or
/// defaults) at startup and serialized wholesale after every mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppData {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub team_members: Vec<TeamMember>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

// =============================================================================
// Selection catalogs
// =============================================================================

/// Industries offered in wizard step 2.
pub const INDUSTRIES: [&str; 10] = [
    "Technology",
    "Healthcare",
    "Finance",
    "Education",
    "Manufacturing",
    "Retail",
    "Marketing",
    "Consulting",
    "Real Estate",
    "Other",
];

/// Company sizes offered in wizard step 2.
pub const COMPANY_SIZES: [&str; 5] = [
    "1-10 employees",
    "11-50 employees",
    "51-200 employees",
    "201-500 employees",
    "500+ employees",
];

/// Roles offered in the member form.
pub const MEMBER_ROLES: [&str; 6] = [
    "Developer",
    "Designer",
    "Manager",
    "Analyst",
    "Coordinator",
    "Consultant",
];
