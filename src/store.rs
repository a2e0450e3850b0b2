//! The application data store.
//!
//! Owns the single [`AppData`] aggregate for a session and mirrors every
//! mutation to its persistence slot. Persistence is fire-and-forget: a
//! failed save is logged and the in-memory state stays authoritative, so
//! no operation here returns an error.

use std::collections::HashMap;

use crate::generator::{generate_sample_data, SampleData};
use crate::storage::PersistenceSlot;
use crate::types::{
    AppData, Notification, Profile, Project, ProjectPatch, TeamMember, TeamMemberPatch,
};

/// Session-owned store: one aggregate, one slot.
///
/// Constructed once at startup and passed down to whatever drives it; there
/// is no process-wide instance.
pub struct AppStore {
    data: AppData,
    slot: Box<dyn PersistenceSlot>,
}

impl AppStore {
    /// Open the store from a slot's snapshot.
    ///
    /// A missing or unreadable snapshot falls back to the empty default,
    /// which routes the session back through onboarding.
    pub fn open(slot: Box<dyn PersistenceSlot>) -> Self {
        let data = match slot.load() {
            Ok(Some(data)) => data,
            Ok(None) => AppData::default(),
            Err(e) => {
                log::warn!("Failed to load app data snapshot, starting fresh: {}", e);
                AppData::default()
            }
        };
        AppStore { data, slot }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    pub fn data(&self) -> &AppData {
        &self.data
    }

    pub fn profile(&self) -> &Profile {
        &self.data.profile
    }

    pub fn projects(&self) -> &[Project] {
        &self.data.projects
    }

    pub fn team_members(&self) -> &[TeamMember] {
        &self.data.team_members
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.data.notifications
    }

    /// True until a completed profile has been stored.
    pub fn needs_onboarding(&self) -> bool {
        !self.data.profile.onboarding_completed
    }

    /// Member display names keyed by id.
    pub fn member_names(&self) -> HashMap<String, String> {
        self.data
            .team_members
            .iter()
            .map(|m| (m.id.clone(), m.name.clone()))
            .collect()
    }

    /// Display names for a project's team, resolved against the current
    /// roster. Ids with no matching member fall back to the raw id rather
    /// than dropping silently.
    pub fn project_member_names(&self, project: &Project) -> Vec<String> {
        let names = self.member_names();
        project
            .team_member_ids
            .iter()
            .map(|id| names.get(id).cloned().unwrap_or_else(|| id.clone()))
            .collect()
    }

    // =========================================================================
    // Profile
    // =========================================================================

    /// Full profile replacement.
    pub fn update_profile(&mut self, profile: Profile) {
        self.data.profile = profile;
        self.persist();
    }

    /// Logout: reset the profile to the empty default. The collections are
    /// left untouched.
    pub fn reset_profile(&mut self) {
        self.data.profile = Profile::default();
        self.persist();
    }

    /// Wizard completion: store the profile, then seed the workspace from
    /// it.
    pub fn complete_onboarding(&mut self, profile: Profile) {
        let sample = generate_sample_data(&profile);
        self.update_profile(profile);
        self.install_sample_data(sample);
    }

    /// Replace all three collections with freshly generated sample data.
    pub fn install_sample_data(&mut self, sample: SampleData) {
        self.data.team_members = sample.team_members;
        self.data.projects = sample.projects;
        self.data.notifications = sample.notifications;
        self.persist();
    }

    // =========================================================================
    // Projects
    // =========================================================================

    pub fn add_project(&mut self, project: Project) {
        self.data.projects.push(project);
        self.persist();
    }

    /// Merge a patch into the project with `id`. Returns false (leaving the
    /// collection unchanged) when no such project exists.
    pub fn update_project(&mut self, id: &str, patch: ProjectPatch) -> bool {
        let found = match self.data.projects.iter_mut().find(|p| p.id == id) {
            Some(project) => {
                patch.apply(project);
                true
            }
            None => false,
        };
        self.persist();
        found
    }

    /// Remove the project with `id`. Returns false when no such project
    /// exists; a repeat delete is a no-op.
    pub fn delete_project(&mut self, id: &str) -> bool {
        let before = self.data.projects.len();
        self.data.projects.retain(|p| p.id != id);
        let removed = self.data.projects.len() < before;
        self.persist();
        removed
    }

    // =========================================================================
    // Team members
    // =========================================================================

    pub fn add_team_member(&mut self, member: TeamMember) {
        self.data.team_members.push(member);
        self.persist();
    }

    /// Merge a patch into the member with `id`. There is no delete: members
    /// are deactivated through a status patch, never removed.
    pub fn update_team_member(&mut self, id: &str, patch: TeamMemberPatch) -> bool {
        let found = match self.data.team_members.iter_mut().find(|m| m.id == id) {
            Some(member) => {
                patch.apply(member);
                true
            }
            None => false,
        };
        self.persist();
        found
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// Prepend a notification so the newest renders first.
    pub fn add_notification(&mut self, notification: Notification) {
        self.data.notifications.insert(0, notification);
        self.persist();
    }

    /// Flip `read` on one notification. Idempotent; unknown ids are a
    /// no-op.
    pub fn mark_notification_read(&mut self, id: &str) -> bool {
        let found = match self.data.notifications.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.read = true;
                true
            }
            None => false,
        };
        self.persist();
        found
    }

    /// Flip `read` on every unread notification. Returns how many changed.
    pub fn mark_all_notifications_read(&mut self) -> usize {
        let mut marked = 0;
        for notification in self.data.notifications.iter_mut().filter(|n| !n.read) {
            notification.read = true;
            marked += 1;
        }
        self.persist();
        marked
    }

    fn persist(&self) {
        if let Err(e) = self.slot.save(&self.data) {
            log::warn!("Failed to persist app data: {}", e);
        }
    }
}
