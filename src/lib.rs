//! Workdeck: the data layer behind an onboarding-and-dashboard app.
//!
//! A three-step wizard collects a user/business profile, a generator seeds
//! a sample workspace sized to the declared company, and [`AppStore`] holds
//! the resulting aggregate, mirroring every mutation to a persistence slot.
//! Report functions aggregate the collections into chart-ready rows. All
//! state is in memory; the only external surface is one JSON snapshot.
//!
//! ```no_run
//! use workdeck::{AppStore, FileSlot, OnboardingWizard, PersonalInfo};
//!
//! # async fn example() -> Result<(), workdeck::StorageError> {
//! let mut store = AppStore::open(Box::new(FileSlot::new()?));
//!
//! if store.needs_onboarding() {
//!     let mut wizard = OnboardingWizard::new();
//!     wizard.set_personal(PersonalInfo {
//!         name: "Sarah Chen".into(),
//!         email: "sarah@acme.com".into(),
//!     });
//!     if let Some(profile) = wizard.next().await {
//!         store.complete_onboarding(profile);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod generator;
pub mod onboarding;
pub mod reports;
pub mod storage;
pub mod store;
pub mod types;
pub mod util;
pub mod validation;

pub use error::StorageError;
pub use generator::{generate_sample_data, SampleData};
pub use onboarding::{
    DelayedConfirmation, InstantConfirmation, OnboardingWizard, SubmitConfirmation, WizardStep,
};
pub use reports::{
    build_report, dashboard_stats, greeting, DashboardStats, Report, ReportInput, Timeframe,
};
pub use storage::{FileSlot, MemorySlot, PersistenceSlot};
pub use store::AppStore;
pub use types::{
    AppData, BusinessInfo, DashboardLayout, MemberStatus, NewProject, NewTeamMember, Notification,
    NotificationKind, PersonalInfo, Preferences, PreferencesDraft, Priority, Profile, Project,
    ProjectPatch, ProjectStatus, Task, TeamMember, TeamMemberPatch, Theme,
};
pub use validation::{
    validate_business_info, validate_personal_info, validate_preferences, FieldErrors,
};
