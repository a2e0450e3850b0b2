//! Three-step onboarding wizard.
//!
//! Personal → Business → Preferences → Complete. Advancement is gated on
//! the step validators; submission awaits an injected confirmation step
//! (a fixed delay in production) before emitting the completed profile.

use std::time::Duration;

use async_trait::async_trait;

use crate::types::{BusinessInfo, PersonalInfo, PreferencesDraft, Profile};
use crate::validation::{
    validate_business_info, validate_personal_info, validate_preferences, FieldErrors,
};

/// Default submission delay in milliseconds.
const SUBMIT_DELAY_MS: u64 = 1500;

/// Confirmation step awaited before onboarding completes.
///
/// Production uses [`DelayedConfirmation`]; tests inject
/// [`InstantConfirmation`] so the flow runs without timing dependencies.
#[async_trait]
pub trait SubmitConfirmation: Send + Sync {
    async fn confirm(&self);
}

/// Fixed-delay confirmation simulating an external acknowledgement.
pub struct DelayedConfirmation {
    delay: Duration,
}

impl DelayedConfirmation {
    pub fn new(delay: Duration) -> Self {
        DelayedConfirmation { delay }
    }
}

impl Default for DelayedConfirmation {
    fn default() -> Self {
        DelayedConfirmation {
            delay: Duration::from_millis(SUBMIT_DELAY_MS),
        }
    }
}

#[async_trait]
impl SubmitConfirmation for DelayedConfirmation {
    async fn confirm(&self) {
        tokio::time::sleep(self.delay).await;
    }
}

/// Immediate confirmation, for tests.
pub struct InstantConfirmation;

#[async_trait]
impl SubmitConfirmation for InstantConfirmation {
    async fn confirm(&self) {}
}

/// Wizard position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Personal,
    Business,
    Preferences,
    Complete,
}

/// The onboarding state machine.
///
/// Holds staged form data for all three steps plus the current step's
/// validation errors. A single instance drives one onboarding session.
pub struct OnboardingWizard {
    step: WizardStep,
    personal: PersonalInfo,
    business: BusinessInfo,
    preferences: PreferencesDraft,
    errors: FieldErrors,
    submitting: bool,
    confirmation: Box<dyn SubmitConfirmation>,
}

impl OnboardingWizard {
    /// Wizard with the production submission delay.
    pub fn new() -> Self {
        Self::with_confirmation(Box::new(DelayedConfirmation::default()))
    }

    /// Wizard with an injected confirmation step.
    pub fn with_confirmation(confirmation: Box<dyn SubmitConfirmation>) -> Self {
        OnboardingWizard {
            step: WizardStep::Personal,
            personal: PersonalInfo::default(),
            business: BusinessInfo::default(),
            preferences: PreferencesDraft::default(),
            errors: FieldErrors::new(),
            submitting: false,
            confirmation,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Validation errors from the last `next()` attempt on this step.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// True while the submission confirmation is being awaited.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_personal(&mut self, info: PersonalInfo) {
        self.personal = info;
    }

    pub fn set_business(&mut self, info: BusinessInfo) {
        self.business = info;
    }

    pub fn set_preferences(&mut self, draft: PreferencesDraft) {
        self.preferences = draft;
    }

    /// Validate the current step and advance.
    ///
    /// On validation failure the wizard stays put and the error map is
    /// readable via [`Self::errors`]. A clean validation on the
    /// preferences step runs the submission flow: the confirmation step
    /// is awaited, the composed profile is returned with
    /// `onboarding_completed = true`, and the wizard moves to
    /// [`WizardStep::Complete`]. Returns `None` in every other case.
    pub async fn next(&mut self) -> Option<Profile> {
        let step_errors = match self.step {
            WizardStep::Personal => validate_personal_info(&self.personal),
            WizardStep::Business => validate_business_info(&self.business),
            WizardStep::Preferences => validate_preferences(&self.preferences),
            WizardStep::Complete => return None,
        };

        if !step_errors.is_empty() {
            self.errors = step_errors;
            return None;
        }
        self.errors.clear();

        match self.step {
            WizardStep::Personal => {
                self.step = WizardStep::Business;
                None
            }
            WizardStep::Business => {
                self.step = WizardStep::Preferences;
                None
            }
            _ => Some(self.submit().await),
        }
    }

    /// Move to the previous step and clear any errors. No-op at the first
    /// step (and once complete).
    pub fn back(&mut self) {
        let previous = match self.step {
            WizardStep::Business => WizardStep::Personal,
            WizardStep::Preferences => WizardStep::Business,
            WizardStep::Personal | WizardStep::Complete => return,
        };
        self.step = previous;
        self.errors.clear();
    }

    async fn submit(&mut self) -> Profile {
        self.submitting = true;
        self.confirmation.confirm().await;
        self.submitting = false;
        self.step = WizardStep::Complete;

        log::info!("Onboarding completed for {}", self.business.company);

        Profile {
            personal: self.personal.clone(),
            business: self.business.clone(),
            preferences: self.preferences.resolve(),
            onboarding_completed: true,
        }
    }
}

impl Default for OnboardingWizard {
    fn default() -> Self {
        Self::new()
    }
}
