//! Sample workspace synthesis.
//!
//! After onboarding the dashboard seeds itself with a workspace scaled to
//! the declared company size: a capped roster of team members, a spread of
//! projects across statuses and priorities, and a pair of welcome
//! notifications. Ids are stable (`member-1`, `project-1`, ...) so repeated
//! seeding replaces rather than accumulates.

use chrono::{DateTime, Duration, Utc};
use rand::{Rng, RngExt};

use crate::types::{
    MemberStatus, Notification, NotificationKind, Priority, Profile, Project, ProjectStatus,
    TeamMember,
};
use crate::util::company_email_domain;

/// Ceiling on synthesized members, regardless of company size.
const MEMBER_CAP: usize = 20;

/// Roles rotated across synthesized members.
const SAMPLE_ROLES: [&str; 5] = ["Developer", "Designer", "Manager", "Analyst", "Coordinator"];

/// Names cycled across synthesized projects.
const PROJECT_NAMES: [&str; 10] = [
    "Website Redesign",
    "Mobile App Development",
    "Data Analytics Platform",
    "Customer Portal",
    "Marketing Campaign",
    "Product Launch",
    "System Integration",
    "User Experience Audit",
    "Security Enhancement",
    "Performance Optimization",
];

/// Member and project counts for a declared company size. Unrecognized
/// sizes get a mid-range default.
fn counts_for_size(size: &str) -> (usize, usize) {
    match size {
        "1-10 employees" => (5, 3),
        "11-50 employees" => (25, 8),
        "51-200 employees" => (120, 15),
        "201-500 employees" => (350, 25),
        "500+ employees" => (750, 40),
        _ => (10, 5),
    }
}

/// A freshly synthesized workspace, ready to install into the store.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleData {
    pub team_members: Vec<TeamMember>,
    pub projects: Vec<Project>,
    pub notifications: Vec<Notification>,
}

/// Synthesize a workspace sized to the profile's company.
pub fn generate_sample_data(profile: &Profile) -> SampleData {
    let sample = generate_with_rng(&mut rand::rng(), profile, Utc::now());
    log::info!(
        "Generated sample workspace for {}: {} members, {} projects",
        profile.business.company,
        sample.team_members.len(),
        sample.projects.len()
    );
    sample
}

fn generate_with_rng(rng: &mut impl Rng, profile: &Profile, now: DateTime<Utc>) -> SampleData {
    let (member_count, project_count) = counts_for_size(&profile.business.size);
    let email_domain = company_email_domain(&profile.business.company);

    let team_members: Vec<TeamMember> = (0..member_count.min(MEMBER_CAP))
        .map(|i| TeamMember {
            id: format!("member-{}", i + 1),
            name: format!("Team Member {}", i + 1),
            email: format!("member{}@{}", i + 1, email_domain),
            role: SAMPLE_ROLES[i % SAMPLE_ROLES.len()].to_string(),
            avatar_url: format!(
                "https://images.unsplash.com/photo-{}?w=100&h=100&fit=crop&crop=face",
                1_500_000_000_000u64 + i as u64
            ),
            join_date: (now - Duration::days(rng.random_range(0..365))).date_naive(),
            status: if rng.random_bool(0.9) {
                MemberStatus::Active
            } else {
                MemberStatus::Inactive
            },
        })
        .collect();

    let projects: Vec<Project> = (0..project_count)
        .map(|i| {
            // First 2-6 members; take() truncates when the roster is smaller.
            let team_size = rng.random_range(2..=6);
            let team_member_ids = team_members
                .iter()
                .take(team_size)
                .map(|m| m.id.clone())
                .collect();

            Project {
                id: format!("project-{}", i + 1),
                name: PROJECT_NAMES[i % PROJECT_NAMES.len()].to_string(),
                description: format!(
                    "Strategic {} project for {}",
                    profile.business.industry.to_lowercase(),
                    profile.business.company
                ),
                status: ProjectStatus::ALL[rng.random_range(0..ProjectStatus::ALL.len())],
                priority: Priority::ALL[rng.random_range(0..Priority::ALL.len())],
                start_date: now - Duration::days(rng.random_range(0..180)),
                end_date: now + Duration::days(rng.random_range(0..180)),
                progress: rng.random_range(0..100),
                team_member_ids,
                budget: 10_000 + rng.random_range(0..100_000),
                spent: 5_000 + rng.random_range(0..50_000),
                tasks: Vec::new(),
                created_at: now,
            }
        })
        .collect();

    let notifications = vec![
        Notification {
            id: "notif-1".to_string(),
            title: "Welcome to your dashboard!".to_string(),
            message: format!("Your {} workspace is ready", profile.business.company),
            kind: NotificationKind::Success,
            read: false,
            created_at: now,
        },
        Notification {
            id: "notif-2".to_string(),
            title: "New team member joined".to_string(),
            message: "A new team member has been added to your workspace".to_string(),
            kind: NotificationKind::Info,
            read: false,
            created_at: now - Duration::hours(1),
        },
    ];

    SampleData {
        team_members,
        projects,
        notifications,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BusinessInfo, PersonalInfo, COMPANY_SIZES, MEMBER_ROLES};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_profile(size: &str) -> Profile {
        Profile {
            personal: PersonalInfo {
                name: "Sarah Chen".to_string(),
                email: "sarah@acme.com".to_string(),
            },
            business: BusinessInfo {
                company: "Acme Corp".to_string(),
                industry: "Technology".to_string(),
                size: size.to_string(),
            },
            preferences: Default::default(),
            onboarding_completed: true,
        }
    }

    fn generate_seeded(seed: u64, size: &str) -> SampleData {
        let mut rng = StdRng::seed_from_u64(seed);
        generate_with_rng(&mut rng, &test_profile(size), Utc::now())
    }

    #[test]
    fn test_counts_scale_with_company_size() {
        let small = generate_seeded(1, "1-10 employees");
        assert_eq!(small.team_members.len(), 5);
        assert_eq!(small.projects.len(), 3);

        let mid = generate_seeded(1, "11-50 employees");
        assert_eq!(mid.team_members.len(), 20); // 25 capped
        assert_eq!(mid.projects.len(), 8);

        let large = generate_seeded(1, "500+ employees");
        assert_eq!(large.team_members.len(), 20);
        assert_eq!(large.projects.len(), 40);
    }

    #[test]
    fn test_unknown_size_gets_default_counts() {
        let data = generate_seeded(1, "enterprise");
        assert_eq!(data.team_members.len(), 10);
        assert_eq!(data.projects.len(), 5);
    }

    #[test]
    fn test_selection_catalogs_cover_the_generator_tables() {
        // Every offered company size has a dedicated count row.
        let fallback = counts_for_size("something else");
        for size in COMPANY_SIZES {
            assert_ne!(counts_for_size(size), fallback, "no counts for {size}");
        }

        // Every synthesized role is one the member form offers.
        for role in SAMPLE_ROLES {
            assert!(MEMBER_ROLES.contains(&role), "{role} missing from member form");
        }
    }

    #[test]
    fn test_member_fields() {
        let data = generate_seeded(2, "11-50 employees");

        let first = &data.team_members[0];
        assert_eq!(first.id, "member-1");
        assert_eq!(first.name, "Team Member 1");
        assert_eq!(first.email, "member1@acmecorp.com");
        assert_eq!(first.role, "Developer");
        assert!(first.avatar_url.contains("photo-1500000000000"));

        // Roles rotate with period 5.
        assert_eq!(data.team_members[4].role, "Coordinator");
        assert_eq!(data.team_members[5].role, "Developer");
    }

    #[test]
    fn test_project_fields() {
        let data = generate_seeded(3, "500+ employees");

        let first = &data.projects[0];
        assert_eq!(first.id, "project-1");
        assert_eq!(first.name, "Website Redesign");
        assert_eq!(
            first.description,
            "Strategic technology project for Acme Corp"
        );
        assert!(first.tasks.is_empty());

        // Names cycle once the list is exhausted.
        assert_eq!(data.projects[10].name, "Website Redesign");

        for project in &data.projects {
            assert!(project.progress < 100);
            assert!((10_000..110_000).contains(&project.budget));
            assert!((5_000..55_000).contains(&project.spent));
            assert!((2..=6).contains(&project.team_member_ids.len()));
        }
    }

    #[test]
    fn test_project_teams_reference_member_ids() {
        let data = generate_seeded(4, "51-200 employees");
        let member_ids: Vec<&str> = data.team_members.iter().map(|m| m.id.as_str()).collect();

        for project in &data.projects {
            for id in &project.team_member_ids {
                assert!(member_ids.contains(&id.as_str()), "unknown member id {id}");
            }
        }
    }

    #[test]
    fn test_small_roster_truncates_project_teams() {
        // 3 members but team sizes are drawn from 2..=6.
        let data = generate_seeded(5, "1-10 employees");
        for project in &data.projects {
            assert!(project.team_member_ids.len() <= data.team_members.len());
        }
    }

    #[test]
    fn test_welcome_notifications() {
        let data = generate_seeded(6, "1-10 employees");
        assert_eq!(data.notifications.len(), 2);

        let welcome = &data.notifications[0];
        assert_eq!(welcome.id, "notif-1");
        assert_eq!(welcome.kind, NotificationKind::Success);
        assert_eq!(welcome.message, "Your Acme Corp workspace is ready");
        assert!(!welcome.read);

        let joined = &data.notifications[1];
        assert_eq!(joined.id, "notif-2");
        assert_eq!(joined.kind, NotificationKind::Info);
        assert!(joined.created_at < welcome.created_at);
    }

    #[test]
    fn test_same_seed_same_workspace() {
        let now = Utc::now();
        let profile = test_profile("11-50 employees");
        let a = generate_with_rng(&mut StdRng::seed_from_u64(7), &profile, now);
        let b = generate_with_rng(&mut StdRng::seed_from_u64(7), &profile, now);
        assert_eq!(a, b);
    }
}
