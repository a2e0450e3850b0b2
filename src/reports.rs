//! Read-only report aggregation over the store's collections.
//!
//! Everything here is pure computation over passed-in slices with an
//! injected `now`, so reports are deterministic and the view layer only
//! has to render rows. Bucketing is done in UTC; the greeting takes the
//! caller's local hour.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

use crate::types::{AppData, MemberStatus, Project, ProjectStatus, TeamMember};
use crate::util::truncate_label;

/// Display labels are capped at this many characters in chart rows.
const LABEL_MAX_CHARS: usize = 15;

/// Reporting window, counted back from `now`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Week,
    Month,
    Quarter,
    Year,
}

impl Timeframe {
    pub const ALL: [Timeframe; 4] = [
        Timeframe::Week,
        Timeframe::Month,
        Timeframe::Quarter,
        Timeframe::Year,
    ];

    /// How far back the window reaches.
    pub fn days_back(&self) -> i64 {
        match self {
            Timeframe::Week => 7,
            Timeframe::Month => 30,
            Timeframe::Quarter => 90,
            Timeframe::Year => 365,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportInput<'a> {
    pub projects: &'a [Project],
    pub team_members: &'a [TeamMember],
    pub timeframe: Timeframe,
    pub now: DateTime<Utc>,
}

/// Project counts by status, over the timeframe-filtered set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub planning: usize,
    pub on_hold: usize,
}

/// Budget totals and mean progress, over the timeframe-filtered set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetStats {
    pub total_budget: u64,
    pub total_spent: u64,
    pub avg_progress: f64,
}

/// Roster counts over the full member collection (members are never
/// filtered by timeframe).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    /// Per-role member counts, alphabetical by role.
    pub roles: BTreeMap<String, usize>,
}

/// One pie slice: a label and its count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSlice {
    pub name: String,
    pub value: usize,
}

/// One bar in the progress chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRow {
    pub name: String,
    pub progress: u8,
    pub budget: u32,
    pub spent: u32,
    pub status: ProjectStatus,
}

/// One bar group in the budget chart. `remaining` goes negative when a
/// project has overspent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetRow {
    pub name: String,
    pub budget: u32,
    pub spent: u32,
    pub remaining: i64,
    pub progress: u8,
}

/// One slice of the role-distribution pie, with its share of the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleShare {
    pub name: String,
    pub value: usize,
    pub percentage: u32,
}

/// One point on the timeline chart: projects created in the bucket's
/// window, with completion and money rollups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineBucket {
    pub name: String,
    pub projects: usize,
    pub completed: usize,
    /// Σ(budget − spent) over the bucket's projects.
    pub revenue: i64,
    pub budget: u64,
}

/// Everything the reports screen renders, computed in one pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub timeframe: Timeframe,
    pub project_stats: ProjectStats,
    pub budget_stats: BudgetStats,
    pub team_stats: TeamStats,
    /// round(completed / total · 100); 0 when the window is empty.
    pub completion_rate: u32,
    /// round(active / roster · 100); 0 when the roster is empty.
    pub active_rate: u32,
    /// Status slices with zero-count rows dropped.
    pub status_distribution: Vec<ChartSlice>,
    /// Active/inactive slices with zero-count rows dropped.
    pub team_status: Vec<ChartSlice>,
    pub progress_rows: Vec<ProgressRow>,
    pub budget_rows: Vec<BudgetRow>,
    pub role_shares: Vec<RoleShare>,
    pub timeline: Vec<TimelineBucket>,
}

/// Build the full report for one timeframe.
///
/// Stats and per-project rows cover projects created inside the window;
/// the timeline buckets the whole collection so older activity still
/// shows as history.
pub fn build_report(input: ReportInput) -> Report {
    let cutoff = input.now - Duration::days(input.timeframe.days_back());
    let filtered: Vec<&Project> = input
        .projects
        .iter()
        .filter(|p| p.created_at >= cutoff)
        .collect();

    let project_stats = project_stats(&filtered);
    let budget_stats = budget_stats(&filtered);
    let team_stats = team_stats(input.team_members);

    let completion_rate = percentage(project_stats.completed, project_stats.total);
    let active_rate = percentage(team_stats.active, team_stats.total);

    let status_distribution = non_zero_slices(&[
        (ProjectStatus::Completed.label(), project_stats.completed),
        (ProjectStatus::InProgress.label(), project_stats.in_progress),
        (ProjectStatus::Planning.label(), project_stats.planning),
        (ProjectStatus::OnHold.label(), project_stats.on_hold),
    ]);
    let team_status = non_zero_slices(&[
        ("Active", team_stats.active),
        ("Inactive", team_stats.inactive),
    ]);

    let progress_rows = filtered
        .iter()
        .map(|p| ProgressRow {
            name: truncate_label(&p.name, LABEL_MAX_CHARS),
            progress: p.progress,
            budget: p.budget,
            spent: p.spent,
            status: p.status,
        })
        .collect();
    let budget_rows = filtered
        .iter()
        .map(|p| BudgetRow {
            name: truncate_label(&p.name, LABEL_MAX_CHARS),
            budget: p.budget,
            spent: p.spent,
            remaining: p.budget as i64 - p.spent as i64,
            progress: p.progress,
        })
        .collect();
    let role_shares = team_stats
        .roles
        .iter()
        .map(|(role, count)| RoleShare {
            name: role.clone(),
            value: *count,
            percentage: percentage(*count, team_stats.total),
        })
        .collect();

    let timeline = timeline(input.projects, input.timeframe, input.now);

    Report {
        timeframe: input.timeframe,
        project_stats,
        budget_stats,
        team_stats,
        completion_rate,
        active_rate,
        status_distribution,
        team_status,
        progress_rows,
        budget_rows,
        role_shares,
        timeline,
    }
}

fn project_stats(projects: &[&Project]) -> ProjectStats {
    let by_status = |status: ProjectStatus| projects.iter().filter(|p| p.status == status).count();
    ProjectStats {
        total: projects.len(),
        completed: by_status(ProjectStatus::Completed),
        in_progress: by_status(ProjectStatus::InProgress),
        planning: by_status(ProjectStatus::Planning),
        on_hold: by_status(ProjectStatus::OnHold),
    }
}

fn budget_stats(projects: &[&Project]) -> BudgetStats {
    let avg_progress = if projects.is_empty() {
        0.0
    } else {
        projects.iter().map(|p| p.progress as f64).sum::<f64>() / projects.len() as f64
    };
    BudgetStats {
        total_budget: projects.iter().map(|p| p.budget as u64).sum(),
        total_spent: projects.iter().map(|p| p.spent as u64).sum(),
        avg_progress,
    }
}

fn team_stats(members: &[TeamMember]) -> TeamStats {
    let mut roles: BTreeMap<String, usize> = BTreeMap::new();
    for member in members {
        *roles.entry(member.role.clone()).or_insert(0) += 1;
    }
    TeamStats {
        total: members.len(),
        active: members
            .iter()
            .filter(|m| m.status == MemberStatus::Active)
            .count(),
        inactive: members
            .iter()
            .filter(|m| m.status == MemberStatus::Inactive)
            .count(),
        roles,
    }
}

fn non_zero_slices(entries: &[(&str, usize)]) -> Vec<ChartSlice> {
    entries
        .iter()
        .filter(|(_, value)| *value > 0)
        .map(|(name, value)| ChartSlice {
            name: (*name).to_string(),
            value: *value,
        })
        .collect()
}

fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u32
}

// =============================================================================
// Timeline bucketing
// =============================================================================

fn timeline(projects: &[Project], timeframe: Timeframe, now: DateTime<Utc>) -> Vec<TimelineBucket> {
    match timeframe {
        Timeframe::Week => daily_buckets(projects, now),
        Timeframe::Month => weekly_buckets(projects, now),
        Timeframe::Quarter => monthly_buckets(projects, now, 3),
        Timeframe::Year => monthly_buckets(projects, now, 12),
    }
}

/// Last 7 calendar days, labeled by short weekday, oldest first.
fn daily_buckets(projects: &[Project], now: DateTime<Utc>) -> Vec<TimelineBucket> {
    (0..7)
        .rev()
        .map(|i| {
            let day = (now - Duration::days(i)).date_naive();
            let matched: Vec<&Project> = projects
                .iter()
                .filter(|p| p.created_at.date_naive() == day)
                .collect();
            bucket(day.format("%a").to_string(), &matched)
        })
        .collect()
}

/// Four trailing 7-day windows ending at `now`, labeled "Week 1" (oldest)
/// through "Week 4".
fn weekly_buckets(projects: &[Project], now: DateTime<Utc>) -> Vec<TimelineBucket> {
    (0..4)
        .rev()
        .map(|i| {
            let start = now - Duration::days((i + 1) * 7);
            let end = now - Duration::days(i * 7);
            let matched: Vec<&Project> = projects
                .iter()
                .filter(|p| p.created_at >= start && p.created_at < end)
                .collect();
            bucket(format!("Week {}", 4 - i), &matched)
        })
        .collect()
}

/// Trailing calendar months including the current one, labeled by short
/// month name, oldest first.
fn monthly_buckets(projects: &[Project], now: DateTime<Utc>, months: i32) -> Vec<TimelineBucket> {
    (0..months)
        .rev()
        .map(|i| {
            let start = month_start(now, i);
            let end = month_start(now, i - 1);
            let matched: Vec<&Project> = projects
                .iter()
                .filter(|p| p.created_at >= start && p.created_at < end)
                .collect();
            bucket(start.format("%b").to_string(), &matched)
        })
        .collect()
}

/// Midnight UTC on the first day of the month `offset_back` months before
/// `now`'s month. Negative offsets reach forward.
fn month_start(now: DateTime<Utc>, offset_back: i32) -> DateTime<Utc> {
    let months = now.year() * 12 + now.month0() as i32 - offset_back;
    let year = months.div_euclid(12);
    let month = months.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1)
        .expect("first day of a month is always valid")
        .and_time(NaiveTime::MIN)
        .and_utc()
}

fn bucket(name: String, projects: &[&Project]) -> TimelineBucket {
    TimelineBucket {
        name,
        projects: projects.len(),
        completed: projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Completed)
            .count(),
        revenue: projects
            .iter()
            .map(|p| p.budget as i64 - p.spent as i64)
            .sum(),
        budget: projects.iter().map(|p| p.budget as u64).sum(),
    }
}

// =============================================================================
// Live dashboard stats
// =============================================================================

/// Header counters on the dashboard landing view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub active_members: usize,
    pub active_projects: usize,
    pub unread_notifications: usize,
}

/// Counters recomputed from the aggregate after every mutation.
pub fn dashboard_stats(data: &AppData) -> DashboardStats {
    DashboardStats {
        active_members: data
            .team_members
            .iter()
            .filter(|m| m.status == MemberStatus::Active)
            .count(),
        active_projects: data
            .projects
            .iter()
            .filter(|p| p.status == ProjectStatus::InProgress)
            .count(),
        unread_notifications: data.notifications.iter().filter(|n| !n.read).count(),
    }
}

/// Salutation for the caller's local hour.
pub fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning"
    } else if hour < 18 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Notification, NotificationKind, Priority};
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 25, 12, 0, 0).unwrap()
    }

    fn project(
        name: &str,
        status: ProjectStatus,
        progress: u8,
        budget: u32,
        spent: u32,
        created_days_ago: i64,
    ) -> Project {
        let now = fixed_now();
        Project {
            id: format!("project-{}", name.to_lowercase().replace(' ', "-")),
            name: name.to_string(),
            description: String::new(),
            status,
            priority: Priority::Medium,
            start_date: now,
            end_date: now,
            progress,
            team_member_ids: Vec::new(),
            budget,
            spent,
            tasks: Vec::new(),
            created_at: now - Duration::days(created_days_ago),
        }
    }

    fn member(name: &str, role: &str, status: MemberStatus) -> TeamMember {
        TeamMember {
            id: format!("member-{}", name.to_lowercase()),
            name: name.to_string(),
            email: format!("{}@acmecorp.com", name.to_lowercase()),
            role: role.to_string(),
            avatar_url: String::new(),
            join_date: fixed_now().date_naive(),
            status,
        }
    }

    fn report_for(
        projects: &[Project],
        members: &[TeamMember],
        timeframe: Timeframe,
    ) -> Report {
        build_report(ReportInput {
            projects,
            team_members: members,
            timeframe,
            now: fixed_now(),
        })
    }

    #[test]
    fn test_timeframe_filters_by_created_at() {
        let projects = vec![
            project("Recent", ProjectStatus::Planning, 0, 10_000, 0, 3),
            project("Older", ProjectStatus::Completed, 100, 20_000, 5_000, 40),
        ];

        let week = report_for(&projects, &[], Timeframe::Week);
        assert_eq!(week.project_stats.total, 1);

        let month = report_for(&projects, &[], Timeframe::Month);
        assert_eq!(month.project_stats.total, 1);

        let quarter = report_for(&projects, &[], Timeframe::Quarter);
        assert_eq!(quarter.project_stats.total, 2);
    }

    #[test]
    fn test_project_and_budget_stats() {
        let projects = vec![
            project("A", ProjectStatus::Completed, 100, 30_000, 10_000, 1),
            project("B", ProjectStatus::InProgress, 50, 20_000, 15_000, 2),
            project("C", ProjectStatus::InProgress, 30, 10_000, 2_000, 3),
            project("D", ProjectStatus::OnHold, 0, 40_000, 0, 4),
        ];
        let report = report_for(&projects, &[], Timeframe::Month);

        assert_eq!(
            report.project_stats,
            ProjectStats {
                total: 4,
                completed: 1,
                in_progress: 2,
                planning: 0,
                on_hold: 1,
            }
        );
        assert_eq!(report.budget_stats.total_budget, 100_000);
        assert_eq!(report.budget_stats.total_spent, 27_000);
        assert_eq!(report.budget_stats.avg_progress, 45.0);
        assert_eq!(report.completion_rate, 25);
    }

    #[test]
    fn test_empty_window_rates_are_zero() {
        let report = report_for(&[], &[], Timeframe::Week);
        assert_eq!(report.completion_rate, 0);
        assert_eq!(report.active_rate, 0);
        assert_eq!(report.budget_stats.avg_progress, 0.0);
        assert!(report.status_distribution.is_empty());
    }

    #[test]
    fn test_status_distribution_drops_zero_rows() {
        let projects = vec![
            project("A", ProjectStatus::Completed, 100, 10_000, 0, 1),
            project("B", ProjectStatus::Planning, 0, 10_000, 0, 1),
        ];
        let report = report_for(&projects, &[], Timeframe::Week);

        let names: Vec<&str> = report
            .status_distribution
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["Completed", "Planning"]);
    }

    #[test]
    fn test_chart_rows_truncate_names_and_allow_overspend() {
        let projects = vec![project(
            "Data Analytics Platform",
            ProjectStatus::InProgress,
            60,
            10_000,
            12_500,
            1,
        )];
        let report = report_for(&projects, &[], Timeframe::Week);

        assert_eq!(report.progress_rows[0].name, "Data Analytics ...");
        assert_eq!(report.budget_rows[0].remaining, -2_500);
    }

    #[test]
    fn test_team_stats_and_role_shares() {
        let members = vec![
            member("Ana", "Developer", MemberStatus::Active),
            member("Ben", "Developer", MemberStatus::Active),
            member("Cam", "Designer", MemberStatus::Inactive),
        ];
        let report = report_for(&[], &members, Timeframe::Month);

        assert_eq!(report.team_stats.total, 3);
        assert_eq!(report.team_stats.active, 2);
        assert_eq!(report.team_stats.inactive, 1);
        assert_eq!(report.active_rate, 67);

        // Alphabetical by role.
        assert_eq!(report.role_shares[0].name, "Designer");
        assert_eq!(report.role_shares[0].percentage, 33);
        assert_eq!(report.role_shares[1].name, "Developer");
        assert_eq!(report.role_shares[1].value, 2);
        assert_eq!(report.role_shares[1].percentage, 67);

        let statuses: Vec<&str> = report.team_status.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(statuses, vec!["Active", "Inactive"]);
    }

    #[test]
    fn test_timeline_bucket_count_per_timeframe() {
        let projects = vec![project("A", ProjectStatus::Planning, 0, 5_000, 0, 1)];
        let lengths: Vec<usize> = Timeframe::ALL
            .iter()
            .map(|&timeframe| report_for(&projects, &[], timeframe).timeline.len())
            .collect();
        // 7 days, 4 weeks, 3 months, 12 months.
        assert_eq!(lengths, vec![7, 4, 3, 12]);
    }

    #[test]
    fn test_week_timeline_buckets_by_calendar_day() {
        let projects = vec![
            project("Today", ProjectStatus::Completed, 100, 8_000, 3_000, 0),
            project("Three days ago", ProjectStatus::Planning, 0, 5_000, 1_000, 3),
            project("Last month", ProjectStatus::Planning, 0, 9_000, 0, 30),
        ];
        let timeline = report_for(&projects, &[], Timeframe::Week).timeline;

        assert_eq!(timeline.len(), 7);
        // 2026-08-25 is a Tuesday; the last bucket is today.
        assert_eq!(timeline[6].name, "Tue");
        assert_eq!(timeline[6].projects, 1);
        assert_eq!(timeline[6].completed, 1);
        assert_eq!(timeline[6].revenue, 5_000);
        assert_eq!(timeline[3].name, "Sat");
        assert_eq!(timeline[3].projects, 1);
        assert_eq!(timeline[3].completed, 0);
        // The 30-day-old project falls outside all seven buckets.
        let total: usize = timeline.iter().map(|b| b.projects).sum();
        assert_eq!(total, 2);
    }

    #[test]
    fn test_month_timeline_uses_trailing_week_windows() {
        let projects = vec![
            project("Fresh", ProjectStatus::Planning, 0, 6_000, 2_000, 2),
            project("Mid", ProjectStatus::Completed, 100, 12_000, 4_000, 10),
            project("Old", ProjectStatus::Planning, 0, 7_000, 0, 26),
        ];
        let timeline = report_for(&projects, &[], Timeframe::Month).timeline;

        let names: Vec<&str> = timeline.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Week 1", "Week 2", "Week 3", "Week 4"]);
        assert_eq!(timeline[3].projects, 1); // 2 days ago
        assert_eq!(timeline[2].projects, 1); // 10 days ago
        assert_eq!(timeline[2].completed, 1);
        assert_eq!(timeline[0].projects, 1); // 26 days ago
        assert_eq!(timeline[0].budget, 7_000);
    }

    #[test]
    fn test_quarter_timeline_labels_calendar_months() {
        let projects = vec![
            project("August", ProjectStatus::Planning, 0, 5_000, 0, 20),
            project("July", ProjectStatus::Completed, 100, 8_000, 2_000, 40),
        ];
        let timeline = report_for(&projects, &[], Timeframe::Quarter).timeline;

        let names: Vec<&str> = timeline.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Jun", "Jul", "Aug"]);
        assert_eq!(timeline[2].projects, 1); // Aug 5
        assert_eq!(timeline[1].projects, 1); // Jul 16
        assert_eq!(timeline[1].completed, 1);
        assert_eq!(timeline[0].projects, 0);
    }

    #[test]
    fn test_year_timeline_crosses_year_boundary() {
        let projects = vec![
            // 300 days before 2026-08-25 lands in Oct 2025.
            project("Last year", ProjectStatus::Planning, 0, 5_000, 0, 300),
        ];
        let timeline = report_for(&projects, &[], Timeframe::Year).timeline;

        assert_eq!(timeline.len(), 12);
        assert_eq!(timeline[0].name, "Sep");
        assert_eq!(timeline[11].name, "Aug");
        let oct = timeline.iter().find(|b| b.name == "Oct").unwrap();
        assert_eq!(oct.projects, 1);
    }

    #[test]
    fn test_month_start_arithmetic() {
        let now = fixed_now();
        assert_eq!(
            month_start(now, 0).date_naive(),
            NaiveDate::from_ymd_opt(2026, 8, 1).unwrap()
        );
        assert_eq!(
            month_start(now, 8).date_naive(),
            NaiveDate::from_ymd_opt(2025, 12, 1).unwrap()
        );
        assert_eq!(
            month_start(now, -1).date_naive(),
            NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
        );
    }

    #[test]
    fn test_dashboard_stats_count_live_state() {
        let mut data = AppData::default();
        data.team_members = vec![
            member("Ana", "Developer", MemberStatus::Active),
            member("Ben", "Manager", MemberStatus::Inactive),
        ];
        data.projects = vec![
            project("A", ProjectStatus::InProgress, 10, 1_000, 0, 1),
            project("B", ProjectStatus::Completed, 100, 1_000, 0, 1),
        ];
        data.notifications = vec![
            Notification::create("Unread", "", NotificationKind::Info),
            Notification {
                read: true,
                ..Notification::create("Read", "", NotificationKind::Info)
            },
        ];

        assert_eq!(
            dashboard_stats(&data),
            DashboardStats {
                active_members: 1,
                active_projects: 1,
                unread_notifications: 1,
            }
        );
    }

    #[test]
    fn test_greeting_by_hour() {
        assert_eq!(greeting(0), "Good morning");
        assert_eq!(greeting(11), "Good morning");
        assert_eq!(greeting(12), "Good afternoon");
        assert_eq!(greeting(17), "Good afternoon");
        assert_eq!(greeting(18), "Good evening");
        assert_eq!(greeting(23), "Good evening");
    }
}
