//! Mock profile dashboard.

use time::macros::{date, datetime};

use super::{AVATAR_ALEX, AVATAR_JOHN, AVATAR_SARAH};
use crate::net::types::Author;
use crate::state::profile::{Achievement, Activity, ActivityKind, DashboardStats, OverviewStatus, ProjectOverview};

#[must_use]
pub fn stats() -> DashboardStats {
    DashboardStats {
        projects: 12,
        active_projects: 5,
        completed_projects: 7,
        discussions: 156,
        contributions: 342,
        connections: 89,
    }
}

#[must_use]
pub fn activity() -> Vec<Activity> {
    vec![
        Activity {
            id: "1".to_owned(),
            kind: ActivityKind::Project,
            title: "Neural Interface SDK".to_owned(),
            description: "Added new feature for real-time data processing".to_owned(),
            timestamp: datetime!(2024-03-20 10:30 UTC),
            link: Some("/projects/1".to_owned()),
        },
        Activity {
            id: "2".to_owned(),
            kind: ActivityKind::Discussion,
            title: "AI Ethics Discussion".to_owned(),
            description: "Started a new discussion about AI ethics".to_owned(),
            timestamp: datetime!(2024-03-19 15:45 UTC),
            link: Some("/forum/1".to_owned()),
        },
        Activity {
            id: "3".to_owned(),
            kind: ActivityKind::Connection,
            title: "New Connection".to_owned(),
            description: "Connected with Alice Johnson".to_owned(),
            timestamp: datetime!(2024-03-18 09:15 UTC),
            link: None,
        },
    ]
}

fn teammate(name: &str, avatar: &str) -> Author {
    Author { id: String::new(), name: name.to_owned(), avatar: avatar.to_owned() }
}

#[must_use]
pub fn projects() -> Vec<ProjectOverview> {
    vec![
        ProjectOverview {
            id: "1".to_owned(),
            name: "Neural Interface SDK".to_owned(),
            role: "Lead Developer".to_owned(),
            progress: 65,
            status: OverviewStatus::Active,
            last_activity: datetime!(2024-03-20 10:30 UTC),
            team: vec![teammate("Alice Johnson", AVATAR_SARAH), teammate("Bob Smith", AVATAR_JOHN)],
        },
        ProjectOverview {
            id: "2".to_owned(),
            name: "Quantum Encryption".to_owned(),
            role: "Developer".to_owned(),
            progress: 30,
            status: OverviewStatus::Active,
            last_activity: datetime!(2024-03-19 14:20 UTC),
            team: vec![teammate("Charlie Brown", AVATAR_ALEX)],
        },
    ]
}

#[must_use]
pub fn achievements() -> Vec<Achievement> {
    vec![
        Achievement {
            id: "1".to_owned(),
            title: "Project Master".to_owned(),
            description: "Completed 10 projects".to_owned(),
            earned_at: date!(2024-03-15),
            progress: Some((7, 10)),
        },
        Achievement {
            id: "2".to_owned(),
            title: "Community Leader".to_owned(),
            description: "Started 5 active discussions".to_owned(),
            earned_at: date!(2024-03-10),
            progress: Some((3, 5)),
        },
        Achievement {
            id: "3".to_owned(),
            title: "Network Builder".to_owned(),
            description: "Connected with 50 professionals".to_owned(),
            earned_at: date!(2024-03-05),
            progress: Some((89, 50)),
        },
    ]
}
