//! Back-office fixtures: accounts, moderation queues, courses, roles,
//! settings and dashboard figures.

use time::macros::{date, datetime};

use super::{AVATAR_ALEX, AVATAR_JOHN, AVATAR_SARAH, strings};
use crate::net::types::{Author, UserRole};
use crate::state::admin::content::{ContentItem, ContentKind, ContentStats, ParentRef};
use crate::state::admin::courses::{Course, CourseLevel, CourseStats, Feedback, Instructor, SyllabusSection};
use crate::state::admin::dashboard::{
    Analytics, Chart, ChartPoint, CountryStat, DeviceShare, FeedEntry, FeedKind, Growth,
};
use crate::state::admin::messages::{ChatThread, LastMessage, ThreadReport};
use crate::state::admin::projects::{ManagedProject, RepoStats};
use crate::state::admin::roles::{Permission, PermissionCategory, Role};
use crate::state::admin::settings::{
    Branding, DigestFrequency, EmailSettings, EmailTemplates, LocalizationSettings, MaintenanceSettings,
    NotificationSettings, PasswordPolicy, PolicySettings, SecuritySettings, SystemSettings, TimeFormat,
};
use crate::state::admin::users::{
    AccountEvent, AccountEventKind, AccountStats, ManagedUser, Verification, VerificationDocument,
};
use crate::state::admin::{Links, Report};
use crate::state::moderation::{
    ContentStatus, CourseStatus, DocumentStatus, ProjectStatus, ReportStatus, ThreadStatus, UserStatus,
};
use crate::state::projects::Member;

fn author(id: &str, name: &str, avatar: &str) -> Author {
    Author { id: id.to_owned(), name: name.to_owned(), avatar: avatar.to_owned() }
}

fn member(id: &str, name: &str, avatar: &str, role: &str) -> Member {
    Member { id: id.to_owned(), name: name.to_owned(), avatar: avatar.to_owned(), role: role.to_owned() }
}

/// Creator stamped on records made from the back office.
#[must_use]
pub fn admin_author() -> Author {
    author("1", "Admin", AVATAR_JOHN)
}

// =============================================================================
// USERS
// =============================================================================

fn id_document(status: DocumentStatus, submitted_at: time::Date) -> VerificationDocument {
    VerificationDocument { name: "ID Verification".to_owned(), status, submitted_at }
}

#[must_use]
pub fn users() -> Vec<ManagedUser> {
    vec![
        ManagedUser {
            id: "1".to_owned(),
            name: "Sarah Connor".to_owned(),
            email: "sarah@example.com".to_owned(),
            avatar: AVATAR_SARAH.to_owned(),
            role: UserRole::Admin,
            status: UserStatus::Active,
            joined_at: date!(2024-01-01),
            location: "San Francisco, CA".to_owned(),
            skills: strings(&["React", "TypeScript", "Node.js"]),
            verified: true,
            verification: Some(Verification {
                id_card: true,
                linkedin: true,
                documents: vec![id_document(DocumentStatus::Approved, date!(2024-01-02))],
            }),
            stats: AccountStats { projects: 12, discussions: 45, connections: 89 },
            activity: vec![AccountEvent {
                kind: AccountEventKind::Login,
                description: "Logged in from new device".to_owned(),
                timestamp: datetime!(2024-03-20 10:30 UTC),
            }],
        },
        ManagedUser {
            id: "2".to_owned(),
            name: "John Matrix".to_owned(),
            email: "john@example.com".to_owned(),
            avatar: AVATAR_JOHN.to_owned(),
            role: UserRole::Mod,
            status: UserStatus::Active,
            joined_at: date!(2024-01-15),
            location: "New York, NY".to_owned(),
            skills: strings(&["Python", "Machine Learning"]),
            verified: true,
            verification: Some(Verification {
                id_card: true,
                linkedin: true,
                documents: vec![id_document(DocumentStatus::Approved, date!(2024-01-16))],
            }),
            stats: AccountStats { projects: 5, discussions: 23, connections: 45 },
            activity: vec![AccountEvent {
                kind: AccountEventKind::Project,
                description: "Created new project: AI Image Generator".to_owned(),
                timestamp: datetime!(2024-03-19 15:45 UTC),
            }],
        },
        ManagedUser {
            id: "3".to_owned(),
            name: "Alex Murphy".to_owned(),
            email: "alex@example.com".to_owned(),
            avatar: AVATAR_ALEX.to_owned(),
            role: UserRole::User,
            status: UserStatus::Pending,
            joined_at: date!(2024-03-01),
            location: "London, UK".to_owned(),
            skills: strings(&["Java", "Spring Boot"]),
            verified: false,
            verification: Some(Verification {
                id_card: false,
                linkedin: true,
                documents: vec![id_document(DocumentStatus::Pending, date!(2024-03-02))],
            }),
            stats: AccountStats { projects: 2, discussions: 8, connections: 12 },
            activity: vec![AccountEvent {
                kind: AccountEventKind::Discussion,
                description: "Posted in: JavaScript Best Practices".to_owned(),
                timestamp: datetime!(2024-03-18 09:30 UTC),
            }],
        },
    ]
}

// =============================================================================
// PROJECTS
// =============================================================================

#[must_use]
pub fn projects() -> Vec<ManagedProject> {
    vec![
        ManagedProject {
            id: "1".to_owned(),
            title: "Neural Interface SDK".to_owned(),
            description: "A comprehensive software development kit for building neural interface applications"
                .to_owned(),
            creator: author("1", "Sarah Connor", AVATAR_SARAH),
            status: ProjectStatus::Active,
            created_at: date!(2024-01-15),
            last_updated: date!(2024-03-20),
            category: "AI & ML".to_owned(),
            tags: strings(&["Neural Networks", "SDK", "TypeScript"]),
            members: vec![
                member("1", "Sarah Connor", AVATAR_SARAH, "Owner"),
                member("2", "John Matrix", AVATAR_JOHN, "Developer"),
            ],
            stats: RepoStats { stars: 128, forks: 45, issues: 12, discussions: 34 },
            reports: Vec::new(),
            links: Links {
                github: Some("https://github.com/example/neural-sdk".to_owned()),
                website: Some("https://neural-sdk.dev".to_owned()),
                documentation: Some("https://docs.neural-sdk.dev".to_owned()),
            },
            thumbnail: None,
        },
        ManagedProject {
            id: "2".to_owned(),
            title: "Quantum Encryption Library".to_owned(),
            description: "Advanced quantum encryption protocols for secure communication".to_owned(),
            creator: author("2", "John Matrix", AVATAR_JOHN),
            status: ProjectStatus::Reported,
            created_at: date!(2024-02-01),
            last_updated: date!(2024-03-19),
            category: "Cybersecurity".to_owned(),
            tags: strings(&["Quantum", "Encryption", "Security"]),
            members: vec![member("2", "John Matrix", AVATAR_JOHN, "Owner")],
            stats: RepoStats { stars: 76, forks: 23, issues: 8, discussions: 15 },
            reports: vec![Report {
                id: "1".to_owned(),
                reason: "Potential security vulnerability".to_owned(),
                description: "The encryption implementation might have a weakness in...".to_owned(),
                reported_by: author("", "Alex Murphy", AVATAR_ALEX),
                submitted_at: date!(2024-03-19),
                status: ReportStatus::Pending,
            }],
            links: Links { github: Some("https://github.com/example/quantum-encryption".to_owned()), ..Links::default() },
            thumbnail: None,
        },
    ]
}

// =============================================================================
// CONTENT
// =============================================================================

#[must_use]
pub fn content() -> Vec<ContentItem> {
    vec![
        ContentItem {
            id: "1".to_owned(),
            kind: ContentKind::Discussion,
            title: Some("Neural Networks Evolution".to_owned()),
            body: "The field of neural networks has seen remarkable progress in recent years...".to_owned(),
            author: author("1", "Sarah Connor", AVATAR_SARAH),
            created_at: date!(2024-03-15),
            status: ContentStatus::Active,
            category: Some("AI & ML".to_owned()),
            tags: strings(&["Neural Networks", "Deep Learning", "AI"]),
            stats: ContentStats { views: Some(1234), likes: 89, replies: 45 },
            reports: Vec::new(),
            parent: None,
        },
        ContentItem {
            id: "2".to_owned(),
            kind: ContentKind::Post,
            title: None,
            body: "This content contains inappropriate language and spam links...".to_owned(),
            author: author("2", "John Matrix", AVATAR_JOHN),
            created_at: date!(2024-03-19),
            status: ContentStatus::Flagged,
            category: None,
            tags: Vec::new(),
            stats: ContentStats { views: None, likes: 2, replies: 8 },
            reports: vec![Report {
                id: "1".to_owned(),
                reason: "Spam content".to_owned(),
                description: "This post contains multiple spam links and inappropriate language".to_owned(),
                reported_by: author("", "Alex Murphy", AVATAR_ALEX),
                submitted_at: date!(2024-03-19),
                status: ReportStatus::Pending,
            }],
            parent: Some(ParentRef {
                id: "1".to_owned(),
                title: "Neural Networks Evolution".to_owned(),
                kind: ContentKind::Discussion,
            }),
        },
    ]
}

// =============================================================================
// COURSES
// =============================================================================

fn section(title: &str, duration: &str, topics: &[&str]) -> SyllabusSection {
    SyllabusSection { title: title.to_owned(), duration: duration.to_owned(), topics: strings(topics) }
}

#[must_use]
pub fn courses() -> Vec<Course> {
    vec![
        Course {
            id: "1".to_owned(),
            title: "Advanced React Development".to_owned(),
            description: "Master modern React patterns and best practices with hands-on projects.".to_owned(),
            instructor: Instructor { author: author("1", "Sarah Chen", AVATAR_SARAH), verified: true },
            category: "Web Development".to_owned(),
            status: CourseStatus::Active,
            created_at: date!(2024-01-15),
            last_updated: date!(2024-02-01),
            tags: strings(&["React", "JavaScript", "Frontend"]),
            members: vec![member("101", "Alex Johnson", AVATAR_ALEX, "student")],
            stats: CourseStats { students: 156, lessons: 24, completion_rate: 78, rating: 4.8 },
            feedback: vec![Feedback {
                id: "201".to_owned(),
                user: author("", "Michael Smith", AVATAR_JOHN),
                content: "Excellent course structure and content depth.".to_owned(),
                rating: 5,
                submitted_at: date!(2024-01-20),
            }],
            links: Links {
                github: Some("https://github.com/example/react-course".to_owned()),
                website: Some("https://reactcourse.dev".to_owned()),
                documentation: Some("https://docs.reactcourse.dev".to_owned()),
            },
            thumbnail: Some("https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=400&fit=crop".to_owned()),
            duration: "12 weeks".to_owned(),
            level: CourseLevel::Advanced,
            prerequisites: strings(&["JavaScript fundamentals", "Basic React knowledge"]),
            syllabus: vec![
                section("React Fundamentals Review", "2 weeks", &[
                    "Component lifecycle",
                    "Hooks deep dive",
                    "State management",
                ]),
                section("Advanced Patterns", "3 weeks", &["HOCs", "Render props", "Custom hooks"]),
            ],
        },
        Course {
            id: "2".to_owned(),
            title: "Full Stack Development with Node.js".to_owned(),
            description: "Build scalable web applications with Node.js, Express, and MongoDB.".to_owned(),
            instructor: Instructor { author: author("2", "David Kumar", AVATAR_ALEX), verified: true },
            category: "Backend Development".to_owned(),
            status: CourseStatus::Pending,
            created_at: date!(2024-01-20),
            last_updated: date!(2024-01-20),
            tags: strings(&["Node.js", "Express", "MongoDB"]),
            members: Vec::new(),
            stats: CourseStats { students: 0, lessons: 18, completion_rate: 0, rating: 0.0 },
            feedback: Vec::new(),
            links: Links { github: Some("https://github.com/example/node-course".to_owned()), ..Links::default() },
            thumbnail: Some("https://images.unsplash.com/photo-1627398242454-45a1465c2479?w=400&fit=crop".to_owned()),
            duration: "10 weeks".to_owned(),
            level: CourseLevel::Intermediate,
            prerequisites: strings(&["JavaScript basics", "Web development fundamentals"]),
            syllabus: vec![section("Node.js Basics", "2 weeks", &["Event loop", "Modules", "File system"])],
        },
    ]
}

// =============================================================================
// MESSAGE THREADS
// =============================================================================

#[must_use]
pub fn threads() -> Vec<ChatThread> {
    vec![
        ChatThread {
            id: "1".to_owned(),
            participants: vec![author("1", "John Matrix", AVATAR_JOHN), author("2", "Sarah Connor", AVATAR_SARAH)],
            last_message: LastMessage {
                content: "Thanks for the help with the project!".to_owned(),
                timestamp: datetime!(2024-03-20 10:30 UTC),
                sender_id: "1".to_owned(),
            },
            status: ThreadStatus::Active,
            message_count: 24,
            reports: Vec::new(),
        },
        ChatThread {
            id: "2".to_owned(),
            participants: vec![author("3", "Alex Murphy", AVATAR_ALEX), author("4", "Ellen Ripley", AVATAR_SARAH)],
            last_message: LastMessage {
                content: "This message contains inappropriate content".to_owned(),
                timestamp: datetime!(2024-03-19 15:45 UTC),
                sender_id: "3".to_owned(),
            },
            status: ThreadStatus::Reported,
            message_count: 12,
            reports: vec![ThreadReport {
                reason: "Inappropriate content".to_owned(),
                reported_by: "Ellen Ripley".to_owned(),
                timestamp: datetime!(2024-03-19 15:46 UTC),
            }],
        },
    ]
}

// =============================================================================
// ROLES
// =============================================================================

#[must_use]
pub fn permissions() -> Vec<Permission> {
    use PermissionCategory::{Content, Projects, System, Users};
    let p = |id, name, description, category| Permission { id, name, description, category };
    vec![
        p("user_view", "View Users", "Can view user profiles and information", Users),
        p("user_manage", "Manage Users", "Can edit user information and manage accounts", Users),
        p("user_delete", "Delete Users", "Can delete user accounts", Users),
        p("project_view", "View Projects", "Can view all projects", Projects),
        p("project_manage", "Manage Projects", "Can edit and manage projects", Projects),
        p("project_delete", "Delete Projects", "Can delete projects", Projects),
        p("content_view", "View Content", "Can view all content", Content),
        p("content_manage", "Manage Content", "Can edit and manage content", Content),
        p("content_delete", "Delete Content", "Can delete content", Content),
        p("system_settings", "System Settings", "Can modify system settings", System),
        p("system_logs", "View System Logs", "Can view system logs and activity", System),
    ]
}

#[must_use]
pub fn roles() -> Vec<Role> {
    vec![
        Role {
            id: "1".to_owned(),
            name: "Administrator".to_owned(),
            description: "Full system access and control".to_owned(),
            permissions: permissions().into_iter().map(|p| p.id.to_owned()).collect(),
            users: 3,
            created_at: date!(2024-01-01),
            updated_at: date!(2024-03-20),
        },
        Role {
            id: "2".to_owned(),
            name: "Moderator".to_owned(),
            description: "Content management and moderation".to_owned(),
            permissions: strings(&["user_view", "content_view", "content_manage", "content_delete"]),
            users: 8,
            created_at: date!(2024-01-15),
            updated_at: date!(2024-03-19),
        },
        Role {
            id: "3".to_owned(),
            name: "Project Manager".to_owned(),
            description: "Project oversight and management".to_owned(),
            permissions: strings(&["project_view", "project_manage", "user_view"]),
            users: 12,
            created_at: date!(2024-02-01),
            updated_at: date!(2024-03-18),
        },
    ]
}

// =============================================================================
// SETTINGS
// =============================================================================

#[must_use]
pub fn system_settings() -> SystemSettings {
    SystemSettings {
        branding: Branding {
            site_name: "CYBER_NET".to_owned(),
            logo: "/logo.svg".to_owned(),
            primary_color: "#0ff".to_owned(),
            secondary_color: "#b026ff".to_owned(),
            dark_mode: true,
        },
        email: EmailSettings {
            provider: "SendGrid".to_owned(),
            from_email: "noreply@cybernet.dev".to_owned(),
            from_name: "CYBER_NET".to_owned(),
            templates: EmailTemplates { welcome: true, verification: true, password_reset: true, notification: true },
        },
        security: SecuritySettings {
            two_factor_auth: true,
            password_policy: PasswordPolicy {
                min_length: 12,
                require_numbers: true,
                require_symbols: true,
                require_uppercase: true,
            },
            session_timeout: 30,
            max_login_attempts: 5,
        },
        notifications: NotificationSettings {
            email: true,
            in_app: true,
            desktop: true,
            digest: DigestFrequency::Daily,
        },
        maintenance: MaintenanceSettings {
            enabled: false,
            message: "System maintenance in progress. Please check back later.".to_owned(),
            scheduled_start: Some(datetime!(2024-04-01 02:00 UTC)),
            scheduled_end: Some(datetime!(2024-04-01 04:00 UTC)),
        },
        localization: LocalizationSettings {
            default_language: "en".to_owned(),
            available_languages: strings(&["en", "es", "fr", "de", "ja"]),
            date_format: "MM/DD/YYYY".to_owned(),
            time_format: TimeFormat::TwentyFourHour,
            timezone: "UTC".to_owned(),
        },
        privacy: PolicySettings {
            terms_last_updated: date!(2024-01-01),
            privacy_policy_last_updated: date!(2024-01-01),
            cookie_consent: true,
            data_retention: 90,
        },
    }
}

// =============================================================================
// DASHBOARD
// =============================================================================

#[must_use]
pub fn analytics() -> Analytics {
    let country = |country: &str, users| CountryStat { country: country.to_owned(), users };
    Analytics {
        total_users: 12_543,
        total_projects: 892,
        total_posts: 2_341,
        total_courses: 156,
        growth: Growth { users: 12.5, projects: 8.3, posts: 15.2, courses: 5.7 },
        daily_active_users: 2_345,
        monthly_active_users: 8_765,
        devices: DeviceShare { desktop: 65, mobile: 30, tablet: 5 },
        countries: vec![
            country("United States", 4_521),
            country("India", 2_341),
            country("United Kingdom", 1_234),
            country("Germany", 987),
            country("Canada", 876),
        ],
        recent_activity: vec![
            FeedEntry {
                kind: FeedKind::User,
                action: "New user registered".to_owned(),
                details: "John Doe joined the platform".to_owned(),
                timestamp: datetime!(2024-03-20 10:30 UTC),
            },
            FeedEntry {
                kind: FeedKind::Project,
                action: "New project created".to_owned(),
                details: "AI Image Generator Project".to_owned(),
                timestamp: datetime!(2024-03-20 09:45 UTC),
            },
            FeedEntry {
                kind: FeedKind::Report,
                action: "Content reported".to_owned(),
                details: "Spam content in Forum post #123".to_owned(),
                timestamp: datetime!(2024-03-20 09:30 UTC),
            },
        ],
    }
}

fn chart(title: &str, series: &[&str], rows: &[(&str, &[u32])]) -> Chart {
    Chart {
        title: title.to_owned(),
        series: strings(series),
        points: rows.iter().map(|(label, values)| ChartPoint { label: (*label).to_owned(), values: values.to_vec() }).collect(),
    }
}

/// User activity, project status, content engagement and course progress.
#[must_use]
pub fn charts() -> Vec<Chart> {
    vec![
        chart("User Activity", &["Active", "New"], &[
            ("Jan", &[4000, 2400]),
            ("Feb", &[3000, 1398]),
            ("Mar", &[2000, 9800]),
            ("Apr", &[2780, 3908]),
            ("May", &[1890, 4800]),
            ("Jun", &[2390, 3800]),
        ]),
        chart("Project Status", &["Projects"], &[
            ("Active", &[400]),
            ("Completed", &[300]),
            ("On Hold", &[200]),
            ("Cancelled", &[100]),
        ]),
        chart("Content Engagement", &["Posts", "Comments", "Likes"], &[
            ("Mon", &[20, 40, 60]),
            ("Tue", &[30, 45, 80]),
            ("Wed", &[25, 55, 70]),
            ("Thu", &[40, 60, 90]),
            ("Fri", &[35, 50, 85]),
        ]),
        chart("Course Progress", &["Students", "Completion %"], &[
            ("Week 1", &[400, 80]),
            ("Week 2", &[350, 75]),
            ("Week 3", &[300, 70]),
            ("Week 4", &[280, 65]),
        ]),
    ]
}
